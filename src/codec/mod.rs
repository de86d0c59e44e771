//! Pulse codecs: turning buffer bytes into timed pulses on the data line
//!
//! Every bit is a high pulse followed by a low pulse with a fixed total
//! period. A 1 bit holds high longer than a 0 bit. The exact widths come
//! from the device datasheets and must be met within roughly ±150 ns; the
//! chain never acknowledges anything, so a timing miss cannot be detected.
//!
//! Codecs are strategies selected when the strip is built. [`BitBangCodec`]
//! drives a GPIO directly with cycle-counted delays; other platforms can
//! plug in anything that honours the same contract.

mod bitbang;
mod hal;

pub use bitbang::{BitBangCodec, CycleDelay, DataLine};
#[cfg(feature = "cortex-m")]
pub use hal::CortexMDelay;
pub use hal::HalLine;

use crate::error::{Error, Result};
use crate::order::Speed;

/// Emits buffer bytes onto the wire, most significant bit first
///
/// `transmit` is open loop and must not be interrupted: the caller wraps it
/// in a critical section. Stopping partway leaves the chain half-written
/// until the next full frame.
pub trait PulseCodec {
    /// Speed variant the pulse table was built for
    fn speed(&self) -> Speed;

    /// Configure the data line as an output, idle low
    fn claim(&mut self);

    /// Return the data line to a high-impedance input
    fn release(&mut self);

    /// Send every byte as 8 pulses, back to back
    fn transmit(&mut self, bytes: &[u8]);
}

/// CPU clock ranges with a calibrated timing table
///
/// The ranges allow for close-but-not-exact crystals (a 16.5 MHz DigiSpark
/// still counts as 16 MHz). They follow the datasheet tolerances and are
/// least tested near their edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockBand {
    /// 7.4 to 9.5 MHz
    Mhz8,
    /// 15.4 to 19 MHz
    Mhz16,
}

impl ClockBand {
    pub const fn from_hz(cpu_hz: u32) -> Result<Self> {
        match cpu_hz {
            7_400_000..=9_500_000 => Ok(Self::Mhz8),
            15_400_000..=19_000_000 => Ok(Self::Mhz16),
            _ => Err(Error::UnsupportedClock { cpu_hz }),
        }
    }
}

/// Pulse widths in CPU cycles
///
/// A bit starts high, drops at `zero_high` for a 0, drops at `one_high` for
/// a 1, and the next bit starts at `period`. WS2811 and WS2812 duty cycles
/// differ, so the 400 kHz tables are not just the 800 kHz ones doubled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseTiming {
    pub zero_high: u32,
    pub one_high: u32,
    pub period: u32,
}

impl PulseTiming {
    // 8 MHz, 800 kHz: HHxxxxxLLL
    const MHZ8_KHZ800: Self = Self::new(2, 7, 10);
    // 8 MHz, 400 kHz: HHHHxxxxxxLLLLLLLLLL
    const MHZ8_KHZ400: Self = Self::new(4, 10, 20);
    // 16 MHz, 800 kHz: HHHHHxxxxxxxxLLLLLLL
    const MHZ16_KHZ800: Self = Self::new(5, 13, 20);
    // 16 MHz, 400 kHz: 8 high, 12 data, 20 low
    const MHZ16_KHZ400: Self = Self::new(8, 20, 40);

    const fn new(zero_high: u32, one_high: u32, period: u32) -> Self {
        Self {
            zero_high,
            one_high,
            period,
        }
    }

    /// Timing table for a clock band and speed variant
    pub const fn for_band(band: ClockBand, speed: Speed) -> Self {
        match (band, speed) {
            (ClockBand::Mhz8, Speed::Khz800) => Self::MHZ8_KHZ800,
            (ClockBand::Mhz8, Speed::Khz400) => Self::MHZ8_KHZ400,
            (ClockBand::Mhz16, Speed::Khz800) => Self::MHZ16_KHZ800,
            (ClockBand::Mhz16, Speed::Khz400) => Self::MHZ16_KHZ400,
        }
    }

    /// Timing table for a CPU clock, or an error when no table fits
    pub const fn resolve(cpu_hz: u32, speed: Speed) -> Result<Self> {
        match ClockBand::from_hz(cpu_hz) {
            Ok(band) => Ok(Self::for_band(band, speed)),
            Err(err) => Err(err),
        }
    }

    /// Like [`resolve`](Self::resolve), for `const` items
    ///
    /// Evaluated in a `const`, an unsupported clock fails the build instead
    /// of emitting pulses outside the datasheet tolerance:
    ///
    /// ```
    /// use myrtio_neopixel::{PulseTiming, Speed};
    ///
    /// const TIMING: PulseTiming = PulseTiming::supported(16_000_000, Speed::Khz800);
    /// assert_eq!(TIMING.period, 20);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `cpu_hz` is outside every supported clock band.
    pub const fn supported(cpu_hz: u32, speed: Speed) -> Self {
        match Self::resolve(cpu_hz, speed) {
            Ok(timing) => timing,
            Err(_) => panic!("CPU clock not supported for bit-banged pixel output"),
        }
    }

    /// High time for a bit value
    pub const fn high_cycles(&self, bit: bool) -> u32 {
        if bit { self.one_high } else { self.zero_high }
    }
}
