use super::{PulseCodec, PulseTiming};
use crate::error::Result;
use crate::order::Speed;

/// Direct bit-level control of one output line
///
/// Implementations should be the platform's lowest-latency GPIO write
/// (a single port register store on AVR). Nothing here may block.
///
/// `WRITE_CYCLES` is what one `set_high`/`set_low`/`write` costs on the
/// target, in CPU cycles. It is taken out of the pulse budgets so that the
/// line changes level on the cycle the timing table asks for.
pub trait DataLine {
    const WRITE_CYCLES: u32 = 0;

    /// Switch the line to output, driven low
    fn configure_output(&mut self);

    /// Switch the line back to a high-impedance input
    fn release(&mut self);

    fn set_high(&mut self);

    fn set_low(&mut self);

    #[inline(always)]
    fn write(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

/// Busy-wait for a number of CPU cycles
///
/// `OVERHEAD_CYCLES` is the fixed cost of one `delay_cycles` call (call,
/// loop setup, plus the bit loop bookkeeping around it) on top of the
/// requested count.
pub trait CycleDelay {
    const OVERHEAD_CYCLES: u32 = 0;

    fn delay_cycles(&mut self, cycles: u32);
}

/// Bit-banged codec for one data line
///
/// Each bit costs three line writes at fixed offsets so that zeros and ones
/// take the same number of cycles:
///
/// ```text
/// cycle 0          zero_high        one_high         period
///   | set high       | write bit      | set low        |
/// ```
///
/// The table counts whole instruction slots, line writes included. The
/// three busy-wait lengths are derived once at construction by taking
/// `L::WRITE_CYCLES + D::OVERHEAD_CYCLES` out of each interval, so
/// `transmit` never branches on clock or speed. An interval shorter than
/// that cost gets no busy-wait at all.
pub struct BitBangCodec<L: DataLine, D: CycleDelay> {
    line: L,
    delay: D,
    speed: Speed,
    timing: PulseTiming,
    waits: [u32; 3],
}

impl<L: DataLine, D: CycleDelay> BitBangCodec<L, D> {
    /// Create a codec with an explicit timing table for `speed`
    pub const fn new(line: L, delay: D, speed: Speed, timing: PulseTiming) -> Self {
        Self {
            line,
            delay,
            speed,
            timing,
            waits: Self::waits(timing),
        }
    }

    /// Create a codec calibrated for `cpu_hz`
    ///
    /// Fails with [`Error::UnsupportedClock`](crate::Error::UnsupportedClock)
    /// when no timing table covers the clock.
    pub fn for_clock(line: L, delay: D, cpu_hz: u32, speed: Speed) -> Result<Self> {
        let timing = PulseTiming::resolve(cpu_hz, speed)?;
        Ok(Self::new(line, delay, speed, timing))
    }

    pub const fn timing(&self) -> PulseTiming {
        self.timing
    }

    /// Busy-wait cycles after the rise, after the data write and after the
    /// fall
    pub const fn wait_cycles(&self) -> [u32; 3] {
        self.waits
    }

    /// Give back the line and delay
    pub fn into_parts(self) -> (L, D) {
        (self.line, self.delay)
    }

    const fn waits(timing: PulseTiming) -> [u32; 3] {
        let cost = L::WRITE_CYCLES + D::OVERHEAD_CYCLES;
        [
            timing.zero_high.saturating_sub(cost),
            timing
                .one_high
                .saturating_sub(timing.zero_high)
                .saturating_sub(cost),
            timing.period.saturating_sub(timing.one_high).saturating_sub(cost),
        ]
    }

    #[inline(always)]
    fn wait(&mut self, cycles: u32) {
        if cycles > 0 {
            self.delay.delay_cycles(cycles);
        }
    }

    #[inline(always)]
    fn send_byte(&mut self, byte: u8) {
        let [rise, data, fall] = self.waits;

        let mut byte = byte;
        for _ in 0..8 {
            let bit = byte & 0x80 != 0;
            self.line.set_high();
            self.wait(rise);
            self.line.write(bit);
            self.wait(data);
            self.line.set_low();
            self.wait(fall);
            byte <<= 1;
        }
    }
}

impl<L: DataLine, D: CycleDelay> PulseCodec for BitBangCodec<L, D> {
    fn speed(&self) -> Speed {
        self.speed
    }

    fn claim(&mut self) {
        self.line.configure_output();
        self.line.set_low();
    }

    fn release(&mut self) {
        self.line.release();
    }

    fn transmit(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.send_byte(byte);
        }
    }
}
