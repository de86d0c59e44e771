//! Adapters from `embedded-hal` and platform crates

use embedded_hal::digital::OutputPin;

use super::DataLine;
#[cfg(feature = "cortex-m")]
use super::CycleDelay;

/// [`DataLine`] over any `embedded-hal` output pin
///
/// `embedded-hal` cannot switch a pin back to input, so `release` leaves the
/// pin driven low. Pin errors are dropped: the protocol is open loop and a
/// failed write looks the same as a timing miss to the chain.
///
/// `WRITE` is the cost of one pin write in CPU cycles. It depends on the HAL
/// and the optimisation level, so measure it once per target (toggle the pin
/// in a loop and scope it) and set it here; the default assumes a single
/// register store.
pub struct HalLine<P: OutputPin, const WRITE: u32 = 1> {
    pin: P,
}

impl<P: OutputPin> HalLine<P> {
    pub const fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: OutputPin, const WRITE: u32> HalLine<P, WRITE> {
    /// Wrap a pin whose writes take `WRITE` cycles
    pub const fn calibrated(pin: P) -> Self {
        Self { pin }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin, const WRITE: u32> DataLine for HalLine<P, WRITE> {
    const WRITE_CYCLES: u32 = WRITE;

    fn configure_output(&mut self) {
        self.pin.set_low().ok();
    }

    fn release(&mut self) {
        self.pin.set_low().ok();
    }

    #[inline(always)]
    fn set_high(&mut self) {
        self.pin.set_high().ok();
    }

    #[inline(always)]
    fn set_low(&mut self) {
        self.pin.set_low().ok();
    }
}

/// Cycle delay using the Cortex-M `asm::delay` spin loop
///
/// `asm::delay` waits at least the requested count. The call, the loop
/// entry and the branch out add a few cycles more, which are charged through
/// `OVERHEAD_CYCLES`. Even so, the 8 MHz tables leave no room for a call
/// between writes; use a core clocked inside the 16 MHz band, or a codec
/// written in straight-line assembly, when the 2-cycle intervals matter.
#[cfg(feature = "cortex-m")]
#[derive(Debug, Clone, Copy, Default)]
pub struct CortexMDelay;

#[cfg(feature = "cortex-m")]
impl CycleDelay for CortexMDelay {
    const OVERHEAD_CYCLES: u32 = 4;

    #[inline(always)]
    fn delay_cycles(&mut self, cycles: u32) {
        cortex_m::asm::delay(cycles);
    }
}
