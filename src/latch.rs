//! Data latch timing
//!
//! A NeoPixel chain latches the received frame after the data line has been
//! idle low for about 300 µs, and ignores new data until then. Rather than
//! delaying at the end of every transmission, the end time is noted and the
//! next transmission holds off only if it arrives too early. Meanwhile the
//! caller is free to prepare the next frame.

use embassy_time::{Duration, Instant};

/// Minimum idle time between two frames
pub const LATCH_INTERVAL: Duration = Duration::from_micros(300);

#[allow(clippy::cast_possible_truncation)]
const LATCH_MICROS: u32 = LATCH_INTERVAL.as_micros() as u32;

/// Free-running microsecond counter
///
/// The counter is 32 bits wide and wraps around (roughly every 71 minutes).
pub trait MicrosClock {
    fn now_micros(&self) -> u32;
}

/// [`MicrosClock`] backed by the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl MicrosClock for EmbassyClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_micros(&self) -> u32 {
        Instant::now().as_micros() as u32
    }
}

/// Tracks when the last transmission ended
///
/// Each strip owns its own timer, so strips on different pins can be shown
/// back to back without one waiting on another's latch.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatchTimer {
    last_end: u32,
}

impl LatchTimer {
    pub const fn new() -> Self {
        Self { last_end: 0 }
    }

    /// Check whether a new frame may start at `now` without blocking
    ///
    /// A stored end time ahead of `now` means the counter wrapped since the
    /// last frame. Wrapping subtraction alone would then stall until the
    /// counter caught up again, so the end time is pulled back far enough
    /// that the line counts as idle immediately.
    pub fn is_ready(&mut self, now: u32) -> bool {
        if self.last_end > now {
            self.last_end = now.wrapping_sub(LATCH_MICROS);
            return true;
        }
        now.wrapping_sub(self.last_end) >= LATCH_MICROS
    }

    /// Record the end of a transmission
    pub fn mark_end(&mut self, now: u32) {
        self.last_end = now;
    }

    pub const fn last_end(&self) -> u32 {
        self.last_end
    }
}
