//! Moving dots and fills in a single color

use embedded_hal::delay::DelayNs;

use super::Animator;
use crate::codec::PulseCodec;
use crate::latch::MicrosClock;

const LEVEL_FULL: u8 = u8::MAX;
const LEVEL_HALF: u8 = 128;
const LEVEL_FIFTH: u8 = 51;

/// Tail of the chase, head first
const CHASE_TAIL: [u8; 5] = [LEVEL_FULL, 153, 102, LEVEL_FIFTH, 26];

impl<C, K, P, const CAP: usize> Animator<'_, C, K, P, CAP>
where
    C: PulseCodec,
    K: MicrosClock,
    P: DelayNs,
{
    /// Two comets leave the middle for the ends, then two more come back in
    /// from the ends
    pub(super) fn bottom_up(&mut self) {
        let len = self.len();
        let mid = self.middle();

        for _ in 0..3 {
            for i in 0..=len / 2 {
                self.comet(mid + i, 1);
                self.comet(mid - i, -1);
                self.show();
                self.wait_ms(30);
            }
            for i in 0..=len / 2 {
                self.comet(i, 1);
                self.comet(len - i, -1);
                self.show();
                self.wait_ms(30);
            }
            self.clear_strip();
            self.wait_ms(500);
        }
    }

    /// Three-pixel comet with its head at `head`, moving in `direction`
    fn comet(&mut self, head: i32, direction: i32) {
        self.turn_off(head - 3 * direction);
        self.paint(head - 2 * direction, LEVEL_FIFTH);
        self.paint(head - direction, LEVEL_HALF);
        self.paint(head, LEVEL_FULL);
    }

    /// A growing tail bounces between the ends, speeding up each trip
    pub(super) fn bounce(&mut self) {
        let len = self.len();
        let mut trips = 1;

        while trips < len + 1 {
            for i in 0..len {
                self.paint(i, LEVEL_FULL);
                self.turn_off(i - trips);
                self.show();
                self.wait_ms(bounce_wait(len, trips));
            }
            trips += 1;
            for i in (0..=len).rev() {
                self.paint(i, LEVEL_FULL);
                self.turn_off(i + trips);
                self.show();
                self.wait_ms(bounce_wait(len, trips));
            }
            trips += 1;
        }

        self.wait_ms(1000);
        self.fade_out();
        self.clear_strip();
    }

    /// Dots run out from the middle and stack up until the strip is full
    pub(super) fn incremental_fill(&mut self) {
        let half = self.len() / 2;
        let mid = self.middle();

        for filled in 0..=half {
            for i in 0..=half {
                self.paint(mid - i, LEVEL_FULL);
                if half - i > filled {
                    self.turn_off(mid - i + 1);
                }
                self.show();
                self.wait_ms(10);
            }
            for i in 0..=half {
                self.paint(mid + i, LEVEL_FULL);
                if i < half - filled {
                    self.turn_off(mid + i - 1);
                }
                self.show();
                self.wait_ms(10);
            }
        }

        self.wait_ms(500);
        self.fade_out();
        self.clear_strip();
    }

    /// A fading tail circles the strip three times
    pub(super) fn chase(&mut self) {
        let len = self.len();

        for step in 0..=len * 3 {
            let head = step % len;
            self.turn_off((head - 5).rem_euclid(len));
            for (behind, level) in (0..5).zip(CHASE_TAIL).rev() {
                self.paint((head - behind).rem_euclid(len), level);
            }
            self.show();
            self.wait_ms(40);
        }

        self.clear_strip();
    }
}

/// Per-step delay of a bounce trip: long at first, shorter every trip
#[allow(clippy::cast_sign_loss)]
fn bounce_wait(len: i32, trips: i32) -> u32 {
    if trips <= 0 {
        return 0;
    }
    ((len - trips) * 4 / trips).max(0) as u32
}
