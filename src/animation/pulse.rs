//! Whole-strip fades

use embedded_hal::delay::DelayNs;

use super::Animator;
use crate::codec::PulseCodec;
use crate::color::Rgb;
use crate::latch::MicrosClock;
use crate::math8::fraction8;

const HEARTBEAT_BEATS: u32 = 3;
const HEARTBEAT_PULSES: u32 = 2;
const FADE_STEPS: i32 = 10;

impl<C, K, P, const CAP: usize> Animator<'_, C, K, P, CAP>
where
    C: PulseCodec,
    K: MicrosClock,
    P: DelayNs,
{
    /// Red double pulse, three beats
    pub(super) fn heartbeat(&mut self) {
        self.color = Rgb { r: 255, g: 0, b: 0 };
        let steps = self.len();

        for _ in 0..HEARTBEAT_BEATS {
            for _ in 0..HEARTBEAT_PULSES {
                for step in 1..steps {
                    self.paint_all(fraction8(step, steps));
                    self.show();
                    self.wait_ms(2);
                }
                for step in (1..=steps).rev() {
                    self.paint_all(fraction8(step, steps));
                    self.show();
                    self.wait_ms(2);
                }
            }
            self.clear_strip();
            self.wait_ms(500);
        }
    }

    /// Light every other pixel going up, fill the gaps coming down, then
    /// breathe three times
    pub(super) fn theater_fill(&mut self) {
        let len = self.len();

        for i in (0..len).step_by(2) {
            self.paint(i, u8::MAX);
            self.show();
            self.wait_ms(80);
        }
        for i in (1..=len).rev().filter(|i| i % 2 == 1) {
            self.paint(i, u8::MAX);
            self.show();
            self.wait_ms(80);
        }
        self.wait_ms(200);

        for _ in 0..3 {
            for step in 0..FADE_STEPS {
                self.paint_all(fraction8(FADE_STEPS - step, FADE_STEPS));
                self.show();
                self.wait_ms(10);
            }
            self.wait_ms(100);
            for step in 0..FADE_STEPS {
                self.paint_all(fraction8(step, FADE_STEPS));
                self.show();
                self.wait_ms(10);
            }
            self.wait_ms(100);
        }

        self.wait_ms(200);
        self.fade_out();
        self.clear_strip();
    }

    /// Step the whole strip down from full to 30%
    pub(super) fn fade_out(&mut self) {
        for step in 0..8 {
            self.paint_all(fraction8(FADE_STEPS - step, FADE_STEPS));
            self.show();
            self.wait_ms(20);
        }
    }
}
