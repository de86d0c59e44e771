//! Color-wheel animations, drawn with strip brightness at the dim level

use embedded_hal::delay::DelayNs;

use super::Animator;
use crate::codec::PulseCodec;
use crate::color::{color_hsv, pack_rgb};
use crate::gamma::gamma32;
use crate::latch::MicrosClock;

const WIPE_STEP_MS: u32 = 50;
const RAINBOW_CYCLES: u32 = 5;
const RAINBOW_HUE_STEP: usize = 256;
const THEATER_ROUNDS: u32 = 30;
const THEATER_SPACING: usize = 3;

impl<C, K, P, const CAP: usize> Animator<'_, C, K, P, CAP>
where
    C: PulseCodec,
    K: MicrosClock,
    P: DelayNs,
{
    /// Wipe red, then green, then blue across the strip
    pub(super) fn color_wipe(&mut self) {
        self.dimmed(|this| {
            for color in [pack_rgb(255, 0, 0), pack_rgb(0, 255, 0), pack_rgb(0, 0, 255)] {
                for n in 0..this.strip.num_pixels() {
                    this.strip.set_pixel_color(n, color);
                    this.show();
                    this.wait_ms(WIPE_STEP_MS);
                }
            }
            this.clear_strip();
        });
    }

    /// Scroll one full rainbow along the strip, five times around
    #[allow(clippy::cast_possible_truncation)]
    pub(super) fn rainbow(&mut self) {
        self.dimmed(|this| {
            for first_hue in (0..RAINBOW_CYCLES * 65_536).step_by(RAINBOW_HUE_STEP) {
                this.strip.rainbow(first_hue as u16, 1, 255, 255, true);
                this.show();
                this.wait_ms(5);
            }
            this.clear_strip();
        });
    }

    /// Rainbow-colored theater marquee with every third pixel lit
    #[allow(clippy::cast_possible_truncation)]
    pub(super) fn theater_chase_rainbow(&mut self) {
        self.dimmed(|this| {
            let count = u32::from(this.strip.num_pixels());
            let mut first_hue: u32 = 0;

            for _ in 0..THEATER_ROUNDS {
                for offset in 0..THEATER_SPACING {
                    this.strip.clear();
                    for n in (offset..count as usize).step_by(THEATER_SPACING) {
                        let hue = first_hue + n as u32 * 65_536 / count;
                        let color = gamma32(color_hsv(hue as u16, 255, 255));
                        this.strip.set_pixel_color(n as u16, color);
                    }
                    this.show();
                    this.wait_ms(100);
                    first_hue += 65_536 / 15;
                }
            }
            this.clear_strip();
        });
    }
}
