#![no_std]

pub mod animation;
pub mod brightness;
pub mod codec;
pub mod color;
mod error;
pub mod gamma;
pub mod latch;
pub mod math8;
pub mod order;
pub mod strip;

pub use brightness::Brightness;
pub use codec::{BitBangCodec, ClockBand, CycleDelay, DataLine, HalLine, PulseCodec, PulseTiming};
pub use error::{Error, Result};
pub use latch::{EmbassyClock, LATCH_INTERVAL, LatchTimer, MicrosClock};
pub use order::{ColorOrder, PixelType, Speed};
pub use strip::{PixelStrip, StripConfig};

pub use animation::{AnimationId, Animator, AnimatorConfig};
pub use color::{Hsv, Rgb, color_hsv, hsv_to_packed, pack_rgb, pack_rgbw};
pub use gamma::{gamma8, gamma32};
pub use math8::{scale8, sine8};
