mod hsv;
mod packed;

pub use hsv::{color_hsv, hsv_to_packed};
pub use packed::{pack_rgb, pack_rgbw, rgb_from_u32, white_from_u32};
use smart_leds::{RGB8, hsv::Hsv as HSV};

pub type Rgb = RGB8;
pub type Hsv = HSV;
