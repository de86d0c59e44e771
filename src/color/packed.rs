//! Packed 32-bit colors
//!
//! Packed colors are laid out as `0xWWRRGGBB` no matter what order the
//! strip expects on the wire.

use super::Rgb;

/// Pack red, green and blue into `0x00RRGGBB`
#[inline]
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    u32::from_be_bytes([0, r, g, b])
}

/// Pack red, green, blue and white into `0xWWRRGGBB`
#[inline]
pub const fn pack_rgbw(r: u8, g: u8, b: u8, w: u8) -> u32 {
    u32::from_be_bytes([w, r, g, b])
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
///
/// The white byte, if any, is ignored.
pub const fn rgb_from_u32(color: u32) -> Rgb {
    let [_, r, g, b] = color.to_be_bytes();
    Rgb { r, g, b }
}

/// White byte of a packed `0xWWRRGGBB` color
pub const fn white_from_u32(color: u32) -> u8 {
    color.to_be_bytes()[0]
}
