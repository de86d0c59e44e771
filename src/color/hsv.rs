use super::Hsv;

/// Hue steps around the 8-bit RGB hexcone
///
/// Six slices of 255 steps: the last element of each slice is the first of
/// the next one, so there are 1530 distinct hues rather than 1536.
const HEXCONE_STEPS: u32 = 1530;

/// Convert hue, saturation and value into a packed `0x00RRGGBB` color
///
/// `hue` covers the whole color wheel over 0..=65535 and wraps, so callers
/// can add or subtract freely. Pure red is centered on the wrap point:
/// values slightly above 0 and slightly below 65536 are all red. Pure green
/// sits at one third of the range and pure blue at two thirds.
///
/// The result is not gamma corrected; pass it through
/// [`gamma32`](crate::gamma::gamma32) for perceptually even fades.
#[allow(clippy::cast_lossless)]
pub const fn color_hsv(hue: u16, sat: u8, val: u8) -> u32 {
    // 0..=1530, where 1530 wraps back onto red
    let hue = (hue as u32 * HEXCONE_STEPS + 32_768) >> 16;

    let (r, g, b): (u32, u32, u32) = if hue < 510 {
        // Red to green
        if hue < 255 { (255, hue, 0) } else { (510 - hue, 255, 0) }
    } else if hue < 1020 {
        // Green to blue
        if hue < 765 {
            (0, 255, hue - 510)
        } else {
            (0, 1020 - hue, 255)
        }
    } else if hue < HEXCONE_STEPS {
        // Blue to red
        if hue < 1275 {
            (hue - 1020, 0, 255)
        } else {
            (255, 0, HEXCONE_STEPS - hue)
        }
    } else {
        (255, 0, 0)
    };

    // 1..=256 so the divisions become shifts
    let v1 = 1 + val as u32;
    let s1 = 1 + sat as u32;
    let s2 = 255 - sat as u32;

    (sat_val(r, s1, s2, v1) << 16) | (sat_val(g, s1, s2, v1) << 8) | sat_val(b, s1, s2, v1)
}

#[inline]
const fn sat_val(channel: u32, s1: u32, s2: u32, v1: u32) -> u32 {
    ((((channel * s1) >> 8) + s2) * v1) >> 8
}

/// [`color_hsv`] for a `smart-leds` [`Hsv`], whose hue is only 8 bits wide
pub const fn hsv_to_packed(hsv: Hsv) -> u32 {
    color_hsv(u16::from_be_bytes([hsv.hue, 0]), hsv.sat, hsv.val)
}
