//! Global strip brightness
//!
//! Brightness is applied when colors are written rather than when they are
//! transmitted: the bit-banged output loop has no spare cycles to scale
//! bytes on the fly. Changing brightness therefore rescales the whole
//! buffer in place, which is lossy. For a non-destructive change, redraw
//! the frame after setting the new level.

use core::num::NonZeroU8;

/// Scale factor applied to every channel value
///
/// `Unscaled` stores values literally; `Scaled(f)` stores
/// `(value * f) >> 8`, i.e. a fixed-point multiplier of `f / 256`.
/// A user level `l` maps to `Scaled(l + 1)`, and level 255 (the maximum)
/// maps to `Unscaled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Brightness {
    #[default]
    Unscaled,
    Scaled(NonZeroU8),
}

impl Brightness {
    /// Brightness for a user level, 0 (off) to 255 (max)
    pub const fn from_level(level: u8) -> Self {
        match NonZeroU8::new(level.wrapping_add(1)) {
            Some(factor) => Self::Scaled(factor),
            None => Self::Unscaled,
        }
    }

    /// User level, 0 (off) to 255 (max)
    pub const fn level(self) -> u8 {
        match self {
            Self::Unscaled => u8::MAX,
            Self::Scaled(factor) => factor.get() - 1,
        }
    }

    /// Fixed-point multiplier out of 256
    #[allow(clippy::cast_lossless)]
    pub const fn factor(self) -> u16 {
        match self {
            Self::Unscaled => 256,
            Self::Scaled(factor) => factor.get() as u16,
        }
    }

    /// Scale a channel value for storage
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn scale(self, value: u8) -> u8 {
        match self {
            Self::Unscaled => value,
            Self::Scaled(factor) => ((value as u16 * factor.get() as u16) >> 8) as u8,
        }
    }

    /// Best-effort inverse of [`scale`](Self::scale)
    ///
    /// Bits dropped by the forward scale are gone, so the result is never
    /// above the original and falls short of it by less than
    /// `256 / factor + 1`. The error grows at low brightness.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn unscale(self, stored: u8) -> u8 {
        match self {
            Self::Unscaled => stored,
            Self::Scaled(factor) => {
                let value = ((stored as u16) << 8) / factor.get() as u16;
                if value > u8::MAX as u16 {
                    u8::MAX
                } else {
                    value as u8
                }
            }
        }
    }

    /// Rescale stored bytes from one brightness to another
    ///
    /// Each byte becomes `(byte * k) >> 8` with
    /// `k = (to.factor << 8) / from.factor`, saturated at 255. Raw values
    /// stored while unscaled count as full scale (factor 256).
    #[allow(clippy::cast_possible_truncation)]
    pub fn rescale(bytes: &mut [u8], from: Self, to: Self) {
        if from == to {
            return;
        }
        let k = (u32::from(to.factor()) << 8) / u32::from(from.factor());
        for byte in bytes {
            *byte = ((u32::from(*byte) * k) >> 8).min(u32::from(u8::MAX)) as u8;
        }
    }
}
