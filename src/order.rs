//! Channel layout of a pixel record
//!
//! The order in which primaries go out on the wire varies between device
//! types, vendors and even revisions of the same part. A [`ColorOrder`]
//! stores the byte offset of red, green, blue and (optionally) white within
//! one pixel. The in-memory layout equals the wire layout, so transmission
//! never reorders bytes.
//!
//! The compact code packs the offsets as `0bWWRRGGBB`. RGB devices repeat
//! the red offset in the white field; that equality is what marks a 3-byte
//! record everywhere else in the crate.

const OFFSET_MASK: u8 = 0b11;

/// Flag in a [`PixelType`] code marking a 400 kHz device
pub const KHZ400_FLAG: u16 = 0x0100;

/// Byte offsets of each primary within one pixel record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorOrder {
    r: u8,
    g: u8,
    b: u8,
    w: u8,
}

macro_rules! color_orders {
    ($($(#[$meta:meta])* $name:ident = ($w:expr, $r:expr, $g:expr, $b:expr);)*) => {
        impl ColorOrder {
            $(
                $(#[$meta])*
                pub const $name: Self = Self::new($r, $g, $b, $w);
            )*
        }
    };
}

// Offset:     W  R  G  B
color_orders! {
    /// Transmit as R,G,B
    RGB = (0, 0, 1, 2);
    /// Transmit as R,B,G
    RBG = (0, 0, 2, 1);
    /// Transmit as G,R,B (most WS2812 parts)
    GRB = (1, 1, 0, 2);
    /// Transmit as G,B,R
    GBR = (2, 2, 0, 1);
    /// Transmit as B,R,G
    BRG = (1, 1, 2, 0);
    /// Transmit as B,G,R
    BGR = (2, 2, 1, 0);

    /// Transmit as W,R,G,B
    WRGB = (0, 1, 2, 3);
    /// Transmit as W,R,B,G
    WRBG = (0, 1, 3, 2);
    /// Transmit as W,G,R,B
    WGRB = (0, 2, 1, 3);
    /// Transmit as W,G,B,R
    WGBR = (0, 3, 1, 2);
    /// Transmit as W,B,R,G
    WBRG = (0, 2, 3, 1);
    /// Transmit as W,B,G,R
    WBGR = (0, 3, 2, 1);

    /// Transmit as R,W,G,B
    RWGB = (1, 0, 2, 3);
    /// Transmit as R,W,B,G
    RWBG = (1, 0, 3, 2);
    /// Transmit as R,G,W,B
    RGWB = (2, 0, 1, 3);
    /// Transmit as R,G,B,W
    RGBW = (3, 0, 1, 2);
    /// Transmit as R,B,W,G
    RBWG = (2, 0, 3, 1);
    /// Transmit as R,B,G,W
    RBGW = (3, 0, 2, 1);

    /// Transmit as G,W,R,B
    GWRB = (1, 2, 0, 3);
    /// Transmit as G,W,B,R
    GWBR = (1, 3, 0, 2);
    /// Transmit as G,R,W,B
    GRWB = (2, 1, 0, 3);
    /// Transmit as G,R,B,W (SK6812 RGBW parts)
    GRBW = (3, 1, 0, 2);
    /// Transmit as G,B,W,R
    GBWR = (2, 3, 0, 1);
    /// Transmit as G,B,R,W
    GBRW = (3, 2, 0, 1);

    /// Transmit as B,W,R,G
    BWRG = (1, 2, 3, 0);
    /// Transmit as B,W,G,R
    BWGR = (1, 3, 2, 0);
    /// Transmit as B,R,W,G
    BRWG = (2, 1, 3, 0);
    /// Transmit as B,R,G,W
    BRGW = (3, 1, 2, 0);
    /// Transmit as B,G,W,R
    BGWR = (2, 3, 1, 0);
    /// Transmit as B,G,R,W
    BGRW = (3, 2, 1, 0);
}

impl ColorOrder {
    /// Build an order from raw offsets
    ///
    /// Offsets are masked to 0..=3. Pass `w == r` for an RGB device.
    pub const fn new(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self {
            r: r & OFFSET_MASK,
            g: g & OFFSET_MASK,
            b: b & OFFSET_MASK,
            w: w & OFFSET_MASK,
        }
    }

    /// Decode a `0bWWRRGGBB` code
    pub const fn from_code(code: u8) -> Self {
        Self::new(code >> 4, code >> 2, code, code >> 6)
    }

    /// Encode as `0bWWRRGGBB`
    pub const fn code(self) -> u8 {
        (self.w << 6) | (self.r << 4) | (self.g << 2) | self.b
    }

    /// Resolve an order from a string such as `"GRB"` or `"wrgb"`
    ///
    /// The zero-based position of the first `r`, `g`, `b` and `w` (any case)
    /// becomes that channel's offset. Channels that never appear default to
    /// offset 0, and a missing `w` marks an RGB device. Malformed input never
    /// fails; it just yields whatever offsets were found.
    #[allow(clippy::cast_possible_truncation)]
    pub fn parse(order: &str) -> Self {
        let mut r = None;
        let mut g = None;
        let mut b = None;
        let mut w = None;

        for (i, c) in order.bytes().enumerate() {
            let slot = match c.to_ascii_lowercase() {
                b'r' => &mut r,
                b'g' => &mut g,
                b'b' => &mut b,
                b'w' => &mut w,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(i as u8);
            }
        }

        let r = r.unwrap_or(0);
        Self::new(r, g.unwrap_or(0), b.unwrap_or(0), w.unwrap_or(r))
    }

    pub const fn red(self) -> usize {
        self.r as usize
    }

    pub const fn green(self) -> usize {
        self.g as usize
    }

    pub const fn blue(self) -> usize {
        self.b as usize
    }

    /// Offset of the white byte; equals [`red`](Self::red) on RGB devices
    pub const fn white(self) -> usize {
        self.w as usize
    }

    /// Whether pixels carry a dedicated white channel
    pub const fn has_white(self) -> bool {
        self.w != self.r
    }

    /// Bytes per pixel record: 3 for RGB, 4 for RGBW
    pub const fn channels(self) -> usize {
        if self.has_white() { 4 } else { 3 }
    }
}

impl Default for ColorOrder {
    fn default() -> Self {
        Self::GRB
    }
}

/// Pulse-timing generation of the LED protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Speed {
    /// WS2812 and later, 800 kHz bit rate
    #[default]
    Khz800,
    /// First-generation WS2811 parts, 400 kHz bit rate
    Khz400,
}

/// Color order and speed variant of a strip, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelType {
    pub order: ColorOrder,
    pub speed: Speed,
}

impl PixelType {
    pub const fn new(order: ColorOrder, speed: Speed) -> Self {
        Self { order, speed }
    }

    /// Decode a 16-bit code: order in the low byte, [`KHZ400_FLAG`] for speed
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_code(code: u16) -> Self {
        let speed = if code & KHZ400_FLAG != 0 {
            Speed::Khz400
        } else {
            Speed::Khz800
        };
        Self {
            order: ColorOrder::from_code(code as u8),
            speed,
        }
    }

    #[allow(clippy::cast_lossless)]
    pub const fn code(self) -> u16 {
        let flag = match self.speed {
            Speed::Khz800 => 0,
            Speed::Khz400 => KHZ400_FLAG,
        };
        flag | self.order.code() as u16
    }
}
