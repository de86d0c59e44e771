//! Canned ornament animations
//!
//! Each animation is a blocking routine that draws through the strip's
//! public API, paces itself with an `embedded-hal` delay and leaves the
//! strip cleared when it returns. All shared state (strip, current color,
//! dim level) lives in an [`Animator`] context.
//!
//! Choosing which animation and color to play is up to the firmware, e.g.
//! from a random seed taken at wake-up.

mod pulse;
mod sweep;
mod wheel;

use embedded_hal::delay::DelayNs;

use crate::codec::PulseCodec;
use crate::color::Rgb;
use crate::latch::MicrosClock;
use crate::math8::scale8;
use crate::strip::PixelStrip;

const ANIMATION_NAME_HEARTBEAT: &str = "heartbeat";
const ANIMATION_NAME_BOTTOM_UP: &str = "bottom_up";
const ANIMATION_NAME_THEATER_FILL: &str = "theater_fill";
const ANIMATION_NAME_BOUNCE: &str = "bounce";
const ANIMATION_NAME_INCREMENTAL_FILL: &str = "incremental_fill";
const ANIMATION_NAME_CHASE: &str = "chase";
const ANIMATION_NAME_COLOR_WIPE: &str = "color_wipe";
const ANIMATION_NAME_RAINBOW: &str = "rainbow";
const ANIMATION_NAME_THEATER_CHASE_RAINBOW: &str = "theater_chase_rainbow";

const ANIMATION_ID_HEARTBEAT: u8 = 0;
const ANIMATION_ID_BOTTOM_UP: u8 = 1;
const ANIMATION_ID_THEATER_FILL: u8 = 2;
const ANIMATION_ID_BOUNCE: u8 = 3;
const ANIMATION_ID_INCREMENTAL_FILL: u8 = 4;
const ANIMATION_ID_CHASE: u8 = 5;
const ANIMATION_ID_COLOR_WIPE: u8 = 6;
const ANIMATION_ID_RAINBOW: u8 = 7;
const ANIMATION_ID_THEATER_CHASE_RAINBOW: u8 = 8;

/// Default dim level, about 10% of full output
pub const DEFAULT_DIM: u8 = 25;

/// Colors the single-color animations pick from
pub const PALETTE: [Rgb; 11] = [
    Rgb { r: 0, g: 0, b: 255 },
    Rgb { r: 144, g: 8, b: 255 },
    Rgb { r: 255, g: 25, b: 221 },
    Rgb { r: 255, g: 0, b: 0 },
    Rgb { r: 255, g: 128, b: 0 },
    Rgb { r: 255, g: 153, b: 0 },
    Rgb { r: 8, g: 255, b: 0 },
    Rgb { r: 28, g: 255, b: 142 },
    Rgb { r: 31, g: 251, b: 255 },
    Rgb { r: 25, g: 167, b: 255 },
    Rgb { r: 115, g: 255, b: 117 },
];

/// Known animations that can be played
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    Heartbeat = ANIMATION_ID_HEARTBEAT,
    BottomUp = ANIMATION_ID_BOTTOM_UP,
    TheaterFill = ANIMATION_ID_THEATER_FILL,
    Bounce = ANIMATION_ID_BOUNCE,
    IncrementalFill = ANIMATION_ID_INCREMENTAL_FILL,
    Chase = ANIMATION_ID_CHASE,
    ColorWipe = ANIMATION_ID_COLOR_WIPE,
    Rainbow = ANIMATION_ID_RAINBOW,
    TheaterChaseRainbow = ANIMATION_ID_THEATER_CHASE_RAINBOW,
}

impl AnimationId {
    pub const ALL: [Self; 9] = [
        Self::Heartbeat,
        Self::BottomUp,
        Self::TheaterFill,
        Self::Bounce,
        Self::IncrementalFill,
        Self::Chase,
        Self::ColorWipe,
        Self::Rainbow,
        Self::TheaterChaseRainbow,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_HEARTBEAT => Self::Heartbeat,
            ANIMATION_ID_BOTTOM_UP => Self::BottomUp,
            ANIMATION_ID_THEATER_FILL => Self::TheaterFill,
            ANIMATION_ID_BOUNCE => Self::Bounce,
            ANIMATION_ID_INCREMENTAL_FILL => Self::IncrementalFill,
            ANIMATION_ID_CHASE => Self::Chase,
            ANIMATION_ID_COLOR_WIPE => Self::ColorWipe,
            ANIMATION_ID_RAINBOW => Self::Rainbow,
            ANIMATION_ID_THEATER_CHASE_RAINBOW => Self::TheaterChaseRainbow,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Heartbeat => ANIMATION_NAME_HEARTBEAT,
            Self::BottomUp => ANIMATION_NAME_BOTTOM_UP,
            Self::TheaterFill => ANIMATION_NAME_THEATER_FILL,
            Self::Bounce => ANIMATION_NAME_BOUNCE,
            Self::IncrementalFill => ANIMATION_NAME_INCREMENTAL_FILL,
            Self::Chase => ANIMATION_NAME_CHASE,
            Self::ColorWipe => ANIMATION_NAME_COLOR_WIPE,
            Self::Rainbow => ANIMATION_NAME_RAINBOW,
            Self::TheaterChaseRainbow => ANIMATION_NAME_THEATER_CHASE_RAINBOW,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_HEARTBEAT => Some(Self::Heartbeat),
            ANIMATION_NAME_BOTTOM_UP => Some(Self::BottomUp),
            ANIMATION_NAME_THEATER_FILL => Some(Self::TheaterFill),
            ANIMATION_NAME_BOUNCE => Some(Self::Bounce),
            ANIMATION_NAME_INCREMENTAL_FILL => Some(Self::IncrementalFill),
            ANIMATION_NAME_CHASE => Some(Self::Chase),
            ANIMATION_NAME_COLOR_WIPE => Some(Self::ColorWipe),
            ANIMATION_NAME_RAINBOW => Some(Self::Rainbow),
            ANIMATION_NAME_THEATER_CHASE_RAINBOW => Some(Self::TheaterChaseRainbow),
            _ => None,
        }
    }

    /// Whether the animation draws with the animator's current color
    pub const fn uses_color(self) -> bool {
        matches!(
            self,
            Self::BottomUp
                | Self::TheaterFill
                | Self::Bounce
                | Self::IncrementalFill
                | Self::Chase
        )
    }
}

/// Configuration for the animator
#[derive(Debug, Clone, Copy)]
pub struct AnimatorConfig {
    /// Output scale for everything drawn (0-255 = 0.0-1.0)
    pub dim: u8,
    /// Starting color for single-color animations
    pub color: Rgb,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            dim: DEFAULT_DIM,
            color: PALETTE[0],
        }
    }
}

/// Context the animations draw through
pub struct Animator<'a, C, K, P, const CAP: usize>
where
    C: PulseCodec,
    K: MicrosClock,
    P: DelayNs,
{
    strip: &'a mut PixelStrip<C, K, CAP>,
    pause: P,
    color: Rgb,
    dim: u8,
}

impl<'a, C, K, P, const CAP: usize> Animator<'a, C, K, P, CAP>
where
    C: PulseCodec,
    K: MicrosClock,
    P: DelayNs,
{
    pub fn new(strip: &'a mut PixelStrip<C, K, CAP>, pause: P, config: &AnimatorConfig) -> Self {
        Self {
            strip,
            pause,
            color: config.color,
            dim: config.dim,
        }
    }

    /// Set the color used by single-color animations
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    pub fn strip(&self) -> &PixelStrip<C, K, CAP> {
        self.strip
    }

    /// Play one animation to completion
    pub fn run(&mut self, id: AnimationId) {
        match id {
            AnimationId::Heartbeat => self.heartbeat(),
            AnimationId::BottomUp => self.bottom_up(),
            AnimationId::TheaterFill => self.theater_fill(),
            AnimationId::Bounce => self.bounce(),
            AnimationId::IncrementalFill => self.incremental_fill(),
            AnimationId::Chase => self.chase(),
            AnimationId::ColorWipe => self.color_wipe(),
            AnimationId::Rainbow => self.rainbow(),
            AnimationId::TheaterChaseRainbow => self.theater_chase_rainbow(),
        }
    }

    /// Paint a pixel with the current color at `level` (0-255)
    ///
    /// Indices outside the strip, negative ones included, are dropped.
    fn paint(&mut self, pixel: i32, level: u8) {
        let Ok(n) = u16::try_from(pixel) else {
            return;
        };
        let dim = self.dim;
        let scale = |c: u8| scale8(scale8(c, level), dim);
        let Rgb { r, g, b } = self.color;
        self.strip.set_pixel(n, scale(r), scale(g), scale(b));
    }

    fn paint_all(&mut self, level: u8) {
        for i in 0..self.len() {
            self.paint(i, level);
        }
    }

    fn turn_off(&mut self, pixel: i32) {
        if let Ok(n) = u16::try_from(pixel) {
            self.strip.set_pixel(n, 0, 0, 0);
        }
    }

    fn show(&mut self) {
        self.strip.show();
    }

    fn wait_ms(&mut self, ms: u32) {
        self.pause.delay_ms(ms);
    }

    /// Turn everything off and push the blank frame out
    fn clear_strip(&mut self) {
        self.strip.clear();
        self.strip.show();
    }

    fn len(&self) -> i32 {
        i32::from(self.strip.num_pixels())
    }

    fn middle(&self) -> i32 {
        self.len() / 2
    }

    /// Run `draw` with the strip brightness at the dim level
    fn dimmed(&mut self, draw: impl FnOnce(&mut Self)) {
        let previous = self.strip.brightness();
        self.strip.set_brightness(self.dim);
        draw(self);
        self.strip.set_brightness(previous);
    }
}
