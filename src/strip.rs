use heapless::Vec;
use smart_leds::SmartLedsWrite;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::brightness::Brightness;
use crate::codec::PulseCodec;
use crate::color::{Rgb, color_hsv};
use crate::error::{Error, Result};
use crate::gamma::gamma32;
use crate::latch::{LatchTimer, MicrosClock};
use crate::order::{ColorOrder, PixelType};

/// Geometry of a strip, fixed for its lifetime
#[derive(Debug, Clone, Copy)]
pub struct StripConfig {
    /// Number of pixels in the chain
    pub pixel_count: u16,
    /// Color order and speed variant
    pub pixel_type: PixelType,
}

impl StripConfig {
    pub const fn new(pixel_count: u16, pixel_type: PixelType) -> Self {
        Self {
            pixel_count,
            pixel_type,
        }
    }

    /// Buffer bytes needed for this geometry
    pub const fn buffer_len(&self) -> usize {
        self.pixel_count as usize * self.pixel_type.order.channels()
    }
}

/// A chain of addressable pixels on one data line
///
/// Colors live in a byte buffer in wire order, already scaled by the current
/// brightness. [`show`](Self::show) pushes the buffer out through the codec.
///
/// `CAP` is the buffer capacity in bytes; it must cover
/// `pixel_count * channels`. Nothing is allocated after construction.
///
/// Writes to pixels past the end of the strip are silently ignored and
/// reads return 0, so animations can run off the ends freely.
pub struct PixelStrip<C: PulseCodec, K: MicrosClock, const CAP: usize> {
    codec: C,
    clock: K,
    pixel_count: u16,
    pixel_type: PixelType,
    brightness: Brightness,
    begun: bool,
    latch: LatchTimer,
    pixels: Vec<u8, CAP>,
}

impl<C: PulseCodec, K: MicrosClock, const CAP: usize> PixelStrip<C, K, CAP> {
    /// Create a strip with every pixel off
    ///
    /// The data line is left untouched until [`begin`](Self::begin). The
    /// codec must have been built for the speed variant in `config`.
    pub fn new(config: StripConfig, codec: C, clock: K) -> Result<Self> {
        if config.pixel_count == 0 {
            return Err(Error::EmptyStrip);
        }
        if codec.speed() != config.pixel_type.speed {
            return Err(Error::SpeedMismatch {
                strip: config.pixel_type.speed,
                codec: codec.speed(),
            });
        }
        let required = config.buffer_len();
        let mut pixels = Vec::new();
        pixels
            .resize(required, 0)
            .map_err(|()| Error::BufferTooSmall {
                required,
                capacity: CAP,
            })?;

        #[cfg(feature = "esp32-log")]
        println!(
            "[PixelStrip.new] {} pixels, {} bytes, {:?}",
            config.pixel_count, required, config.pixel_type
        );

        Ok(Self {
            codec,
            clock,
            pixel_count: config.pixel_count,
            pixel_type: config.pixel_type,
            brightness: Brightness::Unscaled,
            begun: false,
            latch: LatchTimer::new(),
            pixels,
        })
    }

    /// Claim the data line as an output, idle low
    pub fn begin(&mut self) {
        self.codec.claim();
        self.begun = true;
        #[cfg(feature = "esp32-log")]
        println!("[PixelStrip.begin] data line claimed");
    }

    /// Release the data line to high impedance
    pub fn end(&mut self) {
        if self.begun {
            self.codec.release();
            self.begun = false;
            #[cfg(feature = "esp32-log")]
            println!("[PixelStrip.end] data line released");
        }
    }

    pub const fn is_begun(&self) -> bool {
        self.begun
    }

    /// Whether [`show`](Self::show) would start sending right away
    ///
    /// Returns `false` while the previous frame is still latching, which
    /// leaves idle time for low-priority work.
    #[doc(alias = "can_present")]
    pub fn can_show(&mut self) -> bool {
        let now = self.clock.now_micros();
        self.latch.is_ready(now)
    }

    /// Send the buffer to the chain
    ///
    /// Blocks until the latch interval of the previous frame has passed,
    /// then transmits with interrupts disabled. Without a prior
    /// [`begin`](Self::begin) nothing is sent.
    #[doc(alias = "present")]
    pub fn show(&mut self) {
        while !self.can_show() {
            core::hint::spin_loop();
        }

        if self.begun {
            let codec = &mut self.codec;
            let bytes = self.pixels.as_slice();
            critical_section::with(|_| codec.transmit(bytes));
        }

        let now = self.clock.now_micros();
        self.latch.mark_end(now);
    }

    /// Set a pixel from separate red, green and blue values
    ///
    /// On RGBW strips the white channel is turned off.
    pub fn set_pixel(&mut self, n: u16, r: u8, g: u8, b: u8) {
        self.store(n, r, g, b, 0);
    }

    /// Set a pixel from separate red, green, blue and white values
    ///
    /// White is dropped on RGB strips; there is no byte to hold it.
    pub fn set_pixel_rgbw(&mut self, n: u16, r: u8, g: u8, b: u8, w: u8) {
        self.store(n, r, g, b, w);
    }

    /// Set a pixel from a packed `0xWWRRGGBB` color
    pub fn set_pixel_color(&mut self, n: u16, color: u32) {
        let [w, r, g, b] = color.to_be_bytes();
        self.store(n, r, g, b, w);
    }

    pub fn set_pixel_rgb(&mut self, n: u16, color: Rgb) {
        self.store(n, color.r, color.g, color.b, 0);
    }

    /// Packed `0xWWRRGGBB` color of a pixel, 0 when out of range
    ///
    /// With brightness applied this is an approximation of the color that
    /// was written: the low bits were lost when the value was scaled.
    #[doc(alias = "get_pixel")]
    pub fn pixel_color(&self, n: u16) -> u32 {
        let Some(pixel) = self.pixel(n) else {
            return 0;
        };
        let order = self.pixel_type.order;
        let channel = |offset: usize| {
            pixel
                .get(offset)
                .map_or(0, |&stored| self.brightness.unscale(stored))
        };

        let w = if order.has_white() {
            channel(order.white())
        } else {
            0
        };
        u32::from_be_bytes([
            w,
            channel(order.red()),
            channel(order.green()),
            channel(order.blue()),
        ])
    }

    /// Set `count` pixels starting at `first` to one packed color
    ///
    /// `count == 0` fills to the end of the strip. The range is clipped to
    /// the strip; a `first` past the end does nothing.
    pub fn fill(&mut self, color: u32, first: u16, count: u16) {
        if first >= self.pixel_count {
            return;
        }
        let end = if count == 0 {
            self.pixel_count
        } else {
            first.saturating_add(count).min(self.pixel_count)
        };
        for n in first..end {
            self.set_pixel_color(n, color);
        }
    }

    /// Turn every pixel off
    ///
    /// Writes raw zeros, so the result is off at any brightness.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Set the global brightness, 0 (off) to 255 (max)
    ///
    /// Existing pixel data is rescaled in place. The rescale is lossy: going
    /// down and back up again does not restore the dropped bits.
    pub fn set_brightness(&mut self, level: u8) {
        let brightness = Brightness::from_level(level);
        if brightness == self.brightness {
            return;
        }
        #[cfg(feature = "esp32-log")]
        println!(
            "[PixelStrip.set_brightness] rescaling {:?} -> {:?}",
            self.brightness, brightness
        );
        Brightness::rescale(&mut self.pixels, self.brightness, brightness);
        self.brightness = brightness;
    }

    /// Global brightness, 0 (off) to 255 (max)
    pub const fn brightness(&self) -> u8 {
        self.brightness.level()
    }

    /// Number of pixels in the strip
    pub const fn num_pixels(&self) -> u16 {
        self.pixel_count
    }

    pub const fn pixel_type(&self) -> PixelType {
        self.pixel_type
    }

    /// Raw buffer in wire order, after brightness scaling
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Sweep the color wheel across the whole strip
    ///
    /// Pixel `i` gets hue `first_hue + i * reps * 65536 / pixel_count`.
    /// Negative `reps` run the wheel backwards, 0 paints a single hue.
    /// `gammify` applies [`gamma32`] to each color.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rainbow(
        &mut self,
        first_hue: u16,
        reps: i8,
        saturation: u8,
        brightness: u8,
        gammify: bool,
    ) {
        let count = i64::from(self.pixel_count);
        for n in 0..self.pixel_count {
            let offset = i64::from(n) * i64::from(reps) * 65_536 / count;
            let hue = (i64::from(first_hue) + offset) as u16;
            let mut color = color_hsv(hue, saturation, brightness);
            if gammify {
                color = gamma32(color);
            }
            self.set_pixel_color(n, color);
        }
    }

    pub const fn codec(&self) -> &C {
        &self.codec
    }

    fn pixel(&self, n: u16) -> Option<&[u8]> {
        if n >= self.pixel_count {
            return None;
        }
        let channels = self.pixel_type.order.channels();
        let start = usize::from(n) * channels;
        self.pixels.get(start..start + channels)
    }

    fn store(&mut self, n: u16, r: u8, g: u8, b: u8, w: u8) {
        if n >= self.pixel_count {
            return;
        }
        let order: ColorOrder = self.pixel_type.order;
        let brightness = self.brightness;
        let channels = order.channels();
        let start = usize::from(n) * channels;
        let Some(pixel) = self.pixels.get_mut(start..start + channels) else {
            return;
        };

        let mut put = |offset: usize, value: u8| {
            if let Some(slot) = pixel.get_mut(offset) {
                *slot = brightness.scale(value);
            }
        };
        if order.has_white() {
            put(order.white(), w);
        }
        put(order.red(), r);
        put(order.green(), g);
        put(order.blue(), b);
    }
}

impl<C: PulseCodec, K: MicrosClock, const CAP: usize> Drop for PixelStrip<C, K, CAP> {
    fn drop(&mut self) {
        self.end();
    }
}

impl<C: PulseCodec, K: MicrosClock, const CAP: usize> SmartLedsWrite for PixelStrip<C, K, CAP> {
    type Error = Error;
    type Color = Rgb;

    /// Write colors from pixel 0 upward, then show the frame
    ///
    /// Extra colors past the end of the strip are ignored; pixels beyond the
    /// last color keep their previous value.
    fn write<T, I>(&mut self, iterator: T) -> Result<()>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        for (n, color) in (0..self.pixel_count).zip(iterator) {
            self.set_pixel_rgb(n, color.into());
        }
        self.show();
        Ok(())
    }
}

