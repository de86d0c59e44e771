use derive_more::{Display, Error};

use crate::order::Speed;

/// Configuration errors reported while setting up a strip
///
/// Usage errors (out-of-range pixels, malformed order strings) never show up
/// here: those are absorbed by the hot-path operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// No pulse timing table exists for this CPU clock
    #[display("no pulse timing for a {cpu_hz} Hz CPU clock")]
    UnsupportedClock { cpu_hz: u32 },
    /// A strip needs at least one pixel
    #[display("pixel strip must contain at least one pixel")]
    EmptyStrip,
    /// The pixel buffer capacity cannot hold the strip
    #[display("strip needs {required} bytes but the buffer holds {capacity}")]
    BufferTooSmall { required: usize, capacity: usize },
    /// The codec's pulse table is for another speed variant than the strip
    #[display("strip is {strip:?} but the codec sends {codec:?} pulses")]
    SpeedMismatch { strip: Speed, codec: Speed },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
