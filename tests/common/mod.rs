//! Fakes shared by the integration tests

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use myrtio_neopixel::{CycleDelay, DataLine, MicrosClock, PulseCodec, Speed};

/// Clock that moves forward by `step` µs every time it is read
pub struct StepClock {
    now: Cell<u32>,
    step: u32,
}

impl StepClock {
    pub fn new(start: u32, step: u32) -> Self {
        Self {
            now: Cell::new(start),
            step,
        }
    }
}

impl MicrosClock for StepClock {
    fn now_micros(&self) -> u32 {
        let now = self.now.get();
        self.now.set(now.wrapping_add(self.step));
        now
    }
}

/// Codec that keeps every transmitted frame
#[derive(Default)]
pub struct RecordingCodec {
    pub speed: Speed,
    pub claimed: bool,
    pub released: usize,
    pub frames: Vec<Vec<u8>>,
}

impl RecordingCodec {
    pub fn last_frame(&self) -> Option<&[u8]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl PulseCodec for RecordingCodec {
    fn speed(&self) -> Speed {
        self.speed
    }

    fn claim(&mut self) {
        self.claimed = true;
    }

    fn release(&mut self) {
        self.claimed = false;
        self.released += 1;
    }

    fn transmit(&mut self, bytes: &[u8]) {
        self.frames.push(bytes.to_vec());
    }
}

/// Shared view of a simulated data line: a cycle counter plus every level
/// change stamped with the cycle it happened on
#[derive(Clone, Default)]
pub struct Scope {
    pub cycles: Rc<Cell<u32>>,
    pub edges: Rc<RefCell<Vec<(u32, bool)>>>,
    pub output: Rc<Cell<bool>>,
}

impl Scope {
    pub fn line(&self) -> ScopeLine {
        ScopeLine(self.clone())
    }

    pub fn delay(&self) -> ScopeDelay {
        ScopeDelay(self.cycles.clone())
    }

    pub fn slow_line(&self) -> SlowLine {
        SlowLine(self.clone())
    }

    pub fn slow_delay(&self) -> SlowDelay {
        SlowDelay(self.cycles.clone())
    }

    pub fn clear(&self) {
        self.edges.borrow_mut().clear();
        self.cycles.set(0);
    }

    fn record(&self, level: bool) {
        self.edges.borrow_mut().push((self.cycles.get(), level));
    }

    /// Decode bits from the recorded writes, three per bit
    ///
    /// Each bit is checked to start exactly one period after the previous
    /// one and to drop after the expected high time.
    pub fn decode(&self, zero_high: u32, one_high: u32, period: u32) -> Vec<u8> {
        let edges = self.edges.borrow();
        assert_eq!(edges.len() % 24, 0, "partial byte on the wire");

        let mut bytes = Vec::new();
        let mut byte = 0u8;
        let mut start = edges.first().map_or(0, |&(t, _)| t);
        for (i, bit_edges) in edges.chunks(3).enumerate() {
            let [(t0, rise), (t1, bit), (t2, fall)] = [bit_edges[0], bit_edges[1], bit_edges[2]];
            assert!(rise, "bit {i} does not start high");
            assert!(!fall, "bit {i} does not end low");
            assert_eq!(t0, start, "bit {i} starts off the period grid");
            assert_eq!(t1 - t0, zero_high);
            assert_eq!(t2 - t0, one_high);

            byte = (byte << 1) | u8::from(bit);
            if i % 8 == 7 {
                bytes.push(byte);
                byte = 0;
            }
            start += period;
        }
        bytes
    }
}

pub struct ScopeLine(Scope);

impl DataLine for ScopeLine {
    fn configure_output(&mut self) {
        self.0.output.set(true);
    }

    fn release(&mut self) {
        self.0.output.set(false);
    }

    fn set_high(&mut self) {
        self.0.record(true);
    }

    fn set_low(&mut self) {
        self.0.record(false);
    }
}

pub struct ScopeDelay(Rc<Cell<u32>>);

impl CycleDelay for ScopeDelay {
    fn delay_cycles(&mut self, cycles: u32) {
        self.0.set(self.0.get() + cycles);
    }
}

/// Line whose writes take cycles; the level changes as the write starts
pub struct SlowLine(Scope);

impl SlowLine {
    fn store(&self, level: bool) {
        self.0.record(level);
        self.0.cycles.set(self.0.cycles.get() + Self::WRITE_CYCLES);
    }
}

impl DataLine for SlowLine {
    const WRITE_CYCLES: u32 = 1;

    fn configure_output(&mut self) {
        self.0.output.set(true);
    }

    fn release(&mut self) {
        self.0.output.set(false);
    }

    fn set_high(&mut self) {
        self.store(true);
    }

    fn set_low(&mut self) {
        self.store(false);
    }
}

/// Delay that costs a fixed overhead on top of what it is asked for
pub struct SlowDelay(Rc<Cell<u32>>);

impl CycleDelay for SlowDelay {
    const OVERHEAD_CYCLES: u32 = 2;

    fn delay_cycles(&mut self, cycles: u32) {
        self.0.set(self.0.get() + Self::OVERHEAD_CYCLES + cycles);
    }
}

/// `embedded-hal` pin that remembers its level history
#[derive(Default)]
pub struct FakePin {
    pub levels: Vec<bool>,
}

impl ErrorType for FakePin {
    type Error = Infallible;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.levels.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.levels.push(true);
        Ok(())
    }
}

/// Delay that returns immediately
pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Delay that only counts the milliseconds it was asked to wait
#[derive(Default)]
pub struct CountingDelay {
    pub total_ns: u64,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}
