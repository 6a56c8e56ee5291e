//! Opaque capture timestamps.
//!
//! Timestamps are monotonic instants within a capture, decoupled from any
//! clock source. Subtracting two timestamps yields a [`Duration`], which is
//! all the decoder needs to judge inter-byte gaps.

use core::ops::Sub;
use core::time::Duration;

/// A monotonic instant within a capture, with nanosecond resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Construct a timestamp from nanoseconds since the capture origin.
    pub const fn from_nanos(nanos: u64) -> Self {
        Self(nanos)
    }

    /// Construct a timestamp from microseconds since the capture origin.
    pub const fn from_micros(micros: u64) -> Self {
        Self(micros * 1_000)
    }

    /// Construct a timestamp from milliseconds since the capture origin.
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis * 1_000_000)
    }

    /// The offset from the capture origin, in nanoseconds.
    pub const fn as_nanos(self) -> u64 {
        self.0
    }
}

impl Sub for Timestamp {
    type Output = Duration;

    /// The elapsed time between two instants, saturating to zero if `rhs`
    /// is the later of the pair.
    fn sub(self, rhs: Self) -> Duration {
        Duration::from_nanos(self.0.saturating_sub(rhs.0))
    }
}
