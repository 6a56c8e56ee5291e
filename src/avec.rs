//! Convenience interfaces for common decoding patterns.
//!
//! The functions in this module are suited to decoding recorded captures:
//! [`slice`] walks a packed capture slice, publishing classified bytes to
//! the [`FromEvents`] trait, and [`iter`] adapts any iterator of frames
//! into an iterator of events.

pub mod iter;
pub mod slice;

pub use iter::events;
pub use slice::decode as decode_slice;

use crate::sans::catalog::PacketDescriptor;
use crate::time::Timestamp;

/// Receive classified bytes from a capture.
///
/// One method is called per decoded byte, according to its role. The
/// default implementation of each method ignores received events.
#[allow(unused_variables)]
pub trait FromEvents {
    /// Receive a recognized packet header.
    fn header(&mut self, packet: &'static PacketDescriptor, start: Timestamp, end: Timestamp) {}
    /// Receive a payload byte.
    fn message(&mut self, value: u8, start: Timestamp, end: Timestamp) {}
    /// Receive a checksum byte, along with the value computed over the
    /// packet's header and payload.
    fn checksum(&mut self, received: u8, computed: u8, start: Timestamp, end: Timestamp) {}
    /// Receive a byte not recognized as part of any packet.
    fn unknown(&mut self, value: u8, start: Timestamp, end: Timestamp) {}
}
