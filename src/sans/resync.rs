//! Helper for detecting loss of byte synchronization.

use core::time::Duration;

use crate::time::Timestamp;

/// The default inter-byte gap beyond which a packet is abandoned.
///
/// Bytes within one Qi packet are transmitted back-to-back; a pause longer
/// than this indicates the transmitter stopped or restarted.
pub const DEFAULT_RESYNC_GAP: Duration = Duration::from_millis(1);

/// Whether the gap between two adjacent bytes forces resynchronization.
///
/// Returns true when the time from the end of the previous byte to the
/// start of the current one strictly exceeds `gap`.
pub fn should_resync(previous_end: Timestamp, current_start: Timestamp, gap: Duration) -> bool {
    current_start - previous_end > gap
}
