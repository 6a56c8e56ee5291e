//! The byte-to-packet state machine.

use core::fmt;
use core::time::Duration;

use crate::time::Timestamp;

use super::catalog::{Catalog, PacketDescriptor};
use super::check::compute_checksum;
use super::frame::Frame;
use super::resync::{DEFAULT_RESYNC_GAP, should_resync};

/// The largest possible packet: a header byte plus 255 payload bytes.
const MAX_PACKET: usize = 256;

/// The role assigned to a classified byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteRole {
    /// A byte not recognized as the start of any packet.
    Unknown,
    /// The header byte of a recognized packet.
    Header,
    /// A payload byte of the packet in progress.
    Message,
    /// The trailing checksum byte of a packet.
    Checksum,
}

/// The classification given to a byte, carrying its display data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A recognized packet header.
    Header(&'static PacketDescriptor),
    /// A payload byte.
    Message(u8),
    /// A checksum byte, with the value computed over the packet's header
    /// and payload for comparison.
    Checksum { received: u8, computed: u8 },
    /// An unrecognized byte outside any packet.
    Unknown(u8),
}

impl EventKind {
    /// The role this classification assigns.
    pub fn role(&self) -> ByteRole {
        match self {
            Self::Header(_) => ByteRole::Header,
            Self::Message(_) => ByteRole::Message,
            Self::Checksum { .. } => ByteRole::Checksum,
            Self::Unknown(_) => ByteRole::Unknown,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header(packet) => write!(f, "{packet}"),
            Self::Message(value) | Self::Unknown(value) => write!(f, "0x{value:02x}"),
            Self::Checksum { received, computed } if received == computed => {
                write!(f, "OK: 0x{received:02x}")
            }
            Self::Checksum { received, computed } => {
                write!(f, "INCONSISTENT: 0x{received:02x} != 0x{computed:02x}")
            }
        }
    }
}

/// One classified byte: a role and display data, spanning the frame that
/// carried the byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// The classification of the byte.
    pub kind: EventKind,
    /// The start of the frame that carried the byte.
    pub start: Timestamp,
    /// The end of the frame that carried the byte.
    pub end: Timestamp,
}

/// The role expected of the next incoming byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    Header,
    Message,
    Checksum,
}

/// A decoding session's state machine.
///
/// One decoder owns all state for one session. Bytes must be fed in capture
/// order; each call to [`advance`](Self::advance) classifies exactly one
/// byte. Independent sessions may run in parallel, sharing a catalog.
#[derive(Debug)]
pub struct Decoder {
    catalog: Catalog,
    resync_gap: Duration,

    active: Option<&'static PacketDescriptor>,
    expected: Expect,
    remaining: u8,
    accumulated: [u8; MAX_PACKET],
    accumulated_len: usize,

    last_role: ByteRole,
    last_end: Option<Timestamp>,
}

impl Decoder {
    /// Construct a decoder over the standard Qi catalog.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::standard())
    }

    /// Construct a decoder over a custom catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            resync_gap: DEFAULT_RESYNC_GAP,
            active: None,
            expected: Expect::Header,
            remaining: 0,
            accumulated: [0; MAX_PACKET],
            accumulated_len: 0,
            last_role: ByteRole::Unknown,
            last_end: None,
        }
    }

    /// Set the inter-byte gap beyond which an in-progress packet is
    /// abandoned. Defaults to [`DEFAULT_RESYNC_GAP`].
    pub fn set_resync_gap(&mut self, gap: Duration) {
        self.resync_gap = gap;
    }

    /// The descriptor of the packet currently being assembled, if any.
    pub fn active(&self) -> Option<&'static PacketDescriptor> {
        self.active
    }

    /// The role assigned to the most recently processed byte. For
    /// inspection only; never consulted by the decoder itself.
    pub fn last_role(&self) -> ByteRole {
        self.last_role
    }

    /// Classify one byte, advancing the session's state.
    pub fn advance(&mut self, frame: Frame) -> Event {
        let value = frame.data();

        // An excessive gap since the previous byte means the transmitter
        // stopped or restarted; the partial packet is silently abandoned.
        if let Some(last_end) = self.last_end {
            if should_resync(last_end, frame.start, self.resync_gap) {
                self.abandon();
            }
        }

        let kind = match self.expected {
            Expect::Header => match self.catalog.lookup(value) {
                Some(packet) => {
                    self.active = Some(packet);
                    self.accumulated[0] = value;
                    self.accumulated_len = 1;
                    self.remaining = packet.payload_size;
                    self.expected = if self.remaining == 0 {
                        Expect::Checksum
                    } else {
                        Expect::Message
                    };

                    EventKind::Header(packet)
                }
                None => {
                    // A stray byte is a complete, self-contained event; the
                    // next byte is again expected to be a header.
                    self.abandon();

                    EventKind::Unknown(value)
                }
            },
            Expect::Message => {
                self.accumulated[self.accumulated_len] = value;
                self.accumulated_len += 1;

                self.remaining -= 1;
                if self.remaining == 0 {
                    self.expected = Expect::Checksum;
                }

                EventKind::Message(value)
            }
            Expect::Checksum => {
                let computed = compute_checksum(0, &self.accumulated[..self.accumulated_len]);

                self.active = None;
                self.expected = Expect::Header;

                EventKind::Checksum {
                    received: value,
                    computed,
                }
            }
        };

        self.last_role = kind.role();
        self.last_end = Some(frame.end);

        Event {
            kind,
            start: frame.start,
            end: frame.end,
        }
    }

    /// Return the decoder to its initial state, discarding any packet in
    /// progress and forgetting the previous byte's timing.
    pub fn reset(&mut self) {
        self.abandon();
        self.last_role = ByteRole::Unknown;
        self.last_end = None;
    }

    /// Discard any packet in progress and expect a header next.
    fn abandon(&mut self) {
        self.active = None;
        self.expected = Expect::Header;
        self.remaining = 0;
        self.accumulated_len = 0;
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}
