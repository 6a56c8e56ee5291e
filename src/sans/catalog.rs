//! The table of recognized Qi packet headers.

use core::fmt;

use thiserror::Error;

/// The broad function of a packet type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    StatusUpdate,
    PowerControl,
    DataRequest,
    SimpleQuery,
    /// Used across several communication phases.
    Multiple,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StatusUpdate => "Status Update",
            Self::PowerControl => "Power Control",
            Self::DataRequest => "Data Request",
            Self::SimpleQuery => "Simple Query",
            Self::Multiple => "Multiple",
        })
    }
}

/// An immutable description of one packet type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketDescriptor {
    /// The header byte identifying this packet type.
    pub header: u8,
    /// The count of payload bytes between the header and the checksum.
    pub payload_size: u8,
    /// A short display mnemonic.
    pub mnemonic: &'static str,
    /// The packet type's full name.
    pub full_name: &'static str,
    /// The packet type's category.
    pub category: Category,
}

impl PacketDescriptor {
    /// Construct a descriptor. Intended for building custom catalogs.
    pub const fn new(
        header: u8,
        payload_size: u8,
        mnemonic: &'static str,
        full_name: &'static str,
        category: Category,
    ) -> Self {
        Self {
            header,
            payload_size,
            mnemonic,
            full_name,
            category,
        }
    }
}

impl fmt::Display for PacketDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:02x}): {}", self.mnemonic, self.header, self.full_name)
    }
}

/// An error validating a catalog's entries.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two entries share a header byte.
    #[error("Duplicate header byte 0x{0:02x}.")]
    DuplicateHeader(u8),
    /// Entries are not sorted ascending by header byte.
    #[error("Header byte 0x{0:02x} listed after 0x{1:02x}.")]
    OutOfOrder(u8, u8),
}

/// A read-only mapping from header bytes to packet descriptors.
///
/// Catalogs borrow a `'static` table and are freely copyable, so a single
/// table may back any number of concurrent decoding sessions.
#[derive(Debug, Clone, Copy)]
pub struct Catalog(&'static [PacketDescriptor]);

impl Catalog {
    /// The catalog of standard Qi packet types.
    pub fn standard() -> Self {
        Self(&STANDARD)
    }

    /// Construct a catalog from a custom table.
    ///
    /// Entries must be sorted ascending by header byte, with no header
    /// appearing twice. Misconfiguration is reported here, at construction,
    /// rather than surfacing as misclassification during decoding.
    pub fn new(entries: &'static [PacketDescriptor]) -> Result<Self, CatalogError> {
        for pair in entries.windows(2) {
            if pair[1].header == pair[0].header {
                Err(CatalogError::DuplicateHeader(pair[0].header))?;
            }
            if pair[1].header < pair[0].header {
                Err(CatalogError::OutOfOrder(pair[1].header, pair[0].header))?;
            }
        }

        Ok(Self(entries))
    }

    /// Retrieve the descriptor for a header byte, if one exists.
    pub fn lookup(&self, header: u8) -> Option<&'static PacketDescriptor> {
        self.0
            .binary_search_by_key(&header, |p| p.header)
            .ok()
            .map(|i| &self.0[i])
    }

    /// The catalog's entries, sorted ascending by header byte.
    pub fn entries(&self) -> &'static [PacketDescriptor] {
        self.0
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

use self::Category::{DataRequest, Multiple, PowerControl, SimpleQuery, StatusUpdate};
use self::PacketDescriptor as P;

/// The standard Qi packet types, sorted ascending by header byte.
static STANDARD: [PacketDescriptor; 45] = [
    P::new(0x01, 1, "SIG", "Signal Strength", StatusUpdate),
    P::new(0x02, 1, "EPT", "End Power Transfer", PowerControl),
    P::new(0x03, 1, "CE", "Control Error", PowerControl),
    P::new(0x04, 1, "RP8", "Received Power (8 bit)", StatusUpdate),
    P::new(0x05, 1, "CHS", "Charge Status", StatusUpdate),
    P::new(0x06, 1, "PCH", "Power Control Hold-Off", StatusUpdate),
    P::new(0x07, 1, "GRQ", "General Request", DataRequest),
    P::new(0x09, 1, "NEGO", "Renegotiate", SimpleQuery),
    P::new(0x15, 1, "DSR", "Data Stream Response", DataRequest),
    P::new(0x16, 1, "ADT/1e", "Aux Data Transport (even)", SimpleQuery),
    P::new(0x17, 1, "ADT/1o", "Aux Data Transport (odd)", SimpleQuery),
    P::new(0x18, 1, "PROP/1e", "Proprietary", Multiple),
    P::new(0x19, 1, "PROP/1o", "Proprietary", Multiple),
    P::new(0x20, 2, "SRQ", "Specific Request", SimpleQuery),
    P::new(0x22, 2, "FOD", "FOD Status", SimpleQuery),
    P::new(0x25, 2, "ADC", "Aux Data Control", SimpleQuery),
    P::new(0x26, 2, "ADT/2e", "Aux Data Transport (even)", SimpleQuery),
    P::new(0x27, 2, "ADT/2o", "Aux Data Transport (odd)", SimpleQuery),
    P::new(0x28, 2, "PROP/2e", "Proprietary", Multiple),
    P::new(0x29, 2, "PROP/2o", "Proprietary", Multiple),
    P::new(0x31, 3, "RP", "Received Power (16 bit)", SimpleQuery),
    P::new(0x36, 3, "ADT/3e", "Aux Data Transport (even)", SimpleQuery),
    P::new(0x37, 3, "ADT/3o", "Aux Data Transport (odd)", SimpleQuery),
    P::new(0x38, 3, "PROP/3", "Proprietary", Multiple),
    P::new(0x46, 4, "ADT/4e", "Aux Data Transport (even)", SimpleQuery),
    P::new(0x47, 4, "ADT/4o", "Aux Data Transport (odd)", SimpleQuery),
    P::new(0x48, 4, "PROP/4", "Proprietary", Multiple),
    P::new(0x51, 5, "CFG", "Configuration", SimpleQuery),
    P::new(0x54, 5, "WPID/msb", "Wireless Power ID (msb)", SimpleQuery),
    P::new(0x55, 5, "WPID/lsb", "Wireless Power ID (lsb)", SimpleQuery),
    P::new(0x56, 5, "ADT/5e", "Aux Data Transport (even)", SimpleQuery),
    P::new(0x57, 5, "ADT/5o", "Aux Data Transport (odd)", SimpleQuery),
    P::new(0x58, 5, "PROP/5", "Proprietary", Multiple),
    P::new(0x66, 6, "ADT/6e", "Aux Data Transport (even)", SimpleQuery),
    P::new(0x67, 6, "ADT/6o", "Aux Data Transport (odd)", SimpleQuery),
    P::new(0x68, 6, "PROP/6", "Proprietary", Multiple),
    P::new(0x71, 7, "ID", "Identification", StatusUpdate),
    P::new(0x76, 7, "ADT/7e", "Aux Data Transport (even)", SimpleQuery),
    P::new(0x77, 7, "ADT/7o", "Aux Data Transport (odd)", SimpleQuery),
    P::new(0x78, 7, "PROP/7", "Proprietary", Multiple),
    P::new(0x81, 8, "XID", "Extended Identification", StatusUpdate),
    P::new(0x84, 8, "PROP/8", "Proprietary", Multiple),
    P::new(0xA4, 12, "PROP/12", "Proprietary", Multiple),
    P::new(0xC4, 16, "PROP/16", "Proprietary", Multiple),
    P::new(0xE4, 20, "PROP/20", "Proprietary", Multiple),
];
