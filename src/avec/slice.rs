//! Slice-based decoder implementation.
//!
//! Decodes packed capture slices: a sequence of 18-byte little-endian
//! records, each holding a raw 11-bit sample (`u16`) followed by the
//! frame's start and end offsets in nanoseconds (`u64` each).

use thiserror::Error;
use zerocopy::FromBytes;

use crate::sans::Decoder;
use crate::sans::decoder::EventKind;
use crate::sans::frame::{Frame, RawSample};
use crate::time::Timestamp;

use super::FromEvents;

/// An error occurring while decoding from a slice.
#[derive(Debug, Error)]
pub enum Error {
    /// The slice ended partway through a capture record.
    #[error("Unexpectedly reached the end of the slice.")]
    EndOfSlice,
}

/// Decode classified bytes from a packed capture slice, publishing to a
/// receiver. Uses the standard Qi catalog.
///
/// This method is also re-exported as `solenoid::avec::decode_slice`.
pub fn decode(r: &[u8], o: &mut impl FromEvents) -> Result<(), Error> {
    decode_with(&mut Decoder::new(), r, o)
}

/// Decode classified bytes from a packed capture slice, publishing to a
/// receiver, using a configured decoder.
pub fn decode_with(d: &mut Decoder, r: &[u8], o: &mut impl FromEvents) -> Result<(), Error> {
    #[repr(C, packed)]
    #[derive(FromBytes)]
    struct CaptureRecord {
        sample: [u8; 2],
        start: [u8; 8],
        end: [u8; 8],
    }

    let i = &mut 0; // Counter of bytes read, used to read records from the tip.

    while *i < r.len() {
        let record: [u8; 18] = take(r, i)?;
        let CaptureRecord { sample, start, end } = zerocopy::transmute!(record);

        let frame = Frame::new(
            RawSample::from(u16::from_le_bytes(sample)),
            Timestamp::from_nanos(u64::from_le_bytes(start)),
            Timestamp::from_nanos(u64::from_le_bytes(end)),
        );

        let event = d.advance(frame);
        match event.kind {
            EventKind::Header(packet) => o.header(packet, event.start, event.end),
            EventKind::Message(value) => o.message(value, event.start, event.end),
            EventKind::Checksum { received, computed } => {
                o.checksum(received, computed, event.start, event.end)
            }
            EventKind::Unknown(value) => o.unknown(value, event.start, event.end),
        }
    }

    Ok(())
}

/// Take an exact number of bytes from an offset in a slice, advancing the offset.
fn take<const N: usize>(r: &[u8], i: &mut usize) -> Result<[u8; N], Error> {
    let s = *i;
    *i += N;

    Ok(r.get(s..*i).ok_or(Error::EndOfSlice)?.try_into().unwrap())
}
