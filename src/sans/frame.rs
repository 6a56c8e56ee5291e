//! Timestamped byte frames delivered by the upstream framing layer.

use tartan_bitfield::bitfield;

use crate::time::Timestamp;

bitfield! {
    /// An 11-bit asynchronous serial sample: a start bit, eight data bits,
    /// a parity bit, and a stop bit.
    ///
    /// Only the data bits participate in decoding. The framing bits are
    /// exposed for inspection but never validated here.
    pub struct RawSample(u16) {
        [0] pub start_bit,
        [1..9] pub data: u8,
        [9] pub parity_bit,
        [10] pub stop_bit,
    }
}

/// One fully-framed byte, tagged with its position in the capture.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// The raw 11-bit sample.
    pub sample: RawSample,
    /// The instant the first bit of the sample began.
    pub start: Timestamp,
    /// The instant the last bit of the sample ended.
    pub end: Timestamp,
}

impl Frame {
    /// Construct a frame from a raw sample.
    pub fn new(sample: RawSample, start: Timestamp, end: Timestamp) -> Self {
        Self { sample, start, end }
    }

    /// Construct a frame from a bare data byte, synthesizing the framing
    /// bits (start low, stop high, odd parity).
    pub fn from_byte(data: u8, start: Timestamp, end: Timestamp) -> Self {
        let mut sample = RawSample::default();
        sample.set_data(data);
        sample.set_parity_bit(data.count_ones() % 2 == 0);
        sample.set_stop_bit(true);

        Self { sample, start, end }
    }

    /// The data byte carried by this frame.
    pub fn data(&self) -> u8 {
        self.sample.data()
    }
}
