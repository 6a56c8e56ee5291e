//! Iterator-based decoder implementation.

use crate::sans::Decoder;
use crate::sans::decoder::Event;
use crate::sans::frame::Frame;

/// Decode classified events from an iterator of frames, using the standard
/// Qi catalog.
///
/// This method is also re-exported as `solenoid::avec::events`.
pub fn events<I: IntoIterator<Item = Frame>>(frames: I) -> Events<I::IntoIter> {
    events_with(Decoder::new(), frames)
}

/// Decode classified events from an iterator of frames, using a configured
/// decoder.
pub fn events_with<I: IntoIterator<Item = Frame>>(
    decoder: Decoder,
    frames: I,
) -> Events<I::IntoIter> {
    Events {
        decoder,
        frames: frames.into_iter(),
    }
}

/// An iterator classifying a stream of frames, one event per frame.
#[derive(Debug)]
pub struct Events<I> {
    decoder: Decoder,
    frames: I,
}

impl<I> Events<I> {
    /// The underlying decoder, for inspection.
    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }
}

impl<I: Iterator<Item = Frame>> Iterator for Events<I> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        self.frames.next().map(|frame| self.decoder.advance(frame))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.frames.size_hint()
    }
}
