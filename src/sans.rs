//! Core state machine for classifying Qi communication bytes.
//!
//! This module is intended for applications that need fine control over
//! decoder internals, such as analyzer hosts that deliver frames one at a
//! time. See [`crate::avec`] for implementations covering common decoding
//! patterns.
//!
//! # Architecture
//!
//! The [`Decoder`] holds all cross-byte state for one decoding session.
//! Feeding it a timestamped [`frame::Frame`] with [`Decoder::advance`]
//! mutates that state exactly once and returns exactly one classified
//! [`decoder::Event`] — a pure streaming transform with no I/O, no clock,
//! and no allocation.
//!
//! The decoder leans on three small, independently usable pieces:
//!
//! - [`catalog`]: the immutable table of recognized packet headers.
//! - [`check`]: the XOR checksum accumulator.
//! - [`resync`]: the inter-byte gap test that abandons stalled packets.
//!
//! Parity and stop bits of a raw sample are carried on the frame but never
//! validated; upstream framing is trusted to have extracted the data bits
//! correctly.

pub mod catalog;
pub mod check;
pub mod decoder;
pub mod frame;
pub mod resync;

pub use decoder::Decoder;
