#![no_std]

//! A streaming decoder for Qi wireless-power communication packets.
//!
//! Solenoid classifies a serial byte stream of Qi device-to-charger traffic
//! into protocol packets: headers recognized from a fixed catalog, their
//! declared payload bytes, and a trailing XOR checksum. Bytes are processed
//! one at a time with no lookahead, so the decoder suits live capture
//! pipelines as well as recorded data.
//!
//! Most users should begin with the interfaces in the [`avec`] module, which
//! cover decoding from packed capture slices and from iterators of frames.
//! For finer control over stepping and state (such as embedding in an
//! analyzer host), drive the decoder in the [`sans`] module directly.

pub mod avec;
pub mod sans;
pub mod time;
