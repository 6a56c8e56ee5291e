use core::time::Duration;

use solenoid::sans::Decoder;
use solenoid::sans::catalog::{Catalog, Category, PacketDescriptor};
use solenoid::sans::check::compute_checksum;
use solenoid::sans::decoder::{ByteRole, Event, EventKind};
use solenoid::sans::frame::Frame;
use solenoid::sans::resync::{DEFAULT_RESYNC_GAP, should_resync};
use solenoid::time::Timestamp;

/// A byte at 2 kbps spans 5.5 ms; consecutive bytes of one packet are
/// pitched 6 ms apart, leaving a 0.5 ms gap well inside the threshold.
const BYTE_WIDTH_US: u64 = 5_500;
const BYTE_PITCH_US: u64 = 6_000;

fn frame_at(data: u8, index: u64) -> Frame {
    let start = Timestamp::from_micros(index * BYTE_PITCH_US);
    let end = Timestamp::from_micros(index * BYTE_PITCH_US + BYTE_WIDTH_US);
    Frame::from_byte(data, start, end)
}

fn feed(decoder: &mut Decoder, bytes: &[u8]) -> Vec<Event> {
    bytes
        .iter()
        .enumerate()
        .map(|(i, b)| decoder.advance(frame_at(*b, i as u64)))
        .collect()
}

#[test]
fn classifies_signal_strength_packet() {
    let mut decoder = Decoder::new();
    let events = feed(&mut decoder, &[0x01, 0x2a, 0x2b]);

    assert_eq!(events.len(), 3);
    assert_eq!(events[0].kind.to_string(), "SIG (0x01): Signal Strength");
    assert_eq!(events[1].kind.to_string(), "0x2a");
    assert_eq!(events[2].kind.to_string(), "OK: 0x2b");

    let roles: Vec<_> = events.iter().map(|e| e.kind.role()).collect();
    assert_eq!(
        roles,
        [ByteRole::Header, ByteRole::Message, ByteRole::Checksum]
    );
}

#[test]
fn events_span_their_frames() {
    let mut decoder = Decoder::new();
    let frame = frame_at(0x01, 3);
    let event = decoder.advance(frame);

    assert_eq!(event.start, frame.start);
    assert_eq!(event.end, frame.end);
}

#[test]
fn round_trips_every_standard_packet() {
    for packet in Catalog::standard().entries() {
        let payload: Vec<u8> = (0..packet.payload_size)
            .map(|i| i.wrapping_mul(37).wrapping_add(packet.header))
            .collect();

        let mut bytes = vec![packet.header];
        bytes.extend_from_slice(&payload);
        bytes.push(compute_checksum(packet.header, &payload));

        let mut decoder = Decoder::new();
        let events = feed(&mut decoder, &bytes);

        assert_eq!(events.len(), 2 + packet.payload_size as usize);
        assert_eq!(events[0].kind, EventKind::Header(packet));
        for (i, value) in payload.iter().enumerate() {
            assert_eq!(events[1 + i].kind, EventKind::Message(*value));
        }
        match events.last().unwrap().kind {
            EventKind::Checksum { received, computed } => assert_eq!(received, computed),
            kind => panic!("expected checksum event, got {kind:?}"),
        }
    }
}

#[test]
fn reports_any_corrupted_checksum_bit() {
    let expected = 0x01 ^ 0x2a;

    for bit in 0..8 {
        let corrupted = expected ^ (1 << bit);

        let mut decoder = Decoder::new();
        let events = feed(&mut decoder, &[0x01, 0x2a, corrupted]);

        match events[2].kind {
            EventKind::Checksum { received, computed } => {
                assert_eq!(received, corrupted);
                assert_eq!(computed, expected);
            }
            kind => panic!("expected checksum event, got {kind:?}"),
        }
    }

    let mut decoder = Decoder::new();
    let events = feed(&mut decoder, &[0x01, 0x2a, 0x2a]);
    assert_eq!(events[2].kind.to_string(), "INCONSISTENT: 0x2a != 0x2b");
}

#[test]
fn decoding_continues_after_checksum_mismatch() {
    let mut decoder = Decoder::new();
    let events = feed(&mut decoder, &[0x01, 0x2a, 0x00, 0x01, 0x2a, 0x2b]);

    assert_eq!(events[3].kind.role(), ByteRole::Header);
    assert_eq!(events[5].kind.to_string(), "OK: 0x2b");
}

static ZERO_PAYLOAD: [PacketDescriptor; 1] = [PacketDescriptor::new(
    0x0a,
    0,
    "PING",
    "Ping",
    Category::SimpleQuery,
)];

#[test]
fn zero_payload_packet_skips_straight_to_checksum() {
    let catalog = Catalog::new(&ZERO_PAYLOAD).unwrap();
    let mut decoder = Decoder::with_catalog(catalog);

    // The checksum of a zero-payload packet covers the header byte alone.
    let events = feed(&mut decoder, &[0x0a, 0x0a]);

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind.role(), ByteRole::Header);
    assert_eq!(events[1].kind.to_string(), "OK: 0x0a");
}

#[test]
fn recovers_immediately_after_unknown_byte() {
    let mut decoder = Decoder::new();
    let events = feed(&mut decoder, &[0x00, 0x01, 0x2a, 0x2b]);

    assert_eq!(events[0].kind, EventKind::Unknown(0x00));
    assert_eq!(events[0].kind.to_string(), "0x00");
    assert_eq!(events[1].kind.role(), ByteRole::Header);
    assert_eq!(events[3].kind.to_string(), "OK: 0x2b");
}

#[test]
fn abandons_packet_after_excessive_gap() {
    let mut decoder = Decoder::new();
    feed(&mut decoder, &[0x01, 0x2a]);

    // Two byte-pitches of silence, then a fresh header well past the gap
    // threshold. The half-assembled packet must not absorb it.
    let start = Timestamp::from_micros(4 * BYTE_PITCH_US);
    let end = Timestamp::from_micros(4 * BYTE_PITCH_US + BYTE_WIDTH_US);
    let event = decoder.advance(Frame::from_byte(0x01, start, end));

    assert_eq!(event.kind.role(), ByteRole::Header);
    assert_eq!(decoder.active().unwrap().header, 0x01);

    // The new packet's checksum covers only its own bytes.
    let event = decoder.advance(Frame::from_byte(
        0x2a,
        Timestamp::from_micros(5 * BYTE_PITCH_US),
        Timestamp::from_micros(5 * BYTE_PITCH_US + BYTE_WIDTH_US),
    ));
    assert_eq!(event.kind.role(), ByteRole::Message);

    let event = decoder.advance(Frame::from_byte(
        0x2b,
        Timestamp::from_micros(6 * BYTE_PITCH_US),
        Timestamp::from_micros(6 * BYTE_PITCH_US + BYTE_WIDTH_US),
    ));
    assert_eq!(event.kind.to_string(), "OK: 0x2b");
}

#[test]
fn gap_equal_to_threshold_does_not_resync() {
    let mut decoder = Decoder::new();

    let end_of_second = Timestamp::from_micros(BYTE_PITCH_US + BYTE_WIDTH_US);
    decoder.advance(Frame::from_byte(0x01, Timestamp::from_micros(0), Timestamp::from_micros(BYTE_WIDTH_US)));
    decoder.advance(Frame::from_byte(0x2a, Timestamp::from_micros(BYTE_PITCH_US), end_of_second));

    // Exactly 1 ms after the previous byte: still within the packet.
    let start = Timestamp::from_nanos(end_of_second.as_nanos() + 1_000_000);
    let event = decoder.advance(Frame::from_byte(0x2b, start, Timestamp::from_nanos(start.as_nanos() + 1)));

    assert_eq!(event.kind.to_string(), "OK: 0x2b");
}

#[test]
fn configured_gap_overrides_default() {
    let mut decoder = Decoder::new();
    decoder.set_resync_gap(Duration::from_millis(10));

    feed(&mut decoder, &[0x01, 0x2a]);

    // A 5 ms pause would trip the default threshold, but not this one.
    let start = Timestamp::from_micros(2 * BYTE_PITCH_US + 5_000);
    let event = decoder.advance(Frame::from_byte(
        0x2b,
        start,
        Timestamp::from_micros(2 * BYTE_PITCH_US + 5_000 + BYTE_WIDTH_US),
    ));

    assert_eq!(event.kind.to_string(), "OK: 0x2b");
}

#[test]
fn reset_discards_state_and_timing() {
    let mut decoder = Decoder::new();
    feed(&mut decoder, &[0x01, 0x2a]);

    assert_eq!(decoder.active().unwrap().mnemonic, "SIG");
    assert_eq!(decoder.last_role(), ByteRole::Message);

    decoder.reset();

    assert!(decoder.active().is_none());
    assert_eq!(decoder.last_role(), ByteRole::Unknown);

    // With timing forgotten, the next byte is a fresh header regardless of
    // how far in the future it lands.
    let start = Timestamp::from_millis(5_000);
    let event = decoder.advance(Frame::from_byte(0x01, start, Timestamp::from_millis(5_006)));
    assert_eq!(event.kind.role(), ByteRole::Header);
}

#[test]
fn checksum_is_xor_fold() {
    assert_eq!(compute_checksum(0, &[]), 0);
    assert_eq!(compute_checksum(0, &[0x01, 0x2a]), 0x2b);
    assert_eq!(compute_checksum(0x01, &[0x2a]), 0x2b);
    assert_eq!(compute_checksum(0, &[0xff, 0xff]), 0);
}

#[test]
fn resync_fires_strictly_beyond_gap() {
    let previous_end = Timestamp::from_millis(10);

    let at_threshold = Timestamp::from_millis(11);
    assert!(!should_resync(previous_end, at_threshold, DEFAULT_RESYNC_GAP));

    let beyond = Timestamp::from_nanos(at_threshold.as_nanos() + 1);
    assert!(should_resync(previous_end, beyond, DEFAULT_RESYNC_GAP));
}
