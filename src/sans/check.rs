//! Helper for computing packet checksums.

/// Accumulate a slice of bytes into a checksum value.
///
/// A Qi packet's checksum is the bitwise XOR of the header byte and every
/// payload byte, starting from an accumulator of zero.
pub fn compute_checksum(init: u8, r: &[u8]) -> u8 {
    r.iter().fold(init, |acc, b| acc ^ b)
}
