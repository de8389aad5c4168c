//! # Internal utilities
//!
//! VISCA packs multi-byte numbers one nibble per wire byte: the value
//! `0x1234` occupies four payload bytes `01 02 03 04`, most significant
//! nibble first. The high nibble of each wire byte is reserved for the
//! message signature, so writers must OR into the low nibble only.

/// Reads a nibble-packed `i16` from 4 wire bytes.
///
/// `[0x01, 0x02, 0x03, 0x04]` becomes `0x1234`. Negative values round-trip
/// via the two's-complement bit pattern (`[0x0f; 4]` becomes `-1`).
pub(crate) fn read_i16_nibbles(buf: &[u8]) -> i16 {
    let v = (u16::from(buf[0] & 0xf) << 12)
        | (u16::from(buf[1] & 0xf) << 8)
        | (u16::from(buf[2] & 0xf) << 4)
        | u16::from(buf[3] & 0xf);
    v as i16
}

/// Writes `value` into the low nibbles of 4 wire bytes.
///
/// The high nibble of each byte is left untouched: it may carry signature
/// bits for the specific message.
pub(crate) fn write_i16_nibbles(value: i16, buf: &mut [u8]) {
    let v = value as u16;
    buf[0] |= ((v >> 12) & 0xf) as u8;
    buf[1] |= ((v >> 8) & 0xf) as u8;
    buf[2] |= ((v >> 4) & 0xf) as u8;
    buf[3] |= (v & 0xf) as u8;
}

/// Reads a `u8` split across the low nibbles of 2 wire bytes.
pub(crate) fn read_u8_nibbles(buf: &[u8]) -> u8 {
    ((buf[0] & 0xf) << 4) | (buf[1] & 0xf)
}

/// Writes a `u8` into the low nibbles of 2 wire bytes.
pub(crate) fn write_u8_nibbles(value: u8, buf: &mut [u8]) {
    buf[0] |= (value >> 4) & 0xf;
    buf[1] |= value & 0xf;
}

/// Bytewise `payload & mask == signature` over the signature length.
///
/// Payloads shorter than the signature never match. Payload bytes beyond the
/// signature are ignored; some commands carry trailing bytes the signature
/// does not constrain.
pub(crate) fn masked_eq(payload: &[u8], signature: &[u8], mask: &[u8]) -> bool {
    payload.len() >= signature.len()
        && payload
            .iter()
            .zip(mask)
            .map(|(p, m)| p & m)
            .eq(signature.iter().copied())
}
