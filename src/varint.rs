//! A compact variable-length signed integer codec, used to length-prefix
//! property records in the value/qualifier blocks.
//!
//! This crate hand-rolls the primitive rather than pulling in a generic
//! varint dependency: the interface the rest of the codec consumes names
//! three precise operations (`write`, `decode_vint_size`, `read_long`), and
//! storage engines in this space conventionally hand-roll exactly this
//! shape rather than take a dependency on it. The encoding mirrors the
//! classic "VInt" scheme used by wide-column stores: small values encode to
//! a single byte; larger ones spend their first byte recording how many
//! further bytes follow, so a reader can determine a record's total length
//! from its lead byte alone without scanning continuation bits.

use crate::error::{CodecError, Result};

/// Appends the VInt encoding of `value` to `out`.
pub fn write(value: i64, out: &mut Vec<u8>) {
    if (-112..=127).contains(&value) {
        out.push(value as u8);
        return;
    }

    let mut negative = false;
    let mut magnitude = value;
    if value < 0 {
        magnitude = !value;
        negative = true;
    }

    let mut byte_count = 0u32;
    let mut probe = magnitude;
    while probe != 0 {
        probe >>= 8;
        byte_count += 1;
    }

    let lead: i32 = if negative { -120 - byte_count as i32 } else { -112 - byte_count as i32 };
    out.push(lead as u8);

    for idx in (0..byte_count).rev() {
        let shift = idx * 8;
        out.push(((magnitude >> shift) & 0xFF) as u8);
    }
}

/// Reports the total number of bytes (lead byte included) that make up the
/// VInt record beginning with `first_byte`.
pub fn decode_vint_size(first_byte: u8) -> usize {
    let value = first_byte as i8 as i32;
    if value >= -112 {
        1
    } else if value < -120 {
        (-119 - value) as usize
    } else {
        (-111 - value) as usize
    }
}

fn is_negative(first_byte: u8) -> bool {
    let value = first_byte as i8 as i32;
    value < -120 || (-112..0).contains(&value)
}

/// Decodes a full VInt record. `len_bytes` must contain exactly
/// `decode_vint_size(len_bytes[0])` bytes.
pub fn read_long(len_bytes: &[u8]) -> Result<i64> {
    let first = *len_bytes.first().ok_or(CodecError::BadLengthPrefix { position: 0 })?;
    let size = decode_vint_size(first);
    if len_bytes.len() != size {
        return Err(CodecError::BadLengthPrefix { position: 0 });
    }
    if size == 1 {
        return Ok(first as i8 as i64);
    }
    let mut acc: i64 = 0;
    for &b in &len_bytes[1..] {
        acc = (acc << 8) | (b as i64);
    }
    Ok(if is_negative(first) { acc ^ -1 } else { acc })
}

/// Convenience: writes a non-negative length (as used to prefix property
/// records, where negative lengths never occur).
pub fn write_len(len: usize, out: &mut Vec<u8>) {
    write(len as i64, out);
}

/// Convenience: reads a length prefix starting at `bytes[0]`, returning the
/// decoded length and the number of bytes the prefix itself occupied.
pub fn read_len(bytes: &[u8]) -> Result<(usize, usize)> {
    let first = *bytes.first().ok_or(CodecError::BadLengthPrefix { position: 0 })?;
    let size = decode_vint_size(first);
    if bytes.len() < size {
        return Err(CodecError::BadLengthPrefix { position: 0 });
    }
    let value = read_long(&bytes[..size])?;
    if value < 0 {
        return Err(CodecError::BadLengthPrefix { position: 0 });
    }
    Ok((value as usize, size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(value: i64) {
        let mut buf = Vec::new();
        write(value, &mut buf);
        let size = decode_vint_size(buf[0]);
        assert_eq!(size, buf.len());
        assert_eq!(read_long(&buf).unwrap(), value);
    }

    #[test]
    fn round_trips_small_and_large_values() {
        for v in [0i64, 1, -1, 127, -112, 128, -113, 1000, -1000, i64::MAX, i64::MIN, 0xFF, 0xFFFF, 0xFFFF_FFFF] {
            round_trip(v);
        }
    }

    #[test]
    fn single_byte_values_round_trip_via_len_helpers() {
        for len in [0usize, 1, 127] {
            let mut buf = Vec::new();
            write_len(len, &mut buf);
            assert_eq!(buf.len(), 1);
            let (decoded, consumed) = read_len(&buf).unwrap();
            assert_eq!(decoded, len);
            assert_eq!(consumed, 1);
        }
    }

    #[test]
    fn large_lengths_round_trip() {
        for len in [128usize, 300, 70000, 1 << 20] {
            let mut buf = Vec::new();
            write_len(len, &mut buf);
            let (decoded, consumed) = read_len(&buf).unwrap();
            assert_eq!(decoded, len);
            assert_eq!(consumed, buf.len());
        }
    }
}
