//! Codepoint codec: UTF-8 bytes to and from raw codepoint values.
//!
//! The codec is deliberately wider than Unicode: any value up to
//! [`MAX_CODEPOINT`] can be written with a four-byte sequence, and decoding
//! does not reject overlong forms or surrogates. Callers that need valid text
//! validate afterwards (the Punycode decoder goes through `String::from_utf8`).

use crate::compat::Vec;
use crate::error::Utf8Error;

/// A raw codepoint value.
pub type Codepoint = u32;

/// The largest value the codec will encode (21 bits).
pub const MAX_CODEPOINT: Codepoint = 0x1F_FFFF;

/// Decode the codepoint starting at `position`.
///
/// Returns the codepoint and the number of bytes it occupied.
///
/// # Errors
///
/// `InvalidEncoding` on a continuation byte in lead position, a lead byte
/// above `11110xxx`, a truncated sequence, or a bad continuation byte.
pub fn decode_one(bytes: &[u8], position: usize) -> Result<(Codepoint, usize), Utf8Error> {
    let lead = *bytes.get(position).ok_or(Utf8Error::InvalidEncoding)?;

    let (length, initial) = match lead {
        0x00..=0x7F => return Ok((Codepoint::from(lead), 1)),
        0xC0..=0xDF => (2, lead & 0x1F),
        0xE0..=0xEF => (3, lead & 0x0F),
        0xF0..=0xF7 => (4, lead & 0x07),
        // 10xxxxxx is a continuation byte, 11111xxx is never a lead
        _ => return Err(Utf8Error::InvalidEncoding),
    };

    let continuation = bytes
        .get(position + 1..position + length)
        .ok_or(Utf8Error::InvalidEncoding)?;

    let mut value = Codepoint::from(initial);
    for &byte in continuation {
        if byte & 0xC0 != 0x80 {
            return Err(Utf8Error::InvalidEncoding);
        }
        value = (value << 6) | Codepoint::from(byte & 0x3F);
    }

    Ok((value, length))
}

/// Append the encoding of `codepoint` to `out`.
///
/// # Errors
///
/// `InvalidCodepoint` if the value is above [`MAX_CODEPOINT`].
pub fn encode_one(codepoint: Codepoint, out: &mut Vec<u8>) -> Result<(), Utf8Error> {
    match codepoint {
        0..=0x7F => out.push(codepoint as u8),
        0x80..=0x7FF => out.extend_from_slice(&[
            0xC0 | (codepoint >> 6) as u8,
            0x80 | (codepoint & 0x3F) as u8,
        ]),
        0x800..=0xFFFF => out.extend_from_slice(&[
            0xE0 | (codepoint >> 12) as u8,
            0x80 | ((codepoint >> 6) & 0x3F) as u8,
            0x80 | (codepoint & 0x3F) as u8,
        ]),
        0x1_0000..=MAX_CODEPOINT => out.extend_from_slice(&[
            0xF0 | (codepoint >> 18) as u8,
            0x80 | ((codepoint >> 12) & 0x3F) as u8,
            0x80 | ((codepoint >> 6) & 0x3F) as u8,
            0x80 | (codepoint & 0x3F) as u8,
        ]),
        _ => return Err(Utf8Error::InvalidCodepoint),
    }
    Ok(())
}

/// Decode a whole byte sequence into codepoints.
///
/// # Errors
///
/// Propagates the first [`decode_one`] failure.
pub fn to_codepoints(bytes: &[u8]) -> Result<Vec<Codepoint>, Utf8Error> {
    let mut codepoints = Vec::with_capacity(bytes.len());
    let mut position = 0;
    while position < bytes.len() {
        let (codepoint, consumed) = decode_one(bytes, position)?;
        codepoints.push(codepoint);
        position += consumed;
    }
    Ok(codepoints)
}

/// Encode a codepoint sequence into bytes.
///
/// # Errors
///
/// Propagates the first [`encode_one`] failure.
pub fn from_codepoints(codepoints: &[Codepoint]) -> Result<Vec<u8>, Utf8Error> {
    let mut out = Vec::with_capacity(codepoints.len());
    for &codepoint in codepoints {
        encode_one(codepoint, &mut out)?;
    }
    Ok(out)
}
