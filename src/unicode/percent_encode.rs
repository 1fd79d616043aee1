use crate::character_sets::{CharacterClass, RESERVED, decode_entity};
use crate::compat::{String, Vec};
use percent_encoding::{percent_decode_str, percent_encode_byte};

/// Re-encode a component so that only bytes in `safe` appear raw.
///
/// Valid `%XX` entities are decoded when the byte is safe (in strict mode it
/// must also not be reserved) and otherwise re-emitted with uppercase hex.
/// A `%` that does not start a valid entity becomes `%25`.
pub fn escape_component(input: &str, safe: &CharacterClass, strict: bool) -> String {
    let bytes = input.as_bytes();
    let mut output = String::with_capacity(input.len());

    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'%' {
            match decode_entity(bytes, i) {
                Some(decoded) => {
                    let unescape = safe.contains(decoded) && !(strict && RESERVED.contains(decoded));
                    if unescape {
                        output.push(char::from(decoded));
                    } else {
                        output.push_str(percent_encode_byte(decoded));
                    }
                    i += 3;
                }
                None => {
                    output.push_str(percent_encode_byte(b'%'));
                    i += 1;
                }
            }
            continue;
        }

        if safe.contains(b) {
            output.push(char::from(b));
        } else {
            output.push_str(percent_encode_byte(b));
        }
        i += 1;
    }

    output
}

/// Decode every valid `%XX` entity, leaving malformed ones as literal text.
///
/// Decoded bytes that do not form valid UTF-8 are put back in `%XX` form so
/// the component stays a string.
pub fn unescape_component(input: &str) -> String {
    let decoded: Vec<u8> = percent_decode_str(input).collect();

    match String::from_utf8(decoded) {
        Ok(text) => text,
        Err(err) => {
            let bytes = err.into_bytes();
            let mut output = String::with_capacity(bytes.len());
            for chunk in bytes.utf8_chunks() {
                output.push_str(chunk.valid());
                for &b in chunk.invalid() {
                    output.push_str(percent_encode_byte(b));
                }
            }
            output
        }
    }
}
