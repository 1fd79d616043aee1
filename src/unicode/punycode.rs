//! Punycode ([RFC 3492](https://www.rfc-editor.org/rfc/rfc3492)) codec.
//!
//! Works on single labels and returns the bare Bootstring form; the `xn--`
//! prefix is the caller's business. All accumulators are `u32` and every
//! step that could wrap is checked, so hostile input fails with
//! [`PunycodeError::Overflow`] instead of producing garbage.

use crate::compat::{String, Vec};
use crate::error::PunycodeError;
use crate::unicode::utf8::{self, Codepoint};

const BASE: u32 = 36;
const TMIN: u32 = 1;
const TMAX: u32 = 26;
const SKEW: u32 = 38;
const DAMP: u32 = 700;
const INITIAL_BIAS: u32 = 72;
const INITIAL_N: u32 = 128;
const DELIMITER: char = '-';

/// Base-36 digit values, -1 for anything else (case-insensitive)
const BASIC_TO_DIGIT: [i8; 256] = {
    let mut table = [-1i8; 256];

    let mut i = 0;
    while i < 26 {
        table[b'a' as usize + i] = i as i8;
        table[b'A' as usize + i] = i as i8;
        i += 1;
    }
    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = 26 + i as i8;
        i += 1;
    }

    table
};

const DIGIT_TO_BASIC: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

fn basic_to_digit(b: u8) -> Option<u32> {
    let digit = BASIC_TO_DIGIT[b as usize];
    (digit >= 0).then_some(digit as u32)
}

fn digit_to_basic(digit: u32) -> char {
    char::from(DIGIT_TO_BASIC[digit as usize % DIGIT_TO_BASIC.len()])
}

/// Threshold `t(k)` clamped to `[TMIN, TMAX]`.
fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias {
        TMIN
    } else if k >= bias + TMAX {
        TMAX
    } else {
        k - bias
    }
}

/// Bias adaptation (RFC 3492 §6.1).
fn adapt(mut delta: u32, num_points: u32, first_time: bool) -> u32 {
    delta /= if first_time { DAMP } else { 2 };
    delta += delta / num_points;

    let mut k = 0;
    while delta > ((BASE - TMIN) * TMAX) / 2 {
        delta /= BASE - TMIN;
        k += BASE;
    }
    k + ((BASE - TMIN + 1) * delta) / (delta + SKEW)
}

/// Check if a label contains anything outside ASCII.
pub fn needs_punycoding(label: &str) -> bool {
    !label.is_ascii()
}

/// Punycode a UTF-8 label.
///
/// # Errors
///
/// [`PunycodeError::Overflow`] if the delta accumulator would wrap.
pub fn encode(label: &str) -> Result<String, PunycodeError> {
    let codepoints = utf8::to_codepoints(label.as_bytes())?;
    encode_codepoints(&codepoints)
}

/// Punycode a sequence of codepoints.
///
/// Basic codepoints are copied first, followed by `-` only when there is
/// something non-basic left to encode; a pure-ASCII label comes back as is.
///
/// # Errors
///
/// [`PunycodeError::Overflow`] if the delta accumulator would wrap, either
/// while scaling it by the number of handled codepoints or while stepping it.
pub fn encode_codepoints(input: &[Codepoint]) -> Result<String, PunycodeError> {
    let total = u32::try_from(input.len()).map_err(|_| PunycodeError::Overflow)?;
    let mut output = String::with_capacity(input.len());

    for &c in input {
        if c < INITIAL_N {
            output.push(char::from(c as u8));
        }
    }
    let basic = output.len() as u32;
    if basic > 0 && basic < total {
        output.push(DELIMITER);
    }

    let mut n = INITIAL_N;
    let mut delta: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut handled = basic;

    while handled < total {
        // Smallest codepoint not yet handled; one exists while handled < total.
        let Some(m) = input.iter().copied().filter(|&c| c >= n).min() else {
            break;
        };

        delta = (m - n)
            .checked_mul(handled + 1)
            .and_then(|step| delta.checked_add(step))
            .ok_or(PunycodeError::Overflow)?;
        n = m;

        for &c in input {
            if c < n {
                delta = delta.checked_add(1).ok_or(PunycodeError::Overflow)?;
            }
            if c == n {
                let mut q = delta;
                let mut k = BASE;
                loop {
                    let t = threshold(k, bias);
                    if q < t {
                        break;
                    }
                    output.push(digit_to_basic(t + (q - t) % (BASE - t)));
                    q = (q - t) / (BASE - t);
                    k += BASE;
                }
                output.push(digit_to_basic(q));

                bias = adapt(delta, handled + 1, handled == basic);
                delta = 0;
                handled += 1;
            }
        }

        delta = delta.checked_add(1).ok_or(PunycodeError::Overflow)?;
        n = n.checked_add(1).ok_or(PunycodeError::Overflow)?;
    }

    Ok(output)
}

/// Decode a Punycode label into UTF-8.
///
/// # Errors
///
/// Everything [`decode_codepoints`] rejects, plus
/// [`PunycodeError::InvalidCodepoint`] when the result is not valid text.
pub fn decode(input: &str) -> Result<String, PunycodeError> {
    let codepoints = decode_codepoints(input)?;
    let bytes = utf8::from_codepoints(&codepoints)?;
    String::from_utf8(bytes).map_err(|_| PunycodeError::InvalidCodepoint)
}

/// Decode a Punycode label into raw codepoints.
///
/// Everything before the last `-` is copied verbatim and must be ASCII; the
/// rest is a run of base-36 variable-length integers (case-insensitive).
///
/// # Errors
///
/// - [`PunycodeError::NonBasic`]: non-ASCII before the last `-`
/// - [`PunycodeError::InvalidDigit`]: a non-base-36 byte in the digits
/// - [`PunycodeError::EarlyTermination`]: the digits end mid-integer
/// - [`PunycodeError::Overflow`]: `i`, `n` or the weight would wrap
pub fn decode_codepoints(input: &str) -> Result<Vec<Codepoint>, PunycodeError> {
    let (basic, digits) = input
        .rfind(DELIMITER)
        .map_or(("", input), |pos| (&input[..pos], &input[pos + 1..]));

    if !basic.is_ascii() {
        return Err(PunycodeError::NonBasic);
    }

    let mut output: Vec<Codepoint> = basic.bytes().map(Codepoint::from).collect();
    let mut n = INITIAL_N;
    let mut i: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut bytes = digits.bytes().peekable();

    while bytes.peek().is_some() {
        let previous_i = i;
        let mut weight: u32 = 1;
        let mut k = BASE;
        loop {
            let byte = bytes.next().ok_or(PunycodeError::EarlyTermination)?;
            let digit = basic_to_digit(byte).ok_or(PunycodeError::InvalidDigit)?;

            i = digit
                .checked_mul(weight)
                .and_then(|step| i.checked_add(step))
                .ok_or(PunycodeError::Overflow)?;

            let t = threshold(k, bias);
            if digit < t {
                break;
            }
            weight = weight
                .checked_mul(BASE - t)
                .ok_or(PunycodeError::Overflow)?;
            k = k.checked_add(BASE).ok_or(PunycodeError::Overflow)?;
        }

        let length = u32::try_from(output.len() + 1).map_err(|_| PunycodeError::Overflow)?;
        bias = adapt(i - previous_i, length, previous_i == 0);
        n = n
            .checked_add(i / length)
            .ok_or(PunycodeError::Overflow)?;
        i %= length;

        output.insert(i as usize, n);
        i += 1;
    }

    Ok(output)
}
