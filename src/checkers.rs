use crate::character_sets::{DIGIT, SCHEME};
use crate::error::{ParseError, Result};

/// Check whether `candidate` (the text before the first `:`) is a scheme.
///
/// Every byte must be a scheme character, and the text after the colon must
/// be empty or contain a non-digit. The second rule keeps `12:30` and other
/// port-like relative references from being read as a scheme.
pub fn is_scheme(candidate: &str, after_colon: &str) -> bool {
    !candidate.is_empty()
        && SCHEME.contains_all(candidate)
        && (after_colon.is_empty() || !DIGIT.contains_all(after_colon))
}

/// Parse the text following the host's `:`.
///
/// Empty text means "no port" and yields 0, as does `-0`.
///
/// # Errors
///
/// Returns the matching malformed-port error for non-numeric, negative or
/// out-of-range text.
pub fn parse_port(port: &str) -> Result<u16> {
    if port.is_empty() {
        return Ok(0);
    }

    if let Some(magnitude) = port.strip_prefix('-') {
        if !magnitude.is_empty() && DIGIT.contains_all(magnitude) {
            // Negative zero is still zero
            if magnitude.bytes().all(|b| b == b'0') {
                return Ok(0);
            }
            return Err(ParseError::PortNegative);
        }
        return Err(ParseError::PortNotNumber);
    }

    if !DIGIT.contains_all(port) {
        return Err(ParseError::PortNotNumber);
    }

    // All digits, so the only way to fail is overflow.
    port.parse::<u16>().map_err(|_| ParseError::PortTooHigh)
}
