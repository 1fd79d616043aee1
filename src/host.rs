use crate::compat::{String, Vec};
use crate::error::PunycodeError;
use crate::unicode::punycode;

/// Prefix marking a Punycode-encoded label
pub const ACE_PREFIX: &str = "xn--";

/// Longest label DNS allows
pub const MAX_LABEL_LENGTH: usize = 63;

/// Bracketed IP literals are passed through untouched.
pub fn is_ip_literal(host: &str) -> bool {
    host.starts_with('[')
}

/// Split a hostname into labels, dropping one trailing root dot.
fn labels(host: &str) -> Result<Vec<&str>, PunycodeError> {
    let host = host.strip_suffix('.').unwrap_or(host);
    let labels: Vec<&str> = host.split('.').collect();
    if labels.iter().any(|label| label.is_empty()) {
        log::debug!("rejecting host {host:?}: empty label");
        return Err(PunycodeError::EmptyLabel);
    }
    Ok(labels)
}

fn join(labels: &[String]) -> String {
    labels.join(".")
}

/// Encode every non-ASCII label of `host` as `xn--` Punycode.
///
/// # Errors
///
/// `EmptyLabel` for consecutive dots (or a lone dot), `LabelTooLong` when a
/// label ends up longer than 63 bytes, and any codec failure.
pub fn to_ascii(host: &str) -> Result<String, PunycodeError> {
    let mut encoded = Vec::new();
    for label in labels(host)? {
        let label = if punycode::needs_punycoding(label) {
            let mut ace = String::from(ACE_PREFIX);
            ace.push_str(&punycode::encode(label).inspect_err(|err| {
                log::debug!("failed to punycode label {label:?}: {err}");
            })?);
            log::trace!("punycoded {label:?} as {ace:?}");
            ace
        } else {
            String::from(label)
        };

        if label.len() > MAX_LABEL_LENGTH {
            log::debug!("label {label:?} is longer than {MAX_LABEL_LENGTH} bytes");
            return Err(PunycodeError::LabelTooLong);
        }
        encoded.push(label);
    }
    Ok(join(&encoded))
}

/// Decode every `xn--` label of `host` back to Unicode.
///
/// # Errors
///
/// `EmptyLabel` for consecutive dots or an `xn--` label with no payload,
/// and any codec failure.
pub fn to_unicode(host: &str) -> Result<String, PunycodeError> {
    let mut decoded = Vec::new();
    for label in labels(host)? {
        match label.strip_prefix(ACE_PREFIX) {
            Some(encoded) => {
                let text = punycode::decode(encoded).inspect_err(|err| {
                    log::debug!("failed to decode label {label:?}: {err}");
                })?;
                if text.is_empty() {
                    log::debug!("label {label:?} decodes to nothing");
                    return Err(PunycodeError::EmptyLabel);
                }
                log::trace!("decoded {label:?} as {text:?}");
                decoded.push(text);
            }
            None => decoded.push(String::from(label)),
        }
    }
    Ok(join(&decoded))
}

/// Reverse the order of the labels in `host`.
pub fn reverse_labels(host: &str) -> String {
    let mut labels: Vec<&str> = host.split('.').collect();
    labels.reverse();
    labels.join(".")
}
