use crate::checkers::{is_scheme, parse_port};
use crate::compat::{String, ToString};
use crate::error::{ParseError, Result};
use crate::helpers::{prune_fragment, prune_params, prune_query};
use crate::url::Url;

/// Split the scheme off the front of `input` if there is one.
/// Returns (`lowercased_scheme`, `rest`).
fn split_scheme(input: &str) -> (Option<String>, &str) {
    if let Some(colon) = memchr::memchr(b':', input.as_bytes()) {
        let (candidate, after_colon) = (&input[..colon], &input[colon + 1..]);
        if is_scheme(candidate, after_colon) {
            return (Some(candidate.to_ascii_lowercase()), after_colon);
        }
    }
    (None, input)
}

/// Split a `//authority` prefix off `input`.
/// Returns (`authority`, `rest`) when the input starts with `//`.
fn split_authority(input: &str) -> Option<(&str, &str)> {
    let after_slashes = input.strip_prefix("//")?;
    let end = after_slashes
        .find(['/', '?', '#'])
        .unwrap_or(after_slashes.len());
    Some((&after_slashes[..end], &after_slashes[end..]))
}

/// Split host from port text. For bracketed IP literals the port colon is
/// looked for after the closing `]`; anything else there is a malformed
/// port. An unclosed `[` keeps the whole text as the host.
fn split_host_port(host_port: &str) -> Result<(&str, &str)> {
    if host_port.starts_with('[') {
        let Some(bracket_end) = host_port.find(']') else {
            return Ok((host_port, ""));
        };
        let (host, rest) = host_port.split_at(bracket_end + 1);
        if rest.is_empty() {
            return Ok((host, ""));
        }
        return rest
            .strip_prefix(':')
            .map(|port| (host, port))
            .ok_or(ParseError::PortNotNumber);
    }

    Ok(host_port
        .split_once(':')
        .unwrap_or((host_port, "")))
}

/// Parse a URL string into its eight components.
///
/// # Errors
///
/// Fails only when the authority carries a malformed port.
pub fn parse_url(input: &str) -> Result<Url> {
    let mut url = Url::default();

    let (scheme, mut rest) = split_scheme(input);
    if let Some(scheme) = scheme {
        url.scheme = scheme;
    }

    if let Some((authority, after)) = split_authority(rest) {
        rest = after;

        // Userinfo ends at the last '@'; anything before it is raw
        let host_port = match authority.rfind('@') {
            Some(at) => {
                url.userinfo = authority[..at].to_string();
                &authority[at + 1..]
            }
            None => authority,
        };

        let (host, port) = split_host_port(host_port)
            .and_then(|(host, port)| Ok((host, parse_port(port)?)))
            .inspect_err(|err| {
                log::debug!("rejecting {input:?}: {err}");
            })?;
        url.host = host.to_ascii_lowercase();
        url.port = port;
    }

    let (rest, fragment) = prune_fragment(rest);
    if let Some(fragment) = fragment {
        url.fragment = fragment.to_string();
    }

    let (rest, query) = prune_query(rest);
    url.query = query;

    let (path, params) = prune_params(rest);
    url.params = params;
    url.path = path.to_string();

    Ok(url)
}
