/// Get the default port for a (lowercase) scheme.
/// Uses perfect hash based on length + first byte to minimize comparisons.
pub fn default_port(scheme: &str) -> Option<u16> {
    let bytes = scheme.as_bytes();

    match (bytes.len(), bytes.first()) {
        (4, Some(b'h')) if bytes == b"http" => Some(80),
        (5, Some(b'h')) if bytes == b"https" => Some(443),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        assert_eq!(default_port("http"), Some(80));
        assert_eq!(default_port("https"), Some(443));
        assert_eq!(default_port("ftp"), None);
        assert_eq!(default_port("hxxp"), None);
        assert_eq!(default_port(""), None);
    }
}
