use crate::compat::String;
use crate::param_list::ParamList;

/// Prune fragment (#hash) from URL string
/// Returns (`url_without_fragment`, `fragment_without_hash`)
/// Everything after the first `#` belongs to the fragment, unscanned.
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split the query off at the first `?`.
///
/// Extra `?` bytes directly after the first one are separator noise and are
/// skipped; later `?` bytes are data. Returns the query payload with `&`
/// repeats collapsed, or an empty string when only `?` bytes follow.
pub fn prune_query(input: &str) -> (&str, String) {
    match memchr::memchr(b'?', input.as_bytes()) {
        Some(pos) => {
            let payload = input[pos + 1..].trim_start_matches('?');
            (&input[..pos], collapse_separators(payload, '&'))
        }
        None => (input, String::new()),
    }
}

/// Split `;params` off at the first `;`, collapsing `;` repeats.
pub fn prune_params(input: &str) -> (&str, String) {
    match memchr::memchr(b';', input.as_bytes()) {
        Some(pos) => (&input[..pos], collapse_separators(&input[pos + 1..], ';')),
        None => (input, String::new()),
    }
}

/// Remove leading, trailing and repeated instances of `separator`.
pub fn collapse_separators(input: &str, separator: char) -> String {
    ParamList::parse(input, separator).serialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_fragment() {
        assert_eq!(prune_fragment("/a#b#c"), ("/a", Some("b#c")));
        assert_eq!(prune_fragment("/a"), ("/a", None));
        assert_eq!(prune_fragment("#"), ("", Some("")));
    }

    #[test]
    fn test_prune_query() {
        assert_eq!(prune_query("/p?a=1&&&b=2"), ("/p", String::from("a=1&b=2")));
        assert_eq!(prune_query("/p????foo=2"), ("/p", String::from("foo=2")));
        assert_eq!(prune_query("/p?query?"), ("/p", String::from("query?")));
        assert_eq!(prune_query("/p?repeats???q"), ("/p", String::from("repeats???q")));
        assert_eq!(prune_query("/p?????"), ("/p", String::new()));
        assert_eq!(prune_query("/p"), ("/p", String::new()));
    }

    #[test]
    fn test_prune_params() {
        assert_eq!(prune_params("/p;;;a=1;;;;b=2;;"), ("/p", String::from("a=1;b=2")));
        assert_eq!(prune_params("/p;"), ("/p", String::new()));
        assert_eq!(prune_params("/p"), ("/p", String::new()));
    }

    #[test]
    fn test_collapse_separators() {
        assert_eq!(collapse_separators("&&a&&b&&", '&'), "a&b");
        assert_eq!(collapse_separators("", '&'), "");
        assert_eq!(collapse_separators("&&&", '&'), "");
    }
}
