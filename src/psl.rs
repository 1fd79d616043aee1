//! Public Suffix List matching.
//!
//! Rules use the standard list syntax: one rule per line, `//` comments,
//! `*.`-prefixed wildcards and `!`-prefixed exceptions. They are stored in a
//! trie keyed by reversed labels, so a lookup walks the hostname from its
//! last label towards the first and stops as soon as the trie runs out.
//!
//! Matching is textual. A rule written in Unicode does not match a
//! hostname in `xn--` form or the other way round.

use crate::compat::{BTreeMap, String, ToString, Vec};
use crate::error::PslError;

#[derive(Debug, Default, Clone)]
struct Node {
    children: BTreeMap<String, Node>,
    /// A plain rule ends here
    leaf: bool,
    /// A `*.` rule has this node as its base
    wildcard: bool,
    /// A `!` rule ends here
    exception: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleKind {
    Plain,
    Wildcard,
    Exception,
}

/// Split a rule into its kind and its dot-separated body.
fn classify(rule: &str) -> Result<(RuleKind, &str), PslError> {
    let (kind, body) = if let Some(body) = rule.strip_prefix('!') {
        (RuleKind::Exception, body)
    } else if let Some(body) = rule.strip_prefix("*.") {
        (RuleKind::Wildcard, body)
    } else {
        (RuleKind::Plain, rule)
    };

    let invalid = body.is_empty()
        || body.contains('*')
        || body.split('.').any(|label| label.is_empty());
    if invalid {
        log::debug!("rejecting suffix rule {rule:?}");
        return Err(PslError::InvalidRule(rule.to_string()));
    }

    Ok((kind, body))
}

/// A loaded public suffix list.
///
/// ```
/// use urlcanon::Psl;
///
/// let psl = Psl::from_string("com\nuk.com\n*.ck\n!www.ck\n").unwrap();
/// assert_eq!(psl.get_pld("www.example.COM").unwrap().as_deref(), Some("example.com"));
/// assert_eq!(psl.get_tld("foo.uk.com").unwrap().as_deref(), Some("uk.com"));
/// assert_eq!(psl.get_tld("ck").unwrap(), None);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Psl {
    root: Node,
    rules: usize,
}

impl Psl {
    /// Build a list from rule text.
    ///
    /// Blank lines and `//` comments are skipped; only the first
    /// whitespace-separated token of a line is read.
    ///
    /// # Errors
    ///
    /// [`PslError::InvalidRule`] for `*`, `*.`, a bare `!`, a `*` anywhere
    /// but the leftmost label, or a rule with empty labels.
    pub fn from_string(rules: &str) -> Result<Self, PslError> {
        let mut psl = Self::default();
        for line in rules.lines() {
            let Some(token) = line.split_whitespace().next() else {
                continue;
            };
            if token.starts_with("//") {
                continue;
            }
            psl.insert(&token.to_ascii_lowercase())?;
        }
        log::debug!("loaded public suffix list with {} rules", psl.rules);
        Ok(psl)
    }

    /// Load a list from a file.
    ///
    /// # Errors
    ///
    /// [`PslError::NotFound`] if the file does not exist, [`PslError::Io`] if
    /// it cannot be read, or any error from [`Psl::from_string`].
    #[cfg(feature = "std")]
    pub fn from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self, PslError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| {
            log::debug!("cannot read suffix list {}: {err}", path.display());
            match err.kind() {
                std::io::ErrorKind::NotFound => PslError::NotFound(path.display().to_string()),
                _ => PslError::Io(err.to_string()),
            }
        })?;
        Self::from_string(&text)
    }

    fn insert(&mut self, rule: &str) -> Result<(), PslError> {
        let (kind, body) = classify(rule)?;

        let mut node = &mut self.root;
        for label in body.rsplit('.') {
            node = node.children.entry(label.to_string()).or_default();
        }
        match kind {
            RuleKind::Plain => node.leaf = true,
            RuleKind::Wildcard => node.wildcard = true,
            RuleKind::Exception => node.exception = true,
        }

        self.rules += 1;
        Ok(())
    }

    /// Number of rules loaded
    pub fn len(&self) -> usize {
        self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules == 0
    }

    /// Lowercased labels of `hostname`, tolerating one leading dot.
    fn labels(hostname: &str) -> Result<Vec<String>, PslError> {
        let hostname = hostname.strip_prefix('.').unwrap_or(hostname);
        let labels: Vec<String> = hostname.split('.').map(str::to_ascii_lowercase).collect();
        if labels.iter().any(String::is_empty) {
            return Err(PslError::EmptyLabel);
        }
        Ok(labels)
    }

    /// Number of trailing labels that make up the public suffix.
    ///
    /// The longest plain or wildcard match wins; an exception match
    /// overrides both and yields one label less than the exception rule.
    /// With no match at all the last label is its own suffix.
    fn suffix_length(&self, labels: &[String]) -> usize {
        let mut length = 1;
        let mut node = &self.root;

        for (depth, label) in labels.iter().rev().enumerate() {
            let Some(child) = node.children.get(label) else {
                break;
            };
            let depth = depth + 1;

            if child.exception {
                return (depth - 1).max(1);
            }
            if child.leaf {
                length = length.max(depth);
            }
            if child.wildcard {
                length = length.max(depth + 1);
            }
            node = child;
        }

        length
    }

    /// The last `count` labels joined with dots, if there are that many.
    fn tail(labels: &[String], count: usize) -> Option<String> {
        (count <= labels.len()).then(|| labels[labels.len() - count..].join("."))
    }

    /// The public suffix of `hostname`, or `None` when the hostname is
    /// itself inside a wildcard rule's base.
    ///
    /// # Errors
    ///
    /// [`PslError::EmptyLabel`] if the hostname contains an empty label.
    pub fn get_tld(&self, hostname: &str) -> Result<Option<String>, PslError> {
        let labels = Self::labels(hostname)?;
        Ok(Self::tail(&labels, self.suffix_length(&labels)))
    }

    /// The registrable domain of `hostname` (one label above the public
    /// suffix), or `None` if there is no such label.
    ///
    /// # Errors
    ///
    /// [`PslError::EmptyLabel`] if the hostname contains an empty label.
    pub fn get_pld(&self, hostname: &str) -> Result<Option<String>, PslError> {
        let labels = Self::labels(hostname)?;
        Ok(Self::tail(&labels, self.suffix_length(&labels) + 1))
    }

    /// Both [`Psl::get_tld`] and [`Psl::get_pld`], with a single walk.
    ///
    /// # Errors
    ///
    /// [`PslError::EmptyLabel`] if the hostname contains an empty label.
    pub fn get_both(
        &self,
        hostname: &str,
    ) -> Result<(Option<String>, Option<String>), PslError> {
        let labels = Self::labels(hostname)?;
        let length = self.suffix_length(&labels);
        Ok((Self::tail(&labels, length), Self::tail(&labels, length + 1)))
    }
}

impl core::str::FromStr for Psl {
    type Err = PslError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("co.uk"), Ok((RuleKind::Plain, "co.uk")));
        assert_eq!(classify("*.ck"), Ok((RuleKind::Wildcard, "ck")));
        assert_eq!(classify("!www.ck"), Ok((RuleKind::Exception, "www.ck")));
        for rule in ["*", "*.", "!", "a..b", "a.*.b", "*.*.b", "!*.b", ".com"] {
            assert_eq!(classify(rule), Err(PslError::InvalidRule(rule.to_string())));
        }
    }

    #[test]
    fn test_comments_and_whitespace() {
        let psl = Psl::from_string("// header\n\n  com   trailing words\n\t// indented comment\nCO.UK\n")
            .unwrap();
        assert_eq!(psl.len(), 2);
        assert_eq!(psl.get_tld("a.co.uk").unwrap().as_deref(), Some("co.uk"));
    }

    #[test]
    fn test_suffix_length() {
        let psl = Psl::from_string("jp\n*.kobe.jp\n!city.kobe.jp\n").unwrap();
        let labels = |host: &str| Psl::labels(host).unwrap();
        assert_eq!(psl.suffix_length(&labels("example")), 1);
        assert_eq!(psl.suffix_length(&labels("a.jp")), 1);
        assert_eq!(psl.suffix_length(&labels("a.b.kobe.jp")), 3);
        assert_eq!(psl.suffix_length(&labels("city.kobe.jp")), 2);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Psl::labels(".Example.COM").unwrap(), ["example", "com"]);
        assert_eq!(Psl::labels(""), Err(PslError::EmptyLabel));
        assert_eq!(Psl::labels("..com"), Err(PslError::EmptyLabel));
        assert_eq!(Psl::labels("example.com."), Err(PslError::EmptyLabel));
    }

    #[test]
    fn test_empty_list() {
        let psl = Psl::from_string("").unwrap();
        assert!(psl.is_empty());
        assert_eq!(psl.get_both("a.b").unwrap(), (Some("b".to_string()), Some("a.b".to_string())));
    }
}
