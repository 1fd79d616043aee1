use crate::compat::{String, Vec};

/// A separator-delimited list of `name[=value]` entries, borrowed from a
/// query (`&`) or params (`;`) component.
///
/// Empty entries are dropped on parse, so serializing never produces
/// leading, trailing or doubled separators.
#[derive(Debug, Clone)]
pub struct ParamList<'a> {
    separator: char,
    entries: Vec<&'a str>,
}

impl<'a> ParamList<'a> {
    pub fn parse(input: &'a str, separator: char) -> Self {
        let entries = input
            .split(separator)
            .filter(|entry| !entry.is_empty())
            .collect();

        Self { separator, entries }
    }

    /// Split an entry into its name and value (empty when there is no `=`).
    pub fn split_entry(entry: &str) -> (&str, &str) {
        entry.split_once('=').unwrap_or((entry, ""))
    }

    /// Remove entries for which `remove(lowercased_name, value)` is true.
    pub fn remove_where<F>(&mut self, mut remove: F)
    where
        F: FnMut(&str, &str) -> bool,
    {
        self.entries.retain(|entry| {
            let (name, value) = Self::split_entry(entry);
            !remove(&name.to_ascii_lowercase(), value)
        });
    }

    /// Sort entries bytewise.
    pub fn sort(&mut self) {
        self.entries.sort_unstable();
    }

    /// Join the entries back with the separator.
    pub fn serialize(&self) -> String {
        let mut result = String::new();
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                result.push(self.separator);
            }
            result.push_str(entry);
        }
        result
    }
}
