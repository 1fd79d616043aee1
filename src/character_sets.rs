//! Byte classes from RFC 3986 used to drive parsing and percent-encoding.
//!
//! Every class is a 256-entry table built at compile time, so membership is a
//! single indexed load and the tables can be shared freely between threads.

/// A set of byte values with O(1) membership.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CharacterClass {
    table: [bool; 256],
}

impl CharacterClass {
    /// Build a class from a literal list of member bytes.
    pub const fn new(chars: &[u8]) -> Self {
        Self::empty().with(chars)
    }

    const fn empty() -> Self {
        Self {
            table: [false; 256],
        }
    }

    /// A copy of this class with `chars` added.
    pub const fn with(self, chars: &[u8]) -> Self {
        let mut table = self.table;
        let mut i = 0;
        while i < chars.len() {
            table[chars[i] as usize] = true;
            i += 1;
        }
        Self { table }
    }

    /// The union of two classes.
    pub const fn union(self, other: Self) -> Self {
        let mut table = self.table;
        let mut i = 0;
        while i < 256 {
            table[i] = table[i] || other.table[i];
            i += 1;
        }
        Self { table }
    }

    #[inline]
    pub const fn contains(&self, b: u8) -> bool {
        self.table[b as usize]
    }

    /// True if every byte of `input` is a member.
    pub fn contains_all(&self, input: &str) -> bool {
        input.bytes().all(|b| self.contains(b))
    }
}

impl core::fmt::Debug for CharacterClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let members = (0..=255u8).filter(|&b| self.contains(b)).map(char::from);
        f.debug_set().entries(members).finish()
    }
}

pub const GEN_DELIMS: CharacterClass = CharacterClass::new(b":/?#[]@");
pub const SUB_DELIMS: CharacterClass = CharacterClass::new(b"!$&'()*+,;=");
pub const ALPHA: CharacterClass =
    CharacterClass::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");
pub const DIGIT: CharacterClass = CharacterClass::new(b"0123456789");
pub const UNRESERVED: CharacterClass = ALPHA.union(DIGIT).with(b"-._~");
pub const RESERVED: CharacterClass = GEN_DELIMS.union(SUB_DELIMS);
pub const PCHAR: CharacterClass = UNRESERVED.union(SUB_DELIMS).with(b":@");
pub const PATH: CharacterClass = PCHAR.with(b"/");
pub const QUERY: CharacterClass = PCHAR.with(b"/?");
pub const FRAGMENT: CharacterClass = PCHAR.with(b"/?");
pub const USERINFO: CharacterClass = UNRESERVED.union(SUB_DELIMS).with(b":");
/// Canonical (uppercase) hex digits
pub const HEX: CharacterClass = DIGIT.with(b"ABCDEF");
pub const SCHEME: CharacterClass = ALPHA.union(DIGIT).with(b"+-.");

/// Hex digit values, -1 for non-hex bytes (accepts both cases)
const HEX_TO_DEC: [i8; 256] = {
    let mut table = [-1i8; 256];

    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = i as i8;
        i += 1;
    }
    let mut i = 0;
    while i < 6 {
        table[b'a' as usize + i] = 10 + i as i8;
        table[b'A' as usize + i] = 10 + i as i8;
        i += 1;
    }

    table
};

/// Value of a single hex digit, in either case.
#[inline]
pub fn hex_value(b: u8) -> Option<u8> {
    let value = HEX_TO_DEC[b as usize];
    (value >= 0).then_some(value as u8)
}

/// Decode the `%XX` entity whose `%` sits at `pos`, if it is complete and valid.
pub fn decode_entity(bytes: &[u8], pos: usize) -> Option<u8> {
    let high = hex_value(*bytes.get(pos + 1)?)?;
    let low = hex_value(*bytes.get(pos + 2)?)?;
    Some((high << 4) | low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3986_classes() {
        assert!(UNRESERVED.contains(b'~'));
        assert!(!UNRESERVED.contains(b'!'));
        assert!(RESERVED.contains(b'@'));
        assert!(RESERVED.contains(b'\''));
        assert!(PATH.contains(b'/'));
        assert!(!PATH.contains(b'?'));
        assert!(QUERY.contains(b'?'));
        assert!(!QUERY.contains(b'#'));
        assert!(USERINFO.contains(b':'));
        assert!(!USERINFO.contains(b'@'));
        assert!(!PATH.contains(b'%'));
        assert!(!PATH.contains(0xC3));
    }

    #[test]
    fn test_scheme_class() {
        assert!(SCHEME.contains_all("svn+ssh"));
        assert!(SCHEME.contains_all("x-my.scheme"));
        assert!(!SCHEME.contains_all("foo bar"));
    }

    #[test]
    fn test_hex_value() {
        assert_eq!(hex_value(b'0'), Some(0));
        assert_eq!(hex_value(b'a'), Some(10));
        assert_eq!(hex_value(b'F'), Some(15));
        assert_eq!(hex_value(b'g'), None);
        assert!(HEX.contains(b'E'));
        assert!(!HEX.contains(b'e'));
    }

    #[test]
    fn test_decode_entity() {
        assert_eq!(decode_entity(b"%2f", 0), Some(b'/'));
        assert_eq!(decode_entity(b"a%C3", 1), Some(0xC3));
        assert_eq!(decode_entity(b"%2", 0), None);
        assert_eq!(decode_entity(b"%ZW", 0), None);
    }
}
