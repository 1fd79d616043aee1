use crate::compat::String;

/// Errors that can occur while parsing a URL.
///
/// Parsing is lenient about everything except the port: every variant
/// describes a malformed port, and no partial `Url` is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Port text contains something other than ASCII digits
    PortNotNumber,
    /// Port is larger than 65535 (or does not fit an integer at all)
    PortTooHigh,
    /// Port is a negative number
    PortNegative,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::PortNotNumber => "Malformed port: not a number",
            Self::PortTooHigh => "Malformed port: too high",
            Self::PortNegative => "Malformed port: negative",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;

/// Errors raised by the codepoint codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8Error {
    /// Bad lead byte, bad continuation byte, or a truncated sequence
    InvalidEncoding,
    /// Codepoint above the codec ceiling of 0x1FFFFF
    InvalidCodepoint,
}

impl core::fmt::Display for Utf8Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidEncoding => "Invalid UTF-8 encoding",
            Self::InvalidCodepoint => "Invalid codepoint",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Utf8Error {}

/// Invalid input to the Punycode codec, or to hostname punycoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunycodeError {
    /// An internal accumulator (`delta`, `i` or `n`) would overflow
    Overflow,
    /// A character outside `[a-zA-Z0-9]` in the encoded digits
    InvalidDigit,
    /// The digit run ended before a variable-length integer terminated
    EarlyTermination,
    /// A non-ASCII character where only basic codepoints are allowed
    NonBasic,
    /// The decoded codepoints do not form valid text
    InvalidCodepoint,
    /// A hostname contains an empty label
    EmptyLabel,
    /// A hostname label is longer than 63 bytes
    LabelTooLong,
}

impl core::fmt::Display for PunycodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::Overflow => "Punycode overflow",
            Self::InvalidDigit => "Invalid Punycode digit",
            Self::EarlyTermination => "Punycode integer terminated early",
            Self::NonBasic => "Non-basic codepoint in basic section",
            Self::InvalidCodepoint => "Invalid codepoint",
            Self::EmptyLabel => "Empty hostname label",
            Self::LabelTooLong => "Hostname label longer than 63 characters",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PunycodeError {}

impl From<Utf8Error> for PunycodeError {
    fn from(_: Utf8Error) -> Self {
        Self::InvalidCodepoint
    }
}

/// Errors raised while loading or querying a public suffix list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PslError {
    /// A rule line is malformed (`*`, `*.`, bare `!`, empty labels)
    InvalidRule(String),
    /// A hostname passed to a lookup contains an empty label
    EmptyLabel,
    /// The suffix list path does not exist
    NotFound(String),
    /// The suffix list could not be read
    Io(String),
}

impl core::fmt::Display for PslError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidRule(rule) => write!(f, "Invalid suffix rule: {rule:?}"),
            Self::EmptyLabel => f.write_str("Empty hostname label"),
            Self::NotFound(path) => write!(f, "Suffix list not found: {path}"),
            Self::Io(msg) => write!(f, "Failed to read suffix list: {msg}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PslError {}
