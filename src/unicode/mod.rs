pub(crate) mod percent_encode;
pub mod punycode;
pub mod utf8;
