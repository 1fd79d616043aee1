//! URL parsing, normalization and equivalence.
//!
//! A [`Url`] is split into eight components and can be rewritten in place
//! by a chain of canonicalization steps (dot-segment removal, percent-encoding
//! normalization, Punycode, query sorting, ...). [`Url::equiv`] runs the full
//! pipeline on copies of two URLs and compares the results.
//!
//! ```
//! use urlcanon::Url;
//!
//! let a = Url::parse("http://foo.com:80").unwrap();
//! let b = Url::parse("http://foo.com/").unwrap();
//! assert!(a.equiv(&b));
//! ```
//!
//! The [`punycode`] and [`utf8`] modules expose the label codec and the
//! codepoint codec it is built on, and [`Psl`] classifies hostnames against a
//! public suffix list.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod checkers;
mod error;
mod helpers;
mod host;
mod param_list;
mod parser;
mod path;
mod psl;
mod scheme;
mod unicode;
mod url;

pub mod character_sets;

// Public API
pub use error::{ParseError, PslError, PunycodeError, Utf8Error};
pub use psl::Psl;
pub use unicode::{punycode, utf8};
pub use url::Url;

pub type Result<T> = core::result::Result<T, ParseError>;
