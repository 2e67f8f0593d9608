#![deny(missing_docs)]

//! # Naming
//!
//! Everything that turns API metadata into names for generated code.
//!
//! - **Canonicalization**: arbitrary strings to camelCase/PascalCase identifiers.
//! - **Tables**: initialisms and reserved words consulted during canonicalization.
//! - **Inflection**: singular/plural resource nouns.

/// Identifier canonicalization.
pub mod canonicalize;

/// Initialism and reserved-word tables.
pub mod tables;

/// Singular/plural handling for resource nouns.
pub mod inflect;

pub use canonicalize::{canonicalize, split_words, Canonicalizer};
pub use inflect::{EnglishInflector, Inflector, NoopInflector};
pub use tables::{WordTables, COMMON_INITIALISMS, JAVASCRIPT_RESERVED, RESERVED_MARKER};
