#![deny(missing_docs)]

//! # Word Tables
//!
//! The two lookup tables consulted by the canonicalizer: initialisms that are
//! cased as a single unit and identifiers that must never be emitted verbatim
//! in generated JavaScript.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Appended to an identifier that would otherwise collide with a reserved word.
pub const RESERVED_MARKER: char = '_';

/// Common initialisms, stored in their uppercase form.
pub const COMMON_INITIALISMS: &[&str] = &[
    "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP",
    "JMES", "JSON", "JWT", "LHS", "OK", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH",
    "TCP", "TLS", "TTL", "UDP", "UI", "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML", "XSRF",
    "XSS",
];

/// Identifiers that break (or shadow something important in) generated JavaScript.
///
/// Matching is exact: `Date` is reserved, `date` is not.
pub const JAVASCRIPT_RESERVED: &[&str] = &[
    // JavaScript reserved words
    "break",
    "case",
    "comment",
    "continue",
    "default",
    "delete",
    "do",
    "else",
    "export",
    "for",
    "function",
    "if",
    "import",
    "in",
    "label",
    "new",
    "return",
    "switch",
    "this",
    "var",
    "void",
    "while",
    "with",
    // ECMAScript reserved words
    "catch",
    "class",
    "const",
    "debugger",
    "enum",
    "extends",
    "finally",
    "super",
    "throw",
    "try",
    // Globals
    "alert",
    "confirm",
    "open",
    "print",
    "NaN",
    "Date",
    "constructor",
    "assign",
    "location",
    "Location",
    "window",
    "Window",
    // Java keywords reserved by JavaScript
    "abstract",
    "boolean",
    "byte",
    "char",
    "double",
    "false",
    "final",
    "float",
    "goto",
    "implements",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "short",
    "static",
    "synchronized",
    "throws",
    "transient",
    "true",
];

static JAVASCRIPT_TABLES: LazyLock<WordTables> =
    LazyLock::new(|| WordTables::new(COMMON_INITIALISMS.iter(), JAVASCRIPT_RESERVED.iter()));

/// Initialism and reserved-word sets used by a [`Canonicalizer`](super::Canonicalizer).
///
/// Tables are immutable once built. Extending them produces a new value, so
/// the shared default returned by [`WordTables::javascript`] never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordTables {
    initialisms: HashSet<String>,
    reserved: HashSet<String>,
}

impl WordTables {
    /// Builds tables from arbitrary word lists.
    ///
    /// Initialisms are normalized to uppercase; reserved words are kept verbatim.
    pub fn new<I, R>(initialisms: I, reserved: R) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        Self {
            initialisms: initialisms
                .into_iter()
                .map(|w| w.as_ref().to_ascii_uppercase())
                .collect(),
            reserved: reserved.into_iter().map(|w| w.as_ref().to_string()).collect(),
        }
    }

    /// The process-wide JavaScript tables.
    pub fn javascript() -> &'static WordTables {
        &JAVASCRIPT_TABLES
    }

    /// Returns a copy of these tables with extra initialisms.
    pub fn with_initialisms<I>(&self, extra: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut tables = self.clone();
        tables
            .initialisms
            .extend(extra.into_iter().map(|w| w.as_ref().to_ascii_uppercase()));
        tables
    }

    /// Returns a copy of these tables with extra reserved words.
    pub fn with_reserved<I>(&self, extra: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut tables = self.clone();
        tables
            .reserved
            .extend(extra.into_iter().map(|w| w.as_ref().to_string()));
        tables
    }

    /// Whether the uppercase form of `word` is a known initialism.
    pub fn is_initialism(&self, word: &str) -> bool {
        self.initialisms.contains(&word.to_ascii_uppercase())
    }

    /// Whether `ident` exactly matches a reserved word.
    pub fn is_reserved(&self, ident: &str) -> bool {
        self.reserved.contains(ident)
    }

    /// Number of initialisms in the table.
    pub fn initialism_count(&self) -> usize {
        self.initialisms.len()
    }

    /// Number of reserved words in the table.
    pub fn reserved_count(&self) -> usize {
        self.reserved.len()
    }
}
