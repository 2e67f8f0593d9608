#![deny(missing_docs)]

//! # Identifier Canonicalization
//!
//! Turns arbitrary API metadata (base paths, action names, free text) into
//! camelCase or PascalCase JavaScript identifiers.
//!
//! The input is segmented into words in one forward pass:
//!
//! - characters other than ASCII letters and digits are dropped,
//! - a run of `_` ends the current word,
//! - a lowercase letter followed by anything that is not a lowercase letter ends
//!   the current word (`fooBar`, `foo2bar`, `foo-bar`),
//! - an uppercase letter followed by an uppercase letter and then a lowercase
//!   letter ends the current word (`HTTPServer` splits as `HTTP` + `Server`);
//!   punctuation in between is skipped, underscores are not.
//!
//! Words are then re-cased: initialisms stay a single unit, lowercase words are
//! capitalized, and the first character follows the requested casing. Results
//! that collide with a reserved word get [`RESERVED_MARKER`] appended.

use super::tables::{WordTables, RESERVED_MARKER};

/// Canonicalizes identifiers against a set of [`WordTables`].
///
/// Holds no mutable state; one instance can be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct Canonicalizer<'t> {
    tables: &'t WordTables,
}

impl Canonicalizer<'static> {
    /// Canonicalizer for JavaScript output using the built-in tables.
    pub fn javascript() -> Self {
        Self::new(WordTables::javascript())
    }
}

impl<'t> Canonicalizer<'t> {
    /// Creates a canonicalizer over the given tables.
    pub fn new(tables: &'t WordTables) -> Self {
        Self { tables }
    }

    /// The tables consulted by this canonicalizer.
    pub fn tables(&self) -> &'t WordTables {
        self.tables
    }

    /// Produces a valid identifier from `input`.
    ///
    /// When `first_upper` is true the identifier starts with an uppercase
    /// letter, otherwise with a lowercase one. Input without any letters yields
    /// an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use reduxa_core::naming::Canonicalizer;
    ///
    /// let c = Canonicalizer::javascript();
    /// assert_eq!(c.canonicalize("user_id", true), "UserID");
    /// assert_eq!(c.canonicalize("HTTPServer", false), "httpServer");
    /// assert_eq!(c.canonicalize("class", false), "class_");
    /// ```
    pub fn canonicalize(&self, input: &str, first_upper: bool) -> String {
        let mut ident = String::with_capacity(input.len());
        for (index, word) in split_words(input).iter().enumerate() {
            self.push_word(&mut ident, word, index == 0, first_upper);
        }

        if self.tables.is_reserved(&ident) {
            ident.push(RESERVED_MARKER);
        }
        ident
    }

    fn push_word(&self, ident: &mut String, word: &str, first: bool, first_upper: bool) {
        let lower_start = first && !first_upper;

        if self.tables.is_initialism(word) {
            if lower_start {
                ident.push_str(&word.to_ascii_lowercase());
            } else {
                ident.push_str(&word.to_ascii_uppercase());
            }
            return;
        }

        let start = ident.len();
        ident.push_str(word);

        // Words never start with a lowercase letter unless they are entirely lowercase.
        let all_lower = word.bytes().all(|b| !b.is_ascii_uppercase());
        if all_lower && (!first || first_upper) {
            ident[start..start + 1].make_ascii_uppercase();
        }
        if lower_start {
            ident[start..start + 1].make_ascii_lowercase();
        }
    }
}

/// Canonicalizes `input` with the built-in JavaScript tables.
///
/// See [`Canonicalizer::canonicalize`].
pub fn canonicalize(input: &str, first_upper: bool) -> String {
    Canonicalizer::javascript().canonicalize(input, first_upper)
}

/// Splits `input` into the words the canonicalizer re-cases, before any casing
/// is applied.
///
/// Invalid characters and leading digits are already removed from the result.
pub fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    // Trailing punctuation never contributes to a word.
    let end = chars
        .iter()
        .rposition(|c| is_ident_char(*c))
        .map_or(0, |pos| pos + 1);
    let chars = &chars[..end];

    // Letters, digits and underscores; the acronym rule looks ahead in here.
    let stream: Vec<char> = chars
        .iter()
        .copied()
        .filter(|c| is_ident_char(*c) || *c == '_')
        .collect();

    let mut words = Vec::new();
    let mut word = String::new();
    let mut pos = 0;

    for (i, &c) in chars.iter().enumerate() {
        if c != '_' && !is_ident_char(c) {
            continue;
        }
        let at = pos;
        pos += 1;
        if c == '_' {
            continue;
        }
        // Identifiers must start with a letter.
        if words.is_empty() && word.is_empty() && c.is_ascii_digit() {
            continue;
        }
        word.push(c);

        let last = i + 1 == chars.len();
        if last
            || ends_word(
                c,
                chars[i + 1],
                stream.get(at + 1).copied(),
                stream.get(at + 2).copied(),
            )
        {
            words.push(std::mem::take(&mut word));
        }
    }

    words
}

/// Decides whether `current` closes a word.
///
/// `next_raw` is the following input character as written; `next` and
/// `after_next` skip punctuation but not underscores.
fn ends_word(current: char, next_raw: char, next: Option<char>, after_next: Option<char>) -> bool {
    if next_raw == '_' {
        return true;
    }
    if current.is_ascii_lowercase() {
        return !next_raw.is_ascii_lowercase();
    }
    current.is_ascii_uppercase()
        && next.is_some_and(|c| c.is_ascii_uppercase())
        && after_next.is_some_and(|c| c.is_ascii_lowercase())
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}
