#![deny(missing_docs)]

//! # Inflection
//!
//! Singular/plural forms for resource nouns, e.g. `listBottles` but
//! `createBottle`. Only the trailing lowercase word of a camelCase identifier is
//! inflected (`userAccounts` -> `userAccount`); initialisms and other
//! uppercase tails are returned unchanged.

use inflector::string::pluralize::to_plural;
use inflector::string::singularize::to_singular;

/// Pluggable inflection rules.
pub trait Inflector: Send + Sync {
    /// Returns the singular form of `word`.
    fn singularize(&self, word: &str) -> String;

    /// Returns the plural form of `word`.
    fn pluralize(&self, word: &str) -> String;
}

/// Leaves every word untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopInflector;

impl Inflector for NoopInflector {
    fn singularize(&self, word: &str) -> String {
        word.to_string()
    }

    fn pluralize(&self, word: &str) -> String {
        word.to_string()
    }
}

/// English inflector backed by the rule tables of the `Inflector` crate.
///
/// It is not a general natural-language inflector.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishInflector;

impl Inflector for EnglishInflector {
    fn singularize(&self, word: &str) -> String {
        let (head, tail) = split_tail(word);
        format!("{}{}", head, singular_of(tail))
    }

    fn pluralize(&self, word: &str) -> String {
        let (head, tail) = split_tail(word);
        format!("{}{}", head, plural_of(&singular_of(tail)))
    }
}

/// Splits `word` before its trailing lowercase run. The run keeps a single
/// leading capital so `UserAccounts` yields `("User", "Accounts")`.
fn split_tail(word: &str) -> (&str, &str) {
    let lower_start = word
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_lowercase())
        .last()
        .map_or(word.len(), |(i, _)| i);

    let start = match word[..lower_start].chars().next_back() {
        Some(c) if c.is_ascii_uppercase() && lower_start < word.len() => lower_start - 1,
        _ => lower_start,
    };
    word.split_at(start)
}

fn singular_of(tail: &str) -> String {
    if tail.len() < 2 {
        return tail.to_string();
    }
    match_case(tail, &to_singular(&tail.to_ascii_lowercase()))
}

fn plural_of(tail: &str) -> String {
    if tail.is_empty() {
        return tail.to_string();
    }
    match_case(tail, &to_plural(&tail.to_ascii_lowercase()))
}

/// Carries the capital of a `Pascal` tail over to its inflected form.
fn match_case(original: &str, inflected: &str) -> String {
    let mut out = inflected.to_string();
    if original.starts_with(|c: char| c.is_ascii_uppercase()) && out.is_char_boundary(1) {
        out[..1].make_ascii_uppercase();
    }
    out
}
