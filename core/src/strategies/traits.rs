#![deny(missing_docs)]

//! # Client Strategy Trait
//!
//! Defines the interface required to emit client code for a specific state
//! management library (Redux today), along with the name bundles and contexts
//! passed to each template.

use crate::design::{ActionDefinition, ResourceDefinition};
use crate::naming::Canonicalizer;
use heck::ToShoutySnakeCase;

/// Names derived for one action of one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionNames {
    /// camelCase action creator name (e.g. `listBottles`).
    pub creator: String,
    /// PascalCase form used inside other identifiers (e.g. `ListBottles`).
    pub pascal: String,
    /// SHOUTY_SNAKE_CASE form used in action type constants (e.g. `LIST_BOTTLES`).
    pub constant: String,
}

impl ActionNames {
    /// Derives the names for `action` applied to `noun`.
    ///
    /// Both parts are canonicalized as one phrase.
    pub fn derive(canonicalizer: &Canonicalizer<'_>, action: &str, noun: &str) -> Self {
        let phrase = format!("{} {}", action, noun);
        let creator = canonicalizer.canonicalize(&phrase, false);
        let pascal = canonicalizer.canonicalize(&phrase, true);
        let constant = pascal.to_shouty_snake_case();
        Self {
            creator,
            pascal,
            constant,
        }
    }
}

/// Names derived for a resource, used by reset actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNames {
    /// PascalCase noun (e.g. `Bottles`).
    pub pascal: String,
    /// SHOUTY_SNAKE_CASE noun (e.g. `BOTTLES`).
    pub constant: String,
}

impl ResourceNames {
    /// Derives the names for a resource noun.
    pub fn derive(canonicalizer: &Canonicalizer<'_>, noun: &str) -> Self {
        let pascal = canonicalizer.canonicalize(noun, true);
        let constant = pascal.to_shouty_snake_case();
        Self { pascal, constant }
    }
}

/// Data shared by every section of one output file.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// API name.
    pub api_name: &'a str,
    /// Host the client talks to.
    pub host: &'a str,
    /// Stem of the sibling module file names (e.g. `cellar` for `cellarActions.js`).
    pub stem: &'a str,
}

/// Data available to the per-action templates.
#[derive(Debug, Clone)]
pub struct ActionContext<'a> {
    /// Derived identifiers.
    pub names: &'a ActionNames,
    /// The action being rendered.
    pub action: &'a ActionDefinition,
    /// The resource owning the action.
    pub resource: &'a ResourceDefinition,
    /// Documented request URL (`scheme://host/full/path`).
    pub url: String,
    /// Lowercase HTTP method.
    pub method: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u128,
}

/// File names for the three generated modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFiles {
    /// Action creators module.
    pub creators: String,
    /// Action type constants module.
    pub types: String,
    /// Plain action module.
    pub actions: String,
}

/// A strategy trait for decoupling library-specific code generation.
///
/// Implementors only produce text; ordering and file handling belong to the
/// generator.
pub trait ClientStrategy {
    /// Names of the three modules generated for `stem`.
    fn file_names(&self, stem: &str) -> OutputFiles;

    /// Header of the action creators module.
    fn creators_header(&self, ctx: &FileContext<'_>) -> String;

    /// One action creator.
    fn action_creator(&self, ctx: &ActionContext<'_>) -> String;

    /// Header of the actions module.
    fn actions_header(&self, ctx: &FileContext<'_>) -> String;

    /// Request/success/error actions for one action.
    fn actions(&self, ctx: &ActionContext<'_>) -> String;

    /// Header of the action types module.
    fn action_types_header(&self, ctx: &FileContext<'_>) -> String;

    /// Action type constants for one action.
    fn action_types(&self, ctx: &ActionContext<'_>) -> String;

    /// Reset action for a resource.
    fn reset_action(&self, names: &ResourceNames) -> String;

    /// Reset action type constant for a resource.
    fn reset_action_type(&self, names: &ResourceNames) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_names() {
        let c = Canonicalizer::javascript();
        let names = ActionNames::derive(&c, "list", "bottles");
        assert_eq!(names.creator, "listBottles");
        assert_eq!(names.pascal, "ListBottles");
        assert_eq!(names.constant, "LIST_BOTTLES");
    }

    #[test]
    fn test_action_names_keep_initialisms() {
        let c = Canonicalizer::javascript();
        let names = ActionNames::derive(&c, "show", "userID");
        assert_eq!(names.creator, "showUserID");
        assert_eq!(names.pascal, "ShowUserID");
        assert_eq!(names.constant, "SHOW_USER_ID");
    }

    #[test]
    fn test_action_names_from_snake_case() {
        let c = Canonicalizer::javascript();
        let names = ActionNames::derive(&c, "add_to_cart", "ah");
        assert_eq!(names.creator, "addToCartAh");
        assert_eq!(names.constant, "ADD_TO_CART_AH");
    }

    #[test]
    fn test_resource_names() {
        let c = Canonicalizer::javascript();
        let names = ResourceNames::derive(&c, "wineBottles");
        assert_eq!(names.pascal, "WineBottles");
        assert_eq!(names.constant, "WINE_BOTTLES");
    }
}
