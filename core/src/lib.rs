#![deny(missing_docs)]

//! # Reduxa Core
//!
//! Core library for generating Redux action creators from an API description.
//!
//! The heart of the crate is [`naming::canonicalize`], which turns arbitrary
//! API metadata into safe camelCase JavaScript identifiers.

/// Shared error types.
pub mod error;

/// Identifier canonicalization, word tables and inflection.
pub mod naming;

/// API description model and loaders.
pub mod design;

/// Strategy Pattern Interfaces.
pub mod strategies;

/// Emission orchestration.
pub mod generator;

pub use design::{
    parse_design_document, parse_openapi_design, ActionDefinition, ApiDefinition,
    ResourceDefinition, RouteDefinition,
};
pub use error::{AppError, AppResult};
pub use generator::{Generator, GeneratorConfig, Layout, RenderedFile};
pub use naming::{canonicalize, Canonicalizer, EnglishInflector, Inflector, NoopInflector, WordTables};
pub use strategies::{ClientStrategy, ReduxStrategy};
