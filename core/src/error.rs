//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Identifier canonicalization never fails; errors only arise while loading
//! API descriptions and writing generated files.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The API description could not be parsed or is inconsistent.
    #[from(ignore)]
    #[display("Design Error: {_0}")]
    Design(String),

    /// A template could not be rendered into the output buffer.
    #[display("Template Error: {_0}")]
    Template(std::fmt::Error),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
