#![deny(missing_docs)]

//! # Strategies
//!
//! This module defines the architecture for pluggable client generation.
//!
//! - **traits**: Defines `ClientStrategy` plus the name bundles passed to templates.
//! - **redux**: The default implementation for Redux with axios.

pub mod redux;
pub mod traits;

// Re-export for easier access downstream
pub use redux::ReduxStrategy;
pub use traits::{
    ActionContext, ActionNames, ClientStrategy, FileContext, OutputFiles, ResourceNames,
};
