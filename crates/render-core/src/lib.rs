//! Core rendering abstractions.
//!
//! This crate provides what both serialization backends share:
//! - `DocumentRenderer` trait turning laid-out pages or slides into bytes
//! - Error types for rendering operations
//! - Document metadata and small coordinate helpers

mod error;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use traits::DocumentRenderer;
pub use types::DocumentMetadata;
