//! Third Plane worksheet generators.
//!
//! One content model, two outputs: a paginated US-Letter PDF and a
//! widescreen slide deck, both written under `public/downloads/`.

pub mod config;
pub mod content;
pub mod deck;
pub mod error;
pub mod output;
pub mod pdf;
pub mod pipeline;

pub use config::GeneratorConfig;
pub use error::PipelineError;
pub use pipeline::{Generator, Target, run};

pub use thirdplane_site::{RedirectTable, SiteConfig, SiteConfigError};
