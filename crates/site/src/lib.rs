//! Static-site configuration.
//!
//! The site generator itself is external; this crate only carries its
//! configuration object as typed data and answers redirect lookups the way a
//! static host does: by exact literal path.

mod config;
mod error;
mod redirects;

pub use config::{BuildConfig, Integration, OutputMode, SiteConfig};
pub use error::SiteConfigError;
pub use redirects::{Redirect, RedirectTable};
