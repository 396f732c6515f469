//! Asset loading for the generators.
//!
//! - [`FilesystemResourceProvider`]: reads assets below the repository root
//! - [`InMemoryResourceProvider`]: pre-populated storage for tests
//! - [`AssetBundle`]: every font and image a run needs, loaded eagerly before
//!   any layout work starts

mod assets;
mod filesystem;

pub use assets::{AssetBundle, AssetManifest, ImageAsset};
pub use filesystem::FilesystemResourceProvider;
pub use thirdplane_traits::{
    InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData,
};
