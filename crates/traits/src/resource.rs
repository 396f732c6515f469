//! ResourceProvider trait for abstracting asset loading.
//!
//! The generators read their fonts and logo through this trait so the
//! pipelines can run against the repository checkout or against in-memory
//! fixtures.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for resource loading operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("Invalid resource format for '{path}': {message}")]
    InvalidFormat { path: String, message: String },
}

/// Shared resource data type (reference-counted bytes).
pub type SharedResourceData = Arc<Vec<u8>>;

/// A source of named binary assets.
pub trait ResourceProvider: Send + Sync + Debug {
    /// Load a resource by its path relative to the provider's root.
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError>;

    /// Check if a resource exists.
    fn exists(&self, path: &str) -> bool;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;
}

/// A resource provider backed by a pre-populated map.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    resources: RwLock<BTreeMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource to the store, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, path: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        let path = path.into();
        let mut resources = self
            .resources
            .write()
            .map_err(|_| ResourceError::LoadFailed {
                path: path.clone(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources.insert(path, Arc::new(data));
        Ok(())
    }

    /// Builder-style variant of [`add`](Self::add).
    pub fn with(self, path: impl Into<String>, data: Vec<u8>) -> Result<Self, ResourceError> {
        self.add(path, data)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.resources.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let resources = self
            .resources
            .read()
            .map_err(|_| ResourceError::LoadFailed {
                path: path.to_string(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }

    fn exists(&self, path: &str) -> bool {
        self.resources
            .read()
            .map(|r| r.contains_key(path))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}
