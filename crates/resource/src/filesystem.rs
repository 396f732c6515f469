//! Filesystem-based resource provider.
//!
//! Paths are resolved relative to a base directory (the repository root) and
//! must stay inside it: absolute paths and `..` escapes are rejected.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use thirdplane_traits::{ResourceError, ResourceProvider, SharedResourceData};

#[derive(Debug)]
pub struct FilesystemResourceProvider {
    base_path: PathBuf,
    /// Canonicalized base path for containment checks
    canonical_base: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base = base_path.as_ref().to_path_buf();
        let canonical = base.canonicalize().ok();
        Self {
            base_path: base,
            canonical_base: canonical,
        }
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Returns `None` if the path would escape the base directory.
    fn resolve_path_safe(&self, path: &str) -> Option<PathBuf> {
        if Path::new(path).is_absolute() {
            return None;
        }
        if Path::new(path)
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return None;
        }

        let full_path = self.base_path.join(path);
        if let (Ok(canonical), Some(base)) = (full_path.canonicalize(), &self.canonical_base) {
            // Symlinks may still point outside the root.
            return canonical.starts_with(base).then_some(canonical);
        }
        Some(full_path)
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full_path = self
            .resolve_path_safe(path)
            .ok_or_else(|| ResourceError::NotFound(format!("{} (outside asset root)", path)))?;

        log::debug!("Loading asset '{}' from {}", path, full_path.display());
        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(full_path.display().to_string())
            } else {
                ResourceError::LoadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve_path_safe(path)
            .map(|p| p.is_file())
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_file_below_root() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("logo gold.png"), b"png").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert_eq!(&*provider.load("logo gold.png").unwrap(), b"png");
        assert!(provider.exists("logo gold.png"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(matches!(
            provider.load("scripts/fonts/Lora-Regular.ttf"),
            Err(ResourceError::NotFound(_))
        ));
        assert!(!provider.exists("scripts/fonts/Lora-Regular.ttf"));
    }

    #[test]
    fn nested_paths_are_allowed() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("scripts/fonts")).unwrap();
        fs::write(dir.path().join("scripts/fonts/Inter-Regular.ttf"), b"ttf").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert_eq!(
            &*provider.load("scripts/fonts/Inter-Regular.ttf").unwrap(),
            b"ttf"
        );
    }

    #[test]
    fn escapes_are_rejected() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        assert!(provider.load("../../../etc/passwd").is_err());
        assert!(provider.load("/etc/passwd").is_err());
        assert!(!provider.exists("scripts/../../secret"));
    }

    #[test]
    fn directories_do_not_count_as_assets() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("scripts")).unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(!provider.exists("scripts"));
    }
}
