use std::path::{Path, PathBuf};
use thirdplane_resource::AssetManifest;
use thirdplane_style::Theme;

use crate::content::LOGO;

/// Where a run reads its assets and writes its artifacts. Every path is
/// relative to the repository root.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub root: PathBuf,
    pub output_dir: PathBuf,
    /// File stem shared by both artifacts.
    pub base_name: String,
    pub font_dir: String,
    pub logo: String,
}

impl GeneratorConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output_dir: PathBuf::from("public").join("downloads"),
            base_name: "third-plane-worksheet".to_string(),
            font_dir: "scripts/fonts".to_string(),
            logo: "logo gold.png".to_string(),
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.output_dir)
    }

    /// `<root>/<output_dir>/<base_name>.<extension>`
    pub fn output_path(&self, extension: &str) -> PathBuf {
        self.output_dir()
            .join(format!("{}.{}", self.base_name, extension))
    }

    pub fn manifest(&self, theme: &Theme) -> AssetManifest {
        AssetManifest::for_theme(theme, self.font_dir.as_str()).with_image(LOGO, self.logo.as_str())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
