use crate::LayoutError;
use std::collections::BTreeMap;
use thirdplane_resource::AssetBundle;
use thirdplane_types::Size;

/// Intrinsic pixel sizes of the images layout may place, keyed like the
/// asset bundle.
#[derive(Debug, Clone, Default)]
pub struct ImageCatalog {
    sizes: BTreeMap<String, Size>,
}

impl ImageCatalog {
    pub fn from_assets(assets: &AssetBundle) -> Self {
        let sizes = assets
            .images()
            .map(|(key, image)| {
                (
                    key.to_string(),
                    Size::new(image.width as f32, image.height as f32),
                )
            })
            .collect();
        Self { sizes }
    }

    pub fn with(mut self, key: impl Into<String>, size: Size) -> Self {
        self.sizes.insert(key.into(), size);
        self
    }

    pub fn size(&self, key: &str) -> Result<Size, LayoutError> {
        self.sizes
            .get(key)
            .copied()
            .ok_or_else(|| LayoutError::UnknownImage(key.to_string()))
    }
}
