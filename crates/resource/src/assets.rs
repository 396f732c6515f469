use image::ImageReader;
use std::collections::BTreeMap;
use std::io::Cursor;
use thirdplane_style::Theme;
use thirdplane_traits::{ResourceError, ResourceProvider, SharedResourceData};

/// A decoded-enough image: original bytes plus pixel dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAsset {
    pub data: SharedResourceData,
    pub width: u32,
    pub height: u32,
}

impl ImageAsset {
    /// Reads the pixel dimensions from the image header.
    pub fn from_bytes(path: &str, data: SharedResourceData) -> Result<Self, ResourceError> {
        let invalid = |message: String| ResourceError::InvalidFormat {
            path: path.to_string(),
            message,
        };
        let reader = ImageReader::new(Cursor::new(data.as_slice()))
            .with_guessed_format()
            .map_err(|e| invalid(e.to_string()))?;
        if reader.format().is_none() {
            return Err(invalid("unrecognized image format".to_string()));
        }
        let (width, height) = reader.into_dimensions().map_err(|e| invalid(e.to_string()))?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }
}

/// Which files a run needs, relative to the provider root.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssetManifest {
    pub font_dir: String,
    /// Font file names, resolved under `font_dir`.
    pub fonts: Vec<String>,
    /// `(key, path)` pairs.
    pub images: Vec<(String, String)>,
}

impl AssetManifest {
    /// Every distinct font file referenced by the theme's families.
    pub fn for_theme(theme: &Theme, font_dir: impl Into<String>) -> Self {
        let mut fonts: Vec<String> = Vec::new();
        for family in [&theme.display, &theme.body] {
            for file in family.files() {
                if !fonts.iter().any(|f| f == file) {
                    fonts.push(file.to_string());
                }
            }
        }
        Self {
            font_dir: font_dir.into(),
            fonts,
            images: Vec::new(),
        }
    }

    pub fn with_image(mut self, key: impl Into<String>, path: impl Into<String>) -> Self {
        self.images.push((key.into(), path.into()));
        self
    }

    pub fn font_path(&self, file: &str) -> String {
        let dir = self.font_dir.trim_end_matches('/');
        if dir.is_empty() {
            file.to_string()
        } else {
            format!("{}/{}", dir, file)
        }
    }
}

/// All assets of a run, keyed by font file name and image key.
#[derive(Debug, Clone, Default)]
pub struct AssetBundle {
    fonts: BTreeMap<String, SharedResourceData>,
    images: BTreeMap<String, ImageAsset>,
}

impl AssetBundle {
    /// Loads everything in the manifest. The first failure aborts the load.
    pub fn load(
        provider: &dyn ResourceProvider,
        manifest: &AssetManifest,
    ) -> Result<Self, ResourceError> {
        let mut bundle = AssetBundle::default();

        for file in &manifest.fonts {
            let path = manifest.font_path(file);
            let data = provider.load(&path)?;
            log::debug!("Loaded font '{}' ({} bytes)", path, data.len());
            bundle.fonts.insert(file.clone(), data);
        }

        for (key, path) in &manifest.images {
            let data = provider.load(path)?;
            let image = ImageAsset::from_bytes(path, data)?;
            log::debug!(
                "Loaded image '{}' from '{}' ({}x{})",
                key,
                path,
                image.width,
                image.height
            );
            bundle.images.insert(key.clone(), image);
        }

        log::info!(
            "Loaded {} font(s) and {} image(s) via {}",
            bundle.fonts.len(),
            bundle.images.len(),
            provider.name()
        );
        Ok(bundle)
    }

    pub fn with_font(mut self, file: impl Into<String>, data: SharedResourceData) -> Self {
        self.fonts.insert(file.into(), data);
        self
    }

    pub fn with_image(mut self, key: impl Into<String>, image: ImageAsset) -> Self {
        self.images.insert(key.into(), image);
        self
    }

    pub fn font(&self, file: &str) -> Option<&SharedResourceData> {
        self.fonts.get(file)
    }

    pub fn image(&self, key: &str) -> Option<&ImageAsset> {
        self.images.get(key)
    }

    pub fn fonts(&self) -> impl Iterator<Item = (&str, &SharedResourceData)> {
        self.fonts.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn images(&self) -> impl Iterator<Item = (&str, &ImageAsset)> {
        self.images.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use thirdplane_traits::InMemoryResourceProvider;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([196, 169, 77, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn manifest_lists_each_theme_font_once() {
        let manifest = AssetManifest::for_theme(&Theme::montessori(), "scripts/fonts/");
        assert_eq!(
            manifest.fonts,
            vec!["Lora-Regular.ttf", "Lora-Italic.ttf", "Inter-Regular.ttf"]
        );
        assert_eq!(
            manifest.font_path("Lora-Italic.ttf"),
            "scripts/fonts/Lora-Italic.ttf"
        );
    }

    #[test]
    fn bundle_loads_fonts_and_reads_image_dimensions() {
        let provider = InMemoryResourceProvider::new()
            .with("fonts/A.ttf", vec![0, 1])
            .unwrap()
            .with("logo.png", png_bytes(40, 20))
            .unwrap();
        let manifest = AssetManifest {
            font_dir: "fonts".into(),
            fonts: vec!["A.ttf".into()],
            images: vec![("logo".into(), "logo.png".into())],
        };

        let bundle = AssetBundle::load(&provider, &manifest).unwrap();
        assert_eq!(bundle.font("A.ttf").map(|d| d.len()), Some(2));
        let logo = bundle.image("logo").unwrap();
        assert_eq!((logo.width, logo.height), (40, 20));
        assert_eq!(logo.aspect_ratio(), 2.0);
    }

    #[test]
    fn missing_font_aborts_the_load() {
        let provider = InMemoryResourceProvider::new();
        let manifest = AssetManifest::for_theme(&Theme::montessori(), "scripts/fonts");
        let err = AssetBundle::load(&provider, &manifest).unwrap_err();
        assert_eq!(
            err,
            ResourceError::NotFound("scripts/fonts/Lora-Regular.ttf".into())
        );
    }

    #[test]
    fn garbage_image_is_invalid_format() {
        let err = ImageAsset::from_bytes("logo.png", Arc::new(b"not an image".to_vec())).unwrap_err();
        assert!(matches!(err, ResourceError::InvalidFormat { .. }));
    }
}
