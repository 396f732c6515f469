//! Loads assets once, runs either pipeline, and writes the artifacts.

use crate::config::GeneratorConfig;
use crate::content::{self, LOGO};
use crate::deck::compose_deck;
use crate::error::PipelineError;
use crate::output::write_artifact;
use crate::pdf::compose_worksheet;
use std::path::PathBuf;
use std::sync::Arc;
use thirdplane_idf::Document;
use thirdplane_layout::{FlowContext, FontLibrary, ImageCatalog, PageDecorations, PageGeometry, SlideContext};
use thirdplane_render_core::{DocumentMetadata, DocumentRenderer};
use thirdplane_render_lopdf::LopdfRenderer;
use thirdplane_render_pptx::PptxRenderer;
use thirdplane_resource::{AssetBundle, FilesystemResourceProvider, ResourceProvider};
use thirdplane_style::Theme;

/// Which artifacts a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Pdf,
    Pptx,
    All,
}

/// Theme, loaded assets and content of one run. Immutable once built.
#[derive(Debug)]
pub struct Generator {
    config: GeneratorConfig,
    theme: Theme,
    assets: AssetBundle,
    fonts: FontLibrary,
    images: ImageCatalog,
    document: Document,
}

impl Generator {
    /// Reads every asset from the repository root.
    pub fn load(config: GeneratorConfig) -> Result<Self, PipelineError> {
        let provider = FilesystemResourceProvider::new(config.root());
        Self::from_provider(config, &provider)
    }

    /// Loads every font and image up front; nothing is written on failure.
    pub fn from_provider(
        config: GeneratorConfig,
        provider: &dyn ResourceProvider,
    ) -> Result<Self, PipelineError> {
        let theme = Theme::montessori();
        let assets = AssetBundle::load(provider, &config.manifest(&theme))?;
        let fonts = FontLibrary::from_assets(&theme, &assets)?;
        Ok(Self::assemble(config, theme, assets, fonts))
    }

    /// Like [`Self::from_provider`], but sets text in the standard PDF faces
    /// and reads only the images.
    pub fn with_standard_fonts(
        config: GeneratorConfig,
        provider: &dyn ResourceProvider,
    ) -> Result<Self, PipelineError> {
        let theme = Theme::montessori();
        let mut manifest = config.manifest(&theme);
        manifest.fonts.clear();
        let assets = AssetBundle::load(provider, &manifest)?;
        Ok(Self::assemble(config, theme, assets, FontLibrary::standard()))
    }

    fn assemble(config: GeneratorConfig, theme: Theme, assets: AssetBundle, fonts: FontLibrary) -> Self {
        let images = ImageCatalog::from_assets(&assets);
        Self {
            config,
            theme,
            assets,
            fonts,
            images,
            document: content::worksheet(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn metadata(&self) -> DocumentMetadata {
        DocumentMetadata::new(self.document.title.as_str(), self.document.author.as_str())
    }

    pub fn render_pdf(&self) -> Result<Vec<u8>, PipelineError> {
        let geometry = PageGeometry::letter();
        let ctx = FlowContext::new(&self.theme, &self.fonts, &self.images, geometry.content_width());
        let decorations = PageDecorations {
            theme: &self.theme,
            fonts: &self.fonts,
            geometry,
            footer_label: &self.document.footer_label,
            watermark: Some((LOGO, self.images.size(LOGO)?)),
        };
        let pages = compose_worksheet(&self.document, &ctx, &decorations)?;
        log::info!("Laid out {} page(s)", pages.len());
        let renderer = LopdfRenderer::new(&self.fonts, &self.assets, self.metadata(), geometry);
        Ok(renderer.render(&pages)?)
    }

    pub fn render_pptx(&self) -> Result<Vec<u8>, PipelineError> {
        let ctx = SlideContext::new(&self.theme, &self.images);
        let slides = compose_deck(&self.document, &ctx)?;
        log::info!("Laid out {} slide(s)", slides.len());
        let renderer = PptxRenderer::new(&self.theme, &self.assets, self.metadata());
        Ok(renderer.render(&slides)?)
    }

    fn render(&self, artifact: Artifact) -> Result<Vec<u8>, PipelineError> {
        match artifact {
            Artifact::Pdf => self.render_pdf(),
            Artifact::Pptx => self.render_pptx(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Artifact {
    Pdf,
    Pptx,
}

impl Artifact {
    fn extension(self) -> &'static str {
        match self {
            Artifact::Pdf => "pdf",
            Artifact::Pptx => "pptx",
        }
    }
}

/// Runs CPU-bound work on the blocking pool.
async fn blocking<T, F>(work: F) -> Result<T, PipelineError>
where
    F: FnOnce() -> Result<T, PipelineError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work).await?
}

/// Lays out and serializes `artifact` off the async workers, then writes it.
async fn produce(generator: Arc<Generator>, artifact: Artifact) -> Result<PathBuf, PipelineError> {
    let path = generator.config.output_path(artifact.extension());
    let bytes = blocking(move || generator.render(artifact)).await?;
    write_artifact(&path, &bytes).await?;
    Ok(path)
}

/// Runs the requested pipelines. With [`Target::All`] the PDF and PPTX run as
/// two tasks writing distinct files; both must succeed.
pub async fn run(generator: Arc<Generator>, target: Target) -> Result<Vec<PathBuf>, PipelineError> {
    match target {
        Target::Pdf => Ok(vec![produce(generator, Artifact::Pdf).await?]),
        Target::Pptx => Ok(vec![produce(generator, Artifact::Pptx).await?]),
        Target::All => {
            let pdf = tokio::spawn(produce(Arc::clone(&generator), Artifact::Pdf));
            let pptx = tokio::spawn(produce(generator, Artifact::Pptx));
            let (pdf, pptx) = tokio::join!(pdf, pptx);
            Ok(vec![pdf??, pptx??])
        }
    }
}
