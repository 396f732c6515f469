use crate::flow::FlowContext;
use crate::fonts::FontLibrary;
use crate::images::ImageCatalog;
use crate::page::PageGeometry;
use thirdplane_style::Theme;
use thirdplane_types::Size;

/// Theme, standard-font metrics and a 2:1 "logo", enough to lay out any node
/// without touching the filesystem.
pub(crate) struct Fixture {
    pub(crate) theme: Theme,
    pub(crate) fonts: FontLibrary,
    pub(crate) images: ImageCatalog,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        Self {
            theme: Theme::montessori(),
            fonts: FontLibrary::standard(),
            images: ImageCatalog::default().with("logo", Size::new(400.0, 200.0)),
        }
    }

    pub(crate) fn ctx(&self) -> FlowContext<'_> {
        FlowContext::new(
            &self.theme,
            &self.fonts,
            &self.images,
            PageGeometry::letter().content_width(),
        )
    }
}
