use crate::fonts::embed_fonts;
use crate::images::embed_image;
use crate::page::{PageContext, PageResources};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};
use thirdplane_layout::{FontLibrary, Page, PageGeometry};
use thirdplane_render_core::{DocumentMetadata, DocumentRenderer, RenderError};
use thirdplane_resource::AssetBundle;

/// Renders composed pages into a complete PDF held in memory.
///
/// All pages share one resource dictionary. Object ids are assigned in
/// drawing order and no timestamps are written, so equal input always gives
/// equal bytes.
pub struct LopdfRenderer<'a> {
    fonts: &'a FontLibrary,
    assets: &'a AssetBundle,
    metadata: DocumentMetadata,
    geometry: PageGeometry,
}

impl<'a> LopdfRenderer<'a> {
    pub fn new(
        fonts: &'a FontLibrary,
        assets: &'a AssetBundle,
        metadata: DocumentMetadata,
        geometry: PageGeometry,
    ) -> Self {
        Self {
            fonts,
            assets,
            metadata,
            geometry,
        }
    }

    fn embed_images(
        &self,
        doc: &mut Document,
        resources: &PageResources,
    ) -> Result<Dictionary, RenderError> {
        let mut xobjects = Dictionary::new();
        for (src, name) in &resources.images {
            let asset = self.assets.image(src).ok_or_else(|| RenderError::Image {
                src: src.clone(),
                message: "image was not loaded".to_string(),
            })?;
            xobjects.set(name.clone(), embed_image(doc, src, asset)?);
        }
        Ok(xobjects)
    }
}

impl DocumentRenderer for LopdfRenderer<'_> {
    type Input = [Page];

    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn render(&self, pages: &[Page]) -> Result<Vec<u8>, RenderError> {
        let (width, height) = (self.geometry.width, self.geometry.height);
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let resources_id = doc.new_object_id();
        let font_dict = embed_fonts(&mut doc, self.fonts)?;

        let media_box: Vec<Object> = vec![
            Object::Integer(0),
            Object::Integer(0),
            width.into(),
            height.into(),
        ];
        let mut resources = PageResources::default();
        let mut kids = Vec::with_capacity(pages.len());
        for page in pages {
            let mut ctx = PageContext::new(height, self.fonts, &mut resources);
            for element in page.elements() {
                ctx.draw_element(element);
            }
            let content_id = doc.add_object(Stream::new(dictionary! {}, ctx.finish().encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => media_box.clone(),
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(Object::Reference(page_id));
        }

        let mut resource_dict = dictionary! { "Font" => font_dict };
        let xobjects = self.embed_images(&mut doc, &resources)?;
        if !xobjects.is_empty() {
            resource_dict.set("XObject", xobjects);
        }
        if !resources.states.is_empty() {
            let mut states = Dictionary::new();
            for (thousandths, name) in &resources.states {
                let alpha = *thousandths as f32 / 1000.0;
                states.set(
                    name.clone(),
                    dictionary! { "Type" => "ExtGState", "ca" => alpha, "CA" => alpha },
                );
            }
            resource_dict.set("ExtGState", states);
        }
        doc.objects.insert(resources_id, Object::Dictionary(resource_dict));

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(self.metadata.title.as_str()),
            "Author" => Object::string_literal(self.metadata.author.as_str()),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;
        log::info!("Rendered {} page(s), {} bytes", count, bytes.len());
        Ok(bytes)
    }
}
