use crate::package::PackageWriter;
use crate::parts::{self, Relationship};
use crate::shapes::slide_xml;
use std::collections::BTreeMap;
use thirdplane_layout::{Shape, Slide};
use thirdplane_render_core::{DocumentMetadata, DocumentRenderer, RenderError};
use thirdplane_resource::AssetBundle;
use thirdplane_style::Theme;

/// 16:9 slide size in EMU (13.333 x 7.5 in).
pub const SLIDE_SIZE_EMU: (i64, i64) = (12_192_000, 6_858_000);

/// Renders laid-out slides into a `.pptx` package held in memory.
///
/// Each distinct image is stored once under `ppt/media/`, named in order of
/// first use. Parts are written in a fixed order with a fixed timestamp.
pub struct PptxRenderer<'a> {
    theme: &'a Theme,
    assets: &'a AssetBundle,
    metadata: DocumentMetadata,
}

impl<'a> PptxRenderer<'a> {
    pub fn new(theme: &'a Theme, assets: &'a AssetBundle, metadata: DocumentMetadata) -> Self {
        Self {
            theme,
            assets,
            metadata,
        }
    }
}

/// Image keys used on a slide, in paint order, without repeats.
fn slide_images(slide: &Slide) -> Vec<&str> {
    let mut srcs: Vec<&str> = Vec::new();
    for shape in &slide.shapes {
        if let Shape::Picture(picture) = shape
            && !srcs.contains(&picture.src.as_str())
        {
            srcs.push(&picture.src);
        }
    }
    srcs
}

impl DocumentRenderer for PptxRenderer<'_> {
    type Input = [Slide];

    fn extension(&self) -> &'static str {
        "pptx"
    }

    fn render(&self, slides: &[Slide]) -> Result<Vec<u8>, RenderError> {
        let count = slides.len();
        let mut package = PackageWriter::new();

        package.add_file("_rels/.rels", parts::root_relationships());
        package.add_part(
            "docProps/core.xml",
            parts::CT_CORE_PROPS,
            parts::core_properties(&self.metadata),
        );
        package.add_part("docProps/app.xml", parts::CT_APP_PROPS, parts::app_properties(count));
        package.add_part(
            "ppt/presentation.xml",
            parts::CT_PRESENTATION,
            parts::presentation(count, SLIDE_SIZE_EMU),
        );
        package.add_file(
            "ppt/_rels/presentation.xml.rels",
            parts::presentation_relationships(count),
        );
        package.add_part(
            "ppt/presProps.xml",
            parts::CT_PRES_PROPS,
            parts::presentation_properties(),
        );
        package.add_part("ppt/viewProps.xml", parts::CT_VIEW_PROPS, parts::view_properties());
        package.add_part("ppt/tableStyles.xml", parts::CT_TABLE_STYLES, parts::table_styles());
        package.add_part("ppt/theme/theme1.xml", parts::CT_THEME, parts::theme(self.theme));
        package.add_part(
            "ppt/slideMasters/slideMaster1.xml",
            parts::CT_SLIDE_MASTER,
            parts::slide_master(),
        );
        package.add_file(
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            parts::slide_master_relationships(),
        );
        package.add_part(
            "ppt/slideLayouts/slideLayout1.xml",
            parts::CT_SLIDE_LAYOUT,
            parts::slide_layout(),
        );
        package.add_file(
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            parts::slide_layout_relationships(),
        );

        // Deck-wide media names, assigned on first use.
        let mut media_files: Vec<(&str, String)> = Vec::new();
        for (index, slide) in slides.iter().enumerate() {
            let mut rels = vec![Relationship::new(
                1,
                parts::REL_SLIDE_LAYOUT,
                "../slideLayouts/slideLayout1.xml",
            )];
            let mut rel_ids = BTreeMap::new();
            for src in slide_images(slide) {
                let file = match media_files.iter().find(|(s, _)| *s == src) {
                    Some((_, file)) => file.clone(),
                    None => {
                        let file = format!("image{}.png", media_files.len() + 1);
                        media_files.push((src, file.clone()));
                        file
                    }
                };
                let rel = Relationship::new(rels.len() + 1, parts::REL_IMAGE, format!("../media/{}", file));
                rel_ids.insert(src.to_string(), rel.id.clone());
                rels.push(rel);
            }

            let number = index + 1;
            package.add_part(
                &format!("ppt/slides/slide{}.xml", number),
                parts::CT_SLIDE,
                slide_xml(slide, self.theme, &rel_ids)?,
            );
            package.add_file(
                &format!("ppt/slides/_rels/slide{}.xml.rels", number),
                parts::relationships(&rels),
            );
            log::debug!(
                "Slide {}: {} shape(s), {} image(s)",
                number,
                slide.shapes.len(),
                rel_ids.len()
            );
        }

        for (src, file) in &media_files {
            let asset = self.assets.image(src).ok_or_else(|| RenderError::Image {
                src: src.to_string(),
                message: "image was not loaded".to_string(),
            })?;
            package.add_file(&format!("ppt/media/{}", file), asset.data.as_slice());
        }

        let bytes = package.finish()?;
        log::info!("Rendered {} slide(s), {} bytes", count, bytes.len());
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};
    use std::sync::Arc;
    use thirdplane_idf::{Node, Section};
    use thirdplane_layout::{Frame, ImageCatalog, SlideContext};
    use thirdplane_resource::ImageAsset;

    fn logo() -> ImageAsset {
        let img = image::RgbaImage::from_pixel(4, 2, image::Rgba([196, 169, 77, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        ImageAsset::from_bytes("logo gold.png", Arc::new(bytes)).unwrap()
    }

    fn deck(assets: &AssetBundle, theme: &Theme) -> Vec<Slide> {
        let images = ImageCatalog::from_assets(assets);
        let ctx = SlideContext::new(theme, &images);
        let sections = [
            Section::new(
                "cover",
                vec![
                    Node::Image(thirdplane_idf::ImageNode {
                        src: "logo".to_string(),
                        width: 80.0,
                    }),
                    Node::SectionHeader("Cover".to_string()),
                ],
            ),
            Section::new(
                "closing",
                vec![
                    Node::SectionHeader("Closing".to_string()),
                    Node::Image(thirdplane_idf::ImageNode {
                        src: "logo".to_string(),
                        width: 35.0,
                    }),
                ],
            ),
        ];
        let slots = [Frame::new(5.0, 0.8, 2.0, 2.0), Frame::new(0.8, 3.0, 11.73, 1.0)];
        sections
            .iter()
            .map(|s| ctx.compose(s, &slots, "montessoriforadolescents.com").unwrap())
            .collect()
    }

    fn render() -> Vec<u8> {
        let theme = Theme::montessori();
        let assets = AssetBundle::default().with_image("logo", logo());
        let slides = deck(&assets, &theme);
        PptxRenderer::new(&theme, &assets, DocumentMetadata::new("Deck", "Author"))
            .render(&slides)
            .unwrap()
    }

    fn read(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut text = String::new();
        archive.by_name(name).unwrap().read_to_string(&mut text).unwrap();
        text
    }

    #[test]
    fn package_has_one_part_per_slide_and_one_media_file() {
        let bytes = render();
        let archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let names: Vec<_> = archive.file_names().collect();
        assert!(names.contains(&"ppt/slides/slide1.xml"));
        assert!(names.contains(&"ppt/slides/slide2.xml"));
        assert!(!names.contains(&"ppt/slides/slide3.xml"));
        assert_eq!(names.iter().filter(|n| n.starts_with("ppt/media/")).count(), 1);

        let types = read(&bytes, "[Content_Types].xml");
        assert!(types.contains(r#"PartName="/ppt/slides/slide2.xml""#));
    }

    #[test]
    fn slides_reference_shared_media() {
        let bytes = render();
        for n in 1..=2 {
            let rels = read(&bytes, &format!("ppt/slides/_rels/slide{}.xml.rels", n));
            assert!(rels.contains(r#"Id="rId1""#));
            assert!(rels.contains(r#"Id="rId2""#));
            assert!(rels.contains(r#"Target="../media/image1.png""#));
        }
        let slide = read(&bytes, "ppt/slides/slide2.xml");
        assert!(slide.contains("<a:t>Closing</a:t>"));
        assert!(slide.contains("<a:t>montessoriforadolescents.com</a:t>"));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render(), render());
    }

    #[test]
    fn missing_image_asset_fails() {
        let theme = Theme::montessori();
        let loaded = AssetBundle::default().with_image("logo", logo());
        let slides = deck(&loaded, &theme);
        let empty = AssetBundle::default();
        let result = PptxRenderer::new(&theme, &empty, DocumentMetadata::default()).render(&slides);
        assert!(matches!(result, Err(RenderError::Image { .. })));
    }
}
