#![allow(dead_code)]

use lopdf::Document as LopdfDocument;
use lopdf::content::Content;
use std::io::{Cursor, Read};
use std::path::Path;
use thirdplane::{Generator, GeneratorConfig};
use thirdplane_render_lopdf::winansi;
use thirdplane_resource::InMemoryResourceProvider;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub const LOGO_PATH: &str = "logo gold.png";

pub const FONT_FILES: [&str; 3] = ["Lora-Regular.ttf", "Lora-Italic.ttf", "Inter-Regular.ttf"];

/// An OFL-licensed TrueType file standing in for every theme face.
pub fn font_fixture() -> Vec<u8> {
    std::fs::read(
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("Montserrat-Regular.ttf"),
    )
    .expect("read font fixture")
}

/// A small opaque PNG standing in for the gold logo.
pub fn logo_png() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(40, 40, image::Rgba([196, 169, 77, 255]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .expect("encode logo fixture");
    out.into_inner()
}

pub fn provider_with_logo() -> InMemoryResourceProvider {
    let provider = InMemoryResourceProvider::new();
    provider.add(LOGO_PATH, logo_png()).expect("add logo");
    provider
}

/// A generator that writes below `root` and sets text in the standard faces.
pub fn generator(root: &Path) -> Generator {
    let _ = env_logger::builder().is_test(true).try_init();
    Generator::with_standard_fonts(GeneratorConfig::new(root), &provider_with_logo())
        .expect("load generator")
}

/// A generator on the default TrueType path, with every font file served
/// from the fixture.
pub fn truetype_generator(root: &Path) -> Generator {
    let _ = env_logger::builder().is_test(true).try_init();
    let provider = provider_with_logo();
    let font = font_fixture();
    for file in FONT_FILES {
        provider
            .add(format!("scripts/fonts/{}", file), font.clone())
            .expect("add font");
    }
    Generator::from_provider(GeneratorConfig::new(root), &provider).expect("load generator")
}

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Strings shown with `Tj` on a 1-based page, in drawing order.
    pub fn page_texts(&self, page: u32) -> Vec<String> {
        let pages = self.doc.get_pages();
        let Some(id) = pages.get(&page) else {
            return Vec::new();
        };
        let data = self.doc.get_page_content(*id).expect("page content");
        let content = Content::decode(&data).expect("decode content");
        content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| op.operands.first())
            .filter_map(|operand| operand.as_str().ok())
            .map(winansi::decode)
            .collect()
    }

    pub fn all_text(&self) -> String {
        (1..=self.page_count() as u32)
            .flat_map(|p| self.page_texts(p))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Wrapper around a generated PPTX package.
pub struct GeneratedPptx {
    pub bytes: Vec<u8>,
}

impl GeneratedPptx {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    fn archive(&self) -> zip::ZipArchive<Cursor<&[u8]>> {
        zip::ZipArchive::new(Cursor::new(self.bytes.as_slice())).expect("open package")
    }

    pub fn part_names(&self) -> Vec<String> {
        self.archive().file_names().map(str::to_string).collect()
    }

    pub fn part(&self, name: &str) -> String {
        let mut archive = self.archive();
        let mut text = String::new();
        archive
            .by_name(name)
            .unwrap_or_else(|_| panic!("missing part {}", name))
            .read_to_string(&mut text)
            .expect("read part");
        text
    }

    pub fn slide_count(&self) -> usize {
        self.part_names()
            .iter()
            .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
            .count()
    }
}

#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let all = $pdf.all_text();
        assert!(all.contains($text), "PDF does not contain '{}'", $text);
    };
}
