//! The OPC container: a zip archive of parts plus `[Content_Types].xml`.

use crate::xml::{XML_DECLARATION, escape_xml};
use std::io::{Cursor, Write};
use thirdplane_render_core::RenderError;
use zip::write::{SimpleFileOptions, ZipWriter};

const CONTENT_TYPES_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

/// Extensions whose content type is declared once with `<Default>`.
const DEFAULT_TYPES: [(&str, &str); 3] = [
    ("rels", "application/vnd.openxmlformats-package.relationships+xml"),
    ("xml", "application/xml"),
    ("png", "image/png"),
];

struct Part {
    name: String,
    content_type: Option<&'static str>,
    data: Vec<u8>,
}

/// Collects parts in memory and writes them out in insertion order, after
/// the content-types part. Every entry gets the same timestamp, so the
/// archive depends on nothing but its parts.
#[derive(Default)]
pub(crate) struct PackageWriter {
    parts: Vec<Part>,
}

impl PackageWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a part with an explicit `<Override>` content type.
    pub fn add_part(&mut self, name: &str, content_type: &'static str, data: impl Into<Vec<u8>>) {
        self.parts.push(Part {
            name: name.to_string(),
            content_type: Some(content_type),
            data: data.into(),
        });
    }

    /// Adds a part typed by its extension (relationships, media).
    pub fn add_file(&mut self, name: &str, data: impl Into<Vec<u8>>) {
        self.parts.push(Part {
            name: name.to_string(),
            content_type: None,
            data: data.into(),
        });
    }

    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|p| p.name.as_str())
    }

    fn content_types(&self) -> String {
        let mut xml = String::from(XML_DECLARATION);
        xml.push_str(&format!(r#"<Types xmlns="{}">"#, CONTENT_TYPES_NS));
        for (ext, content_type) in DEFAULT_TYPES {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                ext, content_type
            ));
        }
        for part in &self.parts {
            if let Some(content_type) = part.content_type {
                xml.push_str(&format!(
                    r#"<Override PartName="/{}" ContentType="{}"/>"#,
                    escape_xml(&part.name),
                    content_type
                ));
            }
        }
        xml.push_str("</Types>");
        xml
    }

    pub fn finish(self) -> Result<Vec<u8>, RenderError> {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        zip.start_file("[Content_Types].xml", options).map_err(zip_err)?;
        zip.write_all(self.content_types().as_bytes())?;
        for part in &self.parts {
            zip.start_file(part.name.as_str(), options).map_err(zip_err)?;
            zip.write_all(&part.data)?;
        }

        let cursor = zip.finish().map_err(zip_err)?;
        Ok(cursor.into_inner())
    }
}

fn zip_err(e: zip::result::ZipError) -> RenderError {
    RenderError::Package(e.to_string())
}
