//! Font dictionaries for the faces of a [`FontLibrary`].

use crate::winansi;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use std::io::Write;
use thirdplane_layout::{FaceSource, FontFace, FontLibrary};
use thirdplane_render_core::RenderError;

const FIRST_CHAR: u8 = 32;
const LAST_CHAR: u8 = 255;
/// Nonsymbolic.
const FLAGS_NONSYMBOLIC: i64 = 32;
const FLAG_ITALIC: i64 = 64;

/// Resource name of the face at `index` in [`FontLibrary::faces`].
pub(crate) fn resource_name(index: usize) -> String {
    format!("F{}", index + 1)
}

/// Adds one font dictionary per face and returns the `/Font` resource
/// dictionary mapping `F1..Fn` to them.
pub(crate) fn embed_fonts(doc: &mut Document, fonts: &FontLibrary) -> Result<Dictionary, RenderError> {
    let mut resources = Dictionary::new();
    for (index, face) in fonts.faces().iter().enumerate() {
        let id = match face.source() {
            FaceSource::Standard(font) => doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding",
            }),
            FaceSource::TrueType(data) => embed_truetype(doc, face, data)?,
        };
        log::debug!("Embedded font {} as {}", face.name(), resource_name(index));
        resources.set(resource_name(index), id);
    }
    Ok(resources)
}

fn widths(face: &FontFace) -> Vec<Object> {
    (FIRST_CHAR..=LAST_CHAR)
        .map(|code| match winansi::decode_byte(code) {
            Some(c) => Object::Integer(face.advance_per_mille(c).round() as i64),
            None => Object::Integer(0),
        })
        .collect()
}

pub(crate) fn flate(data: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

fn embed_truetype(doc: &mut Document, face: &FontFace, data: &[u8]) -> Result<ObjectId, RenderError> {
    let parsed = ttf_parser::Face::parse(data, 0)
        .map_err(|e| RenderError::Pdf(format!("font {}: {}", face.name(), e)))?;
    let scale = 1000.0 / parsed.units_per_em() as f32;
    let units = |v: i16| (v as f32 * scale).round() as i64;

    let bbox = parsed.global_bounding_box();
    let italic_angle = parsed.italic_angle();
    let cap_height = parsed.capital_height().unwrap_or(parsed.ascender());
    let mut flags = FLAGS_NONSYMBOLIC;
    if parsed.is_italic() || italic_angle != 0.0 {
        flags |= FLAG_ITALIC;
    }

    let file_dict = dictionary! {
        "Length1" => data.len() as i64,
        "Filter" => "FlateDecode",
    };
    let file_id = doc.add_object(Stream::new(file_dict, flate(data)?));

    let descriptor_id = doc.add_object(dictionary! {
        "Type" => "FontDescriptor",
        "FontName" => face.name(),
        "Flags" => flags,
        "FontBBox" => vec![
            Object::Integer(units(bbox.x_min)),
            Object::Integer(units(bbox.y_min)),
            Object::Integer(units(bbox.x_max)),
            Object::Integer(units(bbox.y_max)),
        ],
        "ItalicAngle" => italic_angle,
        "Ascent" => units(parsed.ascender()),
        "Descent" => units(parsed.descender()),
        "CapHeight" => units(cap_height),
        "StemV" => 80_i64,
        "FontFile2" => file_id,
    });

    Ok(doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "TrueType",
        "BaseFont" => face.name(),
        "FirstChar" => FIRST_CHAR as i64,
        "LastChar" => LAST_CHAR as i64,
        "Widths" => widths(face),
        "Encoding" => "WinAnsiEncoding",
        "FontDescriptor" => descriptor_id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_faces_become_type1_fonts() {
        let mut doc = Document::with_version("1.7");
        let fonts = FontLibrary::standard();
        let resources = embed_fonts(&mut doc, &fonts).unwrap();
        assert_eq!(resources.len(), fonts.faces().len());

        let id = resources.get(b"F3").unwrap().as_reference().unwrap();
        let font = doc.get_dictionary(id).unwrap();
        assert_eq!(font.get(b"BaseFont").unwrap().as_name().unwrap(), b"Helvetica");
        assert_eq!(font.get(b"Subtype").unwrap().as_name().unwrap(), b"Type1");
    }

    #[test]
    fn widths_cover_the_winansi_range() {
        let face = FontFace::standard(thirdplane_layout::StandardFont::Helvetica);
        let widths = widths(&face);
        assert_eq!(widths.len(), 224);
        // 'A' is code 65.
        assert_eq!(widths[(65 - FIRST_CHAR) as usize], Object::Integer(667));
        // 0x81 is undefined.
        assert_eq!(widths[(0x81 - FIRST_CHAR) as usize], Object::Integer(0));
    }

    #[test]
    fn flate_output_inflates_back() {
        use flate2::read::ZlibDecoder;
        use std::io::Read;
        let packed = flate(b"worksheet worksheet worksheet").unwrap();
        let mut out = Vec::new();
        ZlibDecoder::new(packed.as_slice()).read_to_end(&mut out).unwrap();
        assert_eq!(out, b"worksheet worksheet worksheet");
    }
}
