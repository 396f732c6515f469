mod common;

use common::{GeneratedPdf, TestResult, font_fixture, truetype_generator};
use lopdf::{Dictionary, Object};
use thirdplane::content::SITE_LABEL;

fn render() -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let bytes = truetype_generator(dir.path()).render_pdf()?;
    GeneratedPdf::from_bytes(bytes)
}

fn font_dicts(pdf: &GeneratedPdf) -> Vec<&Dictionary> {
    pdf.doc
        .objects
        .values()
        .filter_map(|o| o.as_dict().ok())
        .filter(|d| d.get(b"Type").and_then(Object::as_name).ok() == Some(b"Font".as_slice()))
        .collect()
}

#[test]
fn test_theme_faces_are_embedded_as_truetype() -> TestResult {
    let pdf = render()?;
    let fonts = font_dicts(&pdf);
    // One face per distinct theme file.
    assert_eq!(fonts.len(), 3);

    let fixture_len = font_fixture().len() as i64;
    for font in fonts {
        assert_eq!(font.get(b"Subtype")?.as_name()?, b"TrueType");
        assert_eq!(font.get(b"BaseFont")?.as_name()?, b"Montserrat-Regular");
        assert_eq!(font.get(b"Encoding")?.as_name()?, b"WinAnsiEncoding");
        assert_eq!(font.get(b"Widths")?.as_array()?.len(), 224);

        let descriptor = pdf
            .doc
            .get_dictionary(font.get(b"FontDescriptor")?.as_reference()?)?;
        assert_eq!(descriptor.get(b"Type")?.as_name()?, b"FontDescriptor");
        let file = pdf
            .doc
            .get_object(descriptor.get(b"FontFile2")?.as_reference()?)?
            .as_stream()?;
        assert_eq!(file.dict.get(b"Length1")?.as_i64()?, fixture_len);
        assert_eq!(file.dict.get(b"Filter")?.as_name()?, b"FlateDecode");
    }
    Ok(())
}

#[test]
fn test_truetype_pages_each_carry_one_footer() -> TestResult {
    let pdf = render()?;
    let total = pdf.page_count();
    assert!(total >= 6, "expected at least one page per section, got {}", total);

    for page in 1..=total as u32 {
        let texts = pdf.page_texts(page);
        let numbers: Vec<_> = texts.iter().filter(|t| t.contains(" / ")).collect();
        assert_eq!(numbers, vec![&format!("{} / {}", page, total)]);
        assert!(texts.iter().any(|t| t == SITE_LABEL));
    }
    assert_pdf_contains_text!(pdf, "The Four Planes of Development");
    Ok(())
}

#[test]
fn test_truetype_rerun_is_byte_identical() -> TestResult {
    assert_eq!(render()?.bytes, render()?.bytes);
    Ok(())
}
