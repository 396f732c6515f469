mod common;

use common::{GeneratedPdf, TestResult, generator};
use thirdplane::content::SITE_LABEL;

fn render() -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let bytes = generator(dir.path()).render_pdf()?;
    GeneratedPdf::from_bytes(bytes)
}

#[test]
fn test_every_page_has_exactly_one_footer() -> TestResult {
    let pdf = render()?;
    let total = pdf.page_count();
    assert!(total >= 6, "expected at least one page per section, got {}", total);

    for page in 1..=total as u32 {
        let texts = pdf.page_texts(page);
        let numbers: Vec<_> = texts.iter().filter(|t| t.contains(" / ")).collect();
        assert_eq!(numbers, vec![&format!("{} / {}", page, total)]);
        let labels = texts.iter().filter(|t| *t == SITE_LABEL).count();
        // The cover also prints the site link above the footer.
        assert!(labels >= 1 && labels <= 2, "page {} has {} labels", page, labels);
    }
    Ok(())
}

#[test]
fn test_content_appears_in_order() -> TestResult {
    let pdf = render()?;
    let text = pdf.all_text();
    let headers = [
        "Montessori for",
        "The Four Planes of Development",
        "Physical Characteristics",
        "Psychological Characteristics",
        "Social Characteristics",
        "What Adolescents Need",
        "Learn More",
    ];
    let mut cursor = 0;
    for header in headers {
        let found = text[cursor..]
            .find(header)
            .unwrap_or_else(|| panic!("'{}' missing or out of order", header));
        cursor += found + header.len();
    }
    assert_pdf_contains_text!(pdf, "\u{2014} Maria Montessori");
    Ok(())
}

#[test]
fn test_metadata_is_recorded() -> TestResult {
    let pdf = render()?;
    let info = pdf.doc.trailer.get(b"Info")?.as_reference()?;
    let info = pdf.doc.get_dictionary(info)?;
    let title = info.get(b"Title")?.as_str()?;
    assert_eq!(title, b"Characteristics of the Third Plane of Development");
    Ok(())
}

#[test]
fn test_rerun_is_byte_identical() -> TestResult {
    let first = render()?;
    let second = render()?;
    assert_eq!(first.bytes, second.bytes);
    Ok(())
}
