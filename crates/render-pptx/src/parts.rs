//! Fixed package parts: relationships, document properties, presentation,
//! master, layout and theme.

use crate::xml::{NS_A, NS_P, NS_R, XML_DECLARATION, escape_xml};
use thirdplane_render_core::DocumentMetadata;
use thirdplane_style::Theme;

pub const CT_PRESENTATION: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
pub const CT_SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
pub const CT_SLIDE_MASTER: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
pub const CT_SLIDE_LAYOUT: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
pub const CT_THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
pub const CT_PRES_PROPS: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presProps+xml";
pub const CT_VIEW_PROPS: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml";
pub const CT_TABLE_STYLES: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml";
pub const CT_CORE_PROPS: &str = "application/vnd.openxmlformats-package.core-properties+xml";
pub const CT_APP_PROPS: &str =
    "application/vnd.openxmlformats-officedocument.extended-properties+xml";

const REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const REL_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub const REL_SLIDE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
pub const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
pub const REL_IMAGE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

/// Master ids live above 2^31; slide ids start at 256.
const MASTER_ID: u32 = 2_147_483_648;
const LAYOUT_ID: u32 = 2_147_483_649;
const FIRST_SLIDE_ID: u32 = 256;

/// Notes page size, portrait letter-ish as office apps write it.
const NOTES_SIZE: (i64, i64) = (6_858_000, 9_144_000);

/// One `<Relationship>` entry.
pub struct Relationship<'a> {
    pub id: String,
    pub kind: &'a str,
    pub target: String,
}

impl<'a> Relationship<'a> {
    pub fn new(index: usize, kind: &'a str, target: impl Into<String>) -> Self {
        Self {
            id: format!("rId{}", index),
            kind,
            target: target.into(),
        }
    }
}

pub fn relationships(rels: &[Relationship<'_>]) -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(&format!(r#"<Relationships xmlns="{}">"#, REL_NS));
    for rel in rels {
        xml.push_str(&format!(
            r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
            rel.id,
            rel.kind,
            escape_xml(&rel.target)
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

pub fn root_relationships() -> String {
    relationships(&[
        Relationship::new(1, &format!("{}/officeDocument", REL_BASE), "ppt/presentation.xml"),
        Relationship::new(
            2,
            "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties",
            "docProps/core.xml",
        ),
        Relationship::new(3, &format!("{}/extended-properties", REL_BASE), "docProps/app.xml"),
    ])
}

/// Title and author only; no timestamps, so re-runs are byte-identical.
pub fn core_properties(metadata: &DocumentMetadata) -> String {
    format!(
        concat!(
            "{}",
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            "<dc:title>{}</dc:title><dc:creator>{}</dc:creator>",
            "<cp:lastModifiedBy>{}</cp:lastModifiedBy><cp:revision>1</cp:revision>",
            "</cp:coreProperties>"
        ),
        XML_DECLARATION,
        escape_xml(&metadata.title),
        escape_xml(&metadata.author),
        escape_xml(&metadata.author),
    )
}

pub fn app_properties(slide_count: usize) -> String {
    format!(
        concat!(
            "{}",
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
            r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
            "<Application>thirdplane</Application>",
            "<PresentationFormat>Custom</PresentationFormat>",
            "<Slides>{}</Slides>",
            "</Properties>"
        ),
        XML_DECLARATION, slide_count
    )
}

/// `ppt/presentation.xml`. Relationship ids: rId1 is the master, slides
/// follow from rId2.
pub fn presentation(slide_count: usize, size_emu: (i64, i64)) -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(&format!(
        r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
        NS_A, NS_R, NS_P
    ));
    xml.push_str(&format!(
        r#"<p:sldMasterIdLst><p:sldMasterId id="{}" r:id="rId1"/></p:sldMasterIdLst>"#,
        MASTER_ID
    ));
    xml.push_str("<p:sldIdLst>");
    for i in 0..slide_count {
        xml.push_str(&format!(
            r#"<p:sldId id="{}" r:id="rId{}"/>"#,
            FIRST_SLIDE_ID + i as u32,
            i + 2
        ));
    }
    xml.push_str("</p:sldIdLst>");
    xml.push_str(&format!(
        r#"<p:sldSz cx="{}" cy="{}"/><p:notesSz cx="{}" cy="{}"/>"#,
        size_emu.0, size_emu.1, NOTES_SIZE.0, NOTES_SIZE.1
    ));
    xml.push_str("<p:defaultTextStyle/></p:presentation>");
    xml
}

pub fn presentation_relationships(slide_count: usize) -> String {
    let mut rels = vec![Relationship::new(
        1,
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster",
        "slideMasters/slideMaster1.xml",
    )];
    for i in 0..slide_count {
        rels.push(Relationship::new(
            i + 2,
            REL_SLIDE,
            format!("slides/slide{}.xml", i + 1),
        ));
    }
    let next = slide_count + 2;
    rels.push(Relationship::new(
        next,
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps",
        "presProps.xml",
    ));
    rels.push(Relationship::new(
        next + 1,
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/viewProps",
        "viewProps.xml",
    ));
    rels.push(Relationship::new(
        next + 2,
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme",
        "theme/theme1.xml",
    ));
    rels.push(Relationship::new(
        next + 3,
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/tableStyles",
        "tableStyles.xml",
    ));
    relationships(&rels)
}

pub fn presentation_properties() -> String {
    format!(
        r#"{}<p:presentationPr xmlns:a="{}" xmlns:r="{}" xmlns:p="{}"/>"#,
        XML_DECLARATION, NS_A, NS_R, NS_P
    )
}

pub fn view_properties() -> String {
    format!(
        concat!(
            r#"{}<p:viewPr xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            r#"<p:normalViewPr><p:restoredLeft sz="15620"/><p:restoredTop sz="94660"/></p:normalViewPr>"#,
            r#"<p:gridSpacing cx="76200" cy="76200"/></p:viewPr>"#
        ),
        XML_DECLARATION, NS_A, NS_R, NS_P
    )
}

pub fn table_styles() -> String {
    format!(
        r#"{}<a:tblStyleLst xmlns:a="{}" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#,
        XML_DECLARATION, NS_A
    )
}

/// Empty group-shape header every shape tree starts with.
pub const SHAPE_TREE_HEADER: &str = concat!(
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#
);

pub fn slide_master() -> String {
    format!(
        concat!(
            r#"{}<p:sldMaster xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#,
            "<p:spTree>{}</p:spTree></p:cSld>",
            r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
            r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" "#,
            r#"hlink="hlink" folHlink="folHlink"/>"#,
            r#"<p:sldLayoutIdLst><p:sldLayoutId id="{}" r:id="rId1"/></p:sldLayoutIdLst>"#,
            "</p:sldMaster>"
        ),
        XML_DECLARATION, NS_A, NS_R, NS_P, SHAPE_TREE_HEADER, LAYOUT_ID
    )
}

pub fn slide_master_relationships() -> String {
    relationships(&[
        Relationship::new(1, REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml"),
        Relationship::new(
            2,
            "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme",
            "../theme/theme1.xml",
        ),
    ])
}

pub fn slide_layout() -> String {
    format!(
        concat!(
            r#"{}<p:sldLayout xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" type="blank" preserve="1">"#,
            r#"<p:cSld name="Blank"><p:spTree>{}</p:spTree></p:cSld>"#,
            "<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"
        ),
        XML_DECLARATION, NS_A, NS_R, NS_P, SHAPE_TREE_HEADER
    )
}

pub fn slide_layout_relationships() -> String {
    relationships(&[Relationship::new(
        1,
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster",
        "../slideMasters/slideMaster1.xml",
    )])
}

fn solid(color: &str) -> String {
    format!(r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color)
}

/// The deck theme: palette as the color scheme, display and body families
/// as the major and minor fonts.
pub fn theme(theme: &Theme) -> String {
    let p = &theme.palette;
    let scheme = [
        ("dk1", p.text),
        ("lt1", p.background),
        ("dk2", p.primary),
        ("lt2", p.highlight),
        ("accent1", p.primary),
        ("accent2", p.accent),
        ("accent3", p.border),
        ("accent4", p.text),
        ("accent5", p.highlight),
        ("accent6", p.accent),
        ("hlink", p.primary),
        ("folHlink", p.accent),
    ];

    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(&format!(r#"<a:theme xmlns:a="{}" name="Third Plane">"#, NS_A));
    xml.push_str(r#"<a:themeElements><a:clrScheme name="Third Plane">"#);
    for (slot, color) in scheme {
        xml.push_str(&format!(
            r#"<a:{slot}><a:srgbClr val="{}"/></a:{slot}>"#,
            color.to_hex()
        ));
    }
    xml.push_str("</a:clrScheme>");

    xml.push_str(&format!(
        concat!(
            r#"<a:fontScheme name="Third Plane">"#,
            r#"<a:majorFont><a:latin typeface="{}"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
            r#"<a:minorFont><a:latin typeface="{}"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
            "</a:fontScheme>"
        ),
        escape_xml(&theme.display.name),
        escape_xml(&theme.body.name)
    ));

    let fill = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;
    xml.push_str(r#"<a:fmtScheme name="Third Plane"><a:fillStyleLst>"#);
    xml.push_str(&fill.repeat(3));
    xml.push_str("</a:fillStyleLst><a:lnStyleLst>");
    for width in [6350, 12700, 19050] {
        xml.push_str(&format!(r#"<a:ln w="{}">{}</a:ln>"#, width, fill));
    }
    xml.push_str("</a:lnStyleLst><a:effectStyleLst>");
    xml.push_str(&"<a:effectStyle><a:effectLst/></a:effectStyle>".repeat(3));
    xml.push_str("</a:effectStyleLst><a:bgFillStyleLst>");
    xml.push_str(&fill.repeat(2));
    xml.push_str(&solid(&p.background.to_hex()));
    xml.push_str("</a:bgFillStyleLst></a:fmtScheme></a:themeElements></a:theme>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presentation_lists_slides_after_the_master() {
        let xml = presentation(2, (12_192_000, 6_858_000));
        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12192000" cy="6858000"/>"#));

        let rels = presentation_relationships(2);
        assert!(rels.contains(r#"Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide1.xml""#));
        assert!(rels.contains(r#"Id="rId6" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme""#));
    }

    #[test]
    fn core_properties_carry_no_dates() {
        let xml = core_properties(&DocumentMetadata::new("A & B", "Author"));
        assert!(xml.contains("<dc:title>A &amp; B</dc:title>"));
        assert!(xml.contains("<dc:creator>Author</dc:creator>"));
        assert!(!xml.contains("dcterms:created"));
    }

    #[test]
    fn theme_maps_palette_and_families() {
        let xml = theme(&Theme::montessori());
        assert!(xml.contains(r#"<a:dk2><a:srgbClr val="3F265B"/></a:dk2>"#));
        assert!(xml.contains(r#"<a:accent2><a:srgbClr val="C4A94D"/></a:accent2>"#));
        assert!(xml.contains(r#"<a:majorFont><a:latin typeface="Lora"/>"#));
        assert!(xml.contains(r#"<a:minorFont><a:latin typeface="Inter"/>"#));
        assert_eq!(xml.matches("<a:effectStyle>").count(), 3);
    }
}
