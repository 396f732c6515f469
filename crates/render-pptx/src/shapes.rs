//! Slide part serialization: one `p:sld` per [`Slide`], shapes in paint order.

use crate::parts::SHAPE_TREE_HEADER;
use crate::xml::{NS_A, NS_P, NS_R, XML_DECLARATION, escape_xml, fmt_err};
use std::collections::BTreeMap;
use std::fmt::{self, Write};
use thirdplane_layout::slide::{LineShape, Picture, RectShape, TextBox, TextParagraph};
use thirdplane_layout::{Frame, Shape, Slide};
use thirdplane_render_core::RenderError;
use thirdplane_style::{TextAlign, TextStyle, Theme, VerticalAlign};
use thirdplane_types::{inches_to_emu, points_to_emu};

/// Hanging indent for bullet paragraphs, in EMU (0.25 in).
const BULLET_INDENT: i64 = 228_600;
const BULLET_CHAR: &str = "•";
/// `roundRect` adjust values are fractions of the shorter side, in 1/100000.
const MAX_CORNER_ADJUST: i64 = 50_000;

fn align_attr(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "l",
        TextAlign::Center => "ctr",
        TextAlign::Right => "r",
    }
}

fn anchor_attr(valign: VerticalAlign) -> &'static str {
    match valign {
        VerticalAlign::Top => "t",
        VerticalAlign::Middle => "ctr",
        VerticalAlign::Bottom => "b",
    }
}

fn corner_adjust(frame: Frame, radius: f64) -> i64 {
    let short = frame.w.min(frame.h);
    if short <= 0.0 {
        return 0;
    }
    ((radius / short * 100_000.0).round() as i64).clamp(0, MAX_CORNER_ADJUST)
}

struct SlideWriter<'a> {
    theme: &'a Theme,
    /// Image asset key to relationship id.
    media: &'a BTreeMap<String, String>,
    next_id: u32,
    out: String,
}

impl SlideWriter<'_> {
    fn shape_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn xfrm(&mut self, frame: Frame) -> fmt::Result {
        write!(
            self.out,
            r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
            inches_to_emu(frame.x),
            inches_to_emu(frame.y),
            inches_to_emu(frame.w),
            inches_to_emu(frame.h)
        )
    }

    fn shape(&mut self, shape: &Shape) -> fmt::Result {
        match shape {
            Shape::Rect(rect) => self.rect(rect),
            Shape::Line(line) => self.line(line),
            Shape::Text(text) => self.text_box(text),
            Shape::Picture(picture) => self.picture(picture),
        }
    }

    fn rect(&mut self, rect: &RectShape) -> fmt::Result {
        let id = self.shape_id();
        write!(
            self.out,
            r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="Rectangle {id}"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr>"#
        )?;
        self.xfrm(rect.frame)?;
        match rect.corner_radius {
            Some(radius) => write!(
                self.out,
                r#"<a:prstGeom prst="roundRect"><a:avLst><a:gd name="adj" fmla="val {}"/></a:avLst></a:prstGeom>"#,
                corner_adjust(rect.frame, radius)
            )?,
            None => self
                .out
                .push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#),
        }
        write!(
            self.out,
            r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:ln><a:noFill/></a:ln></p:spPr>"#,
            rect.fill.to_hex()
        )?;
        self.out.push_str(
            r#"<p:txBody><a:bodyPr rtlCol="0" anchor="ctr"/><a:lstStyle/><a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#,
        );
        Ok(())
    }

    fn line(&mut self, line: &LineShape) -> fmt::Result {
        let id = self.shape_id();
        write!(
            self.out,
            r#"<p:cxnSp><p:nvCxnSpPr><p:cNvPr id="{id}" name="Line {id}"/><p:cNvCxnSpPr/><p:nvPr/></p:nvCxnSpPr><p:spPr>"#
        )?;
        self.xfrm(line.frame)?;
        write!(
            self.out,
            r#"<a:prstGeom prst="line"><a:avLst/></a:prstGeom><a:ln w="{}"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln></p:spPr></p:cxnSp>"#,
            points_to_emu(line.width as f64),
            line.color.to_hex()
        )
    }

    fn run_properties(&mut self, tag: &str, style: &TextStyle) -> fmt::Result {
        let variant = style.font.variant;
        write!(
            self.out,
            r#"<a:{tag} lang="en-US" sz="{}" b="{}" i="{}" dirty="0"><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:latin typeface="{}"/></a:{tag}>"#,
            (style.size * 100.0).round() as i64,
            u8::from(variant.is_bold()),
            u8::from(variant.is_italic()),
            style.color.to_hex(),
            escape_xml(&self.theme.family(style.font.role).name)
        )
    }

    fn paragraph(&mut self, paragraph: &TextParagraph) -> fmt::Result {
        let style = &paragraph.style;
        self.out.push_str("<a:p>");
        if paragraph.bullet {
            write!(
                self.out,
                r#"<a:pPr marL="{}" indent="-{}" algn="{}">"#,
                BULLET_INDENT,
                BULLET_INDENT,
                align_attr(style.align)
            )?;
        } else {
            write!(self.out, r#"<a:pPr algn="{}">"#, align_attr(style.align))?;
        }
        write!(
            self.out,
            r#"<a:lnSpc><a:spcPct val="{}"/></a:lnSpc>"#,
            (style.line_height as f64 * 100_000.0).round() as i64
        )?;
        if paragraph.bullet {
            write!(
                self.out,
                r#"<a:buFont typeface="Arial"/><a:buChar char="{}"/>"#,
                BULLET_CHAR
            )?;
        } else {
            self.out.push_str("<a:buNone/>");
        }
        self.out.push_str("</a:pPr>");

        for (i, line) in paragraph.text.split('\n').enumerate() {
            if i > 0 {
                self.out.push_str("<a:br>");
                self.run_properties("rPr", style)?;
                self.out.push_str("</a:br>");
            }
            if line.is_empty() {
                continue;
            }
            self.out.push_str("<a:r>");
            self.run_properties("rPr", style)?;
            write!(self.out, "<a:t>{}</a:t></a:r>", escape_xml(line))?;
        }
        self.run_properties("endParaRPr", style)?;
        self.out.push_str("</a:p>");
        Ok(())
    }

    fn text_box(&mut self, text: &TextBox) -> fmt::Result {
        let id = self.shape_id();
        write!(
            self.out,
            r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="TextBox {id}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr>"#
        )?;
        self.xfrm(text.frame)?;
        self.out
            .push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr>"#);
        write!(
            self.out,
            r#"<p:txBody><a:bodyPr wrap="square" lIns="0" tIns="0" rIns="0" bIns="0" rtlCol="0" anchor="{}"><a:noAutofit/></a:bodyPr><a:lstStyle/>"#,
            anchor_attr(text.valign)
        )?;
        for paragraph in &text.paragraphs {
            self.paragraph(paragraph)?;
        }
        self.out.push_str("</p:txBody></p:sp>");
        Ok(())
    }

    fn picture(&mut self, picture: &Picture) -> fmt::Result {
        let Some(rel_id) = self.media.get(&picture.src) else {
            return Err(fmt::Error);
        };
        let rel_id = rel_id.clone();
        let id = self.shape_id();
        write!(
            self.out,
            r#"<p:pic><p:nvPicPr><p:cNvPr id="{id}" name="Picture {id}" descr="{}"/><p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr><p:nvPr/></p:nvPicPr>"#,
            escape_xml(&picture.src)
        )?;
        write!(
            self.out,
            r#"<p:blipFill><a:blip r:embed="{}"/><a:stretch><a:fillRect/></a:stretch></p:blipFill><p:spPr>"#,
            rel_id
        )?;
        self.xfrm(picture.frame)?;
        self.out
            .push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr></p:pic>"#);
        Ok(())
    }
}

/// Serializes one slide. `media` maps every image key used on the slide to
/// its relationship id in the slide's `.rels` part.
pub(crate) fn slide_xml(
    slide: &Slide,
    theme: &Theme,
    media: &BTreeMap<String, String>,
) -> Result<String, RenderError> {
    if let Some(missing) = slide
        .shapes
        .iter()
        .filter_map(|shape| match shape {
            Shape::Picture(p) => Some(&p.src),
            _ => None,
        })
        .find(|src| !media.contains_key(*src))
    {
        return Err(RenderError::Image {
            src: missing.clone(),
            message: "image has no media relationship".to_string(),
        });
    }

    let mut writer = SlideWriter {
        theme,
        media,
        next_id: 1,
        out: String::from(XML_DECLARATION),
    };
    write!(
        writer.out,
        r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}"><p:cSld>"#,
        NS_A, NS_R, NS_P
    )
    .map_err(fmt_err)?;
    write!(
        writer.out,
        r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
        slide.background.to_hex()
    )
    .map_err(fmt_err)?;
    writer.out.push_str("<p:spTree>");
    writer.out.push_str(SHAPE_TREE_HEADER);
    for shape in &slide.shapes {
        writer.shape(shape).map_err(fmt_err)?;
    }
    writer
        .out
        .push_str("</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>");
    Ok(writer.out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use thirdplane_style::{Medium, TextRole};
    use thirdplane_types::Color;

    fn slide(shapes: Vec<Shape>) -> Slide {
        Slide {
            background: Color::rgb(0xFA, 0xF7, 0xF2),
            shapes,
        }
    }

    fn render(shapes: Vec<Shape>) -> String {
        let mut media = BTreeMap::new();
        media.insert("logo".to_string(), "rId2".to_string());
        slide_xml(&slide(shapes), &Theme::montessori(), &media).unwrap()
    }

    #[test]
    fn writes_background_and_sequential_shape_ids() {
        let frame = Frame::new(1.0, 0.5, 2.0, 1.0);
        let xml = render(vec![
            Shape::Rect(RectShape {
                frame,
                fill: Color::rgb(0xF3, 0xEB, 0xFC),
                corner_radius: None,
            }),
            Shape::Picture(Picture {
                frame,
                src: "logo".to_string(),
            }),
        ]);
        assert!(xml.contains(r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="FAF7F2"/>"#));
        assert!(xml.contains(r#"<p:cNvPr id="2" name="Rectangle 2"/>"#));
        assert!(xml.contains(r#"<p:cNvPr id="3" name="Picture 3" descr="logo"/>"#));
        assert!(xml.contains(r#"<a:off x="914400" y="457200"/><a:ext cx="1828800" cy="914400"/>"#));
        assert!(xml.contains(r#"<a:blip r:embed="rId2"/>"#));
    }

    #[test]
    fn rounded_rect_adjust_is_relative_to_the_short_side() {
        assert_eq!(corner_adjust(Frame::new(0.0, 0.0, 4.0, 1.0), 0.05), 5_000);
        assert_eq!(corner_adjust(Frame::new(0.0, 0.0, 0.05, 1.0), 0.05), 50_000);
        assert_eq!(corner_adjust(Frame::new(0.0, 0.0, 0.0, 1.0), 0.05), 0);
    }

    #[test]
    fn text_runs_carry_size_weight_and_typeface() {
        let theme = Theme::montessori();
        let style = theme.text_style(TextRole::SectionHeader, Medium::Slides);
        let xml = render(vec![Shape::Text(
            TextBox::single(Frame::new(0.8, 0.4, 11.73, 0.5), "A & B\nC", style)
                .valign(VerticalAlign::Middle),
        )]);
        let size = format!(r#"sz="{}""#, (style.size * 100.0).round() as i64);
        assert!(xml.contains(&size));
        assert!(xml.contains(r#"<a:latin typeface="Lora"/>"#));
        assert!(xml.contains("<a:t>A &amp; B</a:t>"));
        assert!(xml.contains("<a:br>"));
        assert!(xml.contains(r#"anchor="ctr""#));
        assert!(xml.contains("<a:buNone/>"));
    }

    #[test]
    fn bullet_paragraphs_use_native_bullets() {
        let theme = Theme::montessori();
        let style = theme.text_style(TextRole::ListItem, Medium::Slides);
        let paragraphs = ["One", "Two"]
            .iter()
            .map(|t| TextParagraph {
                text: t.to_string(),
                style,
                bullet: true,
            })
            .collect();
        let xml = render(vec![Shape::Text(TextBox {
            frame: Frame::new(1.0, 1.0, 5.0, 1.0),
            paragraphs,
            valign: VerticalAlign::Top,
        })]);
        assert_eq!(xml.matches(r#"<a:buChar char="•"/>"#).count(), 2);
        assert!(xml.contains(r#"marL="228600" indent="-228600""#));
    }

    #[test]
    fn lines_use_point_widths() {
        let xml = render(vec![Shape::Line(LineShape {
            frame: Frame::new(0.8, 0.9, 11.73, 0.0),
            color: Color::rgb(0xC4, 0xA9, 0x4D),
            width: 1.5,
        })]);
        assert!(xml.contains(r#"<a:ln w="19050"><a:solidFill><a:srgbClr val="C4A94D"/>"#));
        assert!(xml.contains(r#"prst="line""#));
    }

    #[test]
    fn picture_without_relationship_is_an_error() {
        let result = slide_xml(
            &slide(vec![Shape::Picture(Picture {
                frame: Frame::new(0.0, 0.0, 1.0, 1.0),
                src: "missing".to_string(),
            })]),
            &Theme::montessori(),
            &BTreeMap::new(),
        );
        assert!(matches!(result, Err(RenderError::Image { .. })));
    }
}
