//! Bordered tables, the building block of quotes, grids and cards.
//!
//! Each table row becomes one band, so a row never splits across pages.
//! Rules get their own space: a horizontal rule sits above every row and
//! below the last one, vertical rules sit between and around the columns.

use super::FlowContext;
use crate::block::Band;
use crate::elements::PositionedElement;
use thirdplane_style::{ColumnWidth, Margins, TextStyle};
use thirdplane_types::{Color, Rect};

#[derive(Debug, Clone, PartialEq)]
pub struct CellText {
    pub text: String,
    pub style: TextStyle,
    pub margin: Margins,
}

impl CellText {
    pub fn new(text: impl Into<String>, style: TextStyle, margin: Margins) -> Self {
        Self {
            text: text.into(),
            style,
            margin,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableCell {
    pub fill: Option<Color>,
    pub items: Vec<CellText>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub width: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalRules {
    None,
    All(Rule),
    /// A single bar along the left edge.
    LeftEdge(Rule),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRules {
    pub horizontal: Option<Rule>,
    pub vertical: VerticalRules,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub widths: Vec<ColumnWidth>,
    pub rows: Vec<Vec<TableCell>>,
    pub rules: TableRules,
}

impl FlowContext<'_> {
    /// Column x positions and widths after reserving space for vertical rules.
    fn columns(&self, spec: &TableSpec) -> Vec<(f32, f32)> {
        let count = spec.widths.len();
        let (reserved, before_each, first_offset) = match spec.rules.vertical {
            VerticalRules::None => (0.0, 0.0, 0.0),
            VerticalRules::All(rule) => (rule.width * (count as f32 + 1.0), rule.width, 0.0),
            VerticalRules::LeftEdge(rule) => (rule.width, 0.0, rule.width),
        };
        let widths = ColumnWidth::resolve(&spec.widths, (self.width - reserved).max(0.0));

        let mut x = first_offset;
        widths
            .into_iter()
            .map(|w| {
                x += before_each;
                let column = (x, w);
                x += w;
                column
            })
            .collect()
    }

    pub fn table_bands(&self, spec: &TableSpec) -> Vec<Band> {
        let columns = self.columns(spec);
        let total_width = self.width;
        let h_rule = spec.rules.horizontal;
        let h_width = h_rule.map(|r| r.width).unwrap_or(0.0);
        let last = spec.rows.len().saturating_sub(1);

        spec.rows
            .iter()
            .enumerate()
            .map(|(row_index, row)| {
                let stacks: Vec<(f32, Vec<PositionedElement>)> = columns
                    .iter()
                    .zip(row.iter())
                    .map(|((_, width), cell)| self.stack(&cell.items, *width))
                    .collect();
                let content_height = stacks.iter().map(|(h, _)| *h).fold(0.0, f32::max);
                let bottom_rule = if row_index == last { h_width } else { 0.0 };
                let band_height = h_width + content_height + bottom_rule;

                let mut elements = Vec::new();
                for (((x, width), cell), (_, stack)) in
                    columns.iter().zip(row.iter()).zip(stacks.into_iter())
                {
                    if let Some(fill) = cell.fill {
                        elements.push(PositionedElement::rect(
                            Rect::new(*x, h_width, *width, content_height),
                            fill,
                        ));
                    }
                    elements.extend(stack.into_iter().map(|e| e.translate(*x, h_width)));
                }

                if let Some(rule) = h_rule {
                    elements.push(PositionedElement::hline(
                        0.0,
                        rule.width / 2.0,
                        total_width,
                        rule.width,
                        rule.color,
                    ));
                    if row_index == last {
                        elements.push(PositionedElement::hline(
                            0.0,
                            band_height - rule.width / 2.0,
                            total_width,
                            rule.width,
                            rule.color,
                        ));
                    }
                }

                match spec.rules.vertical {
                    VerticalRules::None => {}
                    VerticalRules::LeftEdge(rule) => elements.push(PositionedElement::vline(
                        rule.width / 2.0,
                        0.0,
                        band_height,
                        rule.width,
                        rule.color,
                    )),
                    VerticalRules::All(rule) => {
                        let mut edges: Vec<f32> = columns.iter().map(|(x, _)| *x).collect();
                        if let Some((x, w)) = columns.last() {
                            edges.push(x + w + rule.width);
                        }
                        for edge in edges {
                            elements.push(PositionedElement::vline(
                                edge - rule.width / 2.0,
                                0.0,
                                band_height,
                                rule.width,
                                rule.color,
                            ));
                        }
                    }
                }

                Band::new(band_height, elements)
            })
            .collect()
    }
}
