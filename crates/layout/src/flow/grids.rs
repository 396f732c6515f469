use super::FlowContext;
use super::table::{CellText, Rule, TableCell, TableRules, TableSpec, VerticalRules};
use crate::block::{Block, BlockKind};
use thirdplane_idf::{CardGrid, ComparisonGrid, LabeledTable, RowLayout};
use thirdplane_style::{ColumnWidth, Margins, TextAlign, TextRole};

const HAIRLINE: f32 = 0.5;

impl FlowContext<'_> {
    fn hairline(&self) -> Rule {
        Rule {
            width: HAIRLINE,
            color: self.theme.palette.border,
        }
    }

    /// A tinted heading row followed by a body row for every grid row.
    /// Short rows are padded with empty cells.
    pub fn comparison_grid(&self, grid: &ComparisonGrid) -> Block {
        let palette = &self.theme.palette;
        let heading = self.style(TextRole::GridHeading).aligned(grid.heading_align);
        let body = self.style(TextRole::CellBody);
        let columns = grid.columns();

        let mut rows = Vec::with_capacity(grid.rows() * 2);
        for chunk in grid.row_chunks() {
            let mut headings: Vec<TableCell> = chunk
                .iter()
                .map(|cell| TableCell {
                    fill: Some(palette.highlight),
                    items: vec![CellText::new(
                        cell.heading.as_str(),
                        heading,
                        Margins::ltrb(8.0, 6.0, 8.0, 6.0),
                    )],
                })
                .collect();
            let mut bodies: Vec<TableCell> = chunk
                .iter()
                .map(|cell| TableCell {
                    fill: None,
                    items: vec![CellText::new(
                        cell.body.as_str(),
                        body,
                        Margins::ltrb(8.0, 4.0, 8.0, 6.0),
                    )],
                })
                .collect();
            headings.resize(
                columns,
                TableCell {
                    fill: Some(palette.highlight),
                    items: Vec::new(),
                },
            );
            bodies.resize(columns, TableCell::default());
            rows.push(headings);
            rows.push(bodies);
        }

        let spec = TableSpec {
            widths: grid.column_widths(),
            rows,
            rules: TableRules {
                horizontal: Some(self.hairline()),
                vertical: VerticalRules::All(self.hairline()),
            },
        };
        Block::new(BlockKind::Grid, self.table_bands(&spec)).spacing(8.0, 12.0)
    }

    pub fn labeled_table(&self, table: &LabeledTable) -> Block {
        let tint = self.theme.palette.highlight;
        let body = self.style(TextRole::CellBody);

        let spec = match table.layout {
            RowLayout::Beside { label_percent } => {
                let label = self.style(TextRole::RowLabel);
                let margin = Margins::ltrb(8.0, 6.0, 8.0, 6.0);
                TableSpec {
                    widths: vec![ColumnWidth::Percent(label_percent), ColumnWidth::Star],
                    rows: table
                        .rows
                        .iter()
                        .enumerate()
                        .map(|(i, row)| {
                            vec![
                                TableCell {
                                    fill: table.tint.is_tinted(i).then_some(tint),
                                    items: vec![CellText::new(row.label.as_str(), label, margin)],
                                },
                                TableCell {
                                    fill: None,
                                    items: vec![CellText::new(row.body.as_str(), body, margin)],
                                },
                            ]
                        })
                        .collect(),
                    rules: TableRules {
                        horizontal: Some(self.hairline()),
                        vertical: VerticalRules::All(self.hairline()),
                    },
                }
            }
            RowLayout::Stacked => {
                let title = self.style(TextRole::CardTitle);
                TableSpec {
                    widths: vec![ColumnWidth::Star],
                    rows: table
                        .rows
                        .iter()
                        .enumerate()
                        .map(|(i, row)| {
                            vec![TableCell {
                                fill: table.tint.is_tinted(i).then_some(tint),
                                items: vec![
                                    CellText::new(
                                        row.label.as_str(),
                                        title,
                                        Margins::ltrb(10.0, 8.0, 10.0, 2.0),
                                    ),
                                    CellText::new(
                                        row.body.as_str(),
                                        body,
                                        Margins::ltrb(10.0, 2.0, 10.0, 10.0),
                                    ),
                                ],
                            }]
                        })
                        .collect(),
                    rules: TableRules {
                        horizontal: Some(self.hairline()),
                        vertical: VerticalRules::None,
                    },
                }
            }
        };
        Block::new(BlockKind::Table, self.table_bands(&spec)).spacing(4.0, 12.0)
    }

    /// Tinted cards separated by background-colored gutters.
    pub fn card_grid(&self, grid: &CardGrid) -> Block {
        let palette = &self.theme.palette;
        let columns = grid.columns.max(1);
        let centered = grid.align == TextAlign::Center;

        let (title_role, title_margin, body_margin, spacing) = if centered {
            (
                TextRole::FeatureTitle,
                Margins::ltrb(8.0, 10.0, 8.0, 4.0),
                Margins::ltrb(8.0, 0.0, 8.0, 8.0),
                (6.0, 10.0),
            )
        } else {
            (
                TextRole::CardTitle,
                Margins::ltrb(8.0, 6.0, 8.0, 4.0),
                Margins::ltrb(8.0, 0.0, 8.0, 8.0),
                (4.0, 8.0),
            )
        };
        let title = self.style(title_role).aligned(grid.align);
        let body = self.style(TextRole::CellBody).aligned(grid.align);

        let rows = grid
            .cards
            .chunks(columns)
            .map(|chunk| {
                let mut cells: Vec<TableCell> = chunk
                    .iter()
                    .map(|card| TableCell {
                        fill: Some(palette.highlight),
                        items: vec![
                            CellText::new(card.title.as_str(), title, title_margin),
                            CellText::new(card.body.as_str(), body, body_margin),
                        ],
                    })
                    .collect();
                cells.resize(columns, TableCell::default());
                cells
            })
            .collect();

        let gutter = Rule {
            width: grid.gap,
            color: palette.background,
        };
        let spec = TableSpec {
            widths: vec![ColumnWidth::Star; columns],
            rows,
            rules: TableRules {
                horizontal: Some(gutter),
                vertical: VerticalRules::All(gutter),
            },
        };
        Block::new(BlockKind::Cards, self.table_bands(&spec)).spacing(spacing.0, spacing.1)
    }
}
