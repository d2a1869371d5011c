//! Render-ready view of a table.
//!
//! Resolves everything a renderer needs per cell (background color,
//! tooltip, drag highlighting) so the renderer itself only draws.

use std::fmt::Write as _;

use serde::Serialize;

use crate::drag::DragState;
use crate::resolver::SortKey;
use crate::sources::{Lookups, SourceConfig};
use crate::types::{Coordinate, Table};

/// Sort arrow shown next to a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortIndicator {
    Ascending,
    Descending,
}

impl SortIndicator {
    #[must_use]
    pub fn arrow(self) -> char {
        match self {
            Self::Ascending => '▴',
            Self::Descending => '▾',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellView {
    pub label: String,
    pub coordinate: Coordinate,
    pub background: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    pub drag_source: bool,
    pub drag_over: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortIndicator>,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridView {
    pub height: usize,
    pub columns: Vec<ColumnView>,
}

impl GridView {
    /// Resolve the view of `table` under the current drag and sort.
    #[must_use]
    pub fn build(
        table: &Table,
        drag: DragState,
        sort: Option<&SortKey>,
        lookups: &Lookups,
        config: &SourceConfig,
    ) -> Self {
        let backgrounds: Vec<String> = (0..table.height())
            .map(|row| {
                table
                    .column(&config.color_column)
                    .and_then(|col| col.get(row))
                    .and_then(|label| lookups.color(label))
                    .unwrap_or(&config.default_color)
                    .to_string()
            })
            .collect();

        let columns = table
            .columns()
            .enumerate()
            .map(|(index, (name, column))| ColumnView {
                name: name.to_string(),
                sort: sort.filter(|key| key.column == name).map(|key| {
                    if key.ascending {
                        SortIndicator::Ascending
                    } else {
                        SortIndicator::Descending
                    }
                }),
                cells: column
                    .iter()
                    .zip(&backgrounds)
                    .enumerate()
                    .map(|(row, (label, background))| {
                        let coordinate = Coordinate::new(index, row);
                        CellView {
                            label: label.to_string(),
                            coordinate,
                            background: background.clone(),
                            tooltip: lookups.tooltip(name, label).map(str::to_string),
                            drag_source: drag.start() == Some(coordinate),
                            drag_over: drag.over() == Some(coordinate),
                        }
                    })
                    .collect(),
            })
            .collect();

        Self {
            height: table.height(),
            columns,
        }
    }

    /// Lay the grid out as aligned plain text, one line per row.
    #[must_use]
    pub fn render_text(&self) -> String {
        let headers: Vec<String> = self
            .columns
            .iter()
            .map(|col| match col.sort {
                Some(indicator) => format!("{} {}", col.name, indicator.arrow()),
                None => col.name.clone(),
            })
            .collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .zip(&headers)
            .map(|(col, header)| {
                col.cells
                    .iter()
                    .map(|cell| cell.label.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        push_line(&mut out, headers.iter().map(String::as_str), &widths);
        let rule: Vec<String> = widths.iter().map(|&width| "-".repeat(width)).collect();
        push_line(&mut out, rule.iter().map(String::as_str), &widths);
        for row in 0..self.height {
            push_line(
                &mut out,
                self.columns
                    .iter()
                    .map(|col| col.cells.get(row).map_or("", |cell| cell.label.as_str())),
                &widths,
            );
        }
        out
    }
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let mut line = String::new();
    for (i, (cell, &width)) in cells.zip(widths).enumerate() {
        if i > 0 {
            line.push_str(" | ");
        }
        let _ = write!(line, "{cell:<width$}");
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::sources::Lookup;

    fn lookups() -> Lookups {
        Lookups {
            colors: Some(Lookup::from_entries([("red", "#ff0000")])),
            details: vec![("months".into(), Lookup::from_entries([("jan", "January")]))],
        }
    }

    fn table() -> Table {
        Table::create([("colors", vec!["Red", "Blue"]), ("months", vec!["Jan", "Feb"])]).unwrap()
    }

    #[test]
    fn test_row_background_follows_color_column() {
        let view = GridView::build(&table(), DragState::Idle, None, &lookups(), &SourceConfig::default());
        let months = &view.columns[1];
        assert_eq!(months.cells[0].background, "#ff0000");
        assert_eq!(months.cells[1].background, "#000");
        assert_eq!(months.cells[0].tooltip.as_deref(), Some("January"));
        assert_eq!(months.cells[1].tooltip, None);
    }

    #[test]
    fn test_drag_flags_and_sort_indicator() {
        let drag = DragState::Hovering {
            start: Coordinate::new(1, 0),
            over: Coordinate::new(1, 1),
        };
        let key = SortKey::new("months", false);
        let view = GridView::build(&table(), drag, Some(&key), &lookups(), &SourceConfig::default());
        assert!(view.columns[1].cells[0].drag_source);
        assert!(view.columns[1].cells[1].drag_over);
        assert!(!view.columns[0].cells[0].drag_source);
        assert_eq!(view.columns[1].sort, Some(SortIndicator::Descending));
        assert_eq!(view.columns[0].sort, None);
    }

    #[test]
    fn test_render_text_aligns_columns() {
        let view = GridView::build(&table(), DragState::Idle, None, &lookups(), &SourceConfig::default());
        let text = view.render_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "colors | months");
        assert_eq!(lines[1], "------ | ------");
        assert_eq!(lines[2], "Red    | Jan");
        assert_eq!(lines[3], "Blue   | Feb");
    }
}
