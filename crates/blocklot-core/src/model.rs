use serde::{Deserialize, Serialize};
use std::fmt;

/// Column headers printed on every page, in table order.
pub const COLUMN_NAMES: [&str; NUM_COLS] = [
    "BLOCK",
    "LOT",
    "ADDRESS",
    "ZIP CODE",
    "DEVELOPMENT",
    "MANAGED BY",
    "CD#",
    "FACILITY",
];

/// Number of cells in a well-formed row.
pub const NUM_COLS: usize = 8;

/// Name of the leading column in serialized output.
pub const SECTION_COLUMN: &str = "BOROUGH";

/// A positioned run of text as produced by the extraction layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

impl TextFragment {
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        TextFragment {
            x,
            y,
            text: text.into(),
        }
    }
}

/// Fragments sharing one vertical position, ordered left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub y: f64,
    pub fragments: Vec<TextFragment>,
}

impl Line {
    pub fn first_text(&self) -> Option<&str> {
        self.fragments.first().map(|f| f.text.as_str())
    }

    pub fn texts(&self) -> Vec<String> {
        self.fragments.iter().map(|f| f.text.clone()).collect()
    }
}

/// Lines of one page, top of the page first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<Line>,
}

/// A logical table cell. `text` grows while continuation lines are merged in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub x: f64,
    pub text: String,
}

impl From<TextFragment> for Cell {
    fn from(fragment: TextFragment) -> Self {
        Cell {
            x: fragment.x,
            text: fragment.text,
        }
    }
}

/// A complete table record with exactly [`NUM_COLS`] cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|c| c.text.as_str())
    }
}

/// Borough label printed in each page's header and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    #[serde(rename = "BRONX")]
    Bronx,
    #[serde(rename = "BROOKLYN")]
    Brooklyn,
    #[serde(rename = "MANHATTAN")]
    Manhattan,
    #[serde(rename = "QUEENS")]
    Queens,
    #[serde(rename = "STATEN ISLAND")]
    StatenIsland,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Bronx,
        Section::Brooklyn,
        Section::Manhattan,
        Section::Queens,
        Section::StatenIsland,
    ];

    /// The label exactly as it appears on the page.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Bronx => "BRONX",
            Section::Brooklyn => "BROOKLYN",
            Section::Manhattan => "MANHATTAN",
            Section::Queens => "QUEENS",
            Section::StatenIsland => "STATEN ISLAND",
        }
    }

    /// Exact, case-sensitive lookup. Whitespace is significant.
    pub fn from_label(s: &str) -> Option<Section> {
        Section::ALL
            .into_iter()
            .find(|section| section.label() == s)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Validated rows of a single page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    pub section: Section,
    pub page_number: u32,
    pub rows: Vec<Row>,
}

/// A row that started with a block number but never reached [`NUM_COLS`] cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedRow {
    pub page_number: u32,
    pub section: Section,
    pub cells: Vec<Cell>,
}

impl RejectedRow {
    /// Cell texts joined with single spaces.
    pub fn text(&self) -> String {
        join_cell_text(&self.cells)
    }
}

pub(crate) fn join_cell_text(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(|c| c.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Output of a whole run: pages in input order plus rows set aside for review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub pages: Vec<PageResult>,
    pub rejected: Vec<RejectedRow>,
}

impl RunResult {
    pub fn row_count(&self) -> usize {
        self.pages.iter().map(|p| p.rows.len()).sum()
    }

    /// `BOROUGH` followed by the column names.
    pub fn header_row() -> Vec<String> {
        std::iter::once(SECTION_COLUMN)
            .chain(COLUMN_NAMES)
            .map(String::from)
            .collect()
    }

    /// Every emitted row flattened to `[section, cell texts...]`, in page order.
    pub fn table_rows(&self) -> Vec<Vec<String>> {
        self.pages
            .iter()
            .flat_map(|page| {
                page.rows.iter().map(move |row| {
                    std::iter::once(page.section.label())
                        .chain(row.texts())
                        .map(String::from)
                        .collect::<Vec<String>>()
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_from_label_is_exact() {
        assert_eq!(Section::from_label("QUEENS"), Some(Section::Queens));
        assert_eq!(
            Section::from_label("STATEN ISLAND"),
            Some(Section::StatenIsland)
        );
        assert_eq!(Section::from_label("BROOKLYN "), None);
        assert_eq!(Section::from_label("queens"), None);
    }

    #[test]
    fn test_section_serializes_as_label() {
        let json = serde_json::to_string(&Section::StatenIsland).unwrap();
        assert_eq!(json, "\"STATEN ISLAND\"");
    }

    #[test]
    fn test_header_row() {
        let header = RunResult::header_row();
        assert_eq!(header.len(), NUM_COLS + 1);
        assert_eq!(header[0], "BOROUGH");
        assert_eq!(header[8], "FACILITY");
    }

    #[test]
    fn test_table_rows_prefix_section() {
        let cells = (0..NUM_COLS)
            .map(|i| Cell {
                x: i as f64,
                text: i.to_string(),
            })
            .collect();
        let run = RunResult {
            pages: vec![PageResult {
                section: Section::Bronx,
                page_number: 1,
                rows: vec![Row { cells }],
            }],
            rejected: vec![],
        };
        let rows = run.table_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "BRONX");
        assert_eq!(rows[0][1], "0");
        assert_eq!(rows[0].len(), NUM_COLS + 1);
    }
}
