use serde::Deserialize;
use serde::Serialize;

use crate::id::Id;
use crate::layout::Element;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

impl Align {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            Align::Left => "align-left",
            Align::Right => "align-right",
            Align::Center => "align-center",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Column {
    pub heading: String,
    #[serde(default)]
    pub align: Align,
}

impl Column {
    pub fn new(heading: impl Into<String>, align: Align) -> Column {
        Self {
            heading: heading.into(),
            align,
        }
    }
}

/// A titled table of preformatted cells, e.g. the most recent sales.
#[derive(Debug, Serialize)]
pub struct Table {
    id: Id,
    pub title: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(title: impl Into<String>, columns: Vec<Column>) -> Table {
        Self {
            id: Id::next(),
            title: title.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row. Missing cells are left empty and extra cells are dropped.
    pub fn row<I, S>(mut self, cells: I) -> Table
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells
            .into_iter()
            .take(self.columns.len())
            .map(Into::into)
            .collect();
        row.resize(self.columns.len(), String::new());

        self.rows.push(row);
        self
    }
}

impl Element for Table {
    fn id(&self) -> &Id {
        &self.id
    }
}
