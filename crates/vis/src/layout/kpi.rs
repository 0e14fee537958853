use serde::Deserialize;
use serde::Serialize;

use crate::id::Id;
use crate::layout::Element;

/// The direction a metric moved in since the previous period.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

impl Trend {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            Trend::Up => "trend-up",
            Trend::Down => "trend-down",
            Trend::Stable => "trend-stable",
        }
    }

    pub(crate) fn glyph(&self) -> &'static str {
        match self {
            Trend::Up => "&#9650;",
            Trend::Down => "&#9660;",
            Trend::Stable => "&#8212;",
        }
    }
}

/// A headline metric card, e.g. "Total Revenue: $671K, +12.5%".
#[derive(Debug, Serialize)]
pub struct Kpi {
    id: Id,
    pub title: String,
    pub value: String,
    pub change: f64,
    pub trend: Trend,
}

impl Kpi {
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        change: f64,
        trend: Trend,
    ) -> Kpi {
        Self {
            id: Id::next(),
            title: title.into(),
            value: value.into(),
            change,
            trend,
        }
    }

    /// The change in percent with an explicit sign for growth, e.g. `+12.5%`.
    pub fn change_label(&self) -> String {
        let sign = if self.change > 0.0 { "+" } else { "" };
        format!("{sign}{}%", self.change)
    }
}

impl Element for Kpi {
    fn id(&self) -> &Id {
        &self.id
    }
}
