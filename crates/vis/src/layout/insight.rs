use serde::Deserialize;
use serde::Serialize;

use crate::id::Id;
use crate::layout::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Forecast,
    Anomaly,
    Recommendation,
    Trend,
}

impl InsightKind {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            InsightKind::Forecast => "forecast",
            InsightKind::Anomaly => "anomaly",
            InsightKind::Recommendation => "recommendation",
            InsightKind::Trend => "trend",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Impact::High => "high",
            Impact::Medium => "medium",
            Impact::Low => "low",
        }
    }
}

/// A generated observation about the data, e.g. a forecast or an anomaly.
#[derive(Debug, Serialize)]
pub struct Insight {
    id: Id,
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    /// How certain the observation is, in percent.
    pub confidence: u8,
    pub impact: Impact,
    pub date: String,
}

impl Insight {
    pub fn new(
        kind: InsightKind,
        title: impl Into<String>,
        description: impl Into<String>,
        confidence: u8,
        impact: Impact,
    ) -> Insight {
        Self {
            id: Id::next(),
            kind,
            title: title.into(),
            description: description.into(),
            confidence,
            impact,
            date: String::new(),
        }
    }

    pub fn dated(mut self, date: impl Into<String>) -> Insight {
        self.date = date.into();
        self
    }
}

impl Element for Insight {
    fn id(&self) -> &Id {
        &self.id
    }
}
