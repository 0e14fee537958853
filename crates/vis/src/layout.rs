//! Describes the structure of a dashboard page.
//!
//! A [View] is the page itself. It holds an ordered list of elements:
//! [Section]s that group other elements under a heading, [Kpi] cards that
//! show a headline metric, [Insight] cards, [Table]s and [Chart]s.
//!
//! ```text
//! <view>
//!   <section>
//!     <kpi>...</kpi>
//!     <chart>...</chart>
//!   </section>
//!   <chart>...</chart>
//! </view>
//! ```

pub mod chart;
pub mod insight;
pub mod kpi;
pub mod section;
pub mod table;
pub mod view;

use serde::Serialize;

use crate::id::Id;

pub use crate::layout::chart::Chart;
pub use crate::layout::chart::ChartSpec;
pub use crate::layout::insight::Impact;
pub use crate::layout::insight::Insight;
pub use crate::layout::insight::InsightKind;
pub use crate::layout::kpi::Kpi;
pub use crate::layout::kpi::Trend;
pub use crate::layout::section::Section;
pub use crate::layout::table::Align;
pub use crate::layout::table::Column;
pub use crate::layout::table::Table;
pub use crate::layout::view::View;

pub trait Element {
    fn id(&self) -> &Id;
}

#[derive(Debug, Serialize)]
#[serde(tag = "element", rename_all = "lowercase")]
pub enum ElementKind {
    Section(Section),
    Kpi(Kpi),
    Insight(Insight),
    Table(Table),
    Chart(Chart),
}

impl Element for ElementKind {
    fn id(&self) -> &Id {
        match self {
            ElementKind::Section(s) => s.id(),
            ElementKind::Kpi(k) => k.id(),
            ElementKind::Insight(i) => i.id(),
            ElementKind::Table(t) => t.id(),
            ElementKind::Chart(c) => c.id(),
        }
    }
}

impl From<Section> for ElementKind {
    fn from(section: Section) -> Self {
        ElementKind::Section(section)
    }
}

impl From<Kpi> for ElementKind {
    fn from(kpi: Kpi) -> Self {
        ElementKind::Kpi(kpi)
    }
}

impl From<Insight> for ElementKind {
    fn from(insight: Insight) -> Self {
        ElementKind::Insight(insight)
    }
}

impl From<Table> for ElementKind {
    fn from(table: Table) -> Self {
        ElementKind::Table(table)
    }
}

impl From<Chart> for ElementKind {
    fn from(chart: Chart) -> Self {
        ElementKind::Chart(chart)
    }
}

/// Collects the charts of the elements, descending into sections.
pub(crate) fn charts<'a>(elements: &'a [ElementKind], charts: &mut Vec<&'a Chart>) {
    for element in elements {
        match element {
            ElementKind::Section(section) => self::charts(&section.elements, charts),
            ElementKind::Chart(chart) => charts.push(chart),
            ElementKind::Kpi(_) | ElementKind::Insight(_) | ElementKind::Table(_) => {}
        }
    }
}
