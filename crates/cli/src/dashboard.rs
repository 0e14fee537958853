//! The JSON description of a dashboard.
//!
//! ```json
//! {
//!   "title": "Sales",
//!   "sections": [
//!     {
//!       "title": "Performance",
//!       "kpis": [{ "title": "Total Revenue", "value": "$671K", "change": 12.5, "trend": "up" }],
//!       "insights": [{ "kind": "trend", "title": "...", "description": "...", "confidence": 85, "impact": "high" }],
//!       "charts": [
//!         { "kind": "line", "title": "Revenue Trend", "data": [{ "label": "Jan", "value": 671000 }, ...] },
//!         { "kind": "pie", "title": "Sales by Region", "value_prefix": "$", "data": [...] }
//!       ],
//!       "tables": [{ "title": "Recent Sales", "columns": [{ "heading": "Date" }], "rows": [["2024-01-15"]] }]
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use dashchart_chart::Color;
use dashchart_chart::DataPoint;
use dashchart_chart::LineSeries;
use dashchart_chart::RadialShare;
use dashchart_chart::format::ValueFormat;
use dashchart_vis::layout::Chart;
use dashchart_vis::layout::Column;
use dashchart_vis::layout::Impact;
use dashchart_vis::layout::Insight;
use dashchart_vis::layout::InsightKind;
use dashchart_vis::layout::Kpi;
use dashchart_vis::layout::Section;
use dashchart_vis::layout::Table;
use dashchart_vis::layout::Trend;
use dashchart_vis::layout::View;
use serde::Deserialize;
use tracing::debug;

use crate::error::CliError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct DashboardConfig {
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) sections: Vec<SectionConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SectionConfig {
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) kpis: Vec<KpiConfig>,
    #[serde(default)]
    pub(crate) insights: Vec<InsightConfig>,
    #[serde(default)]
    pub(crate) charts: Vec<ChartConfig>,
    #[serde(default)]
    pub(crate) tables: Vec<TableConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct KpiConfig {
    pub(crate) title: String,
    pub(crate) value: String,
    #[serde(default)]
    pub(crate) change: f64,
    #[serde(default)]
    pub(crate) trend: Trend,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct InsightConfig {
    pub(crate) kind: InsightKind,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) confidence: u8,
    pub(crate) impact: Impact,
    #[serde(default)]
    pub(crate) date: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct TableConfig {
    pub(crate) title: String,
    pub(crate) columns: Vec<Column>,
    #[serde(default)]
    pub(crate) rows: Vec<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", deny_unknown_fields)]
pub(crate) enum ChartConfig {
    Line {
        title: String,
        #[serde(default)]
        color: Option<Color>,
        data: Vec<DataPoint>,
    },
    Pie {
        title: String,
        #[serde(default)]
        colors: Vec<Color>,
        #[serde(default)]
        value_prefix: String,
        #[serde(default)]
        value_suffix: String,
        data: Vec<DataPoint>,
    },
}

impl DashboardConfig {
    pub(crate) fn load(path: &Path) -> Result<DashboardConfig, CliError> {
        let text = fs::read_to_string(path).map_err(|error| CliError::ReadConfig {
            path: path.to_path_buf(),
            error,
        })?;

        serde_json::from_str(&text).map_err(|error| CliError::ParseConfig {
            path: path.to_path_buf(),
            error,
        })
    }

    pub(crate) fn into_view(self) -> Result<View, CliError> {
        let mut view = View::new(self.title);

        for section in self.sections {
            view = view.add(section.into_section()?);
        }

        Ok(view)
    }
}

impl SectionConfig {
    fn into_section(self) -> Result<Section, CliError> {
        let mut section = match self.title {
            Some(title) => Section::titled(title),
            None => Section::new(),
        };

        for kpi in self.kpis {
            section = section.add(Kpi::new(kpi.title, kpi.value, kpi.change, kpi.trend));
        }

        for insight in self.insights {
            section = section.add(
                Insight::new(
                    insight.kind,
                    insight.title,
                    insight.description,
                    insight.confidence,
                    insight.impact,
                )
                .dated(insight.date),
            );
        }

        for chart in self.charts {
            section = section.add(chart.into_chart()?);
        }

        for table in self.tables {
            let table = table
                .rows
                .into_iter()
                .fold(Table::new(table.title, table.columns), Table::row);
            section = section.add(table);
        }

        Ok(section)
    }
}

impl ChartConfig {
    fn into_chart(self) -> Result<Chart, CliError> {
        match self {
            ChartConfig::Line { title, color, data } => {
                debug!(%title, points = data.len(), "computing line chart");

                let mut series = LineSeries::new(title.as_str());
                if let Some(color) = color {
                    series = series.color(color);
                }

                series
                    .render(&data)
                    .map(Chart::line)
                    .map_err(|error| CliError::Chart { title, error })
            }
            ChartConfig::Pie {
                title,
                colors,
                value_prefix,
                value_suffix,
                data,
            } => {
                debug!(%title, categories = data.len(), "computing pie chart");

                let value_format = ValueFormat {
                    prefix: value_prefix,
                    suffix: value_suffix,
                };

                RadialShare::new(title.as_str())
                    .palette(colors)
                    .render(&data)
                    .map(|chart| Chart::pie(chart, value_format))
                    .map_err(|error| CliError::Chart { title, error })
            }
        }
    }
}
