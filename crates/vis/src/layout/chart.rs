use dashchart_chart::LineChart;
use dashchart_chart::PieChart;
use dashchart_chart::format::ValueFormat;
use serde::Serialize;

use crate::id::Id;
use crate::layout::Element;

#[derive(Serialize, Debug)]
pub struct Chart {
    id: Id,
    pub spec: ChartSpec,
}

impl Chart {
    pub fn new(spec: ChartSpec) -> Chart {
        Self { id: Id::next(), spec }
    }

    pub fn line(chart: LineChart) -> Chart {
        Self::new(ChartSpec::Line(chart))
    }

    pub fn pie(chart: PieChart, value_format: ValueFormat) -> Chart {
        Self::new(ChartSpec::Pie {
            chart,
            value_format,
        })
    }

    pub fn title(&self) -> &str {
        match &self.spec {
            ChartSpec::Line(chart) => &chart.title,
            ChartSpec::Pie { chart, .. } => &chart.title,
        }
    }
}

impl Element for Chart {
    fn id(&self) -> &Id {
        &self.id
    }
}

#[derive(Serialize, Debug)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChartSpec {
    Line(LineChart),
    Pie {
        chart: PieChart,
        value_format: ValueFormat,
    },
}
