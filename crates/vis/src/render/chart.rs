use dashchart_chart::LineChart;
use dashchart_chart::PieChart;
use dashchart_chart::format::ValueFormat;
use dashchart_chart::geometry::Num;
use dashchart_chart::line;
use dashchart_chart::pie;
use tracing::trace;

use crate::id::Id;
use crate::layout::Chart;
use crate::layout::ChartSpec;
use crate::layout::Element;
use crate::render::OutputStream;
use crate::render::Render;
use crate::render::error::RenderError;
use crate::render::escape;

const GRID_COLOR: &str = "#e5e7eb";
const WEDGE_STROKE: &str = "white";

impl Render for Chart {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        trace!(id = %self.id(), title = self.title(), "rendering chart");

        match &self.spec {
            ChartSpec::Line(chart) => render_line(self.id(), chart, output),
            ChartSpec::Pie {
                chart,
                value_format,
            } => render_pie(self.id(), chart, value_format, output),
        }
    }
}

fn render_line<R>(id: &Id, chart: &LineChart, output: &mut R) -> Result<(), RenderError>
where
    R: OutputStream,
{
    let dom_id = id.dom("chart");
    let gradient_id = id.dom("gradient");
    let color = escape(chart.color.as_str());

    output.write(&format!(
        r#"
            <div class="card chart chart-line" id="{dom_id}">
                <h3>{title}</h3>
                <svg width="{width}" height="{height}" viewBox="0 0 {width} {height}">
                    <defs>
                        <linearGradient id="{gradient_id}" x1="0%" y1="0%" x2="0%" y2="100%">
                            <stop offset="0%" stop-color="{color}" stop-opacity="0.2" />
                            <stop offset="100%" stop-color="{color}" stop-opacity="0" />
                        </linearGradient>
                    </defs>
        "#,
        title = escape(&chart.title),
        width = Num(line::WIDTH),
        height = Num(line::HEIGHT),
    ))?;

    output.write(&format!(r#"<g stroke="{GRID_COLOR}" stroke-width="1">"#))?;
    for grid_line in &chart.grid {
        output.write(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" />"#,
            Num(grid_line.from.x),
            Num(grid_line.from.y),
            Num(grid_line.to.x),
            Num(grid_line.to.y),
        ))?;
    }
    output.write("</g>")?;

    output.write(&format!(
        r#"<path d="{area}" fill="url(#{gradient_id})" />"#,
        area = chart.area
    ))?;
    output.write(&format!(
        r#"<path d="{line}" fill="none" stroke="{color}" stroke-width="3" stroke-linecap="round" />"#,
        line = chart.line
    ))?;

    for marker in &chart.markers {
        output.write(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{color}" />"#,
            Num(marker.center.x),
            Num(marker.center.y),
            Num(marker.radius),
        ))?;
    }

    output.write(r#"</svg><div class="axis-labels">"#)?;
    for label in &chart.labels {
        output.write(&format!("<span>{}</span>", escape(label)))?;
    }

    output.write("</div></div>")
}

fn render_pie<R>(
    id: &Id,
    chart: &PieChart,
    value_format: &ValueFormat,
    output: &mut R,
) -> Result<(), RenderError>
where
    R: OutputStream,
{
    let dom_id = id.dom("chart");

    output.write(&format!(
        r#"
            <div class="card chart chart-pie" id="{dom_id}">
                <h3>{title}</h3>
                <div class="pie">
                    <svg width="{size}" height="{size}" viewBox="0 0 {size} {size}">
        "#,
        title = escape(&chart.title),
        size = Num(pie::SIZE),
    ))?;

    for wedge in &chart.wedges {
        output.write(&format!(
            r#"<path d="{path}" fill="{color}" stroke="{WEDGE_STROKE}" stroke-width="2" />"#,
            path = wedge.path,
            color = escape(wedge.color.as_str()),
        ))?;
    }

    output.write(r#"</svg><ul class="legend">"#)?;

    for entry in chart.legend() {
        output.write(&format!(
            r#"
                <li>
                    <span class="swatch" style="background-color: {color}"></span>
                    <span class="label">{label}</span>
                    <span class="share">{percentage} ({value})</span>
                </li>
            "#,
            color = escape(entry.color.as_str()),
            label = escape(&entry.label),
            percentage = entry.percentage_label(),
            value = escape(&value_format.format(entry.value)),
        ))?;
    }

    output.write("</ul></div></div>")
}
