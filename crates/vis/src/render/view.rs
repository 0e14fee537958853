use crate::layout::Element;
use crate::layout::ElementKind;
use crate::layout::Insight;
use crate::layout::Kpi;
use crate::layout::Section;
use crate::layout::Table;
use crate::layout::View;
use crate::render::OutputStream;
use crate::render::Render;
use crate::render::error::RenderError;
use crate::render::escape;

impl Render for ElementKind {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        match self {
            ElementKind::Section(s) => s.render(output),
            ElementKind::Kpi(k) => k.render(output),
            ElementKind::Insight(i) => i.render(output),
            ElementKind::Table(t) => t.render(output),
            ElementKind::Chart(c) => c.render(output),
        }
    }
}

/// Renders the page body. The document head comes from the page template.
impl Render for View {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        output.write("<main>")?;
        output.write(&format!("<h1>{}</h1>", escape(&self.title)))?;

        for element in &self.elements {
            element.render(output)?;
        }

        output.write("</main>")
    }
}

impl Render for Section {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        let id = self.id().dom("section");
        output.write(&format!(r#"<section id="{id}">"#))?;

        if let Some(title) = &self.title {
            output.write(&format!("<h2>{}</h2>", escape(title)))?;
        }

        output.write(r#"<div class="grid">"#)?;

        for element in &self.elements {
            element.render(output)?;
        }

        output.write("</div></section>")
    }
}

impl Render for Kpi {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        let id = self.id().dom("kpi");

        output.write(&format!(
            r#"
                <div class="card kpi" id="{id}">
                    <div class="kpi-header">
                        <h4>{title}</h4>
                        <span class="trend {class}">{glyph} {change}</span>
                    </div>
                    <div class="kpi-value">{value}</div>
                    <div class="kpi-note">vs. previous period</div>
                </div>
            "#,
            title = escape(&self.title),
            class = self.trend.class(),
            glyph = self.trend.glyph(),
            change = self.change_label(),
            value = escape(&self.value),
        ))
    }
}

impl Render for Insight {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        let id = self.id().dom("insight");
        let kind = self.kind.name();
        let impact = self.impact.name();

        output.write(&format!(
            r#"
                <div class="card insight insight-{kind}" id="{id}">
                    <div class="insight-header">
                        <div>
                            <h4>{title}</h4>
                            <span class="insight-kind">{kind}</span>
                        </div>
                        <span class="impact impact-{impact}">{impact}</span>
                        <span class="confidence">{confidence}%</span>
                    </div>
                    <p>{description}</p>
                    <div class="insight-date">{date}</div>
                </div>
            "#,
            title = escape(&self.title),
            confidence = self.confidence,
            description = escape(&self.description),
            date = escape(&self.date),
        ))
    }
}

impl Render for Table {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        let id = self.id().dom("table");

        output.write(&format!(
            r#"<div class="card table" id="{id}"><h3>{title}</h3><table><thead><tr>"#,
            title = escape(&self.title),
        ))?;

        for column in &self.columns {
            output.write(&format!(
                r#"<th class="{}">{}</th>"#,
                column.align.class(),
                escape(&column.heading)
            ))?;
        }

        output.write("</tr></thead><tbody>")?;

        for row in &self.rows {
            output.write("<tr>")?;
            for (cell, column) in row.iter().zip(&self.columns) {
                output.write(&format!(
                    r#"<td class="{}">{}</td>"#,
                    column.align.class(),
                    escape(cell)
                ))?;
            }
            output.write("</tr>")?;
        }

        output.write("</tbody></table></div>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Align;
    use crate::layout::Column;
    use crate::layout::Impact;
    use crate::layout::InsightKind;
    use crate::layout::Trend;

    #[test]
    fn render_view_with_section_and_kpi() -> Result<(), RenderError> {
        let view = View::new("Sales & Procurement").add(
            Section::titled("Performance").add(Kpi::new("Active Leads", "243", -2.1, Trend::Down)),
        );

        let mut output = String::new();
        view.render(&mut output)?;

        assert!(output.starts_with("<main><h1>Sales &amp; Procurement</h1><section id=\"section"));
        assert!(output.contains("<h2>Performance</h2>"));
        assert!(output.contains(r#"<span class="trend trend-down">&#9660; -2.1%</span>"#));
        assert!(output.contains(r#"<div class="kpi-value">243</div>"#));
        assert!(output.ends_with("</div></section></main>"));

        Ok(())
    }

    #[test]
    fn untitled_section_has_no_heading() -> Result<(), RenderError> {
        let mut output = String::new();
        Section::new().render(&mut output)?;

        assert!(!output.contains("<h2>"));

        Ok(())
    }

    #[test]
    fn render_insight_card() -> Result<(), RenderError> {
        let insight = Insight::new(
            InsightKind::Anomaly,
            "Unusual Spending Pattern",
            "Hardware spend increased 35% this week",
            92,
            Impact::Medium,
        )
        .dated("2024-01-19");

        let mut output = String::new();
        insight.render(&mut output)?;

        assert!(output.contains(r#"<div class="card insight insight-anomaly""#));
        assert!(output.contains("<h4>Unusual Spending Pattern</h4>"));
        assert!(output.contains(r#"<span class="impact impact-medium">medium</span>"#));
        assert!(output.contains(r#"<span class="confidence">92%</span>"#));
        assert!(output.contains(r#"<div class="insight-date">2024-01-19</div>"#));

        Ok(())
    }

    #[test]
    fn render_table_rows() -> Result<(), RenderError> {
        let table = Table::new(
            "Recent Sales",
            vec![
                Column::new("Sales Person", Align::Left),
                Column::new("Revenue", Align::Right),
            ],
        )
        .row(["Sarah <Johnson>", "$98,000"])
        .row(["Mike Chen", "$156,000"]);

        let mut output = String::new();
        table.render(&mut output)?;

        assert!(output.contains("<h3>Recent Sales</h3>"));
        assert!(output.contains(r#"<th class="align-right">Revenue</th>"#));
        assert!(output.contains(r#"<td class="align-left">Sarah &lt;Johnson&gt;</td>"#));
        assert!(output.contains(r#"<td class="align-right">$156,000</td>"#));
        assert_eq!(2, output.matches("<tr><td").count());
        assert!(output.ends_with("</tbody></table></div>"));

        Ok(())
    }
}
