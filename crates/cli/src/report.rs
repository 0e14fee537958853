use std::path::Path;

use dashchart_vis::layout::View;
use dashchart_vis::report::VisLayout;
use tracing::info;

use crate::cli::DemoArgs;
use crate::cli::PathExt;
use crate::cli::RenderArgs;
use crate::dashboard::DashboardConfig;
use crate::demo;
use crate::error::CliError;

pub(crate) fn render(args: RenderArgs) -> Result<(), CliError> {
    let output_path = args.output_path.or_current_dir()?;

    info!(
        input = %args.input.display(),
        output = %output_path.display(),
        "rendering dashboard"
    );

    let view = DashboardConfig::load(&args.input)?.into_view()?;
    write_report(&view, &output_path)
}

pub(crate) fn demo(args: DemoArgs) -> Result<(), CliError> {
    let output_path = args.output_path.or_current_dir()?;

    info!(
        dashboard = ?args.dashboard,
        output = %output_path.display(),
        "rendering sample dashboard"
    );

    let view = demo::dashboard(args.dashboard).into_view()?;
    write_report(&view, &output_path)
}

fn write_report(view: &View, output_path: &Path) -> Result<(), CliError> {
    let vis = VisLayout::init(output_path)?;
    vis.generate_report(view)?;

    println!("{}", vis.index_file_path().display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::cli::Dashboard;

    #[test]
    fn render_writes_report_from_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("dashboard.json");
        fs::write(
            &input,
            r#"{
                "title": "Quarterly",
                "sections": [{
                    "charts": [{
                        "kind": "line",
                        "title": "Flat Revenue",
                        "data": [{ "label": "Q1", "value": 5 }, { "label": "Q2", "value": 5 }]
                    }]
                }]
            }"#,
        )?;

        render(RenderArgs {
            input,
            output_path: Some(dir.path().to_path_buf()),
        })?;

        let index = fs::read_to_string(dir.path().join("vis").join("index.html"))?;
        assert!(index.contains("<h1>Quarterly</h1>"));
        assert!(index.contains("M 0 110 L 400 110"));
        assert!(!index.contains("NaN"));

        Ok(())
    }

    #[test]
    fn demo_refuses_to_overwrite_report() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let args = || DemoArgs {
            dashboard: Dashboard::Procurement,
            output_path: Some(dir.path().to_path_buf()),
        };

        demo(args())?;
        let second = demo(args());

        assert!(matches!(second, Err(CliError::Vis(_))));

        Ok(())
    }
}
