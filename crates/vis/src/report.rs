use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use chrono::SecondsFormat;
use chrono::Utc;
use tracing::debug;
use tracing::info;

use crate::error::Result;
use crate::layout::View;
use crate::render::Render;
use crate::render::error::RenderError;
use crate::template::Context;
use crate::template::TemplateEngine;

/// The report directory is structured as follows:
///
/// ./vis/index.html
/// ./vis/data/charts.json
///
/// The __index__ file is a self-contained page with the charts drawn as
/// inline SVG. The __data__ directory holds the computed chart geometry,
/// for tools that draw the charts themselves.
#[derive(Debug)]
pub struct VisLayout {
    index_file_path: PathBuf,
    data_path: PathBuf,
}

impl VisLayout {
    const MAIN_DIR_NAME: &str = "vis";
    const DATA_DIR_NAME: &str = "data";
    const INDEX_FILE_NAME: &str = "index.html";
    const CHARTS_FILE_NAME: &str = "charts.json";

    /// Creates the report directory under `path`. Fails if it already exists.
    pub fn init(path: &Path) -> Result<VisLayout> {
        let root_path = path.join(Self::MAIN_DIR_NAME);
        let index_file_path = root_path.join(Self::INDEX_FILE_NAME);
        let data_path = root_path.join(Self::DATA_DIR_NAME);

        fs::create_dir(&root_path)?;
        fs::create_dir(&data_path)?;

        debug!(path = %root_path.display(), "created the report directory");

        Ok(Self {
            index_file_path,
            data_path,
        })
    }

    pub fn index_file_path(&self) -> &Path {
        &self.index_file_path
    }

    pub fn generate_report(&self, view: &View) -> Result<()> {
        let charts = view.charts();

        let mut body = String::new();
        view.render(&mut body)?;

        let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let context = Context::new(&view.title, body, charts.len(), generated_at);

        let template = TemplateEngine::new(&self.index_file_path);
        template.render(&context)?;

        let charts_file_path = self.data_path.join(Self::CHARTS_FILE_NAME);
        write_json(&charts_file_path, &charts)?;

        info!(
            title = %view.title,
            charts = charts.len(),
            path = %self.index_file_path.display(),
            "generated the report"
        );

        Ok(())
    }
}

fn write_json<T>(path: &Path, value: &T) -> std::result::Result<(), RenderError>
where
    T: serde::Serialize + ?Sized,
{
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;

    Ok(())
}
