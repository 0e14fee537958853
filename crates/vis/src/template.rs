use std::path::Path;

use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::error::Result;
use crate::render::OutputStream;
use crate::render::output::OutputFile;

const INDEX_TEMPLATE_NAME: &str = "index";
const INDEX_TEMPLATE: &str = include_str!("./template/index.html.tt");
const STYLE: &str = include_str!("./template/style.css");

pub(crate) struct TemplateEngine<'a> {
    index_file_path: &'a Path,
}

impl<'a> TemplateEngine<'a> {
    pub fn new(index_file_path: &'a Path) -> TemplateEngine<'a> {
        Self { index_file_path }
    }

    pub fn render(&self, context: &Context) -> Result<()> {
        let text = render_index(context)?;

        let mut file = OutputFile::create(self.index_file_path)?;
        file.write(&text)?;
        file.finish()?;

        Ok(())
    }
}

fn render_index(context: &Context) -> Result<String> {
    let mut template = TinyTemplate::new();
    template.add_template(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;

    Ok(template.render(INDEX_TEMPLATE_NAME, context)?)
}

#[derive(Serialize)]
pub(crate) struct Context<'a> {
    title: &'a str,
    style: &'static str,
    body: String,
    chart_count: usize,
    generated_at: String,
}

impl<'a> Context<'a> {
    pub fn new(
        title: &'a str,
        body: String,
        chart_count: usize,
        generated_at: String,
    ) -> Context<'a> {
        Self {
            title,
            style: STYLE,
            body,
            chart_count,
            generated_at,
        }
    }
}
