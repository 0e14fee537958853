use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use crate::render::OutputStream;
use crate::render::error::RenderError;

/// A buffered file that rendered markup is written to.
pub struct OutputFile {
    file: BufWriter<File>,
}

impl OutputFile {
    pub fn create(path: &Path) -> Result<OutputFile, RenderError> {
        let file = File::create(path)?;

        Ok(Self {
            file: BufWriter::new(file),
        })
    }

    pub fn finish(mut self) -> Result<(), RenderError> {
        self.file.flush()?;
        Ok(())
    }
}

impl OutputStream for OutputFile {
    fn write(&mut self, data: &str) -> Result<(), RenderError> {
        self.file.write_all(data.as_bytes())?;
        Ok(())
    }
}
