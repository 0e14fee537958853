//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt::Display;
use std::io::Error as IoError;

use tinytemplate::error::Error as TinyTemplateError;

use crate::render::error::RenderError;

/// The result type that uses [VisError] as the error type.
pub type Result<T> = std::result::Result<T, VisError>;

/// The error type for generating a dashboard report.
#[derive(Debug)]
pub enum VisError {
    /// A [std::io::Error] encountered while generating the report files.
    Io(IoError),

    /// A [tinytemplate::error::Error] encountered while parsing or rendering
    /// a template file.
    TemplateError(TinyTemplateError),

    /// A [RenderError] encountered while writing the page markup or the
    /// chart data.
    Render(RenderError),
}

impl Error for VisError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            VisError::Io(error) => Some(error),
            VisError::TemplateError(error) => Some(error),
            VisError::Render(error) => Some(error),
        }
    }
}

impl Display for VisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vis_error = "vis error:";

        match self {
            VisError::Io(error) => write!(f, "{vis_error} I/O error: {error}"),
            VisError::TemplateError(error) => write!(f, "{vis_error} template error: {error}"),
            VisError::Render(error) => write!(f, "{vis_error} render error: {error}"),
        }
    }
}

impl From<TinyTemplateError> for VisError {
    fn from(error: TinyTemplateError) -> Self {
        VisError::TemplateError(error)
    }
}

impl From<IoError> for VisError {
    fn from(error: IoError) -> Self {
        VisError::Io(error)
    }
}

impl From<RenderError> for VisError {
    fn from(error: RenderError) -> Self {
        VisError::Render(error)
    }
}
