use std::error::Error;
use std::fmt::Display;
use std::io;
use std::path::PathBuf;

use dashchart_chart::error::ChartError;
use dashchart_vis::error::VisError;

#[derive(Debug)]
pub(crate) enum CliError {
    Path(String),
    ReadConfig { path: PathBuf, error: io::Error },
    ParseConfig { path: PathBuf, error: serde_json::Error },
    Chart { title: String, error: ChartError },
    Vis(VisError),
}

impl From<VisError> for CliError {
    fn from(error: VisError) -> Self {
        CliError::Vis(error)
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cli_error = "CLI error:";

        match self {
            CliError::Path(error) => write!(f, "{cli_error} {error}"),
            CliError::ReadConfig { path, error } => write!(
                f,
                "{cli_error} could not read the dashboard `{}`: {error}",
                path.display()
            ),
            CliError::ParseConfig { path, error } => write!(
                f,
                "{cli_error} could not parse the dashboard `{}`: {error}",
                path.display()
            ),
            CliError::Chart { title, error } => {
                write!(f, "{cli_error} the \"{title}\" chart cannot be drawn: {error}")
            }
            CliError::Vis(error) => write!(f, "{cli_error} {error}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CliError::Path(_) => None,
            CliError::ReadConfig { error, .. } => Some(error),
            CliError::ParseConfig { error, .. } => Some(error),
            CliError::Chart { error, .. } => Some(error),
            CliError::Vis(error) => Some(error),
        }
    }
}
