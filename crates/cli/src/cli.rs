use std::env;
use std::path::PathBuf;

use clap::ArgAction;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

use crate::error::CliError;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Increase the log verbosity. Repeat for more detail.
    /// The `RUST_LOG` environment variable takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub(crate) verbose: u8,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render a dashboard described in a JSON file into an HTML report.
    Render(RenderArgs),
    /// Render one of the built-in sample dashboards into an HTML report.
    Demo(DemoArgs),
}

#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Specify the JSON file that describes the dashboard.
    #[arg(short, long, value_parser(parse_file))]
    pub(crate) input: PathBuf,

    /// Specify the path where the generated report will be created.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_dir))]
    pub(crate) output_path: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct DemoArgs {
    /// Specify which sample dashboard to render.
    #[arg(short, long, value_enum, default_value_t = Dashboard::Overview)]
    pub(crate) dashboard: Dashboard,

    /// Specify the path where the generated report will be created.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_dir))]
    pub(crate) output_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Dashboard {
    Overview,
    Sales,
    Procurement,
}

fn parse_dir(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_dir() {
        return Err(format!(
            "The `{}` path must point to a directory.",
            path.display()
        ));
    }

    Ok(path)
}

fn parse_file(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.is_file() {
        return Err(format!(
            "The `{}` path must point to an existing file.",
            path.display()
        ));
    }

    Ok(path)
}

pub(crate) trait PathExt {
    fn or_current_dir(self) -> Result<PathBuf, CliError>;
}

impl PathExt for Option<PathBuf> {
    fn or_current_dir(self) -> Result<PathBuf, CliError> {
        if let Some(path) = self {
            Ok(path)
        } else {
            env::current_dir().map_err(|e| CliError::Path(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_demo_with_verbosity() {
        let cli = match Cli::try_parse_from(["dashchart", "-vv", "demo", "-d", "procurement"]) {
            Ok(cli) => cli,
            Err(error) => panic!("arguments should parse: {error}"),
        };

        assert_eq!(2, cli.verbose);
        match cli.command {
            Commands::Demo(args) => {
                assert_eq!(Dashboard::Procurement, args.dashboard);
                assert!(args.output_path.is_none());
            }
            Commands::Render(_) => panic!("expected the demo command"),
        }
    }

    #[test]
    fn render_requires_existing_input() {
        let result =
            Cli::try_parse_from(["dashchart", "render", "--input", "/no/such/dashboard.json"]);

        assert!(result.is_err());
    }

    #[test]
    fn explicit_path_is_kept() -> Result<(), CliError> {
        let path = Some(PathBuf::from("/tmp")).or_current_dir()?;

        assert_eq!(PathBuf::from("/tmp"), path);

        Ok(())
    }
}
