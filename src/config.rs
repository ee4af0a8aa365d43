use std::{fs, path::{Path, PathBuf}};

use anyhow::{Context, bail};
use machine_learning::PerceptronConfig;

pub const USAGE: &str = "Usage: perceptron [--config <file.json>] [--json]";

/// Command line arguments.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Args {
    /// JSON file overriding any subset of the default configuration.
    pub config: Option<PathBuf>,
    /// Print the report as JSON instead of a table.
    pub json: bool,
    pub help: bool,
}

impl Args {
    /// Parses the arguments, without the program name.
    pub fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let path = args.next().context("--config expects a file path")?;
                    parsed.config = Some(path.into());
                }
                "--json" => parsed.json = true,
                "--help" | "-h" => parsed.help = true,
                other => bail!("unknown argument '{other}'\n{USAGE}"),
            }
        }

        Ok(parsed)
    }
}

/// Loads and validates the configuration, falling back to the defaults without a file.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<PerceptronConfig> {
    let config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("cannot read '{}'", path.display()))?;
            parse_config(&content).with_context(|| format!("in '{}'", path.display()))?
        }
        None => PerceptronConfig::default(),
    };

    config.validate()?;
    Ok(config)
}

/// Parses a JSON configuration, missing fields take their default value.
pub fn parse_config(content: &str) -> anyhow::Result<PerceptronConfig> {
    serde_json::from_str(content).context("invalid JSON configuration")
}
