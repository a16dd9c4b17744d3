use clap::ValueEnum;

use crate::cli::Cli;
use crate::config_file::ConfigFile;

pub const DEFAULT_NAMESPACE: &str = "StringUtils";
pub const UNKNOWN_VERSION: &str = "unknown";

/// Main configuration struct for strutil
#[derive(Debug, Clone)]
pub struct StrutilConfig {
    pub host: HostConfig,
    pub script: ScriptConfig,
    pub output: OutputConfig,
    pub verbosity: u8,
}

/// What the embedding host tells the library about itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub namespace: String,
    pub game_version: String,
    pub runtime_version: String,
    pub expose_globally: bool,
}

/// Script configuration
#[derive(Debug, Clone, Default)]
pub struct ScriptConfig {
    /// Script sources in command-line order
    pub scripts: Vec<String>,
    /// Evaluate the scripts once per stdin line
    pub per_line: bool,
}

/// Output configuration
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Default,
    Json,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            game_version: UNKNOWN_VERSION.to_string(),
            runtime_version: UNKNOWN_VERSION.to_string(),
            expose_globally: true,
        }
    }
}

impl HostConfig {
    /// Layer config file values over the defaults, then CLI flags over both
    pub fn resolve(cli: &Cli, file: &ConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            namespace: cli
                .namespace
                .clone()
                .or_else(|| file.host.namespace.clone())
                .unwrap_or(defaults.namespace),
            game_version: cli
                .game_version
                .clone()
                .or_else(|| file.host.game_version.clone())
                .unwrap_or(defaults.game_version),
            runtime_version: cli
                .runtime_version
                .clone()
                .or_else(|| file.host.runtime_version.clone())
                .unwrap_or(defaults.runtime_version),
            expose_globally: !cli.no_global,
        }
    }
}

impl StrutilConfig {
    /// Create configuration from CLI arguments and the loaded config file
    pub fn from_cli(cli: &Cli, scripts: Vec<String>, file: &ConfigFile) -> Self {
        Self {
            host: HostConfig::resolve(cli, file),
            script: ScriptConfig {
                scripts,
                per_line: cli.lines,
            },
            output: OutputConfig {
                format: cli.output_format,
            },
            verbosity: cli.verbose,
        }
    }
}
