// Command-line interface definitions and script ordering

use crate::config::OutputFormat;
use anyhow::{Context, Result};
use clap::{ArgMatches, Parser};

#[derive(Parser, Debug)]
#[command(name = "strutil")]
#[command(about = "Run Rhai scripts against the StringUtils string library")]
#[command(
    long_about = "Run Rhai scripts against the StringUtils string library\n\nEvery library function is available as StringUtils::Name(...) and, unless --no-global is given, as a bare Name(...).\n\nCOMMON EXAMPLES:\n  strutil -e 'StringUtils::ReplaceAll(\"aAaA\", \"a\", \"b\")'\n  strutil --lines -e 'ToTitleCase(line)' < names.txt\n  strutil -F json -e 'Split(\"a,b,,c\", \",\")'\n\nSee also: --list-functions for the full function reference"
)]
#[command(version)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Inline Rhai script. Repeatable; scripts run in command-line order.
    #[arg(short = 'e', long = "exec", help_heading = "Script Options")]
    pub execs: Vec<String>,

    /// Read a Rhai script from a file. Repeatable; ordered with --exec.
    #[arg(short = 'E', long = "exec-file", help_heading = "Script Options")]
    pub exec_files: Vec<String>,

    /// Run the scripts once per stdin line, with the line bound to `line`
    #[arg(long = "lines", help_heading = "Script Options")]
    pub lines: bool,

    /// Output format for script results
    #[arg(
        short = 'F',
        long = "output-format",
        value_enum,
        default_value = "default",
        help_heading = "Output Options"
    )]
    pub output_format: OutputFormat,

    /// Static module name the functions are registered under
    #[arg(long = "namespace", help_heading = "Host Options")]
    pub namespace: Option<String>,

    /// Only expose functions through the namespace, not as bare names
    #[arg(long = "no-global", help_heading = "Host Options")]
    pub no_global: bool,

    /// Version string reported by GameVersion()
    #[arg(long = "game-version", help_heading = "Host Options")]
    pub game_version: Option<String>,

    /// Version string reported by RuntimeVersion()
    #[arg(long = "runtime-version", help_heading = "Host Options")]
    pub runtime_version: Option<String>,

    /// Show available functions and exit (honours --output-format json)
    #[arg(long = "list-functions", help_heading = "Help Options")]
    pub list_functions: bool,

    /// Specify custom configuration file path
    #[arg(long = "config-file", help_heading = "Configuration Options")]
    pub config_file: Option<String>,

    /// Ignore configuration file
    #[arg(long = "ignore-config", help_heading = "Configuration Options")]
    pub ignore_config: bool,

    /// Use alias from configuration file
    #[arg(short = 'a', long = "alias", help_heading = "Configuration Options")]
    pub alias: Vec<String>,

    /// Show configuration file and exit
    #[arg(long = "show-config", help_heading = "Configuration Options")]
    pub show_config: bool,

    /// Show registration and script details on stderr (-vv for more)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, help_heading = "Diagnostics")]
    pub verbose: u8,
}

impl Cli {
    /// Collect --exec and --exec-file scripts in the order they appeared on the command line
    pub fn ordered_scripts(&self, matches: &ArgMatches) -> Result<Vec<String>> {
        let mut scripts_with_indices: Vec<(usize, String)> = Vec::new();

        if let (Some(indices), Some(values)) = (
            matches.indices_of("execs"),
            matches.get_many::<String>("execs"),
        ) {
            scripts_with_indices.extend(indices.zip(values.cloned()));
        }

        if let (Some(indices), Some(paths)) = (
            matches.indices_of("exec_files"),
            matches.get_many::<String>("exec_files"),
        ) {
            for (index, path) in indices.zip(paths) {
                let script = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read exec file '{}'", path))?;
                scripts_with_indices.push((index, script));
            }
        }

        scripts_with_indices.sort_by_key(|(index, _)| *index);
        Ok(scripts_with_indices
            .into_iter()
            .map(|(_, script)| script)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse_cli(args: &[String]) -> (Cli, ArgMatches) {
        let matches = Cli::command()
            .try_get_matches_from(args.iter().map(|s| s.as_str()))
            .expect("failed to build matches");
        let cli = Cli::parse_from(args.to_vec());
        (cli, matches)
    }

    #[test]
    fn ordered_scripts_preserve_cli_sequence() {
        let mut exec_file = NamedTempFile::new().expect("temp file");
        writeln!(exec_file, "Reverse(\"abc\")").expect("write script");
        let exec_path = exec_file.path().to_str().unwrap().to_string();

        let args = vec![
            "strutil".to_string(),
            "-e".to_string(),
            "Count(\"one\")".to_string(),
            "-E".to_string(),
            exec_path,
            "--exec".to_string(),
            "IsEmpty(\"\")".to_string(),
        ];

        let (cli, matches) = parse_cli(&args);
        let scripts = cli.ordered_scripts(&matches).expect("scripts should load");

        assert_eq!(scripts.len(), 3);
        assert_eq!(scripts[0], "Count(\"one\")");
        assert!(scripts[1].contains("Reverse"));
        assert_eq!(scripts[2], "IsEmpty(\"\")");
    }

    #[test]
    fn missing_exec_file_is_an_error() {
        let args = vec![
            "strutil".to_string(),
            "-E".to_string(),
            "/nonexistent/script.rhai".to_string(),
        ];
        let (cli, matches) = parse_cli(&args);
        let err = cli.ordered_scripts(&matches).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/script.rhai"));
    }

    #[test]
    fn host_flags_parse() {
        let cli = Cli::parse_from([
            "strutil",
            "--namespace",
            "Str",
            "--runtime-version",
            "0.9",
            "-F",
            "json",
            "-vv",
        ]);
        assert_eq!(cli.namespace.as_deref(), Some("Str"));
        assert_eq!(cli.runtime_version.as_deref(), Some("0.9"));
        assert_eq!(cli.output_format, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.no_global);
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
