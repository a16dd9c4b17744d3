use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches};
use std::io::{self, BufRead, Write};
use std::process;

use strutil::cli::Cli;
use strutil::config::{HostConfig, OutputFormat, StrutilConfig};
use strutil::config_file::ConfigFile;
use strutil::debug::DebugConfig;
use strutil::engine::ScriptEngine;
use strutil::formatters::format_result;
use strutil::rhai_functions::bridge::text_to_script;
use strutil::rhai_functions::docs;

#[derive(Debug, Clone, Copy)]
enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidUsage = 2,
}

impl ExitCode {
    fn exit(self) -> ! {
        process::exit(self as i32)
    }
}

fn main() {
    let raw_args: Vec<String> = std::env::args().collect();

    if raw_args.iter().any(|arg| arg == "--show-config") {
        ConfigFile::show_config();
        ExitCode::Success.exit();
    }

    let config_file = if raw_args.iter().any(|arg| arg == "--ignore-config") {
        ConfigFile::default()
    } else {
        let custom_path = extract_config_file_arg(&raw_args);
        match ConfigFile::load_with_custom_path(custom_path.as_deref()) {
            Ok(config_file) => config_file,
            Err(e) => {
                eprintln!("strutil: Config file error: {:#}", e);
                ExitCode::GeneralError.exit();
            }
        }
    };

    let processed_args = match config_file.process_args(raw_args) {
        Ok(processed) => processed,
        Err(e) => {
            eprintln!("strutil: Config error: {:#}", e);
            ExitCode::GeneralError.exit();
        }
    };

    // clap exits with 2 on usage errors and 0 for --help/--version
    let matches = Cli::command().get_matches_from(processed_args);
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| {
        eprintln!("strutil: Error: {}", e);
        ExitCode::InvalidUsage.exit();
    });

    if cli.list_functions {
        let host = HostConfig::resolve(&cli, &config_file);
        if let Err(e) = print_function_list(&host.namespace, cli.output_format) {
            eprintln!("strutil: Error: {:#}", e);
            ExitCode::GeneralError.exit();
        }
        ExitCode::Success.exit();
    }

    let scripts = match cli.ordered_scripts(&matches) {
        Ok(scripts) => scripts,
        Err(e) => {
            eprintln!("strutil: Error: {:#}", e);
            ExitCode::GeneralError.exit();
        }
    };
    if scripts.is_empty() {
        eprintln!("strutil: Error: no script given (use -e/--exec or -E/--exec-file)");
        eprintln!("Try 'strutil --help' for more information.");
        ExitCode::InvalidUsage.exit();
    }

    let config = StrutilConfig::from_cli(&cli, scripts, &config_file);
    let debug = DebugConfig::new(config.verbosity);
    if cli.ignore_config {
        debug.log_basic("configuration files ignored");
    } else if let Some(path) = &cli.config_file {
        debug.log_basic(&format!("configuration loaded from {}", path));
    } else {
        debug.log_basic("configuration loaded from default search locations");
    }

    match run(&config, debug) {
        Ok(()) => ExitCode::Success.exit(),
        Err(e) => {
            eprintln!("strutil: Error: {:#}", e);
            ExitCode::GeneralError.exit();
        }
    }
}

fn run(config: &StrutilConfig, debug: DebugConfig) -> Result<()> {
    let engine = ScriptEngine::with_debug(&config.host, debug);
    let compiled = config
        .script
        .scripts
        .iter()
        .map(|script| engine.compile(script))
        .collect::<Result<Vec<_>>>()?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let format = config.output.format;

    if config.script.per_line {
        // Input is 8-bit text, so lines are read as bytes and bound as Latin-1
        let mut input = io::stdin().lock();
        let mut buf = Vec::new();
        for line_no in 1.. {
            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .with_context(|| format!("Failed to read input line {}", line_no))?;
            if read == 0 {
                break;
            }
            let line = text_to_script(strip_line_ending(&buf));
            for script in &compiled {
                let value = engine.eval_line(script, &line)?;
                emit(&mut out, &value, format)?;
            }
        }
    } else {
        for script in &compiled {
            let value = engine.eval_compiled(script)?;
            emit(&mut out, &value, format)?;
        }
    }

    out.flush().context("Failed to flush output")?;
    Ok(())
}

fn emit<W: Write>(out: &mut W, value: &rhai::Dynamic, format: OutputFormat) -> Result<()> {
    if let Some(rendered) = format_result(value, format).context("Failed to encode result")? {
        writeln!(out, "{}", rendered)?;
    }
    Ok(())
}

fn print_function_list(namespace: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Default => print!("{}", docs::generate_help_text(namespace)),
        OutputFormat::Json => println!("{}", docs::generate_help_json()?),
    }
    Ok(())
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Extract --config-file argument from raw args, in either the
/// `--config-file PATH` or the `--config-file=PATH` form
fn extract_config_file_arg(args: &[String]) -> Option<String> {
    args.iter().enumerate().find_map(|(i, arg)| {
        if arg == "--config-file" {
            args.get(i + 1).cloned()
        } else {
            arg.strip_prefix("--config-file=").map(str::to_string)
        }
    })
}
