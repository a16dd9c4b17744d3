use anyhow::{anyhow, Context, Result};
use std::collections::{HashMap, HashSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_NAME: &str = ".strutilrc";
const MAX_ALIAS_DEPTH: usize = 10;

/// Values from the `[host]` section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostSection {
    pub namespace: Option<String>,
    pub game_version: Option<String>,
    pub runtime_version: Option<String>,
}

/// Configuration file handler for strutil
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub defaults: Option<String>,
    pub aliases: HashMap<String, String>,
    pub host: HostSection,
}

impl ConfigFile {
    /// Find project-level .strutilrc by walking up directory tree
    pub fn find_project_config() -> Option<PathBuf> {
        let mut current = env::current_dir().ok()?;
        loop {
            let config_path = current.join(PROJECT_CONFIG_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                break;
            }
        }
        None
    }

    /// Get list of user config file locations in order of preference
    pub fn get_user_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if cfg!(windows) {
            // %APPDATA%\strutil\config.ini, then %USERPROFILE%\.strutilrc
            if let Ok(appdata) = env::var("APPDATA") {
                paths.push(PathBuf::from(appdata).join("strutil").join("config.ini"));
            }
            if let Ok(userprofile) = env::var("USERPROFILE") {
                paths.push(PathBuf::from(userprofile).join(PROJECT_CONFIG_NAME));
            }
        } else {
            // $XDG_CONFIG_HOME/strutil/config.ini, then ~/.strutilrc
            let xdg_config = env::var("XDG_CONFIG_HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    env::var("HOME")
                        .map(|h| PathBuf::from(h).join(".config"))
                        .unwrap_or_else(|_| PathBuf::from(".config"))
                });

            paths.push(xdg_config.join("strutil").join("config.ini"));

            if let Ok(home) = env::var("HOME") {
                paths.push(PathBuf::from(home).join(PROJECT_CONFIG_NAME));
            }
        }

        paths
    }

    /// Load configuration with precedence: project > user > defaults
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = Self::get_user_config_paths().into_iter().find(|p| p.exists()) {
            config = Self::merge_configs(config, Self::load_from_path(&path)?);
        }

        if let Some(project_path) = Self::find_project_config() {
            config = Self::merge_configs(config, Self::load_from_path(&project_path)?);
        }

        Ok(config)
    }

    /// Load configuration with optional custom config file path
    pub fn load_with_custom_path(custom_path: Option<&str>) -> Result<Self> {
        match custom_path {
            Some(path) => Self::load_from_path(Path::new(path)),
            None => Self::load(),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse_ini_content(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    fn parse_ini_content(content: &str) -> Result<Self> {
        let mut config = Self::default();
        let mut current_section = String::new();

        for (line_no, raw) in content.lines().enumerate() {
            let line = raw.trim();

            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                current_section = line[1..line.len() - 1].trim().to_string();
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(anyhow!("line {}: expected key = value", line_no + 1));
            };
            let key = key.trim();
            let value = value.trim().to_string();

            match current_section.as_str() {
                "" if key == "defaults" => config.defaults = Some(value),
                "aliases" => {
                    config.aliases.insert(key.to_string(), value);
                }
                "host" => match key {
                    "namespace" => config.host.namespace = Some(value),
                    "game_version" => config.host.game_version = Some(value),
                    "runtime_version" => config.host.runtime_version = Some(value),
                    _ => {}
                },
                // unknown keys and sections are ignored
                _ => {}
            }
        }

        Ok(config)
    }

    /// Merge two configuration objects, with the second taking precedence
    fn merge_configs(base: Self, overlay: Self) -> Self {
        let mut aliases = base.aliases;
        aliases.extend(overlay.aliases);
        Self {
            defaults: overlay.defaults.or(base.defaults),
            aliases,
            host: HostSection {
                namespace: overlay.host.namespace.or(base.host.namespace),
                game_version: overlay.host.game_version.or(base.host.game_version),
                runtime_version: overlay.host.runtime_version.or(base.host.runtime_version),
            },
        }
    }

    /// Show configuration information with precedence details
    pub fn show_config() {
        println!("Configuration precedence: CLI > project .strutilrc > user config > defaults\n");

        let project_config_path = Self::find_project_config();
        let user_config_paths = Self::get_user_config_paths();

        match Self::load() {
            Ok(merged) => {
                if let Some(defaults) = &merged.defaults {
                    println!("Active defaults:\n  defaults = {}", defaults);
                }
                let host = [
                    ("namespace", &merged.host.namespace),
                    ("game_version", &merged.host.game_version),
                    ("runtime_version", &merged.host.runtime_version),
                ];
                if host.iter().any(|(_, v)| v.is_some()) {
                    println!("\nActive host settings:");
                    for (key, value) in host {
                        if let Some(value) = value {
                            println!("  {} = {}", key, value);
                        }
                    }
                }
                if !merged.aliases.is_empty() {
                    println!("\nActive aliases:");
                    let mut sorted: Vec<_> = merged.aliases.iter().collect();
                    sorted.sort_by_key(|(k, _)| k.as_str());
                    for (key, value) in sorted {
                        println!("  {} = {}", key, value);
                    }
                }
            }
            Err(e) => eprintln!("Error loading configuration: {:#}", e),
        }

        println!("\nConfiguration search locations (in precedence order):");
        match project_config_path {
            Some(ref path) => println!("  1. Project: {} (found)", path.display()),
            None => println!("  1. Project: .strutilrc (searched up directory tree, not found)"),
        }
        for (i, path) in user_config_paths.iter().enumerate() {
            let status = if path.exists() { "(found)" } else { "(not found)" };
            println!("  {}. User: {} {}", i + 2, path.display(), status);
        }
    }

    /// Resolve a single alias, handling recursive references
    pub fn resolve_alias(
        &self,
        name: &str,
        seen: &mut HashSet<String>,
        depth: usize,
    ) -> Result<Vec<String>> {
        if depth > MAX_ALIAS_DEPTH {
            return Err(anyhow!("Alias chain too deep: {} levels", depth));
        }

        if seen.contains(name) {
            return Err(anyhow!("Circular dependency detected in alias: {}", name));
        }

        let alias_value = self
            .aliases
            .get(name)
            .ok_or_else(|| anyhow!("Unknown alias: {}", name))?;

        seen.insert(name.to_string());

        let args = shell_words::split(alias_value)
            .with_context(|| format!("Invalid alias '{}': failed to parse arguments", name))?;

        let mut result = Vec::new();
        let mut i = 0;
        while i < args.len() {
            if (args[i] == "-a" || args[i] == "--alias") && i + 1 < args.len() {
                result.extend(self.resolve_alias(&args[i + 1], seen, depth + 1)?);
                i += 2;
            } else {
                result.push(args[i].clone());
                i += 1;
            }
        }

        seen.remove(name);
        Ok(result)
    }

    /// Prepend configured defaults and expand `-a/--alias NAME` references
    pub fn process_args(&self, args: Vec<String>) -> Result<Vec<String>> {
        let mut result = Vec::with_capacity(args.len());
        let mut args = args.into_iter();

        // Keep the program name first
        if let Some(program) = args.next() {
            result.push(program);
        }
        if let Some(defaults) = &self.defaults {
            let default_args = shell_words::split(defaults)
                .context("Invalid defaults: failed to parse arguments")?;
            result.extend(default_args);
        }
        result.extend(args);

        let mut expanded = Vec::with_capacity(result.len());
        let mut i = 0;
        while i < result.len() {
            if (result[i] == "-a" || result[i] == "--alias") && i + 1 < result.len() {
                let mut seen = HashSet::new();
                expanded.extend(self.resolve_alias(&result[i + 1], &mut seen, 0)?);
                i += 2;
            } else {
                expanded.push(result[i].clone());
                i += 1;
            }
        }

        Ok(expanded)
    }
}
