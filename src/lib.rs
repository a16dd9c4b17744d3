// String utility library for scripting hosts, with its Rhai registration layer

pub use config::{HostConfig, OutputFormat, StrutilConfig};
pub use engine::ScriptEngine;
pub use rhai_functions::register_all_functions;

pub mod cli;
pub mod config;
pub mod config_file;
pub mod debug;
pub mod engine;
pub mod formatters;
pub mod rhai_functions;
pub mod strings;
