#[derive(Debug, Clone, Copy, Default)]
pub struct DebugConfig {
    pub verbosity: u8, // 0-2
}

impl DebugConfig {
    pub fn new(verbose_count: u8) -> Self {
        DebugConfig {
            verbosity: verbose_count,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.verbosity > 0
    }

    pub fn should_trace(&self) -> bool {
        self.verbosity >= 2
    }

    /// Registration and configuration notes (-v)
    pub fn log_basic(&self, message: &str) {
        if self.is_enabled() {
            eprintln!("strutil: {}", message);
        }
    }

    /// Per-script detail (-vv)
    pub fn log_detail(&self, message: &str) {
        if self.should_trace() {
            eprintln!("strutil: {}", message);
        }
    }
}

/// Shortens a script for single-line diagnostics.
pub fn preview(script: &str) -> String {
    let flat = script.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > 60 {
        let head: String = flat.chars().take(57).collect();
        format!("{}...", head)
    } else {
        flat
    }
}
