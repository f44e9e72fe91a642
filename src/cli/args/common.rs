//! Common CLI types shared across commands

use clap::ValueEnum;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - colored detail views
    Pretty,
    /// Table format - one row per entry (default)
    #[default]
    Table,
    /// JSON format - `{data, meta}` envelope for scripts
    Json,
}

impl OutputFormat {
    /// Parse a stored preference, ignoring case. Unknown values yield `None`.
    pub fn from_preference(value: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(value, true).ok()
    }

    /// Name as written on the command line and in config
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Pretty => "pretty",
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }
}
