//! Output formatting utilities

use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Format output based on format type
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> String {
    let formatted = match format {
        OutputFormat::Json => serde_json::to_string(data),
        OutputFormat::Pretty => serde_json::to_string_pretty(data),
    };
    formatted.unwrap_or_else(|_| "{}".to_string())
}
