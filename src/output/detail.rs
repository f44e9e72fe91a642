//! Key/value detail views for single resources

use colored::Colorize;
use serde::Serialize;

use super::json::format_json;
use crate::cli::OutputFormat;
use crate::error::Result;

/// A titled list of labelled fields
#[derive(Debug, Clone)]
pub struct Detail {
    title: String,
    fields: Vec<(String, String)>,
}

impl Detail {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, label: &str, value: impl ToString) -> Self {
        self.fields.push((label.to_string(), value.to_string()));
        self
    }

    /// Add a field only when a value is present
    pub fn optional(self, label: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.field(label, value),
            None => self,
        }
    }

    /// Aligned plain text, one field per line
    pub fn render_plain(&self) -> String {
        let width = self.fields.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
        let mut out = format!("{}\n", self.title);
        for (label, value) in &self.fields {
            out.push_str(&format!("  {:width$}  {}\n", format!("{}:", label), value, width = width + 1));
        }
        out.trim_end().to_string()
    }

    /// Colored rendering for terminals
    pub fn render_pretty(&self) -> String {
        let width = self.fields.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
        let mut out = format!("{}\n", self.title.bold());
        for (label, value) in &self.fields {
            let label = format!("{:width$}", format!("{}:", label), width = width + 1);
            out.push_str(&format!("  {}  {}\n", label.cyan(), value));
        }
        out.trim_end().to_string()
    }
}

/// Print a single resource: JSON envelope of `data`, or the detail view.
pub fn print_detail<T: Serialize + ?Sized>(
    data: &T,
    detail: &Detail,
    format: OutputFormat,
) -> Result<()> {
    let output = match format {
        OutputFormat::Json => format_json(data)?,
        OutputFormat::Pretty => detail.render_pretty(),
        OutputFormat::Table => detail.render_plain(),
    };
    println!("{}", output);
    Ok(())
}
