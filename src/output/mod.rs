//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod detail;
pub mod json;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

impl<D: Tabled + Serialize> Formattable for Vec<D> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json_list(self)?),
            OutputFormat::Pretty => Ok(table::format_pretty_table(self)),
            OutputFormat::Table => Ok(table::format_table(self)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled, Serialize)]
    struct Row {
        #[tabled(rename = "ID")]
        id: u64,
    }

    #[test]
    fn test_vec_formats_per_output_format() {
        let rows = vec![Row { id: 7 }];
        assert!(rows.format(OutputFormat::Table).unwrap().contains("ID"));
        assert!(rows.format(OutputFormat::Json).unwrap().contains("\"id\": 7"));
    }
}
