//! JSON output formatting
//!
//! Every JSON document is an envelope: the payload under `data` and a
//! `meta` block. Listings also report their row count.

use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct JsonOutput<'a, T: ?Sized> {
    pub data: &'a T,
    pub meta: Metadata,
}

#[derive(Debug, Serialize)]
pub struct Metadata {
    pub generated_at: String,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl Metadata {
    fn now(count: Option<usize>) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION"),
            count,
        }
    }
}

/// Pretty-printed envelope around a single record
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput {
        data,
        meta: Metadata::now(None),
    })
}

/// Pretty-printed envelope around a listing, with its row count
pub fn format_json_list<T: Serialize>(rows: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput {
        data: rows,
        meta: Metadata::now(Some(rows.len())),
    })
}
