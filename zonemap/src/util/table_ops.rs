//! helpers shared by the tabular sources (zone mapping and assignment table).
use csv::StringRecord;
use itertools::Itertools;
use std::collections::HashMap;

/// UTF-8 byte order mark, written at the head of tables for spreadsheet compatibility.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// trims and lower-cases each header so that `" Zone "` and `"zone"` match.
/// a leading byte order mark on the first header is dropped.
pub fn normalize_headers(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_lowercase())
        .collect::<StringRecord>()
}

/// builds a lookup from (normalized) header name to column index. on duplicate
/// names, the first column wins.
pub fn header_lookup(headers: &StringRecord) -> HashMap<String, usize> {
    let mut lookup = HashMap::new();
    for (idx, header) in headers.iter().enumerate() {
        lookup.entry(header.to_string()).or_insert(idx);
    }
    lookup
}

/// comma-separated listing of the headers, used in error messages.
pub fn describe_headers(headers: &StringRecord) -> String {
    headers.iter().map(|h| format!("'{h}'")).join(", ")
}
