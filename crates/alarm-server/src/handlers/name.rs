//! `GET /name` handler.

use std::collections::HashMap;
use std::io::{self, Write};

use tracing::{debug, warn};

/// Display name returned by the route.
pub const DISPLAY_NAME: &str = "Anurag Prakash";

/// Builds the request-scoped record echoed to stdout on every call.
fn owner_record() -> HashMap<String, String> {
    HashMap::from([("Name".to_string(), "anurag".to_string())])
}

/// Writes `record` as one `{key=value, ...}` line, entries sorted by key.
fn write_record<W: Write>(out: &mut W, record: &HashMap<String, String>) -> io::Result<()> {
    let mut entries: Vec<_> = record.iter().collect();
    entries.sort();

    let body = entries
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "{{{body}}}")
}

/// Returns the owner's display name.
///
/// Writes the owner record to stdout as a side effect; it never reaches the response.
pub async fn get_name() -> &'static str {
    let record = owner_record();
    if let Err(e) = write_record(&mut io::stdout().lock(), &record) {
        warn!("Failed to write owner record: {}", e);
    }
    debug!(entries = record.len(), "served name");

    DISPLAY_NAME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_record_has_single_name_entry() {
        let record = owner_record();
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("Name").map(String::as_str), Some("anurag"));
    }

    #[test]
    fn owner_record_is_written_as_one_line() {
        let mut out = Vec::new();
        write_record(&mut out, &owner_record()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{Name=anurag}\n");
    }

    #[test]
    fn record_entries_are_sorted_and_comma_separated() {
        let record = HashMap::from([
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
        ]);
        let mut out = Vec::new();
        write_record(&mut out, &record).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{a=1, b=2}\n");
    }

    #[test]
    fn empty_record_is_written_as_braces() {
        let mut out = Vec::new();
        write_record(&mut out, &HashMap::new()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{}\n");
    }

    #[tokio::test]
    async fn get_name_returns_display_name() {
        assert_eq!(get_name().await, "Anurag Prakash");
        assert_eq!(get_name().await, DISPLAY_NAME);
    }
}
