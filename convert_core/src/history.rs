//! Records exchanged with the history store.
//!
//! The engine never persists anything itself. After a successful conversion the
//! UI may turn the outcome into a [`HistoryDraft`] and save it for a signed-in
//! user; on load it reads back [`HistoryEntry`] rows and keeps the newest
//! [`HISTORY_LIMIT`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ConversionResult;
use crate::registry::{ConversionSpec, lookup_or_default};

/// Number of entries reloaded into the selection UI.
pub const HISTORY_LIMIT: usize = 15;

/// Fields the caller persists for one successful conversion.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HistoryDraft {
    pub input_text: String,
    pub output_text: String,
    /// Conversion identifier
    pub format_type: String,
}

impl HistoryDraft {
    /// Returns a draft only when the conversion succeeded.
    pub fn from_outcome(id: &str, input: &str, outcome: &ConversionResult) -> Option<Self> {
        let output = outcome.as_ref().ok()?;
        Some(Self {
            input_text: input.to_string(),
            output_text: output.clone(),
            format_type: id.to_string(),
        })
    }
}

/// A stored history row as returned by the store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub input_text: String,
    pub output_text: String,
    pub format_type: String,
    pub user_id: String,
}

impl HistoryEntry {
    /// Conversion to reselect when this entry is opened; retired ids fall back to the default.
    pub fn conversion(&self) -> &'static ConversionSpec {
        lookup_or_default(&self.format_type)
    }
}

/// Newest-first slice of at most `limit` entries.
pub fn recent(mut entries: Vec<HistoryEntry>, limit: usize) -> Vec<HistoryEntry> {
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use chrono::TimeZone;

    fn entry(id: i64, minute: u32, format_type: &str) -> HistoryEntry {
        HistoryEntry {
            id,
            created_at: Utc.with_ymd_and_hms(2025, 1, 2, 3, minute, 0).unwrap(),
            input_text: "{}".into(),
            output_text: "{}".into(),
            format_type: format_type.into(),
            user_id: "user-1".into(),
        }
    }

    #[test]
    fn draft_only_for_successful_outcomes() {
        let ok: ConversionResult = Ok("out".into());
        let draft = HistoryDraft::from_outcome("zod", "in", &ok).expect("draft");
        assert_eq!(draft.format_type, "zod");
        assert_eq!(draft.output_text, "out");

        let failed: ConversionResult = Err(ConvertError::EmptyInput);
        assert!(HistoryDraft::from_outcome("zod", "", &failed).is_none());
    }

    #[test]
    fn recent_orders_newest_first_and_truncates() {
        let entries = (0..20).map(|i| entry(i, i as u32, "sql")).collect();
        let kept = recent(entries, HISTORY_LIMIT);
        assert_eq!(kept.len(), 15);
        assert_eq!(kept[0].id, 19);
        assert_eq!(kept[14].id, 5);
    }

    #[test]
    fn stale_format_type_resolves_to_default() {
        assert_eq!(entry(1, 0, "css_obj").conversion().id, "css_obj");
        assert_eq!(entry(2, 0, "retired_converter").conversion().id, "svg_react");
    }

    #[test]
    fn entry_deserializes_store_rows() {
        let row = r#"{"id":7,"created_at":"2025-01-02T03:04:05Z","input_text":"a","output_text":"b","format_type":"typescript","user_id":"u"}"#;
        let parsed: HistoryEntry = serde_json::from_str(row).expect("row parses");
        assert_eq!(parsed.id, 7);
        assert_eq!(parsed.conversion().label, "JSON to TypeScript");
    }
}
