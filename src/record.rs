//! src/record.rs

use chrono::{DateTime, FixedOffset, SecondsFormat};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// One developer annotation attached to a commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Kept with the offset it was written in; ordering compares instants.
    #[serde(with = "timestamp_format")]
    pub timestamp: DateTime<FixedOffset>,
    pub commit: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Record {
    pub fn new(
        timestamp: impl Into<DateTime<FixedOffset>>,
        commit: impl Into<String>,
        message: impl Into<String>,
        why: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            commit: commit.into(),
            message: message.into(),
            why,
            notes,
        }
    }

    /// `YYYY-MM-DD` of the timestamp, in its stored offset.
    pub fn date(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }

    /// `<date>--<commit>.json`; same commit on the same day maps to the same file.
    pub fn file_name(&self) -> String {
        format!("{}--{}.json", self.date(), self.commit)
    }

    pub fn why_text(&self) -> &str {
        self.why.as_deref().unwrap_or("")
    }

    pub fn notes_text(&self) -> &str {
        self.notes.as_deref().unwrap_or("")
    }

    pub fn has_commentary(&self) -> bool {
        !self.why_text().is_empty() || !self.notes_text().is_empty()
    }

    /// Case-insensitive substring match over message, why and notes.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [Some(&self.message), self.why.as_ref(), self.notes.as_ref()]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&query))
    }

    /// Console block used by `list` and `search`. With `always_show_commentary`
    /// unset, the Why/Notes lines are omitted for records that have neither.
    pub fn to_console_block(&self, always_show_commentary: bool) -> String {
        let mut block = String::new();
        let _ = writeln!(
            block,
            "\n🗓  {}",
            self.timestamp
                .to_rfc3339_opts(SecondsFormat::Millis, true)
                .bold()
        );
        let _ = writeln!(block, "🔧  Commit: {}", self.commit);
        let _ = writeln!(block, "📄  Message: {}", self.message);
        if always_show_commentary || self.has_commentary() {
            let _ = writeln!(block, "🧠  Why: {}", self.why_text());
            let _ = writeln!(block, "📝  Notes: {}", self.notes_text());
        }
        block
    }
}

/// Splits `why | notes` input on the first pipe. Returns `None` when the input
/// is blank, meaning the annotation should be skipped.
pub fn parse_annotation(input: &str) -> Option<(Option<String>, Option<String>)> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let mut parts = input.splitn(2, '|');
    let why = parts.next().map(|s| s.trim().to_string());
    let notes = parts.next().map(|s| s.trim().to_string());
    Some((why, notes))
}

mod timestamp_format {
    use chrono::{DateTime, FixedOffset, SecondsFormat};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        ts: &DateTime<FixedOffset>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<FixedOffset>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw).map_err(serde::de::Error::custom)
    }
}
