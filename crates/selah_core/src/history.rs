//! Persisted record of one successful generation.

use crate::{ParameterSet, StructuredResult};
use chrono::{DateTime, SecondsFormat, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Snapshot pairing one parameter set with the script it produced.
///
/// Entries are immutable once created. Edits made to the live result after
/// generation never flow back into a stored entry.
///
/// # Examples
///
/// ```
/// use selah_core::{HistoryEntry, ParameterSet, StructuredResult};
///
/// let params = ParameterSet::builder().source_text("Psalm 23").build().unwrap();
/// let entry = HistoryEntry::new(params, StructuredResult::default());
///
/// assert_eq!(entry.verse(), "Psalm 23");
/// assert!(*entry.timestamp() > 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Time-derived unique identifier
    id: String,
    /// Creation time in epoch milliseconds
    timestamp: i64,
    /// Source text, kept separately for list display
    verse: String,
    /// The script as generated
    generated_result: StructuredResult,
    /// The parameters that produced it
    inputs: ParameterSet,
}

impl HistoryEntry {
    /// Records a generation that completed now.
    pub fn new(inputs: ParameterSet, generated_result: StructuredResult) -> Self {
        Self::recorded_at(inputs, generated_result, Utc::now())
    }

    /// Records a generation that completed at `at`.
    ///
    /// The identifier is the RFC 3339 form of `at` with nanosecond precision.
    pub fn recorded_at(
        inputs: ParameterSet,
        generated_result: StructuredResult,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: at.to_rfc3339_opts(SecondsFormat::Nanos, true),
            timestamp: at.timestamp_millis(),
            verse: inputs.source_text().to_string(),
            generated_result,
            inputs,
        }
    }

    /// Creation time as a `DateTime`, if the stored timestamp is in range.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}
