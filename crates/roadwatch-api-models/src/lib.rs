#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    unreachable_pub,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
//! Shared HTTP DTOs for the Roadwatch detection API.
//!
//! The detection backend and the dashboard exchange these shapes as JSON.
//! Field names follow the payloads the detector already emits (camelCase
//! counters, upper-case priority strings, `N/A` for unreadable plates), so the
//! types stay permissive on input and leave display fallbacks to the UI.
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Sentinel plate value emitted when no licence plate could be read.
pub const PLATE_NOT_RECOGNISED: &str = "N/A";

/// RFC9457-compatible problem document surfaced on export/runtime errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    /// URI reference identifying the problem type.
    pub kind: String,
    /// Short, human-readable summary of the issue.
    pub title: String,
    /// HTTP status code associated with the error.
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Detailed diagnostic message when available.
    pub detail: Option<String>,
}

impl ProblemDetails {
    /// Most specific human-readable message carried by the document.
    #[must_use]
    pub fn message(&self) -> &str {
        self.detail.as_deref().unwrap_or(&self.title)
    }
}

/// Identifier assigned by the producing source. Producers use either numbers
/// or strings, so both are accepted verbatim. Records without one carry an
/// empty text id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum DetectionId {
    /// Numeric identifier.
    Number(u64),
    /// Opaque string identifier.
    Text(String),
}

impl Default for DetectionId {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for DetectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Severity classification of a detected vehicle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    /// Emergency vehicles.
    High,
    /// Commercial vehicles.
    Medium,
    /// Personal vehicles.
    Low,
}

impl Priority {
    /// Buckets in display order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::High, Self::Medium, Self::Low]
    }

    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    /// Parse a wire value, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::all()
            .into_iter()
            .find(|priority| priority.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One vehicle detection as reported by the detector.
///
/// Missing or `null` fields decode to their defaults (empty text, confidence
/// `0.0`) so partial detector rows still reach the table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DetectionRecord {
    /// Producer-assigned identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: DetectionId,
    /// Capture time formatted as `YYYY-MM-DD HH:MM:SS`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
    /// Vehicle class tag (`car`, `truck`, `ambulance`, ...).
    #[serde(default, deserialize_with = "null_as_default")]
    pub vehicle: String,
    /// Priority as sent on the wire; see [`DetectionRecord::priority_level`].
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: String,
    /// Recognised plate text or [`PLATE_NOT_RECOGNISED`].
    #[serde(default, deserialize_with = "null_as_default")]
    pub plate: String,
    /// Detector confidence, nominally in `[0.0, 1.0]`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub confidence: f64,
}

impl DetectionRecord {
    /// Parsed priority, or `None` when the wire value is not a known bucket.
    #[must_use]
    pub fn priority_level(&self) -> Option<Priority> {
        Priority::parse(&self.priority)
    }

    /// Plate text when one was recognised.
    #[must_use]
    pub fn plate_text(&self) -> Option<&str> {
        let plate = self.plate.trim();
        if plate.is_empty() || plate.eq_ignore_ascii_case(PLATE_NOT_RECOGNISED) {
            None
        } else {
            Some(plate)
        }
    }
}

/// Aggregate counters for the summary cards and priority chart.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    /// All detections seen by the producer.
    pub total_detections: u64,
    /// Detections classified HIGH.
    pub high_priority: u64,
    /// Detections classified MEDIUM.
    pub medium_priority: u64,
    /// Detections classified LOW.
    pub low_priority: u64,
    /// Detections with a recognised plate.
    pub with_plates: u64,
    /// Detections without a recognised plate.
    pub without_plates: u64,
}

impl SummaryStats {
    /// Sum of the three priority buckets.
    #[must_use]
    pub const fn priority_sum(&self) -> u64 {
        self.high_priority
            .saturating_add(self.medium_priority)
            .saturating_add(self.low_priority)
    }

    /// Sum of the plate/no-plate counters.
    #[must_use]
    pub const fn plate_sum(&self) -> u64 {
        self.with_plates.saturating_add(self.without_plates)
    }

    /// Derive counters from a list of records.
    ///
    /// Unknown priorities count as LOW, matching how the table renders them.
    #[must_use]
    pub fn from_records(records: &[DetectionRecord]) -> Self {
        records.iter().fold(Self::default(), |mut stats, record| {
            stats.total_detections += 1;
            match record.priority_level().unwrap_or(Priority::Low) {
                Priority::High => stats.high_priority += 1,
                Priority::Medium => stats.medium_priority += 1,
                Priority::Low => stats.low_priority += 1,
            }
            if record.plate_text().is_some() {
                stats.with_plates += 1;
            } else {
                stats.without_plates += 1;
            }
            stats
        })
    }
}

/// Payload served by `GET /api/dashboard`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardSnapshot {
    /// Aggregate counters.
    pub stats: SummaryStats,
    /// Most recent detections, newest first as ordered by the producer.
    /// Entries that are not record objects at all are skipped.
    #[serde(default, deserialize_with = "skip_malformed_records")]
    pub detections: Vec<DetectionRecord>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordEntry {
    Record(DetectionRecord),
    #[allow(dead_code)]
    Malformed(IgnoredAny),
}

fn skip_malformed_records<'de, D>(deserializer: D) -> Result<Vec<DetectionRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<RecordEntry>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry {
            RecordEntry::Record(record) => Some(record),
            RecordEntry::Malformed(_) => None,
        })
        .collect())
}
