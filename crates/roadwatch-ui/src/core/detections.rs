//! Recent-detections table mapping.
//!
//! # Design
//! - Records render in the order supplied; sorting is the producer's job.
//! - Every lookup has a default so one odd record cannot break the table.

use roadwatch_api_models::{DetectionRecord, PLATE_NOT_RECOGNISED, Priority};

static VEHICLE_GLYPHS: [(&str, &str); 6] = [
    ("car", "🚗"),
    ("truck", "🚚"),
    ("bus", "🚌"),
    ("ambulance", "🚑"),
    ("motorcycle", "🏍️"),
    ("bicycle", "🚲"),
];

/// Glyph used for vehicle classes missing from the table.
pub const DEFAULT_VEHICLE_GLYPH: &str = "🚗";

/// Case-insensitive vehicle glyph lookup with a car fallback.
#[must_use]
pub fn vehicle_glyph(vehicle: &str) -> &'static str {
    let vehicle = vehicle.trim();
    VEHICLE_GLYPHS
        .iter()
        .find(|(class, _)| class.eq_ignore_ascii_case(vehicle))
        .map_or(DEFAULT_VEHICLE_GLYPH, |(_, glyph)| *glyph)
}

/// Badge class for a priority; unknown priorities get the LOW style.
#[must_use]
pub const fn priority_badge(priority: Option<Priority>) -> &'static str {
    match priority {
        Some(Priority::High) => "badge-high",
        Some(Priority::Medium) => "badge-medium",
        Some(Priority::Low) | None => "badge-low",
    }
}

/// Time-of-day portion of a `YYYY-MM-DD HH:MM:SS` timestamp.
///
/// Timestamps without a space are shown unchanged.
#[must_use]
pub fn time_of_day(timestamp: &str) -> &str {
    timestamp
        .split_once(' ')
        .map_or(timestamp, |(_, time)| time)
}

/// Confidence clamped into `[0, 1]`; NaN reads as `0`.
#[must_use]
pub fn clamp_confidence(confidence: f64) -> f64 {
    if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, 1.0)
    }
}

/// Confidence as a whole percentage in `[0, 100]`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn confidence_percent(confidence: f64) -> u8 {
    // clamped to [0, 100] before the cast
    (clamp_confidence(confidence) * 100.0).round() as u8
}

/// One rendered table row.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectionRow {
    /// Stable key for list diffing.
    pub key: String,
    /// Time-of-day column.
    pub time: String,
    /// Vehicle glyph.
    pub glyph: &'static str,
    /// Vehicle class text as reported.
    pub vehicle: String,
    /// Priority text as reported.
    pub priority_label: String,
    /// Badge class for the priority.
    pub badge_class: &'static str,
    /// Plate text, or the sentinel when unrecognised.
    pub plate: String,
    /// Whether a plate was recognised.
    pub has_plate: bool,
    /// Confidence bar width in percent.
    pub confidence_width: f64,
    /// Confidence label (`"88%"`).
    pub confidence_label: String,
}

impl DetectionRow {
    /// Map a record into display cells.
    #[must_use]
    pub fn from_record(index: usize, record: &DetectionRecord) -> Self {
        let plate = record.plate_text();
        Self {
            key: format!("{index}:{}", record.id),
            time: time_of_day(&record.timestamp).to_string(),
            glyph: vehicle_glyph(&record.vehicle),
            vehicle: record.vehicle.clone(),
            priority_label: record.priority.clone(),
            badge_class: priority_badge(record.priority_level()),
            plate: plate.unwrap_or(PLATE_NOT_RECOGNISED).to_string(),
            has_plate: plate.is_some(),
            confidence_width: clamp_confidence(record.confidence) * 100.0,
            confidence_label: format!("{}%", confidence_percent(record.confidence)),
        }
    }

    /// Inline style for the confidence fill.
    #[must_use]
    pub fn confidence_style(&self) -> String {
        format!("width: {:.1}%;", self.confidence_width)
    }
}

/// Table display mode.
#[derive(Clone, Debug, PartialEq)]
pub enum DetectionTable {
    /// No records: show the placeholder instead of a table.
    Empty,
    /// Rows in input order.
    Rows(Vec<DetectionRow>),
}

/// Build the table for a record sequence.
#[must_use]
pub fn detection_table(records: &[DetectionRecord]) -> DetectionTable {
    if records.is_empty() {
        return DetectionTable::Empty;
    }
    DetectionTable::Rows(
        records
            .iter()
            .enumerate()
            .map(|(index, record)| DetectionRow::from_record(index, record))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadwatch_api_models::DetectionId;

    fn record(vehicle: &str, priority: &str, confidence: f64) -> DetectionRecord {
        DetectionRecord {
            id: DetectionId::Number(3),
            timestamp: "2025-11-05 14:30:22".to_string(),
            vehicle: vehicle.to_string(),
            priority: priority.to_string(),
            plate: "EMG911".to_string(),
            confidence,
        }
    }

    #[test]
    fn vehicle_lookup_ignores_case() {
        assert_eq!(vehicle_glyph("Car"), vehicle_glyph("car"));
        assert_eq!(vehicle_glyph("CAR"), vehicle_glyph("car"));
        assert_eq!(vehicle_glyph("AMBULANCE"), "🚑");
        assert_eq!(vehicle_glyph("Bicycle"), "🚲");
    }

    #[test]
    fn unknown_vehicle_falls_back_to_car() {
        assert_eq!(vehicle_glyph("tractor"), DEFAULT_VEHICLE_GLYPH);
        assert_eq!(vehicle_glyph(""), "🚗");
    }

    #[test]
    fn unknown_priority_uses_low_badge() {
        assert_eq!(priority_badge(None), priority_badge(Some(Priority::Low)));
        assert_eq!(priority_badge(Some(Priority::High)), "badge-high");
        let row = DetectionRow::from_record(0, &record("car", "URGENT", 0.5));
        assert_eq!(row.badge_class, "badge-low");
        assert_eq!(row.priority_label, "URGENT");
    }

    #[test]
    fn time_column_takes_text_after_first_space() {
        assert_eq!(time_of_day("2025-11-05 14:30:15"), "14:30:15");
        assert_eq!(time_of_day("14:30:15"), "14:30:15");
        assert_eq!(time_of_day("2025-11-05 14:30:15 UTC"), "14:30:15 UTC");
    }

    #[test]
    fn confidence_rounds_to_whole_percent() {
        for step in 0..=100u32 {
            let confidence = f64::from(step) / 100.0;
            assert_eq!(u32::from(confidence_percent(confidence)), step);
        }
        assert_eq!(confidence_percent(0.856), 86);
    }

    #[test]
    fn confidence_out_of_range_is_clamped() {
        assert_eq!(confidence_percent(1.7), 100);
        assert_eq!(confidence_percent(-0.2), 0);
        assert_eq!(confidence_percent(f64::NAN), 0);
        let row = DetectionRow::from_record(0, &record("car", "LOW", 3.0));
        assert_eq!(row.confidence_width, 100.0);
    }

    #[test]
    fn ambulance_row_renders_high_badge() {
        let row = DetectionRow::from_record(2, &record("ambulance", "HIGH", 0.88));
        assert_eq!(row.glyph, "🚑");
        assert_eq!(row.badge_class, "badge-high");
        assert_eq!(row.confidence_label, "88%");
        assert_eq!(row.confidence_style(), "width: 88.0%;");
        assert_eq!(row.time, "14:30:22");
        assert_eq!(row.key, "2:3");
        assert!(row.has_plate);
    }

    #[test]
    fn empty_sequence_is_a_distinct_mode() {
        assert_eq!(detection_table(&[]), DetectionTable::Empty);
        let one = detection_table(&[record("bus", "MEDIUM", 0.79)]);
        assert!(matches!(one, DetectionTable::Rows(rows) if rows.len() == 1));
    }

    #[test]
    fn rows_keep_input_order() {
        let records = vec![
            record("truck", "MEDIUM", 0.9),
            record("car", "LOW", 0.8),
            record("bus", "HIGH", 0.7),
        ];
        let DetectionTable::Rows(rows) = detection_table(&records) else {
            panic!("expected rows");
        };
        let vehicles: Vec<_> = rows.iter().map(|row| row.vehicle.as_str()).collect();
        assert_eq!(vehicles, vec!["truck", "car", "bus"]);
    }
}
