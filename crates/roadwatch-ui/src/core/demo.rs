//! Fixed payload shown before the backend has answered.

use roadwatch_api_models::{DashboardSnapshot, DetectionId, DetectionRecord, SummaryStats};

/// Snapshot the dashboard boots with.
#[must_use]
pub fn demo_snapshot() -> DashboardSnapshot {
    DashboardSnapshot {
        stats: SummaryStats {
            total_detections: 147,
            high_priority: 12,
            medium_priority: 45,
            low_priority: 90,
            with_plates: 98,
            without_plates: 49,
        },
        detections: vec![
            demo_record(1, "14:30:15", "car", "LOW", "ABC1234", 0.85),
            demo_record(2, "14:30:18", "truck", "MEDIUM", "XYZ9876", 0.92),
            demo_record(3, "14:30:22", "ambulance", "HIGH", "EMG911", 0.88),
            demo_record(4, "14:30:25", "bus", "MEDIUM", "BUS456", 0.79),
            demo_record(5, "14:30:28", "motorcycle", "LOW", "N/A", 0.91),
        ],
    }
}

fn demo_record(
    id: u64,
    time: &str,
    vehicle: &str,
    priority: &str,
    plate: &str,
    confidence: f64,
) -> DetectionRecord {
    DetectionRecord {
        id: DetectionId::Number(id),
        timestamp: format!("2025-11-05 {time}"),
        vehicle: vehicle.to_string(),
        priority: priority.to_string(),
        plate: plate.to_string(),
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stats::consistency_findings;

    #[test]
    fn demo_payload_is_consistent() {
        let snapshot = demo_snapshot();
        assert_eq!(snapshot.detections.len(), 5);
        assert!(consistency_findings(&snapshot.stats, snapshot.detections.len()).is_empty());
        assert_eq!(snapshot.detections[4].plate_text(), None);
    }
}
