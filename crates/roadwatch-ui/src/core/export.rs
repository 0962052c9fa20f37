//! Export request helpers: artifact naming and failure messages.

use chrono::{DateTime, FixedOffset};
use roadwatch_api_models::ProblemDetails;

const EXPORT_PREFIX: &str = "vehicle_detections";
const EXPORT_EXTENSION: &str = "xlsx";

/// Download name for an export requested at `epoch_ms`, in the viewer's local time.
///
/// `utc_offset_minutes` is the offset east of UTC (JavaScript reports the
/// opposite sign from `getTimezoneOffset`).
#[must_use]
pub fn export_filename(epoch_ms: i64, utc_offset_minutes: i32) -> String {
    let offset = FixedOffset::east_opt(utc_offset_minutes.saturating_mul(60))
        .or_else(|| FixedOffset::east_opt(0));
    let stamp = DateTime::from_timestamp_millis(epoch_ms)
        .zip(offset)
        .map(|(utc, offset)| utc.with_timezone(&offset).format("%Y%m%d_%H%M%S").to_string())
        .unwrap_or_else(|| "unknown".to_string());
    format!("{EXPORT_PREFIX}_{stamp}.{EXPORT_EXTENSION}")
}

/// Message for a failed response: the problem document when the body is one,
/// otherwise the status text, otherwise a generic label.
#[must_use]
pub fn failure_message(status_text: &str, body: Option<&str>) -> String {
    if let Some(problem) = body.and_then(|raw| serde_json::from_str::<ProblemDetails>(raw).ok()) {
        return problem.message().to_string();
    }
    let status_text = status_text.trim();
    if status_text.is_empty() {
        "request failed".to_string()
    } else {
        status_text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_uses_local_time() {
        // 2025-11-05T14:30:15Z
        let epoch_ms = 1_762_353_015_000;
        assert_eq!(
            export_filename(epoch_ms, 0),
            "vehicle_detections_20251105_143015.xlsx"
        );
        assert_eq!(
            export_filename(epoch_ms, 330),
            "vehicle_detections_20251105_200015.xlsx"
        );
        assert_eq!(
            export_filename(epoch_ms, -300),
            "vehicle_detections_20251105_093015.xlsx"
        );
    }

    #[test]
    fn filename_survives_invalid_offset() {
        let name = export_filename(0, i32::MAX);
        assert_eq!(name, "vehicle_detections_19700101_000000.xlsx");
    }

    #[test]
    fn failure_message_prefers_problem_document() {
        let body = r#"{"type":"about:blank","title":"Export failed","status":500,"detail":"no detections logged"}"#;
        assert_eq!(
            failure_message("Internal Server Error", Some(body)),
            "no detections logged"
        );
        assert_eq!(
            failure_message("Service Unavailable", Some("<html>")),
            "Service Unavailable"
        );
        assert_eq!(failure_message("", None), "request failed");
    }
}
