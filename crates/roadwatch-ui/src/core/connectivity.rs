//! Live feed connectivity state and the view it selects.
//!
//! # Design
//! - The flag is set explicitly by the shell; nothing here watches the network.
//! - Reconnect attempts are bounded and spaced with exponential backoff.

use crate::core::chart::priority_color;
use crate::core::config::StreamInfo;
use roadwatch_api_models::{DetectionRecord, PLATE_NOT_RECOGNISED, Priority};

/// Whether a live telemetry/camera source is available.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectivityState {
    /// Source available; the simulated frame is shown.
    #[default]
    Connected,
    /// Source unavailable; the no-signal panel is shown.
    Disconnected,
    /// A bounded reconnect is running.
    Reconnecting {
        /// 1-based attempt currently in flight.
        attempt: u32,
    },
}

impl ConnectivityState {
    /// True only for [`ConnectivityState::Connected`].
    #[must_use]
    pub const fn is_connected(self) -> bool {
        matches!(self, Self::Connected)
    }

    /// Translation key for the header status text.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Connected => "status.connected",
            Self::Disconnected => "status.disconnected",
            Self::Reconnecting { .. } => "status.reconnecting",
        }
    }

    /// Status dot class.
    #[must_use]
    pub const fn status_class(self) -> &'static str {
        match self {
            Self::Connected => "status-success",
            Self::Disconnected => "status-error",
            Self::Reconnecting { .. } => "status-warning",
        }
    }
}

/// Exponential backoff (1s → 30s) between reconnect attempts.
#[must_use]
pub fn backoff_delay_ms(attempt: u32) -> u32 {
    let capped = attempt.min(5);
    let delay = 1_000u32.saturating_mul(2u32.saturating_pow(capped));
    delay.clamp(1_000, 30_000)
}

/// Bounded reconnect schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReconnectPolicy {
    /// Attempts before giving up.
    pub max_attempts: u32,
}

impl ReconnectPolicy {
    /// Delay to wait before the given 1-based attempt, or `None` once exhausted.
    /// The first attempt runs immediately.
    #[must_use]
    pub fn delay_before(self, attempt: u32) -> Option<u32> {
        if attempt == 0 || attempt > self.max_attempts {
            return None;
        }
        if attempt == 1 {
            return Some(0);
        }
        Some(backoff_delay_ms(attempt - 2))
    }
}

/// Detection box drawn over the simulated frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayBox {
    /// List key.
    pub key: String,
    /// `"{vehicle} [{PRIORITY}] | {plate}"`.
    pub label: String,
    /// Border colour keyed by priority.
    pub color: &'static str,
    /// Absolute position within the frame.
    pub style: String,
}

/// What the live feed card renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedView {
    /// Simulated frame with overlays and stream metadata.
    Live {
        /// Detection boxes.
        boxes: Vec<OverlayBox>,
        /// `"1920x1080"`.
        resolution: String,
        /// `"30 FPS"`.
        frame_rate: String,
    },
    /// No-signal panel with the reconnect action.
    NoSignal {
        /// Reconnect currently running.
        reconnecting: bool,
    },
}

// left, top, width, height (percent of the frame)
const BOX_SLOTS: [(u8, u8, u8, u8); 3] = [(8, 18, 30, 34), (52, 30, 34, 40), (24, 58, 24, 28)];

/// Select the feed view for the current state.
#[must_use]
pub fn feed_view(
    state: ConnectivityState,
    records: &[DetectionRecord],
    overlay_limit: usize,
    stream: &StreamInfo,
) -> FeedView {
    match state {
        ConnectivityState::Connected => FeedView::Live {
            boxes: records
                .iter()
                .take(overlay_limit)
                .enumerate()
                .map(|(index, record)| overlay_box(index, record))
                .collect(),
            resolution: stream.resolution_label(),
            frame_rate: stream.frame_rate_label(),
        },
        ConnectivityState::Disconnected => FeedView::NoSignal {
            reconnecting: false,
        },
        ConnectivityState::Reconnecting { .. } => FeedView::NoSignal { reconnecting: true },
    }
}

fn overlay_box(index: usize, record: &DetectionRecord) -> OverlayBox {
    let priority = record.priority_level().unwrap_or(Priority::Low);
    let color = priority_color(priority);
    let (left, top, width, height) = BOX_SLOTS[index % BOX_SLOTS.len()];
    OverlayBox {
        key: format!("{index}:{}", record.id),
        label: format!(
            "{} [{}] | {}",
            record.vehicle,
            priority,
            record.plate_text().unwrap_or(PLATE_NOT_RECOGNISED)
        ),
        color,
        style: format!(
            "left: {left}%; top: {top}%; width: {width}%; height: {height}%; border-color: {color};"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadwatch_api_models::DetectionId;

    fn record(vehicle: &str, priority: &str, plate: &str) -> DetectionRecord {
        DetectionRecord {
            id: DetectionId::Number(1),
            timestamp: "2025-11-05 14:30:15".to_string(),
            vehicle: vehicle.to_string(),
            priority: priority.to_string(),
            plate: plate.to_string(),
            confidence: 0.9,
        }
    }

    #[test]
    fn backoff_is_bounded() {
        assert_eq!(backoff_delay_ms(0), 1_000);
        assert_eq!(backoff_delay_ms(3), 8_000);
        assert_eq!(backoff_delay_ms(10), 30_000);
    }

    #[test]
    fn reconnect_policy_stops_after_max_attempts() {
        let policy = ReconnectPolicy { max_attempts: 3 };
        assert_eq!(policy.delay_before(1), Some(0));
        assert_eq!(policy.delay_before(2), Some(1_000));
        assert_eq!(policy.delay_before(3), Some(2_000));
        assert_eq!(policy.delay_before(4), None);
        assert_eq!(policy.delay_before(0), None);
    }

    #[test]
    fn connected_view_draws_boxes_keyed_by_priority() {
        let records = vec![
            record("car", "LOW", "ABC1234"),
            record("truck", "MEDIUM", "XYZ9876"),
            record("ambulance", "high", "N/A"),
            record("bus", "MEDIUM", "BUS456"),
        ];
        let view = feed_view(
            ConnectivityState::Connected,
            &records,
            3,
            &StreamInfo::default(),
        );
        let FeedView::Live {
            boxes,
            resolution,
            frame_rate,
        } = view
        else {
            panic!("expected live view");
        };
        assert_eq!(boxes.len(), 3);
        assert_eq!(boxes[0].label, "car [LOW] | ABC1234");
        assert_eq!(boxes[0].color, "#22c55e");
        assert_eq!(boxes[1].label, "truck [MEDIUM] | XYZ9876");
        assert_eq!(boxes[1].color, "#f97316");
        assert_eq!(boxes[2].label, "ambulance [HIGH] | N/A");
        assert_eq!(boxes[2].color, "#ef4444");
        assert!(boxes[2].style.ends_with("border-color: #ef4444;"));
        assert_eq!(resolution, "1920x1080");
        assert_eq!(frame_rate, "30 FPS");
    }

    #[test]
    fn unknown_priority_box_uses_low_colour() {
        let view = feed_view(
            ConnectivityState::Connected,
            &[record("van", "??", "V1")],
            3,
            &StreamInfo::default(),
        );
        let FeedView::Live { boxes, .. } = view else {
            panic!("expected live view");
        };
        assert_eq!(boxes[0].color, "#22c55e");
    }

    #[test]
    fn disconnected_states_show_no_signal() {
        let stream = StreamInfo::default();
        assert_eq!(
            feed_view(ConnectivityState::Disconnected, &[], 3, &stream),
            FeedView::NoSignal {
                reconnecting: false
            }
        );
        assert_eq!(
            feed_view(ConnectivityState::Reconnecting { attempt: 2 }, &[], 3, &stream),
            FeedView::NoSignal { reconnecting: true }
        );
        assert!(!ConnectivityState::Reconnecting { attempt: 1 }.is_connected());
        assert!(ConnectivityState::default().is_connected());
    }
}
