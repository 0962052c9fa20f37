//! Derived statistics for the summary cards and priority chart.
//!
//! # Design
//! - Pure functions over an immutable [`SummaryStats`] snapshot.
//! - Chart math uses the bucket sum as its only denominator; the plate ratio
//!   uses `totalDetections`. Disagreement between the two is reported through
//!   [`consistency_findings`] instead of being unified silently.
//! - Integer arithmetic with half-up rounding so results are deterministic.

use crate::core::errors::StatsInconsistency;
use roadwatch_api_models::{Priority, SummaryStats};

/// Priority buckets plus the denominators used by the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriorityBreakdown {
    /// HIGH bucket.
    pub high: u64,
    /// MEDIUM bucket.
    pub medium: u64,
    /// LOW bucket.
    pub low: u64,
    /// `high + medium + low`.
    pub total: u64,
    /// Largest bucket, used to normalise bar widths.
    pub max: u64,
}

impl PriorityBreakdown {
    /// Aggregate the buckets of a stats snapshot.
    #[must_use]
    pub fn from_stats(stats: &SummaryStats) -> Self {
        let (high, medium, low) = (
            stats.high_priority,
            stats.medium_priority,
            stats.low_priority,
        );
        Self {
            high,
            medium,
            low,
            total: stats.priority_sum(),
            max: high.max(medium).max(low),
        }
    }

    /// Count for a bucket.
    #[must_use]
    pub const fn count(&self, priority: Priority) -> u64 {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }

    /// Share of the bucket total, rounded to one decimal. `0` when the total is `0`.
    #[must_use]
    pub fn percentage(&self, priority: Priority) -> f64 {
        let Some(tenths) = ratio_rounded(self.count(priority), self.total, 1_000) else {
            return 0.0;
        };
        scaled_to_f64(tenths) / 10.0
    }

    /// Bar width in percent of the largest bucket, unrounded.
    /// `0` when every bucket is empty.
    #[must_use]
    pub fn bar_width(&self, priority: Priority) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        count_to_f64(self.count(priority)) / count_to_f64(self.max) * 100.0
    }
}

/// Plates detected as a whole percentage of `totalDetections`.
///
/// Returns `None` when `totalDetections` is `0`; callers display that as `0%`.
#[must_use]
pub fn plates_ratio(stats: &SummaryStats) -> Option<u64> {
    ratio_rounded(stats.with_plates, stats.total_detections, 100)
}

/// Check the counters against each other and against the recent-record count.
#[must_use]
pub fn consistency_findings(stats: &SummaryStats, record_count: usize) -> Vec<StatsInconsistency> {
    let mut findings = Vec::new();
    let total = stats.total_detections;
    let bucket_sum = stats.priority_sum();
    if bucket_sum != total {
        findings.push(StatsInconsistency::PriorityMismatch { bucket_sum, total });
    }
    let plate_sum = stats.plate_sum();
    if plate_sum != total {
        findings.push(StatsInconsistency::PlateMismatch { plate_sum, total });
    }
    let records = u64::try_from(record_count).unwrap_or(u64::MAX);
    if records > total {
        findings.push(StatsInconsistency::RecordsExceedTotal { records, total });
    }
    findings
}

/// Summary card slots in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatKind {
    /// Total detections.
    Total,
    /// HIGH priority detections.
    High,
    /// MEDIUM priority detections.
    Medium,
    /// Detections with a recognised plate.
    Plates,
}

impl StatKind {
    /// All cards in display order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Total, Self::High, Self::Medium, Self::Plates]
    }

    /// Translation key for the card title.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Total => "stats.total",
            Self::High => "stats.high",
            Self::Medium => "stats.medium",
            Self::Plates => "stats.plates",
        }
    }

    /// Colour tone class suffix.
    #[must_use]
    pub const fn tone(self) -> &'static str {
        match self {
            Self::Total => "blue",
            Self::High => "red",
            Self::Medium => "orange",
            Self::Plates => "green",
        }
    }
}

/// One summary card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    /// Which counter the card shows.
    pub kind: StatKind,
    /// Current value.
    pub value: u64,
    /// Trend badge text, absent when there is nothing to compare against.
    pub trend: Option<String>,
}

/// Build the four summary cards, comparing against the previous snapshot when known.
#[must_use]
pub fn summary_cards(stats: &SummaryStats, previous: Option<&SummaryStats>) -> [StatCard; 4] {
    StatKind::all().map(|kind| {
        let (value, trend) = match kind {
            StatKind::Total => (
                stats.total_detections,
                previous.and_then(|prev| {
                    relative_change_label(prev.total_detections, stats.total_detections)
                }),
            ),
            StatKind::High => (
                stats.high_priority,
                previous.map(|prev| absolute_change_label(prev.high_priority, stats.high_priority)),
            ),
            StatKind::Medium => (
                stats.medium_priority,
                previous.and_then(|prev| {
                    relative_change_label(prev.medium_priority, stats.medium_priority)
                }),
            ),
            StatKind::Plates => (
                stats.with_plates,
                Some(format!("{}%", plates_ratio(stats).unwrap_or(0))),
            ),
        };
        StatCard { kind, value, trend }
    })
}

/// Signed whole-percent change, `None` when the previous value was `0`.
#[must_use]
pub fn relative_change_label(previous: u64, current: u64) -> Option<String> {
    if previous == 0 {
        return None;
    }
    let sign = if current < previous { '-' } else { '+' };
    let percent = ratio_rounded(current.abs_diff(previous), previous, 100).unwrap_or(0);
    Some(format!("{sign}{percent}%"))
}

/// Signed absolute change.
#[must_use]
pub fn absolute_change_label(previous: u64, current: u64) -> String {
    let delta = current.abs_diff(previous);
    if current < previous {
        format!("-{delta}")
    } else {
        format!("+{delta}")
    }
}

/// `round(numerator / denominator * scale)`, half-up; `None` for a zero denominator.
fn ratio_rounded(numerator: u64, denominator: u64, scale: u64) -> Option<u64> {
    if denominator == 0 {
        return None;
    }
    let numerator = u128::from(numerator) * u128::from(scale);
    let denominator = u128::from(denominator);
    let rounded = (numerator * 2 + denominator) / (denominator * 2);
    Some(u64::try_from(rounded).unwrap_or(u64::MAX))
}

#[allow(clippy::cast_precision_loss)]
const fn count_to_f64(value: u64) -> f64 {
    value as f64
}

fn scaled_to_f64(value: u64) -> f64 {
    f64::from(u32::try_from(value).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(high: u64, medium: u64, low: u64) -> SummaryStats {
        SummaryStats {
            total_detections: high + medium + low,
            high_priority: high,
            medium_priority: medium,
            low_priority: low,
            with_plates: 0,
            without_plates: high + medium + low,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.051
    }

    #[test]
    fn empty_buckets_yield_zero_everywhere() {
        let breakdown = PriorityBreakdown::from_stats(&stats(0, 0, 0));
        for priority in Priority::all() {
            assert_eq!(breakdown.percentage(priority), 0.0);
            assert_eq!(breakdown.bar_width(priority), 0.0);
        }
    }

    #[test]
    fn demo_buckets_match_expected_shares() {
        let breakdown = PriorityBreakdown::from_stats(&stats(12, 45, 90));
        assert_eq!(breakdown.total, 147);
        assert_eq!(breakdown.max, 90);
        assert!(close(breakdown.percentage(Priority::High), 8.2));
        assert!(close(breakdown.percentage(Priority::Medium), 30.6));
        assert!(close(breakdown.percentage(Priority::Low), 61.2));
        assert!(close(breakdown.bar_width(Priority::High), 13.3));
        assert!(close(breakdown.bar_width(Priority::Medium), 50.0));
        assert!(close(breakdown.bar_width(Priority::Low), 100.0));
    }

    #[test]
    fn percentages_sum_to_roughly_one_hundred() {
        for (high, medium, low) in [(1, 1, 1), (12, 45, 90), (0, 0, 7), (3, 997, 1), (5, 5, 0)] {
            let breakdown = PriorityBreakdown::from_stats(&stats(high, medium, low));
            let sum: f64 = Priority::all()
                .into_iter()
                .map(|priority| breakdown.percentage(priority))
                .sum();
            assert!((sum - 100.0).abs() <= 0.15, "sum {sum} for {high}/{medium}/{low}");
        }
    }

    #[test]
    fn bar_width_keeps_full_precision() {
        let breakdown = PriorityBreakdown::from_stats(&stats(12, 45, 90));
        let expected = 12.0 / 90.0 * 100.0;
        assert!((breakdown.bar_width(Priority::High) - expected).abs() < 1e-9);
        assert!(breakdown.bar_width(Priority::High) > 13.33);
    }

    #[test]
    fn bar_width_uses_max_not_total() {
        let breakdown = PriorityBreakdown::from_stats(&stats(50, 50, 0));
        assert!(close(breakdown.bar_width(Priority::High), 100.0));
        assert!(close(breakdown.percentage(Priority::High), 50.0));
        assert_eq!(breakdown.bar_width(Priority::Low), 0.0);
    }

    #[test]
    fn chart_denominator_ignores_reported_total() {
        let mut inconsistent = stats(10, 10, 10);
        inconsistent.total_detections = 60;
        let breakdown = PriorityBreakdown::from_stats(&inconsistent);
        assert_eq!(breakdown.total, 30);
        assert!(close(breakdown.percentage(Priority::High), 33.3));
    }

    #[test]
    fn plates_ratio_rounds_to_whole_percent() {
        let mut sample = stats(12, 45, 90);
        sample.with_plates = 98;
        sample.without_plates = 49;
        assert_eq!(plates_ratio(&sample), Some(67));
    }

    #[test]
    fn plates_ratio_is_guarded_for_empty_total() {
        let mut empty = stats(0, 0, 0);
        empty.with_plates = 4;
        assert_eq!(plates_ratio(&empty), None);
    }

    #[test]
    fn consistent_stats_have_no_findings() {
        let mut sample = stats(12, 45, 90);
        sample.with_plates = 98;
        sample.without_plates = 49;
        assert!(consistency_findings(&sample, 5).is_empty());
    }

    #[test]
    fn inconsistent_stats_report_every_mismatch() {
        let broken = SummaryStats {
            total_detections: 2,
            high_priority: 1,
            medium_priority: 1,
            low_priority: 1,
            with_plates: 1,
            without_plates: 0,
        };
        let findings = consistency_findings(&broken, 4);
        assert_eq!(
            findings,
            vec![
                StatsInconsistency::PriorityMismatch {
                    bucket_sum: 3,
                    total: 2
                },
                StatsInconsistency::PlateMismatch {
                    plate_sum: 1,
                    total: 2
                },
                StatsInconsistency::RecordsExceedTotal {
                    records: 4,
                    total: 2
                },
            ]
        );
        assert_eq!(consistency_findings(&broken, 0).len(), 2);
    }

    #[test]
    fn trend_labels_are_signed() {
        assert_eq!(relative_change_label(100, 112).as_deref(), Some("+12%"));
        assert_eq!(relative_change_label(50, 40).as_deref(), Some("-20%"));
        assert_eq!(relative_change_label(0, 40), None);
        assert_eq!(absolute_change_label(9, 12), "+3");
        assert_eq!(absolute_change_label(12, 9), "-3");
        assert_eq!(absolute_change_label(4, 4), "+0");
    }

    #[test]
    fn summary_cards_without_history_only_show_plate_ratio() {
        let mut sample = stats(12, 45, 90);
        sample.with_plates = 98;
        sample.without_plates = 49;
        let cards = summary_cards(&sample, None);
        assert_eq!(cards[0].value, 147);
        assert_eq!(cards[0].trend, None);
        assert_eq!(cards[1].trend, None);
        assert_eq!(cards[3].kind, StatKind::Plates);
        assert_eq!(cards[3].value, 98);
        assert_eq!(cards[3].trend.as_deref(), Some("67%"));
    }

    #[test]
    fn summary_cards_compare_against_previous() {
        let previous = stats(9, 40, 82);
        let current = stats(12, 45, 90);
        let cards = summary_cards(&current, Some(&previous));
        assert_eq!(cards[0].trend.as_deref(), Some("+12%"));
        assert_eq!(cards[1].trend.as_deref(), Some("+3"));
        assert_eq!(cards[2].trend.as_deref(), Some("+13%"));
    }
}
