//! Priority distribution chart model.
//!
//! Bar width compares buckets with each other (normalised by the largest
//! bucket) while the label states the share of the whole (normalised by the
//! bucket total). The two are kept as separate fields.

use crate::core::stats::PriorityBreakdown;
use roadwatch_api_models::{Priority, SummaryStats};

/// Display colour for a priority bucket.
#[must_use]
pub const fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "#ef4444",
        Priority::Medium => "#f97316",
        Priority::Low => "#22c55e",
    }
}

/// One horizontal bar.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartBar {
    /// Bucket shown by the bar.
    pub priority: Priority,
    /// Raw count.
    pub value: u64,
    /// Width in percent of the widest bar, unrounded.
    pub width: f64,
    /// Share of the bucket total, one decimal.
    pub percentage: f64,
    /// Bar colour.
    pub color: &'static str,
    has_total: bool,
}

impl ChartBar {
    /// Percentage label; an empty chart reads `0%`.
    #[must_use]
    pub fn percentage_label(&self) -> String {
        if self.has_total {
            format!("{:.1}%", self.percentage)
        } else {
            "0%".to_string()
        }
    }

    /// Inline style for the bar element, width rounded to two decimals.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "width: {:.2}%; background-color: {};",
            self.width, self.color
        )
    }

    /// Translation key for the bucket label.
    #[must_use]
    pub const fn label_key(&self) -> &'static str {
        match self.priority {
            Priority::High => "chart.high",
            Priority::Medium => "chart.medium",
            Priority::Low => "chart.low",
        }
    }
}

/// Full chart: three bars plus the summary footer.
#[derive(Clone, Debug, PartialEq)]
pub struct PriorityChartModel {
    /// Bars in HIGH, MEDIUM, LOW order.
    pub bars: [ChartBar; 3],
    /// Bucket total shown as "Total Vehicles".
    pub total: u64,
    /// Plates recognised.
    pub with_plates: u64,
    /// Reported detection total.
    pub total_detections: u64,
}

impl PriorityChartModel {
    /// Build the chart from a stats snapshot.
    #[must_use]
    pub fn from_stats(stats: &SummaryStats) -> Self {
        let breakdown = PriorityBreakdown::from_stats(stats);
        let bars = Priority::all().map(|priority| ChartBar {
            priority,
            value: breakdown.count(priority),
            width: breakdown.bar_width(priority),
            percentage: breakdown.percentage(priority),
            color: priority_color(priority),
            has_total: breakdown.total > 0,
        });
        Self {
            bars,
            total: breakdown.total,
            with_plates: stats.with_plates,
            total_detections: stats.total_detections,
        }
    }

    /// `withPlates / totalDetections` footer text.
    #[must_use]
    pub fn plates_summary(&self) -> String {
        format!("{} / {}", self.with_plates, self.total_detections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SummaryStats {
        SummaryStats {
            total_detections: 147,
            high_priority: 12,
            medium_priority: 45,
            low_priority: 90,
            with_plates: 98,
            without_plates: 49,
        }
    }

    #[test]
    fn bars_follow_fixed_order_and_colours() {
        let chart = PriorityChartModel::from_stats(&sample());
        let order: Vec<_> = chart.bars.iter().map(|bar| bar.priority).collect();
        assert_eq!(order, vec![Priority::High, Priority::Medium, Priority::Low]);
        assert_eq!(chart.bars[0].color, "#ef4444");
        assert_eq!(chart.bars[1].color, "#f97316");
        assert_eq!(chart.bars[2].color, "#22c55e");
    }

    #[test]
    fn labels_and_widths_use_different_denominators() {
        let chart = PriorityChartModel::from_stats(&sample());
        assert_eq!(chart.bars[0].percentage_label(), "8.2%");
        assert_eq!(chart.bars[1].percentage_label(), "30.6%");
        assert_eq!(chart.bars[2].percentage_label(), "61.2%");
        assert_eq!(
            chart.bars[0].style(),
            "width: 13.33%; background-color: #ef4444;"
        );
        assert_eq!(
            chart.bars[2].style(),
            "width: 100.00%; background-color: #22c55e;"
        );
        assert_eq!(chart.total, 147);
        assert_eq!(chart.plates_summary(), "98 / 147");
    }

    #[test]
    fn empty_chart_reads_zero() {
        let chart = PriorityChartModel::from_stats(&SummaryStats::default());
        for bar in &chart.bars {
            assert_eq!(bar.percentage_label(), "0%");
            assert_eq!(bar.width, 0.0);
        }
        assert_eq!(chart.plates_summary(), "0 / 0");
    }
}
