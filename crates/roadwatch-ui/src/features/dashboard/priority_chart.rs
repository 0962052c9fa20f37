//! Priority distribution card.

use crate::core::chart::{ChartBar, PriorityChartModel};
use crate::core::errors::StatsInconsistency;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use roadwatch_api_models::SummaryStats;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PriorityChartProps {
    pub stats: SummaryStats,
    #[prop_or_default]
    pub findings: Vec<StatsInconsistency>,
}

#[function_component(PriorityChart)]
pub(crate) fn priority_chart(props: &PriorityChartProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, default: &str| bundle.text(key, default);
    let model = use_memo(PriorityChartModel::from_stats, props.stats);

    let warning = if props.findings.is_empty() {
        html! {}
    } else {
        let detail = props
            .findings
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        html! {
            <span class="badge badge-warning chart-warning" title={detail}>
                {t("chart.inconsistent", "Counters do not add up")}
            </span>
        }
    };

    html! {
        <div class="card chart-card">
            <div class="card-header">
                <h3>{t("chart.title", "Priority Distribution")}</h3>
                {warning}
            </div>
            <div class="priority-chart">
                <div class="chart-bars">
                    {for model.bars.iter().map(|bar| chart_bar(bar, &bundle))}
                </div>
                <div class="chart-summary">
                    <div class="summary-item">
                        <span class="summary-label">{t("chart.total_vehicles", "Total Vehicles:")}</span>
                        <span class="summary-value">{model.total}</span>
                    </div>
                    <div class="summary-item">
                        <span class="summary-label">{t("chart.plates_detected", "Plates Detected:")}</span>
                        <span class="summary-value">{model.plates_summary()}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn chart_bar(bar: &ChartBar, bundle: &TranslationBundle) -> Html {
    html! {
        <div class="chart-item" key={bar.priority.as_str()}>
            <div class="chart-label">
                <span class="chart-label-text">{bundle.text(bar.label_key(), bar.priority.as_str())}</span>
                <span class="chart-value">{bar.value}</span>
            </div>
            <div class="chart-bar-container">
                <div class="chart-bar" style={bar.style()}>
                    <span class="chart-percentage">{bar.percentage_label()}</span>
                </div>
            </div>
        </div>
    }
}
