use crate::core::stats::{StatCard, StatKind, summary_cards};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use roadwatch_api_models::SummaryStats;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DashboardStatsCardsProps {
    pub stats: SummaryStats,
    #[prop_or_default]
    pub previous: Option<SummaryStats>,
}

#[function_component(DashboardStatsCards)]
pub(crate) fn dashboard_stats_cards(props: &DashboardStatsCardsProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let cards = summary_cards(&props.stats, props.previous.as_ref());

    html! {
        <div class="stats-grid">
            {for cards.iter().map(|card| stat_card(card, &bundle))}
        </div>
    }
}

fn stat_card(card: &StatCard, bundle: &TranslationBundle) -> Html {
    let trend_class = match card.trend.as_deref() {
        Some(trend) if trend.starts_with('-') => "stat-trend trend-down",
        _ => "stat-trend",
    };
    html! {
        <div class={classes!("stat-card", format!("stat-{}", card.kind.tone()))}>
            <div class="stat-icon" aria-hidden="true">{stat_icon(card.kind)}</div>
            <div class="stat-content">
                <p class="stat-label">{bundle.text(card.kind.label_key(), "")}</p>
                <h2 class="stat-value">{card.value}</h2>
                {card.trend.clone().map(|trend| html! {
                    <span class={trend_class}>{trend}</span>
                }).unwrap_or_default()}
            </div>
        </div>
    }
}

const fn stat_icon(kind: StatKind) -> &'static str {
    match kind {
        StatKind::Total => "🚗",
        StatKind::High => "⚠️",
        StatKind::Medium => "📈",
        StatKind::Plates => "🪪",
    }
}
