use crate::core::config::StreamInfo;
use crate::core::store::{DashboardState, SystemState};
use crate::i18n::LocaleCode;
use yew::prelude::*;

use super::footer::DashboardFooter;
use super::live_feed::LiveFeed;
use super::priority_chart::PriorityChart;
use super::recent_detections::RecentDetections;
use super::shell::DashboardShell;
use super::stats_cards::DashboardStatsCards;

#[derive(Properties, PartialEq)]
pub(crate) struct DashboardPageProps {
    pub dashboard: DashboardState,
    pub system: SystemState,
    pub stream: StreamInfo,
    pub overlay_limit: usize,
    pub locale: LocaleCode,
    pub on_refresh: Callback<MouseEvent>,
    pub on_export: Callback<MouseEvent>,
    pub on_reconnect: Callback<MouseEvent>,
    pub on_locale: Callback<LocaleCode>,
}

#[function_component(DashboardPage)]
pub(crate) fn dashboard_page(props: &DashboardPageProps) -> Html {
    let dashboard = &props.dashboard;
    html! {
        <DashboardShell
            system={props.system.clone()}
            locale={props.locale}
            on_refresh={props.on_refresh.clone()}
            on_export={props.on_export.clone()}
            on_locale={props.on_locale.clone()}
        >
            <DashboardStatsCards
                stats={dashboard.stats}
                previous={dashboard.previous_stats}
            />
            <div class="dashboard-grid">
                <PriorityChart
                    stats={dashboard.stats}
                    findings={dashboard.findings.clone()}
                />
                <RecentDetections detections={dashboard.detections.clone()} />
            </div>
            <LiveFeed
                state={props.system.connectivity}
                detections={dashboard.detections.clone()}
                overlay_limit={props.overlay_limit}
                stream={props.stream.clone()}
                on_reconnect={props.on_reconnect.clone()}
            />
            <DashboardFooter last_update_ms={dashboard.last_update_ms} />
        </DashboardShell>
    }
}
