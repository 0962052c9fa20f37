//! Live camera card: simulated frame when connected, no-signal panel otherwise.

use crate::core::config::StreamInfo;
use crate::core::connectivity::{ConnectivityState, FeedView, OverlayBox, feed_view};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use roadwatch_api_models::DetectionRecord;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LiveFeedProps {
    pub state: ConnectivityState,
    pub detections: Vec<DetectionRecord>,
    pub overlay_limit: usize,
    pub stream: StreamInfo,
    pub on_reconnect: Callback<MouseEvent>,
}

#[function_component(LiveFeed)]
pub(crate) fn live_feed(props: &LiveFeedProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, default: &str| bundle.text(key, default);

    let content = match feed_view(
        props.state,
        &props.detections,
        props.overlay_limit,
        &props.stream,
    ) {
        FeedView::Live {
            boxes,
            resolution,
            frame_rate,
        } => html! {
            <div class="video-placeholder">
                <div class="video-frame">
                    <div class="video-overlay">
                        {for boxes.iter().map(overlay_box)}
                    </div>
                    <div class="video-info">
                        <span>{format!("🟢 {}", t("feed.live", "Live"))}</span>
                        <span>{resolution}</span>
                        <span>{frame_rate}</span>
                    </div>
                </div>
                <p class="feed-note">{t("feed.note", "")}</p>
            </div>
        },
        FeedView::NoSignal { reconnecting } => html! {
            <div class="disconnected-state">
                <span class="no-signal-icon" aria-hidden="true">{"📡"}</span>
                <p>{t("feed.disconnected", "Camera disconnected")}</p>
                <button
                    class="btn btn-primary"
                    disabled={reconnecting}
                    onclick={props.on_reconnect.clone()}
                >
                    {if reconnecting {
                        html! {
                            <>
                                <span class="loading loading-spinner loading-xs"></span>
                                {t("feed.reconnecting", "Reconnecting…")}
                            </>
                        }
                    } else {
                        html! { {t("feed.connect", "Connect Camera")} }
                    }}
                </button>
            </div>
        },
    };

    html! {
        <div class="card live-feed-card">
            <div class="card-header">
                <h3>{t("feed.title", "Live Camera Feed")}</h3>
            </div>
            <div class="live-feed-content">
                {content}
            </div>
        </div>
    }
}

fn overlay_box(overlay: &OverlayBox) -> Html {
    html! {
        <div class="detection-box" key={overlay.key.clone()} style={overlay.style.clone()}>
            <span class="detection-label" style={format!("background-color: {};", overlay.color)}>
                {overlay.label.clone()}
            </span>
        </div>
    }
}
