use crate::app::api::ApiCtx;
use crate::components::toast::ToastHost;
use crate::core::connectivity::ReconnectPolicy;
use crate::core::demo::demo_snapshot;
use crate::core::errors::StatsInconsistency;
use crate::core::export::export_filename;
use crate::core::store::{
    AppStore, abandon_reconnect, apply_snapshot, begin_export, begin_reconnect_attempt,
    begin_refresh, dismiss, finish_export, finish_refresh_err, finish_refresh_ok, notify,
    record_tick,
};
use crate::core::ui::ToastKind;
use crate::features::dashboard::DashboardPage;
use crate::i18n::{LocaleCode, TranslationBundle};
use gloo::console;
use gloo::file::ObjectUrl;
use gloo::timers::callback::Interval;
use gloo::utils::window;
use gloo_timers::future::TimeoutFuture;
use js_sys::Date;
use preferences::{load_config, load_locale, persist_locale};
use web_sys::AbortController;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod api;
mod export;
mod preferences;

#[function_component(RoadwatchApp)]
pub(crate) fn roadwatch_app() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let config = use_memo(|_| load_config(), ());
    let api_ctx = {
        let config = config.clone();
        use_memo(move |_| ApiCtx::new(&config), ())
    };
    let locale = use_state(load_locale);
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };
    let tick = use_mut_ref(|| None as Option<Interval>);
    let reconnect = use_mut_ref(|| None as Option<AbortController>);
    let export_url = use_mut_ref(|| None as Option<ObjectUrl>);

    let dashboard = use_selector(|store: &AppStore| store.dashboard.clone());
    let system = use_selector(|store: &AppStore| store.system.clone());
    let toasts = use_selector(|store: &AppStore| store.toasts.items.clone());

    {
        let dispatch = dispatch.clone();
        let config = config.clone();
        let tick = tick.clone();
        let reconnect = reconnect.clone();
        let export_url = export_url.clone();
        use_effect_with_deps(
            move |_| {
                let limit = config.recent_limit;
                dispatch.reduce_mut(|store| {
                    log_findings(&apply_snapshot(store, demo_snapshot(), limit, Date::now()));
                });
                let interval = {
                    let dispatch = dispatch.clone();
                    Interval::new(config.tick_interval_ms, move || {
                        dispatch.reduce_mut(|store| record_tick(store, Date::now()));
                    })
                };
                *tick.borrow_mut() = Some(interval);
                move || {
                    tick.borrow_mut().take();
                    if let Some(controller) = reconnect.borrow_mut().take() {
                        controller.abort();
                    }
                    export_url.borrow_mut().take();
                }
            },
            (),
        );
    }
    {
        let locale = *locale;
        use_effect_with_deps(
            move |locale| {
                if let Some(root) = window().document().and_then(|doc| doc.document_element()) {
                    let _ = root.set_attribute("lang", locale.code());
                }
                || ()
            },
            locale,
        );
    }

    let on_refresh = {
        let dispatch = dispatch.clone();
        let api_ctx = (*api_ctx).clone();
        let config = config.clone();
        let bundle = (*bundle).clone();
        let reconnect = reconnect.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(begin_refresh);
            let dispatch = dispatch.clone();
            let client = api_ctx.client.clone();
            let limit = config.recent_limit;
            let bundle = bundle.clone();
            let reconnect = reconnect.clone();
            yew::platform::spawn_local(async move {
                match client.fetch_snapshot(None).await {
                    Ok(snapshot) => {
                        if let Some(controller) = reconnect.borrow_mut().take() {
                            controller.abort();
                        }
                        dispatch.reduce_mut(|store| {
                            log_findings(&finish_refresh_ok(store, snapshot, limit, Date::now()));
                        });
                    }
                    Err(err) => {
                        console::error!("dashboard refresh failed", err.to_string());
                        let message =
                            format!("{}: {err}", bundle.text("toast.refresh_failed", "Refresh failed"));
                        dispatch.reduce_mut(|store| {
                            finish_refresh_err(store);
                            notify(store, ToastKind::Error, message, Date::now());
                        });
                    }
                }
            });
        })
    };

    let on_export = {
        let dispatch = dispatch.clone();
        let api_ctx = (*api_ctx).clone();
        let bundle = (*bundle).clone();
        let export_url = export_url.clone();
        Callback::from(move |_: MouseEvent| {
            let mut started = false;
            dispatch.reduce_mut(|store| started = begin_export(store));
            if !started {
                return;
            }
            let dispatch = dispatch.clone();
            let client = api_ctx.client.clone();
            let bundle = bundle.clone();
            let export_url = export_url.clone();
            yew::platform::spawn_local(async move {
                let outcome = match client.fetch_export().await {
                    Ok(artifact) => {
                        let filename = export_filename(now_epoch_ms(), local_offset_minutes());
                        export::open_artifact(&artifact, &filename, &export_url).map(|()| filename)
                    }
                    Err(err) => Err(err),
                };
                let (kind, message) = match &outcome {
                    Ok(filename) => (
                        ToastKind::Success,
                        format!("{}: {filename}", bundle.text("toast.export_ready", "Export opened")),
                    ),
                    Err(err) => {
                        console::error!("export failed", err.to_string());
                        (
                            ToastKind::Error,
                            format!(
                                "{}: {err}",
                                bundle.text("toast.export_failed", "Failed to export data")
                            ),
                        )
                    }
                };
                dispatch.reduce_mut(|store| {
                    finish_export(store, outcome);
                    notify(store, kind, message, Date::now());
                });
            });
        })
    };

    let on_reconnect = {
        let dispatch = dispatch.clone();
        let api_ctx = (*api_ctx).clone();
        let config = config.clone();
        let bundle = (*bundle).clone();
        let reconnect = reconnect.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(previous) = reconnect.borrow_mut().take() {
                previous.abort();
            }
            let controller = match AbortController::new() {
                Ok(controller) => controller,
                Err(err) => {
                    console::error!("abort controller unavailable", err);
                    return;
                }
            };
            let signal = controller.signal();
            *reconnect.borrow_mut() = Some(controller);
            let dispatch = dispatch.clone();
            let client = api_ctx.client.clone();
            let policy = ReconnectPolicy {
                max_attempts: config.reconnect_attempts,
            };
            let limit = config.recent_limit;
            let bundle = bundle.clone();
            yew::platform::spawn_local(async move {
                let mut attempt = 1;
                while let Some(delay) = policy.delay_before(attempt) {
                    if delay > 0 {
                        TimeoutFuture::new(delay).await;
                    }
                    if signal.aborted() {
                        return;
                    }
                    let mut started = false;
                    dispatch.reduce_mut(|store| started = begin_reconnect_attempt(store, attempt));
                    if !started {
                        return;
                    }
                    match client.fetch_snapshot(Some(&signal)).await {
                        Ok(snapshot) => {
                            let message = bundle.text("toast.reconnected", "Camera reconnected");
                            dispatch.reduce_mut(|store| {
                                log_findings(&finish_refresh_ok(store, snapshot, limit, Date::now()));
                                notify(store, ToastKind::Success, message, Date::now());
                            });
                            return;
                        }
                        Err(err) => {
                            console::warn!("reconnect attempt failed", attempt, err.to_string());
                        }
                    }
                    attempt += 1;
                }
                if signal.aborted() {
                    return;
                }
                let message = bundle.text("toast.reconnect_failed", "Camera still unreachable");
                dispatch.reduce_mut(|store| {
                    if abandon_reconnect(store) {
                        notify(store, ToastKind::Error, message, Date::now());
                    }
                });
            });
        })
    };

    let on_locale = {
        let locale = locale.clone();
        Callback::from(move |next: LocaleCode| {
            persist_locale(next);
            locale.set(next);
        })
    };

    let dismiss_toast = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: u64| dispatch.reduce_mut(|store| dismiss(store, id)))
    };

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <DashboardPage
                dashboard={(*dashboard).clone()}
                system={(*system).clone()}
                stream={config.stream.clone()}
                overlay_limit={config.overlay_limit}
                locale={*locale}
                {on_refresh}
                {on_export}
                {on_reconnect}
                {on_locale}
            />
            <ToastHost toasts={(*toasts).clone()} on_dismiss={dismiss_toast} />
        </ContextProvider<TranslationBundle>>
    }
}

fn log_findings(findings: &[StatsInconsistency]) {
    for finding in findings {
        console::warn!("inconsistent dashboard counters", finding.to_string());
    }
}

#[allow(clippy::cast_possible_truncation)]
fn now_epoch_ms() -> i64 {
    Date::now() as i64
}

/// Minutes east of UTC for the viewer's zone.
#[allow(clippy::cast_possible_truncation)]
fn local_offset_minutes() -> i32 {
    -(Date::new_0().get_timezone_offset() as i32)
}

/// Start the Yew application.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<RoadwatchApp>::with_root(root).render();
    } else {
        yew::Renderer::<RoadwatchApp>::new().render();
    }
}
