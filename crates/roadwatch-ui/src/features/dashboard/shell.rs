//! Header with title, connectivity and the refresh/export actions.

use crate::components::connectivity::ConnectivityIndicator;
use crate::core::store::{ExportStatus, SystemState};
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DashboardShellProps {
    pub system: SystemState,
    pub locale: LocaleCode,
    pub on_refresh: Callback<MouseEvent>,
    pub on_export: Callback<MouseEvent>,
    pub on_locale: Callback<LocaleCode>,
    pub children: Children,
}

#[function_component(DashboardShell)]
pub(crate) fn dashboard_shell(props: &DashboardShellProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, default: &str| bundle.text(key, default);
    let refresh_busy = props.system.refresh_busy;
    let export = &props.system.export;

    let refresh_label = if refresh_busy {
        t("actions.refreshing", "Refreshing…")
    } else {
        t("actions.refresh", "Refresh")
    };
    let export_label = if export.is_pending() {
        t("actions.exporting", "Exporting…")
    } else {
        t("actions.export", "Export")
    };
    let export_note = match export {
        ExportStatus::Failed { message } => html! {
            <span class="badge badge-error export-status" title={message.clone()}>
                {t("actions.export_failed", "Export failed")}
            </span>
        },
        ExportStatus::Ready { filename } => html! {
            <span class="badge badge-ghost export-status">{filename.clone()}</span>
        },
        ExportStatus::Idle | ExportStatus::Pending => html! {},
    };

    html! {
        <div class="dashboard">
            <header class="dashboard-header">
                <div class="header-content">
                    <div class="header-left">
                        <span class="header-icon" aria-hidden="true">{"🚗"}</span>
                        <div>
                            <h1>{t("header.title", "Vehicle Detection Dashboard")}</h1>
                            <p class="subtitle">{t("header.subtitle", "")}</p>
                        </div>
                    </div>
                    <div class="header-right">
                        <ConnectivityIndicator state={props.system.connectivity} />
                        <div class="locale-switch join">
                            {for LocaleCode::all().into_iter().map(|locale| locale_button(locale, props.locale, &props.on_locale))}
                        </div>
                        <button
                            class="btn btn-secondary"
                            disabled={refresh_busy}
                            onclick={props.on_refresh.clone()}
                        >
                            {refresh_label}
                        </button>
                        <button
                            class="btn btn-primary"
                            disabled={export.is_pending()}
                            onclick={props.on_export.clone()}
                        >
                            {export_label}
                        </button>
                        {export_note}
                    </div>
                </div>
            </header>
            <main class="dashboard-content">
                {for props.children.iter()}
            </main>
        </div>
    }
}

fn locale_button(locale: LocaleCode, active: LocaleCode, on_locale: &Callback<LocaleCode>) -> Html {
    let onclick = {
        let on_locale = on_locale.clone();
        Callback::from(move |_: MouseEvent| on_locale.emit(locale))
    };
    html! {
        <button
            class={classes!("btn", "btn-xs", "join-item", (locale == active).then_some("btn-active"))}
            title={locale.label()}
            {onclick}
        >
            {locale.code().to_ascii_uppercase()}
        </button>
    }
}
