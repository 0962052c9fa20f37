use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use js_sys::Date;
use wasm_bindgen::JsValue;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DashboardFooterProps {
    pub last_update_ms: Option<f64>,
}

#[function_component(DashboardFooter)]
pub(crate) fn dashboard_footer(props: &DashboardFooterProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let stamp = props.last_update_ms.map_or_else(
        || bundle.text("footer.never", "Never"),
        |ms| local_time(ms, bundle.locale.code()),
    );

    html! {
        <footer class="dashboard-footer">
            <p>{format!("{} {stamp}", bundle.text("footer.last_updated", "Last updated:"))}</p>
            <p>{bundle.text("footer.copyright", "")}</p>
        </footer>
    }
}

fn local_time(epoch_ms: f64, locale: &str) -> String {
    Date::new(&JsValue::from_f64(epoch_ms))
        .to_locale_string(locale, &JsValue::UNDEFINED)
        .into()
}
