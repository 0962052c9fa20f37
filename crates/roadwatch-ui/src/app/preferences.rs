//! Persistence and environment helpers for the app shell.

use crate::core::config::{DEFAULT_API_BASE_URL, DashboardConfig, origin_for_location};
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use web_sys::Url;

pub(crate) const LOCALE_KEY: &str = "roadwatch.locale";
const API_URL_META: &str = "roadwatch:api-url";

pub(crate) fn load_config() -> DashboardConfig {
    let config = DashboardConfig::with_api_base_url(&api_base_url());
    console::log!("roadwatch backend", config.api_base_url.clone());
    config
}

pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(value) = LocalStorage::get::<String>(LOCALE_KEY) {
        if let Some(locale) = LocaleCode::from_lang_tag(&value) {
            return locale;
        }
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    if let Err(err) = LocalStorage::set(LOCALE_KEY, locale.code()) {
        log_storage_error("set", LOCALE_KEY, &err.to_string());
    }
}

fn api_base_url() -> String {
    if let Some(value) = meta_api_url() {
        return value;
    }
    let url = window()
        .location()
        .href()
        .ok()
        .and_then(|href| Url::new(&href).ok());
    if let Some(url) = url {
        return origin_for_location(&url.protocol(), &url.hostname(), &url.port());
    }
    DEFAULT_API_BASE_URL.to_string()
}

fn meta_api_url() -> Option<String> {
    let document = window().document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{API_URL_META}\"]"))
        .ok()??;
    let content = element.get_attribute("content")?;
    let trimmed = content.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
