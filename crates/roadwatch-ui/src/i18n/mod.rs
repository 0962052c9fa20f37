//! Lightweight JSON-backed translations with per-locale bundles.

use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;

/// Supported locale codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// English.
    En,
    /// Spanish.
    Es,
}

impl LocaleCode {
    /// All supported locales in display order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::En, Self::Es]
    }

    /// Two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Human-friendly label for the locale picker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
        }
    }

    /// Map an arbitrary browser language tag to a supported locale, falling back to None.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }
}

/// Default fallback locale.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Translation bundle containing a parsed JSON tree for the locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Build a translation bundle for the given locale.
    ///
    /// Missing keys degrade to English strings, then to the caller default.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let tree: Value = serde_json::from_str(raw_locale(locale)).unwrap_or(Value::Null);
        Self { locale, tree }
    }

    /// Resolve a dotted path (`section.key`) with English fallback and caller default.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        resolve(&self.tree, path)
            .or_else(|| resolve(&EN_FALLBACK.tree, path))
            .unwrap_or_else(|| default.to_string())
    }
}

static EN_FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(LocaleCode::En));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::En => include_str!("../../i18n/en.json"),
        LocaleCode::Es => include_str!("../../i18n/es.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_falls_back_to_default() {
        let bundle = TranslationBundle::new(LocaleCode::Es);
        assert_eq!(bundle.text("nonexistent.key", "fallback"), "fallback");
    }

    #[test]
    fn missing_locale_key_falls_back_to_english() {
        let bundle = TranslationBundle::new(LocaleCode::Es);
        assert_eq!(bundle.text("footer.never", "-"), "Never");
        assert_eq!(bundle.text("table.empty", "-"), "Aún no hay detecciones");
    }

    #[test]
    fn lang_tags_map_to_supported_locales() {
        assert_eq!(LocaleCode::from_lang_tag("es-MX"), Some(LocaleCode::Es));
        assert_eq!(LocaleCode::from_lang_tag("EN_gb"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_lang_tag("fr-FR"), None);
    }

    #[test]
    fn bundles_cover_every_card_label() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            for key in [
                "stats.total",
                "stats.high",
                "stats.medium",
                "stats.plates",
                "chart.high",
                "chart.medium",
                "chart.low",
                "status.connected",
                "status.disconnected",
                "status.reconnecting",
            ] {
                assert_ne!(bundle.text(key, "missing"), "missing", "{key} in {locale:?}");
            }
        }
    }
}
