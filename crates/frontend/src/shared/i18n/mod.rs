//! Localization: `ns:dotted.path` keys resolved against embedded JSON catalogs.
//!
//! ```rust,ignore
//! let t = Translator::new(Language::En, "order");
//! t.t("subtotal");                      // "Subtotal" (default namespace)
//! t.t("common:errors.order-deleted");   // "Order deleted successfully"
//! ```
//!
//! A key missing in the active language falls back to English, then to the
//! key path itself.

use leptos::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ru];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    /// `ru-RU`, `ru` → Ru; everything else is English
    pub fn from_tag(tag: &str) -> Self {
        if tag.to_lowercase().starts_with("ru") {
            Language::Ru
        } else {
            Language::En
        }
    }

    /// Язык браузера (navigator.language)
    pub fn detect() -> Self {
        web_sys::window()
            .and_then(|w| w.navigator().language())
            .map(|tag| Self::from_tag(&tag))
            .unwrap_or_default()
    }
}

const SOURCES: &[(Language, &str, &str)] = &[
    (Language::En, "order", include_str!("../../../locales/en/order.json")),
    (Language::En, "common", include_str!("../../../locales/en/common.json")),
    (Language::Ru, "order", include_str!("../../../locales/ru/order.json")),
    (Language::Ru, "common", include_str!("../../../locales/ru/common.json")),
];

/// Parsed catalogs for every language and namespace.
#[derive(Debug, Default)]
pub struct Catalogs {
    by_language: HashMap<Language, HashMap<&'static str, Value>>,
}

impl Catalogs {
    pub fn embedded() -> Self {
        let mut catalogs = Catalogs::default();
        for (language, namespace, source) in SOURCES {
            match serde_json::from_str::<Value>(source) {
                Ok(value) => catalogs.insert(*language, namespace, value),
                Err(e) => log::error!(
                    "Broken catalog {}/{}.json: {}",
                    language.code(),
                    namespace,
                    e
                ),
            }
        }
        catalogs
    }

    pub fn insert(&mut self, language: Language, namespace: &'static str, value: Value) {
        self.by_language
            .entry(language)
            .or_default()
            .insert(namespace, value);
    }

    fn lookup(&self, language: Language, namespace: &str, path: &str) -> Option<&str> {
        let mut node = self.by_language.get(&language)?.get(namespace)?;
        for segment in path.split('.') {
            node = node.get(segment)?;
        }
        node.as_str()
    }
}

#[derive(Debug, Clone)]
pub struct Translator {
    language: Language,
    default_ns: &'static str,
    catalogs: Arc<Catalogs>,
}

impl Translator {
    pub fn new(language: Language, default_ns: &'static str) -> Self {
        Self::with_catalogs(language, default_ns, Arc::new(Catalogs::embedded()))
    }

    pub fn with_catalogs(
        language: Language,
        default_ns: &'static str,
        catalogs: Arc<Catalogs>,
    ) -> Self {
        Self {
            language,
            default_ns,
            catalogs,
        }
    }

    pub fn t(&self, key: &str) -> String {
        let (namespace, path) = key.split_once(':').unwrap_or((self.default_ns, key));
        self.catalogs
            .lookup(self.language, namespace, path)
            .or_else(|| self.catalogs.lookup(Language::En, namespace, path))
            .unwrap_or(path)
            .to_string()
    }
}

/// Контекст локализации: текущий язык + общие каталоги
#[derive(Clone)]
pub struct I18n {
    pub language: RwSignal<Language>,
    catalogs: Arc<Catalogs>,
}

impl I18n {
    pub fn new(language: Language) -> Self {
        Self {
            language: RwSignal::new(language),
            catalogs: Arc::new(Catalogs::embedded()),
        }
    }

    /// Snapshot translator for the current language; reactive when called inside a view.
    pub fn translator(&self, default_ns: &'static str) -> Translator {
        Translator::with_catalogs(self.language.get(), default_ns, self.catalogs.clone())
    }

    pub fn translator_untracked(&self, default_ns: &'static str) -> Translator {
        Translator::with_catalogs(
            self.language.get_untracked(),
            default_ns,
            self.catalogs.clone(),
        )
    }

    pub fn t(&self, key: &str) -> String {
        self.translator("order").t(key)
    }
}

pub fn use_i18n() -> I18n {
    use_context::<I18n>().expect("I18n context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_namespace_applies_to_bare_keys() {
        let t = Translator::new(Language::En, "order");
        assert_eq!(t.t("subtotal"), "Subtotal");
        assert_eq!(t.t("order:shipping-fee"), "Shipping Fee");
    }

    #[test]
    fn nested_keys_resolve() {
        let t = Translator::new(Language::En, "order");
        assert_eq!(
            t.t("common:errors.order-deleted"),
            "Order deleted successfully"
        );
        assert_eq!(t.t("status.on-the-way"), "On the way");
    }

    #[test]
    fn missing_key_falls_back_to_path() {
        let t = Translator::new(Language::Ru, "order");
        assert_eq!(t.t("common:errors.no-such-key"), "errors.no-such-key");
        assert_eq!(t.t("unknown"), "unknown");
    }

    #[test]
    fn missing_translation_falls_back_to_english() {
        let mut catalogs = Catalogs::default();
        catalogs.insert(
            Language::En,
            "order",
            serde_json::json!({ "total": "Total" }),
        );
        catalogs.insert(Language::Ru, "order", serde_json::json!({}));
        let t = Translator::with_catalogs(Language::Ru, "order", Arc::new(catalogs));
        assert_eq!(t.t("total"), "Total");
    }

    #[test]
    fn every_language_has_the_same_keys() {
        fn keys(prefix: &str, value: &Value, out: &mut Vec<String>) {
            if let Some(map) = value.as_object() {
                for (k, v) in map {
                    keys(&format!("{}{}.", prefix, k), v, out);
                }
            } else {
                out.push(prefix.trim_end_matches('.').to_string());
            }
        }
        let catalogs = Catalogs::embedded();
        for namespace in ["order", "common"] {
            let mut en = Vec::new();
            let mut ru = Vec::new();
            keys("", &catalogs.by_language[&Language::En][namespace], &mut en);
            keys("", &catalogs.by_language[&Language::Ru][namespace], &mut ru);
            en.sort();
            ru.sort();
            assert_eq!(en, ru, "namespace {}", namespace);
        }
    }

    #[test]
    fn language_from_browser_tag() {
        assert_eq!(Language::from_tag("ru-RU"), Language::Ru);
        assert_eq!(Language::from_tag("en-GB"), Language::En);
        assert_eq!(Language::from_tag("de"), Language::En);
    }
}
