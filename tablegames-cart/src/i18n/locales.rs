use serde_json::Value;

/// Language used when nothing else is configured; also the fallback bundle.
pub const DEFAULT_LANG: &str = "ru";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "ru",
        name: "Русский",
    },
    LocaleMeta {
        code: "en",
        name: "English",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("ru", include_str!("../../i18n/ru.json")),
    ("en", include_str!("../../i18n/en.json")),
];

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[must_use]
pub fn is_known_lang(lang: &str) -> bool {
    LOCALE_TABLE.iter().any(|(code, _)| *code == lang)
}

pub fn load_translations(lang: &str) -> Option<Value> {
    let data = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))?;

    serde_json::from_str(data).ok()
}
