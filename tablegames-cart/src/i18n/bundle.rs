use crate::i18n::locales::{DEFAULT_LANG, is_known_lang, load_translations};
use serde_json::Value;
use std::cell::RefCell;

#[derive(Debug)]
pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let fallback = load_translations(DEFAULT_LANG)?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn empty_bundle() -> I18nBundle {
    I18nBundle {
        lang: DEFAULT_LANG.to_string(),
        translations: Value::Object(serde_json::Map::new()),
        fallback: Value::Object(serde_json::Map::new()),
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> =
        RefCell::new(build_bundle(DEFAULT_LANG).unwrap_or_else(empty_bundle));
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Switch the active language
///
/// Unknown codes leave the current bundle in place and return `false`.
pub fn set_lang(lang: &str) -> bool {
    if !is_known_lang(lang) {
        log::warn!("unsupported language {lang:?}, keeping {}", current_lang());
        return false;
    }
    match build_bundle(lang) {
        Some(bundle) => {
            CURRENT.with(|cell| cell.replace(bundle));
            true
        }
        None => false,
    }
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}
