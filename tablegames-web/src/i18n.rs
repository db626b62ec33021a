//! DOM side of language selection.

use tablegames_cart::i18n as catalog;

/// Switch the message catalog and mirror the language into `<html lang>`.
///
/// Unknown codes keep the current language and return `false`.
pub fn set_lang(lang: &str) -> bool {
    if !catalog::set_lang(lang) {
        return false;
    }
    if let Some(html) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    {
        let _ = html.set_attribute("lang", &catalog::current_lang());
    }
    true
}
