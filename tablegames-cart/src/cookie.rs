//! Cookie jar lookup.

use percent_encoding::percent_decode_str;

/// Read `name` from a `document.cookie` style string.
///
/// Entries are split on `;` and trimmed; the first entry starting with
/// `name=` wins and its value is percent-decoded. Values that do not decode
/// to UTF-8 are returned as stored. Nothing is cached.
#[must_use]
pub fn get_cookie(jar: &str, name: &str) -> Option<String> {
    if jar.is_empty() {
        return None;
    }
    let prefix = format!("{name}=");
    jar.split(';')
        .map(str::trim)
        .find_map(|entry| entry.strip_prefix(prefix.as_str()))
        .map(decode_value)
}

fn decode_value(raw: &str) -> String {
    match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(err) => {
            log::warn!("cookie value is not valid percent-encoded UTF-8: {err}");
            raw.to_string()
        }
    }
}
