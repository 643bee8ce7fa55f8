// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 metadata for the languages farmers are likely to ask for.
//!
//! Only four of these have catalogs; the rest let [`Lang::parse`] tell
//! "not a language code" apart from "a language we do not translate yet".
//!
//! [`Lang::parse`]: super::Lang::parse

/// English name of the language.
///
/// # Examples
/// ```
/// assert_eq!(kisan_mitra::i18n::language_name("mr"), Some("Marathi"));
/// assert_eq!(kisan_mitra::i18n::language_name("xx"), None);
/// ```
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "hi" => Some("Hindi"),
        "ta" => Some("Tamil"),
        "te" => Some("Telugu"),
        "bn" => Some("Bengali"),
        "mr" => Some("Marathi"),
        "gu" => Some("Gujarati"),
        "kn" => Some("Kannada"),
        "ml" => Some("Malayalam"),
        "pa" => Some("Punjabi"),
        "or" => Some("Odia"),
        "as" => Some("Assamese"),
        "ur" => Some("Urdu"),
        _ => None,
    }
}

/// Name of the language written in its own script, as shown in the
/// language selector.
pub fn native_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "hi" => Some("हिंदी"),
        "ta" => Some("தமிழ்"),
        "te" => Some("తెలుగు"),
        "bn" => Some("বাংলা"),
        "mr" => Some("मराठी"),
        "gu" => Some("ગુજરાતી"),
        "kn" => Some("ಕನ್ನಡ"),
        "ml" => Some("മലയാളം"),
        "pa" => Some("ਪੰਜਾਬੀ"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_known_codes_only() {
        assert_eq!(language_name("pa"), Some("Punjabi"));
        assert_eq!(language_name("ta"), Some("Tamil"));
        assert_eq!(language_name("xx"), None);
        assert_eq!(language_name(""), None);
        assert_eq!(language_name("HI"), None);
    }

    #[test]
    fn native_names_resolve() {
        assert_eq!(native_name("hi"), Some("हिंदी"));
        assert_eq!(native_name("te"), Some("తెలుగు"));
        assert_eq!(native_name("xx"), None);
    }
}
