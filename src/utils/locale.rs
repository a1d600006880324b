//! Browser language negotiation.

/// Internal locale codes that differ from their BCP 47 form.
const STANDARD_LOCALES: &[(&str, &str)] = &[
    ("nlBE", "nl-be"),
    ("ptBR", "pt-br"),
    ("svSE", "sv-se"),
    ("zhCN", "zh-cn"),
    ("zhTW", "zh-tw"),
    ("cz", "cs"),
    ("ua", "uk"),
];

/// Locales with bundled translations, matched by prefix.
const SUPPORTED_LOCALES: &[&str] = &["en", "ru"];

/// Locale used when the browser language is not supported.
pub const FALLBACK_LOCALE: &str = "en-us";

/// Map an internal locale code to its standard form.
pub fn to_standard_locale(locale: &str) -> &str {
    STANDARD_LOCALES
        .iter()
        .find(|(internal, _)| *internal == locale)
        .map(|(_, standard)| *standard)
        .unwrap_or(locale)
}

/// Pick the UI locale for a browser language such as `ru-RU`.
pub fn detect_locale(language: Option<&str>) -> &'static str {
    let Some(language) = language else {
        return FALLBACK_LOCALE;
    };
    let language = language.to_lowercase();

    SUPPORTED_LOCALES
        .iter()
        .find(|supported| language.starts_with(**supported))
        .copied()
        .unwrap_or(FALLBACK_LOCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_locale() {
        assert_eq!(detect_locale(Some("en-US")), "en");
        assert_eq!(detect_locale(Some("ru")), "ru");
        assert_eq!(detect_locale(Some("RU-ru")), "ru");
        assert_eq!(detect_locale(Some("de-DE")), FALLBACK_LOCALE);
        assert_eq!(detect_locale(None), FALLBACK_LOCALE);
    }

    #[test]
    fn test_to_standard_locale() {
        assert_eq!(to_standard_locale("zhCN"), "zh-cn");
        assert_eq!(to_standard_locale("ua"), "uk");
        assert_eq!(to_standard_locale("en"), "en");
    }
}
