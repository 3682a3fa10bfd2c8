use tracing::warn;

/// Locale used when the configured one has no translation file
pub const FALLBACK_LOCALE: &str = "en";

/// Set the active locale, falling back to English for unknown locales.
/// Returns the locale that was actually applied.
pub fn set_locale(locale: &str) -> String {
    let available = rust_i18n::available_locales!();
    let applied = if available.iter().any(|l| *l == locale) {
        locale
    } else {
        warn!(
            "Locale '{}' is not available ({:?}), using '{}'",
            locale, available, FALLBACK_LOCALE
        );
        FALLBACK_LOCALE
    };

    rust_i18n::set_locale(applied);
    applied.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_locale_falls_back() {
        assert_eq!(set_locale("xx-unknown"), "en");
        assert_eq!(set_locale("en"), "en");
    }
}
