use super::locale::{name_order_rule, FullForm, NameOrderRule, ShortForm, DEFAULT_NAME_ORDER};
use super::PersonName;
use std::borrow::Cow;

/// Options for [`format_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    /// Show both parts rather than the locale's short form.
    pub full: bool,
}

impl FormatOptions {
    pub fn full() -> Self {
        FormatOptions { full: true }
    }
}

impl NameOrderRule {
    /// Formats a name which has both parts.
    pub fn apply<'a>(&self, given: &'a str, family: &'a str, full: bool) -> Cow<'a, str> {
        if full {
            let (first, second) = match self.full {
                FullForm::GivenThenFamily => (given, family),
                FullForm::FamilyThenGiven => (family, given),
            };
            Cow::Owned([first, self.separator, second].concat())
        } else {
            let part = match self.short {
                ShortForm::GivenOnly => given,
                ShortForm::FamilyOnly => family,
            };
            match self.short_suffix {
                Some(suffix) => Cow::Owned([part, suffix].concat()),
                None => Cow::Borrowed(part),
            }
        }
    }
}

/// Formats a name for display in `locale`.
///
/// A name with only one part shows that part as-is (or nothing, if both are
/// missing). Otherwise locales with a family-name-first rule (see
/// [`has_eastern_name_order_formatter`](crate::has_eastern_name_order_formatter))
/// use it, and every other locale shows the given name, or
/// "given family" in full.
pub fn format_name<'a>(name: &PersonName<'a>, locale: &str, options: FormatOptions) -> Cow<'a, str> {
    let given = match name.given_name.filter(|s| !s.is_empty()) {
        Some(given) => given,
        None => return Cow::Borrowed(name.family_name.unwrap_or("")),
    };
    let family = match name.family_name.filter(|s| !s.is_empty()) {
        Some(family) => family,
        None => return Cow::Borrowed(given),
    };

    name_order_rule(locale)
        .unwrap_or(&DEFAULT_NAME_ORDER)
        .apply(given, family, options.full)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_last() -> PersonName<'static> {
        PersonName::new(Some("first"), Some("last"))
    }

    #[test]
    fn missing_parts() {
        for &options in &[FormatOptions::default(), FormatOptions::full()] {
            assert_eq!("", format_name(&PersonName::new(None, None), "en", options));
            assert_eq!("", format_name(&PersonName::new(Some(""), None), "en", options));
            assert_eq!("first", format_name(&PersonName::new(Some("first"), None), "en", options));
            assert_eq!("first", format_name(&PersonName::new(Some("first"), Some("")), "en", options));
            assert_eq!("last", format_name(&PersonName::new(None, Some("last")), "en", options));
            assert_eq!("last", format_name(&PersonName::new(Some(""), Some("last")), "ja", options));
        }
    }

    #[test]
    fn default_order() {
        for locale in &["en", "fr-CA", "unknown", "zh"] {
            assert_eq!("first", format_name(&first_last(), locale, FormatOptions::default()));
            assert_eq!("first last", format_name(&first_last(), locale, FormatOptions::full()));
        }
    }

    #[test]
    fn japanese() {
        assert_eq!("last様", format_name(&first_last(), "ja", FormatOptions::default()));
        assert_eq!("lastfirst", format_name(&first_last(), "ja", FormatOptions::full()));
    }

    #[test]
    fn family_first_locales() {
        for locale in &["ko", "zh-CN", "zh-TW"] {
            assert_eq!("last", format_name(&first_last(), locale, FormatOptions::default()));
            assert_eq!("lastfirst", format_name(&first_last(), locale, FormatOptions::full()));
        }
    }

    #[test]
    fn borrows_single_parts() {
        assert!(matches!(
            format_name(&first_last(), "en", FormatOptions::default()),
            Cow::Borrowed("first")
        ));
        assert!(matches!(
            format_name(&first_last(), "ko", FormatOptions::default()),
            Cow::Borrowed("last")
        ));
    }

    #[test]
    fn untrimmed() {
        let name = PersonName::new(Some(" first "), Some("last"));
        assert_eq!(" first  last", format_name(&name, "en", FormatOptions::full()));
    }
}
