//! Short display forms of personal and business names.
//!
//! The core is [`try_abbreviate_name`], which turns a given/family name pair
//! into something small enough for an avatar: initials for Latin names, the
//! family name for Chinese and Japanese, the given name (or its first
//! syllable) for Korean, and the first letter for Thai. Names mixing
//! writing systems, or containing spaces or punctuation, get no
//! abbreviation; [`abbreviate_name`] then falls back to [`format_name`],
//! which orders the parts according to the locale.
//!
//! ```
//! use name_abbrev::{abbreviate_name, format_name, FormatOptions, PersonName};
//!
//! let name = PersonName::new(Some("Michael"), Some("Garfinkle"));
//! assert_eq!("MG", abbreviate_name(&name, "en", None));
//!
//! let name = PersonName::new(Some("Michael"), Some("van der Garfinkle"));
//! assert_eq!("Michael", abbreviate_name(&name, "en", None));
//!
//! let name = PersonName::new(Some("太郎"), Some("山田"));
//! assert_eq!("山田太郎", format_name(&name, "ja", FormatOptions::full()));
//! ```

mod abbreviate;
mod business;
mod case;
mod decomposition;
mod format;
mod locale;
mod punctuation;
mod script;
mod segment;

#[cfg(feature = "ffi")]
pub mod external;

#[cfg(feature = "serialization")]
mod serialization;

use std::borrow::Cow;

pub use abbreviate::{try_abbreviate_name, NameAbbreviator, DEFAULT_IDEAL_MAX_LENGTH};
pub use business::{abbreviate_business_name, try_abbreviate_business_name, BusinessNameAbbreviator};
pub use format::{format_name, FormatOptions};
pub use locale::{
    has_eastern_name_order_formatter, name_order_rule, FullForm, NameOrderRule, ShortForm,
    DEFAULT_NAME_ORDER,
};
pub use punctuation::is_punctuation;
pub use script::{identify_scripts, script_of, Script, ScriptSet};
pub use segment::{get_graphemes, Graphemes, Segmentation, Segmenter};

#[cfg(feature = "serialization")]
pub use serialization::{NameRecord, Rendering};

/// The parts of a person's name, as entered. Either or both may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PersonName<'a> {
    pub given_name: Option<&'a str>,
    pub family_name: Option<&'a str>,
}

impl<'a> PersonName<'a> {
    #[inline]
    pub fn new(given_name: Option<&'a str>, family_name: Option<&'a str>) -> Self {
        PersonName {
            given_name,
            family_name,
        }
    }

    /// An abbreviation of the name, falling back to its short form in
    /// `locale`. See [`abbreviate_name`].
    pub fn abbreviate(&self, locale: &str, ideal_max_length: Option<usize>) -> Cow<'a, str> {
        abbreviate_name(self, locale, ideal_max_length)
    }

    /// See [`format_name`].
    pub fn format(&self, locale: &str, options: FormatOptions) -> Cow<'a, str> {
        format_name(self, locale, options)
    }
}

/// The abbreviation of `name` if there is one, and otherwise its short
/// form in `locale`.
///
/// This always produces a string, which is only empty when both parts of the
/// name are missing or empty.
pub fn abbreviate_name<'a>(
    name: &PersonName<'a>,
    locale: &str,
    ideal_max_length: Option<usize>,
) -> Cow<'a, str> {
    try_abbreviate_name(name, ideal_max_length)
        .unwrap_or_else(|| format_name(name, locale, FormatOptions::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_format_name() {
        let name = PersonName::new(Some("Michael"), Some("van Finkle"));
        assert_eq!(format_name(&name, "en", FormatOptions::default()), abbreviate_name(&name, "en", None));
        assert_eq!("van Finkle様", abbreviate_name(&name, "ja", None));
    }

    #[test]
    fn uses_abbreviation() {
        let name = PersonName::new(Some("Michael"), Some("Garfinkle"));
        assert_eq!(try_abbreviate_name(&name, None).unwrap(), abbreviate_name(&name, "en", None));
        assert_eq!("MG", name.abbreviate("ja", None));
    }

    #[test]
    fn mixed_script_falls_back() {
        let name = PersonName::new(Some("アイ"), Some("Garfinkle"));
        assert_eq!("Garfinkle様", name.abbreviate("ja", None));
        assert_eq!("アイ", name.abbreviate("en", None));
    }

    #[test]
    fn empty_name() {
        assert_eq!("", abbreviate_name(&PersonName::default(), "en", None));
    }

    #[test]
    fn thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PersonName<'static>>();
        assert_send_sync::<NameAbbreviator>();
        assert_send_sync::<BusinessNameAbbreviator>();
        assert_send_sync::<Graphemes<'static>>();
    }
}
