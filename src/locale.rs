/// Which part of a name the short form shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortForm {
    GivenOnly,
    FamilyOnly,
}

/// The order of parts in the full form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullForm {
    GivenThenFamily,
    FamilyThenGiven,
}

/// How a locale displays a name which has both a given and a family name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameOrderRule {
    pub short: ShortForm,
    pub full: FullForm,
    pub separator: &'static str,
    /// Appended to the short form only (e.g. the Japanese honorific "様").
    pub short_suffix: Option<&'static str>,
}

/// The rule for any locale without a registered one.
pub static DEFAULT_NAME_ORDER: NameOrderRule = NameOrderRule {
    short: ShortForm::GivenOnly,
    full: FullForm::GivenThenFamily,
    separator: " ",
    short_suffix: None,
};

// Generated from build/name_order.json
static EASTERN_NAME_ORDER: phf::Map<&'static str, NameOrderRule> =
    include!(concat!(env!("OUT_DIR"), "/eastern_name_order.rs"));

/// The family-name-first rule registered for exactly this locale tag.
///
/// There is no fallback from a region-qualified tag to its language, so
/// `zh-HK` finds nothing even though `zh-CN` and `zh-TW` are registered.
pub fn name_order_rule(locale: &str) -> Option<&'static NameOrderRule> {
    EASTERN_NAME_ORDER.get(locale)
}

pub fn has_eastern_name_order_formatter(locale: &str) -> bool {
    EASTERN_NAME_ORDER.contains_key(locale)
}

/// Loose BCP 47 syntax check: a 2-3 or 5-8 letter language subtag followed
/// by hyphen-separated alphanumeric subtags of 1-8 characters.
pub fn is_well_formed(tag: &str) -> bool {
    let mut subtags = tag.split('-');
    let language = subtags.next().unwrap_or("");

    matches!(language.len(), 2..=3 | 5..=8)
        && language.bytes().all(|b| b.is_ascii_alphabetic())
        && subtags.all(|subtag| {
            matches!(subtag.len(), 1..=8) && subtag.bytes().all(|b| b.is_ascii_alphanumeric())
        })
}
