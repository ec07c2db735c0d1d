use super::abbreviate::DEFAULT_IDEAL_MAX_LENGTH;
use super::case::titlecase_initial;
use super::decomposition::leading_initial;
use super::punctuation::is_punctuation;
use super::script::{identify_scripts, Script, ScriptSet};
use super::segment::Segmentation;
use log::trace;
use smallvec::SmallVec;
use std::borrow::Cow;

fn words(name: &str) -> SmallVec<[&str; 4]> {
    name.split(|c: char| c.is_whitespace() || is_punctuation(c))
        .filter(|w| !w.is_empty())
        .collect()
}

// Business names often carry numbers ("shop-123"), so digits are left out
// when deciding the script.
fn business_scripts(name: &str) -> ScriptSet {
    name.split(char::is_numeric)
        .map(identify_scripts)
        .fold(ScriptSet::new(), ScriptSet::union)
}

/// Abbreviates business names with an explicit segmentation capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BusinessNameAbbreviator {
    segmentation: Segmentation,
}

impl BusinessNameAbbreviator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_segmentation(segmentation: Segmentation) -> Self {
        BusinessNameAbbreviator { segmentation }
    }

    /// A short token standing in for a business name, or `None` when no rule
    /// applies (emoji-only names, mixed scripts and so on).
    pub fn try_abbreviate<'a>(
        &self,
        name: Option<&'a str>,
        ideal_max_length: Option<usize>,
    ) -> Option<Cow<'a, str>> {
        let name = name.map(str::trim).filter(|s| !s.is_empty())?;
        let ideal_max_length = ideal_max_length.unwrap_or(DEFAULT_IDEAL_MAX_LENGTH);

        let scripts = business_scripts(name);
        let script = match scripts.single() {
            Some(script) => script,
            None => {
                trace!("not abbreviating business name: found scripts {:?}", scripts);
                return None;
            }
        };

        let words = words(name);
        let first = *words.first()?;

        let result = match script {
            Script::Latin => {
                let initials: String = words
                    .iter()
                    .take(ideal_max_length)
                    .filter_map(|w| leading_initial(w))
                    .map(|initial| titlecase_initial(&initial).into_owned())
                    .collect();
                Some(Cow::Owned(initials))
            }
            Script::Han | Script::Hiragana | Script::Katakana | Script::Hangul => self
                .segmentation
                .graphemes(first, "und")
                .map(|graphemes| Cow::Borrowed(graphemes.prefix(ideal_max_length))),
            Script::Thai => self
                .segmentation
                .graphemes(first, "th")
                .and_then(|mut graphemes| graphemes.next())
                .map(Cow::Borrowed),
            Script::Other => None,
        };

        if result.is_none() {
            trace!("not abbreviating business name: no {} rule applies", script);
        }

        result.filter(|abbreviation| !abbreviation.is_empty())
    }
}

/// Abbreviates `name` using this build's segmentation capability.
pub fn try_abbreviate_business_name(
    name: Option<&str>,
    ideal_max_length: Option<usize>,
) -> Option<Cow<str>> {
    BusinessNameAbbreviator::new().try_abbreviate(name, ideal_max_length)
}

/// The abbreviation of `name`, or `name` itself when there isn't one.
pub fn abbreviate_business_name(name: Option<&str>, ideal_max_length: Option<usize>) -> Cow<str> {
    try_abbreviate_business_name(name, ideal_max_length)
        .unwrap_or_else(|| Cow::Borrowed(name.unwrap_or("")))
}
