use super::decomposition::leading_initial;
use super::punctuation::has_separators;
use super::script::{identify_scripts, Script};
use super::segment::Segmentation;
use super::PersonName;
use log::trace;
use std::borrow::Cow;

/// Longest Hangul given name shown whole before falling back to its first
/// syllable.
pub const DEFAULT_IDEAL_MAX_LENGTH: usize = 3;

#[inline]
fn present(part: Option<&str>) -> Option<&str> {
    part.map(str::trim).filter(|s| !s.is_empty())
}

/// Abbreviates person names with an explicit segmentation capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NameAbbreviator {
    segmentation: Segmentation,
}

impl NameAbbreviator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_segmentation(segmentation: Segmentation) -> Self {
        NameAbbreviator { segmentation }
    }

    /// A short form of the name suited to an avatar or badge, or `None` when
    /// the rules for its writing system don't apply cleanly.
    pub fn try_abbreviate<'a>(
        &self,
        name: &PersonName<'a>,
        ideal_max_length: Option<usize>,
    ) -> Option<Cow<'a, str>> {
        if name.given_name.map_or(true, str::is_empty) && name.family_name.map_or(true, str::is_empty) {
            return None;
        }

        let given = present(name.given_name);
        let family = present(name.family_name);

        let combined = [given.unwrap_or(""), family.unwrap_or("")].concat();
        if has_separators(&combined) {
            trace!("not abbreviating: name contains whitespace or punctuation");
            return None;
        }

        let scripts = identify_scripts(&combined);
        let script = match scripts.single() {
            Some(script) => script,
            None => {
                trace!("not abbreviating: found scripts {:?}", scripts);
                return None;
            }
        };

        let ideal_max_length = ideal_max_length.unwrap_or(DEFAULT_IDEAL_MAX_LENGTH);
        let result = match script {
            Script::Latin => latin_initials(given, family),
            Script::Han | Script::Katakana | Script::Hiragana => family.map(Cow::Borrowed),
            Script::Hangul => self.hangul(given, family, ideal_max_length),
            Script::Thai => self.first_grapheme(given.or(family)?, "th"),
            Script::Other => None,
        };

        if result.is_none() {
            trace!("not abbreviating: no {} rule applies", script);
        }

        result.filter(|abbreviation| !abbreviation.is_empty())
    }

    fn hangul<'a>(
        &self,
        given: Option<&'a str>,
        family: Option<&'a str>,
        ideal_max_length: usize,
    ) -> Option<Cow<'a, str>> {
        let given = match given {
            Some(given) => given,
            None => return family.map(Cow::Borrowed),
        };

        // Precomposed syllables are one char each, so a char count is a fair
        // stand-in when graphemes can't be counted
        let length = match self.segmentation.segmenter() {
            Some(segmenter) => segmenter.count(given),
            None => given.chars().count(),
        };

        if length > ideal_max_length {
            self.first_grapheme(given, "ko")
        } else {
            Some(Cow::Borrowed(given))
        }
    }

    fn first_grapheme<'a>(&self, text: &'a str, locale: &str) -> Option<Cow<'a, str>> {
        match self.segmentation.graphemes(text, locale) {
            Some(mut graphemes) => graphemes.next().map(Cow::Borrowed),
            None => {
                trace!("not abbreviating: can't segment {:?} for {}", text, locale);
                None
            }
        }
    }
}

fn latin_initials<'a>(given: Option<&'a str>, family: Option<&'a str>) -> Option<Cow<'a, str>> {
    let given = given.and_then(leading_initial);
    let family = family.and_then(leading_initial);

    match (given, family) {
        (Some(g), Some(f)) => Some(Cow::Owned([g, f].concat())),
        (Some(initial), None) | (None, Some(initial)) => Some(initial),
        (None, None) => None,
    }
}

/// Abbreviates `name` using this build's segmentation capability.
pub fn try_abbreviate_name<'a>(
    name: &PersonName<'a>,
    ideal_max_length: Option<usize>,
) -> Option<Cow<'a, str>> {
    NameAbbreviator::new().try_abbreviate(name, ideal_max_length)
}
