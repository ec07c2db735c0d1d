//! Grapheme segmentation behind an explicit capability.
//!
//! Some hosts can't segment text into user-perceived characters. Rather than
//! guess (and split a Hangul syllable or a Thai consonant from its vowel
//! mark), callers ask for a [`Segmentation`] and treat
//! [`Segmentation::Unavailable`] as "can't abbreviate".

use super::locale;
use unicode_segmentation::UnicodeSegmentation;

/// Whether grapheme segmentation can be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segmentation {
    Available(Segmenter),
    Unavailable,
}

impl Segmentation {
    /// The capability of this build, which bundles UAX #29 segmentation.
    #[inline]
    pub fn detect() -> Segmentation {
        Segmentation::Available(Segmenter::new())
    }

    #[inline]
    pub fn segmenter(self) -> Option<Segmenter> {
        match self {
            Segmentation::Available(segmenter) => Some(segmenter),
            Segmentation::Unavailable => None,
        }
    }

    /// Segments `text`, or `None` if segmentation is unavailable.
    #[inline]
    pub fn graphemes<'a>(self, text: &'a str, locale: &str) -> Option<Graphemes<'a>> {
        self.segmenter()?.graphemes(text, locale)
    }
}

impl Default for Segmentation {
    fn default() -> Self {
        Segmentation::detect()
    }
}

/// Splits text into extended grapheme clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segmenter {
    _private: (),
}

impl Segmenter {
    #[inline]
    fn new() -> Segmenter {
        Segmenter { _private: () }
    }

    /// The user-perceived characters of `text` under `locale`'s rules.
    ///
    /// Returns `None` for a malformed locale tag. Extended clusters already
    /// keep Hangul syllable blocks (including conjoining jamo) and Thai
    /// consonant-plus-mark clusters whole, which is everything the name rules
    /// rely on for `ko` and `th`.
    pub fn graphemes<'a>(&self, text: &'a str, locale: &str) -> Option<Graphemes<'a>> {
        if !locale::is_well_formed(locale) {
            return None;
        }

        Some(Graphemes {
            text,
            inner: text.graphemes(true),
        })
    }

    /// Number of user-perceived characters in `text`.
    #[inline]
    pub fn count(&self, text: &str) -> usize {
        text.graphemes(true).count()
    }
}

/// A lazy sequence of graphemes. Clone it to start over.
#[derive(Clone)]
pub struct Graphemes<'a> {
    text: &'a str,
    inner: unicode_segmentation::Graphemes<'a>,
}

impl<'a> Graphemes<'a> {
    /// A fresh sequence over the same text.
    pub fn restart(&self) -> Graphemes<'a> {
        Graphemes {
            text: self.text,
            inner: self.text.graphemes(true),
        }
    }

    /// The first `n` graphemes of the source text, regardless of how far
    /// this sequence has advanced.
    pub fn prefix(&self, n: usize) -> &'a str {
        let end = self
            .text
            .grapheme_indices(true)
            .nth(n)
            .map_or(self.text.len(), |(i, _)| i);
        &self.text[..end]
    }
}

impl<'a> Iterator for Graphemes<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Graphemes<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a str> {
        self.inner.next_back()
    }
}

/// Graphemes of `text` using this build's segmentation capability.
pub fn get_graphemes<'a>(text: &'a str, locale: &str) -> Option<Graphemes<'a>> {
    Segmentation::detect().graphemes(text, locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hangul_syllables() {
        let graphemes: Vec<_> = get_graphemes("이슬슬슬", "ko").unwrap().collect();
        assert_eq!(vec!["이", "슬", "슬", "슬"], graphemes);
    }

    #[test]
    fn conjoining_jamo_stay_together() {
        // 이슬 spelled with conjoining jamo
        let text = "\u{110B}\u{1175}\u{1109}\u{1173}\u{11AF}";
        let graphemes: Vec<_> = get_graphemes(text, "ko").unwrap().collect();
        assert_eq!(vec!["\u{110B}\u{1175}", "\u{1109}\u{1173}\u{11AF}"], graphemes);
    }

    #[test]
    fn thai_marks_attach() {
        let graphemes: Vec<_> = get_graphemes("อภัยวงศ์", "th").unwrap().collect();
        assert_eq!(vec!["อ", "ภั", "ย", "ว", "ง", "ศ์"], graphemes);
    }

    #[test]
    fn restartable() {
        let mut graphemes = get_graphemes("ควง", "th").unwrap();
        assert_eq!(Some("ค"), graphemes.next());
        assert_eq!(Some("ว"), graphemes.next());
        assert_eq!(Some("ค"), graphemes.restart().next());

        let copy = graphemes.clone();
        assert_eq!(vec!["ง"], copy.collect::<Vec<_>>());
        assert_eq!(Some("ง"), graphemes.next());
        assert_eq!(None, graphemes.next());
    }

    #[test]
    fn prefix() {
        let graphemes = get_graphemes("山田商店", "ja").unwrap();
        assert_eq!("山田商", graphemes.prefix(3));
        assert_eq!("", graphemes.prefix(0));
        assert_eq!("山田商店", graphemes.prefix(10));
    }

    #[test]
    fn malformed_locale() {
        assert!(get_graphemes("이슬", "ko_KR").is_none());
        assert!(get_graphemes("이슬", "").is_none());
    }

    #[test]
    fn unavailable() {
        assert!(Segmentation::Unavailable.graphemes("이슬", "ko").is_none());
        assert!(Segmentation::Unavailable.segmenter().is_none());
        assert_eq!(Segmentation::detect(), Segmentation::default());
    }

    #[test]
    fn counting() {
        let segmenter = Segmentation::detect().segmenter().unwrap();
        assert_eq!(3, segmenter.count("하야나"));
        assert_eq!(1, segmenter.count("E\u{301}"));
        assert_eq!(0, segmenter.count(""));
    }
}
