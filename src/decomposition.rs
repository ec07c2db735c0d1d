use std::borrow::Cow;
use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::{is_nfc_quick, IsNormalized, UnicodeNormalization};

#[inline]
pub fn is_combining(c: char) -> bool {
    canonical_combining_class(c) > 0
}

// Zero-width joiners and variation selectors attach to the preceding
// character without having a combining class of their own.
#[inline]
pub fn is_joiner(c: char) -> bool {
    matches!(c, '\u{200C}'..='\u{200D}' | '\u{FE00}'..='\u{FE0F}' | '\u{E0100}'..='\u{E01EF}')
}

#[inline]
fn is_attached(c: char) -> bool {
    is_combining(c) || is_joiner(c)
}

/// The first character of `word` together with any marks attached to it,
/// composed to NFC so "E\u{301}mile" yields "É". Marks with nothing to
/// attach to at the start of `word` are skipped.
///
/// Unlike a full grapheme segmentation this never needs more than a
/// combining-class lookup, so it's always available.
pub fn leading_initial(word: &str) -> Option<Cow<str>> {
    let start = word.find(|c: char| !is_attached(c))?;
    let word = &word[start..];

    let end = word
        .char_indices()
        .skip(1)
        .find(|&(_, c)| !is_attached(c))
        .map(|(i, _)| i)
        .unwrap_or_else(|| word.len());

    Some(compose(&word[..end]))
}

pub fn compose(text: &str) -> Cow<str> {
    if is_nfc_quick(text.chars()) == IsNormalized::Yes {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.nfc().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_initial() {
        assert_eq!(Some(Cow::Borrowed("M")), leading_initial("Michael"));
        assert_eq!(Some(Cow::Borrowed("É")), leading_initial("Émile"));
        assert_eq!(None, leading_initial(""));
    }

    #[test]
    fn decomposed_initial() {
        let initial = leading_initial("E\u{301}mile").unwrap();
        assert_eq!("É", initial);
        assert!(matches!(initial, Cow::Owned(_)));
    }

    #[test]
    fn leading_marks_skipped() {
        assert_eq!(Some(Cow::Borrowed("a")), leading_initial("\u{301}a"));
        assert_eq!(Some(Cow::Borrowed("b")), leading_initial("\u{200D}\u{301}b"));
        assert_eq!(None, leading_initial("\u{301}\u{302}"));
    }

    #[test]
    fn stacked_marks() {
        assert_eq!("\u{1EAD}", leading_initial("a\u{323}\u{302}b").unwrap());
    }

    #[test]
    fn combining() {
        assert!(is_combining('\u{301}'));
        assert!(is_combining('\u{E38}'));
        assert!(!is_combining('a'));
        assert!(!is_combining('이'));
    }
}
