//! Writing-system classification of name text.

use super::punctuation::is_punctuation;
use std::cmp::Ordering;
use std::fmt;

/// The writing systems the abbreviation rules know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Script {
    Latin,
    Han,
    Hiragana,
    Katakana,
    Hangul,
    Thai,
    /// Any letter or symbol outside the recognized ranges.
    Other,
}

const ALL_SCRIPTS: [Script; 7] = [
    Script::Latin,
    Script::Han,
    Script::Hiragana,
    Script::Katakana,
    Script::Hangul,
    Script::Thai,
    Script::Other,
];

impl Script {
    #[inline]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Script::Latin => "Latin",
            Script::Han => "Han",
            Script::Hiragana => "Hiragana",
            Script::Katakana => "Katakana",
            Script::Hangul => "Hangul",
            Script::Thai => "Thai",
            Script::Other => "Other",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use self::Script::*;

// Inclusive ranges, sorted and non-overlapping.
static SCRIPT_RANGES: &[(char, char, Script)] = &[
    ('\u{41}', '\u{5A}', Latin),
    ('\u{61}', '\u{7A}', Latin),
    ('\u{C0}', '\u{D6}', Latin),
    ('\u{D8}', '\u{F6}', Latin),
    ('\u{F8}', '\u{2AF}', Latin),
    ('\u{300}', '\u{36F}', Latin),
    ('\u{E01}', '\u{E3A}', Thai),
    ('\u{E40}', '\u{E5B}', Thai),
    ('\u{1100}', '\u{11FF}', Hangul),
    ('\u{1E00}', '\u{1EFF}', Latin),
    ('\u{2C60}', '\u{2C7F}', Latin),
    ('\u{2E80}', '\u{2E99}', Han),
    ('\u{2E9B}', '\u{2EF3}', Han),
    ('\u{2F00}', '\u{2FD5}', Han),
    ('\u{3005}', '\u{3005}', Han),
    ('\u{3007}', '\u{3007}', Han),
    ('\u{3021}', '\u{3029}', Han),
    ('\u{3038}', '\u{303B}', Han),
    ('\u{3041}', '\u{3096}', Hiragana),
    ('\u{309D}', '\u{309F}', Hiragana),
    ('\u{30A1}', '\u{30FA}', Katakana),
    ('\u{30FD}', '\u{30FF}', Katakana),
    ('\u{3130}', '\u{318F}', Hangul),
    ('\u{31F0}', '\u{31FF}', Katakana),
    ('\u{32D0}', '\u{32FE}', Katakana),
    ('\u{3300}', '\u{3357}', Katakana),
    ('\u{3400}', '\u{4DBF}', Han),
    ('\u{4E00}', '\u{9FFF}', Han),
    ('\u{A720}', '\u{A7FF}', Latin),
    ('\u{A960}', '\u{A97F}', Hangul),
    ('\u{AC00}', '\u{D7FF}', Hangul),
    ('\u{F900}', '\u{FA6D}', Han),
    ('\u{FA70}', '\u{FAD9}', Han),
    ('\u{FF21}', '\u{FF3A}', Latin),
    ('\u{FF41}', '\u{FF5A}', Latin),
    ('\u{FF66}', '\u{FF9F}', Katakana),
    ('\u{FFA0}', '\u{FFDC}', Hangul),
    ('\u{20000}', '\u{2A6DF}', Han),
    ('\u{2A700}', '\u{2EBEF}', Han),
    ('\u{2F800}', '\u{2FA1F}', Han),
    ('\u{30000}', '\u{3134F}', Han),
];

/// The script whose range table contains `c`, if any.
pub fn script_of(c: char) -> Option<Script> {
    SCRIPT_RANGES
        .binary_search_by(|&(lo, hi, _)| {
            if hi < c {
                Ordering::Less
            } else if lo > c {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .ok()
        .map(|i| SCRIPT_RANGES[i].2)
}

/// Characters which never decide the script of a name: whitespace and
/// punctuation.
#[inline]
pub fn is_neutral(c: char) -> bool {
    c.is_whitespace() || is_punctuation(c)
}

// Voiced sound marks and the prolonged sound mark are written with both
// kana, so they take the script of the kana around them.
#[inline]
fn is_shared_kana(c: char) -> bool {
    matches!(c, '\u{3099}'..='\u{309C}' | '\u{30FC}')
}

#[inline]
fn classify(c: char) -> Option<Script> {
    match script_of(c) {
        Some(script) => Some(script),
        None if is_neutral(c) => None,
        None => Some(Other),
    }
}

/// A set of scripts, small enough to copy around freely.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScriptSet(u8);

impl ScriptSet {
    #[inline]
    pub fn new() -> Self {
        ScriptSet(0)
    }

    #[inline]
    pub fn insert(&mut self, script: Script) {
        self.0 |= script.bit();
    }

    #[inline]
    pub fn contains(self, script: Script) -> bool {
        self.0 & script.bit() != 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The only member, if there is exactly one.
    pub fn single(self) -> Option<Script> {
        if self.len() == 1 {
            self.iter().next()
        } else {
            None
        }
    }

    #[inline]
    pub fn union(self, other: ScriptSet) -> ScriptSet {
        ScriptSet(self.0 | other.0)
    }

    pub fn iter(self) -> impl Iterator<Item = Script> {
        ALL_SCRIPTS.iter().copied().filter(move |s| self.contains(*s))
    }
}

impl fmt::Debug for ScriptSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl std::iter::FromIterator<Script> for ScriptSet {
    fn from_iter<I: IntoIterator<Item = Script>>(iter: I) -> Self {
        let mut set = ScriptSet::new();
        for script in iter {
            set.insert(script);
        }
        set
    }
}

/// Every distinct script found in `text`, ignoring neutral characters.
///
/// Shared kana marks count as Katakana unless the text has Hiragana or
/// Katakana of its own.
pub fn identify_scripts(text: &str) -> ScriptSet {
    let mut set = ScriptSet::new();
    let mut shared_kana = false;
    for c in text.chars() {
        if is_shared_kana(c) {
            shared_kana = true;
        } else if let Some(script) = classify(c) {
            set.insert(script);
        }
    }

    if shared_kana && !set.contains(Hiragana) && !set.contains(Katakana) {
        set.insert(Katakana);
    }
    set
}
