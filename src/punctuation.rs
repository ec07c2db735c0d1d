use std::cmp::Ordering;

// Unicode 15.0 general category P* (connector, dash, open, close, initial,
// final and other punctuation). Sorted and non-overlapping.
static PUNCTUATION: &[(char, char)] = &[
    ('\u{21}', '\u{23}'),
    ('\u{25}', '\u{2A}'),
    ('\u{2C}', '\u{2F}'),
    ('\u{3A}', '\u{3B}'),
    ('\u{3F}', '\u{40}'),
    ('\u{5B}', '\u{5D}'),
    ('\u{5F}', '\u{5F}'),
    ('\u{7B}', '\u{7B}'),
    ('\u{7D}', '\u{7D}'),
    ('\u{A1}', '\u{A1}'),
    ('\u{A7}', '\u{A7}'),
    ('\u{AB}', '\u{AB}'),
    ('\u{B6}', '\u{B7}'),
    ('\u{BB}', '\u{BB}'),
    ('\u{BF}', '\u{BF}'),
    ('\u{37E}', '\u{37E}'),
    ('\u{387}', '\u{387}'),
    ('\u{55A}', '\u{55F}'),
    ('\u{589}', '\u{58A}'),
    ('\u{5BE}', '\u{5BE}'),
    ('\u{5C0}', '\u{5C0}'),
    ('\u{5C3}', '\u{5C3}'),
    ('\u{5C6}', '\u{5C6}'),
    ('\u{5F3}', '\u{5F4}'),
    ('\u{609}', '\u{60A}'),
    ('\u{60C}', '\u{60D}'),
    ('\u{61B}', '\u{61B}'),
    ('\u{61D}', '\u{61F}'),
    ('\u{66A}', '\u{66D}'),
    ('\u{6D4}', '\u{6D4}'),
    ('\u{700}', '\u{70D}'),
    ('\u{7F7}', '\u{7F9}'),
    ('\u{830}', '\u{83E}'),
    ('\u{85E}', '\u{85E}'),
    ('\u{964}', '\u{965}'),
    ('\u{970}', '\u{970}'),
    ('\u{9FD}', '\u{9FD}'),
    ('\u{A76}', '\u{A76}'),
    ('\u{AF0}', '\u{AF0}'),
    ('\u{C77}', '\u{C77}'),
    ('\u{C84}', '\u{C84}'),
    ('\u{DF4}', '\u{DF4}'),
    ('\u{E4F}', '\u{E4F}'),
    ('\u{E5A}', '\u{E5B}'),
    ('\u{F04}', '\u{F12}'),
    ('\u{F14}', '\u{F14}'),
    ('\u{F3A}', '\u{F3D}'),
    ('\u{F85}', '\u{F85}'),
    ('\u{FD0}', '\u{FD4}'),
    ('\u{FD9}', '\u{FDA}'),
    ('\u{104A}', '\u{104F}'),
    ('\u{10FB}', '\u{10FB}'),
    ('\u{1360}', '\u{1368}'),
    ('\u{1400}', '\u{1400}'),
    ('\u{166E}', '\u{166E}'),
    ('\u{169B}', '\u{169C}'),
    ('\u{16EB}', '\u{16ED}'),
    ('\u{1735}', '\u{1736}'),
    ('\u{17D4}', '\u{17D6}'),
    ('\u{17D8}', '\u{17DA}'),
    ('\u{1800}', '\u{180A}'),
    ('\u{1944}', '\u{1945}'),
    ('\u{1A1E}', '\u{1A1F}'),
    ('\u{1AA0}', '\u{1AA6}'),
    ('\u{1AA8}', '\u{1AAD}'),
    ('\u{1B5A}', '\u{1B60}'),
    ('\u{1B7D}', '\u{1B7E}'),
    ('\u{1BFC}', '\u{1BFF}'),
    ('\u{1C3B}', '\u{1C3F}'),
    ('\u{1C7E}', '\u{1C7F}'),
    ('\u{1CC0}', '\u{1CC7}'),
    ('\u{1CD3}', '\u{1CD3}'),
    ('\u{2010}', '\u{2027}'),
    ('\u{2030}', '\u{2043}'),
    ('\u{2045}', '\u{2051}'),
    ('\u{2053}', '\u{205E}'),
    ('\u{207D}', '\u{207E}'),
    ('\u{208D}', '\u{208E}'),
    ('\u{2308}', '\u{230B}'),
    ('\u{2329}', '\u{232A}'),
    ('\u{2768}', '\u{2775}'),
    ('\u{27C5}', '\u{27C6}'),
    ('\u{27E6}', '\u{27EF}'),
    ('\u{2983}', '\u{2998}'),
    ('\u{29D8}', '\u{29DB}'),
    ('\u{29FC}', '\u{29FD}'),
    ('\u{2CF9}', '\u{2CFC}'),
    ('\u{2CFE}', '\u{2CFF}'),
    ('\u{2D70}', '\u{2D70}'),
    ('\u{2E00}', '\u{2E2E}'),
    ('\u{2E30}', '\u{2E4F}'),
    ('\u{2E52}', '\u{2E5D}'),
    ('\u{3001}', '\u{3003}'),
    ('\u{3008}', '\u{3011}'),
    ('\u{3014}', '\u{301F}'),
    ('\u{3030}', '\u{3030}'),
    ('\u{303D}', '\u{303D}'),
    ('\u{30A0}', '\u{30A0}'),
    ('\u{30FB}', '\u{30FB}'),
    ('\u{A4FE}', '\u{A4FF}'),
    ('\u{A60D}', '\u{A60F}'),
    ('\u{A673}', '\u{A673}'),
    ('\u{A67E}', '\u{A67E}'),
    ('\u{A6F2}', '\u{A6F7}'),
    ('\u{A874}', '\u{A877}'),
    ('\u{A8CE}', '\u{A8CF}'),
    ('\u{A8F8}', '\u{A8FA}'),
    ('\u{A8FC}', '\u{A8FC}'),
    ('\u{A92E}', '\u{A92F}'),
    ('\u{A95F}', '\u{A95F}'),
    ('\u{A9C1}', '\u{A9CD}'),
    ('\u{A9DE}', '\u{A9DF}'),
    ('\u{AA5C}', '\u{AA5F}'),
    ('\u{AADE}', '\u{AADF}'),
    ('\u{AAF0}', '\u{AAF1}'),
    ('\u{ABEB}', '\u{ABEB}'),
    ('\u{FD3E}', '\u{FD3F}'),
    ('\u{FE10}', '\u{FE19}'),
    ('\u{FE30}', '\u{FE52}'),
    ('\u{FE54}', '\u{FE61}'),
    ('\u{FE63}', '\u{FE63}'),
    ('\u{FE68}', '\u{FE68}'),
    ('\u{FE6A}', '\u{FE6B}'),
    ('\u{FF01}', '\u{FF03}'),
    ('\u{FF05}', '\u{FF0A}'),
    ('\u{FF0C}', '\u{FF0F}'),
    ('\u{FF1A}', '\u{FF1B}'),
    ('\u{FF1F}', '\u{FF20}'),
    ('\u{FF3B}', '\u{FF3D}'),
    ('\u{FF3F}', '\u{FF3F}'),
    ('\u{FF5B}', '\u{FF5B}'),
    ('\u{FF5D}', '\u{FF5D}'),
    ('\u{FF5F}', '\u{FF65}'),
    ('\u{10100}', '\u{10102}'),
    ('\u{1039F}', '\u{1039F}'),
    ('\u{103D0}', '\u{103D0}'),
    ('\u{1056F}', '\u{1056F}'),
    ('\u{10857}', '\u{10857}'),
    ('\u{1091F}', '\u{1091F}'),
    ('\u{1093F}', '\u{1093F}'),
    ('\u{10A50}', '\u{10A58}'),
    ('\u{10A7F}', '\u{10A7F}'),
    ('\u{10AF0}', '\u{10AF6}'),
    ('\u{10B39}', '\u{10B3F}'),
    ('\u{10B99}', '\u{10B9C}'),
    ('\u{10EAD}', '\u{10EAD}'),
    ('\u{10F55}', '\u{10F59}'),
    ('\u{10F86}', '\u{10F89}'),
    ('\u{11047}', '\u{1104D}'),
    ('\u{110BB}', '\u{110BC}'),
    ('\u{110BE}', '\u{110C1}'),
    ('\u{11140}', '\u{11143}'),
    ('\u{11174}', '\u{11175}'),
    ('\u{111C5}', '\u{111C8}'),
    ('\u{111CD}', '\u{111CD}'),
    ('\u{111DB}', '\u{111DB}'),
    ('\u{111DD}', '\u{111DF}'),
    ('\u{11238}', '\u{1123D}'),
    ('\u{112A9}', '\u{112A9}'),
    ('\u{1144B}', '\u{1144F}'),
    ('\u{1145A}', '\u{1145B}'),
    ('\u{1145D}', '\u{1145D}'),
    ('\u{114C6}', '\u{114C6}'),
    ('\u{115C1}', '\u{115D7}'),
    ('\u{11641}', '\u{11643}'),
    ('\u{11660}', '\u{1166C}'),
    ('\u{116B9}', '\u{116B9}'),
    ('\u{1173C}', '\u{1173E}'),
    ('\u{1183B}', '\u{1183B}'),
    ('\u{11944}', '\u{11946}'),
    ('\u{119E2}', '\u{119E2}'),
    ('\u{11A3F}', '\u{11A46}'),
    ('\u{11A9A}', '\u{11A9C}'),
    ('\u{11A9E}', '\u{11AA2}'),
    ('\u{11B00}', '\u{11B09}'),
    ('\u{11C41}', '\u{11C45}'),
    ('\u{11C70}', '\u{11C71}'),
    ('\u{11EF7}', '\u{11EF8}'),
    ('\u{11F43}', '\u{11F4F}'),
    ('\u{11FFF}', '\u{11FFF}'),
    ('\u{12470}', '\u{12474}'),
    ('\u{12FF1}', '\u{12FF2}'),
    ('\u{16A6E}', '\u{16A6F}'),
    ('\u{16AF5}', '\u{16AF5}'),
    ('\u{16B37}', '\u{16B3B}'),
    ('\u{16B44}', '\u{16B44}'),
    ('\u{16E97}', '\u{16E9A}'),
    ('\u{16FE2}', '\u{16FE2}'),
    ('\u{1BC9F}', '\u{1BC9F}'),
    ('\u{1DA87}', '\u{1DA8B}'),
    ('\u{1E95E}', '\u{1E95F}'),
];

#[inline]
pub fn is_punctuation(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_punctuation() && !"$+<=>^`|~".contains(c);
    }

    PUNCTUATION
        .binary_search_by(|&(lo, hi)| {
            if hi < c {
                Ordering::Less
            } else if lo > c {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// True for text that would split a name into several words.
pub fn has_separators(text: &str) -> bool {
    text.chars().any(|c| c.is_whitespace() || is_punctuation(c))
}
