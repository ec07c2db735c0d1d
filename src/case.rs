use std::borrow::Cow;

#[derive(Debug)]
enum CaseMapping {
    Empty,
    Single(char),
    Double(char, char),
    Triple(char, char, char),
}

impl CaseMapping {
    #[inline]
    fn titlecase(c: char) -> CaseMapping {
        let [x, y, z] = unicode_case_mapping::to_titlecase(c);
        Self::from_u32s(x, y, z)
    }

    // The mapping tables use zero for "no character"
    #[inline]
    fn from_u32s(x: u32, y: u32, z: u32) -> CaseMapping {
        match (char::from_u32(x), char::from_u32(y), char::from_u32(z)) {
            (Some(x), _, _) if x == '\0' => CaseMapping::Empty,
            (Some(x), Some(y), _) if y == '\0' => CaseMapping::Single(x),
            (Some(x), Some(y), Some(z)) if z == '\0' => CaseMapping::Double(x, y),
            (Some(x), Some(y), Some(z)) => CaseMapping::Triple(x, y, z),
            _ => CaseMapping::Empty,
        }
    }
}

impl Iterator for CaseMapping {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        match *self {
            CaseMapping::Triple(x, y, z) => {
                *self = CaseMapping::Double(y, z);
                Some(x)
            }
            CaseMapping::Double(x, y) => {
                *self = CaseMapping::Single(y);
                Some(x)
            }
            CaseMapping::Single(x) => {
                *self = CaseMapping::Empty;
                Some(x)
            }
            CaseMapping::Empty => None,
        }
    }
}

/// Titlecases the base character of an initial, keeping any attached marks.
///
/// Characters without a titlecase mapping (digits, most non-Latin letters)
/// are left alone, in which case the input is returned borrowed.
pub fn titlecase_initial(initial: &str) -> Cow<str> {
    let mut chars = initial.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return Cow::Borrowed(initial),
    };

    let mut mapped = CaseMapping::titlecase(first).peekable();
    match mapped.peek() {
        None => Cow::Borrowed(initial),
        Some(&c) if c == first => Cow::Borrowed(initial),
        Some(_) => {
            let mut result = String::with_capacity(initial.len() + 2);
            result.extend(mapped);
            result.push_str(chars.as_str());
            Cow::Owned(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii() {
        assert_eq!("S", titlecase_initial("s"));
        assert_eq!("S", titlecase_initial("S"));
        assert!(matches!(titlecase_initial("S"), Cow::Borrowed(_)));
    }

    #[test]
    fn unmapped() {
        assert_eq!("1", titlecase_initial("1"));
        assert_eq!("", titlecase_initial(""));
        assert!(matches!(titlecase_initial("1"), Cow::Borrowed(_)));
    }

    #[test]
    fn titlecase_differs_from_uppercase() {
        // U+01C6 (dž) titlecases to U+01C5 (Dž), not U+01C4 (DŽ)
        assert_eq!("\u{1C5}", titlecase_initial("\u{1C6}"));
        assert_eq!("Ss", titlecase_initial("ß"));
    }

    #[test]
    fn marks_are_kept() {
        assert_eq!("E\u{301}", titlecase_initial("e\u{301}"));
    }
}
