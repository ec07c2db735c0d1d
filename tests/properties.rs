use name_abbrev::{
    abbreviate_business_name, abbreviate_name, identify_scripts, try_abbreviate_business_name,
    try_abbreviate_name, PersonName,
};
use proptest::prelude::*;

fn locale() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("en"), Just("ja"), Just("ko"), Just("zh-CN"), Just("zh-TW"), Just("fr-CA")]
}

fn name_part() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None::<String>),
        "\\PC{0,12}".prop_map(Some),
        "[A-Za-z]{1,10}".prop_map(Some),
        "[가-힣]{1,6}".prop_map(Some),
        "[ก-ฮ]{1,6}".prop_map(Some),
        "[ア-ン]{1,6}".prop_map(Some),
    ]
}

proptest! {
    #[test]
    fn deterministic(given in name_part(), family in name_part(), max in proptest::option::of(0usize..6)) {
        let name = PersonName::new(given.as_deref(), family.as_deref());
        prop_assert_eq!(try_abbreviate_name(&name, max), try_abbreviate_name(&name, max));
    }

    #[test]
    fn never_empty_abbreviation(given in name_part(), family in name_part(), max in proptest::option::of(0usize..6)) {
        let name = PersonName::new(given.as_deref(), family.as_deref());
        if let Some(abbreviation) = try_abbreviate_name(&name, max) {
            prop_assert!(!abbreviation.is_empty());
        }
    }

    #[test]
    fn fallback_is_total(given in name_part(), family in name_part(), locale in locale()) {
        let name = PersonName::new(given.as_deref(), family.as_deref());
        let has_part = given.as_deref().map_or(false, |s| !s.is_empty())
            || family.as_deref().map_or(false, |s| !s.is_empty());
        let result = abbreviate_name(&name, locale, None);
        prop_assert_eq!(has_part, !result.is_empty());
    }

    #[test]
    fn mixed_scripts_never_abbreviate(latin in "[A-Za-z]{1,8}", hangul in "[가-힣]{1,4}") {
        let name = PersonName::new(Some(&latin), Some(&hangul));
        prop_assert_eq!(None, try_abbreviate_name(&name, None));
        prop_assert_eq!(2, identify_scripts(&format!("{}{}", latin, hangul)).len());
    }

    #[test]
    fn separators_never_abbreviate(first in "[A-Za-z]{1,8}", second in "[A-Za-z]{1,8}", sep in "[ .,'-]") {
        let family = format!("{}{}{}", first, sep, second);
        let name = PersonName::new(Some(&first), Some(&family));
        prop_assert_eq!(None, try_abbreviate_name(&name, None));
    }

    #[test]
    fn latin_initials(given in "[A-Za-z][a-z]{0,8}", family in "[A-Za-z][a-z]{0,8}") {
        let name = PersonName::new(Some(&given), Some(&family));
        let expected = format!("{}{}", &given[..1], &family[..1]);
        let abbreviation = try_abbreviate_name(&name, None);
        prop_assert_eq!(Some(expected.as_str()), abbreviation.as_deref());
    }

    #[test]
    fn digits_never_abbreviate(given in "[A-Za-z]{0,6}[0-9][A-Za-z0-9]{0,4}", family in "[A-Za-z]{1,8}") {
        let name = PersonName::new(Some(&given), Some(&family));
        prop_assert_eq!(None, try_abbreviate_name(&name, None));
    }

    #[test]
    fn business_fallback_is_input(name in "\\PC{0,16}") {
        let result = abbreviate_business_name(Some(&name), None);
        match try_abbreviate_business_name(Some(&name), None) {
            Some(abbreviation) => prop_assert_eq!(abbreviation, result),
            None => prop_assert_eq!(name.as_str(), &*result),
        }
    }
}
