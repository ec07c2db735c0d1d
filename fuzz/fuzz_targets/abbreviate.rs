#![no_main]
use libfuzzer_sys::fuzz_target;
use name_abbrev::{abbreviate_name, try_abbreviate_name, PersonName};

fuzz_target!(|data: [String; 3]| {
    let [given, family, locale] = data;
    let name = PersonName::new(Some(&given), Some(&family));
    if let Some(abbreviation) = try_abbreviate_name(&name, None) {
        assert!(!abbreviation.is_empty());
    }
    abbreviate_name(&name, &locale, None);
});
