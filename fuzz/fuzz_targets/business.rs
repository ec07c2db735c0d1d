#![no_main]
use libfuzzer_sys::fuzz_target;
use name_abbrev::abbreviate_business_name;

fuzz_target!(|data: &str| {
    abbreviate_business_name(Some(data), None);
});
