//! A C API for abbreviating and formatting names.
//!
//! Null pointers stand for missing name parts. Every returned string is
//! owned by the caller and must be released with `name_abbrev_free_string`.
//! A null return means the result couldn't be represented as a C string.

use super::{
    abbreviate_business_name, abbreviate_name, format_name, has_eastern_name_order_formatter,
    FormatOptions, PersonName,
};
use libc::c_char;
use std::borrow::Cow;
use std::ffi::{CStr, CString};
use std::mem;
use std::ptr;

macro_rules! cow_to_char_star {
    ($cow:expr) => {
        match CString::new($cow.into_owned()) {
            Ok(s) => s.into_raw() as *const c_char,
            Err(_) => ptr::null(),
        }
    };
}

unsafe fn optional_str<'a>(input: *const c_char) -> Option<Cow<'a, str>> {
    if input.is_null() {
        None
    } else {
        Some(CStr::from_ptr(input).to_string_lossy())
    }
}

/// # Safety
///
/// Each argument must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn name_abbrev_abbreviate_name(
    given_name: *const c_char,
    family_name: *const c_char,
    locale: *const c_char,
    ideal_max_length: u32,
) -> *const c_char {
    let given_name = optional_str(given_name);
    let family_name = optional_str(family_name);
    let locale = optional_str(locale).unwrap_or(Cow::Borrowed(""));
    let name = PersonName::new(given_name.as_deref(), family_name.as_deref());
    let ideal_max_length = if ideal_max_length == 0 {
        None
    } else {
        Some(ideal_max_length as usize)
    };

    cow_to_char_star!(abbreviate_name(&name, &locale, ideal_max_length))
}

/// # Safety
///
/// Each argument must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn name_abbrev_format_name(
    given_name: *const c_char,
    family_name: *const c_char,
    locale: *const c_char,
    full: bool,
) -> *const c_char {
    let given_name = optional_str(given_name);
    let family_name = optional_str(family_name);
    let locale = optional_str(locale).unwrap_or(Cow::Borrowed(""));
    let name = PersonName::new(given_name.as_deref(), family_name.as_deref());

    cow_to_char_star!(format_name(&name, &locale, FormatOptions { full }))
}

/// # Safety
///
/// `name` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn name_abbrev_abbreviate_business_name(
    name: *const c_char,
    ideal_max_length: u32,
) -> *const c_char {
    let name = optional_str(name);
    let ideal_max_length = if ideal_max_length == 0 {
        None
    } else {
        Some(ideal_max_length as usize)
    };

    cow_to_char_star!(abbreviate_business_name(name.as_deref(), ideal_max_length))
}

/// # Safety
///
/// `locale` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn name_abbrev_has_eastern_name_order_formatter(
    locale: *const c_char,
) -> bool {
    optional_str(locale).map_or(false, |locale| has_eastern_name_order_formatter(&locale))
}

/// # Safety
///
/// `str_ptr` must be null or a pointer returned by this library, not yet
/// freed.
#[no_mangle]
pub unsafe extern "C" fn name_abbrev_free_string(str_ptr: *mut c_char) {
    if !str_ptr.is_null() {
        mem::drop(CString::from_raw(str_ptr));
    }
}
