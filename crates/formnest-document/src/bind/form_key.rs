//! FromFormKey trait and implementations for map key types.

use super::{parse_signed, parse_unsigned};

/// Types usable as keys of a map bound from a form node.
///
/// Named children provide their name, indexed children their index rendered
/// in decimal. A key that does not convert skips its entry.
pub trait FromFormKey: Sized {
    fn from_form_key(key: &str) -> Option<Self>;
}

impl FromFormKey for String {
    fn from_form_key(key: &str) -> Option<Self> {
        Some(key.to_string())
    }
}

impl FromFormKey for bool {
    fn from_form_key(key: &str) -> Option<Self> {
        crate::value::parse_bool_literal(key)
    }
}

impl FromFormKey for char {
    fn from_form_key(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        let c = chars.next()?;
        chars.next().is_none().then_some(c)
    }
}

macro_rules! impl_from_form_key_for_int {
    ($parse:path; $($ty:ty),*) => {
        $(
            impl FromFormKey for $ty {
                fn from_form_key(key: &str) -> Option<Self> {
                    $parse(key)
                }
            }
        )*
    };
}

impl_from_form_key_for_int!(parse_signed; i8, i16, i32, i64, i128, isize);
impl_from_form_key_for_int!(parse_unsigned; u8, u16, u32, u64, u128, usize);
