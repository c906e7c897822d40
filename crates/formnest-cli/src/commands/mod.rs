pub mod inspect;
pub mod to_json;
