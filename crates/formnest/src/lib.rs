#![doc = include_str!("../README.md")]

mod error;
mod helpers;
mod parser;
pub mod preprocess;

pub use error::Error;
pub use helpers::{ValueError, parse_float, parse_int, parse_timestamp};
pub use parser::Parser;

pub use formnest_document as document;
pub use formnest_json as json;

pub use formnest_document::{
    BindWarning, Config, Diagnostic, FlatCorpus, FormDocument, FormValue, FromForm, FromFormKey,
    Map,
};
pub use formnest_macros::FromForm;
