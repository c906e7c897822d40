use std::fs;
use std::io::{self, Read};

use anyhow::Context as _;

/// Read input from a file path, or from stdin for `None` and `Some("-")`.
pub fn read_input(file: Option<&str>) -> anyhow::Result<String> {
    match file {
        None | Some("-") => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read from stdin")?;
            Ok(buffer)
        }
        Some(path) => fs::read_to_string(path).with_context(|| format!("failed to read {path}")),
    }
}

/// Form data is a single line; a trailing newline from files or `echo`
/// would otherwise end up in the last value.
pub fn trim_line_ending(input: &str) -> &str {
    input.trim_end_matches(['\r', '\n'])
}
