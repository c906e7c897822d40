use anyhow::Context as _;
use formnest::Parser;
use formnest::json::{Config as JsonConfig, NonFinitePolicy};

use crate::util::{read_input, trim_line_ending};

#[derive(clap::Args)]
pub struct Args {
    /// Path to a file holding form data (use - for stdin)
    #[arg(default_value = "-")]
    pub file: String,
    /// Unescape \uXXXX sequences and an outer URL encoding, and accept
    /// `key = value` lines
    #[arg(short, long)]
    pub encoded: bool,
    /// Pretty print JSON output
    #[arg(short, long)]
    pub pretty: bool,
    /// Write NaN and infinite numbers as null instead of failing
    #[arg(long)]
    pub null_non_finite: bool,
    /// Largest bracket index read as an array position
    #[arg(long)]
    pub max_index: Option<usize>,
    /// Largest number of bracket groups read from one key
    #[arg(long)]
    pub max_depth: Option<usize>,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let input = read_input(Some(&args.file))?;

    let mut document_config = formnest::Config::default();
    if let Some(max_index) = args.max_index {
        document_config = document_config.with_max_index(max_index);
    }
    if let Some(max_depth) = args.max_depth {
        document_config = document_config.with_max_depth(max_depth);
    }
    let json_config = JsonConfig {
        non_finite: if args.null_non_finite {
            NonFinitePolicy::Null
        } else {
            NonFinitePolicy::Error
        },
    };
    let parser = Parser::new()
        .with_document_config(document_config)
        .with_json_config(json_config);

    let document = if args.encoded {
        parser.document_encoded(&input)
    } else {
        parser.document(trim_line_ending(&input))
    }
    .context("failed to decode form data")?;
    for diagnostic in document.diagnostics() {
        tracing::debug!(%diagnostic, "resolved");
    }

    let value = document.to_value();
    let output = if args.pretty {
        formnest::json::to_string_pretty(&value, parser.json_config())
    } else {
        formnest::json::to_string(&value, parser.json_config())
    }
    .context("failed to convert to JSON")?;

    println!("{output}");
    Ok(())
}
