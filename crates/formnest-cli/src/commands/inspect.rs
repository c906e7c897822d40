use anyhow::Context as _;
use formnest::document::path::{ParsedKey, PathSegment};
use formnest::document::value::Scalar;
use formnest::{FlatCorpus, FormDocument};

use crate::util::{read_input, trim_line_ending};

#[derive(clap::Args)]
pub struct Args {
    /// Path to a file holding form data (use - for stdin)
    #[arg(default_value = "-")]
    pub file: String,
    /// Unescape the input the same way as `to-json --encoded`
    #[arg(short, long)]
    pub encoded: bool,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let input = read_input(Some(&args.file))?;
    let form_data = if args.encoded {
        formnest::preprocess::prepare_encoded(&input)?
    } else {
        trim_line_ending(&input).to_string()
    };
    let corpus = FlatCorpus::parse(&form_data).context("failed to decode form data")?;

    for (key, value) in corpus.iter() {
        println!("{key} = {value:?}");
        match ParsedKey::try_parse(key) {
            Ok(parsed) => println!("  path: {}", describe(&parsed)),
            Err(error) => println!("  malformed: {error}"),
        }
        println!("  value: {:?}", Scalar::coerce(value));
    }

    let document = FormDocument::from_corpus(&corpus, &formnest::Config::default());
    let diagnostics = document.diagnostics();
    if !diagnostics.is_empty() {
        println!();
        for diagnostic in diagnostics {
            println!("warning: {diagnostic}");
        }
    }
    Ok(())
}

fn describe(key: &ParsedKey) -> String {
    let mut out = format!("{:?}", key.base);
    for segment in &key.segments {
        match segment {
            PathSegment::Index(index) => out.push_str(&format!(" -> #{index}")),
            PathSegment::Name(name) => out.push_str(&format!(" -> {name:?}")),
        }
    }
    out
}
