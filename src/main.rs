use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use datadig::config::Config;
use datadig::document::Document;
use datadig::file::loader::{load_document, load_document_from_stdin, parse_document, SourceFormat};
use datadig::file::writer::{render, OutputFormat};
use datadig::{Accessor, SeekOptions};

/// Prefix that forces a token to be a string key, e.g. `=2024`.
const STRING_KEY_PREFIX: char = '=';

/// datadig - Seek a value inside a JSON or YAML document
#[derive(Parser)]
#[command(name = "datadig")]
#[command(version)]
#[command(about = "Seek a value inside a JSON or YAML document", long_about = None)]
struct Cli {
    /// Accessors to follow from the root; integer tokens index into sequences,
    /// a leading '=' makes a token a string key (`=2024`)
    #[arg(allow_negative_numbers = true)]
    accessors: Vec<String>,

    /// Document to read (.json, .yaml, .yml, optionally .gz); stdin when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output format (default from config: yaml)
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long, overrides_with = "no_pretty")]
    pretty: bool,

    /// Print compact JSON even if the config enables pretty output
    #[arg(long = "no-pretty", overrides_with = "pretty")]
    no_pretty: bool,

    /// Print this value (parsed as YAML) instead of failing when the path is missing
    #[arg(short, long, allow_hyphen_values = true)]
    default: Option<String>,

    /// Treat every accessor as a string key
    #[arg(short, long, overrides_with = "no_strings")]
    strings: bool,

    /// Classify integer tokens as indices even if the config sets `strings`
    #[arg(long = "no-strings", overrides_with = "strings")]
    no_strings: bool,
}

impl Cli {
    fn strings(&self, config: &Config) -> bool {
        flag(self.strings, self.no_strings, config.strings)
    }

    fn pretty(&self, config: &Config) -> bool {
        flag(self.pretty, self.no_pretty, config.pretty)
    }
}

/// Resolves a `--flag`/`--no-flag` pair against the configured value.
fn flag(on: bool, off: bool, configured: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        configured
    }
}

/// Turns one command-line token into an accessor.
///
/// A leading `=` is stripped and the rest is a string key, so `=2024` reaches
/// the JSON key `"2024"` and `==x` the key `"=x"`.
fn classify_token(token: &str, strings: bool) -> Accessor {
    match token.strip_prefix(STRING_KEY_PREFIX) {
        Some(key) => Accessor::from(key),
        None if strings => Accessor::from(token),
        None => Accessor::parse_token(token),
    }
}

fn run(cli: &Cli, config: &Config, document: Document) -> Result<String> {
    let strings = cli.strings(config);
    let accessors: Vec<Accessor> = cli
        .accessors
        .iter()
        .map(|token| classify_token(token, strings))
        .collect();

    log::debug!(
        "seeking {} accessor(s) in a {} document",
        accessors.len(),
        document.type_name()
    );

    let options = SeekOptions::default();
    let found = match &cli.default {
        Some(default) => match document.dig(&accessors, &options) {
            Some(found) => found,
            None => parse_document(default, SourceFormat::Yaml)
                .context("Invalid --default value")?,
        },
        None => document.seek(&accessors, &options)?,
    };

    let format = cli.output.unwrap_or(config.output_format);
    render(&found, format, cli.pretty(config))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load();

    let document = match &cli.file {
        Some(path) => load_document(path)?,
        None => {
            if io::stdin().is_terminal() {
                bail!("No input: pass --file or pipe a document on stdin");
            }
            load_document_from_stdin()?
        }
    };

    println!("{}", run(&cli, &config, document)?);

    Ok(())
}
