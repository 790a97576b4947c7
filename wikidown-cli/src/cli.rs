// Command definition shared by the binary and build.rs (via include!), so the
// generated shell completions always describe the real interface.

use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, Command, ValueHint};

/// Dumps `inspect` can produce; the first one is the default.
pub const INSPECT_FORMATS: &[&str] = &["treeviz", "json"];

/// Subcommand assumed when the first argument is a file.
pub const DEFAULT_SUBCOMMAND: &str = "convert";

const ABOUT: &str = "\
Turns MediaWiki pages into Markdown. A bare file argument runs `convert`.

Settings are read from ./wikidown.toml when present, then from --config.
Any --extra-<name> [value] pair is handed to the output format; the names
max-bytes, text-buffer-capacity, max-depth, output-capacity,
link-capacity and log-level change the configuration instead.

  wikidown Page.wiki                  Markdown on stdout
  wikidown Page.wiki -o Page.md       Markdown into a file
  wikidown inspect Page.wiki json     Parsed tree as JSON";

const INSPECT_ABOUT: &str = "\
Parses a wikitext file and prints the tree the renderer would walk.

  treeviz   indented tree with one glyph per node kind (default)
            --extra-show-index adds arena indices
  json      nested objects, --extra-pretty false for one line";

const CONVERT_ABOUT: &str = "\
Reads a file, parses it and writes it in the target format.

The source format follows the extension (.wiki, .wikitext, .mediawiki)
unless --from names it. Nothing is written when rendering fails.";

pub fn build_cli() -> Command {
    Command::new("wikidown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("MediaWiki wikitext to Markdown converter")
        .long_about(ABOUT)
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("Print the registered formats and exit")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Extra TOML settings layered over the defaults")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new(DEFAULT_SUBCOMMAND)
                .about("Convert a page (used when no subcommand is given)")
                .long_about(CONVERT_ABOUT)
                .arg(
                    Arg::new("input")
                        .value_name("FILE")
                        .help("Page to convert")
                        .required(true)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .value_name("FORMAT")
                        .help("Input format when the extension is not recognised"),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .value_name("FORMAT")
                        .default_value("markdown")
                        .help("Output format"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .help("Write here instead of stdout")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the parsed document tree")
                .long_about(INSPECT_ABOUT)
                .arg(
                    Arg::new("path")
                        .value_name("FILE")
                        .help("Wikitext page")
                        .required(true)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("format")
                        .value_name("DUMP")
                        .help("Dump style")
                        .value_parser(PossibleValuesParser::new(INSPECT_FORMATS))
                        .default_value(INSPECT_FORMATS[0]),
                ),
        )
}
