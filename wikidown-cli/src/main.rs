// wikidown: convert MediaWiki pages to Markdown from the shell
//
// The conversion itself lives in wikidown-babel. This binary reads the input
// file, layers configuration (embedded defaults, ./wikidown.toml, --config,
// then --extra-* overrides), sets up env_logger and turns failures into exit
// code 1 with a one-line message on stderr.
//
//  wikidown <file> [--from F] [--to F] [-o out]   convert (default subcommand)
//  wikidown inspect <file> [treeviz|json]         dump the parsed tree
//  wikidown --list-formats                        registered formats
//
// --extra-<name> [value] pairs are pulled out before clap sees the arguments.
// A pair without a value means "true".

mod cli;

use log::{debug, LevelFilter};
use std::collections::HashMap;
use std::fs;
use std::process::ExitCode;
use thiserror::Error;
use wikidown_babel::format::Direction;
use wikidown_babel::formats::{JsonFormat, MarkdownFormat, TreevizFormat, WikitextFormat};
use wikidown_babel::publish::{publish_with_registry, PublishArtifact, PublishSpec};
use wikidown_babel::source::load_source;
use wikidown_babel::{Document, FormatError, FormatRegistry};
use wikidown_config::{ConfigError, LogLevel, Loader, WikidownConfig};

/// `--extra-*` parameters, keyed without the prefix.
type Extras = HashMap<String, String>;

#[derive(Debug, Error)]
enum CliError {
    #[error("Nothing to do, use --help for usage information")]
    NoCommand,
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid value '{value}' for --extra-{key}")]
    Override { key: String, value: String },
    #[error("Error reading file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Could not detect format from filename '{0}', pass --from")]
    Undetected(String),
    #[error("Error: {0}")]
    Format(FormatError),
    #[error("Parse error: {0}")]
    Parse(FormatError),
    #[error("Serialization error: {0}")]
    Serialize(FormatError),
}

/// Remove `--extra-<key> [value]` (or `--extras-…`) pairs from `args`.
fn split_extras(args: impl IntoIterator<Item = String>) -> (Vec<String>, Extras) {
    let mut kept = Vec::new();
    let mut extras = Extras::new();
    let mut args = args.into_iter().peekable();

    while let Some(arg) = args.next() {
        let key = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));
        let Some(key) = key else {
            kept.push(arg);
            continue;
        };
        let value = args
            .next_if(|next| !next.starts_with('-'))
            .unwrap_or_else(|| "true".to_string());
        extras.insert(key.to_string(), value);
    }

    (kept, extras)
}

/// Insert the default subcommand when the first argument is a file.
fn with_default_subcommand(mut args: Vec<String>) -> Vec<String> {
    let needs_default = args.get(1).is_some_and(|first| {
        !first.starts_with('-') && !matches!(first.as_str(), "convert" | "inspect" | "help")
    });
    if needs_default {
        args.insert(1, cli::DEFAULT_SUBCOMMAND.to_string());
    }
    args
}

fn main() -> ExitCode {
    let (args, extras) = split_extras(std::env::args());
    let matches = match cli::build_cli().try_get_matches_from(with_default_subcommand(args)) {
        Ok(matches) => matches,
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    match run(&matches, extras) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &clap::ArgMatches, mut extras: Extras) -> Result<(), CliError> {
    let mut config = load_config(matches.get_one::<String>("config").map(String::as_str))?;
    take_config_overrides(&mut config, &mut extras)?;
    init_logging(config.log.level);

    let registry = build_registry(&config);
    if matches.get_flag("list-formats") {
        print_formats(&registry);
        return Ok(());
    }

    match matches.subcommand() {
        Some(("inspect", sub)) => {
            let path = sub.get_one::<String>("path").expect("path is required");
            let dump = sub.get_one::<String>("format").expect("format has a default");
            let doc = read_document(&registry, path, "wikitext", &config)?;
            let text = registry
                .serialize_with_options(&doc, dump, &extras)
                .map_err(CliError::Serialize)?;
            print!("{text}");
            Ok(())
        }
        Some(("convert", sub)) => {
            let input = sub.get_one::<String>("input").expect("input is required");
            let to = sub.get_one::<String>("to").expect("to has a default");
            let from = match sub.get_one::<String>("from") {
                Some(from) => from.clone(),
                None => registry
                    .detect_format_from_filename(input)
                    .ok_or_else(|| CliError::Undetected(input.clone()))?,
            };
            let output = sub.get_one::<String>("output").map(String::as_str);
            convert(&registry, input, &from, to, output, extras, &config)
        }
        _ => Err(CliError::NoCommand),
    }
}

/// Formats with the configured limits applied.
fn build_registry(config: &WikidownConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::new();
    registry.register(WikitextFormat::with_options((&config.parse).into()));
    registry.register(MarkdownFormat::with_options((&config.render).into()));
    registry.register(TreevizFormat);
    registry.register(JsonFormat);
    registry
}

fn read_document(
    registry: &FormatRegistry,
    path: &str,
    from: &str,
    config: &WikidownConfig,
) -> Result<Document, CliError> {
    let bytes = fs::read(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })?;
    let source = load_source(&bytes, config.input.max_bytes);
    debug!("parsing {} bytes of '{path}' as {from}", source.len());
    registry.parse(&source, from).map_err(CliError::Parse)
}

fn convert(
    registry: &FormatRegistry,
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extras: Extras,
    config: &WikidownConfig,
) -> Result<(), CliError> {
    // both ends are checked before the input is read
    registry
        .require(from, Direction::Import)
        .and(registry.require(to, Direction::Export))
        .map_err(CliError::Format)?;

    let doc = read_document(registry, input, from, config)?;
    let mut spec = PublishSpec::new(&doc, to).with_options(extras);
    if let Some(path) = output {
        spec = spec.with_output_path(path);
    }

    match publish_with_registry(spec, registry)
        .map_err(CliError::Serialize)?
        .artifact
    {
        PublishArtifact::InMemory(text) => print!("{text}"),
        PublishArtifact::File(path) => debug!("{input} -> {}", path.display()),
    }
    Ok(())
}

fn print_formats(registry: &FormatRegistry) {
    println!("Available formats:\n");
    for direction in [Direction::Import, Direction::Export] {
        for format in registry.formats(direction) {
            let arrow = match direction {
                Direction::Import => "in",
                Direction::Export => "out",
            };
            println!("  {:<10} {arrow:<4} {}", format.name(), format.description());
        }
    }
}

fn init_logging(level: LogLevel) {
    let filter = match level {
        LogLevel::Off => LevelFilter::Off,
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    };
    // RUST_LOG wins over the configured level
    env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .init();
}

fn load_config(explicit: Option<&str>) -> Result<WikidownConfig, CliError> {
    let mut loader = Loader::new().with_optional_file("wikidown.toml");
    if let Some(path) = explicit {
        loader = loader.with_file(path);
    }
    Ok(loader.build()?)
}

/// Move configuration keys out of `extras` into `config`.
///
/// Whatever is left belongs to the output format.
fn take_config_overrides(config: &mut WikidownConfig, extras: &mut Extras) -> Result<(), CliError> {
    let sizes: [(&[&str], &mut usize); 5] = [
        (&["max-bytes", "max-input-bytes"], &mut config.input.max_bytes),
        (&["text-buffer-capacity"], &mut config.parse.text_buffer_capacity),
        (&["max-depth"], &mut config.parse.max_depth),
        (&["output-capacity"], &mut config.render.output_capacity),
        (&["link-capacity"], &mut config.render.link_capacity),
    ];
    for (keys, slot) in sizes {
        if let Some((key, value)) = take_first(extras, keys) {
            *slot = value
                .trim()
                .parse()
                .map_err(|_| CliError::Override { key, value })?;
        }
    }

    if let Some((key, value)) = take_first(extras, &["log-level", "log"]) {
        config.log.level = value
            .parse()
            .map_err(|_| CliError::Override { key, value })?;
    }
    Ok(())
}

fn take_first(extras: &mut Extras, keys: &[&str]) -> Option<(String, String)> {
    keys.iter().find_map(|key| extras.remove_entry(*key))
}
