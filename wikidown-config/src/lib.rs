//! Settings for wikidown
//!
//! Configuration is a stack of TOML layers read by the `config` crate. The
//! bottom layer is `defaults/wikidown.default.toml`, compiled into the crate,
//! so every key always has a value and the file doubles as documentation.
//! Later layers win key by key.
//!
//! ```ignore
//! let config = Loader::new()
//!     .with_optional_file("wikidown.toml")
//!     .with_file("/etc/wikidown/strict.toml")
//!     .build()?;
//! ```

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use wikidown_babel::formats::{ParseOptions, RenderOptions};

pub use config::ConfigError;

const DEFAULTS: &str = include_str!("../defaults/wikidown.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct WikidownConfig {
    pub input: InputConfig,
    pub parse: ParseConfig,
    pub render: RenderConfig,
    pub log: LogConfig,
}

/// `[input]`
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Bytes of the input file kept; the rest is dropped before parsing.
    pub max_bytes: usize,
}

/// `[parse]`
#[derive(Debug, Clone, Deserialize)]
pub struct ParseConfig {
    pub text_buffer_capacity: usize,
    pub max_depth: usize,
}

/// `[render]`
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub output_capacity: usize,
    pub link_capacity: usize,
}

/// `[log]`
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: LogLevel,
}

impl From<&ParseConfig> for ParseOptions {
    fn from(parse: &ParseConfig) -> Self {
        ParseOptions {
            text_buffer_capacity: parse.text_buffer_capacity,
            max_depth: parse.max_depth,
        }
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(render: &RenderConfig) -> Self {
        RenderOptions {
            output_capacity: render.output_capacity,
            link_capacity: render.link_capacity,
        }
    }
}

/// Verbosity used when `RUST_LOG` is unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[serde(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLogLevel(pub String);

impl fmt::Display for UnknownLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level '{}'", self.0)
    }
}

impl std::error::Error for UnknownLogLevel {}

impl FromStr for LogLevel {
    type Err = UnknownLogLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = match s.trim().to_ascii_lowercase().as_str() {
            "off" => LogLevel::Off,
            "error" => LogLevel::Error,
            "warn" | "warning" => LogLevel::Warn,
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => return Err(UnknownLogLevel(s.to_string())),
        };
        Ok(level)
    }
}

/// Builds a [`WikidownConfig`] from the embedded defaults plus any layers added.
#[derive(Debug, Clone)]
pub struct Loader {
    layers: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Loader {
            layers: Config::builder().add_source(File::from_str(DEFAULTS, FileFormat::Toml)),
        }
    }

    /// Add a TOML file that has to exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Add a TOML file, skipped when absent.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.layers = self.layers.add_source(file);
        self
    }

    /// Set one dotted key, e.g. `render.link_capacity`, above every file.
    pub fn set_override<V: Into<ValueKind>>(mut self, key: &str, value: V) -> Result<Self, ConfigError> {
        self.layers = self.layers.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<WikidownConfig, ConfigError> {
        self.layers.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<WikidownConfig, ConfigError> {
    Loader::new().build()
}
