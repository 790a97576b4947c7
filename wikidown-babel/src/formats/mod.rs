//! Format implementations
//!
//! This module contains all format implementations that convert between
//! the document tree and text representations.

pub mod icons;
pub mod json;
pub mod markdown;
pub mod treeviz;
pub mod wikitext;

pub use json::JsonFormat;
pub use markdown::{MarkdownFormat, RenderOptions};
pub use treeviz::TreevizFormat;
pub use wikitext::{ParseOptions, WikitextFormat};
