//! Wikitext parser tests
//!
//! Shape of the parsed tree, through the public registry API.

mod structure;
