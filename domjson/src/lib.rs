// SPDX-License-Identifier: Apache-2.0

//! A small DOM-style JSON parser.
//!
//! One [`parse`] call materializes the whole document as an owned [`Value`]
//! tree; [`Value::serialize`] renders a tree back to compact JSON text.
//! Parsing is deliberately loose: escape sequences pass through undecoded,
//! separators between elements are tolerated when missing, and trailing
//! input after the root value is ignored.
//!
//! ```
//! let doc = domjson::parse(r#"{"name":"demo","tags":["a","b"]}"#).unwrap();
//! assert_eq!(doc.get("name").unwrap().as_str(), Ok("demo"));
//! assert_eq!(doc.get("tags").unwrap().at(1).unwrap().as_str(), Ok("b"));
//! ```

mod cursor;
mod error;
mod parser;
mod serializer;
mod value;
mod whitespace;

use std::path::Path;

use log::debug;

pub use error::{AccessError, LoadError, ParseError};
pub use parser::{Parser, DEFAULT_MAX_DEPTH};
pub use value::Value;

/// Parse `input` as exactly one JSON value.
///
/// Trailing input after a complete root value is silently ignored.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    Parser::new(input).parse()
}

/// Parse raw bytes as one JSON value, validating them as UTF-8 first.
pub fn parse_slice(input: &[u8]) -> Result<Value, ParseError> {
    let text = core::str::from_utf8(input)?;
    parse(text)
}

/// Read `path` fully into memory and parse its contents.
///
/// Relative paths are resolved against the current directory before
/// opening. The whole file is materialized before parsing begins; there is
/// no streaming.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Value, LoadError> {
    let path = std::path::absolute(path.as_ref())?;
    debug!("reading {}", path.display());
    let bytes = std::fs::read(&path)?;
    Ok(parse_slice(&bytes)?)
}
