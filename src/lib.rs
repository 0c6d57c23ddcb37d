//! # SteadyJson
//!
//! A JSON serializer that produces deterministic, human-readable output:
//! the same value tree always renders as the same bytes, which makes the
//! result diffable, cacheable, and usable in golden tests.
//!
//! The layout rules are deliberately fixed rather than configurable:
//!
//! - Objects put each name/value pair on its own line, indented two spaces
//!   per nesting level
//! - Arrays stay on a single line while every element is simple (a
//!   primitive, or an empty object/array); one non-empty container element
//!   pushes the whole array to one element per line
//! - Strings are escaped with the seven named JSON escapes, and remaining
//!   control characters as uppercase `\uXXXX`
//! - Output always ends with exactly one trailing newline
//!
//! ## Command-Line Tool
//!
//! This crate includes the `sjson` CLI tool for normalizing JSON from the
//! terminal:
//!
//! ```sh
//! # Install
//! cargo install steadyjson
//!
//! # Normalize JSON from stdin
//! echo '{"a":1,"b":[1,2]}' | sjson
//!
//! # Normalize a file
//! sjson input.json -o output.json
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use steadyjson::{JsonArray, JsonObject, Serializer};
//!
//! let mut scores = JsonArray::new();
//! scores.push(95).push(87).push(92);
//!
//! let mut player = JsonObject::new();
//! player.push("name", "Alice");
//! player.push("scores", scores);
//!
//! let mut serializer = Serializer::new(String::new());
//! serializer.serialize(&player.into()).unwrap();
//!
//! assert_eq!(
//!     serializer.into_sink(),
//!     "{\n  \"name\": \"Alice\",\n  \"scores\": [95, 87, 92]\n}\n"
//! );
//! ```
//!
//! ## Serializing Rust Types
//!
//! Any type implementing [`serde::Serialize`] can be rendered directly:
//!
//! ```rust
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Config {
//!     retries: i64,
//!     verbose: bool,
//! }
//!
//! let config = Config { retries: 3, verbose: false };
//! let text = steadyjson::to_text(&config).unwrap();
//!
//! assert_eq!(text, "{\n  \"retries\": 3,\n  \"verbose\": false\n}\n");
//! ```
//!
//! ## Writing to an `io::Write` Sink
//!
//! Output can go straight to a file or socket through [`WriterSink`];
//! the serializer batches characters internally and the sink sees
//! contiguous runs:
//!
//! ```rust
//! use steadyjson::{JsonValue, Serializer, WriterSink};
//!
//! let mut serializer = Serializer::new(WriterSink::new(Vec::new()));
//! serializer.serialize(&JsonValue::Null).unwrap();
//!
//! assert_eq!(serializer.into_sink().into_inner(), b"null\n");
//! ```

mod buffer;
mod convert;
mod error;
mod model;
mod serializer;
mod sink;

pub use crate::convert::{from_value, to_text};
pub use crate::error::SteadyJsonError;
pub use crate::model::{JsonArray, JsonKind, JsonObject, JsonValue};
pub use crate::serializer::{render, Serializer};
pub use crate::sink::{Sink, WriterSink};
