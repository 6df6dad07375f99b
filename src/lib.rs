//! # inilang
//!
//! A tokenizing parser and writer for a small INI-like configuration format:
//! bracketed `[Section]` headers, `key = value` properties with an optional
//! double-quoting convention, `;` comments, and a lossy pass-through policy
//! for unrecognized lines.
//!
//! ## Features
//!
//! - **Token model**: the document is an ordered sequence of
//!   [`Token`]s (sections, properties, comments, error lines), and insertion
//!   order is the persisted order
//! - **Typed access**: [`Property::get`] and [`Property::set`] convert
//!   between stored text and integers, floats, booleans, and strings through
//!   an explicit per-type codec ([`FromValue`] / [`ToValue`])
//! - **Quoting policy**: textual values round-trip inside double quotes,
//!   everything else is written bare
//! - **Round-trip serialization**: well-formed input reproduces itself;
//!   malformed lines are absorbed as error tokens and dropped on the next
//!   save instead of failing the parse
//!
//! ## Example
//!
//! ```no_run
//! use inilang::IniDocument;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load the file, or create it empty if it does not exist
//! let mut doc = IniDocument::open("settings.ini")?;
//!
//! // Typed reads, searching inside sections as well
//! if let Some(timeout) = doc.get_property("timeout", true) {
//!     let seconds: i64 = timeout.get()?;
//!     println!("timeout: {}s", seconds);
//! }
//!
//! // In-memory mutation, persisted only on an explicit save
//! if let Some(name) = doc.get_property_mut("name", true) {
//!     name.set("Alice");
//! }
//! doc.save()?;
//! # Ok(())
//! # }
//! ```

// Module declarations
mod document;
mod error;
mod parser;
mod token;
mod value;

// Public API exports
pub use document::{IniDocument, serialize};
pub use error::{IniError, ParseResult};
pub use parser::{build, classify, parse};
pub use token::{Property, Section, Token};
pub use value::{FromValue, ToValue};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
