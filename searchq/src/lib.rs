//! searchq: search box query parser.
//!
//! Turns a query such as `from:"one@example.com" -tag:spam,junk hello` into an
//! ordered list of key/values/negation clauses for a downstream filter builder.

pub mod config;
pub mod error;
pub mod query;

pub use config::{Config, OutputFormat};
pub use error::{Error, ParseError, Reason, Result};
pub use query::{parse, Node, Nodes};
