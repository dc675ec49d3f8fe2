//! Search box query parser.
//!
//! # Syntax Overview
//!
//! - **Clause**: `key:value`, no spaces around the colon
//! - **Multiple values**: `key:v1,v2,"v 3"`
//! - **Quoting**: `'...'` or `"..."` for keys/values with punctuation or spaces;
//!   the other quote kind is literal inside (`"it's"`, `'say "hi"'`)
//! - **Negation**: `-key:value`, `-"bare phrase"`
//! - **Bare phrase**: a clause without a key, e.g. `hello` or `"two words"`
//!
//! Repeated keys are not merged; `a:b a:c` yields two clauses.

mod node;
mod parser;
mod scanner;

pub use node::{Node, Nodes};
pub use parser::parse;
