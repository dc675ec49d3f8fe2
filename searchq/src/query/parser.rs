//! Query parser: drives the transition table over the input code points.

use std::mem;

use tracing::{debug, trace};

use super::node::{Node, Nodes};
use super::scanner::{classify, transition, Mode, Quote, ScanState, Step};
use crate::error::{ParseError, Reason};

/// Parse a search box query into clauses.
///
/// Clauses are separated by spaces. A clause is `key:value`, `key:v1,v2` or a
/// bare phrase, optionally prefixed with `-`. Keys and values containing
/// punctuation or spaces must be quoted with `'` or `"`; the other quote kind
/// is literal inside a quoted span.
///
/// # Examples
///
/// ```text
/// key:value                 -> [{key [value] false}]
/// key:v1,v2                 -> [{key [v1 v2] false}]
/// -key:"negative value"     -> [{key [negative value] true}]
/// two values                -> [{ [two] false} { [values] false}]
/// ```
pub fn parse(input: &str) -> Result<Nodes, ParseError> {
    let mut ctx = ParseContext::new();

    for (pos, ch) in input.chars().enumerate() {
        let step = transition(ctx.state, ctx.mode, ctx.quote, classify(ch));
        trace!(pos, ?ch, state = ?ctx.state, mode = ?ctx.mode, quote = ?ctx.quote, ?step, "scan");
        if let Err(e) = ctx.apply(step, ch, pos) {
            debug!(error = %e, "query rejected");
            return Err(e);
        }
    }

    ctx.flush()?;
    Ok(ctx.nodes)
}

/// Per-call accumulator. Never outlives one `parse` call.
#[derive(Debug)]
struct ParseContext {
    state: ScanState,
    mode: Mode,
    quote: Option<Quote>,
    /// Token being accumulated
    phrase: String,
    /// Completed values of the open clause
    values: Vec<String>,
    /// Clause under construction (key and negation so far)
    node: Node,
    nodes: Nodes,
}

impl ParseContext {
    fn new() -> Self {
        Self {
            state: ScanState::Out,
            mode: Mode::Key,
            quote: None,
            phrase: String::new(),
            values: Vec::new(),
            node: Node::default(),
            nodes: Nodes::new(),
        }
    }

    fn apply(&mut self, step: Step, ch: char, pos: usize) -> Result<(), ParseError> {
        match step {
            Step::Skip => {}
            Step::Negate => self.node.negative = true,
            Step::Boundary => self.flush()?,
            Step::OpenQuote(q) => {
                self.quote = Some(q);
                self.state = ScanState::In;
            }
            Step::Start => {
                self.phrase.push(ch);
                self.state = ScanState::In;
            }
            Step::Literal => self.phrase.push(ch),
            Step::CloseQuote => {
                // A quoted key stays open until its colon.
                if self.mode == Mode::Value {
                    self.push_value();
                    self.state = ScanState::Out;
                }
                self.quote = None;
            }
            Step::Requote(q) => {
                self.quote = Some(q);
                match self.phrase.chars().last() {
                    None => {}
                    Some(',') => {
                        self.mode = Mode::Value;
                        self.push_value();
                    }
                    Some(':') => self.mode = Mode::Value,
                    Some(_) => return Err(ParseError::invalid(ch, pos)),
                }
            }
            Step::SplitKey => {
                self.mode = Mode::Value;
                self.push_value();
            }
            Step::NextValue => {
                self.push_value();
                self.state = ScanState::Out;
            }
            Step::EndKey => {
                self.node.key = mem::take(&mut self.phrase);
                self.mode = Mode::Value;
                self.state = ScanState::Out;
            }
            Step::Reject(Reason::InvalidCharacter) => return Err(ParseError::invalid(ch, pos)),
            Step::Reject(Reason::Duplicate) => return Err(ParseError::duplicate(ch, pos)),
        }
        Ok(())
    }

    /// Move the phrase into the value list.
    fn push_value(&mut self) {
        self.values.push(mem::take(&mut self.phrase));
    }

    /// Close the open clause at a space or at end of input.
    fn flush(&mut self) -> Result<(), ParseError> {
        if !self.phrase.is_empty() {
            match self.mode {
                Mode::Value => self.push_value(),
                Mode::Key => {
                    if !self.values.is_empty() {
                        return Err(ParseError::Internal(format!(
                            "{} value(s) buffered while reading a key",
                            self.values.len()
                        )));
                    }
                    self.push_value();
                }
            }
        }

        let mut node = mem::take(&mut self.node);
        node.values = mem::take(&mut self.values);

        // `a: b` - a key with no value is read as a bare phrase.
        if node.values.is_empty() && !node.key.is_empty() {
            node.values.push(mem::take(&mut node.key));
        }

        self.nodes.append(node);

        self.phrase.clear();
        self.mode = Mode::Key;
        self.quote = None;
        self.state = ScanState::Out;
        Ok(())
    }
}
