//! Character classification and the scanner transition table.
//!
//! The table is a pure function of `(state, mode, quote, class)`; it never
//! looks at the buffers. Steps that depend on buffered text (re-opening a
//! quote after `,` or `:`) are resolved by the parse context.

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::error::Reason;

/// Whether the scanner is between tokens or inside one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanState {
    Out,
    In,
}

/// Whether the current token is read as a key or as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Key,
    Value,
}

/// Quote kind enclosing the current token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Quote {
    Single,
    Double,
}

impl Quote {
    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c {
            '\'' => Some(Quote::Single),
            '"' => Some(Quote::Double),
            _ => None,
        }
    }
}

/// Syntactic class of one code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharClass {
    Quote(Quote),
    Comma,
    Colon,
    Minus,
    Space,
    /// Punctuation, symbol, whitespace or control; only legal inside quotes.
    Special,
    Text,
}

/// What the parse context must do with the current code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Drop the code point.
    Skip,
    /// Mark the in-progress node as negated.
    Negate,
    /// Node boundary: flush the in-progress node.
    Boundary,
    /// Open a quoted token from between tokens.
    OpenQuote(Quote),
    /// Start an unquoted token with this code point.
    Start,
    /// Append the code point to the current phrase.
    Literal,
    /// Close the open quote.
    CloseQuote,
    /// Open a quote in the middle of an unquoted token.
    Requote(Quote),
    /// `,` after a bare phrase: the phrase becomes the first value.
    SplitKey,
    /// `,` between values.
    NextValue,
    /// `:` ends the key.
    EndKey,
    Reject(Reason),
}

/// Classify a code point for the transition table.
pub(crate) fn classify(c: char) -> CharClass {
    match c {
        ',' => CharClass::Comma,
        ':' => CharClass::Colon,
        '-' => CharClass::Minus,
        ' ' => CharClass::Space,
        _ => {
            if let Some(q) = Quote::from_char(c) {
                CharClass::Quote(q)
            } else if is_special(c) {
                CharClass::Special
            } else {
                CharClass::Text
            }
        }
    }
}

/// Unicode punctuation, symbol, whitespace or control character.
pub(crate) fn is_special(c: char) -> bool {
    if c.is_whitespace() || c.is_control() {
        return true;
    }
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
            | GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
    )
}

/// The scanner transition table.
pub(crate) fn transition(state: ScanState, mode: Mode, quote: Option<Quote>, class: CharClass) -> Step {
    match state {
        ScanState::Out => match class {
            CharClass::Quote(q) => Step::OpenQuote(q),
            CharClass::Comma | CharClass::Colon => Step::Skip,
            CharClass::Minus => Step::Negate,
            CharClass::Space => Step::Boundary,
            CharClass::Special => Step::Reject(Reason::InvalidCharacter),
            CharClass::Text => Step::Start,
        },
        ScanState::In => match (quote, class) {
            (None, CharClass::Quote(q)) => Step::Requote(q),
            (Some(open), CharClass::Quote(q)) if open == q => Step::CloseQuote,
            (Some(_), _) => Step::Literal,

            (None, CharClass::Comma) => match mode {
                Mode::Key => Step::SplitKey,
                Mode::Value => Step::NextValue,
            },
            (None, CharClass::Colon) => match mode {
                Mode::Key => Step::EndKey,
                Mode::Value => Step::Reject(Reason::Duplicate),
            },
            (None, CharClass::Minus) => Step::Literal,
            (None, CharClass::Space) => Step::Boundary,
            (None, CharClass::Special) => Step::Reject(Reason::InvalidCharacter),
            (None, CharClass::Text) => Step::Literal,
        },
    }
}
