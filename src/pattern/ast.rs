//! Compiled-pattern data types.

/// Inclusive repetition bounds attached to a unit.
///
/// `max == None` means unbounded. A unit without an explicit quantifier
/// carries `Quantifier::ONCE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantifier {
    pub min: usize,
    pub max: Option<usize>,
}

impl Quantifier {
    /// Exactly one repetition — the default for unquantified units.
    pub const ONCE: Quantifier = Quantifier {
        min: 1,
        max: Some(1),
    };

    pub fn exactly(n: usize) -> Self {
        Self {
            min: n,
            max: Some(n),
        }
    }

    pub fn at_least(n: usize) -> Self {
        Self { min: n, max: None }
    }

    pub fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }
}

/// One matchable element: a single-character test or a verbatim literal run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Exactly this character.
    Char(char),
    /// Any single character (`.`). Always one character wide; the
    /// quantifier repeats the test, it never widens it.
    Wildcard,
    /// A fixed run of literal characters, matched verbatim per repetition.
    Literal(Vec<char>),
}

impl Element {
    /// Number of input characters one repetition consumes.
    pub fn width(&self) -> usize {
        match self {
            Element::Char(_) | Element::Wildcard => 1,
            Element::Literal(text) => text.len(),
        }
    }
}

/// One compiled segment of a pattern: an element plus its repetition bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubPattern {
    pub element: Element,
    pub quantifier: Quantifier,
}

/// A compiled pattern: sub-patterns in left-to-right source order.
///
/// Units are matched strictly in sequence. Immutable once compiled, so a
/// `Pattern` can be reused across many inputs (and shared across threads).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub units: Vec<SubPattern>,
}
