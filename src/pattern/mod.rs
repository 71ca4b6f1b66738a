//! Pattern matching engine: compile a pattern string, then match input
//! strings in full (implicit start and end anchors).
//!
//! # Pattern syntax
//!
//! | Token    | Meaning                                 |
//! |----------|-----------------------------------------|
//! | `a`      | One literal character (letter or digit) |
//! | `.`      | Any one character                       |
//! | `X*`     | Zero or more repetitions of `X`         |
//! | `X+`     | One or more repetitions of `X`          |
//! | `X?`     | Zero or one repetition of `X`           |
//! | `X{n}`   | Exactly `n` repetitions of `X`          |
//! | `X{n,}`  | At least `n` repetitions of `X`         |
//! | `X{n,m}` | Between `n` and `m` repetitions of `X`  |
//!
//! A quantifier binds to the single element before it. Matching is greedy
//! with backtracking: each quantified unit first takes as much input as it
//! can, then gives repetitions back when a later unit cannot succeed.

pub mod ast;
pub mod matcher;
pub mod parser;

pub use ast::{Element, Pattern, Quantifier, SubPattern};
pub use matcher::{Span, is_match, match_spans};
pub use parser::{ErrorKind, PatternError, compile};

/// Compile `pattern` and test `input` against it in one step.
///
/// Compile errors propagate; prefer [`compile`] + [`is_match`] when the same
/// pattern is matched against many inputs.
pub fn matches(input: &str, pattern: &str) -> Result<bool, PatternError> {
    Ok(is_match(&compile(pattern)?, input))
}
