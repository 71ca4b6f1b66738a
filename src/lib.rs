//! A minimal full-string pattern matching engine.
//!
//! Patterns of literals, wildcards (`.`), and repetition quantifiers
//! (`*`, `+`, `?`, `{n}`, `{n,}`, `{n,m}`) are compiled once into a sequence
//! of quantified units, then matched against whole input strings with a
//! greedy backtracking search.
//!
//! # Example
//!
//! ```rust
//! use wildpat::{compile, is_match, match_spans};
//!
//! let pattern = compile("ab{2,4}c.*").unwrap();
//!
//! assert!(is_match(&pattern, "abbbcxyz"));
//! assert!(!is_match(&pattern, "abc"));
//!
//! // One span per compiled unit, covering the whole input.
//! let spans = match_spans(&pattern, "abbcde").unwrap();
//! assert_eq!(spans.len(), 4);
//! assert_eq!((spans[1].start, spans[1].len), (1, 2));
//! ```

pub mod pattern;

pub use pattern::{
    Element, ErrorKind, Pattern, PatternError, Quantifier, Span, SubPattern, compile, is_match,
    match_spans, matches,
};
