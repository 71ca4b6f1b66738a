//! Pattern compiler: tokenize a pattern string into quantified sub-patterns.

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use itertools::Itertools;

use super::ast::*;

/// The wildcard marker: matches any single input character.
const WILDCARD: char = '.';

/// The kind of a pattern compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Something other than a letter, digit, or wildcard where a matchable
    /// element was expected.
    UnexpectedCharacter,
    /// A quantifier expected an unsigned integer but found none.
    ExpectedValue,
    /// A `{…` quantifier was not terminated by `}`.
    ExpectedCloser,
    /// `{m,n}` with `n < m`, or a fixed `{0}`.
    InvalidRange,
}

/// A pattern compile error: the kind, the full pattern text, and the offset
/// of the offending character (`None` when the pattern ended prematurely).
///
/// Matching itself never errors; only compilation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternError {
    pub kind: ErrorKind,
    pub pattern: String,
    pub offset: Option<usize>,
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            ErrorKind::UnexpectedCharacter => "expected a literal or wildcard",
            ErrorKind::ExpectedValue => "expected a number",
            ErrorKind::ExpectedCloser => "expected closing '}'",
            ErrorKind::InvalidRange => "invalid quantifier range",
        };
        match self.offset {
            Some(at) => write!(f, "{what} at offset {at} in pattern {:?}", self.pattern),
            None => write!(f, "{what} at end of pattern {:?}", self.pattern),
        }
    }
}

impl std::error::Error for PatternError {}

/// Compile a pattern string into a reusable [`Pattern`].
pub fn compile(pattern: &str) -> Result<Pattern, PatternError> {
    Compiler {
        pattern,
        chars: pattern.char_indices().peekable(),
        units: Vec::new(),
    }
    .compile_units()
}

struct Compiler<'a> {
    pattern: &'a str,
    chars: Peekable<CharIndices<'a>>,
    units: Vec<SubPattern>,
}

impl Compiler<'_> {
    fn compile_units(mut self) -> Result<Pattern, PatternError> {
        while let Some(&(_, c)) = self.chars.peek() {
            if c == WILDCARD {
                self.chars.next();
                let quantifier = self.scan_quantifier()?;
                self.units.push(SubPattern {
                    element: Element::Wildcard,
                    quantifier,
                });
            } else if c.is_alphanumeric() {
                self.compile_literal_run()?;
            } else {
                return Err(self.error(ErrorKind::UnexpectedCharacter));
            }
        }
        Ok(Pattern { units: self.units })
    }

    /// Consume a maximal run of alphanumeric literals and emit its unit(s).
    ///
    /// A quantifier binds to a single element: when one follows a multi-char
    /// run, the run's last character is given back and becomes its own
    /// quantified unit (`abcd*e` compiles to `abc`, `d`*, `e`).
    fn compile_literal_run(&mut self) -> Result<(), PatternError> {
        let mut run: Vec<char> = self
            .chars
            .peeking_take_while(|&(_, c)| c.is_alphanumeric())
            .map(|(_, c)| c)
            .collect();

        let given_back = if run.len() > 1 && self.at_quantifier() {
            run.pop()
        } else {
            None
        };

        let element = match run.len() {
            1 => Element::Char(run[0]),
            _ => Element::Literal(run),
        };
        let quantifier = match given_back {
            // The quantifier at the cursor belongs to the given-back char.
            Some(_) => Quantifier::ONCE,
            None => self.scan_quantifier()?,
        };
        self.units.push(SubPattern {
            element,
            quantifier,
        });

        if let Some(c) = given_back {
            let quantifier = self.scan_quantifier()?;
            self.units.push(SubPattern {
                element: Element::Char(c),
                quantifier,
            });
        }
        Ok(())
    }

    /// Scan a quantifier at the cursor: `*`, `+`, `?`, or `{…}`.
    ///
    /// Bounds default to exactly-once when no quantifier is present; the
    /// cursor is not advanced in that case.
    fn scan_quantifier(&mut self) -> Result<Quantifier, PatternError> {
        match self.peek_char() {
            Some('*') => {
                self.chars.next();
                Ok(Quantifier::at_least(0))
            }
            Some('+') => {
                self.chars.next();
                Ok(Quantifier::at_least(1))
            }
            Some('?') => {
                self.chars.next();
                Ok(Quantifier::between(0, 1))
            }
            Some('{') => {
                self.chars.next();
                self.scan_braced_quantifier()
            }
            _ => Ok(Quantifier::ONCE),
        }
    }

    /// Scan the body of a `{m}`/`{m,}`/`{m,n}` quantifier (the `{` has
    /// already been consumed).
    fn scan_braced_quantifier(&mut self) -> Result<Quantifier, PatternError> {
        let min_at = self.offset();
        let min = self.scan_number()?;
        match self.peek_char() {
            Some('}') => {
                if min == 0 {
                    return Err(self.error_at(ErrorKind::InvalidRange, min_at));
                }
                self.chars.next();
                Ok(Quantifier::exactly(min))
            }
            Some(',') => {
                self.chars.next();
                let max_at = self.offset();
                let max = match self.peek_char() {
                    Some(c) if c.is_ascii_digit() => Some(self.scan_number()?),
                    _ => None,
                };
                match self.peek_char() {
                    Some('}') => {
                        self.chars.next();
                    }
                    _ => return Err(self.error(ErrorKind::ExpectedCloser)),
                }
                match max {
                    Some(max) if max < min => Err(self.error_at(ErrorKind::InvalidRange, max_at)),
                    Some(max) => Ok(Quantifier::between(min, max)),
                    None => Ok(Quantifier::at_least(min)),
                }
            }
            _ => Err(self.error(ErrorKind::ExpectedCloser)),
        }
    }

    /// Scan a maximal run of decimal digits. At least one digit is required.
    fn scan_number(&mut self) -> Result<usize, PatternError> {
        let at = self.offset();
        let digits: String = self
            .chars
            .peeking_take_while(|&(_, c)| c.is_ascii_digit())
            .map(|(_, c)| c)
            .collect();
        if digits.is_empty() {
            return Err(self.error(ErrorKind::ExpectedValue));
        }
        digits
            .parse()
            .map_err(|_| self.error_at(ErrorKind::ExpectedValue, at))
    }

    /// True when the cursor sits on a quantifier marker.
    fn at_quantifier(&mut self) -> bool {
        matches!(self.peek_char(), Some('*' | '+' | '?' | '{'))
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Byte offset of the cursor, or `None` at end of pattern.
    fn offset(&mut self) -> Option<usize> {
        self.chars.peek().map(|&(i, _)| i)
    }

    fn error(&mut self, kind: ErrorKind) -> PatternError {
        let at = self.offset();
        self.error_at(kind, at)
    }

    fn error_at(&self, kind: ErrorKind, offset: Option<usize>) -> PatternError {
        PatternError {
            kind,
            pattern: self.pattern.to_string(),
            offset,
        }
    }
}
