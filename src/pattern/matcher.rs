//! Backtracking matcher: run a compiled [`Pattern`] against an input string.
//!
//! All positions are **character** (not byte) indices into the input.

use super::ast::{Element, Pattern, SubPattern};

/// The stretch of input one unit consumed: `start..start + len` in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Backtracking state for one unit: where it started consuming and how many
/// repetitions it currently holds.
struct Frame {
    start: usize,
    reps: usize,
}

/// Test whether `pattern` matches the whole of `input`.
pub fn is_match(pattern: &Pattern, input: &str) -> bool {
    let chars: Vec<char> = input.chars().collect();
    search(&pattern.units, &chars).is_some()
}

/// Match `pattern` against the whole of `input`, returning one [`Span`] per
/// unit on success, in unit order. The spans cover the input exactly: the
/// first starts at 0, each starts where the previous ended, and the last
/// ends at the input length. `None` when the input does not match.
pub fn match_spans(pattern: &Pattern, input: &str) -> Option<Vec<Span>> {
    let chars: Vec<char> = input.chars().collect();
    let frames = search(&pattern.units, &chars)?;
    Some(
        pattern
            .units
            .iter()
            .zip(frames)
            .map(|(unit, frame)| Span {
                start: frame.start,
                len: frame.reps * unit.element.width(),
            })
            .collect(),
    )
}

/// Greedy-first backtracking search.
///
/// Each unit is placed at its maximum achievable repetition count. When a
/// later unit cannot reach its minimum (or input is left over at the end),
/// the most recent unit above its minimum gives back one repetition and the
/// search resumes to its right; units already at their minimum are popped.
/// Failure is exhaustion of the first unit.
fn search(units: &[SubPattern], input: &[char]) -> Option<Vec<Frame>> {
    let mut frames: Vec<Frame> = Vec::with_capacity(units.len());
    let mut pos = 0usize;

    loop {
        if frames.len() == units.len() {
            if pos == input.len() {
                return Some(frames);
            }
            // Every unit placed but input is left over.
            if !backtrack(units, &mut frames, &mut pos) {
                return None;
            }
            continue;
        }

        let unit = &units[frames.len()];
        let reps = greedy_reps(&unit.element, input, pos, unit.quantifier.max);
        if reps < unit.quantifier.min {
            // Short of the minimum here; fewer repetitions cannot help.
            if !backtrack(units, &mut frames, &mut pos) {
                return None;
            }
            continue;
        }
        frames.push(Frame { start: pos, reps });
        pos += reps * unit.element.width();
    }
}

/// Give back one repetition from the most recent unit that can spare one,
/// updating `pos` to the position it now yields. Returns `false` when every
/// unit is exhausted (overall failure).
fn backtrack(units: &[SubPattern], frames: &mut Vec<Frame>, pos: &mut usize) -> bool {
    while let Some(idx) = frames.len().checked_sub(1) {
        let unit = &units[idx];
        let frame = &mut frames[idx];
        if frame.reps > unit.quantifier.min {
            frame.reps -= 1;
            *pos = frame.start + frame.reps * unit.element.width();
            return true;
        }
        *pos = frame.start;
        frames.pop();
    }
    false
}

/// Count how many repetitions of `element` fit at `start`, greedily, up to
/// `max` (`None` = unbounded). Stops at the first failing repetition.
fn greedy_reps(element: &Element, input: &[char], start: usize, max: Option<usize>) -> usize {
    let mut reps = 0;
    let mut pos = start;
    while max.is_none_or(|m| reps < m) && element_matches_at(element, input, pos) {
        pos += element.width();
        reps += 1;
    }
    reps
}

/// Test one repetition of `element` at `pos`.
fn element_matches_at(element: &Element, input: &[char], pos: usize) -> bool {
    match element {
        Element::Char(c) => input.get(pos) == Some(c),
        Element::Wildcard => pos < input.len(),
        Element::Literal(text) => input.get(pos..pos + text.len()) == Some(text.as_slice()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::parser::compile;

    fn m(input: &str, pattern: &str) -> bool {
        is_match(&compile(pattern).expect("pattern should compile"), input)
    }

    fn spans(input: &str, pattern: &str) -> Option<Vec<(usize, usize)>> {
        let p = compile(pattern).expect("pattern should compile");
        match_spans(&p, input).map(|v| v.iter().map(|s| (s.start, s.len)).collect())
    }

    // --- Plain literals and anchoring ---

    #[test]
    fn literal_equality() {
        assert!(m("abc", "abc"));
        assert!(!m("abd", "abc"));
        assert!(!m("ab", "abc"));
    }

    #[test]
    fn match_is_anchored_at_both_ends() {
        assert!(!m("aa", "a"));
        assert!(!m("a", "aa"));
    }

    #[test]
    fn empty_pattern_matches_only_empty_input() {
        assert!(m("", ""));
        assert!(!m("a", ""));
    }

    // --- Wildcard ---

    #[test]
    fn wildcard_matches_any_single_char() {
        assert!(m("x", "."));
        assert!(m("ab", "a."));
        assert!(!m("", "."));
    }

    #[test]
    fn wildcard_star_matches_anything() {
        assert!(m("", ".*"));
        assert!(m("ab", ".*"));
    }

    // --- Quantifiers ---

    #[test]
    fn star_matches_any_count() {
        assert!(m("", "a*"));
        assert!(m("a", "a*"));
        assert!(m("aaaa", "a*"));
        assert!(!m("b", "a*"));
    }

    #[test]
    fn plus_requires_at_least_one() {
        assert!(m("abbbbcd", "ab+cd"));
        assert!(!m("acd", "ab+cd"));
    }

    #[test]
    fn question_is_zero_or_one() {
        assert!(m("ac", "a?b?c?"));
        assert!(m("", "a?b?c?"));
        assert!(!m("acc", "a?b?c?"));
    }

    #[test]
    fn braced_bounds_are_exact() {
        assert!(m("abbbbcd", "ab{4}cd"));
        assert!(!m("abbbbcd", "ab{3}cd"));
        assert!(!m("abbbbcd", "ab{5}cd"));
        assert!(m("abbbbcd", "ab{3,7}cd"));
        assert!(!m("abbbbcd", "ab{5,}cd"));
    }

    #[test]
    fn quantified_wildcard_counts_chars() {
        assert!(m("abc", ".{3}"));
        assert!(!m("abc", ".{2}"));
        assert!(!m("abc", ".{4}"));
    }

    // --- Backtracking ---

    #[test]
    fn greedy_star_gives_back() {
        assert!(m("aaaa", "a*aa"));
    }

    #[test]
    fn unbounded_wildcard_gives_back_to_literal() {
        assert!(m("abcb", "a.*b"));
    }

    #[test]
    fn backtracking_crosses_unit_boundaries() {
        assert!(m("aaa", "a*a*a"));
        assert!(m("aab", "c*a*b"));
    }

    #[test]
    fn backtracking_cannot_invent_characters() {
        assert!(!m("mississippi", "mis*is*p*."));
        assert!(m("mississippi", "mis*is*ip*."));
    }

    // --- Spans ---

    #[test]
    fn spans_align_with_units() {
        // Units: `a`, `b{2,}`, `cd` — the literal run reports one span.
        assert_eq!(
            spans("abbbcd", "ab{2,}cd"),
            Some(vec![(0, 1), (1, 3), (4, 2)])
        );
    }

    #[test]
    fn skipped_unit_reports_empty_span() {
        assert_eq!(spans("ac", "ab*c"), Some(vec![(0, 1), (1, 0), (1, 1)]));
    }

    #[test]
    fn spans_cover_input_exactly() {
        let input = "abbcddd";
        let p = compile("ab+cd{2,}").unwrap();
        let spans = match_spans(&p, input).unwrap();
        assert_eq!(spans.len(), p.units.len());
        assert_eq!(spans[0].start, 0);
        for pair in spans.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start, "spans must be contiguous");
        }
        assert_eq!(spans[spans.len() - 1].end(), input.chars().count());
    }

    #[test]
    fn no_spans_on_failure() {
        assert_eq!(spans("ab", "ac"), None);
    }

    #[test]
    fn empty_pattern_empty_input_yields_no_spans() {
        assert_eq!(spans("", ""), Some(vec![]));
    }

    // --- Pattern reuse ---

    #[test]
    fn compiled_pattern_is_reusable() {
        let p = compile("ab*").unwrap();
        assert!(is_match(&p, "a"));
        assert!(is_match(&p, "abbb"));
        assert!(!is_match(&p, "ba"));
    }
}
