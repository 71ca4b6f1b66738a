use anyhow::{Context, Result, bail};
use clap::Parser;
use itertools::Itertools;

use wildpat::{compile, is_match, match_spans, matches};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pattern to compile (runs the built-in verification cases if omitted)
    #[arg(value_name = "PATTERN")]
    pattern: Option<String>,

    /// Input strings to test against the pattern
    #[arg(value_name = "INPUT")]
    inputs: Vec<String>,

    /// Print per-unit match spans for successful matches
    #[arg(short, long)]
    spans: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    match args.pattern {
        Some(pattern) => run_pattern(&pattern, &args.inputs, args.spans),
        None => run_verification_cases(),
    }
}

fn run_pattern(pattern: &str, inputs: &[String], with_spans: bool) -> Result<()> {
    let compiled = compile(pattern)
        .with_context(|| format!("cannot compile pattern {pattern:?}"))?;
    for input in inputs {
        if with_spans {
            match match_spans(&compiled, input) {
                Some(spans) => {
                    let rendered = spans
                        .iter()
                        .map(|s| format!("{}..{}", s.start, s.end()))
                        .join(" ");
                    println!("{input}: match [{rendered}]");
                }
                None => println!("{input}: no match"),
            }
        } else if is_match(&compiled, input) {
            println!("{input}: match");
        } else {
            println!("{input}: no match");
        }
    }
    Ok(())
}

/// Fixed verification cases: (input, pattern, expected, rationale).
const CASES: &[(&str, &str, bool, &str)] = &[
    ("aa", "a", false, "'a' does not match the entire string"),
    ("aa", "a*", true, "'*' repeats the preceding 'a'"),
    ("ab", ".*", true, "'.*' means zero or more of any character"),
    ("aab", "c*a*b", true, "c repeated 0 times, a repeated 2 times"),
    (
        "mississippi",
        "mis*is*p*.",
        false,
        "the 'i' between 'ss' and 'pp' is never matched",
    ),
    ("ac", "a?b?c?", true, "'?' is a 0-or-1 quantifier"),
    ("acc", "a?b?c?", false, "'?' cannot match two characters"),
    ("abbbbcd", "ab+cd", true, "'+' is a 1-or-more quantifier"),
    ("acd", "ab+cd", false, "'+' cannot match zero repetitions"),
    ("abbbbcd", "ab{4}cd", true, "'{4}' matches exactly four"),
    ("abbbbcd", "ab{5,}cd", false, "at least five 'b's are required"),
    ("abbbbcd", "ab{3,7}cd", true, "four 'b's fall inside the range"),
    ("aaaa", "a*aa", true, "greedy 'a*' gives back two characters"),
];

fn run_verification_cases() -> Result<()> {
    let mut failures = 0usize;
    for &(input, pattern, expected, reason) in CASES {
        let ok = matches(input, pattern)? == expected;
        if !ok {
            failures += 1;
        }
        println!(
            "{:<12} ~ {:<12} {:<6} ({reason})",
            input,
            pattern,
            if ok { "ok" } else { "FAILED" },
        );
    }
    println!("\n{failures} failure(s) in {} cases", CASES.len());
    if failures > 0 {
        bail!("{failures} verification case(s) failed");
    }
    Ok(())
}
