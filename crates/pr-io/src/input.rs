//! Plain-text course loader.
//!
//! # Format
//!
//! ```text
//! 1000            ← total ticks
//! 3               ← learner count
//! 1 5 85 4        ← id  first_start  true_grade  review_bias
//! 2 2 90 3
//! 3 3 80 -2
//! ```
//!
//! Fields are separated by any whitespace.  Blank lines are ignored.  Ids,
//! tick counts and start ticks must be non-negative; grades and biases may be
//! any `i64`.  A run whose score leaves `i64` stops with
//! `ReviewError::ScoreOverflow`.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::io::{BufRead, BufReader};
use std::path::Path;

use pr_core::{LearnerId, Tick};
use pr_learner::LearnerProfile;
use tracing::debug;

use crate::{InputError, InputResult};

/// A parsed course description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimInput {
    pub total_ticks: u64,
    /// In file order.
    pub profiles:    Vec<LearnerProfile>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a course description from a file.
pub fn load_input(path: &Path) -> InputResult<SimInput> {
    let file = std::fs::File::open(path)?;
    parse_input(BufReader::new(file))
}

/// Like [`load_input`] but accepts any `BufRead` source.
///
/// Useful for testing (pass a `&[u8]`) or reading stdin.
pub fn parse_input<R: BufRead>(reader: R) -> InputResult<SimInput> {
    let mut lines = NumberedLines::new(reader);

    let (line, total_ticks) = lines.next_line()?.ok_or(InputError::Missing { what: "tick count" })?;
    let total_ticks = single_field(line, &total_ticks, "tick count")?;

    let (line, count) = lines.next_line()?.ok_or(InputError::Missing { what: "learner count" })?;
    let count = single_field(line, &count, "learner count")?;
    let expected = usize::try_from(count).map_err(|_| InputError::Malformed {
        line,
        reason: format!("learner count {count} is too large"),
    })?;

    let mut profiles = Vec::with_capacity(expected.min(1_000_000));
    let mut seen = HashSet::with_capacity(expected.min(1_000_000));
    while let Some((line, text)) = lines.next_line()? {
        let profile = parse_learner(line, &text)?;
        if !seen.insert(profile.id) {
            return Err(InputError::DuplicateLearner { line, id: profile.id.0 });
        }
        profiles.push(profile);
    }

    if profiles.len() != expected {
        return Err(InputError::CountMismatch { expected, found: profiles.len() });
    }

    debug!(total_ticks, learners = profiles.len(), "input parsed");
    Ok(SimInput { total_ticks, profiles })
}

/// Render a course description that [`parse_input`] reads back unchanged.
pub fn render_input(total_ticks: u64, profiles: &[LearnerProfile]) -> String {
    let mut out = String::with_capacity(16 + profiles.len() * 16);
    let _ = writeln!(out, "{total_ticks}");
    let _ = writeln!(out, "{}", profiles.len());
    for p in profiles {
        let _ = writeln!(out, "{} {} {} {}", p.id.0, p.first_start.0, p.true_grade, p.review_bias);
    }
    out
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Non-blank lines with their 1-based line numbers.
struct NumberedLines<R> {
    reader: R,
    line:   usize,
    buf:    String,
}

impl<R: BufRead> NumberedLines<R> {
    fn new(reader: R) -> Self {
        Self { reader, line: 0, buf: String::new() }
    }

    fn next_line(&mut self) -> InputResult<Option<(usize, String)>> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            let trimmed = self.buf.trim();
            if !trimmed.is_empty() {
                return Ok(Some((self.line, trimmed.to_owned())));
            }
        }
    }
}

fn parse_int(line: usize, token: &str, field: &'static str) -> InputResult<i64> {
    token.parse::<i64>().map_err(|_| InputError::Malformed {
        line,
        reason: format!("{field} is not an integer: {token:?}"),
    })
}

fn non_negative(line: usize, value: i64, field: &'static str) -> InputResult<u64> {
    u64::try_from(value).map_err(|_| InputError::Negative { line, field, value })
}

fn single_field(line: usize, text: &str, field: &'static str) -> InputResult<u64> {
    let mut tokens = text.split_whitespace();
    let (Some(token), None) = (tokens.next(), tokens.next()) else {
        return Err(InputError::Malformed { line, reason: format!("expected a single {field}") });
    };
    non_negative(line, parse_int(line, token, field)?, field)
}

fn parse_learner(line: usize, text: &str) -> InputResult<LearnerProfile> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let &[id, start, grade, bias] = tokens.as_slice() else {
        return Err(InputError::Malformed {
            line,
            reason: format!("expected 4 learner fields, found {}", tokens.len()),
        });
    };

    let id_value = parse_int(line, id, "learner id")?;
    let id = u32::try_from(non_negative(line, id_value, "learner id")?).map_err(|_| {
        InputError::Malformed { line, reason: format!("learner id {id_value} is too large") }
    })?;
    let start = non_negative(line, parse_int(line, start, "first start tick")?, "first start tick")?;

    Ok(LearnerProfile::new(
        LearnerId(id),
        Tick(start),
        parse_int(line, grade, "true grade")?,
        parse_int(line, bias, "review bias")?,
    ))
}
