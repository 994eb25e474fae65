//! Plain-text event lines, one per submission handed in:
//!
//! ```text
//! <learner_id> <sequence> <created_at> <score> <last_review_tick or -1>
//! ```

use std::io::Write;

use pr_review::{GradeRecord, SubmissionEvent};
use pr_sim::TickSummary;

use crate::OutputResult;
use crate::writer::OutputWriter;

/// Render one event line, without the trailing newline.
pub fn format_line(event: &SubmissionEvent) -> String {
    let last = match event.last_review_at {
        Some(t) => t.0.to_string(),
        None => "-1".to_owned(),
    };
    format!(
        "{} {} {} {} {}",
        event.learner.0, event.sequence, event.created_at.0, event.score, last
    )
}

/// Writes submission events as text lines to any `Write` sink.  Grades and
/// summaries are not part of this format and are skipped.
pub struct LineWriter<W: Write> {
    out:   W,
    lines: u64,
}

impl<W: Write> LineWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    /// Lines written so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputWriter for LineWriter<W> {
    fn write_submission(&mut self, event: &SubmissionEvent) -> OutputResult<()> {
        writeln!(self.out, "{}", format_line(event))?;
        self.lines += 1;
        Ok(())
    }

    fn write_grade(&mut self, _record: &GradeRecord) -> OutputResult<()> {
        Ok(())
    }

    fn write_tick_summary(&mut self, _summary: &TickSummary) -> OutputResult<()> {
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
