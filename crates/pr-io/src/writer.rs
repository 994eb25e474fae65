//! The `OutputWriter` trait implemented by all backend writers.

use pr_review::{GradeRecord, SubmissionEvent};
use pr_sim::TickSummary;

use crate::OutputResult;

/// Trait implemented by the line and CSV writers.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one submission event.
    fn write_submission(&mut self, event: &SubmissionEvent) -> OutputResult<()>;

    /// Write one grade.
    fn write_grade(&mut self, record: &GradeRecord) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, summary: &TickSummary) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: OutputWriter + ?Sized> OutputWriter for Box<W> {
    fn write_submission(&mut self, event: &SubmissionEvent) -> OutputResult<()> {
        (**self).write_submission(event)
    }

    fn write_grade(&mut self, record: &GradeRecord) -> OutputResult<()> {
        (**self).write_grade(record)
    }

    fn write_tick_summary(&mut self, summary: &TickSummary) -> OutputResult<()> {
        (**self).write_tick_summary(summary)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}

/// Sends everything to each inner writer in turn.
///
/// Every writer sees every record even if an earlier one failed; the first
/// error is returned.
#[derive(Default)]
pub struct MultiWriter {
    writers: Vec<Box<dyn OutputWriter>>,
}

impl MultiWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<W: OutputWriter + 'static>(&mut self, writer: W) {
        self.writers.push(Box::new(writer));
    }

    pub fn with<W: OutputWriter + 'static>(mut self, writer: W) -> Self {
        self.push(writer);
        self
    }

    pub fn len(&self) -> usize {
        self.writers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }

    fn each(
        &mut self,
        mut f: impl FnMut(&mut dyn OutputWriter) -> OutputResult<()>,
    ) -> OutputResult<()> {
        let mut first = Ok(());
        for w in &mut self.writers {
            let result = f(w.as_mut());
            if first.is_ok() {
                first = result;
            }
        }
        first
    }
}

impl OutputWriter for MultiWriter {
    fn write_submission(&mut self, event: &SubmissionEvent) -> OutputResult<()> {
        self.each(|w| w.write_submission(event))
    }

    fn write_grade(&mut self, record: &GradeRecord) -> OutputResult<()> {
        self.each(|w| w.write_grade(record))
    }

    fn write_tick_summary(&mut self, summary: &TickSummary) -> OutputResult<()> {
        self.each(|w| w.write_tick_summary(summary))
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.each(|w| w.finish())
    }
}
