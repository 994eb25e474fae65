//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `submissions.csv`
//! - `grades.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use pr_learner::LearnerState;
use pr_review::{GradeRecord, SubmissionEvent};
use pr_sim::TickSummary;
use tracing::debug;

use crate::OutputResult;
use crate::writer::OutputWriter;

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    submissions: Writer<File>,
    grades:      Writer<File>,
    summaries:   Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut submissions = Writer::from_path(dir.join("submissions.csv"))?;
        submissions.write_record([
            "tick", "submission_id", "learner_id", "sequence", "created_at", "score", "last_review_tick",
        ])?;

        let mut grades = Writer::from_path(dir.join("grades.csv"))?;
        grades.write_record([
            "tick", "submission_id", "learner_id", "sequence", "score", "grade", "last_review_tick",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        let mut header = vec!["tick".to_owned(), "pool_size".to_owned(), "events".to_owned(), "graded".to_owned()];
        header.extend(LearnerState::ALL.iter().map(|s| s.to_string()));
        summaries.write_record(&header)?;

        debug!(dir = %dir.display(), "csv output opened");
        Ok(Self {
            submissions,
            grades,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_submission(&mut self, event: &SubmissionEvent) -> OutputResult<()> {
        self.submissions.write_record(&[
            event.emitted_at.0.to_string(),
            event.submission.0.to_string(),
            event.learner.0.to_string(),
            event.sequence.to_string(),
            event.created_at.0.to_string(),
            event.score.to_string(),
            event.last_review_at.map_or_else(|| "-1".to_owned(), |t| t.0.to_string()),
        ])?;
        Ok(())
    }

    fn write_grade(&mut self, record: &GradeRecord) -> OutputResult<()> {
        self.grades.write_record(&[
            record.graded_at.0.to_string(),
            record.submission.0.to_string(),
            record.learner.0.to_string(),
            record.sequence.to_string(),
            record.score.to_string(),
            record.grade.to_string(),
            record.last_review_at.0.to_string(),
        ])?;
        Ok(())
    }

    fn write_tick_summary(&mut self, summary: &TickSummary) -> OutputResult<()> {
        let mut row = vec![
            summary.tick.0.to_string(),
            summary.pool_size.to_string(),
            summary.events.to_string(),
            summary.graded.to_string(),
        ];
        row.extend(summary.learners.iter().map(usize::to_string));
        self.summaries.write_record(&row)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.submissions.flush()?;
        self.grades.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
