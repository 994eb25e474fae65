//! `pr-review`: submissions and the shared review pool.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`submission`] | `Submission`, `SubmissionState`, `ReviewRecord`, `Grade`  |
//! | [`store`]      | `SubmissionStore`: arena owning every submission          |
//! | [`pool`]       | `SubmissionPool`: FIFO holding area awaiting review       |
//! | [`event`]      | `SubmissionEvent`, `GradeRecord` snapshots for observers  |
//! | [`error`]      | `ReviewError`, `ReviewResult<T>`                          |
//!
//! # Ownership
//!
//! Submissions live in one `SubmissionStore` and are addressed by
//! `SubmissionId` everywhere else.  A learner holds the ordered ids of its own
//! attempts; a submission refers back to its owner by `LearnerId` only.  The
//! pool holds ids, never submissions, so handing a submission out for review
//! is a move of an id out of the pool and nothing more.

pub mod error;
pub mod event;
pub mod pool;
pub mod store;
pub mod submission;


pub use error::{ReviewError, ReviewResult};
pub use event::{GradeRecord, SubmissionEvent};
pub use pool::SubmissionPool;
pub use store::SubmissionStore;
pub use submission::{Grade, ReviewRecord, Submission, SubmissionState};
