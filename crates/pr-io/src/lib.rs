//! `pr-io`: the boundary of the rust_pra simulator.
//!
//! # Input
//!
//! [`parse_input`] reads the plain-text course description:
//!
//! ```text
//! <tick_count>
//! <learner_count>
//! <id> <first_start_tick> <true_grade> <review_bias>   (× learner_count)
//! ```
//!
//! and [`render_input`] writes one back out.
//!
//! # Output
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `pr_sim::SimObserver`.
//!
//! | Backend        | Produces                                                |
//! |----------------|---------------------------------------------------------|
//! | [`LineWriter`] | one text line per submission event                      |
//! | [`CsvWriter`]  | `submissions.csv`, `grades.csv`, `tick_summaries.csv`   |
//! | [`MultiWriter`]| fans out to any number of the above                     |
//!
//! # Usage
//!
//! ```rust,ignore
//! use pr_io::{LineWriter, SimOutputObserver};
//!
//! let input = pr_io::load_input(Path::new("course.txt"))?;
//! let mut obs = SimOutputObserver::new(LineWriter::new(std::io::stdout().lock()));
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod input;
pub mod lines;
pub mod observer;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{InputError, InputResult, OutputError, OutputResult};
pub use input::{SimInput, load_input, parse_input, render_input};
pub use lines::{LineWriter, format_line};
pub use observer::SimOutputObserver;
pub use writer::{MultiWriter, OutputWriter};
