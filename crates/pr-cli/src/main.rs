//! `pra`: run a peer-review course simulation, or generate a course.
//!
//! ```text
//! pra generate --learners 50 --ticks 2000 --seed 7 > course.txt
//! pra run course.txt > events.txt
//! pra run course.txt --config review.toml --csv-dir out/ --summary-interval 100
//! ```
//!
//! Event lines go to stdout; logs go to stderr (filter with `RUST_LOG`).

use std::fs;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pr_core::{ReviewConfig, SimConfig};
use pr_io::{CsvWriter, LineWriter, MultiWriter, SimInput, SimOutputObserver};
use pr_learner::PopulationBuilder;
use pr_sim::SimBuilder;


#[derive(Parser)]
#[command(name = "pra")]
#[command(about = "Peer-review grading simulator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate a course and print one line per submission handed in
    Run {
        /// Course description; reads stdin when omitted or "-"
        input: Option<PathBuf>,

        /// TOML file overriding the review constants
        #[arg(long)]
        config: Option<PathBuf>,

        /// Also write submissions.csv, grades.csv and tick_summaries.csv here
        #[arg(long)]
        csv_dir: Option<PathBuf>,

        /// Tick summary interval for the CSV output (0 disables)
        #[arg(long, default_value_t = 0)]
        summary_interval: u64,
    },

    /// Print a synthetic course description
    Generate {
        /// Number of learners
        #[arg(long, default_value_t = 100)]
        learners: usize,

        /// Ticks to simulate
        #[arg(long, default_value_t = 1_000)]
        ticks: u64,

        /// Population seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Latest first start tick
        #[arg(long, default_value_t = 10)]
        max_start: u64,

        /// Lowest true grade
        #[arg(long, default_value_t = 60, allow_negative_numbers = true)]
        min_grade: i64,

        /// Highest true grade
        #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
        max_grade: i64,

        /// Largest review bias magnitude; the sign is ignored
        #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
        max_bias: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Command::Run { input, config, csv_dir, summary_interval } => {
            run(input.as_deref(), config.as_deref(), csv_dir.as_deref(), summary_interval)
        }
        Command::Generate { learners, ticks, seed, max_start, min_grade, max_grade, max_bias } => {
            let profiles = PopulationBuilder::new(learners, seed)
                .start_window(0, max_start)
                .grades(min_grade, max_grade)
                .biases(-bias_limit(max_bias), bias_limit(max_bias))
                .build()?;
            print!("{}", pr_io::render_input(ticks, &profiles));
            Ok(())
        }
    }
}

/// Magnitude of `--max-bias`, clamped so that its negation fits in `i64`.
fn bias_limit(max_bias: i64) -> i64 {
    max_bias.saturating_abs()
}

// ── run ───────────────────────────────────────────────────────────────────────

fn run(
    input:            Option<&Path>,
    config:           Option<&Path>,
    csv_dir:          Option<&Path>,
    summary_interval: u64,
) -> Result<()> {
    let course = read_course(input)?;
    let review = match config {
        Some(path) => load_review_config(path)?,
        None => ReviewConfig::default(),
    };
    let sim_config = SimConfig {
        total_ticks: course.total_ticks,
        review,
        summary_interval_ticks: summary_interval,
    };

    info!(
        learners = course.profiles.len(),
        ticks = course.total_ticks,
        "starting simulation"
    );
    let mut sim = SimBuilder::new(sim_config, course.profiles)
        .build()
        .context("invalid course")?;

    // ── Output backends ───────────────────────────────────────────────────
    let mut writer = MultiWriter::new()
        .with(LineWriter::new(BufWriter::new(io::stdout().lock())));
    if let Some(dir) = csv_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
        writer.push(CsvWriter::new(dir).context("opening CSV output")?);
    }
    let mut observer = SimOutputObserver::new(writer);

    sim.run(&mut observer).context("simulation aborted")?;
    if let Some(e) = observer.take_error() {
        return Err(e).context("writing output");
    }

    let outcomes = sim.outcomes();
    info!(
        learners = outcomes.learners,
        passed = outcomes.passed,
        not_passed = outcomes.learners - outcomes.passed,
        failed_grades = outcomes.failed_grades,
        submissions = outcomes.submissions,
        "simulation finished"
    );
    Ok(())
}

/// Parse the course from `path`, or from stdin for `None` / `-`.
fn read_course(path: Option<&Path>) -> Result<SimInput> {
    match path {
        Some(p) if p != Path::new("-") => {
            pr_io::load_input(p).with_context(|| format!("reading {}", p.display()))
        }
        _ => pr_io::parse_input(io::stdin().lock()).context("reading stdin"),
    }
}

/// Read a [`ReviewConfig`] from TOML.  Missing keys keep their defaults.
fn load_review_config(path: &Path) -> Result<ReviewConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_review_config(&text).with_context(|| format!("in {}", path.display()))
}

fn parse_review_config(text: &str) -> Result<ReviewConfig> {
    let config: ReviewConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}
