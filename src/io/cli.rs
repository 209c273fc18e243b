//! Command-line interface for filling a crossword structure from a word list

use crate::algorithm::assignment::Assignment;
use crate::algorithm::executor::{CrosswordSolver, SearchStatistics, SolverConfig};
use crate::io::configuration::{NO_SOLUTION_MESSAGE, PROGRESS_UPDATE_INTERVAL};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_assignment_as_png;
use crate::io::progress::SearchProgress;
use crate::io::render::render_text;
use crate::io::structure::load_structure;
use crate::io::words::load_vocabulary;
use crate::spatial::Crossword;
use clap::Parser;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "crossfill")]
#[command(
    author,
    version,
    about = "Fill a crossword structure with words using constraint propagation and backtracking"
)]
/// Command-line arguments for the crossword generator
pub struct Cli {
    /// Structure file: `_` marks a fillable cell, anything else is blocked
    #[arg(value_name = "STRUCTURE")]
    pub structure: PathBuf,

    /// Word list file, one word per line
    #[arg(value_name = "WORDS")]
    pub words: PathBuf,

    /// Optional PNG file to save the filled grid to
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Seed for shuffling the word list to get a different fill
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Give up searching after this many seconds
    #[arg(short, long, value_name = "SECONDS")]
    pub timeout: Option<f64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build solver parameters from the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is negative or not a finite number
    pub fn solver_config(&self) -> Result<SolverConfig> {
        let timeout = self
            .timeout
            .map(|seconds| {
                Duration::try_from_secs_f64(seconds)
                    .map_err(|e| invalid_parameter("timeout", &seconds, &e))
            })
            .transpose()?;

        Ok(SolverConfig {
            seed: self.seed,
            timeout,
            progress_interval: PROGRESS_UPDATE_INTERVAL,
        })
    }
}

/// Result of one generator run
#[derive(Debug)]
pub struct Generation {
    /// Puzzle geometry that was filled
    pub crossword: Crossword,
    /// Complete assignment, or `None` if the puzzle cannot be filled
    pub assignment: Option<Assignment>,
    /// Search counters
    pub statistics: SearchStatistics,
}

/// Loads inputs, runs the solver, and presents the outcome
pub struct CrosswordProcessor {
    cli: Cli,
}

impl CrosswordProcessor {
    /// Create a new processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the structure and word list and search for a fill
    ///
    /// # Errors
    ///
    /// Returns an error if an input file cannot be read or parsed, a parameter
    /// is invalid, or the search times out
    pub fn generate(&self) -> Result<Generation> {
        let start_time = Instant::now();
        let config = self.cli.solver_config()?;
        let structure = load_structure(&self.cli.structure)?;
        let vocabulary = load_vocabulary(&self.cli.words)?;
        let crossword = Crossword::new(structure);

        log::info!(
            "Filling {} slots ({} crossings) from {} words",
            crossword.variables().len(),
            crossword.overlaps().crossing_count(),
            vocabulary.len()
        );

        let variable_count = crossword.variables().len();
        let progress = if self.cli.should_show_progress() {
            SearchProgress::new(variable_count)
        } else {
            SearchProgress::hidden(variable_count)
        };
        let mut solver = CrosswordSolver::new(crossword, vocabulary, config)
            .with_progress(progress);
        let assignment = solver.solve()?;
        let statistics = solver.statistics();
        let solved = assignment.is_some();

        log::info!(
            "Search {} after {} nodes in {:.3}s",
            if solved { "succeeded" } else { "failed" },
            statistics.nodes,
            start_time.elapsed().as_secs_f64()
        );

        Ok(Generation {
            crossword: solver.crossword().clone(),
            assignment,
            statistics,
        })
    }

    /// Generate, print the grid, and save the image if requested
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails or the image cannot be written
    // Printing the grid is the tool's output
    #[allow(clippy::print_stdout)]
    pub fn process(&self) -> Result<()> {
        let generation = self.generate()?;

        let Some(assignment) = &generation.assignment else {
            println!("{NO_SOLUTION_MESSAGE}");
            return Ok(());
        };

        print!("{}", render_text(&generation.crossword, assignment));

        if let Some(output) = &self.cli.output {
            export_assignment_as_png(&generation.crossword, assignment, output)?;
            log::info!("Saved image to {}", output.display());
        }

        Ok(())
    }
}
