//! Parsing command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// A still-life / catalyst search engine for Conway's Game of Life.
#[derive(Parser, Debug)]
#[command(name = "bellman", version, author, about)]
#[command(long_about = "\
Searches for still-life backgrounds and catalysts for Conway's Game of Life.

Given a still-life background, a perturbation applied to it at generation
0, and a set of bounds read from the input file's `#S` parameter lines,
searches for ways to fill in the background's undetermined cells so the
perturbation settles back into a still life.")]
pub struct Args {
    /// The input pattern file, in the Life 1.05 dialect with bellman's
    /// `#P`/`#S`/`#F` extensions.
    pub input: PathBuf,

    /// Classify mode: trace a single (fully determined) pattern instead
    /// of searching.
    #[arg(short = 'c', long = "classify")]
    pub classify: bool,

    /// Increase verbosity. May be repeated.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Width of the search grid.
    #[arg(long, default_value_t = 64)]
    pub width: i32,

    /// Height of the search grid.
    #[arg(long, default_value_t = 64)]
    pub height: i32,
}

impl Args {
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
