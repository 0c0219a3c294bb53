pub mod config;
pub mod display;
pub mod element;
pub mod ordering;
pub mod sorting_algorithms;
pub mod step;
pub mod stepper;

use clap::Parser;

use crate::config::{Algorithm, ElementKind, SortConfig};
use crate::ordering::Direction;
use crate::stepper::Stepper;

#[derive(Parser)]
#[command(about = "Step-by-step sorting algorithm visualizer")]
struct Cli {
    /// Sorting algorithm to visualize
    #[arg(short, long, value_enum, default_value = "merge")]
    algorithm: Algorithm,

    /// Sort in descending order
    #[arg(short, long)]
    descending: bool,

    /// Narrate every comparison instead of summary steps
    #[arg(long)]
    detailed: bool,

    /// Sort random letters A-Z instead of numbers
    #[arg(short, long, conflicts_with = "custom")]
    letters: bool,

    /// Number of random elements to generate (4-12)
    #[arg(short, long, default_value_t = 8, conflicts_with = "custom")]
    size: usize,

    /// Comma-separated values to sort, e.g. "3,1,2" or "C,A,B"
    #[arg(short, long)]
    custom: Option<String>,

    /// Print the whole step sequence instead of stepping interactively
    #[arg(long)]
    all: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let direction = Direction::from_ascending(!cli.descending);
    let kind = if cli.letters {
        ElementKind::Letters
    } else {
        ElementKind::Numbers
    };

    let config = match &cli.custom {
        Some(input) => SortConfig::custom(cli.algorithm, direction, cli.detailed, input)?,
        None => SortConfig::random(cli.algorithm, direction, cli.detailed, kind, cli.size)?,
    };

    let mut stepper = Stepper::new(config);
    if cli.all {
        stepper.dump();
    } else {
        stepper.run()?;
    }
    Ok(())
}
