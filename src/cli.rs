use bevy::prelude::Resource;
use clap::Parser;

/// Elevy degree-elevation playground command line interface
#[derive(Parser, Debug, Resource)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Initial number of degree-elevation steps (invalid input is treated as 0)
    #[arg(long, default_value = "1")]
    pub steps: String,

    /// Number of samples used to draw the curve
    #[arg(long, default_value_t = 100)]
    pub samples: usize,

    /// Display debug information
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl CliArgs {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Elevation step count from the `--steps` flag
    pub fn initial_steps(&self) -> i32 {
        parse_steps(&self.steps)
    }
}

/// Coerce textual step-count input to a usable value.
///
/// Anything that does not parse as an integer becomes 0, and negative
/// counts are clamped to 0.
pub fn parse_steps(input: &str) -> i32 {
    input
        .trim()
        .parse::<i32>()
        .map(|steps| steps.max(0))
        .unwrap_or(0)
}
