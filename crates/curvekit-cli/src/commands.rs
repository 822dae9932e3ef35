//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use curvekit::EasingType;
use std::path::PathBuf;

/// curvekit: evaluate, sample and check easing curves
#[derive(Parser, Debug)]
#[command(name = "curvekit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every curve in the catalog with its index
    List(ListArgs),

    /// Evaluate a curve at one progress value
    Eval(EvalArgs),

    /// Sample a curve at equally spaced points
    Sample(SampleArgs),

    /// Check analytic derivatives against finite differences
    Check(CheckArgs),

    /// Verify recorded keyframes against a curve
    Verify(VerifyArgs),

    /// Evaluate a named transition from a motion config
    Transition(TransitionArgs),
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Curve name (e.g. QuadInOut, quad-in-out) or catalog index
    #[arg(value_parser = parse_curve)]
    pub curve: EasingType,

    /// Normalized progress
    #[arg(allow_negative_numbers = true)]
    pub progress: f64,

    /// Start of the output range
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub start: f64,

    /// End of the output range
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub end: f64,

    /// Also print the derivative with respect to progress
    #[arg(short, long)]
    pub derivative: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the sample command
#[derive(Parser, Debug)]
pub struct SampleArgs {
    /// Curve name or catalog index
    #[arg(value_parser = parse_curve)]
    pub curve: EasingType,

    /// Number of samples, both endpoints included
    #[arg(short = 'n', long, default_value_t = 11)]
    pub samples: usize,

    /// Start of the output range
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub start: f64,

    /// End of the output range
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub end: f64,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Only check this curve (default: the whole catalog)
    #[arg(long, value_parser = parse_curve)]
    pub curve: Option<EasingType>,

    /// Finite-difference step
    #[arg(long, default_value_t = curvekit::DEFAULT_STEP)]
    pub step: f64,

    /// Maximum allowed difference between analytic and numeric slope
    #[arg(long, default_value_t = curvekit::DEFAULT_SLOPE_TOLERANCE)]
    pub tolerance: f64,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the verify command
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// JSON file holding an array of `{"t": .., "value": ..}` keyframes
    pub keyframes: PathBuf,

    /// Curve the keyframes should follow
    #[arg(long, value_parser = parse_curve)]
    pub curve: EasingType,

    /// Maximum allowed deviation per keyframe
    #[arg(long, default_value_t = 1e-3)]
    pub tolerance: f64,

    /// Start of the output range
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub start: f64,

    /// End of the output range
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub end: f64,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the transition command
#[derive(Parser, Debug)]
pub struct TransitionArgs {
    /// Motion config JSON file
    pub config: PathBuf,

    /// Transition name
    pub name: String,

    /// Elapsed time in seconds
    #[arg(long, allow_negative_numbers = true)]
    pub at: f64,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for command results
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Parse a curve given by name or by raw catalog index.
pub fn parse_curve(s: &str) -> Result<EasingType, String> {
    if let Ok(index) = s.parse::<usize>() {
        return EasingType::from_index(index).ok_or_else(|| {
            format!(
                "no curve at index {index} (catalog has {})",
                EasingType::COUNT
            )
        });
    }
    s.parse::<EasingType>().map_err(|e| e.to_string())
}
