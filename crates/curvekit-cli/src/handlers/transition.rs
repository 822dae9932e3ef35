//! Transition evaluation command handler.

use crate::commands::{OutputFormat, TransitionArgs};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use curvekit::{EasingType, MotionConfig, Transition};
use serde::Serialize;

/// State of a transition at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionSample {
    /// Transition name
    pub name: String,
    /// Curve followed
    pub curve: EasingType,
    /// Elapsed seconds asked for
    pub elapsed_secs: f64,
    /// Normalized progress after clamping
    pub progress: f64,
    /// Curve output
    pub value: f64,
    /// Rate of change per second
    pub velocity: f64,
    /// Whether the transition has reached its end
    pub finished: bool,
}

impl TransitionSample {
    /// Sample `transition` after `elapsed_secs`.
    #[must_use]
    pub fn at(transition: &Transition, elapsed_secs: f64) -> Self {
        Self {
            name: transition.name.clone(),
            curve: transition.curve,
            elapsed_secs,
            progress: transition.progress_at(elapsed_secs),
            value: transition.value_at(elapsed_secs),
            velocity: transition.velocity_at(elapsed_secs),
            finished: transition.is_finished(elapsed_secs),
        }
    }
}

/// Execute the transition command.
pub fn execute_transition(config: &CliConfig, args: &TransitionArgs) -> CliResult<()> {
    if !args.at.is_finite() {
        return Err(CliError::invalid_argument(format!(
            "elapsed time must be a finite number of seconds, got {}",
            args.at
        )));
    }
    if !args.config.exists() {
        return Err(CliError::invalid_argument(format!(
            "Motion config not found: {}",
            args.config.display()
        )));
    }

    let motion = MotionConfig::load(&args.config)?;
    let transition = motion.get(&args.name).ok_or_else(|| {
        let known: Vec<&str> = motion.transitions.iter().map(|t| t.name.as_str()).collect();
        CliError::invalid_argument(format!(
            "no transition named '{}' (known: {})",
            args.name,
            if known.is_empty() {
                "none".to_string()
            } else {
                known.join(", ")
            }
        ))
    })?;

    let sample = TransitionSample::at(transition, args.at);
    tracing::debug!(
        name = %sample.name,
        progress = sample.progress,
        value = sample.value,
        "sampled transition"
    );

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sample)?),
        OutputFormat::Text => print!("{}", render_text(&sample, config.verbosity.is_quiet())),
    }
    Ok(())
}

fn render_text(sample: &TransitionSample, bare: bool) -> String {
    if bare {
        return format!("{} {}\n", sample.value, sample.velocity);
    }
    let state = if sample.finished { " (finished)" } else { "" };
    format!(
        "{} [{}] at {}s: progress={:.4} value={} velocity={}/s{}\n",
        sample.name,
        sample.curve,
        sample.elapsed_secs,
        sample.progress,
        sample.value,
        sample.velocity,
        state
    )
}
