//! Single-point evaluation command handler.

use crate::commands::{EvalArgs, OutputFormat};
use crate::config::CliConfig;
use crate::error::CliResult;
use curvekit::{evaluate, evaluate_derivative, EasingType};
use serde::Serialize;

/// Result of evaluating one curve at one progress value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalOutput {
    /// Curve evaluated
    pub curve: EasingType,
    /// Normalized progress
    pub progress: f64,
    /// Range start
    pub start: f64,
    /// Range end
    pub end: f64,
    /// Curve output
    pub value: f64,
    /// Slope with respect to progress, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derivative: Option<f64>,
}

/// Evaluate the curve described by `args`.
#[must_use]
pub fn compute(args: &EvalArgs) -> EvalOutput {
    let value = evaluate(args.curve, args.progress, args.start, args.end);
    let derivative = args
        .derivative
        .then(|| evaluate_derivative(args.curve, args.progress, args.start, args.end));
    EvalOutput {
        curve: args.curve,
        progress: args.progress,
        start: args.start,
        end: args.end,
        value,
        derivative,
    }
}

/// Execute the eval command.
pub fn execute_eval(config: &CliConfig, args: &EvalArgs) -> CliResult<()> {
    if !(0.0..=1.0).contains(&args.progress) {
        tracing::warn!(
            progress = args.progress,
            "progress outside [0, 1], evaluating anyway"
        );
    }

    let output = compute(args);
    tracing::debug!(curve = %output.curve, value = output.value, "evaluated");

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Text => print!("{}", render_text(&output, config.verbosity.is_quiet())),
    }
    Ok(())
}

fn render_text(output: &EvalOutput, bare: bool) -> String {
    if bare {
        return match output.derivative {
            Some(d) => format!("{} {}\n", output.value, d),
            None => format!("{}\n", output.value),
        };
    }
    let mut text = format!(
        "{}({}) in [{}, {}] = {}\n",
        output.curve, output.progress, output.start, output.end, output.value
    );
    if let Some(d) = output.derivative {
        text.push_str(&format!("slope = {d}\n"));
    }
    text
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn args(curve: EasingType, progress: f64, end: f64, derivative: bool) -> EvalArgs {
        EvalArgs {
            curve,
            progress,
            start: 0.0,
            end,
            derivative,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn test_compute_quad_in_out() {
        let output = compute(&args(EasingType::QuadInOut, 0.25, 10.0, false));
        assert!((output.value - 1.25).abs() < 1e-12);
        assert!(output.derivative.is_none());
    }

    #[test]
    fn test_compute_with_derivative() {
        let output = compute(&args(EasingType::QuadIn, 0.5, 10.0, true));
        assert!((output.value - 2.5).abs() < 1e-12);
        assert!((output.derivative.unwrap() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_compute_endpoint_echo() {
        let output = compute(&args(EasingType::Linear, 1.0, 10.0, true));
        assert_eq!(output.value, 1.0);
        assert_eq!(output.derivative, Some(1.0));
    }

    #[test]
    fn test_render_text() {
        let output = compute(&args(EasingType::Linear, 0.5, 10.0, true));
        let text = render_text(&output, false);
        assert_eq!(text, "Linear(0.5) in [0, 10] = 5\nslope = 10\n");
    }

    #[test]
    fn test_render_text_bare() {
        let output = compute(&args(EasingType::Linear, 0.5, 10.0, false));
        assert_eq!(render_text(&output, true), "5\n");
    }

    #[test]
    fn test_json_skips_missing_derivative() {
        let output = compute(&args(EasingType::Linear, 0.5, 10.0, false));
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"curve\":\"Linear\""));
        assert!(!json.contains("derivative"));
    }

    #[test]
    fn test_execute_eval() {
        let result = execute_eval(&CliConfig::new(), &args(EasingType::SineOut, 0.3, 1.0, true));
        assert!(result.is_ok());
    }
}
