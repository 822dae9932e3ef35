//! Curve sampling command handler.

use crate::commands::{OutputFormat, SampleArgs};
use crate::config::CliConfig;
use crate::error::CliResult;
use curvekit::{sample_curve, EasingType, Keyframe, Range};

/// Execute the sample command.
pub fn execute_sample(config: &CliConfig, args: &SampleArgs) -> CliResult<()> {
    let range = Range::new(args.start, args.end);
    let keyframes = sample_curve(args.curve, args.samples, range);

    if config.verbosity.is_verbose() {
        eprintln!(
            "Sampling {} at {} points in [{}, {}]",
            args.curve, args.samples, args.start, args.end
        );
    }

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&keyframes)?),
        OutputFormat::Text => print!("{}", render_text(args.curve, &keyframes)),
    }
    Ok(())
}

/// Two-column `t value` table, one keyframe per line, plus a bar sketch.
fn render_text(curve: EasingType, keyframes: &[Keyframe]) -> String {
    const BAR_WIDTH: f64 = 40.0;

    let (lo, hi) = keyframes
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), kf| {
            (lo.min(kf.value), hi.max(kf.value))
        });
    let span = hi - lo;

    let mut out = format!("# {curve}\n");
    for kf in keyframes {
        let filled = if span > 0.0 {
            (((kf.value - lo) / span) * BAR_WIDTH).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{:>8.4} {:>12.6}  |{}\n",
            kf.t,
            kf.value,
            "#".repeat(filled)
        ));
    }
    out
}
