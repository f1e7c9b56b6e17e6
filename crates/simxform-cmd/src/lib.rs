//! Command-line front end for the three-point similarity transform
//!
//! Fits the transform between a built-in pair of point triples and prints
//! the result in the form a scene graph's object transform field takes.
//! Edit [`SOURCE_POINTS`] and [`TARGET_POINTS`] to align a different pair:
//! the source points are three vertices of the imported asset in its own
//! frame, the target points the same vertices picked in the scene.

pub mod args;
pub mod error;
pub mod report;

use std::io::Write;

use simxform_algos::{compute_similarity_transform_with, AlignSettings};

pub use args::{parse_args, Invocation, OutputFormat, USAGE};
pub use error::{CmdError, CmdResult};
pub use report::TransformReport;

/// Three vertices before transformation (rows)
pub const SOURCE_POINTS: [[f64; 3]; 3] = [
    [1.00264, 0.745977, 0.457183],
    [-0.722978, 1.13666, 0.356606],
    [-1.13744, 0.712282, -0.278075],
];

/// The same three vertices after transformation (rows)
pub const TARGET_POINTS: [[f64; 3]; 3] = [
    [-0.86103, 1.96258, 0.371532],
    [0.035991, 0.045529, -0.006658],
    [0.810169, -0.206292, 0.385508],
];

/// Fit `source` onto `target` and build the report
pub fn build_report<P, Q>(
    source: &[P],
    target: &[Q],
    settings: &AlignSettings,
) -> CmdResult<TransformReport>
where
    P: AsRef<[f64]>,
    Q: AsRef<[f64]>,
{
    let fit = compute_similarity_transform_with(source, target, settings)?;
    log::info!(
        "Fitted similarity transform: scale={:.6}, rmsd={:.3e}",
        fit.scale,
        fit.rmsd
    );
    if fit.reflection_corrected {
        log::debug!("Rotation required reflection correction");
    }
    Ok(TransformReport::new(&fit))
}

/// Execute an invocation against the built-in points, writing to `out`
pub fn run<W: Write>(invocation: Invocation, out: &mut W) -> CmdResult {
    let format = match invocation {
        Invocation::Help => {
            writeln!(out, "{USAGE}")?;
            return Ok(());
        }
        Invocation::Report(format) => format,
    };

    let settings = AlignSettings::default();
    let report = build_report(&SOURCE_POINTS, &TARGET_POINTS, &settings)?;
    match format {
        OutputFormat::Text => write!(out, "{}", report.render_text())?,
        OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
    }
    Ok(())
}
