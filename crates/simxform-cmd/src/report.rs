//! Human-readable and JSON rendering of a similarity fit

use std::fmt::Write as _;

use serde::Serialize;
use simxform_algos::linalg::mat4_rows;
use simxform_algos::SimilarityTransform;

use crate::error::CmdResult;

/// Everything printed for one fit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformReport {
    pub scale: f64,
    pub rotation: [[f64; 3]; 3],
    /// (rx, ry, rz) in degrees, XYZ order
    pub euler_xyz_degrees: [f64; 3],
    pub translation: [f64; 3],
    /// Row-major, translation in the last column
    pub matrix_world: [[f64; 4]; 4],
    pub rmsd: f64,
}

impl TransformReport {
    pub fn new(fit: &SimilarityTransform) -> Self {
        let euler = fit.euler_xyz();
        Self {
            scale: fit.scale,
            rotation: fit.rotation,
            euler_xyz_degrees: euler.to_array(),
            translation: [fit.translation.x, fit.translation.y, fit.translation.z],
            matrix_world: mat4_rows(&fit.matrix_world()),
            rmsd: fit.rmsd,
        }
    }

    /// Console report. Not a stable format.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = writeln!(out, "=== Similarity Transform ===");
        let _ = writeln!(out, "Scale (uniform): {:.6}", self.scale);
        let _ = writeln!(out, "Rotation matrix:\n {}", format_matrix(&self.rotation));
        let _ = writeln!(out, "Euler angles (XYZ degrees): {}", format_row(&self.euler_xyz_degrees));
        let _ = writeln!(out, "Translation vector: {}", format_row(&self.translation));
        let _ = writeln!(out, "\nMatrix (matrix world):\n {}", format_matrix(&self.matrix_world));
        out
    }

    pub fn to_json(&self) -> CmdResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn cell(x: f64) -> String {
    // Avoid printing "-0.00000000"
    let x = if x == 0.0 { 0.0 } else { x };
    format!("{x:.8}")
}

/// `[ a  b  c]` with right-aligned, sign-padded cells
fn format_row(values: &[f64]) -> String {
    let cells: Vec<String> = values.iter().map(|&x| cell(x)).collect();
    let width = cells.iter().map(|c| c.len()).max().unwrap_or(0);
    join_cells(&cells, width)
}

fn format_matrix<R: AsRef<[f64]>>(rows: &[R]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| r.as_ref().iter().map(|&x| cell(x)).collect())
        .collect();
    let width = cells.iter().flatten().map(|c| c.len()).max().unwrap_or(0);
    let lines: Vec<String> = cells.iter().map(|r| join_cells(r, width)).collect();
    format!("[{}]", lines.join("\n "))
}

fn join_cells(cells: &[String], width: usize) -> String {
    let padded: Vec<String> = cells.iter().map(|c| format!("{c:>width$}")).collect();
    format!("[{}]", padded.join(" "))
}
