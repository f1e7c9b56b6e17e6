//! Similarity transform estimation for scene alignment
//!
//! This crate computes the uniform scale, rotation and translation that best
//! align three corresponding 3D points, and converts the result into the
//! forms a 3D authoring tool consumes:
//! - Analytical 3×3 SVD decomposition
//! - Kabsch/Umeyama similarity fit with reflection correction
//! - XYZ Euler angle extraction with gimbal-lock handling
//! - 4×4 homogeneous "matrix world" composition
//!
//! # Example
//!
//! ```rust
//! use simxform_algos::compute_similarity_transform;
//!
//! let p = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]];
//! let q = [[5.0, 2.0, 0.0], [3.0, 0.0, 0.0], [5.0, 0.0, 0.0]];
//!
//! let fit = compute_similarity_transform(&p, &q).unwrap();
//! assert!((fit.scale - 2.0).abs() < 1e-9);
//! assert!((fit.euler_xyz().rz - 90.0).abs() < 1e-6);
//! ```

pub mod align;
pub mod euler;
pub mod linalg;
mod settings;

pub use align::{
    apply_transform, compute_similarity_transform, compute_similarity_transform_with, PointSet,
    PointTriple, SimilarityTransform,
};
pub use euler::{
    euler_xyz_to_rotation, rotation_matrix_to_euler_xyz, rotation_matrix_to_euler_xyz_with,
    EulerAngles, GIMBAL_LOCK_THRESHOLD,
};
pub use linalg::{make_matrix_world, Mat3};
pub use settings::AlignSettings;

/// Errors from alignment algorithms
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AlignError {
    #[error("{set} point set must be 3x3 (3 points of 3 coordinates), got {rows}x{cols}")]
    Shape { set: PointSet, rows: usize, cols: usize },

    #[error("Source points are coincident (centered energy {energy:e}); scale is undefined")]
    DegenerateSource { energy: f64 },

    #[error("Invalid value for setting '{name}': {reason}")]
    InvalidSetting { name: &'static str, reason: String },
}
