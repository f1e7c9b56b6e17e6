//! Point-set alignment
//!
//! - Shape-checked three-point sets
//! - Closed-form similarity transform (scale + rotation + translation)

pub mod points;
pub mod similarity;

pub use points::{PointSet, PointTriple};
pub use similarity::{
    apply_transform, compute_similarity_transform, compute_similarity_transform_with, solve,
    SimilarityTransform,
};
