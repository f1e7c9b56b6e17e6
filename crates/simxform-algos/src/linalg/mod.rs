//! Linear algebra utilities
//!
//! General-purpose matrix and vector operations used across the crate:
//!
//! - [`svd3`] — Analytical 3×3 SVD decomposition (Jacobi eigenvalue method)
//! - [`mat3`] — 3×3 row-major matrix operations (multiply, transpose, det)
//! - [`mat4`] — 4×4 homogeneous "matrix world" composition and transforms

pub mod mat3;
pub mod mat4;
pub mod svd3;

pub use mat3::{
    det3, is_rotation, mat3_mul, orthonormality_error, scale3, transform_3x3, transpose3, Mat3,
    IDENTITY3,
};
pub use mat4::{
    is_identity_mat4, make_matrix_world, mat4_rows, transform_homogeneous, transform_point,
};
pub use svd3::{svd3, Svd3};
