//! 4×4 homogeneous matrix utilities
//!
//! Matrices here keep `Mat4::data` in row-major order (`data[row * 4 + col]`)
//! with the translation in the last column, which is the layout scene
//! graph "matrix world" fields expect.

use lin_alg::f64::{Mat4, Vec3};

use super::mat3::{scale3, Mat3};

/// Compose scale, rotation and translation into a homogeneous matrix
///
/// Starts from the identity, writes `scale · rotation` into the upper-left
/// 3×3 block and `translation` into column 3. Row 3 stays `[0, 0, 0, 1]`.
pub fn make_matrix_world(scale: f64, rotation: &Mat3, translation: Vec3) -> Mat4 {
    let mut m = Mat4::new_identity();
    let sr = scale3(rotation, scale);
    let t = [translation.x, translation.y, translation.z];
    for row in 0..3 {
        for col in 0..3 {
            m.data[row * 4 + col] = sr[row][col];
        }
        m.data[row * 4 + 3] = t[row];
    }
    m
}

/// Transform a Vec3 by a 4×4 row-major matrix (homogeneous, w=1)
pub fn transform_point(m: &Mat4, v: Vec3) -> Vec3 {
    let [x, y, z, _] = transform_homogeneous(m, [v.x, v.y, v.z, 1.0]);
    Vec3::new(x, y, z)
}

/// Multiply a homogeneous column vector: `M · [x, y, z, w]ᵀ`
pub fn transform_homogeneous(m: &Mat4, v: [f64; 4]) -> [f64; 4] {
    let d = &m.data;
    let mut out = [0.0f64; 4];
    for (row, o) in out.iter_mut().enumerate() {
        *o = d[row * 4] * v[0] + d[row * 4 + 1] * v[1] + d[row * 4 + 2] * v[2] + d[row * 4 + 3] * v[3];
    }
    out
}

/// Check if a 4×4 row-major matrix is approximately identity
pub fn is_identity_mat4(m: &Mat4, tol: f64) -> bool {
    let id = Mat4::new_identity();
    m.data
        .iter()
        .zip(id.data.iter())
        .all(|(a, b)| (a - b).abs() <= tol)
}

/// Split a row-major Mat4 into its four rows
pub fn mat4_rows(m: &Mat4) -> [[f64; 4]; 4] {
    let d = &m.data;
    [
        [d[0], d[1], d[2], d[3]],
        [d[4], d[5], d[6], d[7]],
        [d[8], d[9], d[10], d[11]],
        [d[12], d[13], d[14], d[15]],
    ]
}
