//! 3×3 row-major matrix utilities
//!
//! `Mat3` is indexed `m[row][col]`, matching the `R[i, j]` notation used
//! for rotation matrices throughout the crate.

use lin_alg::f64::Vec3;

/// 3×3 row-major matrix
pub type Mat3 = [[f64; 3]; 3];

/// The 3×3 identity matrix
pub const IDENTITY3: Mat3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Matrix product `a · b`
pub fn mat3_mul(a: &Mat3, b: &Mat3) -> Mat3 {
    let mut out = [[0.0f64; 3]; 3];
    for row in 0..3 {
        for col in 0..3 {
            out[row][col] = a[row][0] * b[0][col] + a[row][1] * b[1][col] + a[row][2] * b[2][col];
        }
    }
    out
}

pub fn transpose3(m: &Mat3) -> Mat3 {
    [
        [m[0][0], m[1][0], m[2][0]],
        [m[0][1], m[1][1], m[2][1]],
        [m[0][2], m[1][2], m[2][2]],
    ]
}

/// Determinant by cofactor expansion along the first row
pub fn det3(m: &Mat3) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Element-wise scalar multiply
pub fn scale3(m: &Mat3, k: f64) -> Mat3 {
    let mut out = *m;
    for row in out.iter_mut() {
        for x in row.iter_mut() {
            *x *= k;
        }
    }
    out
}

/// Transform a Vec3 by a 3×3 row-major matrix
pub fn transform_3x3(m: &Mat3, v: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
        m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
        m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
    )
}

/// Largest absolute deviation of `MᵀM` from the identity
pub fn orthonormality_error(m: &Mat3) -> f64 {
    let prod = mat3_mul(&transpose3(m), m);
    let mut worst = 0.0f64;
    for (i, row) in prod.iter().enumerate() {
        for (j, &x) in row.iter().enumerate() {
            let expected = if i == j { 1.0 } else { 0.0 };
            worst = worst.max((x - expected).abs());
        }
    }
    worst
}

/// Check that `m` is a proper rotation: orthonormal with det = +1
pub fn is_rotation(m: &Mat3, tol: f64) -> bool {
    orthonormality_error(m) <= tol && (det3(m) - 1.0).abs() <= tol
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_identity() {
        let m = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        assert_eq!(mat3_mul(&IDENTITY3, &m), m);
        assert_eq!(mat3_mul(&m, &IDENTITY3), m);
    }

    #[test]
    fn test_mul_row_major_order() {
        let a = [[0.0, 1.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]];
        let b = [[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]];
        // a picks row 1 of b into row 0
        let c = mat3_mul(&a, &b);
        assert_eq!(c[0], [0.0, 0.0, 1.0]);
        assert_eq!(c[1], [0.0; 3]);
    }

    #[test]
    fn test_transpose_and_det() {
        let m = [[2.0, 0.0, 1.0], [1.0, 3.0, 0.0], [0.0, 1.0, 4.0]];
        let t = transpose3(&m);
        assert_eq!(t[0][2], 0.0);
        assert_eq!(t[2][0], 1.0);
        // 2·12 - 0 + 1·1
        assert!((det3(&m) - 25.0).abs() < 1e-12);
        assert!((det3(&t) - det3(&m)).abs() < 1e-12);
    }

    #[test]
    fn test_transform_3x3() {
        // 90° about Z
        let rz = [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
        let v = transform_3x3(&rz, Vec3::new(1.0, 0.0, 2.0));
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 1.0).abs() < 1e-12);
        assert!((v.z - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_is_rotation() {
        let rz = [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
        assert!(is_rotation(&rz, 1e-12));

        let mirror = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]];
        assert!(orthonormality_error(&mirror) < 1e-12);
        assert!(!is_rotation(&mirror, 1e-6), "reflection must not count as rotation");

        assert!(!is_rotation(&scale3(&rz, 2.0), 1e-6));
    }
}
