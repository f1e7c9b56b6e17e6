//! Analytical 3×3 SVD decomposition
//!
//! Computes A = U · diag(S) · Vᵀ for a 3×3 matrix using the Jacobi
//! eigenvalue algorithm on AᵀA (symmetric positive semi-definite).
//!
//! All matrices are row-major: `m[row][col]`. The handedness of U and V is
//! not normalized; callers that need a proper rotation must correct it.

use super::mat3::Mat3;

/// Maximum number of cyclic Jacobi sweeps
const MAX_SWEEPS: usize = 50;

/// Singular values below `RANK_TOLERANCE * s[0]` are treated as zero when
/// completing U. AᵀA squares the condition number, so this sits near √ε.
const RANK_TOLERANCE: f64 = 1e-7;

/// Result of 3×3 SVD decomposition: A = U · diag(S) · Vᵀ
#[derive(Debug, Clone)]
pub struct Svd3 {
    /// Left singular vectors (orthogonal, columns are the vectors)
    pub u: Mat3,
    /// Singular values (sorted descending, non-negative)
    pub s: [f64; 3],
    /// Right singular vectors (orthogonal, columns are the vectors)
    pub v: Mat3,
}

/// Compute the SVD of a 3×3 row-major matrix
pub fn svd3(a: &Mat3) -> Svd3 {
    // 1. AᵀA
    let ata = mat_mul_ata(a);

    // 2. Jacobi eigendecomposition of AᵀA → eigenvalues and eigenvectors
    let (eigenvalues, eigvec_cols) = jacobi_eigen_3x3(&ata);

    // 3. Sort by descending eigenvalue
    let mut order = [0usize, 1, 2];
    if eigenvalues[order[0]] < eigenvalues[order[1]] { order.swap(0, 1); }
    if eigenvalues[order[0]] < eigenvalues[order[2]] { order.swap(0, 2); }
    if eigenvalues[order[1]] < eigenvalues[order[2]] { order.swap(1, 2); }

    let v_cols = [eigvec_cols[order[0]], eigvec_cols[order[1]], eigvec_cols[order[2]]];

    // 4. σ_i = |A·v_i| and u_i = A·v_i / σ_i. Taking the norm of A·v_i keeps
    // small singular values accurate where √λ would not.
    let av = [
        mat_vec_mul(a, &v_cols[0]),
        mat_vec_mul(a, &v_cols[1]),
        mat_vec_mul(a, &v_cols[2]),
    ];
    let sigma = [norm(&av[0]), norm(&av[1]), norm(&av[2])];
    let tol = sigma[0] * RANK_TOLERANCE;

    let mut u_cols = [[0.0f64; 3]; 3];
    if sigma[0] <= f64::MIN_POSITIVE {
        u_cols = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
    } else {
        u_cols[0] = scaled(&av[0], 1.0 / sigma[0]);

        u_cols[1] = if sigma[1] > tol {
            // Re-orthogonalize against u_0 before normalizing
            let mut u1 = scaled(&av[1], 1.0 / sigma[1]);
            let proj = dot(&u1, &u_cols[0]);
            for k in 0..3 {
                u1[k] -= proj * u_cols[0][k];
            }
            normalize(&mut u1);
            u1
        } else {
            arbitrary_perpendicular(&u_cols[0])
        };

        let mut u2 = cross(&u_cols[0], &u_cols[1]);
        normalize(&mut u2);
        if sigma[2] > tol && dot(&u2, &av[2]) < 0.0 {
            u2 = scaled(&u2, -1.0);
        }
        u_cols[2] = u2;
    }

    Svd3 {
        u: columns_to_mat(&u_cols),
        s: sigma,
        v: columns_to_mat(&v_cols),
    }
}

// ============================================================================
// Internal helpers
// ============================================================================

/// Compute AᵀA. (AᵀA)_{ij} = Σ_k A_{ki}·A_{kj}
fn mat_mul_ata(a: &Mat3) -> Mat3 {
    let mut result = [[0.0f64; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            result[i][j] = a[0][i] * a[0][j] + a[1][i] * a[1][j] + a[2][i] * a[2][j];
        }
    }
    result
}

fn mat_vec_mul(a: &Mat3, v: &[f64; 3]) -> [f64; 3] {
    [
        a[0][0] * v[0] + a[0][1] * v[1] + a[0][2] * v[2],
        a[1][0] * v[0] + a[1][1] * v[1] + a[1][2] * v[2],
        a[2][0] * v[0] + a[2][1] * v[1] + a[2][2] * v[2],
    ]
}

/// Lay out three column vectors as a row-major matrix
fn columns_to_mat(cols: &[[f64; 3]; 3]) -> Mat3 {
    [
        [cols[0][0], cols[1][0], cols[2][0]],
        [cols[0][1], cols[1][1], cols[2][1]],
        [cols[0][2], cols[1][2], cols[2][2]],
    ]
}

fn cross(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn norm(v: &[f64; 3]) -> f64 {
    dot(v, v).sqrt()
}

fn scaled(v: &[f64; 3], k: f64) -> [f64; 3] {
    [v[0] * k, v[1] * k, v[2] * k]
}

fn normalize(v: &mut [f64; 3]) {
    let len = norm(v);
    if len > 1e-300 {
        v[0] /= len;
        v[1] /= len;
        v[2] /= len;
    }
}

fn arbitrary_perpendicular(v: &[f64; 3]) -> [f64; 3] {
    let candidate = if v[0].abs() < v[1].abs() && v[0].abs() < v[2].abs() {
        [1.0, 0.0, 0.0]
    } else if v[1].abs() < v[2].abs() {
        [0.0, 1.0, 0.0]
    } else {
        [0.0, 0.0, 1.0]
    };
    let mut perp = cross(v, &candidate);
    normalize(&mut perp);
    perp
}

/// Jacobi eigenvalue algorithm for 3×3 symmetric matrices.
///
/// Returns (eigenvalues, eigenvector_columns). Only Givens rotations are
/// accumulated, so the eigenvector matrix starts out with det = +1; the
/// caller's reordering may flip it.
fn jacobi_eigen_3x3(m: &Mat3) -> ([f64; 3], [[f64; 3]; 3]) {
    let mut a = *m;

    // Eigenvector matrix (starts as identity, accumulates rotations)
    let mut v = [
        [1.0f64, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ];

    let diag_scale = a[0][0] * a[0][0] + a[1][1] * a[1][1] + a[2][2] * a[2][2];
    let converged = diag_scale * f64::EPSILON * f64::EPSILON;

    // Cyclic Jacobi: sweep through (0,1), (0,2), (1,2) pairs
    for _ in 0..MAX_SWEEPS {
        let off = a[0][1] * a[0][1] + a[0][2] * a[0][2] + a[1][2] * a[1][2];
        if off <= converged {
            break;
        }

        for &(p, q) in &[(0usize, 1usize), (0, 2), (1, 2)] {
            if a[p][q] == 0.0 {
                continue;
            }
            jacobi_rotate(&mut a, &mut v, p, q);
        }
    }

    let eigenvalues = [a[0][0], a[1][1], a[2][2]];

    // Column j of v is the j-th eigenvector
    let eigvec_cols = [
        [v[0][0], v[1][0], v[2][0]],
        [v[0][1], v[1][1], v[2][1]],
        [v[0][2], v[1][2], v[2][2]],
    ];

    (eigenvalues, eigvec_cols)
}

/// Apply a single Jacobi rotation to eliminate a[p][q].
fn jacobi_rotate(a: &mut Mat3, v: &mut Mat3, p: usize, q: usize) {
    let app = a[p][p];
    let aqq = a[q][q];
    let apq = a[p][q];

    let tau = (aqq - app) / (2.0 * apq);
    let t = if tau >= 0.0 {
        1.0 / (tau + (1.0 + tau * tau).sqrt())
    } else {
        -1.0 / (-tau + (1.0 + tau * tau).sqrt())
    };
    let c = 1.0 / (1.0 + t * t).sqrt();
    let s = t * c;

    // A' = GᵀAG where G is a Givens rotation in the (p,q) plane
    a[p][p] = c * c * app - 2.0 * s * c * apq + s * s * aqq;
    a[q][q] = s * s * app + 2.0 * s * c * apq + c * c * aqq;
    a[p][q] = 0.0;
    a[q][p] = 0.0;

    let r = 3 - p - q;
    let arp = a[r][p];
    let arq = a[r][q];
    a[r][p] = c * arp - s * arq;
    a[p][r] = a[r][p];
    a[r][q] = s * arp + c * arq;
    a[q][r] = a[r][q];

    // V' = V · G
    for row in v.iter_mut() {
        let vip = row[p];
        let viq = row[q];
        row[p] = c * vip - s * viq;
        row[q] = s * vip + c * viq;
    }
}
