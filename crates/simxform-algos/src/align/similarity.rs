//! Closed-form similarity transform from three point correspondences
//!
//! Finds scale `s`, proper rotation `R` and translation `t` with
//! `q_i ≈ s · R · p_i + t` in the least-squares sense (Kabsch/Umeyama).
//!
//! The scale divides by the centered energy of the *source* set only, so the
//! estimate is directional: solving Q → P does not give the inverse of
//! P → Q when the fit is inexact.

use lin_alg::f64::{Mat4, Vec3};

use super::points::{PointSet, PointTriple};
use crate::euler::{rotation_matrix_to_euler_xyz_with, EulerAngles};
use crate::linalg::{det3, make_matrix_world, mat3_mul, svd3, transform_3x3, transpose3, Mat3, Svd3};
use crate::settings::AlignSettings;
use crate::AlignError;

/// Result of a similarity fit
#[derive(Debug, Clone)]
pub struct SimilarityTransform {
    /// Uniform scale (non-negative)
    pub scale: f64,
    /// Proper rotation, row-major
    pub rotation: Mat3,
    /// Translation applied after scaling and rotation
    pub translation: Vec3,
    /// Singular values of the cross-covariance, descending
    pub singular_values: [f64; 3],
    /// RMSD between the transformed source and the target
    pub rmsd: f64,
    /// Whether the last column of V had to be negated to avoid a reflection
    pub reflection_corrected: bool,
    /// Gimbal-lock threshold used by [`euler_xyz`](Self::euler_xyz), taken
    /// from the settings the fit ran with
    pub gimbal_threshold: f64,
}

impl SimilarityTransform {
    /// Map a source-frame point into the target frame
    pub fn apply(&self, p: Vec3) -> Vec3 {
        let r = transform_3x3(&self.rotation, p);
        Vec3::new(
            self.scale * r.x + self.translation.x,
            self.scale * r.y + self.translation.y,
            self.scale * r.z + self.translation.z,
        )
    }

    /// Rotation as XYZ Euler angles in degrees
    pub fn euler_xyz(&self) -> EulerAngles {
        rotation_matrix_to_euler_xyz_with(&self.rotation, self.gimbal_threshold)
    }

    /// 4×4 homogeneous matrix world (row-major, translation in column 3)
    pub fn matrix_world(&self) -> Mat4 {
        make_matrix_world(self.scale, &self.rotation, self.translation)
    }
}

/// Compute the similarity transform mapping `source` onto `target`.
///
/// Both inputs must be exactly 3 rows of 3 coordinates.
pub fn compute_similarity_transform<P, Q>(
    source: &[P],
    target: &[Q],
) -> Result<SimilarityTransform, AlignError>
where
    P: AsRef<[f64]>,
    Q: AsRef<[f64]>,
{
    compute_similarity_transform_with(source, target, &AlignSettings::default())
}

/// [`compute_similarity_transform`] with explicit settings
pub fn compute_similarity_transform_with<P, Q>(
    source: &[P],
    target: &[Q],
    settings: &AlignSettings,
) -> Result<SimilarityTransform, AlignError>
where
    P: AsRef<[f64]>,
    Q: AsRef<[f64]>,
{
    settings.validate()?;
    let source = PointTriple::from_rows(source, PointSet::Source)?;
    let target = PointTriple::from_rows(target, PointSet::Target)?;
    solve(&source, &target, settings)
}

/// Fit already shape-checked point sets
pub fn solve(
    source: &PointTriple,
    target: &PointTriple,
    settings: &AlignSettings,
) -> Result<SimilarityTransform, AlignError> {
    // 1. Centroids
    let centroid_src = source.centroid();
    let centroid_tgt = target.centroid();

    // 2. Centered sets, columns are points
    let p = source.centered();
    let q = target.centered();

    let energy = source.energy();
    // Catches NaN and all-zero input too
    if !(energy > settings.min_relative_energy * source.magnitude()) {
        return Err(AlignError::DegenerateSource { energy });
    }
    if source.spread_area() <= settings.collinear_tolerance * energy {
        log::warn!("Source points are collinear; rotation about their line is arbitrary");
    }

    // 3. Cross-covariance H = P · Qᵀ
    let h = mat3_mul(&p, &transpose3(&q));

    // 4. H = U · Σ · Vᵀ
    let Svd3 { u, s, v } = svd3(&h);

    // 5. R = V · Uᵀ, corrected to a proper rotation
    let (rotation, reflection_corrected) = proper_rotation(&u, v);
    if reflection_corrected {
        log::debug!("det(V·Uᵀ) < 0, negated last column of V");
    }

    // 6. Uniform scale, normalized by the source energy only
    let scale = (s[0] + s[1] + s[2]) / energy;

    // 7. t = c_q - s · R · c_p
    let rc = transform_3x3(&rotation, centroid_src);
    let translation = Vec3::new(
        centroid_tgt.x - scale * rc.x,
        centroid_tgt.y - scale * rc.y,
        centroid_tgt.z - scale * rc.z,
    );

    let mut result = SimilarityTransform {
        scale,
        rotation,
        translation,
        singular_values: s,
        rmsd: 0.0,
        reflection_corrected,
        gimbal_threshold: settings.gimbal_threshold,
    };
    result.rmsd = fit_rmsd(&result, source, target);

    log::debug!(
        "Similarity fit: scale={:.6} rmsd={:.3e} singular values={:?}",
        result.scale,
        result.rmsd,
        result.singular_values
    );

    Ok(result)
}

/// `R = V · Uᵀ`; if that is a reflection, negate the last column of V and
/// recompute. Returns the rotation and whether the correction was applied.
fn proper_rotation(u: &Mat3, mut v: Mat3) -> (Mat3, bool) {
    let ut = transpose3(u);
    let rotation = mat3_mul(&v, &ut);
    if det3(&rotation) >= 0.0 {
        return (rotation, false);
    }
    for row in v.iter_mut() {
        row[2] = -row[2];
    }
    (mat3_mul(&v, &ut), true)
}

fn fit_rmsd(transform: &SimilarityTransform, source: &PointTriple, target: &PointTriple) -> f64 {
    let sum_sq: f64 = source
        .points()
        .iter()
        .zip(target.points().iter())
        .map(|(&p, q)| {
            let m = transform.apply(p);
            let dx = m.x - q.x;
            let dy = m.y - q.y;
            let dz = m.z - q.z;
            dx * dx + dy * dy + dz * dz
        })
        .sum();
    (sum_sq / 3.0).sqrt()
}

/// Apply a similarity transform to coordinates in-place
pub fn apply_transform(coords: &mut [[f64; 3]], transform: &SimilarityTransform) {
    for coord in coords.iter_mut() {
        let m = transform.apply(Vec3::new(coord[0], coord[1], coord[2]));
        *coord = [m.x, m.y, m.z];
    }
}
