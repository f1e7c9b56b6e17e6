//! Rotation matrix ↔ XYZ Euler angles
//!
//! Angles are in degrees and follow the XYZ order used by scene graph
//! object transforms: `R = Rz(rz) · Ry(ry) · Rx(rx)`.

use serde::{Deserialize, Serialize};

use crate::linalg::{mat3_mul, Mat3};

/// `|sy|` at or above which extraction is treated as gimbal-locked
pub const GIMBAL_LOCK_THRESHOLD: f64 = 0.999999;

/// XYZ Euler angles in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
}

impl EulerAngles {
    pub fn new(rx: f64, ry: f64, rz: f64) -> Self {
        Self { rx, ry, rz }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.rx, self.ry, self.rz]
    }
}

/// Extract XYZ Euler angles (degrees) from a proper rotation matrix.
///
/// The input is assumed to be a rotation; it is not validated.
pub fn rotation_matrix_to_euler_xyz(r: &Mat3) -> EulerAngles {
    rotation_matrix_to_euler_xyz_with(r, GIMBAL_LOCK_THRESHOLD)
}

/// Same as [`rotation_matrix_to_euler_xyz`] with an explicit gimbal-lock
/// threshold on `|sy|`.
///
/// At gimbal lock `rz` is pinned to 0 and the whole in-plane rotation is
/// folded into `rx`. The locked `ry` is `+90°` when `sy < 0` and `-90°`
/// otherwise; downstream consumers rely on that sign rule.
pub fn rotation_matrix_to_euler_xyz_with(r: &Mat3, threshold: f64) -> EulerAngles {
    let sy = -r[2][0];
    let (rx, ry, rz) = if sy.abs() < threshold {
        (
            r[2][1].atan2(r[2][2]),
            sy.asin(),
            r[1][0].atan2(r[0][0]),
        )
    } else {
        log::debug!("Euler extraction at gimbal lock (sy = {sy})");
        let ry = if sy < 0.0 {
            std::f64::consts::FRAC_PI_2
        } else {
            -std::f64::consts::FRAC_PI_2
        };
        ((-r[1][2]).atan2(r[1][1]), ry, 0.0)
    };
    EulerAngles::new(rx.to_degrees(), ry.to_degrees(), rz.to_degrees())
}

/// Build the rotation matrix `Rz(rz) · Ry(ry) · Rx(rx)` from angles in degrees
pub fn euler_xyz_to_rotation(angles: EulerAngles) -> Mat3 {
    let (sx, cx) = angles.rx.to_radians().sin_cos();
    let (sy, cy) = angles.ry.to_radians().sin_cos();
    let (sz, cz) = angles.rz.to_radians().sin_cos();

    let rx = [[1.0, 0.0, 0.0], [0.0, cx, -sx], [0.0, sx, cx]];
    let ry = [[cy, 0.0, sy], [0.0, 1.0, 0.0], [-sy, 0.0, cy]];
    let rz = [[cz, -sz, 0.0], [sz, cz, 0.0], [0.0, 0.0, 1.0]];

    mat3_mul(&rz, &mat3_mul(&ry, &rx))
}
