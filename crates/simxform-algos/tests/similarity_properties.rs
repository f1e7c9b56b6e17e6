use simxform_algos::linalg::{
    det3, is_rotation, mat4_rows, orthonormality_error, transform_homogeneous, transform_point,
};
use simxform_algos::{
    compute_similarity_transform, euler_xyz_to_rotation, AlignError, EulerAngles, Mat3, PointSet,
};

/// Source triangles with different shapes and placements
const SOURCES: [[[f64; 3]; 3]; 4] = [
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]],
    [[1.00264, 0.745977, 0.457183], [-0.722978, 1.13666, 0.356606], [-1.13744, 0.712282, -0.278075]],
    [[10.0, -3.0, 2.0], [12.5, -1.0, 2.5], [9.0, 0.5, 6.0]],
    [[-0.01, 0.02, 0.0], [0.03, -0.01, 0.02], [0.0, 0.0, -0.04]],
];

fn map_points(points: [[f64; 3]; 3], s: f64, r: &Mat3, t: [f64; 3]) -> [[f64; 3]; 3] {
    points.map(|p| {
        let mut out = [0.0; 3];
        for row in 0..3 {
            out[row] = s * (r[row][0] * p[0] + r[row][1] * p[1] + r[row][2] * p[2]) + t[row];
        }
        out
    })
}

#[test]
fn exact_recovery_of_known_transforms() {
    let transforms = [
        (2.0, EulerAngles::new(0.0, 0.0, 90.0), [5.0, 0.0, 0.0]),
        (0.5, EulerAngles::new(30.0, -20.0, 145.0), [-1.0, 2.0, 3.0]),
        (3.7, EulerAngles::new(-120.0, 60.0, -10.0), [0.0, 0.0, -8.0]),
        (1.0, EulerAngles::new(179.0, 1.0, -179.0), [0.25, -0.5, 0.75]),
    ];

    for source in &SOURCES {
        for &(s0, angles, t0) in &transforms {
            let r0 = euler_xyz_to_rotation(angles);
            let target = map_points(*source, s0, &r0, t0);
            let fit = compute_similarity_transform(source, &target).unwrap();

            let scale_tol = 1e-7 * s0;
            assert!(
                (fit.scale - s0).abs() < scale_tol,
                "scale {} vs {} for {:?}",
                fit.scale, s0, angles
            );
            for row in 0..3 {
                for col in 0..3 {
                    assert!(
                        (fit.rotation[row][col] - r0[row][col]).abs() < 1e-6,
                        "R[{row}][{col}] {} vs {} for {:?}",
                        fit.rotation[row][col], r0[row][col], angles
                    );
                }
            }
            let t = [fit.translation.x, fit.translation.y, fit.translation.z];
            for k in 0..3 {
                assert!((t[k] - t0[k]).abs() < 1e-5, "t {:?} vs {:?}", t, t0);
            }
        }
    }
}

#[test]
fn rotation_is_always_proper() {
    // Arbitrary, non-matching correspondences
    let targets = [
        [[0.0, 0.0, 1.0], [3.0, -1.0, 0.0], [1.0, 1.0, 1.0]],
        [[-0.86103, 1.96258, 0.371532], [0.035991, 0.045529, -0.006658], [0.810169, -0.206292, 0.385508]],
        // Mirror image of the third source
        [[10.0, -3.0, -2.0], [12.5, -1.0, -2.5], [9.0, 0.5, -6.0]],
        [[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
    ];
    for source in &SOURCES {
        for target in &targets {
            let fit = compute_similarity_transform(source, target).unwrap();
            assert!(
                orthonormality_error(&fit.rotation) < 1e-6,
                "RᵀR deviates from I: {:?}",
                fit.rotation
            );
            let det = det3(&fit.rotation);
            assert!((det - 1.0).abs() < 1e-6, "det(R) should be +1, got {det}");
            assert!(fit.scale >= 0.0, "scale must be non-negative, got {}", fit.scale);
        }
    }
}

#[test]
fn scale_is_directional() {
    // Inexact correspondence: the P→Q and Q→P scales are not reciprocal
    let p = [[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
    let q = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 3.0, 0.0]];
    let forward = compute_similarity_transform(&p, &q).unwrap();
    let backward = compute_similarity_transform(&q, &p).unwrap();

    // The singular values are shared, only the normalizing energy differs
    let sum_fwd: f64 = forward.singular_values.iter().sum();
    let sum_bwd: f64 = backward.singular_values.iter().sum();
    assert!((sum_fwd - sum_bwd).abs() < 1e-9);
    assert!(
        forward.scale * backward.scale < 0.99,
        "expected non-reciprocal scales, got {} and {}",
        forward.scale, backward.scale
    );

    // For an exact similarity they are reciprocal
    let exact = [[1.0, 1.0, 0.0], [5.0, 1.0, 0.0], [1.0, 3.0, 0.0]];
    let a = compute_similarity_transform(&p, &exact).unwrap();
    let b = compute_similarity_transform(&exact, &p).unwrap();
    assert!((a.scale * b.scale - 1.0).abs() < 1e-9);
}

#[test]
fn matrix_world_matches_apply() {
    let source = SOURCES[1];
    let target = [
        [-0.86103, 1.96258, 0.371532],
        [0.035991, 0.045529, -0.006658],
        [0.810169, -0.206292, 0.385508],
    ];
    let fit = compute_similarity_transform(&source, &target).unwrap();
    let m = fit.matrix_world();

    let rows = mat4_rows(&m);
    assert_eq!(rows[3], [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(rows[0][3], fit.translation.x);
    assert_eq!(rows[1][3], fit.translation.y);
    assert_eq!(rows[2][3], fit.translation.z);
    assert!(is_rotation(&fit.rotation, 1e-9));

    for p in [[0.0, 0.0, 0.0], [1.0, -2.0, 0.5], [100.0, 3.0, -7.0]] {
        let h = transform_homogeneous(&m, [p[0], p[1], p[2], 1.0]);
        let expected = fit.apply(lin_alg::f64::Vec3::new(p[0], p[1], p[2]));
        assert!((h[3] - 1.0).abs() < 1e-12);
        assert!((h[0] - expected.x).abs() < 1e-9);
        assert!((h[1] - expected.y).abs() < 1e-9);
        assert!((h[2] - expected.z).abs() < 1e-9);

        let v = transform_point(&m, lin_alg::f64::Vec3::new(p[0], p[1], p[2]));
        assert!((v.x - h[0]).abs() < 1e-12);
    }
}

#[test]
fn reference_points_fit() {
    let source = SOURCES[1];
    let target = [
        [-0.86103, 1.96258, 0.371532],
        [0.035991, 0.045529, -0.006658],
        [0.810169, -0.206292, 0.385508],
    ];
    let fit = compute_similarity_transform(&source, &target).unwrap();
    assert!(fit.scale > 0.0 && fit.scale.is_finite());
    assert!(fit.rmsd.is_finite());
    // Three points of a hand-picked correspondence agree to a few percent
    let span = 2.2;
    assert!(fit.rmsd < 0.1 * span, "rmsd {}", fit.rmsd);

    let euler = fit.euler_xyz();
    let rebuilt = euler_xyz_to_rotation(euler);
    for row in 0..3 {
        for col in 0..3 {
            assert!((rebuilt[row][col] - fit.rotation[row][col]).abs() < 1e-9);
        }
    }
}

#[test]
fn shape_errors_precede_numeric_work() {
    let good = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
    let four_rows = [[0.0; 3]; 4];
    let two_cols = [[0.0; 2]; 3];

    assert_eq!(
        compute_similarity_transform(&four_rows, &good).unwrap_err(),
        AlignError::Shape { set: PointSet::Source, rows: 4, cols: 3 }
    );
    assert_eq!(
        compute_similarity_transform(&good, &four_rows).unwrap_err(),
        AlignError::Shape { set: PointSet::Target, rows: 4, cols: 3 }
    );
    assert_eq!(
        compute_similarity_transform(&two_cols, &good).unwrap_err(),
        AlignError::Shape { set: PointSet::Source, rows: 3, cols: 2 }
    );
    assert_eq!(
        compute_similarity_transform(&good, &two_cols).unwrap_err(),
        AlignError::Shape { set: PointSet::Target, rows: 3, cols: 2 }
    );

    // A degenerate source with a malformed target still reports the shape
    let coincident = [[1.0, 1.0, 1.0]; 3];
    assert!(matches!(
        compute_similarity_transform(&coincident, &two_cols),
        Err(AlignError::Shape { .. })
    ));
}
