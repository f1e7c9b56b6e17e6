//! Shape-checked three-point sets

use lin_alg::f64::Vec3;

use crate::linalg::Mat3;
use crate::AlignError;

/// Which side of the correspondence a point set is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointSet {
    Source,
    Target,
}

impl PointSet {
    pub fn name(&self) -> &'static str {
        match self {
            PointSet::Source => "source",
            PointSet::Target => "target",
        }
    }
}

impl std::fmt::Display for PointSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Exactly three 3D points
#[derive(Debug, Clone, Copy)]
pub struct PointTriple {
    points: [Vec3; 3],
}

impl PointTriple {
    pub fn new(points: [Vec3; 3]) -> Self {
        Self { points }
    }

    /// Build from rows of coordinates, rejecting anything that is not 3×3.
    ///
    /// A wrong row count is reported with the width of the first row; a
    /// ragged row is reported with its own width.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R], set: PointSet) -> Result<Self, AlignError> {
        if rows.len() != 3 {
            let cols = rows.first().map_or(0, |r| r.as_ref().len());
            return Err(AlignError::Shape { set, rows: rows.len(), cols });
        }
        if let Some(bad) = rows.iter().find(|r| r.as_ref().len() != 3) {
            return Err(AlignError::Shape { set, rows: 3, cols: bad.as_ref().len() });
        }

        let p = |i: usize| {
            let r = rows[i].as_ref();
            Vec3::new(r[0], r[1], r[2])
        };
        Ok(Self::new([p(0), p(1), p(2)]))
    }

    pub fn points(&self) -> &[Vec3; 3] {
        &self.points
    }

    /// Arithmetic mean of the three points
    pub fn centroid(&self) -> Vec3 {
        let [a, b, c] = self.points;
        Vec3::new(
            (a.x + b.x + c.x) / 3.0,
            (a.y + b.y + c.y) / 3.0,
            (a.z + b.z + c.z) / 3.0,
        )
    }

    /// 3×3 matrix whose columns are the points minus the centroid
    pub fn centered(&self) -> Mat3 {
        let c = self.centroid();
        let mut m = [[0.0f64; 3]; 3];
        for (col, p) in self.points.iter().enumerate() {
            m[0][col] = p.x - c.x;
            m[1][col] = p.y - c.y;
            m[2][col] = p.z - c.z;
        }
        m
    }

    /// Sum of squared entries of [`centered`](Self::centered)
    pub fn energy(&self) -> f64 {
        self.centered().iter().flatten().map(|x| x * x).sum()
    }

    /// `Σ|p_i|²` about the origin, the magnitude the centered energy is
    /// compared against
    pub fn magnitude(&self) -> f64 {
        self.points.iter().map(|p| p.x * p.x + p.y * p.y + p.z * p.z).sum()
    }

    /// Twice the triangle area spanned by the points, `|(p1-p0)×(p2-p0)|`
    pub fn spread_area(&self) -> f64 {
        let [a, b, c] = self.points;
        let e1 = [b.x - a.x, b.y - a.y, b.z - a.z];
        let e2 = [c.x - a.x, c.y - a.y, c.z - a.z];
        let n = [
            e1[1] * e2[2] - e1[2] * e2[1],
            e1[2] * e2[0] - e1[0] * e2[2],
            e1[0] * e2[1] - e1[1] * e2[0],
        ];
        (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt()
    }

    /// Rows as plain arrays
    pub fn to_rows(&self) -> [[f64; 3]; 3] {
        self.points.map(|p| [p.x, p.y, p.z])
    }
}

impl From<[[f64; 3]; 3]> for PointTriple {
    fn from(rows: [[f64; 3]; 3]) -> Self {
        Self::new(rows.map(|r| Vec3::new(r[0], r[1], r[2])))
    }
}
