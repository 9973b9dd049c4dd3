//! Affine transforms in the renderer's 4x3 row convention.

use nalgebra::{Matrix3x4, Matrix4, Point3, Vector4};

/// A 4x3 affine transform: three rows of four columns, with an implicit
/// bottom row `[0, 0, 0, 1]`.
///
/// Column-vector convention: a point transforms as `p' = M * [p, 1]`, so
/// the translation lives in column 3. Composition via `*` applies the
/// rightmost transform first, matching plain matrix products.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3(Matrix3x4<f32>);

impl Transform3 {
    /// The identity transform.
    pub fn identity() -> Self {
        Self(Matrix3x4::new(
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0,
        ))
    }

    /// A pure translation.
    pub fn translate(x: f32, y: f32, z: f32) -> Self {
        Self(Matrix3x4::new(
            1.0, 0.0, 0.0, x, //
            0.0, 1.0, 0.0, y, //
            0.0, 0.0, 1.0, z,
        ))
    }

    /// A pure axis-aligned scale.
    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        Self(Matrix3x4::new(
            x, 0.0, 0.0, 0.0, //
            0.0, y, 0.0, 0.0, //
            0.0, 0.0, z, 0.0,
        ))
    }

    /// Import a grid library's index-to-world map.
    ///
    /// Grid libraries store the map in row-vector convention (translation
    /// in the bottom row); the renderer wants column vectors. The upper
    /// three rows of the transpose are taken: output element `(r, c)` is
    /// sourced from `m[(c, r)]`, which moves the translation from the
    /// matrix's bottom row into column 3.
    pub fn from_index_to_world(m: &Matrix4<f64>) -> Self {
        let mut out = Matrix3x4::<f32>::zeros();
        for col in 0..4 {
            for row in 0..3 {
                out[(row, col)] = m[(col, row)] as f32;
            }
        }
        Self(out)
    }

    /// Apply the transform to a point.
    pub fn apply(&self, p: Point3<f32>) -> Point3<f32> {
        let v = self.0 * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// The transform promoted to a full 4x4 homogeneous matrix.
    fn to_homogeneous(self) -> Matrix4<f32> {
        let mut m = Matrix4::identity();
        m.fixed_view_mut::<3, 4>(0, 0).copy_from(&self.0);
        m
    }

    /// Raw element access (row, column).
    pub fn element(&self, row: usize, col: usize) -> f32 {
        self.0[(row, col)]
    }
}

impl std::ops::Mul for Transform3 {
    type Output = Transform3;

    fn mul(self, rhs: Transform3) -> Transform3 {
        Transform3(self.0 * rhs.to_homogeneous())
    }
}

impl Default for Transform3 {
    fn default() -> Self {
        Self::identity()
    }
}
