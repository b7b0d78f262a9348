//! 2D affine transformations.
//!
//! Provides the six-scalar transform matrix used to convert between
//! coordinate spaces, with in-place chainable mutators and a
//! compose/decompose pair for TRS+skew parameters.

use glam::{Mat3, Vec2, Vec3};

/// A 2D affine transformation matrix.
///
/// Stored as six scalars representing
///
/// ```text
/// | a  c  tx |
/// | b  d  ty |
/// | 0  0  1  |
/// ```
///
/// Mutators operate in place and return `&mut Self` so calls can be chained:
///
/// ```
/// use vexel_geometry::Matrix2D;
///
/// let mut m = Matrix2D::new();
/// m.translate(10.0, 20.0).rotate(0.5).scale(2.0, 2.0);
/// ```
///
/// Singular matrices are not rejected anywhere: [`Matrix2D::invert`] and
/// [`Matrix2D::apply_inverse`] degrade to IEEE-754 infinities/NaNs when the
/// determinant is zero. Callers on hot paths are expected to validate their
/// transforms rather than pay for checks per operation.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Matrix2D {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for Matrix2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix2D {
    /// Identity transform (no transformation).
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Create a new identity matrix.
    pub fn new() -> Self {
        Self::IDENTITY
    }

    /// Create a matrix from a 6-element flat array.
    ///
    /// The element-to-component mapping is positional over row-major pairs,
    /// not grouped by linear/translation part:
    ///
    /// ```text
    /// a = array[0]   b = array[1]   tx = array[2]
    /// c = array[3]   d = array[4]   ty = array[5]
    /// ```
    ///
    /// Producers using this layout rely on it byte-for-byte, so it must not
    /// be "fixed" to a column-grouped order.
    pub fn from_array(array: [f32; 6]) -> Self {
        Self {
            a: array[0],
            b: array[1],
            c: array[3],
            d: array[4],
            tx: array[2],
            ty: array[5],
        }
    }

    /// Set all six components directly. No validation is performed.
    pub fn set(&mut self, a: f32, b: f32, c: f32, d: f32, tx: f32, ty: f32) -> &mut Self {
        self.a = a;
        self.b = b;
        self.c = c;
        self.d = d;
        self.tx = tx;
        self.ty = ty;
        self
    }

    /// Materialize the homogeneous 3x3 matrix as a 9-element array.
    ///
    /// Non-transposed layout is row-major (`[a, c, tx, b, d, ty, 0, 0, 1]`);
    /// transposed is column-major (`[a, b, 0, c, d, 0, tx, ty, 1]`), the
    /// layout GPU uniform uploads usually want.
    pub fn to_array(&self, transpose: bool) -> [f32; 9] {
        let mut out = [0.0; 9];
        self.write_array(transpose, &mut out);
        out
    }

    /// Like [`Matrix2D::to_array`], but writes into a caller-owned buffer.
    pub fn write_array(&self, transpose: bool, out: &mut [f32; 9]) {
        if transpose {
            *out = [
                self.a, self.b, 0.0, self.c, self.d, 0.0, self.tx, self.ty, 1.0,
            ];
        } else {
            *out = [
                self.a, self.c, self.tx, self.b, self.d, self.ty, 0.0, 0.0, 1.0,
            ];
        }
    }

    /// Transform a point through this matrix.
    ///
    /// Can be used to go from a local coordinate space to the world
    /// coordinate space (e.g. rendering).
    pub fn apply(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            self.a * pos.x + self.c * pos.y + self.tx,
            self.b * pos.x + self.d * pos.y + self.ty,
        )
    }

    /// Transform a point through the inverse of this matrix.
    ///
    /// Can be used to go from the world coordinate space to a local
    /// coordinate space (e.g. input picking). Computed from the determinant
    /// reciprocal without mutating `self`; a singular matrix yields
    /// non-finite coordinates rather than an error.
    pub fn apply_inverse(&self, pos: Vec2) -> Vec2 {
        let id = 1.0 / (self.a * self.d + self.c * -self.b);

        Vec2::new(
            self.d * id * pos.x
                + -self.c * id * pos.y
                + (self.ty * self.c - self.tx * self.d) * id,
            self.a * id * pos.y
                + -self.b * id * pos.x
                + (-self.ty * self.a + self.tx * self.b) * id,
        )
    }

    /// Translate by `(x, y)`.
    pub fn translate(&mut self, x: f32, y: f32) -> &mut Self {
        self.tx += x;
        self.ty += y;
        self
    }

    /// Apply a scale transformation.
    ///
    /// All six components are scaled, including `tx`/`ty`: the scale is
    /// applied in the space the matrix maps *into*, so an existing
    /// translation is scaled with everything else.
    pub fn scale(&mut self, x: f32, y: f32) -> &mut Self {
        self.a *= x;
        self.d *= y;
        self.c *= x;
        self.b *= y;
        self.tx *= x;
        self.ty *= y;
        self
    }

    /// Apply a rotation transformation (angle in radians).
    pub fn rotate(&mut self, angle: f32) -> &mut Self {
        let (sin, cos) = angle.sin_cos();

        let a1 = self.a;
        let c1 = self.c;
        let tx1 = self.tx;

        self.a = a1 * cos - self.b * sin;
        self.b = a1 * sin + self.b * cos;
        self.c = c1 * cos - self.d * sin;
        self.d = c1 * sin + self.d * cos;
        self.tx = tx1 * cos - self.ty * sin;
        self.ty = tx1 * sin + self.ty * cos;
        self
    }

    /// Append the given matrix to this matrix.
    ///
    /// After `m.append(&n)`, `m.apply(p)` equals `m_old.apply(n.apply(p))`:
    /// the appended matrix is applied first. Compare [`Matrix2D::prepend`];
    /// the two do not commute and mixing them up corrupts rendering
    /// silently, so both orders are pinned down by tests.
    pub fn append(&mut self, matrix: &Matrix2D) -> &mut Self {
        let a1 = self.a;
        let b1 = self.b;
        let c1 = self.c;
        let d1 = self.d;

        self.a = matrix.a * a1 + matrix.b * c1;
        self.b = matrix.a * b1 + matrix.b * d1;
        self.c = matrix.c * a1 + matrix.d * c1;
        self.d = matrix.c * b1 + matrix.d * d1;

        self.tx = matrix.tx * a1 + matrix.ty * c1 + self.tx;
        self.ty = matrix.tx * b1 + matrix.ty * d1 + self.ty;
        self
    }

    /// Prepend the given matrix to this matrix.
    ///
    /// After `m.prepend(&n)`, `m.apply(p)` equals `n.apply(m_old.apply(p))`.
    /// A translation-only `matrix` skips the linear-part recomputation; the
    /// numeric result is identical either way.
    pub fn prepend(&mut self, matrix: &Matrix2D) -> &mut Self {
        let tx1 = self.tx;

        if matrix.a != 1.0 || matrix.b != 0.0 || matrix.c != 0.0 || matrix.d != 1.0 {
            let a1 = self.a;
            let c1 = self.c;
            self.a = a1 * matrix.a + self.b * matrix.c;
            self.b = a1 * matrix.b + self.b * matrix.d;
            self.c = c1 * matrix.a + self.d * matrix.c;
            self.d = c1 * matrix.b + self.d * matrix.d;
        }

        self.tx = tx1 * matrix.a + self.ty * matrix.c + matrix.tx;
        self.ty = tx1 * matrix.b + self.ty * matrix.d + matrix.ty;
        self
    }

    /// Build the matrix from decomposed transform parameters.
    ///
    /// The linear part is rotation+scale, left-multiplied by an independent
    /// shear built from `skew_x`/`skew_y`; the translation places the pivot
    /// point (transformed through the *skewed* linear part) at `(x, y)`.
    #[allow(clippy::too_many_arguments)]
    pub fn set_transform(
        &mut self,
        x: f32,
        y: f32,
        pivot_x: f32,
        pivot_y: f32,
        scale_x: f32,
        scale_y: f32,
        rotation: f32,
        skew_x: f32,
        skew_y: f32,
    ) -> &mut Self {
        let (sr, cr) = rotation.sin_cos();
        let cy = skew_y.cos();
        let sy = skew_y.sin();
        let nsx = -skew_x.sin();
        let cx = skew_x.cos();

        let a = cr * scale_x;
        let b = sr * scale_x;
        let c = -sr * scale_y;
        let d = cr * scale_y;

        self.a = cy * a + sy * c;
        self.b = cy * b + sy * d;
        self.c = nsx * a + cx * c;
        self.d = nsx * b + cx * d;

        self.tx = x + (pivot_x * self.a + pivot_y * self.c);
        self.ty = y + (pivot_x * self.b + pivot_y * self.d);
        self
    }

    /// Decompose the matrix into position, scale, rotation, and skew.
    ///
    /// Decomposing an affine matrix into TRS+skew is inherently ambiguous:
    /// multiple (scale, skew, rotation) triples produce the same matrix.
    /// This uses an epsilon heuristic: when the two shear angles agree to
    /// within `1e-5` the matrix is treated as a pure rotation (skew zeroed,
    /// with a quadrant correction of ±π when `a < 0` and `d >= 0`);
    /// otherwise both skew angles are kept and `transform.rotation` is left
    /// untouched. Round trips are only guaranteed for matrices built via
    /// [`Matrix2D::set_transform`], not for arbitrary ones.
    pub fn decompose_into(&self, transform: &mut DecomposedTransform) {
        let a = self.a;
        let b = self.b;
        let c = self.c;
        let d = self.d;

        let skew_x = (-c).atan2(d);
        let skew_y = b.atan2(a);

        let delta = (1.0 - skew_x / skew_y).abs();

        if delta < 1e-5 {
            transform.rotation = skew_y;

            if a < 0.0 && d >= 0.0 {
                transform.rotation += if transform.rotation <= 0.0 {
                    std::f32::consts::PI
                } else {
                    -std::f32::consts::PI
                };
            }

            transform.skew = Vec2::ZERO;
        } else {
            transform.skew = Vec2::new(skew_x, skew_y);
        }

        transform.scale = Vec2::new((a * a + b * b).sqrt(), (c * c + d * d).sqrt());
        transform.position = Vec2::new(self.tx, self.ty);
    }

    /// Invert this matrix in place.
    ///
    /// A singular matrix produces non-finite components; no error is raised.
    pub fn invert(&mut self) -> &mut Self {
        let a1 = self.a;
        let b1 = self.b;
        let c1 = self.c;
        let d1 = self.d;
        let tx1 = self.tx;
        let n = a1 * d1 - b1 * c1;

        self.a = d1 / n;
        self.b = -b1 / n;
        self.c = -c1 / n;
        self.d = a1 / n;
        self.tx = (c1 * self.ty - d1 * tx1) / n;
        self.ty = -(a1 * self.ty - b1 * tx1) / n;
        self
    }

    /// Reset to the identity matrix.
    pub fn identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    /// Create from a `glam` 3x3 matrix, dropping the projective row.
    pub fn from_mat3(m: Mat3) -> Self {
        Self {
            a: m.x_axis.x,
            b: m.x_axis.y,
            c: m.y_axis.x,
            d: m.y_axis.y,
            tx: m.z_axis.x,
            ty: m.z_axis.y,
        }
    }

    /// Convert to a `glam` 3x3 matrix.
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from_cols(
            Vec3::new(self.a, self.b, 0.0),
            Vec3::new(self.c, self.d, 0.0),
            Vec3::new(self.tx, self.ty, 1.0),
        )
    }
}

impl std::ops::Mul<Vec2> for Matrix2D {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        self.apply(rhs)
    }
}

/// Decomposed TRS+skew parameters extracted from a [`Matrix2D`].
///
/// `rotation` is only written by [`Matrix2D::decompose_into`] when the
/// matrix has no independent skew; initialize it to the desired default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecomposedTransform {
    pub position: Vec2,
    pub scale: Vec2,
    pub skew: Vec2,
    pub rotation: f32,
}

impl Default for DecomposedTransform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: Vec2::ONE,
            skew: Vec2::ZERO,
            rotation: 0.0,
        }
    }
}
