//! 4x4 homogeneous matrix type.
//!
//! [`Mat4`] is the workhorse of the transform chain: affine model
//! transforms, the look-at view matrix, and the projective perspective
//! matrix are all plain 4x4 values composed by multiplication.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**,
//! so a chain reads right to left:
//!
//! ```text
//! clip = projection * view * model * point
//! ```
//!
//! # Usage
//!
//! ```rust
//! use xform_math::{Mat4, Vec3};
//!
//! let spin = Mat4::rotation_z(90.0);
//! let p = spin.transform_point(Vec3::X);
//! assert!((p.y - 1.0).abs() < 1e-6);
//! ```

use crate::{MathError, MathResult, Vec3};
use std::fmt;
use std::ops::{Index, Mul};

/// Determinant of a 3x3 matrix given row by row, via the 6-term rule.
#[inline]
#[allow(clippy::too_many_arguments)]
fn det3(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32, g: f32, h: f32, i: f32) -> f32 {
    a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
}

/// A 4x4 matrix in row-major order.
///
/// The default value is the identity matrix. Any 4x4 of reals is a legal
/// value, including singular ones; only [`Mat4::inverse`] checks for
/// singularity.
///
/// # Example
///
/// ```rust
/// use xform_math::{Mat4, Vec3};
///
/// let m = Mat4::translation(1.0, 2.0, 3.0);
/// assert_eq!(m.transform_point(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4 {
    /// Matrix elements in row-major order: [row0, row1, row2, row3]
    pub m: [[f32; 4]; 4],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Absolute determinant threshold below which [`Mat4::inverse`]
    /// reports the matrix as singular.
    pub const SINGULARITY_EPSILON: f32 = 1e-6;

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Returns a row as an array.
    #[inline]
    pub const fn row(&self, i: usize) -> [f32; 4] {
        self.m[i]
    }

    /// Returns a column as an array.
    #[inline]
    pub const fn col(&self, i: usize) -> [f32; 4] {
        [self.m[0][i], self.m[1][i], self.m[2][i], self.m[3][i]]
    }

    /// Returns the transpose of this matrix.
    pub fn transpose(&self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[j][i];
            }
        }
        result
    }

    /// Computes the determinant via cofactor expansion along the first row.
    ///
    /// Laplace expansion is exponential in general but the size is fixed
    /// at 4, so this is a handful of multiplies.
    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        let mut det = 0.0;
        det += m[0][0]
            * det3(
                m[1][1], m[1][2], m[1][3], m[2][1], m[2][2], m[2][3], m[3][1], m[3][2], m[3][3],
            );
        det -= m[0][1]
            * det3(
                m[1][0], m[1][2], m[1][3], m[2][0], m[2][2], m[2][3], m[3][0], m[3][2], m[3][3],
            );
        det += m[0][2]
            * det3(
                m[1][0], m[1][1], m[1][3], m[2][0], m[2][1], m[2][3], m[3][0], m[3][1], m[3][3],
            );
        det -= m[0][3]
            * det3(
                m[1][0], m[1][1], m[1][2], m[2][0], m[2][1], m[2][2], m[3][0], m[3][1], m[3][2],
            );
        det
    }

    /// Computes the inverse of this matrix via the adjugate.
    ///
    /// Builds the signed 3x3 cofactor for every entry, places cofactor
    /// `(i, j)` at `(j, i)` (the adjugate transpose), and scales by the
    /// reciprocal determinant.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SingularMatrix`] when the absolute determinant
    /// is below [`Mat4::SINGULARITY_EPSILON`]. The threshold is absolute
    /// rather than relative to the matrix's scale; see the error docs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use xform_math::Mat4;
    ///
    /// let m = Mat4::translation(1.0, 2.0, 3.0);
    /// let inv = m.inverse().unwrap();
    /// assert_eq!(inv, Mat4::translation(-1.0, -2.0, -3.0));
    /// ```
    pub fn inverse(&self) -> MathResult<Self> {
        let det = self.determinant();
        if det.abs() < Self::SINGULARITY_EPSILON {
            return Err(MathError::SingularMatrix { det });
        }

        let inv_det = 1.0 / det;
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };

                // 3x3 minor with row i and column j removed.
                let mut sub = [0.0f32; 9];
                let mut idx = 0;
                for k in 0..4 {
                    if k == i {
                        continue;
                    }
                    for l in 0..4 {
                        if l == j {
                            continue;
                        }
                        sub[idx] = self.m[k][l];
                        idx += 1;
                    }
                }

                let cofactor = sign
                    * det3(
                        sub[0], sub[1], sub[2], sub[3], sub[4], sub[5], sub[6], sub[7], sub[8],
                    );
                result.m[j][i] = cofactor * inv_det;
            }
        }

        Ok(result)
    }

    /// Transforms a point, treating it as homogeneous `(x, y, z, 1)`.
    ///
    /// The perspective divide happens here: when the resulting `w` is
    /// neither `0.0` nor `1.0` the components are divided by it. A point
    /// sent to `w == 0` (on the projection plane) is returned as raw clip
    /// coordinates without dividing; callers must treat that as a
    /// degenerate, clipped case.
    pub fn transform_point(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        let x = v.x * m[0][0] + v.y * m[0][1] + v.z * m[0][2] + m[0][3];
        let y = v.x * m[1][0] + v.y * m[1][1] + v.z * m[1][2] + m[1][3];
        let z = v.x * m[2][0] + v.y * m[2][1] + v.z * m[2][2] + m[2][3];
        let w = v.x * m[3][0] + v.y * m[3][1] + v.z * m[3][2] + m[3][3];

        if w != 0.0 && w != 1.0 {
            Vec3::new(x / w, y / w, z / w)
        } else {
            Vec3::new(x, y, z)
        }
    }

    /// Multiplies two matrices.
    ///
    /// Not commutative; the right-hand transform applies first under the
    /// column-vector convention.
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result.m[i][j] += self.m[i][k] * other.m[k][j];
                }
            }
        }
        result
    }

    /// Creates a translation matrix.
    pub fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        let mut result = Self::IDENTITY;
        result.m[0][3] = tx;
        result.m[1][3] = ty;
        result.m[2][3] = tz;
        result
    }

    /// Creates a rotation around the X axis, right-handed, in degrees.
    pub fn rotation_x(angle_degrees: f32) -> Self {
        let (s, c) = angle_degrees.to_radians().sin_cos();
        let mut result = Self::IDENTITY;
        result.m[1][1] = c;
        result.m[1][2] = -s;
        result.m[2][1] = s;
        result.m[2][2] = c;
        result
    }

    /// Creates a rotation around the Y axis, right-handed, in degrees.
    pub fn rotation_y(angle_degrees: f32) -> Self {
        let (s, c) = angle_degrees.to_radians().sin_cos();
        let mut result = Self::IDENTITY;
        result.m[0][0] = c;
        result.m[0][2] = s;
        result.m[2][0] = -s;
        result.m[2][2] = c;
        result
    }

    /// Creates a rotation around the Z axis, right-handed, in degrees.
    pub fn rotation_z(angle_degrees: f32) -> Self {
        let (s, c) = angle_degrees.to_radians().sin_cos();
        let mut result = Self::IDENTITY;
        result.m[0][0] = c;
        result.m[0][1] = -s;
        result.m[1][0] = s;
        result.m[1][1] = c;
        result
    }

    /// Creates a non-uniform scaling matrix.
    pub fn scaling(sx: f32, sy: f32, sz: f32) -> Self {
        let mut result = Self::IDENTITY;
        result.m[0][0] = sx;
        result.m[1][1] = sy;
        result.m[2][2] = sz;
        result
    }

    /// Creates an OpenGL-style perspective projection.
    ///
    /// `fov_degrees` is the vertical field of view. Eye-space depth in
    /// `[-near, -far]` maps non-linearly onto clip-space Z; the divide by
    /// `w = -z_eye` happens in [`Mat4::transform_point`].
    pub fn perspective(fov_degrees: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_degrees.to_radians() / 2.0).tan();

        let mut result = Self::IDENTITY;
        result.m[0][0] = f / aspect_ratio;
        result.m[1][1] = f;
        result.m[2][2] = (far + near) / (near - far);
        result.m[2][3] = (2.0 * far * near) / (near - far);
        result.m[3][2] = -1.0;
        result.m[3][3] = 0.0;
        result
    }

    /// Creates an OpenGL-style orthographic projection.
    ///
    /// Maps the axis-aligned box `[left, right] x [bottom, top] x
    /// [-near, -far]` onto the `[-1, 1]` clip cube. No perspective: `w`
    /// stays 1.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let mut result = Self::IDENTITY;
        result.m[0][0] = 2.0 / (right - left);
        result.m[0][3] = -(right + left) / (right - left);
        result.m[1][1] = 2.0 / (top - bottom);
        result.m[1][3] = -(top + bottom) / (top - bottom);
        result.m[2][2] = -2.0 / (far - near);
        result.m[2][3] = -(far + near) / (far - near);
        result
    }

    /// Creates a view matrix looking from `eye` toward `target`.
    ///
    /// The first three rows are the camera's right, up, and negated
    /// forward basis vectors, with `-basis . eye` translation terms in the
    /// last column. Rows rather than columns because the view matrix is
    /// the inverse of the camera's world pose, and the inverse of an
    /// orthonormal rotation is its transpose.
    ///
    /// When `up` is parallel to the view direction the cross product
    /// degenerates to zero, [`Vec3::normalize`] passes the zero vector
    /// through, and the result is a singular view matrix. No error is
    /// raised; the caller sees the degeneracy when inverting or when
    /// every transformed point collapses.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalize();
        let right = forward.cross(up).normalize();
        let new_up = right.cross(forward);

        let mut result = Self::IDENTITY;
        result.m[0][0] = right.x;
        result.m[0][1] = right.y;
        result.m[0][2] = right.z;
        result.m[0][3] = -right.dot(eye);

        result.m[1][0] = new_up.x;
        result.m[1][1] = new_up.y;
        result.m[1][2] = new_up.z;
        result.m[1][3] = -new_up.dot(eye);

        result.m[2][0] = -forward.x;
        result.m[2][1] = -forward.y;
        result.m[2][2] = -forward.z;
        result.m[2][3] = forward.dot(eye);

        result
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Converts to glam Mat4 (column-major).
    pub fn to_glam(&self) -> glam::Mat4 {
        // glam uses column-major, so we transpose
        glam::Mat4::from_cols_array_2d(&[
            self.col(0),
            self.col(1),
            self.col(2),
            self.col(3),
        ])
    }

    /// Creates from glam Mat4.
    pub fn from_glam(m: glam::Mat4) -> Self {
        let cols = m.to_cols_array_2d();
        Self::from_rows([
            [cols[0][0], cols[1][0], cols[2][0], cols[3][0]],
            [cols[0][1], cols[1][1], cols[2][1], cols[3][1]],
            [cols[0][2], cols[1][2], cols[2][2], cols[3][2]],
            [cols[0][3], cols[1][3], cols[2][3], cols[3][3]],
        ])
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Mat4 * Mat4
impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

// Mat4 * Vec3 (homogeneous point transform)
impl Mul<Vec3> for Mat4 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform_point(rhs)
    }
}

impl Index<usize> for Mat4 {
    type Output = [f32; 4];

    #[inline]
    fn index(&self, i: usize) -> &[f32; 4] {
        &self.m[i]
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.m {
            writeln!(f, "[ {} {} {} {} ]", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}
