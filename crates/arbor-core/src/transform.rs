//! Column-major 4x4 affine transforms.
//!
//! The layout engine produces coordinates in unit cells; a renderer maps
//! them into device space. [`Matrix4`] covers the transforms that mapping
//! needs: translation along a direction, rotation (about the z-axis, an
//! arbitrary ray, or a 2D center), and scaling about a center.
//!
//! Matrices are stored column-major, so `values()[0..4]` is the first
//! column. Transforms chain builder-style; each method returns the combined
//! matrix with the new transform applied after the existing one.

use thiserror::Error;

use crate::geometry::Point;

/// Errors produced when building a transform.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A rotation axis needs two distinct points.
    #[error("rotation axis endpoints coincide; not a valid ray")]
    DegenerateRay,

    /// A translation direction must have a nonzero length.
    #[error("translation direction is the zero vector")]
    DegenerateDirection,
}

/// Multiply two column-major 4x4 matrices: `a * b`.
fn mul(a: &[f32; 16], b: &[f32; 16]) -> [f32; 16] {
    let mut out = [0.0f32; 16];
    for i in 0..4 {
        for j in 0..4 {
            out[j * 4 + i] = a[i] * b[j * 4]
                + a[i + 4] * b[j * 4 + 1]
                + a[i + 8] * b[j * 4 + 2]
                + a[i + 12] * b[j * 4 + 3];
        }
    }
    out
}

/// Rotation about the z-axis, in radians.
fn rotation_z(radians: f32) -> [f32; 16] {
    let (sin, cos) = radians.sin_cos();
    [
        cos, sin, 0.0, 0.0, //
        -sin, cos, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]
}

/// For the ray `(a1, b1, c1) -> (a2, b2, c2)`, the pair of matrices that
/// map the ray onto the z-axis and back again.
fn ray_transform(
    a1: f32,
    b1: f32,
    c1: f32,
    a2: f32,
    b2: f32,
    c2: f32,
) -> Result<([f32; 16], [f32; 16]), TransformError> {
    if a1 == a2 && b1 == b2 && c1 == c2 {
        return Err(TransformError::DegenerateRay);
    }

    let sqrt1 = ((a2 - a1) * (a2 - a1) + (b2 - b1) * (b2 - b1)).sqrt();
    let cos1 = if sqrt1 != 0.0 { (b2 - b1) / sqrt1 } else { 1.0 };
    let sin1 = if sqrt1 != 0.0 { (a2 - a1) / sqrt1 } else { 0.0 };

    let b = (a2 - a1) * sin1 + (b2 - b1) * cos1;
    let c = c2 - c1;

    let sqrt2 = (b * b + c * c).sqrt();
    let cos2 = if sqrt2 != 0.0 { c / sqrt2 } else { 1.0 };
    let sin2 = if sqrt2 != 0.0 { b / sqrt2 } else { 0.0 };

    let to_axis = [
        cos1,
        cos2 * sin1,
        sin1 * sin2,
        0.0,
        -sin1,
        cos1 * cos2,
        cos1 * sin2,
        0.0,
        0.0,
        -sin2,
        cos2,
        0.0,
        b1 * sin1 - a1 * cos1,
        c1 * sin2 - a1 * sin1 * cos2 - b1 * cos1 * cos2,
        -a1 * sin1 * sin2 - b1 * cos1 * sin2 - c1 * cos2,
        1.0,
    ];
    let from_axis = [
        cos1,
        -sin1,
        0.0,
        0.0,
        cos2 * sin1,
        cos2 * cos1,
        -sin2,
        0.0,
        sin1 * sin2,
        cos1 * sin2,
        cos2,
        0.0,
        a1,
        b1,
        c1,
        1.0,
    ];

    Ok((to_axis, from_axis))
}

/// A column-major 4x4 affine transform.
///
/// # Examples
///
/// ```
/// # use arbor_core::transform::Matrix4;
/// let matrix = Matrix4::identity().scale(2.0, 2.0, 1.0);
/// let [x, y, _, _] = matrix.apply(1.5, 0.5, 0.0, 1.0);
/// assert_eq!((x, y), (3.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4([f32; 16]);

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix4 {
    /// The identity transform.
    pub fn identity() -> Self {
        Self([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Creates a transform from raw column-major values.
    pub fn from_values(values: [f32; 16]) -> Self {
        Self(values)
    }

    /// Returns the raw column-major values.
    pub fn values(&self) -> [f32; 16] {
        self.0
    }

    /// Translates by `distance` along the direction `(dx, dy, dz)`.
    ///
    /// The direction is normalized first.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::DegenerateDirection`] for a zero vector.
    pub fn translate_along(
        self,
        distance: f32,
        dx: f32,
        dy: f32,
        dz: f32,
    ) -> Result<Self, TransformError> {
        let length = (dx * dx + dy * dy + dz * dz).sqrt();
        if length == 0.0 {
            return Err(TransformError::DegenerateDirection);
        }

        let translation = [
            1.0,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
            0.0,
            dx * distance / length,
            dy * distance / length,
            dz * distance / length,
            1.0,
        ];
        Ok(Self(mul(&translation, &self.0)))
    }

    /// Rotates about the z-axis by `radians`.
    pub fn rotate_z(self, radians: f32) -> Self {
        Self(mul(&rotation_z(radians), &self.0))
    }

    /// Rotates by `radians` about the ray running from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::DegenerateRay`] when the two points
    /// coincide.
    pub fn rotate_about(
        self,
        radians: f32,
        from: [f32; 3],
        to: [f32; 3],
    ) -> Result<Self, TransformError> {
        let (to_axis, from_axis) = ray_transform(from[0], from[1], from[2], to[0], to[1], to[2])?;
        let rotation = mul(&from_axis, &mul(&rotation_z(radians), &to_axis));
        Ok(Self(mul(&rotation, &self.0)))
    }

    /// Rotates by `radians` in the xy-plane around the point `(cx, cy)`.
    pub fn rotate_around_point(self, radians: f32, cx: f32, cy: f32) -> Self {
        // The axis through (cx, cy, 0) and (cx, cy, 1) is never degenerate.
        self.rotate_about(radians, [cx, cy, 0.0], [cx, cy, 1.0])
            .expect("vertical axis is a valid ray")
    }

    /// Scales by `(sx, sy, sz)` about the origin.
    pub fn scale(self, sx: f32, sy: f32, sz: f32) -> Self {
        self.scale_about(sx, sy, sz, 0.0, 0.0, 0.0)
    }

    /// Scales by `(sx, sy, sz)` about the center `(cx, cy, cz)`.
    pub fn scale_about(self, sx: f32, sy: f32, sz: f32, cx: f32, cy: f32, cz: f32) -> Self {
        let scaling = [
            sx,
            0.0,
            0.0,
            0.0,
            0.0,
            sy,
            0.0,
            0.0,
            0.0,
            0.0,
            sz,
            0.0,
            cx - cx * sx,
            cy - cy * sy,
            cz - cz * sz,
            1.0,
        ];
        Self(mul(&scaling, &self.0))
    }

    /// Returns the combined transform that applies `self` first and
    /// `other` second.
    pub fn then(self, other: &Matrix4) -> Self {
        Self(mul(&other.0, &self.0))
    }

    /// Applies the transform to the homogeneous coordinate `(x, y, z, w)`.
    pub fn apply(&self, x: f32, y: f32, z: f32, w: f32) -> [f32; 4] {
        let m = &self.0;
        let mut out = [0.0f32; 4];
        for i in 0..4 {
            out[i] = m[i] * x + m[i + 4] * y + m[i + 8] * z + m[i + 12] * w;
        }
        out
    }

    /// Applies the transform to a 2D point (z = 0, w = 1).
    pub fn apply_point(&self, point: Point) -> Point {
        let [x, y, _, _] = self.apply(point.x(), point.y(), 0.0, 1.0);
        Point::new(x, y)
    }
}
