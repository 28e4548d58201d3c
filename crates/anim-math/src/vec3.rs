//! 3D vector type for spatial quantities.
//!
//! [`Vec3`] represents positions, directions, and velocities in 3D space.
//! It is the workhorse value type of the toolkit: animation curves, rig
//! constraints, and the render pipeline all exchange `Vec3`s.
//!
//! # Usage
//!
//! ```rust
//! use anim_math::Vec3;
//!
//! let velocity = Vec3::new(1.0, 2.0, 0.0);
//! let heading = velocity.normalized();
//! let slowed = velocity * 0.5;
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::angle::{DEG_TO_RAD, RAD_TO_DEG};
use crate::error::ParseVectorError;
use crate::vec2::Vec2;
use crate::vec4::Vec4;

/// A 3D vector of `f64` components.
///
/// A `Vec3` doubles as a *point* (a position in space) and a *free vector*
/// (a displacement or direction); the type does not distinguish the two.
/// Operations that measure between positions ([`distance`](Self::distance),
/// [`midpoint`](Self::midpoint), [`rotated_around_deg`](Self::rotated_around_deg))
/// treat their operands as points, while directional operations
/// ([`normalized`](Self::normalized), [`cross`](Self::cross),
/// [`angle_deg`](Self::angle_deg)) treat them as free vectors.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z`, index `[0]`, `[1]`, `[2]`, or
/// [`as_slice`](Self::as_slice) for passing to external numeric APIs.
///
/// # Degenerate inputs
///
/// The numeric core never signals errors. Zero divisors and zero-length
/// inputs fall back to defined sentinel results (see the individual
/// operations); NaN and infinity are legal component values and flow
/// through arithmetic with IEEE semantics.
///
/// # Example
///
/// ```rust
/// use anim_math::Vec3;
///
/// let p = Vec3::new(3.0, 4.0, 0.0);
/// assert_eq!(p.length(), 5.0);
/// assert_eq!(p[1], 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anim_math::Vec3;
    ///
    /// let v = Vec3::new(1.0, 2.0, 3.0);
    /// ```
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anim_math::Vec3;
    ///
    /// let v = Vec3::splat(2.0);
    /// assert_eq!(v, Vec3::new(2.0, 2.0, 2.0));
    /// ```
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Views the components as a contiguous slice of length 3, in
    /// `x`, `y`, `z` order.
    ///
    /// Useful for handing the vector to graphics or numeric APIs that
    /// expect a flat buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        // repr(C): three contiguous f64s, no padding.
        unsafe { std::slice::from_raw_parts(self as *const Self as *const f64, 3) }
    }

    /// Views the components as a mutable slice of length 3.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        // repr(C): three contiguous f64s, no padding.
        unsafe { std::slice::from_raw_parts_mut(self as *mut Self as *mut f64, 3) }
    }

    /// Overwrites all three components. No validation is performed.
    #[inline]
    pub fn set(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Overwrites all three components with the same value.
    #[inline]
    pub fn set_splat(&mut self, v: f64) -> &mut Self {
        self.set(v, v, v)
    }

    /// Returns true iff every component differs from `other`'s by strictly
    /// less than `tolerance`.
    ///
    /// This is a per-axis bound, not a Euclidean-distance bound. A
    /// tolerance of `1e-4` is customary for rig comparisons.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anim_math::Vec3;
    ///
    /// let a = Vec3::new(40.0, 20.0, 70.0);
    /// let b = Vec3::new(40.00001, 19.99999, 70.00001);
    /// assert!(a.matches(b, 1e-4));
    /// assert!(!a.matches(b, 1e-6));
    /// ```
    #[inline]
    pub fn matches(self, other: Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() < tolerance
            && (self.y - other.y).abs() < tolerance
            && (self.z - other.z).abs() < tolerance
    }

    /// Returns true iff the unsigned angle to `other` is strictly less than
    /// `tolerance` degrees.
    ///
    /// Both vectors are treated as directions. Against a zero vector the
    /// angle degenerates to 90° (see [`angle_deg`](Self::angle_deg)), so
    /// alignment checks involving a zero vector always fail for practical
    /// tolerances.
    #[inline]
    pub fn is_aligned_deg(self, other: Self, tolerance: f64) -> bool {
        self.angle_deg(other) < tolerance
    }

    /// Returns true iff the unsigned angle to `other` is strictly less than
    /// `tolerance` radians.
    #[inline]
    pub fn is_aligned_rad(self, other: Self, tolerance: f64) -> bool {
        self.angle_rad(other) < tolerance
    }

    /// Dot product with another vector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anim_math::Vec3;
    ///
    /// assert_eq!(Vec3::X.dot(Vec3::Y), 0.0);
    /// ```
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product (right-hand rule).
    ///
    /// The result is perpendicular to both inputs whenever they are
    /// linearly independent; parallel inputs yield the zero vector.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Normalized cross product: the unit normal of the plane spanned by
    /// `self` and `other`.
    ///
    /// If the cross product has zero length (parallel inputs, or either
    /// input zero), returns the zero vector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anim_math::Vec3;
    ///
    /// assert_eq!(Vec3::X.perpendicular(Vec3::Y), Vec3::Z);
    /// ```
    #[inline]
    pub fn perpendicular(self, other: Self) -> Self {
        self.cross(other).normalized()
    }

    /// Length (magnitude) of the vector.
    ///
    /// Involves a square root; prefer [`length_squared`](Self::length_squared)
    /// when only comparing magnitudes.
    #[inline]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Squared length (avoids the square root).
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean distance to `other`, treating both vectors as points.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anim_math::Vec3;
    ///
    /// let p = Vec3::new(3.0, 4.0, 0.0);
    /// assert_eq!(p.distance(Vec3::ZERO), 5.0);
    /// ```
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Squared distance to `other` (avoids the square root).
    #[inline]
    pub fn distance_squared(self, other: Self) -> f64 {
        (self - other).length_squared()
    }

    /// Unsigned angle to `other` in degrees, in `[0, 180]`.
    ///
    /// Computed as the arccosine of the dot of the two normalized inputs.
    /// A zero vector normalizes to itself, so its dot with anything is 0
    /// and the angle against it resolves to 90°.
    #[inline]
    pub fn angle_deg(self, other: Self) -> f64 {
        self.angle_rad(other) * RAD_TO_DEG
    }

    /// Unsigned angle to `other` in radians, in `[0, π]`.
    #[inline]
    pub fn angle_rad(self, other: Self) -> f64 {
        self.normalized().dot(other.normalized()).acos()
    }

    /// Returns a unit-length copy of this vector.
    ///
    /// A zero-length vector normalizes to the zero vector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anim_math::Vec3;
    ///
    /// assert_eq!(Vec3::new(5.0, 0.0, 0.0).normalized(), Vec3::X);
    /// assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
    /// ```
    #[inline]
    pub fn normalized(self) -> Self {
        let length = self.length();
        if length > 0.0 {
            Self::new(self.x / length, self.y / length, self.z / length)
        } else {
            Self::ZERO
        }
    }

    /// Normalizes this vector in place. A zero-length vector is left as the
    /// zero vector.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Returns a copy scaled so its length becomes `length`, preserving
    /// direction. A zero-length vector yields the zero vector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anim_math::Vec3;
    ///
    /// let v = Vec3::new(3.0, 4.0, 0.0);
    /// assert_eq!(v.scaled_to(15.0), Vec3::new(9.0, 12.0, 0.0));
    /// ```
    #[inline]
    pub fn scaled_to(self, length: f64) -> Self {
        let l = self.length();
        if l > 0.0 {
            Self::new(
                (self.x / l) * length,
                (self.y / l) * length,
                (self.z / l) * length,
            )
        } else {
            Self::ZERO
        }
    }

    /// Scales this vector in place so its length becomes `length`.
    #[inline]
    pub fn scale_to(&mut self, length: f64) -> &mut Self {
        *self = self.scaled_to(length);
        self
    }

    /// Returns a copy with its length capped at `max`.
    ///
    /// Scales down to exactly length `max` only when the current squared
    /// length exceeds `max²` (and is nonzero); shorter vectors pass through
    /// unchanged, with no square root taken.
    #[inline]
    pub fn limited(self, max: f64) -> Self {
        let length_squared = self.length_squared();
        if length_squared > max * max && length_squared > 0.0 {
            self * (max / length_squared.sqrt())
        } else {
            self
        }
    }

    /// Caps this vector's length at `max` in place.
    #[inline]
    pub fn limit(&mut self, max: f64) -> &mut Self {
        *self = self.limited(max);
        self
    }

    /// Returns a copy rotated by `angle` degrees around `axis`.
    ///
    /// The axis is normalized internally; its length does not matter. A
    /// zero-length axis normalizes to the zero vector and the rotation
    /// degenerates (only the `cos` term survives); callers should avoid it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anim_math::Vec3;
    ///
    /// let v = Vec3::X.rotated_deg(90.0, Vec3::Z);
    /// assert!(v.matches(Vec3::Y, 1e-9));
    /// ```
    #[inline]
    pub fn rotated_deg(self, angle: f64, axis: Self) -> Self {
        self.rotated_rad(angle * DEG_TO_RAD, axis)
    }

    /// Returns a copy rotated by `angle` radians around `axis`.
    pub fn rotated_rad(self, angle: f64, axis: Self) -> Self {
        let ax = axis.normalized();
        let sina = angle.sin();
        let cosa = angle.cos();
        let cosb = 1.0 - cosa;

        Self::new(
            self.x * (ax.x * ax.x * cosb + cosa)
                + self.y * (ax.x * ax.y * cosb - ax.z * sina)
                + self.z * (ax.x * ax.z * cosb + ax.y * sina),
            self.x * (ax.y * ax.x * cosb + ax.z * sina)
                + self.y * (ax.y * ax.y * cosb + cosa)
                + self.z * (ax.y * ax.z * cosb - ax.x * sina),
            self.x * (ax.z * ax.x * cosb - ax.y * sina)
                + self.y * (ax.z * ax.y * cosb + ax.x * sina)
                + self.z * (ax.z * ax.z * cosb + cosa),
        )
    }

    /// Rotates this vector in place by `angle` degrees around `axis`.
    #[inline]
    pub fn rotate_deg(&mut self, angle: f64, axis: Self) -> &mut Self {
        *self = self.rotated_deg(angle, axis);
        self
    }

    /// Rotates this vector in place by `angle` radians around `axis`.
    #[inline]
    pub fn rotate_rad(&mut self, angle: f64, axis: Self) -> &mut Self {
        *self = self.rotated_rad(angle, axis);
        self
    }

    /// Returns a copy rotated by three Euler angles in degrees, applied
    /// about the x, then y, then z axis of the rotating frame.
    ///
    /// The three rotations are combined into a single matrix built from the
    /// products of the angles' sines and cosines, so there is no
    /// intermediate rounding from chaining three axis rotations.
    /// Gimbal lock is inherent to the representation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anim_math::Vec3;
    ///
    /// let v = Vec3::X.rotated_euler_deg(0.0, 0.0, 90.0);
    /// assert!(v.matches(Vec3::Y, 1e-9));
    /// ```
    #[inline]
    pub fn rotated_euler_deg(self, ax: f64, ay: f64, az: f64) -> Self {
        self.rotated_euler_rad(ax * DEG_TO_RAD, ay * DEG_TO_RAD, az * DEG_TO_RAD)
    }

    /// Returns a copy rotated by three Euler angles in radians, applied
    /// about the x, then y, then z axis of the rotating frame.
    pub fn rotated_euler_rad(self, ax: f64, ay: f64, az: f64) -> Self {
        let cx = ax.cos();
        let sx = ax.sin();
        let cy = ay.cos();
        let sy = ay.sin();
        let cz = az.cos();
        let sz = az.sin();

        Self::new(
            cy * cz * self.x - cy * sz * self.y + sy * self.z,
            (cx * sz + sx * sy * cz) * self.x + (cx * cz - sx * sy * sz) * self.y
                - sx * cy * self.z,
            (sx * sz - cx * sy * cz) * self.x + (cx * sy * sz + sx * cz) * self.y
                + cx * cy * self.z,
        )
    }

    /// Rotates this vector in place by three Euler angles in degrees.
    #[inline]
    pub fn rotate_euler_deg(&mut self, ax: f64, ay: f64, az: f64) -> &mut Self {
        *self = self.rotated_euler_deg(ax, ay, az);
        self
    }

    /// Rotates this vector in place by three Euler angles in radians.
    #[inline]
    pub fn rotate_euler_rad(&mut self, ax: f64, ay: f64, az: f64) -> &mut Self {
        *self = self.rotated_euler_rad(ax, ay, az);
        self
    }

    /// Returns a copy rotated by `angle` degrees around the line through
    /// `pivot` along `axis`.
    ///
    /// This treats the vector as a point: it is translated so the pivot
    /// sits at the origin, rotated, and translated back.
    #[inline]
    pub fn rotated_around_deg(self, angle: f64, pivot: Self, axis: Self) -> Self {
        self.rotated_around_rad(angle * DEG_TO_RAD, pivot, axis)
    }

    /// Returns a copy rotated by `angle` radians around the line through
    /// `pivot` along `axis`.
    #[inline]
    pub fn rotated_around_rad(self, angle: f64, pivot: Self, axis: Self) -> Self {
        (self - pivot).rotated_rad(angle, axis) + pivot
    }

    /// Rotates this point in place by `angle` degrees around the line
    /// through `pivot` along `axis`.
    #[inline]
    pub fn rotate_around_deg(&mut self, angle: f64, pivot: Self, axis: Self) -> &mut Self {
        *self = self.rotated_around_deg(angle, pivot, axis);
        self
    }

    /// Rotates this point in place by `angle` radians around the line
    /// through `pivot` along `axis`.
    #[inline]
    pub fn rotate_around_rad(&mut self, angle: f64, pivot: Self, axis: Self) -> &mut Self {
        *self = self.rotated_around_rad(angle, pivot, axis);
        self
    }

    /// Reinterprets the components as coefficients along the basis vectors
    /// `vx`, `vy`, `vz` offset from `origin`:
    /// `origin + x·vx + y·vy + z·vz`.
    ///
    /// No orthonormality is assumed; the affine combination is performed
    /// with whatever basis the caller supplies.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anim_math::Vec3;
    ///
    /// let local = Vec3::new(1.0, 2.0, 0.0);
    /// let world = local.mapped(Vec3::new(10.0, 0.0, 0.0), Vec3::X, Vec3::Y, Vec3::Z);
    /// assert_eq!(world, Vec3::new(11.0, 2.0, 0.0));
    /// ```
    #[inline]
    pub fn mapped(self, origin: Self, vx: Self, vy: Self, vz: Self) -> Self {
        Self::new(
            origin.x + self.x * vx.x + self.y * vy.x + self.z * vz.x,
            origin.y + self.x * vx.y + self.y * vy.y + self.z * vz.y,
            origin.z + self.x * vx.z + self.y * vy.z + self.z * vz.z,
        )
    }

    /// Maps this vector in place onto the basis `vx`, `vy`, `vz` offset
    /// from `origin`.
    #[inline]
    pub fn map(&mut self, origin: Self, vx: Self, vy: Self, vz: Self) -> &mut Self {
        *self = self.mapped(origin, vx, vy, vz);
        self
    }

    /// Linear interpolation towards `other`.
    ///
    /// `t = 0.0` returns self, `t = 1.0` returns other. `t` is not clamped:
    /// values outside `[0, 1]` extrapolate beyond the segment.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anim_math::Vec3;
    ///
    /// let a = Vec3::new(0.0, 5.0, 0.0);
    /// let b = Vec3::new(10.0, 10.0, 20.0);
    /// assert_eq!(a.lerp(b, 0.5), Vec3::new(5.0, 7.5, 10.0));
    /// ```
    #[inline]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.x * (1.0 - t) + other.x * t,
            self.y * (1.0 - t) + other.y * t,
            self.z * (1.0 - t) + other.z * t,
        )
    }

    /// Moves this vector in place towards `other` by the unclamped
    /// fraction `t`.
    #[inline]
    pub fn interpolate(&mut self, other: Self, t: f64) -> &mut Self {
        *self = self.lerp(other, t);
        self
    }

    /// Midpoint between this vector and `other`, treating both as points.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new(
            (self.x + other.x) / 2.0,
            (self.y + other.y) / 2.0,
            (self.z + other.z) / 2.0,
        )
    }

    /// Sets this vector to the midpoint between itself and `other`.
    #[inline]
    pub fn middle(&mut self, other: Self) -> &mut Self {
        *self = self.midpoint(other);
        self
    }

    /// Sets this vector to the component-wise mean (centroid) of `points`.
    ///
    /// An empty slice divides by zero in the scalar domain and leaves every
    /// component NaN; the division is not guarded.
    pub fn average(&mut self, points: &[Self]) -> &mut Self {
        let mut sum = Self::ZERO;
        for p in points {
            sum += *p;
        }
        let n = points.len() as f64;
        // Raw division: the zero-divisor fallback of `/` must not apply here.
        self.x = sum.x / n;
        self.y = sum.y / n;
        self.z = sum.z / n;
        self
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Converts to glam DVec3.
    #[inline]
    pub fn to_glam(self) -> glam::DVec3 {
        glam::DVec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam DVec3.
    #[inline]
    pub fn from_glam(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

// Indexing
impl Index<usize> for Vec3 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

// Vec3 + Vec3
impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

// Vec3 + f64
impl Add<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f64) -> Self {
        Self::new(self.x + rhs, self.y + rhs, self.z + rhs)
    }
}

// f64 + Vec3
impl Add<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self + rhs.x, self + rhs.y, self + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl AddAssign<f64> for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: f64) {
        self.x += rhs;
        self.y += rhs;
        self.z += rhs;
    }
}

// Vec3 - Vec3
impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Vec3 - f64
impl Sub<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f64) -> Self {
        Self::new(self.x - rhs, self.y - rhs, self.z - rhs)
    }
}

// f64 - Vec3
impl Sub<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self - rhs.x, self - rhs.y, self - rhs.z)
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl SubAssign<f64> for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: f64) {
        self.x -= rhs;
        self.y -= rhs;
        self.z -= rhs;
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// Vec3 * Vec3 (component-wise)
impl Mul for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

// Vec3 * f64
impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// f64 * Vec3
impl Mul<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self * rhs.x, self * rhs.y, self * rhs.z)
    }
}

impl MulAssign for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.x *= rhs.x;
        self.y *= rhs.y;
        self.z *= rhs.z;
    }
}

impl MulAssign<f64> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

// Vec3 / Vec3 (component-wise).
// A zero divisor component skips the division for that axis and passes the
// dividend's component through unchanged.
impl Div for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(
            if rhs.x != 0.0 { self.x / rhs.x } else { self.x },
            if rhs.y != 0.0 { self.y / rhs.y } else { self.y },
            if rhs.z != 0.0 { self.z / rhs.z } else { self.z },
        )
    }
}

// Vec3 / f64.
// A zero divisor leaves the whole vector unchanged; no axis is divided.
// Note the asymmetry with the component-wise divide above.
impl Div<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        if rhs == 0.0 {
            return self;
        }
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

// f64 / Vec3 (component-wise, unguarded).
impl Div<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn div(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self / rhs.x, self / rhs.y, self / rhs.z)
    }
}

impl DivAssign for Vec3 {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl DivAssign<f64> for Vec3 {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> [f64; 3] {
        v.to_array()
    }
}

// Widening from the 2D sibling: z is zero-filled.
impl From<Vec2> for Vec3 {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y, 0.0)
    }
}

// Narrowing from the 4D sibling: w is dropped.
impl From<Vec4> for Vec3 {
    #[inline]
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<glam::DVec3> for Vec3 {
    #[inline]
    fn from(v: glam::DVec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3> for glam::DVec3 {
    #[inline]
    fn from(v: Vec3) -> glam::DVec3 {
        v.to_glam()
    }
}

// Textual form: three numeric fields separated by ", ". The two-character
// separator is a wire contract; parsing accepts exactly this shape.
impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

impl FromStr for Vec3 {
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(", ").collect();
        if fields.len() != 3 {
            return Err(ParseVectorError::component_count(3, fields.len()));
        }
        Ok(Self::new(
            fields[0].parse()?,
            fields[1].parse()?,
            fields[2].parse()?,
        ))
    }
}
