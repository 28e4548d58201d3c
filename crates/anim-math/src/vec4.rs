//! 4D vector shape.
//!
//! [`Vec4`] is the homogeneous sibling of [`Vec3`](crate::Vec3): clip-space
//! coordinates and per-vertex attributes that carry a fourth component.
//! Narrowing into a [`Vec3`] drops `w`.

/// A 4D vector of `f64` components.
///
/// # Example
///
/// ```rust
/// use anim_math::{Vec3, Vec4};
///
/// let clip = Vec4::new(40.0, 20.0, 10.0, 100.0);
/// assert_eq!(Vec3::from(clip), Vec3::new(40.0, 20.0, 10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec4 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
    /// W component
    pub w: f64,
}

impl Vec4 {
    /// Zero vector (0, 0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// One vector (1, 1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Converts to glam DVec4.
    #[inline]
    pub fn to_glam(self) -> glam::DVec4 {
        glam::DVec4::new(self.x, self.y, self.z, self.w)
    }

    /// Creates from glam DVec4.
    #[inline]
    pub fn from_glam(v: glam::DVec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<[f64; 4]> for Vec4 {
    #[inline]
    fn from(a: [f64; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec4> for [f64; 4] {
    #[inline]
    fn from(v: Vec4) -> [f64; 4] {
        v.to_array()
    }
}

impl From<glam::DVec4> for Vec4 {
    #[inline]
    fn from(v: glam::DVec4) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec4> for glam::DVec4 {
    #[inline]
    fn from(v: Vec4) -> glam::DVec4 {
        v.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec4_new() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.w, 4.0);
        assert_eq!(Vec4::splat(2.0), Vec4::new(2.0, 2.0, 2.0, 2.0));
    }

    #[test]
    fn test_vec4_conversions() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let a: [f64; 4] = v.into();
        assert_eq!(Vec4::from(a), v);
        assert_eq!(Vec4::from_glam(v.to_glam()), v);
    }
}
