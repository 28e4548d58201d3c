//! 2D vector shape.
//!
//! [`Vec2`] is the planar sibling of [`Vec3`](crate::Vec3): screen-space
//! positions, UV coordinates, 2D offsets. Widening into a [`Vec3`]
//! zero-fills the third component.

/// A 2D vector of `f64` components.
///
/// # Example
///
/// ```rust
/// use anim_math::{Vec2, Vec3};
///
/// let uv = Vec2::new(0.25, 0.75);
/// let spatial = Vec3::from(uv);
/// assert_eq!(spatial.z, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
}

impl Vec2 {
    /// Zero vector (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// One vector (1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to the same value.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Converts to glam DVec2.
    #[inline]
    pub fn to_glam(self) -> glam::DVec2 {
        glam::DVec2::new(self.x, self.y)
    }

    /// Creates from glam DVec2.
    #[inline]
    pub fn from_glam(v: glam::DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<[f64; 2]> for Vec2 {
    #[inline]
    fn from(a: [f64; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec2> for [f64; 2] {
    #[inline]
    fn from(v: Vec2) -> [f64; 2] {
        v.to_array()
    }
}

impl From<glam::DVec2> for Vec2 {
    #[inline]
    fn from(v: glam::DVec2) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec2> for glam::DVec2 {
    #[inline]
    fn from(v: Vec2) -> glam::DVec2 {
        v.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_new() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(Vec2::splat(3.0), Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_vec2_conversions() {
        let v = Vec2::new(1.0, 2.0);
        let a: [f64; 2] = v.into();
        assert_eq!(Vec2::from(a), v);
        assert_eq!(Vec2::from_glam(v.to_glam()), v);
    }
}
