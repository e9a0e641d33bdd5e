//! Vertex and texture-coordinate types.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A vertex in 3D space with a homogeneous coordinate.
///
/// Source vertex records carry an optional fourth component `w` that
/// defaults to 1.0. It travels with the vertex through the pipeline, but
/// the binary target format has no slot for it, so emission drops it.
///
/// # Example
///
/// ```
/// use mesh_model::Vertex;
///
/// let v = Vertex::from_coords(1.0, 2.0, 3.0);
/// assert_eq!(v.position.x, 1.0);
/// assert_eq!(v.w, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// 3D position.
    pub position: Point3<f32>,

    /// Homogeneous coordinate; 1.0 unless the source says otherwise.
    pub w: f32,
}

impl Vertex {
    /// Create a vertex with an explicit homogeneous coordinate.
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            position: Point3::new(x, y, z),
            w,
        }
    }

    /// Create a vertex from coordinates, defaulting `w` to 1.0.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_model::Vertex;
    ///
    /// let v = Vertex::from_coords(0.0, 0.0, 1.0);
    /// assert_eq!(v.position.z, 1.0);
    /// assert_eq!(v.w, 1.0);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_coords(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }
}

impl From<[f32; 3]> for Vertex {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::from_coords(x, y, z)
    }
}

impl From<(f32, f32, f32)> for Vertex {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::from_coords(x, y, z)
    }
}

/// A texture coordinate with up to three components.
///
/// `v` and `w` default to 0.0 when the source record omits them. Texture
/// data is parsed for completeness of the source model but is never
/// consulted by triangulation, and the target format has no slot for it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TexCoord {
    /// Horizontal coordinate.
    pub u: f32,
    /// Vertical coordinate, 0.0 if absent.
    pub v: f32,
    /// Depth coordinate, 0.0 if absent.
    pub w: f32,
}

impl TexCoord {
    /// Create a texture coordinate from all three components.
    #[inline]
    #[must_use]
    pub const fn new(u: f32, v: f32, w: f32) -> Self {
        Self { u, v, w }
    }
}
