//! Output facet: one triangle of the target mesh.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One triangle of the target mesh.
///
/// Mirrors the fixed 50-byte binary record of the target format: a face
/// normal, three vertex positions, and a 16-bit attribute field. The
/// homogeneous `w` of source vertices and any texture data have no slot
/// here and are dropped when the facet is built.
///
/// The target mesh is a flat `Vec<Facet>` with no remaining topology;
/// ordering is face order, then fan order within each face.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Facet {
    /// Face normal, unit length when computed by the pipeline.
    pub normal: Vector3<f32>,

    /// Triangle corners, winding preserved from the source polygon.
    pub vertices: [Point3<f32>; 3],

    /// Attribute byte count. This pipeline always writes zero.
    pub attribute: u16,
}

impl Facet {
    /// Create a facet with a zero attribute field.
    #[inline]
    #[must_use]
    pub const fn new(normal: Vector3<f32>, vertices: [Point3<f32>; 3]) -> Self {
        Self {
            normal,
            vertices,
            attribute: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facet_attribute_is_zero() {
        let facet = Facet::new(
            Vector3::new(0.0, 0.0, 1.0),
            [
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
        );
        assert_eq!(facet.attribute, 0);
    }

    #[test]
    fn facet_keeps_winding() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);
        let facet = Facet::new(Vector3::new(0.0, 0.0, 1.0), [a, b, c]);
        assert_eq!(facet.vertices[0], a);
        assert_eq!(facet.vertices[1], b);
        assert_eq!(facet.vertices[2], c);
    }
}
