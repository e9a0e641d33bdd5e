//! Arena-backed polygonal source mesh.

use crate::{TexCoord, Vertex};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One polygonal face as index lists into the owning mesh tables.
///
/// All indices are **1-based**, the convention of the source format.
/// Faces hold plain integers, never references; the tables in
/// [`PolygonMesh`] are append-only during parsing, so an index stored
/// here stays valid for the table's entire lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceIndices {
    /// Vertex indices, in polygon order.
    pub vertices: Vec<u32>,

    /// Normal indices. Either empty or one per vertex.
    pub normals: Vec<u32>,

    /// Texture-coordinate indices. Either empty or one per vertex.
    pub texcoords: Vec<u32>,
}

impl FaceIndices {
    /// Create a face from its three index lists.
    #[inline]
    #[must_use]
    pub const fn new(vertices: Vec<u32>, normals: Vec<u32>, texcoords: Vec<u32>) -> Self {
        Self {
            vertices,
            normals,
            texcoords,
        }
    }

    /// Check the per-face consistency invariant.
    ///
    /// A face must reference at least 3 vertices (a polygon, not an edge
    /// or point). If normal indices are present there must be exactly one
    /// per vertex. If texture indices are present, the normal and texture
    /// counts must both match the vertex count.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_model::FaceIndices;
    ///
    /// assert!(FaceIndices::new(vec![1, 2, 3], vec![], vec![]).is_consistent());
    /// assert!(!FaceIndices::new(vec![1, 2], vec![], vec![]).is_consistent());
    /// assert!(!FaceIndices::new(vec![1, 2, 3], vec![1], vec![]).is_consistent());
    /// ```
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }

        if self.texcoords.is_empty() {
            self.normals.is_empty() || self.normals.len() == self.vertices.len()
        } else {
            self.normals.len() == self.vertices.len()
                && self.texcoords.len() == self.vertices.len()
        }
    }

    /// Whether the face carries normal references.
    #[inline]
    #[must_use]
    pub fn has_normal(&self) -> bool {
        !self.normals.is_empty()
    }

    /// Number of vertices in the polygon.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

/// A polygonal mesh as parsed from source records.
///
/// Storage is arena style: flat tables for vertices, normals, and texture
/// coordinates, plus faces holding 1-based indices into them. The tables
/// grow only while parsing accumulates records; after that the whole mesh
/// is treated as read-only by the rest of the pipeline.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolygonMesh {
    /// Vertex table.
    pub vertices: Vec<Vertex>,

    /// Normal table. Entries are stored as given; unit length is not
    /// enforced here.
    pub normals: Vec<Vector3<f32>>,

    /// Texture-coordinate table.
    pub texcoords: Vec<TexCoord>,

    /// Faces, in source order.
    pub faces: Vec<FaceIndices>,
}

impl PolygonMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            normals: Vec::new(),
            texcoords: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Look up a vertex by 1-based index.
    ///
    /// Returns `None` for index 0 or an index past the end of the table.
    #[inline]
    #[must_use]
    pub fn vertex(&self, index: u32) -> Option<&Vertex> {
        let i = (index as usize).checked_sub(1)?;
        self.vertices.get(i)
    }

    /// Look up a normal by 1-based index.
    ///
    /// Returns `None` for index 0 or an index past the end of the table.
    #[inline]
    #[must_use]
    pub fn normal(&self, index: u32) -> Option<Vector3<f32>> {
        let i = (index as usize).checked_sub(1)?;
        self.normals.get(i).copied()
    }

    /// Look up a texture coordinate by 1-based index.
    ///
    /// Returns `None` for index 0 or an index past the end of the table.
    #[inline]
    #[must_use]
    pub fn texcoord(&self, index: u32) -> Option<&TexCoord> {
        let i = (index as usize).checked_sub(1)?;
        self.texcoords.get(i)
    }

    /// Get the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}
