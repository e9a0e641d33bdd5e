//! Fan triangulation of polygonal faces.
//!
//! Every validated face with vertices v1…vn (n ≥ 3) becomes the n−2
//! triangles (v1, v2, v3), (v1, v3, v4), …, (v1, vn−1, vn), in that
//! order, preserving the polygon's vertex order. There is no re-winding
//! and no convexity or planarity check: a non-convex or non-planar
//! polygon produces a geometrically incorrect but structurally valid
//! fan.

use mesh_model::{Facet, Point3, PolygonMesh, Triangle, Vector3};
use tracing::debug;

use crate::error::{ConvertResult, GeometryError, ReferenceError};

/// Convert every face of a polygonal mesh into triangles.
///
/// Triangles appear in face order, then fan order within each face.
///
/// # Normals
///
/// A face that carries normal references contributes the *first* entry
/// of its normal-index list, resolved once, to every triangle derived
/// from it. Per-vertex normal variation within a face is not supported;
/// the remaining entries are validated for count but otherwise unused.
/// A face without normals gets one normal per triangle, computed from
/// that triangle's own vertices via the cross product of its edge
/// vectors, so triangles of a non-planar polygon can end up with
/// differing normals.
///
/// # Errors
///
/// - [`ReferenceError`] if any vertex or normal index falls outside its
///   table
/// - [`GeometryError`] if a normal must be computed for a triangle whose
///   vertices are collinear or coincident
pub fn triangulate(mesh: &PolygonMesh) -> ConvertResult<Vec<Facet>> {
    let capacity: usize = mesh
        .faces
        .iter()
        .map(|f| f.vertex_count().saturating_sub(2))
        .sum();
    let mut facets = Vec::with_capacity(capacity);

    for (face_no, face) in mesh.faces.iter().enumerate() {
        let corners = resolve_vertices(mesh, face_no, &face.vertices)?;
        let shared_normal = if face.has_normal() {
            Some(resolve_normal(mesh, face_no, face.normals[0])?)
        } else {
            None
        };

        for i in 1..corners.len().saturating_sub(1) {
            let triangle = Triangle::new(corners[0], corners[i], corners[i + 1]);
            let normal = match shared_normal {
                Some(n) => n,
                None => triangle
                    .normal()
                    .ok_or(GeometryError::DegenerateTriangle { face: face_no })?,
            };
            facets.push(Facet::new(normal, triangle.vertices()));
        }
    }

    debug!(
        faces = mesh.faces.len(),
        facets = facets.len(),
        "Triangulated mesh"
    );

    Ok(facets)
}

fn resolve_vertices(
    mesh: &PolygonMesh,
    face: usize,
    indices: &[u32],
) -> Result<Vec<Point3<f32>>, ReferenceError> {
    indices
        .iter()
        .map(|&index| {
            mesh.vertex(index)
                .map(|v| v.position)
                .ok_or(ReferenceError::VertexIndex {
                    face,
                    index,
                    len: mesh.vertices.len(),
                })
        })
        .collect()
}

fn resolve_normal(
    mesh: &PolygonMesh,
    face: usize,
    index: u32,
) -> Result<Vector3<f32>, ReferenceError> {
    mesh.normal(index).ok_or(ReferenceError::NormalIndex {
        face,
        index,
        len: mesh.normals.len(),
    })
}
