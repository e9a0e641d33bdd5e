//! Core mesh types for obj2stl.
//!
//! This crate provides the foundational types for the conversion pipeline:
//!
//! - [`Vertex`] - A point in 3D space with a homogeneous coordinate
//! - [`TexCoord`] - A texture coordinate with up to three components
//! - [`PolygonMesh`] - The parsed source mesh: arena tables plus faces
//! - [`FaceIndices`] - A polygonal face as 1-based indices into the tables
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`Facet`] - One output triangle: normal, three vertices, attribute
//!
//! # Precision
//!
//! All coordinates are `f32`, matching both the source text format and the
//! binary target format, so serialization writes the exact parsed bit
//! patterns.
//!
//! # Indexing
//!
//! Faces reference the mesh tables by **1-based** index, the convention of
//! the source format. Lookups take the 1-based index directly and return
//! `None` for index 0 or past-the-end references.
//!
//! # Example
//!
//! ```
//! use mesh_model::{FaceIndices, PolygonMesh, Vertex};
//!
//! let mut mesh = PolygonMesh::new();
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
//! mesh.faces.push(FaceIndices::new(vec![1, 2, 3], vec![], vec![]));
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(mesh.vertex(1).is_some());
//! assert!(mesh.vertex(0).is_none());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod facet;
mod mesh;
mod triangle;
mod vertex;

pub use facet::Facet;
pub use mesh::{FaceIndices, PolygonMesh};
pub use triangle::Triangle;
pub use vertex::{TexCoord, Vertex};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
