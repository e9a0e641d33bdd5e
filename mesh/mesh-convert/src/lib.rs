//! Polygon-mesh conversion for obj2stl.
//!
//! This crate turns a Wavefront OBJ polygon mesh into binary STL
//! triangle soup:
//!
//! 1. [`parse_obj`] / [`load_obj`] - read line-oriented records into an
//!    arena-backed [`mesh_model::PolygonMesh`]
//! 2. [`triangulate`] - fan-triangulate each face and resolve or compute
//!    one normal per triangle
//! 3. [`write_stl`] / [`save_stl`] - serialize the facet list into the
//!    fixed little-endian binary layout
//!
//! The pipeline is strictly staged and single-threaded: each stage
//! consumes the complete, immutable output of the previous one. Every
//! invariant violation aborts the whole conversion; the only non-fatal
//! condition is an unrecognized record tag, which the parser skips.
//!
//! # Example
//!
//! ```no_run
//! use mesh_convert::convert_file;
//!
//! let stats = convert_file("model.obj", "model.stl").unwrap();
//! println!("wrote {} triangles ({} bytes)", stats.facets, stats.bytes);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod obj;
mod stl;
mod triangulate;

pub use error::{ConvertError, ConvertResult, FormatError, GeometryError, ReferenceError};
pub use obj::{load_obj, parse_obj};
pub use stl::{binary_size, save_stl, write_stl, FACET_SIZE, HEADER_SIZE};
pub use triangulate::triangulate;

use std::path::Path;

use tracing::info;

/// Supported source mesh formats.
///
/// A closed set, matched exhaustively at the dispatch boundary. Adding a
/// format means extending this enum; call sites that already handle all
/// current variants fail to compile until they handle the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// Wavefront OBJ (ASCII, line-oriented).
    Obj,
}

impl SourceFormat {
    /// Detect a source format from a file extension.
    ///
    /// Returns `None` if the extension is not recognized.
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "obj" => Some(Self::Obj),
            _ => None,
        }
    }

    /// Get the canonical file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Obj => "obj",
        }
    }
}

/// Supported target mesh formats.
///
/// Same closed-set discipline as [`SourceFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetFormat {
    /// Binary STL triangle soup.
    Stl,
}

impl TargetFormat {
    /// Detect a target format from a file extension.
    ///
    /// Returns `None` if the extension is not recognized.
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "stl" => Some(Self::Stl),
            _ => None,
        }
    }

    /// Get the canonical file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Stl => "stl",
        }
    }
}

/// Counts reported by a completed conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertStats {
    /// Polygonal faces in the source mesh.
    pub faces: usize,

    /// Triangles written to the target.
    pub facets: usize,

    /// Total size of the emitted byte stream.
    pub bytes: u64,
}

/// Convert a source mesh file into a target mesh file.
///
/// The conversion pipeline is selected from the pair of file extensions.
///
/// # Errors
///
/// Returns an error if:
/// - Either extension is not a recognized format
/// - The source cannot be read or is malformed
/// - Triangulation fails on an unresolvable reference or degenerate
///   geometry
/// - The target cannot be written
///
/// # Example
///
/// ```no_run
/// use mesh_convert::convert_file;
///
/// let stats = convert_file("model.obj", "model.stl").unwrap();
/// assert_eq!(stats.bytes, 84 + 50 * stats.facets as u64);
/// ```
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> ConvertResult<ConvertStats> {
    let input = input.as_ref();
    let output = output.as_ref();

    let source = SourceFormat::from_path(input).ok_or_else(|| unknown_format(input))?;
    let target = TargetFormat::from_path(output).ok_or_else(|| unknown_format(output))?;

    match (source, target) {
        (SourceFormat::Obj, TargetFormat::Stl) => {
            let mesh = load_obj(input)?;
            info!(
                path = %input.display(),
                faces = mesh.face_count(),
                "Loaded source mesh"
            );

            let facets = triangulate(&mesh)?;
            save_stl(&facets, output)?;

            let stats = ConvertStats {
                faces: mesh.face_count(),
                facets: facets.len(),
                bytes: binary_size(facets.len()),
            };
            info!(
                path = %output.display(),
                facets = stats.facets,
                bytes = stats.bytes,
                "Wrote binary STL"
            );

            Ok(stats)
        }
    }
}

fn unknown_format(path: &Path) -> ConvertError {
    ConvertError::UnknownFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn source_format_from_path() {
        assert_eq!(SourceFormat::from_path("model.obj"), Some(SourceFormat::Obj));
        assert_eq!(SourceFormat::from_path("model.OBJ"), Some(SourceFormat::Obj));
        assert_eq!(
            SourceFormat::from_path("/path/to/model.obj"),
            Some(SourceFormat::Obj)
        );
        assert_eq!(SourceFormat::from_path("model.stl"), None);
        assert_eq!(SourceFormat::from_path("model"), None);
    }

    #[test]
    fn target_format_from_path() {
        assert_eq!(TargetFormat::from_path("model.stl"), Some(TargetFormat::Stl));
        assert_eq!(TargetFormat::from_path("model.STL"), Some(TargetFormat::Stl));
        assert_eq!(TargetFormat::from_path("model.obj"), None);
        assert_eq!(TargetFormat::from_path(""), None);
    }

    #[test]
    fn format_extensions() {
        assert_eq!(SourceFormat::Obj.extension(), "obj");
        assert_eq!(TargetFormat::Stl.extension(), "stl");
    }

    #[test]
    fn unknown_extension_reported() {
        let err = convert_file("model.xyz", "model.stl").unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UnknownFormat { ref extension } if extension == "xyz"
        ));
    }
}
