//! Binary STL emission.
//!
//! # Format
//!
//! ```text
//! UINT8[80]    – Header, zero-filled (ignored by readers)
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector (i, j, k)
//!     REAL32[3] – Vertex A (x, y, z)
//!     REAL32[3] – Vertex B
//!     REAL32[3] – Vertex C
//!     UINT16    – Attribute byte count (0 in this pipeline)
//! end
//! ```
//!
//! All multi-byte fields are little-endian regardless of host byte
//! order, with no padding anywhere. Floats are written as their raw
//! 4-byte bit patterns; no value transformation, no precision loss.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use mesh_model::{Facet, Point3, Vector3};

use crate::error::ConvertResult;

/// STL binary header size in bytes.
pub const HEADER_SIZE: usize = 80;

/// Size of one facet record in binary STL (normal + 3 vertices + attribute).
pub const FACET_SIZE: usize = 50;

/// Exact size in bytes of the binary STL stream for `count` facets.
///
/// Emission is deterministic: writing `count` facets always produces
/// `80 + 4 + 50 * count` bytes.
///
/// # Example
///
/// ```
/// use mesh_convert::binary_size;
///
/// assert_eq!(binary_size(0), 84);
/// assert_eq!(binary_size(1), 134);
/// ```
#[must_use]
pub fn binary_size(count: usize) -> u64 {
    HEADER_SIZE as u64 + 4 + FACET_SIZE as u64 * count as u64
}

/// Save a triangle list as a binary STL file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
///
/// # Example
///
/// ```no_run
/// use mesh_convert::{load_obj, save_stl, triangulate};
///
/// let mesh = load_obj("model.obj").unwrap();
/// let facets = triangulate(&mesh).unwrap();
/// save_stl(&facets, "model.stl").unwrap();
/// ```
pub fn save_stl<P: AsRef<Path>>(facets: &[Facet], path: P) -> ConvertResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_stl(facets, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Serialize a triangle list into a binary STL byte stream.
///
/// # Errors
///
/// Returns an error if the sink fails to accept a write.
///
/// # Example
///
/// ```
/// use mesh_convert::{binary_size, write_stl};
///
/// let mut bytes = Vec::new();
/// write_stl(&[], &mut bytes).unwrap();
/// assert_eq!(bytes.len() as u64, binary_size(0));
/// ```
pub fn write_stl<W: Write>(facets: &[Facet], writer: &mut W) -> ConvertResult<()> {
    writer.write_all(&[0u8; HEADER_SIZE])?;

    #[allow(clippy::cast_possible_truncation)]
    // Facet count: meshes beyond u32::MAX triangles are unsupported by the format
    let count = facets.len() as u32;
    writer.write_all(&count.to_le_bytes())?;

    for facet in facets {
        write_vector(writer, &facet.normal)?;
        for vertex in &facet.vertices {
            write_point(writer, vertex)?;
        }
        writer.write_all(&facet.attribute.to_le_bytes())?;
    }

    Ok(())
}

fn write_vector<W: Write>(writer: &mut W, v: &Vector3<f32>) -> ConvertResult<()> {
    writer.write_all(&v.x.to_le_bytes())?;
    writer.write_all(&v.y.to_le_bytes())?;
    writer.write_all(&v.z.to_le_bytes())?;
    Ok(())
}

fn write_point<W: Write>(writer: &mut W, p: &Point3<f32>) -> ConvertResult<()> {
    writer.write_all(&p.x.to_le_bytes())?;
    writer.write_all(&p.y.to_le_bytes())?;
    writer.write_all(&p.z.to_le_bytes())?;
    Ok(())
}
