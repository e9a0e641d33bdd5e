//! Wavefront OBJ parsing.
//!
//! Reads the line-oriented OBJ subset relevant to triangle-soup
//! conversion. One record per line, whitespace-separated tokens, with
//! the leading tag selecting the record kind:
//!
//! ```text
//! v  x y z [w]      – vertex, w defaults to 1.0
//! vn i j k          – vertex normal, stored as given
//! vt u [v [w]]      – texture coordinate, v and w default to 0.0
//! f  r r r [r ...]  – face, at least 3 references
//! ```
//!
//! A face reference `r` is `v`, `v/t`, `v/t/n`, or `v//n`, with all
//! indices 1-based into the tables accumulated so far. Any other leading
//! tag (comments, groups, materials, smoothing) is skipped silently.
//!
//! Parsing is a single forward pass: a face may only reference records
//! that appear earlier in the stream. All parse state is local to the
//! call; nothing is accumulated across invocations.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use mesh_model::{FaceIndices, PolygonMesh, TexCoord, Vector3, Vertex};
use tracing::debug;

use crate::error::{ConvertError, ConvertResult, FormatError};

/// Load a polygonal mesh from an OBJ file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or read
/// - Any record is malformed (see [`FormatError`])
///
/// # Example
///
/// ```no_run
/// use mesh_convert::load_obj;
///
/// let mesh = load_obj("model.obj").unwrap();
/// println!("Loaded {} faces", mesh.face_count());
/// ```
pub fn load_obj<P: AsRef<Path>>(path: P) -> ConvertResult<PolygonMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConvertError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConvertError::Io(e)
        }
    })?;
    parse_obj(BufReader::new(file))
}

/// Parse OBJ records from a line-oriented reader.
///
/// Each face is validated against the per-face consistency invariant as
/// soon as its record is seen; an inconsistent face aborts the parse.
///
/// # Errors
///
/// Returns [`FormatError`] (wrapped in [`ConvertError`]) for any
/// malformed record, or an I/O error from the underlying reader.
///
/// # Example
///
/// ```
/// use mesh_convert::parse_obj;
///
/// let source = b"v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
/// let mesh = parse_obj(&source[..]).unwrap();
/// assert_eq!(mesh.face_count(), 1);
/// ```
pub fn parse_obj<R: BufRead>(reader: R) -> ConvertResult<PolygonMesh> {
    let mut mesh = PolygonMesh::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&tag, fields)) = parts.split_first() else {
            continue;
        };
        let line_no = number + 1;

        match tag {
            "v" => mesh.vertices.push(parse_vertex(fields, line_no)?),
            "vn" => mesh.normals.push(parse_normal(fields, line_no)?),
            "vt" => mesh.texcoords.push(parse_texcoord(fields, line_no)?),
            "f" => mesh.faces.push(parse_face(fields, line_no)?),
            // Comments, groups, materials, smoothing: skipped
            _ => {}
        }
    }

    debug!(
        vertices = mesh.vertices.len(),
        normals = mesh.normals.len(),
        texcoords = mesh.texcoords.len(),
        faces = mesh.faces.len(),
        "Parsed OBJ source"
    );

    Ok(mesh)
}

fn parse_float(token: &str, line: usize) -> Result<f32, FormatError> {
    token.parse().map_err(|_| FormatError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

fn parse_index(token: &str, line: usize) -> Result<u32, FormatError> {
    token.parse().map_err(|_| FormatError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

fn parse_vertex(fields: &[&str], line: usize) -> Result<Vertex, FormatError> {
    match fields {
        [x, y, z] => Ok(Vertex::from_coords(
            parse_float(x, line)?,
            parse_float(y, line)?,
            parse_float(z, line)?,
        )),
        [x, y, z, w] => Ok(Vertex::new(
            parse_float(x, line)?,
            parse_float(y, line)?,
            parse_float(z, line)?,
            parse_float(w, line)?,
        )),
        _ => Err(FormatError::VertexFieldCount {
            line,
            count: fields.len(),
        }),
    }
}

fn parse_normal(fields: &[&str], line: usize) -> Result<Vector3<f32>, FormatError> {
    match fields {
        [i, j, k] => Ok(Vector3::new(
            parse_float(i, line)?,
            parse_float(j, line)?,
            parse_float(k, line)?,
        )),
        _ => Err(FormatError::NormalFieldCount {
            line,
            count: fields.len(),
        }),
    }
}

fn parse_texcoord(fields: &[&str], line: usize) -> Result<TexCoord, FormatError> {
    match fields {
        [u] => Ok(TexCoord::new(parse_float(u, line)?, 0.0, 0.0)),
        [u, v] => Ok(TexCoord::new(
            parse_float(u, line)?,
            parse_float(v, line)?,
            0.0,
        )),
        [u, v, w] => Ok(TexCoord::new(
            parse_float(u, line)?,
            parse_float(v, line)?,
            parse_float(w, line)?,
        )),
        _ => Err(FormatError::TexCoordFieldCount {
            line,
            count: fields.len(),
        }),
    }
}

fn parse_face(fields: &[&str], line: usize) -> Result<FaceIndices, FormatError> {
    if fields.len() < 3 {
        return Err(FormatError::FaceTooFewVertices {
            line,
            count: fields.len(),
        });
    }

    let mut vertices = Vec::with_capacity(fields.len());
    let mut normals = Vec::new();
    let mut texcoords = Vec::new();

    for token in fields {
        let slots: Vec<&str> = token.split('/').collect();
        match slots.as_slice() {
            [v] if !v.is_empty() => {
                vertices.push(parse_index(v, line)?);
            }
            [v, t] if !v.is_empty() && !t.is_empty() => {
                vertices.push(parse_index(v, line)?);
                texcoords.push(parse_index(t, line)?);
            }
            [v, t, n] if !v.is_empty() && !n.is_empty() => {
                vertices.push(parse_index(v, line)?);
                // The texture slot may be empty: `v//n`
                if !t.is_empty() {
                    texcoords.push(parse_index(t, line)?);
                }
                normals.push(parse_index(n, line)?);
            }
            _ => {
                return Err(FormatError::BadFaceReference {
                    line,
                    token: (*token).to_string(),
                })
            }
        }
    }

    let face = FaceIndices::new(vertices, normals, texcoords);
    if !face.is_consistent() {
        return Err(FormatError::InconsistentFace {
            line,
            vertices: face.vertices.len(),
            normals: face.normals.len(),
            texcoords: face.texcoords.len(),
        });
    }

    Ok(face)
}
