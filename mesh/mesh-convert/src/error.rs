//! Error types for the conversion pipeline.
//!
//! There is no silent recovery anywhere in the pipeline: every invariant
//! violation aborts the whole conversion. The only intentionally
//! non-fatal condition is an unrecognized record tag, which the parser
//! skips.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// A malformed source record.
///
/// Always fatal: a single bad record aborts the whole parse, there is no
/// partial-mesh recovery. Every variant carries the 1-based source line
/// number.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    /// Vertex record with the wrong number of fields.
    #[error("line {line}: vertex record has {count} fields, expected 3 or 4")]
    VertexFieldCount {
        /// Source line number.
        line: usize,
        /// Observed field count after the tag.
        count: usize,
    },

    /// Normal record with the wrong number of fields.
    #[error("line {line}: normal record has {count} fields, expected 3")]
    NormalFieldCount {
        /// Source line number.
        line: usize,
        /// Observed field count after the tag.
        count: usize,
    },

    /// Texture-coordinate record with the wrong number of fields.
    #[error("line {line}: texture record has {count} fields, expected 1 to 3")]
    TexCoordFieldCount {
        /// Source line number.
        line: usize,
        /// Observed field count after the tag.
        count: usize,
    },

    /// Face record with fewer than 3 vertex references.
    #[error("line {line}: face has {count} vertex references, need at least 3")]
    FaceTooFewVertices {
        /// Source line number.
        line: usize,
        /// Observed reference count.
        count: usize,
    },

    /// Face whose index lists have inconsistent lengths.
    #[error(
        "line {line}: inconsistent face: {vertices} vertex, {normals} normal, \
         {texcoords} texture indices"
    )]
    InconsistentFace {
        /// Source line number.
        line: usize,
        /// Vertex index count.
        vertices: usize,
        /// Normal index count.
        normals: usize,
        /// Texture index count.
        texcoords: usize,
    },

    /// Face reference token that does not match the `v`, `v/t`,
    /// `v/t/n`, or `v//n` grammar.
    #[error("line {line}: malformed face reference `{token}`")]
    BadFaceReference {
        /// Source line number.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// Token that failed numeric parsing where a number was expected.
    #[error("line {line}: invalid number `{token}`")]
    InvalidNumber {
        /// Source line number.
        line: usize,
        /// The offending token.
        token: String,
    },
}

/// A face index that does not resolve against its table.
///
/// Tables are append-only and indices are produced by the same parse
/// pass, so an unresolvable index means corrupt or adversarial input,
/// not a recoverable condition. Fatal.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ReferenceError {
    /// Vertex index outside the vertex table.
    #[error("face {face}: vertex index {index} out of range (table has {len} entries)")]
    VertexIndex {
        /// Zero-based face ordinal.
        face: usize,
        /// The 1-based index that failed to resolve.
        index: u32,
        /// Current vertex table length.
        len: usize,
    },

    /// Normal index outside the normal table.
    #[error("face {face}: normal index {index} out of range (table has {len} entries)")]
    NormalIndex {
        /// Zero-based face ordinal.
        face: usize,
        /// The 1-based index that failed to resolve.
        index: u32,
        /// Current normal table length.
        len: usize,
    },
}

/// A geometric failure during normal computation.
///
/// Fatal for the whole conversion; there is no skip-and-continue.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GeometryError {
    /// Three collinear or coincident vertices have no face normal.
    #[error("face {face}: degenerate triangle (collinear or coincident vertices)")]
    DegenerateTriangle {
        /// Zero-based face ordinal.
        face: usize,
    },
}

/// Any failure of the conversion pipeline.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Source file not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Unknown file format (unrecognized extension).
    #[error("unknown file format: .{extension}")]
    UnknownFormat {
        /// The unrecognized extension.
        extension: String,
    },

    /// Malformed source record.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Unresolvable face reference.
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    /// Degenerate geometry during normal computation.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// I/O error reading the source or writing the target.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
