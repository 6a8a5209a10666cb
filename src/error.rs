//! Defines [`WKBError`], representing all errors returned by this crate.

use arrow_schema::ArrowError;
use std::borrow::Cow;
use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WKBError {
    /// A read, or a declared element count, ran past the end of the WKB buffer.
    #[error(
        "Malformed geometry: need {needed} bytes at offset {offset}, but only {available} remain"
    )]
    MalformedGeometry {
        /// Byte offset at which the failing read started
        offset: u64,
        /// Number of bytes the read required
        needed: u64,
        /// Number of bytes left in the buffer from `offset`
        available: u64,
    },

    /// Top-level geometry type other than Polygon or MultiPolygon, when configured to reject.
    #[error("Unsupported WKB geometry type: {0}")]
    UnsupportedGeometryType(u32),

    /// A MultiPolygon member that is not a Polygon, when configured to reject.
    #[error("Unexpected geometry type {type_code} for MultiPolygon member {index}")]
    UnexpectedMemberType {
        /// Position of the member within the MultiPolygon
        index: usize,
        /// Masked type code of the member
        type_code: u32,
    },

    /// Incorrect type was passed to an operation.
    #[error("Incorrect type passed to operation: {0}")]
    IncorrectType(Cow<'static, str>),

    /// A count does not fit in the 32-bit field WKB stores it in.
    #[error("Overflow")]
    Overflow,

    /// A required column was not found in a record batch.
    #[error("Column not found: {0}")]
    MissingColumn(String),

    /// [ArrowError]
    #[error(transparent)]
    Arrow(#[from] ArrowError),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// [serde_json::Error]
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

/// Crate-specific result type.
pub type WKBResult<T> = std::result::Result<T, WKBError>;
