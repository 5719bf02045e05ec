//! All kinds of errors in this crate.

use crate::cells::Coord;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// An `#S` parameter line named a parameter this tool doesn't know.
    #[error("unknown parameter {0:?}")]
    UnknownParameter(String),
    /// A parameter line's value could not be parsed as an integer.
    #[error("invalid value {1:?} for parameter {0:?}")]
    InvalidParameterValue(String, String),
    /// A parameter line's value parsed fine but fell outside its allowed range.
    #[error("parameter {name:?} must be between {min} and {max}")]
    ParameterOutOfRange { name: String, min: u32, max: u32 },
    /// `symmetry-diag` / `symmetry-diag-inverse` were requested; reserved,
    /// never implemented.
    #[error("symmetry {0:?} is not implemented")]
    UnimplementedSymmetry(String),
    /// A chosen cell's mirror image under the configured symmetry is not
    /// itself free to choose.
    #[error("input region is asymmetric at {0:?}")]
    AsymmetricInput(Coord),
    /// A cell eligible to be chosen lies on the outer edge of its tile.
    ///
    /// Tile wraparound for cells this close to a tile boundary is not
    /// implemented; enlarge the input pattern so candidates stay clear of
    /// the boundary.
    #[error("cell {0:?} lies on a tile boundary, wraparound is not supported")]
    CellOnTileBoundary(Coord),
    /// The static (still-life) background is not internally stable: some
    /// cell's neighbourhood forces it to a value other than what was given.
    #[error("static background is not stable")]
    UnstableBackground,
    /// The input file could not be parsed as Life 1.05 (with extensions).
    #[error("malformed pattern file: {0}")]
    MalformedPattern(String),
    /// An I/O error while reading the input file or writing a result.
    #[error("I/O error: {0}")]
    Io(String),
}
