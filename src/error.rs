use thiserror::Error;

/// Errors returned by index construction, clustering, and point I/O.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// A point id outside the range known to the neighbor index.
    #[error("invalid point id {id}: index holds {len} points")]
    InvalidPointId {
        /// Requested point id.
        id: usize,
        /// Number of points in the index.
        len: usize,
    },

    /// Points in a dataset have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("non-finite coordinate at point {point}, axis {axis}")]
    NonFiniteCoordinate {
        /// Point id.
        point: usize,
        /// Coordinate position within the point.
        axis: usize,
    },

    /// The neighbor index was built over a different point set.
    #[error("index size mismatch: point set has {points} points, index has {index}")]
    IndexSizeMismatch {
        /// Number of points in the point set.
        points: usize,
        /// Number of points in the index.
        index: usize,
    },

    /// A line of point input could not be parsed.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Human-readable explanation.
        message: String,
    },

    /// Underlying reader or writer failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
