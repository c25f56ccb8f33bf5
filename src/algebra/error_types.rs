use crate::settings::SettingsError;
use thiserror::Error;

/// Error type returned by element access, arithmetic and factorization
/// operations on dense and sparse matrices.
///
/// All checks are made against the *logical* (transpose aware) shape of
/// the operands and are performed before any data is modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the requested operation
    #[error("dimension mismatch in {op}: {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        /// name of the failing operation
        op: &'static str,
        /// logical (rows, cols) of the left operand or target
        lhs: (usize, usize),
        /// logical (rows, cols) of the right operand or replacement
        rhs: (usize, usize),
    },
    /// An index or offset lies outside the logical bounds of the matrix
    #[error("index {index:?} out of range for matrix of size {bound:?}")]
    OutOfRange {
        /// offending (row, col) or (offset, 0) argument
        index: (isize, isize),
        /// logical (rows, cols) of the matrix
        bound: (usize, usize),
    },
    /// A square matrix was required (LU factorization, trace)
    #[error("square matrix required, found {rows} x {cols}")]
    SquareMatrixRequired {
        /// logical number of rows
        rows: usize,
        /// logical number of columns
        cols: usize,
    },
    /// A factorization was requested with no matrix attached
    #[error("no matrix attached to factorization")]
    UninitializedOperand,
    /// Settings passed to an operation failed validation
    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] SettingsError),
    /// The factorization backend did not produce a result
    #[error("factorization backend failed in {routine}")]
    BackendFailure {
        /// name of the failing factorization
        routine: &'static str,
    },
}

impl MatrixError {
    pub(crate) fn out_of_range(row: usize, col: usize, bound: (usize, usize)) -> Self {
        MatrixError::OutOfRange {
            index: (
                isize::try_from(row).unwrap_or(isize::MAX),
                isize::try_from(col).unwrap_or(isize::MAX),
            ),
            bound,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by sparse matrix assembly operations.
pub enum SparseFormatError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// Data is not sorted by row index within each column
    #[error("Data is not sorted by row index within each column")]
    BadRowOrdering,
    #[error("Row value exceeds the matrix row dimension")]
    /// Row value exceeds the matrix row dimension
    BadRowval,
    #[error("Bad column pointer values")]
    /// Matrix column pointer values are defective
    BadColptr,
}

/// Error type returned when reading or writing matrix archives.
#[cfg(feature = "serde")]
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Underlying file or stream failure
    #[error("archive i/o failed")]
    Io(#[from] std::io::Error),
    /// Archive could not be encoded or decoded
    #[error("archive encoding failed")]
    Json(#[from] serde_json::Error),
    /// Archive decoded, but the stored attributes do not describe a valid matrix
    #[error("archive does not describe a valid matrix: {0}")]
    Format(String),
}

#[cfg(feature = "serde")]
impl From<SparseFormatError> for PersistenceError {
    fn from(e: SparseFormatError) -> Self {
        PersistenceError::Format(e.to_string())
    }
}
