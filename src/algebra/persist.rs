#![allow(non_snake_case)]

//! JSON archives of dense and sparse matrices.
//!
//! An archive stores every attribute of a matrix, including its
//! orientation, and loading an archive checks that the attributes
//! describe a valid matrix before one is constructed.  Values must be
//! finite, since JSON has no representation for NaN or infinities.

use crate::algebra::*;
use crate::settings::Settings;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

// The archived attribute sets.  These mirror the matrix types field
// for field, plus the redundant nnz count for sparse matrices.

#[derive(Serialize, Deserialize)]
#[serde(bound = "T: Serialize + DeserializeOwned")]
pub(crate) struct DenseArchive<T> {
    m: usize,
    n: usize,
    data: Vec<T>,
    transposed: bool,
}

#[derive(Serialize, Deserialize)]
#[serde(bound = "T: Serialize + DeserializeOwned")]
pub(crate) struct SparseArchive<T> {
    m: usize,
    n: usize,
    nnz: usize,
    colptr: Vec<usize>,
    rowval: Vec<usize>,
    nzval: Vec<T>,
    transposed: bool,
}

impl<T> From<DenseMatrix<T>> for DenseArchive<T> {
    fn from(A: DenseMatrix<T>) -> Self {
        Self {
            m: A.m,
            n: A.n,
            data: A.data,
            transposed: A.transposed,
        }
    }
}

impl<T: FloatT> TryFrom<DenseArchive<T>> for DenseMatrix<T> {
    type Error = PersistenceError;
    fn try_from(ar: DenseArchive<T>) -> Result<Self, Self::Error> {
        let (m, n) = (ar.m, ar.n);
        DenseMatrix::from_vec(ar.data, (m, n), ar.transposed)
            .map_err(|e| PersistenceError::Format(e.to_string()))
    }
}

impl<T: FloatT> From<SparseMatrix<T>> for SparseArchive<T> {
    fn from(A: SparseMatrix<T>) -> Self {
        Self {
            m: A.m,
            n: A.n,
            nnz: A.nnz(),
            colptr: A.colptr,
            rowval: A.rowval,
            nzval: A.nzval,
            transposed: A.transposed,
        }
    }
}

impl<T: FloatT> TryFrom<SparseArchive<T>> for SparseMatrix<T> {
    type Error = PersistenceError;
    fn try_from(ar: SparseArchive<T>) -> Result<Self, Self::Error> {
        if ar.nnz != ar.rowval.len() {
            return Err(SparseFormatError::IncompatibleDimension.into());
        }
        let mut A = SparseMatrix::from_parts(ar.m, ar.n, ar.colptr, ar.rowval, ar.nzval)?;
        A.transposed = ar.transposed;
        Ok(A)
    }
}

/// Reading and writing of matrix archives
pub trait MatrixReadWrite<T: FloatT>: Sized {
    /// Writes an archive of `self` to `writer`
    fn write_to<W: Write>(&self, writer: W, settings: &Settings<T>) -> Result<(), PersistenceError>;

    /// Reads and validates an archive from `reader`
    fn read_from<R: Read>(reader: R) -> Result<Self, PersistenceError>;

    /// Writes a compact archive to the file at `path`
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistenceError> {
        self.save_with(path, &Settings::default())
    }

    /// Writes an archive to the file at `path`, replacing any existing file.
    /// The file is not touched if the archive cannot be encoded.
    fn save_with<P: AsRef<Path>>(&self, path: P, settings: &Settings<T>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        log::debug!("writing matrix archive to {}", path.display());
        let mut buf = Vec::new();
        self.write_to(&mut buf, settings)?;
        std::fs::write(path, buf)?;
        Ok(())
    }

    /// Reads an archive from the file at `path`
    fn load<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path = path.as_ref();
        log::debug!("reading matrix archive from {}", path.display());
        Self::read_from(BufReader::new(File::open(path)?))
    }
}

// JSON writes NaN and infinities as null, which would produce an
// archive that cannot be read back
fn check_finite<T: FloatT>(values: &[T]) -> Result<(), PersistenceError> {
    match values.iter().position(|v| !v.is_finite()) {
        None => Ok(()),
        Some(i) => Err(PersistenceError::Format(format!(
            "non-finite value {} at storage position {i}",
            values[i]
        ))),
    }
}

fn write_archive<W, A>(writer: W, archive: &A, pretty: bool) -> Result<(), PersistenceError>
where
    W: Write,
    A: Serialize,
{
    if pretty {
        serde_json::to_writer_pretty(writer, archive)?;
    } else {
        serde_json::to_writer(writer, archive)?;
    }
    Ok(())
}

// Reading goes through the archive types rather than the matrix
// Deserialize impls, so that invalid attributes are reported as
// format errors instead of JSON errors.

impl<T> MatrixReadWrite<T> for DenseMatrix<T>
where
    T: FloatT + Serialize + DeserializeOwned,
{
    fn write_to<W: Write>(&self, writer: W, settings: &Settings<T>) -> Result<(), PersistenceError> {
        check_finite(self.data())?;
        write_archive(writer, self, settings.pretty_archive)
    }

    fn read_from<R: Read>(reader: R) -> Result<Self, PersistenceError> {
        let archive: DenseArchive<T> = serde_json::from_reader(reader)?;
        archive.try_into()
    }
}

impl<T> MatrixReadWrite<T> for SparseMatrix<T>
where
    T: FloatT + Serialize + DeserializeOwned,
{
    fn write_to<W: Write>(&self, writer: W, settings: &Settings<T>) -> Result<(), PersistenceError> {
        check_finite(self.nzval())?;
        write_archive(writer, self, settings.pretty_archive)
    }

    fn read_from<R: Read>(reader: R) -> Result<Self, PersistenceError> {
        let archive: SparseArchive<T> = serde_json::from_reader(reader)?;
        archive.try_into()
    }
}
