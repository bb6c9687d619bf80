use crate::{AlgebraError, Transpose};
use alloc::sync::Arc;
use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, SerializationError, Valid, Validate,
};
use ark_std::{
    io::{Read, Write},
    ops::{Index, Mul},
    rand::Rng,
    vec::*,
};
use exact_fractions::Fraction;
use num_traits::{One, Zero};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// An immutable `nrows x ncols` grid of [`Fraction`]s.
///
/// Rows are shared between matrices derived from one another and are never
/// written after construction. Every operation returns a new `Matrix`, so a
/// result can never alias storage that is still visible through its source.
#[derive(Clone, Debug)]
pub struct Matrix {
    nrows: usize,
    ncols: usize,
    rows: Vec<Arc<[Fraction]>>,
}

impl Matrix {
    pub(crate) fn from_rows_unchecked(nrows: usize, ncols: usize, rows: Vec<Vec<Fraction>>) -> Self {
        debug_assert_eq!(rows.len(), nrows);
        debug_assert!(rows.iter().all(|row| row.len() == ncols));
        Self {
            nrows,
            ncols,
            rows: rows.into_iter().map(Arc::from).collect(),
        }
    }

    pub fn zero(nrows: usize, ncols: usize) -> Self {
        Self::from_rows_unchecked(nrows, ncols, vec![vec![Fraction::zero(); ncols]; nrows])
    }

    pub fn identity(n: usize) -> Self {
        let rows = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| if i == j { Fraction::one() } else { Fraction::zero() })
                    .collect()
            })
            .collect();
        Self::from_rows_unchecked(n, n, rows)
    }

    /// Builds a matrix from `nrows * ncols` entries in row-major order.
    pub fn from_entries(
        nrows: usize,
        ncols: usize,
        entries: Vec<Fraction>,
    ) -> Result<Self, AlgebraError> {
        match nrows.checked_mul(ncols) {
            Some(expected) if expected == entries.len() => {}
            expected => {
                return Err(AlgebraError::EntryCount(
                    expected.unwrap_or(usize::MAX),
                    entries.len(),
                ))
            }
        }
        let mut entries = entries.into_iter();
        let rows = (0..nrows)
            .map(|_| entries.by_ref().take(ncols).collect())
            .collect();
        Ok(Self::from_rows_unchecked(nrows, ncols, rows))
    }

    /// Random matrix whose entries are integers drawn uniformly from `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn rand<RND: Rng>(rng: &mut RND, nrows: usize, ncols: usize, bound: u32) -> Self {
        let rows = (0..nrows)
            .map(|_| {
                (0..ncols)
                    .map(|_| Fraction::from(i64::from(rng.gen_range(0..bound))))
                    .collect()
            })
            .collect();
        Self::from_rows_unchecked(nrows, ncols, rows)
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    pub(crate) fn ensure_square(&self) -> Result<(), AlgebraError> {
        if self.is_square() {
            Ok(())
        } else {
            Err(AlgebraError::NotSquare(self.nrows, self.ncols))
        }
    }

    /// Entry at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Indices are not checked beyond slice indexing: an out-of-range `row`
    /// or `col` panics. Callers must keep them below `nrows()`/`ncols()`.
    pub fn get(&self, row: usize, col: usize) -> &Fraction {
        &self.rows[row][col]
    }

    /// # Panics
    ///
    /// Panics if `row >= nrows()`.
    pub fn row(&self, row: usize) -> &[Fraction] {
        &self.rows[row]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Fraction]> {
        self.rows.iter().map(|row| &row[..])
    }

    /// The entries of column `col`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `col >= ncols()` and the matrix has at least one row.
    pub fn column(&self, col: usize) -> Vec<Fraction> {
        self.rows.iter().map(|row| row[col].clone()).collect()
    }

    /// The identity matrix with the same size as `self`.
    ///
    /// Only square matrices have one; other shapes fail with
    /// [`AlgebraError::NotSquare`].
    pub fn identity_like(&self) -> Result<Self, AlgebraError> {
        self.ensure_square()?;
        Ok(Self::identity(self.nrows))
    }

    /// The matrix obtained by deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self, AlgebraError> {
        if row >= self.nrows {
            return Err(AlgebraError::IndexOutOfRange(row, self.nrows));
        }
        if col >= self.ncols {
            return Err(AlgebraError::IndexOutOfRange(col, self.ncols));
        }
        Ok(self.minor_unchecked(row, col))
    }

    pub(crate) fn minor_unchecked(&self, row: usize, col: usize) -> Self {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .filter(|(r, _)| *r != row)
            .map(|(_, values)| {
                values
                    .iter()
                    .enumerate()
                    .filter(|(c, _)| *c != col)
                    .map(|(_, v)| v.clone())
                    .collect()
            })
            .collect();
        Self::from_rows_unchecked(self.nrows - 1, self.ncols - 1, rows)
    }

    // Shares every row with `self` except the replaced one.
    pub(crate) fn with_row(&self, index: usize, row: Arc<[Fraction]>) -> Self {
        debug_assert_eq!(row.len(), self.ncols);
        let mut rows = self.rows.clone();
        rows[index] = row;
        Self {
            nrows: self.nrows,
            ncols: self.ncols,
            rows,
        }
    }

    fn zip_with(
        &self,
        other: &Matrix,
        op: &'static str,
        f: impl Fn(&Fraction, &Fraction) -> Fraction,
    ) -> Result<Self, AlgebraError> {
        if self.shape() != other.shape() {
            return Err(AlgebraError::ShapeMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        let rows = self
            .rows
            .iter()
            .zip(&other.rows)
            .map(|(a, b)| a.iter().zip(b.iter()).map(|(x, y)| f(x, y)).collect())
            .collect();
        Ok(Self::from_rows_unchecked(self.nrows, self.ncols, rows))
    }

    pub fn try_add(&self, other: &Matrix) -> Result<Self, AlgebraError> {
        self.zip_with(other, "add", |x, y| x + y)
    }

    pub fn try_sub(&self, other: &Matrix) -> Result<Self, AlgebraError> {
        self.zip_with(other, "subtract", |x, y| x - y)
    }

    /// Matrix product `self * other`; requires `self.ncols() == other.nrows()`.
    pub fn try_mul(&self, other: &Matrix) -> Result<Self, AlgebraError> {
        if self.ncols != other.nrows {
            return Err(AlgebraError::ShapeMismatch {
                op: "multiply",
                left: self.shape(),
                right: other.shape(),
            });
        }
        let columns: Vec<Vec<Fraction>> = (0..other.ncols).map(|c| other.column(c)).collect();
        let rows: Vec<Vec<Fraction>> = cfg_iter!(self.rows)
            .map(|row| {
                columns
                    .iter()
                    .map(|col| row.iter().zip(col).map(|(a, b)| a * b).sum::<Fraction>())
                    .collect::<Vec<Fraction>>()
            })
            .collect();
        Ok(Self::from_rows_unchecked(self.nrows, other.ncols, rows))
    }

    pub fn scale(&self, k: &Fraction) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().map(|v| v * k).collect())
            .collect();
        Self::from_rows_unchecked(self.nrows, self.ncols, rows)
    }

    pub fn checked_mul_vec(&self, v: &[Fraction]) -> Option<Vec<Fraction>> {
        if self.ncols != v.len() {
            return None;
        }

        Some(
            cfg_iter!(self.rows)
                .map(|row| row.iter().zip(v).map(|(r_m, r_v)| r_m * r_v).sum::<Fraction>())
                .collect(),
        )
    }

    pub fn try_mul_vec(&self, v: &[Fraction]) -> Result<Vec<Fraction>, AlgebraError> {
        self.checked_mul_vec(v)
            .ok_or(AlgebraError::DifferentLengths(self.ncols, v.len()))
    }

    /// Whether `self * self^T` is the identity.
    ///
    /// Non-square matrices are never orthogonal.
    pub fn is_orthogonal(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        match self.try_mul(&self.transpose()) {
            Ok(product) => product == Self::identity(self.nrows),
            Err(_) => false,
        }
    }
}

/// Matrices are equal when their shapes match and every entry is equal.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.rows.iter().zip(&other.rows).all(|(a, b)| a == b)
    }
}

impl Eq for Matrix {}

impl Index<(usize, usize)> for Matrix {
    type Output = Fraction;

    fn index(&self, (row, col): (usize, usize)) -> &Fraction {
        self.get(row, col)
    }
}

impl Mul<&Fraction> for &Matrix {
    type Output = Matrix;

    fn mul(self, k: &Fraction) -> Matrix {
        self.scale(k)
    }
}

impl TryFrom<Vec<Vec<Fraction>>> for Matrix {
    type Error = AlgebraError;

    /// Every row must have the length of the first one.
    fn try_from(vecs: Vec<Vec<Fraction>>) -> Result<Self, Self::Error> {
        let nrows = vecs.len();
        let ncols = vecs.first().map_or(0, |row| row.len());
        let found = vecs.iter().map(|row| row.len()).sum();
        if vecs.iter().any(|row| row.len() != ncols) {
            return Err(AlgebraError::EntryCount(nrows.saturating_mul(ncols), found));
        }
        Ok(Self::from_rows_unchecked(nrows, ncols, vecs))
    }
}

impl CanonicalSerialize for Matrix {
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        compress: Compress,
    ) -> Result<(), SerializationError> {
        (self.nrows as u64).serialize_with_mode(&mut writer, compress)?;
        (self.ncols as u64).serialize_with_mode(&mut writer, compress)?;
        for value in self.rows.iter().flat_map(|row| row.iter()) {
            value.serialize_with_mode(&mut writer, compress)?;
        }
        Ok(())
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        8 + 8
            + self
                .rows
                .iter()
                .flat_map(|row| row.iter())
                .map(|value| value.serialized_size(compress))
                .sum::<usize>()
    }
}

impl Valid for Matrix {
    fn check(&self) -> Result<(), SerializationError> {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .try_for_each(|value| value.check())
    }
}

impl CanonicalDeserialize for Matrix {
    fn deserialize_with_mode<Re: Read>(
        mut reader: Re,
        compress: Compress,
        validate: Validate,
    ) -> Result<Self, SerializationError> {
        let nrows = u64::deserialize_with_mode(&mut reader, compress, validate)? as usize;
        let ncols = u64::deserialize_with_mode(&mut reader, compress, validate)? as usize;
        // An empty dimension only pairs with another empty one.
        if (nrows == 0) != (ncols == 0) {
            return Err(SerializationError::InvalidData);
        }
        let count = nrows
            .checked_mul(ncols)
            .ok_or(SerializationError::InvalidData)?;
        let entries = (0..count)
            .map(|_| Fraction::deserialize_with_mode(&mut reader, compress, validate))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_entries(nrows, ncols, entries).map_err(|_| SerializationError::InvalidData)
    }
}
