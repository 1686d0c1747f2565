// Copyright 2024 Irreducible Inc.

use std::ops::{Index, IndexMut};

use getset::CopyGetters;
use reedmuller_utils::{bail, ensure};

use super::{error::Error, matrix_mod2::MatrixMod2, vector::Vector};

/// A dense row-major integer matrix.
///
/// Both dimensions are at least one and never change after construction. Equality compares the
/// dimensions and every entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, CopyGetters)]
pub struct Matrix {
	#[getset(get_copy = "pub")]
	rows: usize,
	#[getset(get_copy = "pub")]
	cols: usize,
	elements: Box<[i32]>,
}

impl Matrix {
	/// Builds a `rows × cols` matrix from its entries in row-major order.
	pub fn new(rows: usize, cols: usize, elements: &[i32]) -> Result<Self, Error> {
		ensure!(rows != 0 && cols != 0, Error::EmptyMatrix { rows, cols });
		if elements.len() != rows * cols {
			bail!(Error::IncorrectArgumentLength {
				arg: "elements".into(),
				expected: rows * cols,
			});
		}
		Ok(Self::from_parts(rows, cols, elements.into()))
	}

	/// Builds a matrix from a slice of equally long rows.
	pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, Error> {
		let cols = rows.first().map_or(0, |row| row.as_ref().len());
		ensure!(
			!rows.is_empty() && cols != 0,
			Error::EmptyMatrix {
				rows: rows.len(),
				cols
			}
		);

		let mut elements = Vec::with_capacity(rows.len() * cols);
		for row in rows {
			let row = row.as_ref();
			if row.len() != cols {
				bail!(Error::IncorrectArgumentLength {
					arg: "row".into(),
					expected: cols,
				});
			}
			elements.extend_from_slice(row);
		}
		Ok(Self::from_parts(rows.len(), cols, elements.into()))
	}

	pub fn zeros(rows: usize, cols: usize) -> Result<Self, Error> {
		ensure!(rows != 0 && cols != 0, Error::EmptyMatrix { rows, cols });
		Ok(Self::from_parts(rows, cols, vec![0; rows * cols].into()))
	}

	pub fn identity(n: usize) -> Result<Self, Error> {
		let mut out = Self::zeros(n, n)?;
		for i in 0..n {
			out[(i, i)] = 1;
		}
		Ok(out)
	}

	pub(crate) fn from_parts(rows: usize, cols: usize, elements: Box<[i32]>) -> Self {
		debug_assert!(rows != 0 && cols != 0);
		debug_assert_eq!(elements.len(), rows * cols);
		Self {
			rows,
			cols,
			elements,
		}
	}

	pub fn dim(&self) -> (usize, usize) {
		(self.rows, self.cols)
	}

	/// All entries in row-major order.
	pub fn elements(&self) -> &[i32] {
		&self.elements
	}

	pub fn into_elements(self) -> Box<[i32]> {
		self.elements
	}

	/// Iterates over all entries in row-major order.
	pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
		self.elements.iter().copied()
	}

	pub fn row(&self, i: usize) -> Result<Vector, Error> {
		ensure!(
			i < self.rows,
			Error::IndexOutOfRange {
				index: i,
				len: self.rows
			}
		);
		Ok(Vector::from_elements(self.row_ref(i).into()))
	}

	pub fn column(&self, j: usize) -> Result<Vector, Error> {
		ensure!(
			j < self.cols,
			Error::IndexOutOfRange {
				index: j,
				len: self.cols
			}
		);
		let elements = (0..self.rows).map(|i| self[(i, j)]).collect();
		Ok(Vector::from_elements(elements))
	}

	/// Computes the product `self × rhs`.
	///
	/// ## Throws
	///
	/// * [`Error::DimensionMismatch`] if `self.cols() != rhs.rows()`
	pub fn multiply(&self, rhs: &Self) -> Result<Self, Error> {
		ensure!(
			self.cols == rhs.rows,
			Error::DimensionMismatch {
				op: "matrix product",
				left: self.dim(),
				right: rhs.dim(),
			}
		);

		let mut out = Self::from_parts(
			self.rows,
			rhs.cols,
			vec![0; self.rows * rhs.cols].into(),
		);
		Self::mul_into(self, rhs, &mut out);
		Ok(out)
	}

	/// Computes the product `self × v`, treating `v` as a column vector.
	pub fn multiply_vector(&self, v: &Vector) -> Result<Vector, Error> {
		let column = self.multiply(&v.to_column_matrix())?;
		Ok(Vector::from_elements(column.into_elements()))
	}

	/// The Kronecker product `self ⊗ rhs`.
	///
	/// The result has shape `(self.rows() * rhs.rows()) × (self.cols() * rhs.cols())` and its
	/// block `(i, j)` equals `self[(i, j)] * rhs`.
	pub fn kronecker_product(&self, rhs: &Self) -> Self {
		let rows = self.rows * rhs.rows;
		let cols = self.cols * rhs.cols;
		let mut out = Self::from_parts(rows, cols, vec![0; rows * cols].into());

		for i0 in 0..self.rows {
			for j0 in 0..self.cols {
				let scalar = self[(i0, j0)];
				if scalar == 0 {
					continue;
				}
				for i1 in 0..rhs.rows {
					for j1 in 0..rhs.cols {
						out[(i0 * rhs.rows + i1, j0 * rhs.cols + j1)] = scalar * rhs[(i1, j1)];
					}
				}
			}
		}
		out
	}

	/// Reduces every entry modulo 2.
	pub fn to_mod2(&self) -> MatrixMod2 {
		MatrixMod2::from(self.clone())
	}

	pub(crate) fn mul_into(a: &Self, b: &Self, c: &mut Self) {
		assert_eq!(a.cols, b.rows);
		assert_eq!(a.rows, c.rows);
		assert_eq!(b.cols, c.cols);

		for i in 0..c.rows {
			for j in 0..c.cols {
				c[(i, j)] = (0..a.cols).map(|k| a[(i, k)] * b[(k, j)]).sum();
			}
		}
	}

	pub(crate) fn elements_mut(&mut self) -> &mut [i32] {
		&mut self.elements
	}

	fn row_ref(&self, i: usize) -> &[i32] {
		assert!(i < self.rows);
		&self.elements[i * self.cols..(i + 1) * self.cols]
	}
}

impl Index<(usize, usize)> for Matrix {
	type Output = i32;

	fn index(&self, index: (usize, usize)) -> &Self::Output {
		let (i, j) = index;
		assert!(i < self.rows);
		assert!(j < self.cols);
		&self.elements[i * self.cols + j]
	}
}

impl IndexMut<(usize, usize)> for Matrix {
	fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
		let (i, j) = index;
		assert!(i < self.rows);
		assert!(j < self.cols);
		&mut self.elements[i * self.cols + j]
	}
}
