// Copyright 2024 Irreducible Inc.

use std::ops::Index;

use reedmuller_utils::ensure;

use super::{error::Error, matrix::Matrix, vector::Vector};

/// A matrix over GF(2).
///
/// Wraps a [`Matrix`] whose entries are reduced modulo 2 whenever they are written, both on
/// construction and through [`MatrixMod2::set`], so every entry is always 0 or 1. Products are
/// reduced the same way. Only `Index` is implemented; writes go through [`MatrixMod2::set`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatrixMod2 {
	inner: Matrix,
}

impl MatrixMod2 {
	pub fn new(rows: usize, cols: usize, elements: &[i32]) -> Result<Self, Error> {
		Ok(Self::from(Matrix::new(rows, cols, elements)?))
	}

	pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, Error> {
		Ok(Self::from(Matrix::from_rows(rows)?))
	}

	pub fn zeros(rows: usize, cols: usize) -> Result<Self, Error> {
		Ok(Self {
			inner: Matrix::zeros(rows, cols)?,
		})
	}

	pub fn identity(n: usize) -> Result<Self, Error> {
		Ok(Self {
			inner: Matrix::identity(n)?,
		})
	}

	pub fn rows(&self) -> usize {
		self.inner.rows()
	}

	pub fn cols(&self) -> usize {
		self.inner.cols()
	}

	pub fn dim(&self) -> (usize, usize) {
		self.inner.dim()
	}

	pub fn elements(&self) -> &[i32] {
		self.inner.elements()
	}

	pub fn row(&self, i: usize) -> Result<Vector, Error> {
		self.inner.row(i)
	}

	pub fn column(&self, j: usize) -> Result<Vector, Error> {
		self.inner.column(j)
	}

	/// Writes `value mod 2` at `(i, j)`.
	pub fn set(&mut self, i: usize, j: usize, value: i32) {
		self.inner[(i, j)] = reduce(value);
	}

	pub fn as_matrix(&self) -> &Matrix {
		&self.inner
	}

	pub fn into_matrix(self) -> Matrix {
		self.inner
	}

	/// Computes the product `self × rhs` over GF(2).
	pub fn multiply(&self, rhs: &Self) -> Result<Self, Error> {
		let mut product = self.inner.multiply(&rhs.inner)?;
		reduce_all(product.elements_mut());
		Ok(Self { inner: product })
	}

	/// Computes the product `self × v` over GF(2), treating `v` as a column vector.
	pub fn multiply_vector(&self, v: &Vector) -> Result<Vector, Error> {
		ensure!(
			self.cols() == v.len(),
			Error::DimensionMismatch {
				op: "matrix-vector product",
				left: self.dim(),
				right: (v.len(), 1),
			}
		);
		let column = Self::from(v.to_column_matrix());
		self.multiply(&column)?.column(0)
	}
}

impl From<Matrix> for MatrixMod2 {
	fn from(mut inner: Matrix) -> Self {
		reduce_all(inner.elements_mut());
		Self { inner }
	}
}

impl From<MatrixMod2> for Matrix {
	fn from(value: MatrixMod2) -> Self {
		value.inner
	}
}

impl Index<(usize, usize)> for MatrixMod2 {
	type Output = i32;

	fn index(&self, index: (usize, usize)) -> &Self::Output {
		&self.inner[index]
	}
}

#[inline]
fn reduce(value: i32) -> i32 {
	value.rem_euclid(2)
}

fn reduce_all(elements: &mut [i32]) {
	for x in elements {
		*x = reduce(*x);
	}
}
