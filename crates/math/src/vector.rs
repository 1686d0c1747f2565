// Copyright 2024-2025 Irreducible Inc.

use std::{
	fmt,
	ops::{Index, IndexMut},
	str::FromStr,
};

use reedmuller_utils::{bail, ensure};

use super::{error::Error, matrix::Matrix, matrix_mod2::MatrixMod2};

/// A fixed-length vector of integers.
///
/// In the codec the entries are bits, except during decoding where they hold signed correlation
/// values. The length is fixed at construction and is never zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vector {
	elements: Box<[i32]>,
}

impl Vector {
	pub fn new(elements: impl Into<Box<[i32]>>) -> Result<Self, Error> {
		let elements = elements.into();
		ensure!(!elements.is_empty(), Error::EmptyVector);
		Ok(Self { elements })
	}

	pub fn zeros(len: usize) -> Result<Self, Error> {
		Self::new(vec![0; len])
	}

	/// Bits of `value`, most significant bit first, as a vector of length 8.
	pub fn from_byte(value: u8) -> Self {
		let elements = (0..8).map(|i| ((value >> (7 - i)) & 1) as i32).collect();
		Self { elements }
	}

	/// Packs the vector into a byte, reading element 0 as the most significant bit.
	///
	/// ## Throws
	///
	/// * [`Error::VectorTooWide`] if the vector is longer than 8 elements
	/// * [`Error::NonBinaryEntry`] if an element is not 0 or 1
	pub fn to_byte(&self) -> Result<u8, Error> {
		ensure!(self.len() <= 8, Error::VectorTooWide { len: self.len() });

		let mut value = 0u8;
		for (index, &bit) in self.elements.iter().enumerate() {
			if bit != 0 && bit != 1 {
				bail!(Error::NonBinaryEntry { index, value: bit });
			}
			value = (value << 1) | bit as u8;
		}
		Ok(value)
	}

	#[allow(clippy::len_without_is_empty)]
	pub fn len(&self) -> usize {
		self.elements.len()
	}

	pub fn elements(&self) -> &[i32] {
		&self.elements
	}

	pub fn elements_mut(&mut self) -> &mut [i32] {
		&mut self.elements
	}

	pub fn into_elements(self) -> Box<[i32]> {
		self.elements
	}

	pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
		self.elements.iter().copied()
	}

	/// Element-wise sum of two vectors of the same length.
	pub fn checked_add(&self, rhs: &Self) -> Result<Self, Error> {
		ensure!(
			self.len() == rhs.len(),
			Error::LengthMismatch {
				expected: self.len(),
				actual: rhs.len(),
			}
		);
		let elements = self
			.elements
			.iter()
			.zip(rhs.elements.iter())
			.map(|(a, b)| a + b)
			.collect();
		Ok(Self { elements })
	}

	pub fn scale(&self, scalar: i32) -> Self {
		let elements = self.elements.iter().map(|x| x * scalar).collect();
		Self { elements }
	}

	/// The number of positions at which two vectors of the same length differ.
	pub fn hamming_distance(&self, other: &Self) -> Result<usize, Error> {
		ensure!(
			self.len() == other.len(),
			Error::LengthMismatch {
				expected: self.len(),
				actual: other.len(),
			}
		);
		Ok(self
			.elements
			.iter()
			.zip(other.elements.iter())
			.filter(|(a, b)| a != b)
			.count())
	}

	/// Computes the product `self × m`, treating `self` as a row vector.
	pub fn multiply(&self, m: &Matrix) -> Result<Self, Error> {
		let row = self.to_row_matrix().multiply(m)?;
		Ok(Self {
			elements: row.into_elements(),
		})
	}

	/// Computes the product `self × m` over GF(2).
	pub fn multiply_mod2(&self, m: &MatrixMod2) -> Result<Self, Error> {
		let row = self.to_row_matrix().to_mod2().multiply(m)?;
		Ok(Self {
			elements: row.into_matrix().into_elements(),
		})
	}

	/// Lifts the vector to a `1 × len` matrix.
	pub fn to_row_matrix(&self) -> Matrix {
		Matrix::from_parts(1, self.len(), self.elements.clone())
	}

	/// Lifts the vector to a `len × 1` matrix.
	pub fn to_column_matrix(&self) -> Matrix {
		Matrix::from_parts(self.len(), 1, self.elements.clone())
	}

	pub(crate) fn from_elements(elements: Box<[i32]>) -> Self {
		debug_assert!(!elements.is_empty());
		Self { elements }
	}
}

impl Index<usize> for Vector {
	type Output = i32;

	fn index(&self, index: usize) -> &Self::Output {
		&self.elements[index]
	}
}

impl IndexMut<usize> for Vector {
	fn index_mut(&mut self, index: usize) -> &mut Self::Output {
		&mut self.elements[index]
	}
}

impl TryFrom<&Vector> for u8 {
	type Error = Error;

	fn try_from(value: &Vector) -> Result<Self, Self::Error> {
		value.to_byte()
	}
}

impl From<u8> for Vector {
	fn from(value: u8) -> Self {
		Self::from_byte(value)
	}
}

/// Concatenates the elements without separators, so `[1, 0, 1]` prints as `101`.
impl fmt::Display for Vector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for x in self.elements.iter() {
			write!(f, "{x}")?;
		}
		Ok(())
	}
}

/// Parses one element per decimal digit, so `"1011"` becomes `[1, 0, 1, 1]`.
impl FromStr for Vector {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let elements = s
			.chars()
			.enumerate()
			.map(|(position, c)| {
				c.to_digit(10)
					.map(|d| d as i32)
					.ok_or(Error::InvalidDigit { position, found: c })
			})
			.collect::<Result<Vec<_>, _>>()?;
		Self::new(elements)
	}
}
