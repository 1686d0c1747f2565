// Copyright 2024-2025 Irreducible Inc.

use reedmuller_math::Matrix;
use reedmuller_utils::ensure;

use super::{error::Error, transform::MAX_ORDER};

/// One Kronecker factor `K_i = I(2^(m-i)) ⊗ H ⊗ I(2^(i-1))` of the order-`m` Hadamard matrix.
///
/// The factor is kept implicit. [`HadamardFactor::apply`] performs the equivalent butterfly
/// pass in place and [`HadamardFactor::to_matrix`] materializes the dense matrix when it is
/// needed for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HadamardFactor {
	order: usize,
	index: usize,
}

impl HadamardFactor {
	/// The factor `K_index` for transforms of length `2^order`, with `index` in `1..=order`.
	pub fn new(order: usize, index: usize) -> Result<Self, Error> {
		ensure!(
			(1..=MAX_ORDER).contains(&order),
			Error::InvalidOrder {
				order,
				max: MAX_ORDER
			}
		);
		ensure!(
			(1..=order).contains(&index),
			Error::InvalidFactorIndex { index, order }
		);
		Ok(Self { order, index })
	}

	pub const fn order(&self) -> usize {
		self.order
	}

	pub const fn index(&self) -> usize {
		self.index
	}

	/// The side length `2^order` of the square factor.
	#[allow(clippy::len_without_is_empty)]
	pub const fn len(&self) -> usize {
		1 << self.order
	}

	/// Distance between the two entries combined by each butterfly, `2^(index - 1)`.
	pub const fn stride(&self) -> usize {
		1 << (self.index - 1)
	}

	/// Replaces `data` with `data × K_i`.
	///
	/// `K_i` is symmetric, so this is also `K_i × data`. Each pair `(x, y)` at positions
	/// `(j, j + stride)` within a block of `2 * stride` becomes `(x + y, x - y)`.
	///
	/// ## Throws
	///
	/// * [`Error::IncorrectLength`] unless `data.len() == self.len()`
	pub fn apply(&self, data: &mut [i32]) -> Result<(), Error> {
		ensure!(
			data.len() == self.len(),
			Error::IncorrectLength {
				expected: self.len(),
				actual: data.len(),
			}
		);

		let stride = self.stride();
		for chunk in data.chunks_exact_mut(stride * 2) {
			let (lo, hi) = chunk.split_at_mut(stride);
			for (x, y) in lo.iter_mut().zip(hi.iter_mut()) {
				let (a, b) = (*x, *y);
				*x = a + b;
				*y = a - b;
			}
		}
		Ok(())
	}

	/// Builds the dense `2^order × 2^order` matrix of this factor.
	pub fn to_matrix(&self) -> Result<Matrix, Error> {
		let outer = Matrix::identity(1 << (self.order - self.index))?;
		let inner = Matrix::identity(self.stride())?;
		Ok(outer
			.kronecker_product(&hadamard_2x2()?)
			.kronecker_product(&inner))
	}
}

/// The 2×2 Hadamard kernel `[[1, 1], [1, -1]]`.
pub(crate) fn hadamard_2x2() -> Result<Matrix, Error> {
	Ok(Matrix::from_rows(&[[1, 1], [1, -1]])?)
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;
	use proptest::prelude::*;
	use reedmuller_math::Vector;

	use super::*;

	#[test]
	fn test_factor_bounds() {
		assert_matches!(HadamardFactor::new(0, 1), Err(Error::InvalidOrder { order: 0, .. }));
		assert_matches!(
			HadamardFactor::new(3, 0),
			Err(Error::InvalidFactorIndex { index: 0, order: 3 })
		);
		assert_matches!(
			HadamardFactor::new(3, 4),
			Err(Error::InvalidFactorIndex { index: 4, order: 3 })
		);

		let factor = HadamardFactor::new(3, 2).unwrap();
		assert_eq!(factor.len(), 8);
		assert_eq!(factor.stride(), 2);
	}

	#[test]
	fn test_order_one_factor_is_h() {
		let factor = HadamardFactor::new(1, 1).unwrap();
		assert_eq!(factor.to_matrix().unwrap(), hadamard_2x2().unwrap());
	}

	#[test]
	fn test_order_two_factors() {
		let k1 = HadamardFactor::new(2, 1).unwrap().to_matrix().unwrap();
		let k2 = HadamardFactor::new(2, 2).unwrap().to_matrix().unwrap();

		let expected_k1 = Matrix::from_rows(&[
			[1, 1, 0, 0],
			[1, -1, 0, 0],
			[0, 0, 1, 1],
			[0, 0, 1, -1],
		])
		.unwrap();
		let expected_k2 = Matrix::from_rows(&[
			[1, 0, 1, 0],
			[0, 1, 0, 1],
			[1, 0, -1, 0],
			[0, 1, 0, -1],
		])
		.unwrap();
		assert_eq!(k1, expected_k1);
		assert_eq!(k2, expected_k2);
	}

	#[test]
	fn test_apply_rejects_wrong_length() {
		let factor = HadamardFactor::new(3, 1).unwrap();
		let mut data = vec![1; 4];
		assert_matches!(
			factor.apply(&mut data),
			Err(Error::IncorrectLength {
				expected: 8,
				actual: 4
			})
		);
	}

	proptest! {
		#[test]
		fn test_apply_matches_dense_product(
			(order, index, data) in (1..=6usize)
				.prop_flat_map(|order| (
					Just(order),
					1..=order,
					proptest::collection::vec(-8..=8i32, 1 << order),
				))
		) {
			let factor = HadamardFactor::new(order, index).unwrap();
			let v = Vector::new(data.clone()).unwrap();
			let expected = v.multiply(&factor.to_matrix().unwrap()).unwrap();

			let mut data = data;
			factor.apply(&mut data).unwrap();
			prop_assert_eq!(data.as_slice(), expected.elements());
		}
	}
}
