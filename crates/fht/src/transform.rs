// Copyright 2024-2025 Irreducible Inc.

use reedmuller_math::Vector;
use reedmuller_utils::ensure;

use super::{error::Error, factor::HadamardFactor};

/// Largest supported order. Transforming `±1` data of length `2^30` stays within `i32`.
pub const MAX_ORDER: usize = 30;

/// The Walsh–Hadamard transform of length `2^order`, stored as its Kronecker factors
/// `K_1, …, K_order`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalshHadamardTransform {
	order: usize,
	factors: Vec<HadamardFactor>,
}

impl WalshHadamardTransform {
	pub fn new(order: usize) -> Result<Self, Error> {
		ensure!(
			(1..=MAX_ORDER).contains(&order),
			Error::InvalidOrder {
				order,
				max: MAX_ORDER
			}
		);
		let factors = (1..=order)
			.map(|index| HadamardFactor::new(order, index))
			.collect::<Result<Vec<_>, _>>()?;
		Ok(Self { order, factors })
	}

	pub const fn order(&self) -> usize {
		self.order
	}

	#[allow(clippy::len_without_is_empty)]
	pub const fn len(&self) -> usize {
		1 << self.order
	}

	/// The factors in the order they are applied.
	pub fn factors(&self) -> &[HadamardFactor] {
		&self.factors
	}

	/// Transforms `data` in place by applying `K_1, K_2, …, K_order` in sequence.
	///
	/// ## Throws
	///
	/// * [`Error::IncorrectLength`] unless `data.len() == self.len()`
	pub fn forward_transform(&self, data: &mut [i32]) -> Result<(), Error> {
		ensure!(
			data.len() == self.len(),
			Error::IncorrectLength {
				expected: self.len(),
				actual: data.len(),
			}
		);

		let _scope = tracing::trace_span!("Walsh–Hadamard transform", order = self.order).entered();
		for factor in &self.factors {
			factor.apply(data)?;
		}
		Ok(())
	}

	/// Returns the transform of `v`, leaving `v` untouched.
	pub fn transform(&self, v: &Vector) -> Result<Vector, Error> {
		let mut out = v.clone();
		self.forward_transform(out.elements_mut())?;
		Ok(out)
	}
}
