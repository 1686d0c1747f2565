// Copyright 2024 Ulvetanna Inc.

//! Dense reference implementations of the Walsh–Hadamard transform for testing.

use reedmuller_math::{Matrix, Vector};

use super::factor::hadamard_2x2;

/// The Sylvester–Hadamard matrix `H_order = H ⊗ H_(order-1)`.
pub fn sylvester_hadamard(order: usize) -> Matrix {
	assert!(order >= 1);

	let h = hadamard_2x2().unwrap();
	(1..order).fold(h.clone(), |acc, _| h.kronecker_product(&acc))
}

/// Computes `v × H_order` with a single dense product.
pub fn dense_transform(v: &Vector, order: usize) -> Vector {
	v.multiply(&sylvester_hadamard(order))
		.expect("vector length must be 2^order")
}
