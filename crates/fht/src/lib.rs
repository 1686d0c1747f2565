// Copyright 2024 Ulvetanna Inc.

//! The fast Walsh–Hadamard transform, factored into sparse Kronecker steps.
//!
//! The `2^m × 2^m` Sylvester–Hadamard matrix equals the product `K_1 · K_2 ⋯ K_m` where
//! `K_i = I(2^(m-i)) ⊗ H ⊗ I(2^(i-1))` and `H = [[1, 1], [1, -1]]`. Each factor has exactly two
//! non-zero entries per row, so applying all `m` of them costs `O(m · 2^m)` instead of the
//! `O(4^m)` of a dense product.

mod error;
mod factor;
#[cfg(test)]
mod reference;
mod transform;

pub use error::Error;
pub use factor::HadamardFactor;
pub use transform::{WalshHadamardTransform, MAX_ORDER};
