// Copyright 2024 Irreducible Inc.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("transform order {order} is outside the supported range 1..={max}")]
	InvalidOrder { order: usize, max: usize },
	#[error("factor index {index} is outside 1..={order}")]
	InvalidFactorIndex { index: usize, order: usize },
	#[error("input length must be exactly {expected}, got {actual}")]
	IncorrectLength { expected: usize, actual: usize },
	#[error("math error: {0}")]
	Math(#[from] reedmuller_math::Error),
}
