// Copyright 2024-2025 Irreducible Inc.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
	#[error("order {order} is outside the supported range {min}..={max}")]
	InvalidOrder { order: usize, min: usize, max: usize },
	#[error("message must have length {expected}, got {actual}")]
	MessageLength { expected: usize, actual: usize },
	#[error("codeword must have length {expected}, got {actual}")]
	CodewordLength { expected: usize, actual: usize },
	#[error("bit must be 0 or 1, got {bit}")]
	InvalidBit { bit: i32 },
	#[error("a framed message needs two metadata vectors, got {len} vectors")]
	MissingMetadata { len: usize },
	#[error("metadata vector {index} must have 8 entries, got {len}")]
	InvalidMetadata { index: usize, len: usize },
	#[error("padding of {padding} bits is invalid for chunks of {chunk_len} bits")]
	InvalidPadding { padding: usize, chunk_len: usize },
	#[error("error probability {probability} is not within [0, 1]")]
	InvalidProbability { probability: f64 },
	#[error("the decoder has no order configured yet")]
	NotConfigured,
	#[error("an experiment needs at least one trial")]
	NoTrials,
	#[error("math error: {0}")]
	Math(#[from] reedmuller_math::Error),
	#[error("transform error: {0}")]
	Fht(#[from] reedmuller_fht::Error),
}
