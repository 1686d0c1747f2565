// Copyright 2024 Irreducible Inc.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("a vector must have at least one element")]
	EmptyVector,
	#[error("a matrix must have at least one row and one column, got {rows}x{cols}")]
	EmptyMatrix { rows: usize, cols: usize },
	#[error("argument {arg} does not have expected length {expected}")]
	IncorrectArgumentLength { arg: String, expected: usize },
	#[error("cannot compute {op} of a {left:?} operand with a {right:?} operand")]
	DimensionMismatch {
		op: &'static str,
		left: (usize, usize),
		right: (usize, usize),
	},
	#[error("vector lengths differ: expected {expected}, got {actual}")]
	LengthMismatch { expected: usize, actual: usize },
	#[error("index {index} is out of range for dimension {len}")]
	IndexOutOfRange { index: usize, len: usize },
	#[error("character {found:?} at position {position} is not a decimal digit")]
	InvalidDigit { position: usize, found: char },
	#[error("a vector of length {len} does not fit in a byte")]
	VectorTooWide { len: usize },
	#[error("entry {index} has value {value}, expected 0 or 1")]
	NonBinaryEntry { index: usize, value: i32 },
}
