// Copyright 2024 Irreducible Inc.

//! Parameters of the `RM(1, m)` code.

use getset::CopyGetters;
use reedmuller_utils::ensure;

use crate::Error;

/// Smallest order accepted by [`crate::ReedMullerEncoder`].
pub const MIN_ENCODER_ORDER: usize = 2;

/// Smallest order accepted by [`crate::ReedMullerDecoder`].
pub const MIN_DECODER_ORDER: usize = 1;

/// Largest supported order. The generator matrix is stored densely, so codewords are limited to
/// `2^16` bits.
pub const MAX_ORDER: usize = 16;

/// The order `m` of an `RM(1, m)` code and the quantities derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CopyGetters)]
pub struct ReedMullerParams {
	#[getset(get_copy = "pub")]
	order: usize,
}

impl ReedMullerParams {
	pub fn new(order: usize) -> Result<Self, Error> {
		Self::with_min_order(order, MIN_DECODER_ORDER)
	}

	pub(crate) fn with_min_order(order: usize, min: usize) -> Result<Self, Error> {
		ensure!(
			(min..=MAX_ORDER).contains(&order),
			Error::InvalidOrder {
				order,
				min,
				max: MAX_ORDER,
			}
		);
		Ok(Self { order })
	}

	/// Number of message bits, `m + 1`.
	pub const fn message_len(&self) -> usize {
		self.order + 1
	}

	/// Number of codeword bits, `2^m`.
	pub const fn codeword_len(&self) -> usize {
		1 << self.order
	}

	/// Minimum Hamming distance between distinct codewords, `2^(m-1)`.
	pub const fn min_distance(&self) -> usize {
		1 << (self.order - 1)
	}

	/// Number of bit errors per codeword that are always corrected.
	pub const fn correction_radius(&self) -> usize {
		(self.min_distance() - 1) / 2
	}
}
