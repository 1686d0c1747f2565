// Copyright 2024-2025 Irreducible Inc.

use getset::{CopyGetters, Getters};
use reedmuller_math::{MatrixMod2, Vector};
use reedmuller_utils::ensure;
use tracing::instrument;

use crate::{
	bit_io::BitReader,
	framing::FrameHeader,
	generator::build_generator_matrix,
	params::{ReedMullerParams, MIN_ENCODER_ORDER},
	Error,
};

/// Encoder for the first-order Reed–Muller code `RM(1, m)`.
///
/// A message of `m + 1` bits is encoded as its product with the generator matrix `G(1, m)` over
/// GF(2). The resulting codeword has `2^m` bits and any two distinct codewords differ in at least
/// `2^(m-1)` positions.
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct ReedMullerEncoder {
	#[get_copy = "pub"]
	params: ReedMullerParams,
	#[get = "pub"]
	generator: MatrixMod2,
}

impl ReedMullerEncoder {
	/// ## Throws
	///
	/// * [`Error::InvalidOrder`] unless `2 <= order <= MAX_ORDER`
	pub fn new(order: usize) -> Result<Self, Error> {
		let params = ReedMullerParams::with_min_order(order, MIN_ENCODER_ORDER)?;
		let generator = build_generator_matrix(params.order())?;
		Ok(Self { params, generator })
	}

	/// Number of bits in one message, `m + 1`.
	pub const fn required_message_len(&self) -> usize {
		self.params.message_len()
	}

	/// Encodes a single message of `m + 1` bits into a codeword of `2^m` bits.
	///
	/// ## Throws
	///
	/// * [`Error::MessageLength`] if `message` does not have `m + 1` entries
	pub fn encode(&self, message: &Vector) -> Result<Vector, Error> {
		ensure!(
			message.len() == self.required_message_len(),
			Error::MessageLength {
				expected: self.required_message_len(),
				actual: message.len(),
			}
		);
		Ok(message.multiply_mod2(&self.generator)?)
	}

	/// Splits `bytes` into chunks of `m + 1` bits, most significant bit first, and encodes each
	/// chunk. The last chunk is filled up with zero bits.
	///
	/// The result is a framed message: the header vectors of [`FrameHeader`] followed by one
	/// codeword per chunk. Empty input yields only the header.
	#[instrument(skip_all, level = "debug", fields(order = self.params.order(), len = bytes.len()))]
	pub fn encode_bytes(&self, bytes: &[u8]) -> Result<Vec<Vector>, Error> {
		let chunk_len = self.required_message_len();
		let mut reader = BitReader::new(bytes);

		let mut codewords = Vec::with_capacity((bytes.len() * 8).div_ceil(chunk_len));
		let mut padding = 0;
		while reader.has_more_bits() {
			let mut chunk = reader
				.read_bits(chunk_len)
				.into_iter()
				.map(i32::from)
				.collect::<Vec<_>>();
			if reader.end_of_buffer() {
				padding = chunk_len - chunk.len();
				chunk.resize(chunk_len, 0);
			}

			codewords.push(self.encode(&Vector::new(chunk)?)?);
		}

		// Both fit in a byte: the order is at most MAX_ORDER and the padding is below `m + 1`.
		let header = FrameHeader {
			order: self.params.order() as u8,
			padding: padding as u8,
		};

		let mut framed = Vec::from(header.to_vectors());
		framed.extend(codewords);
		Ok(framed)
	}
}
