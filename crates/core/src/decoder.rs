// Copyright 2024-2025 Irreducible Inc.

use reedmuller_fht::WalshHadamardTransform;
use reedmuller_math::{self as math, Vector};
use reedmuller_utils::ensure;
use tracing::instrument;

use crate::{
	bit_io::BitWriter,
	framing::FrameHeader,
	params::{ReedMullerParams, MIN_DECODER_ORDER},
	Error,
};

#[derive(Debug, Clone)]
struct DecoderState {
	params: ReedMullerParams,
	fht: WalshHadamardTransform,
}

impl DecoderState {
	fn new(order: usize) -> Result<Self, Error> {
		let params = ReedMullerParams::with_min_order(order, MIN_DECODER_ORDER)?;
		let fht = WalshHadamardTransform::new(params.order())?;
		Ok(Self { params, fht })
	}
}

/// Maximum-correlation decoder for the first-order Reed–Muller code `RM(1, m)`.
///
/// A received word is mapped to `±1`, multiplied by the Hadamard matrix `H_{2^m}` through its
/// Kronecker factors, and the entry of largest magnitude picks the nearest codeword. For `m >= 2`
/// up to `2^(m-2) - 1` flipped bits per codeword are always corrected.
///
/// The decoder holds the factors for one order at a time. [`Self::decode_framed`] reconfigures it
/// from the header of each framed message, so a decoder created with [`Default::default`] only
/// needs an order before single-codeword decoding.
#[derive(Debug, Clone, Default)]
pub struct ReedMullerDecoder {
	state: Option<DecoderState>,
}

impl ReedMullerDecoder {
	/// ## Throws
	///
	/// * [`Error::InvalidOrder`] unless `1 <= order <= MAX_ORDER`
	pub fn new(order: usize) -> Result<Self, Error> {
		Ok(Self {
			state: Some(DecoderState::new(order)?),
		})
	}

	/// The configured order, if any.
	pub fn order(&self) -> Option<usize> {
		self.params().map(|params| params.order())
	}

	pub fn params(&self) -> Option<ReedMullerParams> {
		self.state.as_ref().map(|state| state.params)
	}

	/// Prepares the decoder for codewords of order `order`. The factors are rebuilt only when the
	/// order changes.
	pub fn configure(&mut self, order: usize) -> Result<(), Error> {
		if self.order() == Some(order) {
			return Ok(());
		}

		tracing::debug!(previous = ?self.order(), order, "rebuilding Hadamard factors");
		self.state = Some(DecoderState::new(order)?);
		Ok(())
	}

	/// Decodes a single received word of `2^m` entries into the `m + 1` message bits.
	///
	/// Zero entries read as `-1` and one entries as `+1`. The input is not modified.
	///
	/// ## Throws
	///
	/// * [`Error::NotConfigured`] if the decoder has no order yet
	/// * [`Error::CodewordLength`] if `codeword` does not have `2^m` entries
	/// * [`Error::Math`] if an entry is not 0 or 1
	pub fn decode(&self, codeword: &Vector) -> Result<Vector, Error> {
		let Some(state) = &self.state else {
			return Err(Error::NotConfigured);
		};
		let codeword_len = state.params.codeword_len();
		ensure!(
			codeword.len() == codeword_len,
			Error::CodewordLength {
				expected: codeword_len,
				actual: codeword.len(),
			}
		);

		let _scope = tracing::trace_span!("decode codeword", order = state.params.order()).entered();

		let mut correlations = codeword
			.iter()
			.enumerate()
			.map(|(index, bit)| match bit {
				0 => Ok(-1),
				1 => Ok(1),
				value => Err(math::Error::NonBinaryEntry { index, value }),
			})
			.collect::<Result<Vec<_>, _>>()?;
		state.fht.forward_transform(&mut correlations)?;

		// First entry of largest magnitude wins ties.
		let (peak_index, peak) = correlations.iter().copied().enumerate().skip(1).fold(
			(0, correlations[0]),
			|(best_index, best), (index, value)| {
				if value.abs() > best.abs() {
					(index, value)
				} else {
					(best_index, best)
				}
			},
		);

		let message = std::iter::once(i32::from(peak > 0))
			.chain((0..state.params.order()).map(|bit| ((peak_index >> bit) & 1) as i32))
			.collect::<Vec<_>>();
		Ok(Vector::new(message)?)
	}

	/// Decodes a framed message produced by [`crate::ReedMullerEncoder::encode_bytes`] back into
	/// bytes.
	///
	/// The order is taken from the header, reconfiguring the decoder if needed, and the padding
	/// bits appended to the last chunk are dropped. A final codeword made up entirely of padding,
	/// as older encoders emit for inputs filling their last chunk exactly, is accepted.
	///
	/// The trailing partial byte follows [`BitWriter::into_bytes`]: it is kept only when it holds
	/// more decoded bits than the remaining padding. Whole bytes of padding, possible once
	/// `m >= 7`, are removed before writing.
	///
	/// ## Throws
	///
	/// * [`Error::MissingMetadata`] or [`Error::InvalidMetadata`] for a malformed header
	/// * [`Error::InvalidOrder`] if the header names an unsupported order
	/// * [`Error::InvalidPadding`] if the padding is longer than a chunk or than the decoded bits
	/// * [`Error::CodewordLength`] if a codeword does not have `2^m` entries
	#[instrument(skip_all, level = "debug", fields(len = framed.len()))]
	pub fn decode_framed(&mut self, framed: &[Vector]) -> Result<Vec<u8>, Error> {
		let (header, codewords) = FrameHeader::parse(framed)?;
		self.configure(header.order as usize)?;

		let chunk_len = ReedMullerParams::new(header.order as usize)?.message_len();
		let padding = header.padding as usize;
		ensure!(padding <= chunk_len, Error::InvalidPadding { padding, chunk_len });

		let mut bits = Vec::with_capacity(codewords.len() * chunk_len);
		for codeword in codewords {
			bits.extend_from_slice(self.decode(codeword)?.elements());
		}
		ensure!(padding <= bits.len(), Error::InvalidPadding { padding, chunk_len });

		let whole_bytes = padding - padding % 8;
		let mut writer = BitWriter::new();
		writer.write_bits(bits[..bits.len() - whole_bytes].iter().copied())?;
		tracing::debug!(bits = writer.bit_len(), padding, "decoded framed message");
		Ok(writer.into_bytes(padding % 8))
	}
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;
	use proptest::prelude::*;

	use super::*;
	use crate::ReedMullerEncoder;

	fn vector(elements: &[i32]) -> Vector {
		Vector::new(elements.to_vec()).unwrap()
	}

	#[test]
	fn test_decode_corrects_single_error() {
		let decoder = ReedMullerDecoder::new(3).unwrap();
		assert_eq!(
			decoder.decode(&vector(&[1, 0, 1, 0, 1, 0, 1, 1])).unwrap(),
			vector(&[1, 1, 0, 0])
		);
		assert_eq!(
			decoder.decode(&vector(&[1, 0, 0, 0, 1, 1, 1, 1])).unwrap(),
			vector(&[0, 0, 0, 1])
		);
	}

	#[test]
	fn test_decode_does_not_modify_input() {
		let decoder = ReedMullerDecoder::new(3).unwrap();
		let received = vector(&[1, 1, 0, 0, 0, 0, 1, 1]);
		assert_eq!(decoder.decode(&received).unwrap(), vector(&[1, 0, 1, 1]));
		assert_eq!(received, vector(&[1, 1, 0, 0, 0, 0, 1, 1]));
	}

	#[test]
	fn test_decode_order_one() {
		let decoder = ReedMullerDecoder::new(1).unwrap();
		assert_eq!(decoder.decode(&vector(&[0, 1])).unwrap(), vector(&[0, 1]));
		assert_eq!(decoder.decode(&vector(&[1, 0])).unwrap(), vector(&[1, 1]));
	}

	#[test]
	fn test_decode_tie_picks_first_peak() {
		// Correlations are [0, 4, 0, 4, -4, 0, 4, 0]; index 1 is the first peak.
		let decoder = ReedMullerDecoder::new(3).unwrap();
		assert_eq!(
			decoder.decode(&vector(&[1, 0, 0, 0, 1, 0, 1, 1])).unwrap(),
			vector(&[1, 1, 0, 0])
		);
	}

	#[test]
	fn test_decode_errors() {
		assert_matches!(
			ReedMullerDecoder::default().decode(&vector(&[0; 8])),
			Err(Error::NotConfigured)
		);
		assert_matches!(
			ReedMullerDecoder::new(3).unwrap().decode(&vector(&[0; 16])),
			Err(Error::CodewordLength {
				expected: 8,
				actual: 16
			})
		);
		assert_matches!(ReedMullerDecoder::new(0), Err(Error::InvalidOrder { order: 0, .. }));
	}

	#[test]
	fn test_decode_rejects_non_binary_entries() {
		let decoder = ReedMullerDecoder::new(3).unwrap();
		assert_matches!(
			decoder.decode(&Vector::new(vec![i32::MAX; 8]).unwrap()),
			Err(Error::Math(math::Error::NonBinaryEntry {
				index: 0,
				value: i32::MAX
			}))
		);
		assert_matches!(
			decoder.decode(&vector(&[1, 0, 1, 0, -1, 0, 1, 0])),
			Err(Error::Math(math::Error::NonBinaryEntry { index: 4, value: -1 }))
		);
	}

	#[test]
	fn test_configure() {
		let mut decoder = ReedMullerDecoder::default();
		assert_eq!(decoder.order(), None);

		decoder.configure(4).unwrap();
		assert_eq!(decoder.order(), Some(4));
		assert_eq!(decoder.params().unwrap().codeword_len(), 16);

		decoder.configure(4).unwrap();
		assert_eq!(decoder.order(), Some(4));

		assert_matches!(decoder.configure(17), Err(Error::InvalidOrder { .. }));
		assert_eq!(decoder.order(), Some(4));
	}

	#[test]
	fn test_decode_framed_exact_chunks() {
		let encoder = ReedMullerEncoder::new(3).unwrap();
		let mut decoder = ReedMullerDecoder::default();

		let framed = encoder.encode_bytes(b"Test").unwrap();
		assert_eq!(decoder.decode_framed(&framed).unwrap(), b"Test");
		assert_eq!(decoder.order(), Some(3));
	}

	#[test]
	fn test_decode_framed_with_padding() {
		let encoder = ReedMullerEncoder::new(4).unwrap();
		let mut decoder = ReedMullerDecoder::new(3).unwrap();

		let framed = encoder.encode_bytes(b"Test").unwrap();
		assert_eq!(framed[1], Vector::from_byte(3));
		assert_eq!(decoder.decode_framed(&framed).unwrap(), b"Test");
		assert_eq!(decoder.order(), Some(4));
	}

	#[test]
	fn test_decode_framed_with_trailing_padding_codeword() {
		let encoder = ReedMullerEncoder::new(3).unwrap();
		let mut decoder = ReedMullerDecoder::default();

		// "Test" is 32 bits, a multiple of the chunk length 4, followed by a chunk of four zeros
		let mut framed = encoder.encode_bytes(b"Test").unwrap();
		framed[1] = Vector::from_byte(4);
		framed.push(encoder.encode(&vector(&[0, 0, 0, 0])).unwrap());
		assert_eq!(framed.len(), 2 + 9);

		assert_eq!(decoder.decode_framed(&framed).unwrap(), b"Test");
	}

	#[test]
	fn test_decode_framed_keeps_unaligned_tail() {
		let encoder = ReedMullerEncoder::new(3).unwrap();
		let mut decoder = ReedMullerDecoder::default();

		// 12 decoded bits with 3 of padding: the 4-bit tail holds one data bit and is flushed
		let mut framed = vec![Vector::from_byte(3), Vector::from_byte(3)];
		for message in [[1, 0, 1, 0], [1, 1, 0, 0], [1, 1, 1, 1]] {
			framed.push(encoder.encode(&vector(&message)).unwrap());
		}
		assert_eq!(decoder.decode_framed(&framed).unwrap(), vec![0b1010_1100, 0b1111_0000]);
	}

	#[test]
	fn test_decode_framed_with_whole_padding_bytes() {
		// At order 8 a chunk is 9 bits: 64 bits make seven chunks and one bit, padded by 8.
		let encoder = ReedMullerEncoder::new(8).unwrap();
		let mut decoder = ReedMullerDecoder::default();

		let bytes = [0xa5, 0x3c, 0x00, 0xff, 0x12, 0x34, 0x56, 0x78];
		let framed = encoder.encode_bytes(&bytes).unwrap();
		assert_eq!(framed[1], Vector::from_byte(8));
		assert_eq!(framed.len(), 2 + 8);
		assert_eq!(decoder.decode_framed(&framed).unwrap(), bytes);
	}

	#[test]
	fn test_decode_framed_empty() {
		let mut decoder = ReedMullerDecoder::default();
		let framed = [Vector::from_byte(3), Vector::from_byte(0)];
		assert_eq!(decoder.decode_framed(&framed).unwrap(), Vec::<u8>::new());
	}

	#[test]
	fn test_decode_framed_rejects_bad_header() {
		let mut decoder = ReedMullerDecoder::default();
		assert_matches!(decoder.decode_framed(&[]), Err(Error::MissingMetadata { len: 0 }));
		assert_matches!(
			decoder.decode_framed(&[Vector::from_byte(0), Vector::from_byte(0)]),
			Err(Error::InvalidOrder { order: 0, .. })
		);
		assert_matches!(
			decoder.decode_framed(&[Vector::from_byte(3), Vector::from_byte(5)]),
			Err(Error::InvalidPadding {
				padding: 5,
				chunk_len: 4
			})
		);
		assert_matches!(
			decoder.decode_framed(&[Vector::from_byte(3), Vector::from_byte(1)]),
			Err(Error::InvalidPadding { padding: 1, .. })
		);
		assert_matches!(
			decoder.decode_framed(&[Vector::from_byte(3), Vector::from_byte(0), vector(&[0; 4])]),
			Err(Error::CodewordLength { .. })
		);
	}

	proptest! {
		#[test]
		fn test_decode_inverts_encode(
			(order, message) in (1..=7usize).prop_flat_map(|order| (
				Just(order),
				proptest::collection::vec(0..=1i32, order + 1),
			))
		) {
			let params = ReedMullerParams::new(order).unwrap();
			let generator = crate::build_generator_matrix(order).unwrap();
			let message = vector(&message);
			let codeword = message.multiply_mod2(&generator).unwrap();
			prop_assert_eq!(codeword.len(), params.codeword_len());

			let decoder = ReedMullerDecoder::new(order).unwrap();
			prop_assert_eq!(decoder.decode(&codeword).unwrap(), message);
		}
	}
}
