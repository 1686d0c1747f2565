// Copyright 2024 Irreducible Inc.

//! The framed-message wire format.
//!
//! A framed message is a sequence of vectors: the order `m` as an 8-bit vector, the number of
//! zero bits appended to the last message chunk as an 8-bit vector, then the codewords, each of
//! length `2^m`.

use reedmuller_math::Vector;
use reedmuller_utils::ensure;

use crate::Error;

/// Number of metadata vectors preceding the codewords.
pub const METADATA_LEN: usize = 2;

/// Width in bits of each metadata vector.
pub const METADATA_WIDTH: usize = 8;

/// The metadata at the start of a framed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHeader {
	/// The order `m` of the code.
	pub order: u8,
	/// Zero bits appended to fill the last message chunk.
	pub padding: u8,
}

impl FrameHeader {
	pub fn to_vectors(&self) -> [Vector; METADATA_LEN] {
		[Vector::from_byte(self.order), Vector::from_byte(self.padding)]
	}

	/// Splits a framed message into its header and codewords.
	///
	/// ## Throws
	///
	/// * [`Error::MissingMetadata`] if there are fewer than two vectors
	/// * [`Error::InvalidMetadata`] if a metadata vector is not 8 entries wide
	/// * [`Error::Math`] if a metadata vector holds entries other than 0 and 1
	pub fn parse(framed: &[Vector]) -> Result<(Self, &[Vector]), Error> {
		ensure!(
			framed.len() >= METADATA_LEN,
			Error::MissingMetadata { len: framed.len() }
		);
		let (metadata, codewords) = framed.split_at(METADATA_LEN);

		let mut fields = [0u8; METADATA_LEN];
		for (index, (field, v)) in fields.iter_mut().zip(metadata).enumerate() {
			ensure!(
				v.len() == METADATA_WIDTH,
				Error::InvalidMetadata {
					index,
					len: v.len()
				}
			);
			*field = v.to_byte()?;
		}

		let [order, padding] = fields;
		Ok((Self { order, padding }, codewords))
	}
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;

	use super::*;

	fn vector(elements: &[i32]) -> Vector {
		Vector::new(elements.to_vec()).unwrap()
	}

	#[test]
	fn test_header_vectors() {
		let header = FrameHeader {
			order: 3,
			padding: 0,
		};
		let [order, padding] = header.to_vectors();
		assert_eq!(order, vector(&[0, 0, 0, 0, 0, 0, 1, 1]));
		assert_eq!(padding, vector(&[0, 0, 0, 0, 0, 0, 0, 0]));
	}

	#[test]
	fn test_parse() {
		let framed = vec![
			vector(&[0, 0, 0, 0, 0, 1, 0, 0]),
			vector(&[0, 0, 0, 0, 0, 0, 1, 1]),
			vector(&[1; 16]),
		];
		let (header, codewords) = FrameHeader::parse(&framed).unwrap();
		assert_eq!(
			header,
			FrameHeader {
				order: 4,
				padding: 3
			}
		);
		assert_eq!(codewords, &framed[2..]);
	}

	#[test]
	fn test_parse_rejects_malformed_metadata() {
		assert_matches!(
			FrameHeader::parse(&[vector(&[0; 8])]),
			Err(Error::MissingMetadata { len: 1 })
		);
		assert_matches!(
			FrameHeader::parse(&[vector(&[0; 8]), vector(&[0; 9])]),
			Err(Error::InvalidMetadata { index: 1, len: 9 })
		);
		assert_matches!(
			FrameHeader::parse(&[vector(&[0, 0, 0, 0, 0, 0, 2, 1]), vector(&[0; 8])]),
			Err(Error::Math(_))
		);
	}
}
