// Copyright 2024 Irreducible Inc.

//! Most-significant-bit-first packing and unpacking of bit streams over byte buffers.

use reedmuller_utils::ensure;

use crate::Error;

const BITS_PER_BYTE: usize = 8;

/// Reads bits from a byte buffer, most significant bit of each byte first.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
	buffer: &'a [u8],
	byte_index: usize,
	// 0 is the MSB, 7 the LSB
	bit_index: usize,
	end_of_buffer: bool,
}

impl<'a> BitReader<'a> {
	pub fn new(buffer: &'a [u8]) -> Self {
		Self {
			buffer,
			byte_index: 0,
			bit_index: 0,
			end_of_buffer: false,
		}
	}

	/// Reads up to `count` bits, crossing byte boundaries as needed.
	///
	/// When the buffer runs out first, only the bits actually read are returned and
	/// [`Self::end_of_buffer`] becomes `true`. Callers must check the returned length.
	pub fn read_bits(&mut self, count: usize) -> Vec<u8> {
		let mut bits = Vec::with_capacity(count);
		for _ in 0..count {
			let Some(&byte) = self.buffer.get(self.byte_index) else {
				self.end_of_buffer = true;
				return bits;
			};

			bits.push((byte >> (BITS_PER_BYTE - 1 - self.bit_index)) & 1);

			self.bit_index += 1;
			if self.bit_index == BITS_PER_BYTE {
				self.bit_index = 0;
				self.byte_index += 1;
			}
		}
		bits
	}

	/// Whether a read has run past the end of the buffer.
	pub fn end_of_buffer(&self) -> bool {
		self.end_of_buffer
	}

	pub fn has_more_bits(&self) -> bool {
		self.byte_index < self.buffer.len()
	}
}

/// Packs bits into bytes, most significant bit first.
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
	buffer: Vec<u8>,
	current_byte: u8,
	// number of bits held in `current_byte`, 0..8
	bit_position: usize,
}

impl BitWriter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends one bit.
	///
	/// ## Throws
	///
	/// * [`Error::InvalidBit`] unless `bit` is 0 or 1
	pub fn write_bit(&mut self, bit: i32) -> Result<(), Error> {
		ensure!(bit == 0 || bit == 1, Error::InvalidBit { bit });

		self.current_byte = (self.current_byte << 1) | bit as u8;
		self.bit_position += 1;

		if self.bit_position == BITS_PER_BYTE {
			self.buffer.push(self.current_byte);
			self.current_byte = 0;
			self.bit_position = 0;
		}
		Ok(())
	}

	pub fn write_bits(&mut self, bits: impl IntoIterator<Item = i32>) -> Result<(), Error> {
		for bit in bits {
			self.write_bit(bit)?;
		}
		Ok(())
	}

	/// Total number of bits written so far.
	pub fn bit_len(&self) -> usize {
		self.buffer.len() * BITS_PER_BYTE + self.bit_position
	}

	/// Finishes the stream and returns the packed bytes.
	///
	/// A trailing partial byte is left-justified and zero-filled on the right. It is emitted only
	/// when it holds more than `padding_zeros` bits; a partial byte made up entirely of padding is
	/// dropped.
	pub fn into_bytes(mut self, padding_zeros: usize) -> Vec<u8> {
		if self.bit_position > padding_zeros {
			let shift = BITS_PER_BYTE - self.bit_position;
			self.buffer.push(self.current_byte << shift);
		}
		self.buffer
	}
}
