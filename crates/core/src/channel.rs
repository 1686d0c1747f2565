// Copyright 2024 Irreducible Inc.

//! A binary symmetric channel for exercising the decoder.

use rand::Rng;
use reedmuller_math::Vector;
use reedmuller_utils::ensure;

use crate::{framing::METADATA_LEN, Error};

/// Flips each transmitted bit independently with a fixed probability.
#[derive(Debug, Clone)]
pub struct Channel<R: Rng> {
	error_probability: f64,
	rng: R,
}

impl<R: Rng> Channel<R> {
	/// ## Throws
	///
	/// * [`Error::InvalidProbability`] unless `0 <= error_probability <= 1`
	pub fn new(error_probability: f64, rng: R) -> Result<Self, Error> {
		ensure!(
			(0.0..=1.0).contains(&error_probability),
			Error::InvalidProbability {
				probability: error_probability
			}
		);
		Ok(Self {
			error_probability,
			rng,
		})
	}

	pub fn error_probability(&self) -> f64 {
		self.error_probability
	}

	/// The random source driving the bit flips.
	pub fn rng_mut(&mut self) -> &mut R {
		&mut self.rng
	}

	fn flip(&mut self) -> bool {
		self.rng.gen_bool(self.error_probability)
	}

	/// Returns a copy of `v` with each entry's low bit flipped with the channel's probability.
	pub fn pass_vector(&mut self, v: &Vector) -> Vector {
		let mut out = v.clone();
		for entry in out.elements_mut() {
			if self.flip() {
				*entry ^= 1;
			}
		}
		out
	}

	/// Passes every bit of every byte through the channel.
	pub fn pass_bytes(&mut self, bytes: &[u8]) -> Vec<u8> {
		bytes
			.iter()
			.map(|&byte| {
				(0..8).fold(byte, |acc, bit| if self.flip() { acc ^ (1 << bit) } else { acc })
			})
			.collect()
	}

	/// Passes the codewords of a framed message through the channel. The metadata vectors are
	/// delivered intact.
	pub fn pass_framed(&mut self, framed: &[Vector]) -> Vec<Vector> {
		let header_len = framed.len().min(METADATA_LEN);
		let (header, codewords) = framed.split_at(header_len);
		header
			.iter()
			.cloned()
			.chain(codewords.iter().map(|v| self.pass_vector(v)))
			.collect()
	}
}
