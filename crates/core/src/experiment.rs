// Copyright 2024 Irreducible Inc.

//! Measures how well the decoder recovers messages sent through a noisy [`Channel`].

use rand::Rng;
use reedmuller_math::Vector;
use reedmuller_utils::ensure;
use tracing::instrument;

use crate::{Channel, Error, ReedMullerDecoder, ReedMullerEncoder};

/// Averages over the trials of an experiment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperimentResult {
	/// Mean fraction of message bits decoded correctly, in `[0, 1]`.
	pub efficiency: f64,
	/// Mean number of wrongly decoded message bits.
	pub average_error_count: f64,
}

/// Encodes one random message, then sends the codeword through `channel` `trials` times and
/// decodes each received word.
///
/// The message bits are drawn from the channel's random source. `decoder` is configured to the
/// encoder's order first.
///
/// ## Throws
///
/// * [`Error::NoTrials`] if `trials` is zero
#[instrument(skip_all, level = "debug", fields(order = encoder.params().order(), trials = trials))]
pub fn run<R: Rng>(
	encoder: &ReedMullerEncoder,
	decoder: &mut ReedMullerDecoder,
	channel: &mut Channel<R>,
	trials: usize,
) -> Result<ExperimentResult, Error> {
	ensure!(trials > 0, Error::NoTrials);
	decoder.configure(encoder.params().order())?;

	let message_len = encoder.required_message_len();
	let message = Vector::new(
		(0..message_len)
			.map(|_| channel.rng_mut().gen_range(0..=1))
			.collect::<Vec<i32>>(),
	)?;
	let codeword = encoder.encode(&message)?;

	let mut total_efficiency = 0.0;
	let mut total_errors = 0;
	for _ in 0..trials {
		let received = channel.pass_vector(&codeword);
		let errors = message.hamming_distance(&decoder.decode(&received)?)?;

		total_errors += errors;
		total_efficiency += 1.0 - errors as f64 / message_len as f64;
	}

	Ok(ExperimentResult {
		efficiency: total_efficiency / trials as f64,
		average_error_count: total_errors as f64 / trials as f64,
	})
}
