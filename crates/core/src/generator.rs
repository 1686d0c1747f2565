// Copyright 2024-2025 Irreducible Inc.

//! Construction of the `RM(1, m)` generator matrix.

use reedmuller_math::MatrixMod2;

use crate::{params::ReedMullerParams, Error};

/// Builds the generator matrix `G(1, m)` of shape `(m + 1) × 2^m`.
///
/// `G(1, 1) = [[1, 1], [0, 1]]`, and for `m > 1`
///
/// ```text
/// G(1, m) = [ G(1, m-1)  G(1, m-1) ]
///           [ 0 ... 0    1 ... 1   ]
/// ```
///
/// The recursion is unrolled into a doubling loop starting from `m = 1`. Row 0 is all ones and
/// row `i ≥ 1` has a one in column `j` exactly when bit `i - 1` of `j` is set.
///
/// ## Throws
///
/// * [`Error::InvalidOrder`] unless `1 <= order <= MAX_ORDER`
pub fn build_generator_matrix(order: usize) -> Result<MatrixMod2, Error> {
	let params = ReedMullerParams::new(order)?;

	let mut rows = vec![vec![1, 1], vec![0, 1]];
	for _ in 1..params.order() {
		let half = rows[0].len();
		for row in rows.iter_mut() {
			row.extend_from_within(..);
		}

		let mut last = vec![0; half];
		last.resize(2 * half, 1);
		rows.push(last);
	}

	Ok(MatrixMod2::from_rows(rows.as_slice())?)
}
