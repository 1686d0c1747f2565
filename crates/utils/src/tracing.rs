// Copyright 2023 Ulvetanna Inc.

/// Install a global `tracing` subscriber for tests and benchmarks.
///
/// Events are filtered with `RUST_LOG` (default `warn`). Setting `REEDMULLER_LOG_SPANS` also
/// reports span close events with their timings. Calling this more than once is harmless; later
/// calls leave the first subscriber in place.
pub fn init_tracing() {
	use tracing_subscriber::{
		fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
	};

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let span_events = if crate::env::boolean_env_flag_set("REEDMULLER_LOG_SPANS") {
		FmtSpan::CLOSE
	} else {
		FmtSpan::NONE
	};

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_test_writer()
				.with_span_events(span_events),
		)
		.try_init();
}
