// Copyright 2023 Ulvetanna Inc.

//! First-order Reed–Muller codes `RM(1, m)` over GF(2).
//!
//! [`ReedMullerEncoder`] maps `m + 1` message bits to a `2^m` bit codeword through the generator
//! matrix built by [`build_generator_matrix`], and frames arbitrary byte streams into a sequence
//! of codewords preceded by two metadata vectors (see [`FrameHeader`]). [`ReedMullerDecoder`]
//! recovers each message with maximum-correlation decoding computed by the fast Walsh–Hadamard
//! transform from [`reedmuller_fht`].
//!
//! [`Channel`] simulates a binary symmetric channel for exercising the decoder, and
//! [`experiment`] measures the decoded bit error rate across many transmissions.

pub mod bit_io;
pub mod channel;
pub mod decoder;
pub mod encoder;
mod error;
pub mod experiment;
pub mod framing;
pub mod generator;
pub mod params;

pub use bit_io::{BitReader, BitWriter};
pub use channel::Channel;
pub use decoder::ReedMullerDecoder;
pub use encoder::ReedMullerEncoder;
pub use error::Error;
pub use framing::FrameHeader;
pub use generator::build_generator_matrix;
pub use params::ReedMullerParams;
pub use reedmuller_math::{Matrix, MatrixMod2, Vector};
