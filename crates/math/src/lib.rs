// Copyright 2024-2025 Irreducible Inc.

//! Dense integer linear algebra used by the Reed–Muller codec.
//!
//! This crate provides:
//!
//! * [`Vector`], a fixed-length vector of integers, usually bits but signed during decoding
//! * [`Matrix`], a dense row-major integer matrix with products and the Kronecker product
//! * [`MatrixMod2`], a matrix over GF(2) whose entries are reduced modulo 2 on every write

mod error;
mod matrix;
mod matrix_mod2;
mod vector;

pub use error::*;
pub use matrix::*;
pub use matrix_mod2::*;
pub use vector::*;
