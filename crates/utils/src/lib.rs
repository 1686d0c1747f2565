// Copyright 2024 Ulvetanna Inc.

//! Shared helpers for the Reed–Muller crates: error macros, environment flags and tracing setup.

pub mod env;
pub mod error_utils;
pub mod tracing;
