// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Scores are additive integers. Only the relative order inside one query
//! matters, and the order is fully determined: score descending, then corpus
//! position ascending.

mod core;
pub mod ranking;

pub use core::*;
