// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! `core` turns (entry, query, options) into a score. `ranking` turns a slice
//! of entries into an ordered list of matches. Neither looks at anything but
//! its arguments.

mod core;
pub mod ranking;

pub use core::*;
