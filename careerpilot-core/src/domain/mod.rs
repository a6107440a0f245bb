//! Core domain types
//!
//! This module contains the domain structures shared across the Careerpilot
//! crates: the analysis catalog, the request context assembled from user
//! input, result scoring, and the cross-run usage statistics.

pub mod analysis;
pub mod context;
pub mod results;
pub mod score;
pub mod stats;
