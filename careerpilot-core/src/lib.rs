//! Careerpilot Core
//!
//! Core types and abstractions for the Career Copilot toolkit.
//!
//! This crate contains:
//! - Domain types: analysis catalog, request context, scoring, usage statistics
//! - DTOs: request and report bodies exchanged with the Copilot API
//! - Parsing helpers for the free-text list and record inputs

pub mod domain;
pub mod dto;
pub mod parse;
