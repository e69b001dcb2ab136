//! # Ports
//!
//! Interface definitions for external collaborators.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`engine`]: the batch collection engine that tokenizes and aggregates
//!   a corpus
//! - [`report`]: consolidated tabular output of the ranked listing
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod engine;
pub mod report;
