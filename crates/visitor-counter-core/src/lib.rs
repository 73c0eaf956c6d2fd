//! Visitor counter core: transport-agnostic error taxonomy, count coercion,
//! and the response shape returned to the invoking platform.
//!
//! This crate carries no AWS or runtime dependencies so the response contract
//! can be tested without a store or a Lambda environment.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Every fallible path
//! surfaces as `CounterError` so an invocation always ends in a well-formed
//! response instead of a crashed process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod count;
pub mod error;
pub mod response;

/// Shared result type.
pub use error::{CounterError, ErrorTier, Result};
