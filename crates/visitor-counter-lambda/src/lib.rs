//! Visitor counter Lambda library entry.
//!
//! Wires configuration, the counter store backends, and the counter service.
//! Consumed by the binary (`main.rs`) and by integration tests.

pub mod config;
pub mod service;
pub mod store;
