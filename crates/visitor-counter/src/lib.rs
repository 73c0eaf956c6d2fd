//! Top-level facade crate for the visitor counter.
//!
//! Re-exports the core types and the Lambda library so users can depend on a single crate.

pub mod core {
    pub use visitor_counter_core::*;
}

pub mod lambda {
    pub use visitor_counter_lambda::*;
}
