//! Durable counter store seam.
//!
//! The service only needs one primitive: "add 1 to the counter, creating it
//! at 1 if absent, and hand back the new value" in a single call. Backends
//! return the value in the store's own numeric text form (DynamoDB `N`);
//! converting it to an integer is the caller's job.

pub mod dynamo;
pub mod memory;

use async_trait::async_trait;

use visitor_counter_core::error::Result;

pub use dynamo::DynamoCounterStore;
pub use memory::MemoryCounterStore;

/// Atomic counter backend. Implementations must never lose an increment
/// under concurrent callers.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Atomically add 1 and return the post-update value as a decimal string.
    async fn increment(&self) -> Result<String>;
}
