//! Counter service: the `Increment()` operation and its error mapping.
//!
//! Built once per process and reused across warm invocations. A store that
//! could not be resolved at cold start (e.g. missing table name) is kept as
//! an error and reported on every invocation instead of crashing the runtime.

use std::sync::Arc;

use visitor_counter_core::count::coerce_count;
use visitor_counter_core::error::{CounterError, Result};
use visitor_counter_core::response::CounterResponse;

use crate::config;
use crate::store::{CounterStore, DynamoCounterStore};

pub struct CounterService {
    store: std::result::Result<Arc<dyn CounterStore>, CounterError>,
}

impl CounterService {
    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        Self { store: Ok(store) }
    }

    /// A service whose store failed to resolve; every call reports `err`.
    pub fn unavailable(err: CounterError) -> Self {
        Self { store: Err(err) }
    }

    /// Resolve the DynamoDB store from process configuration.
    pub async fn from_env() -> Self {
        match config::load_from_env() {
            Ok(cfg) => {
                tracing::info!(
                    table = %cfg.table_name,
                    key = %cfg.key_value,
                    "counter store configured"
                );
                Self::new(Arc::new(DynamoCounterStore::from_env(cfg).await))
            }
            Err(e) => {
                tracing::warn!(error = %e, "counter store unavailable");
                Self::unavailable(e)
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.store.is_ok()
    }

    /// Atomically add 1 to the counter and return the new value.
    pub async fn increment(&self) -> Result<u64> {
        let store = self.store.as_ref().map_err(Clone::clone)?;
        let raw = store.increment().await?;
        coerce_count(&raw)
    }

    /// Run one invocation. Always yields a well-formed response.
    pub async fn handle(&self) -> CounterResponse {
        match self.increment().await.and_then(CounterResponse::ok) {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!("{}: {}", e.tier().log_prefix(), e);
                CounterResponse::from_error(&e)
            }
        }
    }
}
