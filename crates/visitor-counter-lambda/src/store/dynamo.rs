//! DynamoDB backend: one `UpdateItem` with an `ADD` expression.

use std::error::Error as StdError;
use std::fmt::Debug;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use visitor_counter_core::error::{CounterError, Result};

use crate::config::CounterConfig;
use crate::store::CounterStore;

/// `#count` aliases the attribute because `count` is a DynamoDB reserved word.
const UPDATE_EXPRESSION: &str = "ADD #count :incr";

pub struct DynamoCounterStore {
    client: Client,
    cfg: CounterConfig,
}

impl DynamoCounterStore {
    pub fn new(client: Client, cfg: CounterConfig) -> Self {
        Self { client, cfg }
    }

    /// Build a client from the ambient AWS environment (region, credentials).
    pub async fn from_env(cfg: CounterConfig) -> Self {
        let sdk = aws_config::load_from_env().await;
        Self::new(Client::new(&sdk), cfg)
    }
}

#[async_trait]
impl CounterStore for DynamoCounterStore {
    async fn increment(&self) -> Result<String> {
        let out = self
            .client
            .update_item()
            .table_name(&self.cfg.table_name)
            .key(&self.cfg.key_attribute, AttributeValue::S(self.cfg.key_value.clone()))
            .update_expression(UPDATE_EXPRESSION)
            .expression_attribute_names("#count", &self.cfg.count_attribute)
            .expression_attribute_values(":incr", AttributeValue::N("1".into()))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .map_err(|e| map_sdk_error("UpdateItem", e))?;

        let value = out
            .attributes()
            .and_then(|attrs| attrs.get(&self.cfg.count_attribute))
            .ok_or_else(|| {
                CounterError::Internal(format!(
                    "UpdateItem response is missing attribute {:?}",
                    self.cfg.count_attribute
                ))
            })?;

        value.as_n().map(Clone::clone).map_err(|other| {
            CounterError::Coercion(format!(
                "attribute {:?} is not a number: {other:?}",
                self.cfg.count_attribute
            ))
        })
    }
}

/// Service-side rejections (access denied, throttling, missing table) are
/// store errors and carry the service's code and message. Failures before a
/// response arrives (credentials, dispatch, timeouts) are not.
pub(crate) fn map_sdk_error<E, R>(operation: &str, err: SdkError<E, R>) -> CounterError
where
    E: ProvideErrorMetadata + StdError + 'static,
    R: Debug,
{
    match err.as_service_error() {
        Some(svc) => CounterError::Store(format!(
            "An error occurred ({}) when calling the {operation} operation: {}",
            svc.code().unwrap_or("Unknown"),
            svc.message().unwrap_or_default()
        )),
        None => CounterError::Internal(DisplayErrorContext(&err).to_string()),
    }
}
