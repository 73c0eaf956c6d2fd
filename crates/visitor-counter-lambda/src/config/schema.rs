use visitor_counter_core::error::{CounterError, Result};

use super::{ENV_COUNT_ATTRIBUTE, ENV_KEY, ENV_KEY_ATTRIBUTE, ENV_TABLE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterConfig {
    /// Target DynamoDB table.
    pub table_name: String,
    /// Partition key attribute name.
    pub key_attribute: String,
    /// Partition key value of the single counter record.
    pub key_value: String,
    /// Numeric attribute incremented by `ADD`.
    pub count_attribute: String,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            table_name: String::new(),
            key_attribute: default_key_attribute(),
            key_value: default_key_value(),
            count_attribute: default_count_attribute(),
        }
    }
}

impl CounterConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            (ENV_TABLE, &self.table_name),
            (ENV_KEY_ATTRIBUTE, &self.key_attribute),
            (ENV_KEY, &self.key_value),
            (ENV_COUNT_ATTRIBUTE, &self.count_attribute),
        ] {
            if value.trim().is_empty() {
                return Err(CounterError::Config(format!(
                    "environment variable {name} must not be empty"
                )));
            }
        }
        if self.key_attribute == self.count_attribute {
            return Err(CounterError::Config(format!(
                "{ENV_COUNT_ATTRIBUTE} must differ from {ENV_KEY_ATTRIBUTE}"
            )));
        }
        Ok(())
    }
}

fn default_key_attribute() -> String {
    "id".into()
}
fn default_key_value() -> String {
    "visitor_count".into()
}
fn default_count_attribute() -> String {
    "count".into()
}
