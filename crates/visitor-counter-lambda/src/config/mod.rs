//! Counter config loader (strict, environment based).
//!
//! Lambda hands configuration to the function through environment variables.
//! Only the table name is required; the record layout has defaults matching
//! the deployed table (`id` = `"visitor_count"`, numeric attribute `count`).

pub mod schema;

use visitor_counter_core::error::{CounterError, Result};

pub use schema::CounterConfig;

pub const ENV_TABLE: &str = "DYNAMODB_TABLE";
pub const ENV_KEY_ATTRIBUTE: &str = "COUNTER_KEY_ATTRIBUTE";
pub const ENV_KEY: &str = "COUNTER_KEY";
pub const ENV_COUNT_ATTRIBUTE: &str = "COUNTER_ATTRIBUTE";

pub fn load_from_env() -> Result<CounterConfig> {
    load_from_vars(std::env::vars())
}

/// Build a config from `(name, value)` pairs. Unrelated variables are ignored.
pub fn load_from_vars<I, K, V>(vars: I) -> Result<CounterConfig>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut table_name = None;
    let mut cfg = CounterConfig::default();

    for (k, v) in vars {
        match k.as_ref() {
            ENV_TABLE => table_name = Some(v.into()),
            ENV_KEY_ATTRIBUTE => cfg.key_attribute = v.into(),
            ENV_KEY => cfg.key_value = v.into(),
            ENV_COUNT_ATTRIBUTE => cfg.count_attribute = v.into(),
            _ => {}
        }
    }

    cfg.table_name = table_name.ok_or_else(|| {
        CounterError::Config(format!("environment variable {ENV_TABLE} is not set"))
    })?;
    cfg.validate()?;
    Ok(cfg)
}
