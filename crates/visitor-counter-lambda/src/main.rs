//! Visitor counter Lambda function.
//!
//! - Any trigger (API Gateway proxy event, direct invoke); payload is ignored
//! - Atomic `ADD` on the counter record in `$DYNAMODB_TABLE`
//! - Responds `{"statusCode", "headers", "body"}` with CORS headers

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

use visitor_counter_lambda::service::CounterService;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // CloudWatch stamps each line already.
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    let service = CounterService::from_env().await;
    tracing::info!(ready = service.is_ready(), "visitor-counter starting");

    let service = &service;
    run(service_fn(move |_event: LambdaEvent<Value>| async move {
        Ok::<_, Error>(service.handle().await)
    }))
    .await
}
