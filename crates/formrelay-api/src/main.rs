use formrelay_api::ApiContext;
use lambda_http::{Error, Request, run, service_fn};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // JSON logs for CloudWatch; RUST_LOG overrides the INFO default
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .without_time()
        .init();

    info!(version = formrelay_core::VERSION, "Starting formrelay submission endpoint");

    let ctx = ApiContext::new().await?;

    run(service_fn(move |event: Request| {
        let ctx = ctx.clone();
        formrelay_api::handler(ctx, event)
    }))
    .await
}
