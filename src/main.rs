mod config;
mod ec2_instance_client;
mod envelope;
mod error;
mod handler;
mod team_member;
mod team_member_client;

use config::StoreCapability;
use ec2_instance_client::Ec2Connector;
use envelope::HandlerResponse;
use handler::DashboardHandler;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;
use team_member_client::roster_for;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        // CloudWatch adds the ingestion time.
        .without_time()
        .init();

    let capability = StoreCapability::probe();
    let handler = Arc::new(DashboardHandler::new(
        capability,
        roster_for(capability),
        Ec2Connector,
    ));

    run(service_fn(move |event: LambdaEvent<Value>| {
        let handler = handler.clone();
        async move { dashboard_handler(&handler, event).await }
    }))
    .await
}

async fn dashboard_handler(
    handler: &DashboardHandler<Ec2Connector>,
    event: LambdaEvent<Value>,
) -> Result<HandlerResponse, Error> {
    tracing::info!("Handling request {}", event.context.request_id);
    Ok(handler.handle(|key| std::env::var(key).ok()).await)
}
