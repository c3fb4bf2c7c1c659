#![recursion_limit = "256"]

mod config;
mod handler;

use std::sync::Arc;

use anyhow::Context;
use aws_config::{Region, meta::region::RegionProviderChain};
use config::Config;
use handler::handler;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};
use pipeline_entrypoint::PipelineEntrypoint;
use sns_client::SNS;
use upload_pipeline::{
    domain::{models::S3UploadEvent, service::IngestionServiceImpl},
    outbound::sns_publisher::SnsNotificationPublisher,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    PipelineEntrypoint::default().init();

    tracing::trace!("initiating lambda");

    let config = Config::from_env().context("all necessary env vars should be available")?;

    tracing::trace!("initialized config");

    let region_provider = RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;
    let sns_client = SNS::new(aws_sdk_sns::Client::new(&aws_config));

    tracing::trace!("initialized sns client");

    let service = Arc::new(IngestionServiceImpl::new(SnsNotificationPublisher::new(
        sns_client,
        config.topic_arn,
    )));

    let func = service_fn(move |event: LambdaEvent<S3UploadEvent>| {
        let service = service.clone();
        async move { handler(service, event).await }
    });

    run(func).await
}
