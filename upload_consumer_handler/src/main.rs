#![recursion_limit = "256"]

mod config;
mod handler;

use std::sync::Arc;

use anyhow::Context;
use aws_lambda_events::event::sqs::SqsEvent;
use aws_config::{Region, meta::region::RegionProviderChain};
use config::Config;
use handler::handler;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};
use pipeline_entrypoint::PipelineEntrypoint;
use s3_client::S3;
use upload_pipeline::{
    domain::service::ConsumerServiceImpl,
    outbound::s3_result_store::S3ResultStore,
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
    let s3_client = S3::new(aws_sdk_s3::Client::new(&aws_config));

    tracing::trace!("initialized s3 client");

    let service = Arc::new(ConsumerServiceImpl::new(S3ResultStore::new(
        s3_client,
        config.output_bucket,
    )));

    let func = service_fn(move |event: LambdaEvent<SqsEvent>| {
        let service = service.clone();
        async move { handler(service, event).await }
    });

    run(func).await
}
