//! This module defines all of the ports that the pipeline domain requires

use aws_lambda_events::event::sqs::SqsEvent;

use crate::domain::models::{InvocationResponse, PipelineErr, S3UploadEvent};

/// Trait for broadcasting a message to every subscriber of a topic.
/// The implementation owns the topic it publishes to.
#[cfg_attr(test, mockall::automock(type Err = anyhow::Error;))]
pub trait NotificationPublisher: Send + Sync + 'static {
    /// The error type that can occur
    type Err: Send;

    /// publish a single message with the given subject line
    fn publish(
        &self,
        subject: String,
        message: String,
    ) -> impl Future<Output = Result<(), Self::Err>> + Send;
}

/// Trait for writing objects into the output storage location.
/// The implementation owns the bucket it writes to.
#[cfg_attr(test, mockall::automock(type Err = anyhow::Error;))]
pub trait ResultStore: Send + Sync + 'static {
    /// The error type that can occur
    type Err: Send;

    /// write `body` at `key`, replacing any existing object
    fn put_object(
        &self,
        key: String,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<(), Self::Err>> + Send;
}

/// The inbound port of the ingestion handler
pub trait IngestionService: Send + Sync + 'static {
    /// publish one notification per upload record, in order
    fn ingest(
        &self,
        event: S3UploadEvent,
    ) -> impl Future<Output = Result<InvocationResponse, PipelineErr>> + Send;
}

/// The inbound port of the consumer handler
pub trait ConsumerService: Send + Sync + 'static {
    /// write one processed result per queued message, in order
    fn consume(
        &self,
        event: SqsEvent,
    ) -> impl Future<Output = Result<InvocationResponse, PipelineErr>> + Send;
}
