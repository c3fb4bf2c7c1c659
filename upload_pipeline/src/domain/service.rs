//! The services which turn inbound events into calls on the outbound ports.
//! Records are handled strictly in order and the first failing record aborts the invocation,
//! side effects of the records before it are kept.

use aws_lambda_events::event::sqs::{SqsEvent, SqsMessage};

use crate::domain::{
    models::{
        InvocationResponse, PipelineErr, ProcessedResult, S3UploadEvent, UPLOAD_SUBJECT,
        UploadNotification,
    },
    ports::{ConsumerService, IngestionService, NotificationPublisher, ResultStore},
};


/// struct which handles ingestion with an abstracted publisher for mocking
pub struct IngestionServiceImpl<P> {
    /// the interface for publishing to the topic
    publisher: P,
}

impl<P> IngestionServiceImpl<P>
where
    P: NotificationPublisher,
    anyhow::Error: From<P::Err>,
{
    /// create a new ingestion service which publishes through `publisher`
    pub fn new(publisher: P) -> Self {
        IngestionServiceImpl { publisher }
    }

    async fn ingest_record(&self, index: usize, record: serde_json::Value) -> Result<(), PipelineErr> {
        let notification = UploadNotification::from_record(index, record)?;
        let message = notification.to_message()?;

        self.publisher
            .publish(UPLOAD_SUBJECT.to_string(), message)
            .await
            .map_err(|err| PipelineErr::Publish {
                index,
                source: anyhow::Error::from(err),
            })?;

        tracing::info!(
            bucket = %notification.bucket,
            key = %notification.key,
            size = notification.size,
            "published notification"
        );

        Ok(())
    }
}

impl<P> IngestionService for IngestionServiceImpl<P>
where
    P: NotificationPublisher,
    anyhow::Error: From<P::Err>,
{
    #[tracing::instrument(skip_all, fields(record_count = event.records.len()))]
    async fn ingest(&self, event: S3UploadEvent) -> Result<InvocationResponse, PipelineErr> {
        for (index, record) in event.records.into_iter().enumerate() {
            self.ingest_record(index, record)
                .await
                .inspect_err(|err| tracing::error!(error=?err, index, "failed to ingest record"))?;
        }

        Ok(InvocationResponse::ok())
    }
}

/// struct which handles consumption with an abstracted result store for mocking
pub struct ConsumerServiceImpl<S> {
    /// the interface for writing processed results
    store: S,
}

impl<S> ConsumerServiceImpl<S>
where
    S: ResultStore,
    anyhow::Error: From<S::Err>,
{
    /// create a new consumer service which writes through `store`
    pub fn new(store: S) -> Self {
        ConsumerServiceImpl { store }
    }

    async fn consume_record(&self, index: usize, record: &SqsMessage) -> Result<(), PipelineErr> {
        let notification = UploadNotification::from_queue_record(index, record)?;
        let result = ProcessedResult::from(notification);
        let key = result.key();
        let body = result.to_body()?;

        self.store
            .put_object(key.clone(), body)
            .await
            .map_err(|err| PipelineErr::Store {
                index,
                source: anyhow::Error::from(err),
            })?;

        tracing::info!(
            key = %key,
            message_id = ?record.message_id,
            "wrote processed result"
        );

        Ok(())
    }
}

impl<S> ConsumerService for ConsumerServiceImpl<S>
where
    S: ResultStore,
    anyhow::Error: From<S::Err>,
{
    #[tracing::instrument(skip_all, fields(record_count = event.records.len()))]
    async fn consume(&self, event: SqsEvent) -> Result<InvocationResponse, PipelineErr> {
        for (index, record) in event.records.iter().enumerate() {
            self.consume_record(index, record)
                .await
                .inspect_err(|err| {
                    tracing::error!(
                        error=?err,
                        index,
                        message_id=?record.message_id,
                        "failed to consume record"
                    )
                })?;
        }

        Ok(InvocationResponse::processed())
    }
}
