use std::sync::Arc;

use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};
use upload_pipeline::domain::{
    models::{InvocationResponse, S3UploadEvent},
    ports::IngestionService,
};

/// Publishes a notification for every upload record in the event.
/// Any failing record fails the whole invocation.
#[tracing::instrument(skip_all, fields(request_id = %event.context.request_id))]
pub async fn handler<S: IngestionService>(
    service: Arc<S>,
    event: LambdaEvent<S3UploadEvent>,
) -> Result<InvocationResponse, Error> {
    tracing::debug!(event=?event.payload, "received event");

    let response = service.ingest(event.payload).await?;

    Ok(response)
}
