use std::sync::Arc;

use aws_lambda_events::event::sqs::SqsEvent;
use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};
use upload_pipeline::domain::{
    models::InvocationResponse,
    ports::ConsumerService,
};

/// Processes the sqs event, writing a processed result for every queued notification.
/// The whole batch is redelivered if any record fails.
#[tracing::instrument(skip_all, fields(request_id = %event.context.request_id))]
pub async fn handler<S: ConsumerService>(
    service: Arc<S>,
    event: LambdaEvent<SqsEvent>,
) -> Result<InvocationResponse, Error> {
    tracing::debug!(event=?event.payload, "received event");

    let response = service.consume(event.payload).await?;

    Ok(response)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use lambda_runtime::Context;
    use serde_json::json;
    use upload_pipeline::domain::models::PipelineErr;

    use super::*;

    #[derive(Default)]
    struct RecordingConsumer {
        fail: bool,
        seen: Mutex<Vec<SqsEvent>>,
    }

    impl ConsumerService for RecordingConsumer {
        async fn consume(&self, event: SqsEvent) -> Result<InvocationResponse, PipelineErr> {
            self.seen.lock().unwrap().push(event);
            if self.fail {
                return Err(PipelineErr::MissingField {
                    index: 2,
                    field: "body",
                });
            }
            Ok(InvocationResponse::processed())
        }
    }

    fn event() -> SqsEvent {
        let body = json!({ "Message": r#"{"bucket":"up","key":"a/b.txt","size":42}"# });
        serde_json::from_value(json!({
            "Records": [{ "messageId": "1", "body": body.to_string() }]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn it_returns_processed_once_the_event_is_consumed() {
        let service = Arc::new(RecordingConsumer::default());

        let response = handler(service.clone(), LambdaEvent::new(event(), Context::default()))
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({ "status": "processed" })
        );
        assert_eq!(*service.seen.lock().unwrap(), [event()]);
    }

    #[tokio::test]
    async fn it_fails_the_invocation_when_consumption_fails() {
        let service = Arc::new(RecordingConsumer {
            fail: true,
            ..Default::default()
        });

        let err = handler(service, LambdaEvent::new(event(), Context::default()))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "record 2 is missing required field body");
    }
}
