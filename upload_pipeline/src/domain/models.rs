//! The record shapes which flow through the pipeline

use aws_lambda_events::event::sqs::SqsMessage;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// The subject line attached to every published [UploadNotification]
pub const UPLOAD_SUBJECT: &str = "New file uploaded";

/// The folder every [ProcessedResult] is written under
pub const PROCESSED_PREFIX: &str = "processed/";

// see: https://docs.aws.amazon.com/AmazonS3/latest/userguide/notification-content-structure.html
/// The storage upload event delivered to the ingestion handler.
/// Records stay raw until their turn so a malformed record fails at its own position.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct S3UploadEvent {
    /// the raw upload records, in delivery order
    #[serde(rename = "Records", default)]
    pub records: Vec<serde_json::Value>,
}

/// A single upload record within a [S3UploadEvent]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct S3UploadRecord {
    /// the storage object descriptor
    pub s3: Option<S3Entity>,
}

/// The storage object descriptor of a [S3UploadRecord]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct S3Entity {
    /// the bucket the object was written to
    pub bucket: Option<S3Bucket>,
    /// the object which was written
    pub object: Option<S3Object>,
}

/// The bucket portion of a [S3Entity]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct S3Bucket {
    /// the bucket name
    pub name: Option<String>,
}

/// The object portion of a [S3Entity]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct S3Object {
    /// the object key
    pub key: Option<String>,
    /// the object size in bytes
    pub size: Option<u64>,
}

/// The topic notification the queue wraps around each published message
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopicEnvelope {
    /// the published message, a serialized [UploadNotification]
    #[serde(rename = "Message")]
    pub message: String,
}

/// The notification published for every uploaded object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadNotification {
    /// the bucket the object was uploaded to
    pub bucket: String,
    /// the key of the uploaded object
    pub key: String,
    /// the size of the uploaded object in bytes
    #[serde(default, deserialize_with = "null_as_zero")]
    pub size: u64,
}

/// a null size reads as 0, the same as an absent one
fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or_default())
}

/// The artifact written for every consumed [UploadNotification]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedResult {
    /// the bucket the original object was uploaded to
    pub original_bucket: String,
    /// the key of the original object
    pub original_key: String,
    /// the size of the original object in bytes
    pub size: u64,
    /// always true
    pub processed: bool,
}

/// The status returned by a handler once every record in the invocation succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvocationStatus {
    /// every upload record was published
    Ok,
    /// every queued message was written
    Processed,
}

/// The payload returned from a successful invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResponse {
    /// the outcome of the invocation
    pub status: InvocationStatus,
}

impl InvocationResponse {
    /// the ingestion handler's success response
    pub fn ok() -> Self {
        Self {
            status: InvocationStatus::Ok,
        }
    }

    /// the consumer handler's success response
    pub fn processed() -> Self {
        Self {
            status: InvocationStatus::Processed,
        }
    }
}

/// The errors which abort an invocation. `index` is the zero based position of the failing record
#[derive(Debug, Error)]
pub enum PipelineErr {
    /// a field the record must carry was absent
    #[error("record {index} is missing required field {field}")]
    MissingField {
        /// position of the record in the event
        index: usize,
        /// dotted path of the missing field
        field: &'static str,
    },
    /// the record, or one of the serialized layers of a queued message, was not valid
    #[error("record {index} could not be decoded from its {layer}")]
    Decode {
        /// position of the record in the event
        index: usize,
        /// which serialized layer failed
        layer: &'static str,
        /// the underlying decode error
        #[source]
        source: serde_json::Error,
    },
    /// an outbound payload could not be serialized
    #[error("could not encode outbound payload")]
    Encode(#[from] serde_json::Error),
    /// the notification could not be published
    #[error("failed to publish notification for record {index}")]
    Publish {
        /// position of the record in the event
        index: usize,
        /// the error reported by the publisher
        #[source]
        source: anyhow::Error,
    },
    /// the processed result could not be written
    #[error("failed to store processed result for record {index}")]
    Store {
        /// position of the record in the event
        index: usize,
        /// the error reported by the store
        #[source]
        source: anyhow::Error,
    },
}

impl UploadNotification {
    /// Builds the notification for the upload record at `index`.
    /// `s3.bucket.name` and `s3.object.key` are required, a missing size is treated as 0.
    pub fn from_record(index: usize, record: serde_json::Value) -> Result<Self, PipelineErr> {
        let missing = |field| PipelineErr::MissingField { index, field };

        let record: S3UploadRecord =
            serde_json::from_value(record).map_err(|source| PipelineErr::Decode {
                index,
                layer: "upload record",
                source,
            })?;

        let s3 = record.s3.ok_or_else(|| missing("s3"))?;
        let bucket = s3
            .bucket
            .and_then(|bucket| bucket.name)
            .ok_or_else(|| missing("s3.bucket.name"))?;
        let object = s3.object.ok_or_else(|| missing("s3.object"))?;
        let key = object.key.ok_or_else(|| missing("s3.object.key"))?;

        Ok(Self {
            bucket,
            key,
            size: object.size.unwrap_or_default(),
        })
    }

    /// Recovers the notification from the queued message at `index`.
    /// The body is a topic envelope whose `Message` is the serialized notification.
    pub fn from_queue_record(index: usize, record: &SqsMessage) -> Result<Self, PipelineErr> {
        let body = record
            .body
            .as_deref()
            .ok_or(PipelineErr::MissingField {
                index,
                field: "body",
            })?;

        let envelope: TopicEnvelope =
            serde_json::from_str(body).map_err(|source| PipelineErr::Decode {
                index,
                layer: "queue body",
                source,
            })?;

        serde_json::from_str(&envelope.message).map_err(|source| PipelineErr::Decode {
            index,
            layer: "topic message",
            source,
        })
    }

    /// The message body published to the topic
    pub fn to_message(&self) -> Result<String, PipelineErr> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<UploadNotification> for ProcessedResult {
    fn from(notification: UploadNotification) -> Self {
        Self {
            original_bucket: notification.bucket,
            original_key: notification.key,
            size: notification.size,
            processed: true,
        }
    }
}

impl ProcessedResult {
    /// The key a result for `original_key` is written to. The key is used verbatim.
    pub fn result_key(original_key: &str) -> String {
        format!("{PROCESSED_PREFIX}{original_key}.json")
    }

    /// The key this result is written to
    pub fn key(&self) -> String {
        Self::result_key(&self.original_key)
    }

    /// The object body written to storage
    pub fn to_body(&self) -> Result<Vec<u8>, PipelineErr> {
        Ok(serde_json::to_vec(self)?)
    }
}
