//! [ResultStore] backed by an s3 bucket

use s3_client::S3;

use crate::domain::ports::ResultStore;

/// Writes every processed result into a single s3 bucket
#[derive(Clone, Debug)]
pub struct S3ResultStore {
    client: S3,
    bucket: String,
}

impl S3ResultStore {
    /// create a store which writes into `bucket`
    pub fn new(client: S3, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

impl ResultStore for S3ResultStore {
    type Err = anyhow::Error;

    #[tracing::instrument(skip(self, body), fields(bucket = %self.bucket))]
    async fn put_object(&self, key: String, body: Vec<u8>) -> anyhow::Result<()> {
        self.client.put(&self.bucket, &key, &body).await?;
        tracing::debug!("wrote s3://{}/{}", self.bucket, key);
        Ok(())
    }
}
