mod put;

#[derive(Clone, Debug)]
pub struct S3 {
    inner: aws_sdk_s3::Client,
}

impl S3 {
    pub fn new(inner: aws_sdk_s3::Client) -> Self {
        Self { inner }
    }

    /// Puts the provided content into the bucket at the provided key, replacing any existing object.
    #[tracing::instrument(skip(self, content))]
    pub async fn put(&self, bucket: &str, key: &str, content: &[u8]) -> anyhow::Result<()> {
        put::put(&self.inner, bucket, key, content).await
    }
}
