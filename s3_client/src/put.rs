use anyhow::Context;
use aws_sdk_s3 as s3;

#[tracing::instrument(skip(client, content), fields(content_length = content.len()))]
pub(crate) async fn put(
    client: &s3::Client,
    bucket: &str,
    key: &str,
    content: &[u8],
) -> anyhow::Result<()> {
    let body = s3::primitives::ByteStream::from(content.to_vec());
    client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(body)
        .send()
        .await
        .context(format!("could not put item {key} into bucket {bucket}"))?;
    Ok(())
}
