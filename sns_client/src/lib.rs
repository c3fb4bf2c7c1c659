use anyhow::Context;

#[derive(Clone, Debug)]
pub struct SNS {
    inner: aws_sdk_sns::Client,
}

impl SNS {
    pub fn new(inner: aws_sdk_sns::Client) -> Self {
        Self { inner }
    }

    /// Publishes the message to the topic. The subject is used as the email subject line
    /// for email subscriptions and is carried in the notification envelope for the rest.
    #[tracing::instrument(skip(self, message))]
    pub async fn publish(
        &self,
        topic_arn: &str,
        subject: &str,
        message: &str,
    ) -> anyhow::Result<()> {
        let output = self
            .inner
            .publish()
            .topic_arn(topic_arn)
            .subject(subject)
            .message(message)
            .send()
            .await
            .context(format!("could not publish to topic {topic_arn}"))?;

        tracing::trace!(message_id=?output.message_id(), "published message");

        Ok(())
    }
}
