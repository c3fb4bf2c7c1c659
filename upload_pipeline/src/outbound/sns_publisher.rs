//! [NotificationPublisher] backed by an sns topic

use sns_client::SNS;

use crate::domain::ports::NotificationPublisher;

/// Publishes every notification to a single sns topic
#[derive(Clone, Debug)]
pub struct SnsNotificationPublisher {
    client: SNS,
    topic_arn: String,
}

impl SnsNotificationPublisher {
    /// create a publisher which targets `topic_arn`
    pub fn new(client: SNS, topic_arn: impl Into<String>) -> Self {
        Self {
            client,
            topic_arn: topic_arn.into(),
        }
    }
}

impl NotificationPublisher for SnsNotificationPublisher {
    type Err = anyhow::Error;

    #[tracing::instrument(skip(self, message), fields(topic_arn = %self.topic_arn))]
    async fn publish(&self, subject: String, message: String) -> anyhow::Result<()> {
        self.client
            .publish(&self.topic_arn, &subject, &message)
            .await
    }
}
