use std::env::VarError;

use anyhow::Context;

/// The environment variable naming the topic every upload notification is published to
pub const TOPIC_ARN: &str = "TOPIC_ARN";

/// The configuration parameters for the lambda, read once at cold start.
#[derive(Debug, Clone)]
pub struct Config {
    /// the topic every upload notification is published to
    pub topic_arn: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Result<String, VarError>) -> anyhow::Result<Self> {
        let topic_arn = lookup(TOPIC_ARN).context("TOPIC_ARN must be provided")?;
        if topic_arn.trim().is_empty() {
            anyhow::bail!("TOPIC_ARN must not be empty");
        }
        Ok(Config { topic_arn })
    }
}
