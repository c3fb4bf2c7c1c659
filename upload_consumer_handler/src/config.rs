use std::env::VarError;

use anyhow::Context;

/// The environment variable naming the bucket processed results are written to
pub const OUTPUT_BUCKET: &str = "OUTPUT_BUCKET";

/// The configuration parameters for the lambda, read once at cold start.
#[derive(Debug, Clone)]
pub struct Config {
    /// the bucket processed results are written to
    pub output_bucket: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Result<String, VarError>) -> anyhow::Result<Self> {
        let output_bucket = lookup(OUTPUT_BUCKET).context("OUTPUT_BUCKET must be provided")?;
        if output_bucket.trim().is_empty() {
            anyhow::bail!("OUTPUT_BUCKET must not be empty");
        }
        Ok(Config { output_bucket })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_reads_the_output_bucket() {
        let config = Config::from_lookup(|name| match name {
            OUTPUT_BUCKET => Ok("processed-results".to_string()),
            _ => Err(VarError::NotPresent),
        })
        .unwrap();

        assert_eq!(config.output_bucket, "processed-results");
    }

    #[test]
    fn it_fails_without_the_output_bucket() {
        let err = Config::from_lookup(|_| Err(VarError::NotPresent)).unwrap_err();
        assert_eq!(err.to_string(), "OUTPUT_BUCKET must be provided");
    }

    #[test]
    fn it_fails_on_an_empty_output_bucket() {
        let err = Config::from_lookup(|_| Ok("  ".to_string())).unwrap_err();
        assert_eq!(err.to_string(), "OUTPUT_BUCKET must not be empty");
    }
}
