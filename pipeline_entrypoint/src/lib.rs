#![deny(missing_docs)]
//! This crate provides the initialization process shared by the pipeline's lambda entrypoints.
//! This is used to provide consistent behaviour with e.g. tracing configurations

use pipeline_env::Environment;
use tracing_subscriber::EnvFilter;

/// the environment a binary is initialized for, which selects its tracing output
#[derive(Debug)]
pub struct PipelineEntrypoint {
    env: Environment,
}

impl Default for PipelineEntrypoint {
    fn default() -> Self {
        PipelineEntrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

/// sentinel struct which guarantees that we called [PipelineEntrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(());

impl PipelineEntrypoint {
    /// consume self, initialize this binary, and return a proof that it was initialized [InitializedEntrypoint]
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            Environment::Production | Environment::Develop => {
                // cloudwatch timestamps every line on ingest
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .without_time()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        tracing::debug!(environment = %self.env, "initialized entrypoint");

        InitializedEntrypoint(())
    }
}
