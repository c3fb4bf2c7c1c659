#![deny(missing_docs)]
//! This crate provides a typed utility for determining what environment a handler is deployed to

use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// The environment variable which names the deployment environment
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// The environment the handler is running in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Dev and or staging environment
    Develop,
    /// The handler is being invoked on a developer machine
    Local,
}

/// An error which can occur when constructing an [Environment]
#[derive(Debug, Error)]
pub enum EnvErr {
    /// the variable could not be read from the process environment
    #[error("An error occurred while reading envvar: {var_name}. Err: {err}")]
    Var {
        /// the name of the variable we tried to read
        var_name: &'static str,
        /// the underlying error
        err: std::env::VarError,
    },
    /// the input string value was not recognized as a valid env
    #[error("{0}")]
    InvalidValue(#[from] UnknownValue),
}

impl Environment {
    /// Attempt to construct a new [Environment] from the `ENVIRONMENT` variable
    #[tracing::instrument(err, level = tracing::Level::TRACE)]
    pub fn new_from_env() -> Result<Self, EnvErr> {
        let v = std::env::var(ENVIRONMENT_VAR).map_err(|err| EnvErr::Var {
            var_name: ENVIRONMENT_VAR,
            err,
        })?;
        Ok(Self::from_str(&v)?)
    }

    /// attempt to create a new [Environment] falling back to production if we fail to construct
    pub fn new_or_prod() -> Self {
        Self::new_from_env().unwrap_or(Environment::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "prod"),
            Environment::Develop => write!(f, "dev"),
            Environment::Local => write!(f, "local"),
        }
    }
}

/// Represents a value which cannot be converted into an [Environment]
#[derive(Debug, Error)]
#[error("Could not convert {0} into an environment value")]
pub struct UnknownValue(String);

impl FromStr for Environment {
    type Err = UnknownValue;

    fn from_str(environment: &str) -> Result<Self, UnknownValue> {
        match environment {
            "prod" => Ok(Environment::Production),
            "dev" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            s => Err(UnknownValue(s.to_string())),
        }
    }
}
