//! This module defines concrete implementations of the required outbound ports
//! Outbound ports are things in the outside world that we reach out to

#[cfg(feature = "s3")]
pub mod s3_result_store;

#[cfg(feature = "sns")]
pub mod sns_publisher;
