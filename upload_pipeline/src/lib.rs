#![deny(missing_docs)]
//! This crate defines the upload notification pipeline following the hexagonal architecture pattern.
//!
//! An upload to object storage is turned into an [domain::models::UploadNotification] which is
//! published to a topic, and every queued notification is turned into a
//! [domain::models::ProcessedResult] written back to object storage.

pub mod domain;
pub mod outbound;
