//! The domain of the pipeline: the record shapes, the ports the pipeline depends on and the
//! services which drive those ports

pub mod models;
pub mod ports;
pub mod service;
