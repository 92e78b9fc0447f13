//! HTTP client functions for the backend REST API.

pub mod batch;
pub mod rma;
pub mod stock;
pub mod upload;
