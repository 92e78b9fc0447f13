//! Shared wire types for the Sapphire RMA console.
//!
//! Mirrors the remote API's JSON contract. RMA and stock rows travel as
//! untyped JSON objects (the backend assembles them from per-product-line
//! tables whose column sets differ), so record payloads are
//! `serde_json::Map` rather than structs.

pub mod batch;
pub mod rma;
pub mod stock;
pub mod upload;

/// An untyped record as returned by the search endpoints.
pub type Record = serde_json::Map<String, serde_json::Value>;
