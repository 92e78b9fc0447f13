use contracts::batch::{
    BatchExecuteRequest, BatchHealthResponse, BatchResult, InitProductLinesResponse,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Fetch the product lines the batch importer knows about
pub async fn fetch_product_lines() -> Result<Vec<String>, String> {
    let response = Request::get(&format!("{}/api/batch/product-lines", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch product lines: {}", response.status()));
    }

    response
        .json::<Vec<String>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Run the Excel import batch for one product line
pub async fn execute(product_type: &str) -> Result<BatchResult, String> {
    let request = BatchExecuteRequest {
        product_type: product_type.to_string(),
    };

    let response = Request::post(&format!("{}/api/batch/execute", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    // The batch endpoint reports failures inside BatchResult, with the
    // same body shape on error statuses.
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Seed the product-line table from the bundled defaults
pub async fn init_product_lines() -> Result<InitProductLinesResponse, String> {
    let response = Request::post(&format!("{}/api/batch/init-product-lines", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Init failed: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Batch service health check
pub async fn health() -> Result<BatchHealthResponse, String> {
    let response = Request::get(&format!("{}/api/batch/health", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Health check failed: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
