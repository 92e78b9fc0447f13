use contracts::rma::{
    RmaCreateRequest, RmaOperationResponse, RmaSearchRequest, RmaSearchResponse,
    RmaUpdateWithStockRequest, UpdatePageResponse,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Fetch the supported product lines
pub async fn fetch_product_lines() -> Result<Vec<String>, String> {
    let response = Request::get(&format!("{}/api/rma/product-lines", api_base()))
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

/// Search RMA records by filter
pub async fn search(request: &RmaSearchRequest) -> Result<RmaSearchResponse, String> {
    let response = Request::post(&format!("{}/api/rma/search", api_base()))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Search failed: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch a record plus its candidate replacement stock rows
pub async fn search_for_update(request: &RmaSearchRequest) -> Result<UpdatePageResponse, String> {
    let query =
        serde_qs::to_string(request).map_err(|e| format!("Failed to build query: {}", e))?;

    let response = Request::get(&format!(
        "{}/api/rma/search-for-update?{}",
        api_base(),
        query
    ))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Search failed: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a new RMA record
pub async fn create(request: &RmaCreateRequest) -> Result<RmaOperationResponse, String> {
    let response = Request::post(&format!("{}/api/rma/create", api_base()))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Create failed: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Update an RMA record, optionally consuming a stock row
pub async fn update(request: &RmaUpdateWithStockRequest) -> Result<RmaOperationResponse, String> {
    let response = Request::put(&format!("{}/api/rma/update", api_base()))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Update failed: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete an RMA record
pub async fn delete(product_type: &str, serial_no: &str) -> Result<RmaOperationResponse, String> {
    let response = Request::delete(&format!(
        "{}/api/rma/{}/{}",
        api_base(),
        urlencoding::encode(product_type),
        urlencoding::encode(serial_no)
    ))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Delete failed: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
