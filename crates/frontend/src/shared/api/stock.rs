use contracts::stock::{
    StockCreateRequest, StockDetailResponse, StockOperationResponse, StockSearchRequest,
    StockSearchResponse, StockStatsResponse,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Search stock records by filter
pub async fn search(request: &StockSearchRequest) -> Result<StockSearchResponse, String> {
    let response = Request::post(&format!("{}/api/stock/search", api_base()))
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

/// Keyword search across serial, P/N and SKU for a product line
pub async fn search_by_keyword(
    product_type: &str,
    keyword: &str,
) -> Result<StockSearchResponse, String> {
    let response = Request::get(&format!(
        "{}/api/stock/{}/search-keyword?keyword={}",
        api_base(),
        urlencoding::encode(product_type),
        urlencoding::encode(keyword)
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

/// Fetch one stock record
pub async fn detail(product_type: &str, serial_no: &str) -> Result<StockDetailResponse, String> {
    let response = Request::get(&format!(
        "{}/api/stock/{}/detail/{}",
        api_base(),
        urlencoding::encode(product_type),
        urlencoding::encode(serial_no)
    ))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch stock detail: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a stock record
pub async fn create(request: &StockCreateRequest) -> Result<StockOperationResponse, String> {
    let response = Request::post(&format!("{}/api/stock/create", api_base()))
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

/// Update a stock record
pub async fn update(request: &StockCreateRequest) -> Result<StockOperationResponse, String> {
    let response = Request::put(&format!("{}/api/stock/update", api_base()))
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

/// Delete a stock record
pub async fn delete(product_type: &str, serial_no: &str) -> Result<StockOperationResponse, String> {
    let response = Request::delete(&format!(
        "{}/api/stock/{}/{}",
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

/// Fetch stock statistics for a product line
pub async fn stats(product_type: &str) -> Result<StockStatsResponse, String> {
    let response = Request::get(&format!(
        "{}/api/stock/{}/stats",
        api_base(),
        urlencoding::encode(product_type)
    ))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch stats: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
