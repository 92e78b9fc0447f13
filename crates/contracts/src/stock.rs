//! Buffer-stock endpoints: search, detail, create/update/delete, stats.

use serde::{Deserialize, Serialize};

use crate::Record;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockSearchRequest {
    pub product_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockSearchResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub stock_records: Vec<Record>,
    #[serde(default)]
    pub total_count: i64,
    #[serde(default)]
    pub product_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockDetailResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub stock_record: Option<Record>,
    #[serde(default)]
    pub product_type: String,
}

/// Body of `POST /api/stock/create` and `PUT /api/stock/update`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockCreateRequest {
    pub product_type: String,
    pub serial_no: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub pn: String,
    #[serde(default)]
    pub sku: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockOperationResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub operation: String,
    #[serde(default)]
    pub product_type: String,
    #[serde(default)]
    pub serial_no: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockStatsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub stats: Option<Record>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_request_skips_empty_filters() {
        let req = StockSearchRequest {
            product_type: "VGA".into(),
            keyword: Some("M123".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["productType"], "VGA");
        assert_eq!(json["keyword"], "M123");
        assert!(json.get("serialNo").is_none());
        assert!(json.get("pn").is_none());
        assert!(json.get("sku").is_none());
    }

    #[test]
    fn detail_response_tolerates_missing_record() {
        let resp: StockDetailResponse =
            serde_json::from_str(r#"{"success": false, "message": "not found"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message, "not found");
        assert!(resp.stock_record.is_none());
    }

    #[test]
    fn create_request_serializes_camel_case() {
        let req = StockCreateRequest {
            product_type: "MB".into(),
            serial_no: "SN-1".into(),
            product_name: "Board".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["productType"], "MB");
        assert_eq!(json["serialNo"], "SN-1");
        assert_eq!(json["productName"], "Board");
    }

    #[test]
    fn operation_response_defaults_optional_fields() {
        let resp: StockOperationResponse =
            serde_json::from_str(r#"{"success": true, "operation": "delete"}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.operation, "delete");
        assert_eq!(resp.serial_no, "");
    }

    #[test]
    fn stats_response_keeps_stats_untyped() {
        let resp: StockStatsResponse = serde_json::from_str(
            r#"{"success": true, "stats": {"totalCount": 42, "byPn": {"P-1": 40}}}"#,
        )
        .unwrap();
        let stats = resp.stats.unwrap();
        assert_eq!(stats["totalCount"], 42);
        assert_eq!(stats["byPn"]["P-1"], 40);
    }

    #[test]
    fn stock_rows_preserve_backend_spelling() {
        // The legacy stock table spells the product-name column "Prodcut_name";
        // untyped rows carry it through unchanged.
        let resp: StockSearchResponse = serde_json::from_str(
            r#"{"success": true, "stockRecords": [{"Prodcut_name": "GPU", "Serial_No": "S1"}]}"#,
        )
        .unwrap();
        assert_eq!(resp.stock_records[0]["Prodcut_name"], "GPU");
    }
}
