//! RMA record endpoints: search, search-for-update, create, update, delete.

use serde::{Deserialize, Serialize};

use crate::Record;

/// Body of `POST /api/rma/search` and query of `GET /api/rma/search-for-update`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RmaSearchRequest {
    pub product_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RmaSearchResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub rma_records: Vec<Record>,
    #[serde(default)]
    pub total_count: i64,
    #[serde(default)]
    pub product_type: String,
}

/// Response of `GET /api/rma/search-for-update`: the matching RMA record
/// (if any) plus the candidate replacement stock rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePageResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub product_type: String,
    #[serde(default)]
    pub rma_record: Option<Record>,
    #[serde(default)]
    pub stock_records: Vec<Record>,
    #[serde(default)]
    pub stock_count: i64,
}

/// Editable RMA field set, shared by the create and update requests.
/// Dates are `YYYY-MM-DD` strings as produced by `<input type="date">`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RmaCreateRequest {
    pub product_type: String,
    pub serial_no: String,
    #[serde(default)]
    pub rma_no: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub pn: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub sell_ship_date: String,
    #[serde(default)]
    pub create_date: String,
    #[serde(default)]
    pub return_date: String,
    #[serde(default)]
    pub failure_desc: String,
    #[serde(default)]
    pub vi_damage_status: String,
    #[serde(default)]
    pub test_result_desc: String,
    #[serde(default)]
    pub replacement_sn_in_tw: String,
    #[serde(default)]
    pub replacement_pn_in_tw: String,
    #[serde(default)]
    pub replacement_sku_in_tw: String,
    #[serde(default)]
    pub replacement_sn_from_hk: String,
    #[serde(default)]
    pub replacement_pn_from_hk: String,
    #[serde(default)]
    pub replacement_sku_from_hk: String,
    #[serde(default)]
    pub rma_board_test_result: String,
    #[serde(default)]
    pub end_user_invoice_date: String,
    #[serde(default)]
    pub warranty_until: String,
    #[serde(default)]
    pub remark: String,
}

/// Body of `PUT /api/rma/update`. Setting `stock_serial_no_to_delete`
/// consumes the named stock row in the same transaction (the replacement
/// part leaves the buffer stock).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RmaUpdateWithStockRequest {
    #[serde(flatten)]
    pub record: RmaCreateRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_serial_no_to_delete: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RmaOperationResponse {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_request_skips_empty_filters() {
        let req = RmaSearchRequest {
            product_type: "VGA".into(),
            serial_no: Some("A1".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["productType"], "VGA");
        assert_eq!(json["serialNo"], "A1");
        assert!(json.get("pn").is_none());
        assert!(json.get("startDate").is_none());
    }

    #[test]
    fn search_response_tolerates_missing_fields() {
        let resp: RmaSearchResponse =
            serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(resp.success);
        assert!(resp.rma_records.is_empty());
        assert_eq!(resp.total_count, 0);
    }

    #[test]
    fn update_request_flattens_record_fields() {
        let req = RmaUpdateWithStockRequest {
            record: RmaCreateRequest {
                product_type: "VGA".into(),
                serial_no: "SN-1".into(),
                ..Default::default()
            },
            stock_serial_no_to_delete: Some("SN-2".into()),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["productType"], "VGA");
        assert_eq!(json["serialNo"], "SN-1");
        assert_eq!(json["stockSerialNoToDelete"], "SN-2");
    }

    #[test]
    fn update_page_response_keeps_records_untyped() {
        let resp: UpdatePageResponse = serde_json::from_str(
            r#"{
                "success": true,
                "message": "ok",
                "rmaRecord": {"Serial_No": "A1", "Rma_No": "R-9"},
                "stockRecords": [{"Serial_No": "B2", "PN": "P-1"}],
                "stockCount": 1
            }"#,
        )
        .unwrap();
        let record = resp.rma_record.unwrap();
        assert_eq!(record["Serial_No"], "A1");
        assert_eq!(resp.stock_records[0]["PN"], "P-1");
    }
}
