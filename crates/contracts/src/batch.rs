//! Batch-processing endpoints: execute, product lines, health.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchExecuteRequest {
    pub product_type: String,
}

/// Per-table counters reported by a batch run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchStats {
    #[serde(default)]
    pub inserted: i64,
    #[serde(default)]
    pub updated: i64,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub product_type: String,
    #[serde(default)]
    pub rma_stats: Option<BatchStats>,
    #[serde(default)]
    pub stock_stats: Option<BatchStats>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InitProductLinesResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub product_lines: Vec<String>,
    #[serde(default)]
    pub count: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchHealthResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub product_line_count: i64,
    #[serde(default)]
    pub timestamp: i64,
}

impl BatchHealthResponse {
    /// Server-side check time; `timestamp` is epoch milliseconds.
    pub fn checked_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp_millis(self.timestamp)
    }
}

impl BatchResult {
    /// Total rows touched across both tables, for the summary line.
    pub fn total_processed(&self) -> i64 {
        self.rma_stats.as_ref().map_or(0, |s| s.total)
            + self.stock_stats.as_ref().map_or(0, |s| s.total)
    }

    pub fn has_detailed_stats(&self) -> bool {
        self.success && (self.rma_stats.is_some() || self.stock_stats.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_processed_sums_both_tables() {
        let result = BatchResult {
            success: true,
            rma_stats: Some(BatchStats {
                total: 10,
                ..Default::default()
            }),
            stock_stats: Some(BatchStats {
                total: 5,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(result.total_processed(), 15);
        assert!(result.has_detailed_stats());
    }

    #[test]
    fn health_timestamp_converts_from_millis() {
        let health = BatchHealthResponse {
            status: "UP".into(),
            timestamp: 1_700_000_000_000,
            ..Default::default()
        };
        let checked_at = health.checked_at().unwrap();
        assert_eq!(checked_at.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn failed_run_has_no_detailed_stats() {
        let result: BatchResult =
            serde_json::from_str(r#"{"success": false, "message": "no files"}"#).unwrap();
        assert!(!result.has_detailed_stats());
        assert_eq!(result.total_processed(), 0);
    }
}
