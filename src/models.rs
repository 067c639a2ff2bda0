use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the backing sales table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    #[serde(rename = "MENU_ITEM_NAME")]
    pub menu_item_name: String,
    #[serde(rename = "DATE")]
    pub date: NaiveDate,
    #[serde(rename = "ORDER_TOTAL")]
    pub order_total: f64,
}

/// The full table for one reporting period. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalesTable {
    records: Vec<SalesRecord>,
}

impl SalesTable {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub summed_total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaddedDomain {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    pub item: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub table: String,
    pub items: Vec<String>,
}
