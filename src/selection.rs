use crate::models::{SalesRecord, SalesTable};
use std::collections::HashSet;

/// Distinct menu item names in the order they first appear in the table.
pub fn menu_item_names(table: &SalesTable) -> Vec<String> {
    let mut seen = HashSet::new();
    table
        .records()
        .iter()
        .filter(|record| seen.insert(record.menu_item_name.as_str()))
        .map(|record| record.menu_item_name.clone())
        .collect()
}

/// Records for `item`, in table order. Unknown items yield an empty vec.
pub fn filter_by_item<'a>(table: &'a SalesTable, item: &str) -> Vec<&'a SalesRecord> {
    table
        .records()
        .iter()
        .filter(|record| record.menu_item_name == item)
        .collect()
}
