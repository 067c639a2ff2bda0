use crate::models::{DailyTotal, SalesRecord};
use std::collections::BTreeMap;

/// Sums `order_total` per calendar day, ascending by date.
pub fn aggregate_daily<'a, I>(records: I) -> Vec<DailyTotal>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let mut days = BTreeMap::new();
    for record in records {
        *days.entry(record.date).or_insert(0.0) += record.order_total;
    }

    days.into_iter()
        .map(|(date, summed_total)| DailyTotal { date, summed_total })
        .collect()
}
