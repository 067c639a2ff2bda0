use crate::chart::{padded_domain, render_chart, ChartSpec};
use crate::models::{DailyTotal, PaddedDomain, SalesTable};
use crate::selection::{filter_by_item, menu_item_names};
use crate::stats::aggregate_daily;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// Everything the page needs to redraw after a selection.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub item: String,
    pub series: Vec<DailyTotal>,
    pub domain: Option<PaddedDomain>,
    pub empty: bool,
    pub chart: ChartSpec,
}

/// A loaded table plus the selector options derived from it.
#[derive(Debug, Clone)]
pub struct Dashboard {
    table: Arc<SalesTable>,
    options: Vec<String>,
}

impl Dashboard {
    pub fn new(table: Arc<SalesTable>) -> Self {
        let options = menu_item_names(&table);
        Self { table, options }
    }

    pub fn table(&self) -> &Arc<SalesTable> {
        &self.table
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn default_item(&self) -> Option<&str> {
        self.options.first().map(String::as_str)
    }

    /// Filter, aggregate and chart the rows for `item`.
    pub fn on_selection_changed(&self, item: &str) -> DashboardView {
        let records = filter_by_item(&self.table, item);
        if records.is_empty() {
            warn!("no sales rows for menu item {item:?}");
        }

        let series = aggregate_daily(records);
        let domain = padded_domain(&series);
        let chart = render_chart(&series, item);

        DashboardView {
            item: item.to_string(),
            empty: series.is_empty(),
            series,
            domain,
            chart,
        }
    }
}
