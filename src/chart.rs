//! Vega-Lite description of the daily sales line chart.
//!
//! Only the field values are computed here; drawing happens in the browser
//! through `vega-embed`.

use crate::models::{DailyTotal, PaddedDomain};
use chrono::NaiveDate;
use serde::Serialize;

const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";
const CHART_HEIGHT: u32 = 500;
const DATE_FIELD: &str = "DATE";
const TOTAL_FIELD: &str = "ORDER_TOTAL";

#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    pub title: String,
    pub width: &'static str,
    pub height: u32,
    pub data: InlineData,
    pub mark: LineMark,
    pub encoding: Encoding,
}

#[derive(Debug, Clone, Serialize)]
pub struct InlineData {
    pub values: Vec<ChartRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartRow {
    #[serde(rename = "DATE")]
    pub date: NaiveDate,
    #[serde(rename = "ORDER_TOTAL")]
    pub order_total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LineMark {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub point: bool,
    pub tooltip: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Encoding {
    pub x: PositionChannel,
    pub y: PositionChannel,
}

#[derive(Debug, Clone, Serialize)]
pub struct PositionChannel {
    pub field: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
    pub axis: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scale {
    pub domain: [f64; 2],
}

/// Y range widened by half the min-max spread on each side.
///
/// Returns `None` for an empty series. A single point (or a flat series)
/// collapses to `[v, v]`; that zero-height range is passed through unchanged.
pub fn padded_domain(series: &[DailyTotal]) -> Option<PaddedDomain> {
    let mut totals = series.iter().map(|point| point.summed_total);
    let first = totals.next()?;
    let (min_value, max_value) = totals.fold((first, first), |(lo, hi), value| {
        (lo.min(value), hi.max(value))
    });

    let margin = (max_value - min_value) / 2.0;
    Some(PaddedDomain {
        min: min_value - margin,
        max: max_value + margin,
    })
}

pub fn chart_title(label: &str) -> String {
    format!("Total Daily Sales for Menu Item: {label}")
}

pub fn render_chart(series: &[DailyTotal], label: &str) -> ChartSpec {
    let scale = padded_domain(series).map(|domain| Scale {
        domain: [domain.min, domain.max],
    });

    ChartSpec {
        schema: VEGA_LITE_SCHEMA,
        title: chart_title(label),
        width: "container",
        height: CHART_HEIGHT,
        data: InlineData {
            values: series
                .iter()
                .map(|point| ChartRow {
                    date: point.date,
                    order_total: point.summed_total,
                })
                .collect(),
        },
        mark: LineMark {
            kind: "line",
            point: true,
            tooltip: true,
        },
        encoding: Encoding {
            x: PositionChannel {
                field: DATE_FIELD,
                kind: "temporal",
                title: "Date",
                axis: Axis {
                    title: "Date",
                    format: Some("%b %d"),
                },
                scale: None,
            },
            y: PositionChannel {
                field: TOTAL_FIELD,
                kind: "quantitative",
                title: "Total Daily Sales",
                axis: Axis {
                    title: "Total Sales ($)",
                    format: None,
                },
                scale,
            },
        },
    }
}
