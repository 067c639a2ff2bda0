use std::{env, path::PathBuf};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TABLE_NAME: &str = "zero_to_snowflake.analytics.japan_menu_item_sales_feb_2022";
pub const DEFAULT_TABLE_PATH: &str = "data/japan_menu_item_sales_feb_2022.json";
pub const DEFAULT_TITLE: &str = "Menu Item Sales in Japan for February 2022";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub table_name: String,
    pub table_path: PathBuf,
    pub title: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            table_name: lookup("SALES_TABLE_NAME").unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            table_path: lookup("SALES_TABLE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TABLE_PATH)),
            title: lookup("DASHBOARD_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        }
    }
}
