use crate::config::Config;
use crate::source::{SalesCache, TableSource};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub title: Arc<str>,
    pub sales: Arc<SalesCache>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let source = TableSource::new(config.table_name.clone(), config.table_path.clone());
        Self {
            title: Arc::from(config.title.as_str()),
            sales: Arc::new(SalesCache::new(source)),
        }
    }
}
