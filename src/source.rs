use crate::dashboard::Dashboard;
use crate::models::SalesTable;
use std::{io::ErrorKind, path::PathBuf, sync::Arc};
use tokio::{fs, sync::OnceCell};
use tracing::{error, info};

/// The backing table could not be turned into a `SalesTable`.
#[derive(Debug, thiserror::Error)]
pub enum DataUnavailable {
    #[error("table {table} does not exist at {}", path.display())]
    Missing { table: String, path: PathBuf },

    #[error("table {table} could not be read: {source}")]
    Unreadable {
        table: String,
        #[source]
        source: std::io::Error,
    },

    #[error("table {table} is not a valid sales table: {source}")]
    Malformed {
        table: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A fixed, pre-existing table stored as a JSON array of rows.
#[derive(Debug, Clone)]
pub struct TableSource {
    pub name: String,
    pub path: PathBuf,
}

impl TableSource {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Reads every row of the table, unfiltered.
    pub async fn query(&self) -> Result<SalesTable, DataUnavailable> {
        let bytes = fs::read(&self.path).await.map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                DataUnavailable::Missing {
                    table: self.name.clone(),
                    path: self.path.clone(),
                }
            } else {
                DataUnavailable::Unreadable {
                    table: self.name.clone(),
                    source: err,
                }
            }
        })?;

        serde_json::from_slice(&bytes).map_err(|source| DataUnavailable::Malformed {
            table: self.name.clone(),
            source,
        })
    }
}

/// Load-once holder for the session's table and the selector built from it.
///
/// The first successful query is kept for the life of the process. Failures
/// are returned to the caller and not cached.
#[derive(Debug)]
pub struct SalesCache {
    source: TableSource,
    dashboard: OnceCell<Arc<Dashboard>>,
}

impl SalesCache {
    pub fn new(source: TableSource) -> Self {
        Self {
            source,
            dashboard: OnceCell::new(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.source.name
    }

    #[cfg(test)]
    pub(crate) fn is_loaded(&self) -> bool {
        self.dashboard.initialized()
    }

    pub async fn load(&self) -> Result<Arc<SalesTable>, DataUnavailable> {
        let dashboard = self.dashboard().await?;
        Ok(Arc::clone(dashboard.table()))
    }

    pub async fn dashboard(&self) -> Result<Arc<Dashboard>, DataUnavailable> {
        let dashboard = self
            .dashboard
            .get_or_try_init(|| async {
                match self.source.query().await {
                    Ok(table) => {
                        let dashboard = Dashboard::new(Arc::new(table));
                        info!(
                            "loaded table {} ({} rows, {} menu items)",
                            self.source.name,
                            dashboard.table().len(),
                            dashboard.options().len()
                        );
                        Ok(Arc::new(dashboard))
                    }
                    Err(err) => {
                        error!("failed to load sales table: {err}");
                        Err(err)
                    }
                }
            })
            .await?;

        Ok(Arc::clone(dashboard))
    }
}
