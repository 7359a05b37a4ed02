use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::MySqlPool;
use tracing::info;

use crate::config::Config;
use crate::store::{EmployeeStore, LeaveStore, memory::MemoryStore, mysql::MySqlStore};

pub type Stores = (Arc<dyn LeaveStore>, Arc<dyn EmployeeStore>);

/// Picks the store backend from the configuration.
pub async fn init_store(config: &Config) -> Result<Stores> {
    match &config.database_url {
        Some(url) => {
            let pool = MySqlPool::connect(url)
                .await
                .context("Failed to connect to database")?;
            let store = Arc::new(MySqlStore::new(pool));
            store.ensure_schema().await?;
            info!("Using MySQL leave store");
            let leaves: Arc<dyn LeaveStore> = store.clone();
            let employees: Arc<dyn EmployeeStore> = store;
            Ok((leaves, employees))
        }
        None => {
            info!("DATABASE_URL not set, using in-memory leave store");
            let store = Arc::new(MemoryStore::new());
            let leaves: Arc<dyn LeaveStore> = store.clone();
            let employees: Arc<dyn EmployeeStore> = store;
            Ok((leaves, employees))
        }
    }
}
