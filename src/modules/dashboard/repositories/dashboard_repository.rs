use std::sync::Arc;

use crate::core::traits::{collections, Filter, Record, RecordStore};
use crate::core::Result;
use crate::modules::users::models::CUSTOMER_ROLE;

#[derive(Clone)]
pub struct DashboardRepository {
    store: Arc<dyn RecordStore>,
}

impl DashboardRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// All orders, newest first
    pub async fn orders(&self) -> Result<Vec<Record>> {
        self.store
            .select(collections::ORDERS, &Filter::new().order_desc("date"))
            .await
    }

    pub async fn customer_count(&self) -> Result<usize> {
        let customers = self
            .store
            .select(
                collections::PROFILES,
                &Filter::new().eq("role", CUSTOMER_ROLE),
            )
            .await?;
        Ok(customers.len())
    }
}
