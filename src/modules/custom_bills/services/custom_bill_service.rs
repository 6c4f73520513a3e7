use chrono::Utc;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::core::error::AppError;
use crate::core::Result;
use crate::modules::custom_bills::models::{CustomBill, CustomBillRequest};
use crate::modules::custom_bills::repositories::CustomBillRepository;

#[derive(Clone)]
pub struct CustomBillService {
    repo: CustomBillRepository,
}

impl CustomBillService {
    pub fn new(repo: CustomBillRepository) -> Self {
        Self { repo }
    }

    pub async fn list_bills(&self) -> Result<Vec<CustomBill>> {
        let records = self.repo.list().await?;
        Ok(records.iter().map(CustomBill::from_record).collect())
    }

    pub async fn add_bill(&self, request: CustomBillRequest) -> Result<CustomBill> {
        request.validate()?;

        let id = Uuid::new_v4();
        let mut record = request.to_record(&Utc::now().to_rfc3339());
        record.insert("id".to_string(), Value::String(id.to_string()));

        let stored = self.repo.insert(record).await?;
        info!("Custom bill added: id={}, amount_pending={}", id, request.amount_pending);
        Ok(CustomBill::from_record(&stored))
    }

    pub async fn update_bill(&self, id: Uuid, request: CustomBillRequest) -> Result<CustomBill> {
        request.validate()?;

        let id = id.to_string();
        let changes = request.to_record(&Utc::now().to_rfc3339());
        if self.repo.update(&id, changes.clone()).await? == 0 {
            return Err(AppError::not_found(format!("Custom bill {}", id)));
        }

        info!("Custom bill updated: id={}", id);
        let mut record = changes;
        record.insert("id".to_string(), Value::String(id));
        Ok(CustomBill::from_record(&record))
    }
}
