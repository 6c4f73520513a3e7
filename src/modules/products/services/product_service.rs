use chrono::Utc;
use serde_json::Value;
use tracing::info;

use crate::core::error::AppError;
use crate::core::Result;
use crate::modules::products::models::{new_product_id, Product, ProductRequest};
use crate::modules::products::repositories::ProductRepository;

/// Service for catalog administration
#[derive(Clone)]
pub struct ProductService {
    repo: ProductRepository,
}

impl ProductService {
    pub fn new(repo: ProductRepository) -> Self {
        Self { repo }
    }

    pub async fn list_products(&self) -> Result<Vec<Product>> {
        let records = self.repo.list().await?;
        Ok(records.iter().map(Product::from_record).collect())
    }

    pub async fn get_product(&self, id: &str) -> Result<Product> {
        self.repo
            .find_by_id(id)
            .await?
            .map(|record| Product::from_record(&record))
            .ok_or_else(|| AppError::not_found(format!("Product {}", id)))
    }

    pub async fn create_product(&self, request: ProductRequest) -> Result<Product> {
        request.validate()?;

        let id = new_product_id();
        let mut record = request.to_record();
        record.insert("id".to_string(), Value::String(id.clone()));
        record.insert(
            "created_at".to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );

        let stored = self.repo.insert(record).await?;
        info!("Product created: id={}, name={}", id, request.name);
        Ok(Product::from_record(&stored))
    }

    pub async fn update_product(&self, id: &str, request: ProductRequest) -> Result<Product> {
        request.validate()?;

        if self.repo.update(id, request.to_record()).await? == 0 {
            return Err(AppError::not_found(format!("Product {}", id)));
        }

        info!("Product updated: id={}", id);
        self.get_product(id).await
    }

    pub async fn delete_product(&self, id: &str) -> Result<()> {
        if self.repo.delete(id).await? == 0 {
            return Err(AppError::not_found(format!("Product {}", id)));
        }

        info!("Product deleted: id={}", id);
        Ok(())
    }
}
