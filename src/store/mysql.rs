// MySQL-backed record store
//
// Every collection lives in the `records` table as one JSON document per row.
// Field predicates are evaluated with JSON_EXTRACT so callers can query any
// top-level key without a per-collection schema.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::{MySql, MySqlPool, QueryBuilder, Row};

use super::{ensure_id, merge_into};
use crate::core::traits::{Condition, Filter, Record, RecordStore};
use crate::core::{AppError, Result};

/// Record store over a MySQL connection pool
#[derive(Clone)]
pub struct MySqlRecordStore {
    pool: MySqlPool,
}

impl MySqlRecordStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Apply pending migrations from `migrations/`
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::store(format!("Failed to run migrations: {}", e)))
    }

    async fn fetch_rows(&self, collection: &str, filter: &Filter) -> Result<Vec<(String, Record)>> {
        let mut query: QueryBuilder<MySql> =
            QueryBuilder::new("SELECT id, body FROM records WHERE collection = ");
        query.push_bind(collection.to_string());
        push_conditions(&mut query, filter)?;

        if let Some(order) = &filter.order_by {
            query.push(" ORDER BY JSON_EXTRACT(body, ");
            query.push_bind(json_path(&order.field)?);
            query.push(if order.descending { ") DESC" } else { ") ASC" });
        }

        if let Some(limit) = filter.limit {
            query.push(" LIMIT ");
            query.push_bind(limit as u64);
        }

        let rows = query.build().fetch_all(&self.pool).await?;

        rows.into_iter()
            .map(|row| {
                let id: String = row.try_get("id")?;
                let Json(body): Json<Value> = row.try_get("body")?;
                match body {
                    Value::Object(record) => Ok((id, record)),
                    other => Err(AppError::store(format!(
                        "Record {} in {} is not an object: {}",
                        id, collection, other
                    ))),
                }
            })
            .collect()
    }

    async fn write_body(&self, collection: &str, id: &str, record: &Record) -> Result<()> {
        sqlx::query("UPDATE records SET body = ? WHERE collection = ? AND id = ?")
            .bind(Json(Value::Object(record.clone())))
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl RecordStore for MySqlRecordStore {
    async fn select(&self, collection: &str, filter: &Filter) -> Result<Vec<Record>> {
        Ok(self
            .fetch_rows(collection, filter)
            .await?
            .into_iter()
            .map(|(_, record)| record)
            .collect())
    }

    async fn insert(&self, collection: &str, mut record: Record) -> Result<Record> {
        let id = ensure_id(&mut record);

        sqlx::query("INSERT INTO records (collection, id, body) VALUES (?, ?, ?)")
            .bind(collection)
            .bind(&id)
            .bind(Json(Value::Object(record.clone())))
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return AppError::validation(format!(
                            "Record '{}' already exists in {}",
                            id, collection
                        ));
                    }
                }
                AppError::Database(e)
            })?;

        Ok(record)
    }

    async fn update(&self, collection: &str, filter: &Filter, changes: Record) -> Result<u64> {
        let rows = self.fetch_rows(collection, filter).await?;

        let mut updated = 0;
        for (id, mut record) in rows {
            merge_into(&mut record, &changes);
            self.write_body(collection, &id, &record).await?;
            updated += 1;
        }

        Ok(updated)
    }

    async fn upsert(&self, collection: &str, on_conflict: &str, record: Record) -> Result<Record> {
        let existing = match record.get(on_conflict) {
            Some(key) => self
                .fetch_rows(collection, &Filter::new().eq(on_conflict, key.clone()).limit(1))
                .await?
                .into_iter()
                .next(),
            None => None,
        };

        match existing {
            Some((id, mut current)) => {
                merge_into(&mut current, &record);
                self.write_body(collection, &id, &current).await?;
                Ok(current)
            }
            None => self.insert(collection, record).await,
        }
    }

    async fn delete(&self, collection: &str, filter: &Filter) -> Result<u64> {
        let mut query: QueryBuilder<MySql> =
            QueryBuilder::new("DELETE FROM records WHERE collection = ");
        query.push_bind(collection.to_string());
        push_conditions(&mut query, filter)?;

        let result = query.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}

fn push_conditions(query: &mut QueryBuilder<'_, MySql>, filter: &Filter) -> Result<()> {
    for condition in &filter.conditions {
        query.push(" AND JSON_UNQUOTE(JSON_EXTRACT(body, ");
        query.push_bind(json_path(condition.field())?);
        query.push("))");

        match condition {
            Condition::Eq(_, value) => {
                query.push(" = ");
                query.push_bind(scalar_text(value));
            }
            Condition::In(_, values) if values.is_empty() => {
                query.push(" IN (NULL)");
            }
            Condition::In(_, values) => {
                query.push(" IN (");
                let mut separated = query.separated(", ");
                for value in values {
                    separated.push_bind(scalar_text(value));
                }
                separated.push_unseparated(")");
            }
        }
    }

    Ok(())
}

/// JSON path for a top-level key
fn json_path(field: &str) -> Result<String> {
    if field.is_empty() || field.contains('"') || field.contains('\\') {
        return Err(AppError::store(format!("Invalid field name: {:?}", field)));
    }
    Ok(format!("$.\"{}\"", field))
}

/// Text form compared against JSON_UNQUOTE output
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
