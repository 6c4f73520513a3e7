use tracing::info;

use crate::core::error::AppError;
use crate::core::Result;
use crate::modules::users::models::{UserProfile, UserProfileUpdate};
use crate::modules::users::repositories::UserRepository;

/// Service for profile administration
#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    pub async fn list_users(&self) -> Result<Vec<UserProfile>> {
        let records = self.repo.list().await?;
        Ok(records.iter().map(UserProfile::from_record).collect())
    }

    pub async fn get_user(&self, id: &str) -> Result<UserProfile> {
        self.repo
            .find_by_id(id)
            .await?
            .map(|record| UserProfile::from_record(&record))
            .ok_or_else(|| AppError::not_found(format!("User {}", id)))
    }

    pub async fn update_user(&self, id: &str, update: UserProfileUpdate) -> Result<UserProfile> {
        update.validate()?;

        if self.repo.update(id, update.to_record()).await? == 0 {
            return Err(AppError::not_found(format!("User {}", id)));
        }

        info!("Profile updated: id={}, role={}", id, update.role.trim());
        self.get_user(id).await
    }

    /// Remove the profile row. The identity provider account is left alone.
    pub async fn delete_user(&self, id: &str) -> Result<()> {
        if self.repo.delete(id).await? == 0 {
            return Err(AppError::not_found(format!("User {}", id)));
        }

        info!("Profile deleted: id={}", id);
        Ok(())
    }
}
