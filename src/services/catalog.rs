//! Service catalog management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::service::{CreateService, SalonService, UpdateService},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Active services for the public booking form
    pub async fn list_public(&self) -> AppResult<Vec<SalonService>> {
        self.repository.services.list(false).await
    }

    /// All services, including deactivated ones (admin)
    pub async fn list_all(&self) -> AppResult<Vec<SalonService>> {
        self.repository.services.list(true).await
    }

    pub async fn get(&self, id: i32) -> AppResult<SalonService> {
        self.repository.services.get_by_id(id).await
    }

    pub async fn create(&self, data: CreateService) -> AppResult<SalonService> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.services.create(&data).await
    }

    pub async fn update(&self, id: i32, data: UpdateService) -> AppResult<SalonService> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.services.update(id, &data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.services.delete(id).await
    }
}
