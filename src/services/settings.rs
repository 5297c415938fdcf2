//! Site settings service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::settings::{SiteSettings, UpdateSiteSettings},
    repository::Repository,
};

#[derive(Clone)]
pub struct SettingsService {
    repository: Repository,
}

impl SettingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get current site settings
    pub async fn get(&self) -> AppResult<SiteSettings> {
        self.repository.settings.get().await
    }

    /// Update site settings
    pub async fn update(&self, request: UpdateSiteSettings) -> AppResult<SiteSettings> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.settings.update(&request).await
    }
}
