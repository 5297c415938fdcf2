//! Site settings repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::settings::{SiteSettings, UpdateSiteSettings},
};

#[derive(Clone)]
pub struct SettingsRepository {
    pool: Pool<Postgres>,
}

impl SettingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// The single settings row (seeded by migration)
    pub async fn get(&self) -> AppResult<SiteSettings> {
        sqlx::query_as::<_, SiteSettings>("SELECT * FROM site_settings WHERE id = 1")
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::Internal("Site settings row missing".to_string()))
    }

    /// Update the settings row; absent fields keep their value
    pub async fn update(&self, data: &UpdateSiteSettings) -> AppResult<SiteSettings> {
        let mut sets = vec!["modif_date = NOW()".to_string()];
        let mut idx = 1;

        if data.salon_name.is_some() { sets.push(format!("salon_name = ${}", idx)); idx += 1; }
        if data.tagline.is_some() { sets.push(format!("tagline = ${}", idx)); idx += 1; }
        if data.phone.is_some() { sets.push(format!("phone = ${}", idx)); idx += 1; }
        if data.email.is_some() { sets.push(format!("email = ${}", idx)); idx += 1; }
        if data.address.is_some() { sets.push(format!("address = ${}", idx)); idx += 1; }
        if data.instagram.is_some() { sets.push(format!("instagram = ${}", idx)); idx += 1; }
        if data.facebook.is_some() { sets.push(format!("facebook = ${}", idx)); }

        let query = format!(
            "UPDATE site_settings SET {} WHERE id = 1 RETURNING *",
            sets.join(", ")
        );

        let mut builder = sqlx::query_as::<_, SiteSettings>(&query);
        if let Some(ref salon_name) = data.salon_name { builder = builder.bind(salon_name); }
        if let Some(ref tagline) = data.tagline { builder = builder.bind(tagline); }
        if let Some(ref phone) = data.phone { builder = builder.bind(phone); }
        if let Some(ref email) = data.email { builder = builder.bind(email); }
        if let Some(ref address) = data.address { builder = builder.bind(address); }
        if let Some(ref instagram) = data.instagram { builder = builder.bind(instagram); }
        if let Some(ref facebook) = data.facebook { builder = builder.bind(facebook); }

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::Internal("Site settings row missing".to_string()))
    }
}
