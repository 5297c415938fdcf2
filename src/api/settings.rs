//! Site settings endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::settings::{SiteSettings, UpdateSiteSettings},
};

use super::AuthenticatedUser;

/// Public site settings (branding and contact details)
#[utoipa::path(
    get,
    path = "/site",
    tag = "settings",
    responses(
        (status = 200, description = "Site settings", body = SiteSettings)
    )
)]
pub async fn get_site(
    State(state): State<crate::AppState>,
) -> AppResult<Json<SiteSettings>> {
    let settings = state.services.settings.get().await?;
    Ok(Json(settings))
}

/// Current settings (admin)
#[utoipa::path(
    get,
    path = "/settings",
    tag = "settings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current settings", body = SiteSettings)
    )
)]
pub async fn get_settings(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<SiteSettings>> {
    let settings = state.services.settings.get().await?;
    Ok(Json(settings))
}

/// Update settings (admin)
#[utoipa::path(
    put,
    path = "/settings",
    tag = "settings",
    security(("bearer_auth" = [])),
    request_body = UpdateSiteSettings,
    responses(
        (status = 200, description = "Settings updated", body = SiteSettings),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn update_settings(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(request): Json<UpdateSiteSettings>,
) -> AppResult<Json<SiteSettings>> {
    let settings = state.services.settings.update(request).await?;
    Ok(Json(settings))
}
