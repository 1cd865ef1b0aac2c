//! Role catalog, resource catalog, and recommendation handlers.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::resources::LearningResource;
use crate::recommend::recommend_for_missing;
use crate::state::AppState;

/// GET /api/roles
pub async fn list_roles(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let roles = state.roles.role_names().await?;
    Ok(Json(json!({ "roles": roles })))
}

#[derive(Deserialize)]
pub struct AddRoleRequest {
    pub role: String,
    pub skills: Vec<String>,
}

/// POST /api/roles
/// Adds or overwrites a role's required-skill list. An empty skill list is
/// allowed and analyzes as a 0% match.
pub async fn add_role(
    State(state): State<AppState>,
    Json(req): Json<AddRoleRequest>,
) -> Result<Json<Value>, AppError> {
    if req.role.trim().is_empty() {
        return Err(AppError::Validation("Role name must not be empty".to_string()));
    }
    state.roles.upsert(&req.role, req.skills).await?;
    Ok(Json(json!({ "message": "Role saved successfully" })))
}

#[derive(Deserialize)]
pub struct RecommendationRequest {
    pub missing_skills: Vec<String>,
    /// Accepted from clients but not consulted; the lookup depends only on
    /// the skill list.
    #[allow(dead_code)]
    pub user_id: Option<String>,
}

/// POST /api/recommendations
/// Returns catalog resources for each missing skill, falling back to a
/// generic search entry for skills the catalog does not know.
pub async fn recommendations(
    State(state): State<AppState>,
    Json(req): Json<RecommendationRequest>,
) -> Result<Json<Value>, AppError> {
    let catalog = state.resources.all().await?;
    let recommendations = recommend_for_missing(&req.missing_skills, &catalog);
    Ok(Json(json!({ "recommendations": recommendations })))
}

#[derive(Deserialize)]
pub struct AddResourceRequest {
    pub skill: String,
    pub resource: LearningResource,
}

/// POST /api/resources
/// Appends a learning resource under the given skill, creating the skill
/// entry if it is new.
pub async fn add_resource(
    State(state): State<AppState>,
    Json(req): Json<AddResourceRequest>,
) -> Result<Json<Value>, AppError> {
    if req.skill.trim().is_empty() {
        return Err(AppError::Validation("Skill name must not be empty".to_string()));
    }
    state.resources.append(&req.skill, req.resource).await?;
    Ok(Json(json!({ "message": "Resource added successfully" })))
}
