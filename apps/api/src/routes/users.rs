//! User record and learning-plan handlers.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::user::{LearningPlanInput, UserRecord};
use crate::state::AppState;
use crate::store::users::PlanProgressOutcome;

/// GET /api/user/:user_id
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserRecord>, AppError> {
    let record = state
        .users
        .get(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(record))
}

/// DELETE /api/user/:user_id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    if !state.users.delete(&user_id).await? {
        return Err(AppError::NotFound("User not found".to_string()));
    }
    Ok(Json(json!({ "message": "User data deleted successfully" })))
}

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let users = state.users.get_all().await?;
    Ok(Json(json!({ "users": users })))
}

#[derive(Deserialize)]
pub struct SavePlanRequest {
    pub user_id: String,
    pub plan: LearningPlanInput,
}

/// POST /api/save_plan
/// Appends the submitted plan to the user's record. The server stamps
/// `created_at` and starts the progress map empty.
pub async fn save_plan(
    State(state): State<AppState>,
    Json(req): Json<SavePlanRequest>,
) -> Result<Json<Value>, AppError> {
    let plan = req.plan.into_plan(Utc::now().to_rfc3339());
    if !state.users.append_plan(&req.user_id, plan).await? {
        return Err(AppError::NotFound("User not found".to_string()));
    }
    Ok(Json(json!({ "message": "Learning plan saved successfully" })))
}

#[derive(Deserialize)]
pub struct ProgressUpdateRequest {
    pub skill: String,
    pub progress: u32,
}

/// PATCH /api/user/:user_id/plans/:plan_index/progress
/// Updates one skill's completion percent on an existing plan. The progress
/// map is the only mutable part of an appended plan.
pub async fn update_plan_progress(
    State(state): State<AppState>,
    Path((user_id, plan_index)): Path<(String, usize)>,
    Json(req): Json<ProgressUpdateRequest>,
) -> Result<Json<Value>, AppError> {
    if req.progress > 100 {
        return Err(AppError::Validation(
            "Progress must be between 0 and 100".to_string(),
        ));
    }

    match state
        .users
        .set_plan_progress(&user_id, plan_index, &req.skill, req.progress)
        .await?
    {
        PlanProgressOutcome::Applied => {
            Ok(Json(json!({ "message": "Progress updated successfully" })))
        }
        PlanProgressOutcome::UserNotFound => Err(AppError::NotFound("User not found".to_string())),
        PlanProgressOutcome::PlanNotFound => Err(AppError::NotFound(format!(
            "Learning plan {plan_index} not found"
        ))),
    }
}
