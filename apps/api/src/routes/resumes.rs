//! Resume upload and skill-gap analysis handlers.

use anyhow::Context;
use axum::extract::{Multipart, Query, State};
use axum::Json;
use bytes::Bytes;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::{compute_skill_gap, SkillGapAnalysis};
use crate::errors::AppError;
use crate::extraction::fields::extract_resume_fields;
use crate::models::user::UserRecord;
use crate::state::AppState;

/// Upload size cap, enforced per file before extraction.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// POST /api/upload_resume
/// Multipart form with a `file` part (a .pdf) and a `target_role` part.
/// Parses the PDF, extracts fields, and stores a fresh record under a
/// generated user id, returned in the response body.
pub async fn upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UserRecord>, AppError> {
    let mut file: Option<(String, Bytes)> = None;
    let mut target_role: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
                file = Some((filename, data));
            }
            Some("target_role") => {
                let value = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read target_role: {e}"))
                })?;
                target_role = Some(value);
            }
            _ => {}
        }
    }

    let (filename, data) =
        file.ok_or_else(|| AppError::Validation("No resume file provided".to_string()))?;
    let target_role =
        target_role.ok_or_else(|| AppError::Validation("Missing target_role field".to_string()))?;

    if !filename.ends_with(".pdf") {
        return Err(AppError::Validation("Only PDF files are supported".to_string()));
    }
    if data.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation("File size must be less than 5MB".to_string()));
    }

    // CPU-bound parse runs off the async runtime
    let extractor = state.extractor.clone();
    let parsed_text = tokio::task::spawn_blocking(move || extractor.extract(&data))
        .await
        .context("text extraction task failed")??;

    let fields = extract_resume_fields(&parsed_text);
    let user_id = format!("user_{}", &Uuid::new_v4().simple().to_string()[..8]);
    let record = UserRecord {
        user_id: user_id.clone(),
        name: fields.name,
        contact: fields.contact,
        skills: fields.skills,
        experience: fields.experience,
        parsed_text_snippet: snippet(&parsed_text),
        target_role,
        upload_timestamp: Utc::now().to_rfc3339(),
        learning_plans: Vec::new(),
    };

    state.users.save(&user_id, record.clone()).await?;
    info!("Stored resume for {user_id} ({} skills found)", record.skills.len());

    Ok(Json(record))
}

#[derive(Deserialize)]
pub struct AnalyzeQuery {
    pub user_id: String,
    pub target_role: String,
}

/// POST /api/analyze_skills?user_id=&target_role=
/// Compares the stored skills for `user_id` against the required list for
/// `target_role`. An unknown role is a 404; a role defined with an empty
/// skill list runs a 0% analysis instead.
pub async fn analyze_skills(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeQuery>,
) -> Result<Json<SkillGapAnalysis>, AppError> {
    let record = state
        .users
        .get(&params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    let required = state
        .roles
        .required_skills(&params.target_role)
        .await?
        .ok_or_else(|| AppError::NotFound("Role not found".to_string()))?;

    let report = compute_skill_gap(&required, &record.skills);
    Ok(Json(SkillGapAnalysis {
        user_id: params.user_id,
        target_role: params.target_role,
        required_skills: required,
        user_skills: record.skills,
        matched_skills: report.matched_skills,
        missing_skills: report.missing_skills,
        match_percentage: report.match_percentage,
    }))
}

/// First 200 characters of the extracted text, with an ellipsis marker when
/// truncated. Counted in characters, not bytes, so multi-byte text never
/// splits a code point.
fn snippet(text: &str) -> String {
    if text.chars().count() > 200 {
        let head: String = text.chars().take(200).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
