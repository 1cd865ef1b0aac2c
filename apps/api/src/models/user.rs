use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::resources::LearningResource;

/// Best-effort contact details pulled from the resume text. `location` is
/// carried for records edited by hand; the extractor never sets it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub location: Option<String>,
}

/// One heuristic work-history entry. The section scan cannot attribute a
/// company, so `company` is usually "Unknown" and `role` is the raw line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub years: Option<f64>,
    pub description: Option<String>,
}

/// A saved learning plan. Immutable once appended, except for `progress`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPlan {
    pub name: String,
    pub target_role: String,
    pub missing_skills: Vec<String>,
    pub resources: Vec<LearningResource>,
    pub estimated_duration: String,
    pub created_at: String,
    #[serde(default)]
    pub progress: BTreeMap<String, u32>,
}

/// Client-submitted plan shape. The server stamps `created_at` and starts
/// the progress map empty when the plan is appended.
#[derive(Debug, Clone, Deserialize)]
pub struct LearningPlanInput {
    pub name: String,
    pub target_role: String,
    pub missing_skills: Vec<String>,
    pub resources: Vec<LearningResource>,
    pub estimated_duration: String,
}

impl LearningPlanInput {
    pub fn into_plan(self, created_at: String) -> LearningPlan {
        LearningPlan {
            name: self.name,
            target_role: self.target_role,
            missing_skills: self.missing_skills,
            resources: self.resources,
            estimated_duration: self.estimated_duration,
            created_at,
            progress: BTreeMap::new(),
        }
    }
}

/// The full per-user record persisted in `users.json`. A save replaces the
/// whole record; the stored `skills` list is the ground truth for later
/// analyses, which never re-parse the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    pub parsed_text_snippet: String,
    pub target_role: String,
    pub upload_timestamp: String,
    #[serde(default)]
    pub learning_plans: Vec<LearningPlan>,
}
