pub mod catalogs;
pub mod health;
pub mod resumes;
pub mod users;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Resume pipeline
        .route("/api/upload_resume", post(resumes::upload_resume))
        .route("/api/analyze_skills", post(resumes::analyze_skills))
        // Catalogs and recommendations
        .route("/api/roles", get(catalogs::list_roles).post(catalogs::add_role))
        .route("/api/recommendations", post(catalogs::recommendations))
        .route("/api/resources", post(catalogs::add_resource))
        // User records and learning plans
        .route("/api/save_plan", post(users::save_plan))
        .route("/api/users", get(users::list_users))
        .route(
            "/api/user/:user_id",
            get(users::get_user).delete(users::delete_user),
        )
        .route(
            "/api/user/:user_id/plans/:plan_index/progress",
            patch(users::update_plan_progress),
        )
        .with_state(state)
}
