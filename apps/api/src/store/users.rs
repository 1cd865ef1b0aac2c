use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::AppError;
use crate::models::user::{LearningPlan, UserRecord};
use crate::store::JsonStore;

type UserMap = BTreeMap<String, UserRecord>;

/// Outcome of a plan-progress update, so callers can tell a missing user
/// apart from a missing plan index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanProgressOutcome {
    Applied,
    UserNotFound,
    PlanNotFound,
}

/// User records in `users.json`, keyed by user id. Every operation holds
/// the store lock for its whole read-modify-write sequence.
#[derive(Clone)]
pub struct UserStore {
    store: JsonStore<UserMap>,
}

impl UserStore {
    pub fn new(path: PathBuf, lock_timeout: Duration) -> Self {
        UserStore {
            store: JsonStore::new(path, lock_timeout),
        }
    }

    /// Whole-record upsert.
    pub async fn save(&self, user_id: &str, record: UserRecord) -> Result<(), AppError> {
        let guard = self.store.lock().await?;
        let mut users = guard.load().await?;
        users.insert(user_id.to_string(), record);
        guard.store(&users).await
    }

    pub async fn get(&self, user_id: &str) -> Result<Option<UserRecord>, AppError> {
        Ok(self.store.read().await?.remove(user_id))
    }

    pub async fn get_all(&self) -> Result<UserMap, AppError> {
        self.store.read().await
    }

    /// Removes the record; returns whether it existed.
    pub async fn delete(&self, user_id: &str) -> Result<bool, AppError> {
        let guard = self.store.lock().await?;
        let mut users = guard.load().await?;
        if users.remove(user_id).is_none() {
            return Ok(false);
        }
        guard.store(&users).await?;
        Ok(true)
    }

    /// Appends a plan to the user's record. Returns false, and writes
    /// nothing, when the user does not exist.
    pub async fn append_plan(&self, user_id: &str, plan: LearningPlan) -> Result<bool, AppError> {
        let guard = self.store.lock().await?;
        let mut users = guard.load().await?;
        let record = match users.get_mut(user_id) {
            Some(record) => record,
            None => return Ok(false),
        };
        record.learning_plans.push(plan);
        guard.store(&users).await?;
        Ok(true)
    }

    /// Sets one skill's completion percent on the plan at `plan_index`.
    pub async fn set_plan_progress(
        &self,
        user_id: &str,
        plan_index: usize,
        skill: &str,
        percent: u32,
    ) -> Result<PlanProgressOutcome, AppError> {
        let guard = self.store.lock().await?;
        let mut users = guard.load().await?;
        let record = match users.get_mut(user_id) {
            Some(record) => record,
            None => return Ok(PlanProgressOutcome::UserNotFound),
        };
        let plan = match record.learning_plans.get_mut(plan_index) {
            Some(plan) => plan,
            None => return Ok(PlanProgressOutcome::PlanNotFound),
        };
        plan.progress.insert(skill.to_string(), percent);
        guard.store(&users).await?;
        Ok(PlanProgressOutcome::Applied)
    }
}
