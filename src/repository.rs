// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Activity repository collaborator seam
//!
//! The analytics core never stores activities itself; a repository supplies
//! the full chronological collection and assigns identity to new records.
//! Load and append failures surface to the caller, never defaulted away.

use async_trait::async_trait;
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::logging::AppLogger;
use crate::models::{Activity, ActivityType};

/// Errors raised when an activity payload is rejected at the boundary
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("mood score {0} is outside the 0-100 range")]
    InvalidMoodScore(i32),
}

/// An unsaved activity payload; the repository assigns `id` and timestamps
#[derive(Debug, Clone)]
pub struct NewActivity {
    pub activity_type: ActivityType,
    pub name: String,
    pub description: Option<String>,
    pub duration: Option<u64>,
    pub completed: bool,
    pub mood_score: Option<i32>,
    pub mood_note: Option<String>,
}

#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Load the full activity collection for a user, oldest first
    async fn load_activities(&self, user_id: &str) -> Result<Vec<Activity>>;

    /// Append a new activity; returns the stored record with identity assigned
    async fn append_activity(&self, user_id: &str, record: NewActivity) -> Result<Activity>;
}

/// In-memory repository used by the demo binary and tests
///
/// Stands in for real persistence, which is a collaborator concern. Append
/// order is preserved, so collections stay chronological.
pub struct InMemoryActivityRepository {
    store: RwLock<HashMap<String, Vec<Activity>>>,
}

impl InMemoryActivityRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    /// Create a repository pre-seeded with activities for one user
    pub async fn with_seed(user_id: &str, activities: Vec<Activity>) -> Self {
        let repo = Self::new();
        repo.store
            .write()
            .await
            .insert(user_id.to_string(), activities);
        repo
    }
}

impl Default for InMemoryActivityRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn load_activities(&self, user_id: &str) -> Result<Vec<Activity>> {
        let store = self.store.read().await;
        let activities = store.get(user_id).cloned().unwrap_or_default();
        AppLogger::log_activities_loaded(user_id, activities.len());
        Ok(activities)
    }

    async fn append_activity(&self, user_id: &str, record: NewActivity) -> Result<Activity> {
        if let Some(score) = record.mood_score {
            if !(0..=100).contains(&score) {
                return Err(RepositoryError::InvalidMoodScore(score).into());
            }
        }

        let now = Utc::now();
        let activity = Activity {
            id: Uuid::new_v4().to_string(),
            user_id: Some(user_id.to_string()),
            activity_type: record.activity_type,
            name: record.name,
            description: record.description,
            timestamp: now,
            duration: record.duration,
            completed: record.completed,
            mood_score: record.mood_score,
            mood_note: record.mood_note,
            created_at: now,
            updated_at: now,
        };

        let mut store = self.store.write().await;
        store
            .entry(user_id.to_string())
            .or_default()
            .push(activity.clone());
        AppLogger::log_activity_appended(
            user_id,
            &activity.id,
            activity.activity_type.display_name(),
        );
        Ok(activity)
    }
}

/// Seed data mirroring a fresh user's first day: one mood check-in from two
/// hours before `now` and one breathing game from the previous day
pub fn sample_activities(now: DateTime<Utc>) -> Vec<Activity> {
    vec![
        Activity {
            id: "seed-2".to_string(),
            user_id: Some("default-user".to_string()),
            activity_type: ActivityType::Game,
            name: "Breathing Game".to_string(),
            description: Some("5-minute breathing".to_string()),
            timestamp: now - chrono::Duration::hours(24),
            duration: Some(300),
            completed: true,
            mood_score: None,
            mood_note: None,
            created_at: now,
            updated_at: now,
        },
        Activity {
            id: "seed-1".to_string(),
            user_id: Some("default-user".to_string()),
            activity_type: ActivityType::Mood,
            name: "Morning Mood".to_string(),
            description: None,
            timestamp: now - chrono::Duration::hours(2),
            duration: None,
            completed: true,
            mood_score: Some(70),
            mood_note: Some("Feeling okay".to_string()),
            created_at: now,
            updated_at: now,
        },
    ]
}
