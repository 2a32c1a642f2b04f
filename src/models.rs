// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Data Models
//!
//! Core data structures shared by every analytics component in Serene.
//! An [`Activity`] is one immutable logged user action (a mood entry, a
//! completed exercise, a therapy session, a game) and is the only input
//! the derived views are computed from.
//!
//! ## Design Principles
//!
//! - **Immutable**: no field is mutated after creation; updates are modeled
//!   as new records
//! - **Open typed**: unknown activity labels map to [`ActivityType::Other`]
//!   and are treated as generic activities rather than rejected
//! - **Serializable**: all models support JSON serialization for
//!   collaborator hand-off
//! - **Temporal**: `timestamp` is the sole key used for windowing
//!
//! ## Core Models
//!
//! - [`Activity`]: a single logged wellness activity
//! - [`ActivityType`]: open enumeration of activity kinds

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single logged wellness activity
///
/// Activities are supplied by the repository collaborator in chronological
/// order and are never mutated by the analytics core. Identity is `id`.
///
/// # Examples
///
/// ```rust
/// use serene_core::models::{Activity, ActivityType};
/// use chrono::Utc;
///
/// let activity = Activity {
///     id: "a1".to_string(),
///     user_id: Some("default-user".to_string()),
///     activity_type: ActivityType::Mood,
///     name: "Morning Mood".to_string(),
///     description: None,
///     timestamp: Utc::now(),
///     duration: None,
///     completed: true,
///     mood_score: Some(70),
///     mood_note: Some("Feeling okay".to_string()),
///     created_at: Utc::now(),
///     updated_at: Utc::now(),
/// };
/// assert!(activity.is_scored_mood());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier assigned by the repository
    pub id: String,
    /// Owning user, when known
    pub user_id: Option<String>,
    /// Kind of activity (mood, game, therapy, ...)
    pub activity_type: ActivityType,
    /// Human-readable name of the activity
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// When the activity occurred (UTC); the authoritative ordering key
    pub timestamp: DateTime<Utc>,
    /// Duration in seconds, when the activity has one
    pub duration: Option<u64>,
    /// Whether the activity was completed
    pub completed: bool,
    /// Mood score in [0, 100]; present on mood entries but never assumed
    /// exclusive to them
    pub mood_score: Option<i32>,
    /// Optional note attached to a mood entry
    pub mood_note: Option<String>,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// When the record was last written (records are replaced, not mutated)
    pub updated_at: DateTime<Utc>,
}

impl Activity {
    /// True for mood entries that carry a score
    pub fn is_scored_mood(&self) -> bool {
        matches!(self.activity_type, ActivityType::Mood) && self.mood_score.is_some()
    }
}

/// Open enumeration of activity kinds
///
/// Covers the kinds the dashboard logs today. The `Other` variant absorbs
/// any label the core has never seen, so new activity kinds flow through
/// every view as generic activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    /// Mood check-in
    Mood,
    /// Anxiety-relief game
    Game,
    /// Therapy session
    Therapy,
    /// Meditation practice
    Meditation,
    /// Breathing exercise
    Breathing,
    /// Any activity kind not covered by the standard categories
    Other(String),
}

impl ActivityType {
    /// Create an `ActivityType` from an external label using the configured
    /// mapping, falling back to direct matching for the built-in labels
    pub fn from_label(label: &str, config: &crate::config::WellnessConfig) -> Self {
        if let Some(internal) = config.map_activity_type(label) {
            return Self::from_internal_label(internal);
        }
        Self::from_internal_label(label)
    }

    /// Create an `ActivityType` from an internal label
    pub fn from_internal_label(label: &str) -> Self {
        match label {
            "mood" => ActivityType::Mood,
            "game" => ActivityType::Game,
            "therapy" => ActivityType::Therapy,
            "meditation" => ActivityType::Meditation,
            "breathing" => ActivityType::Breathing,
            other => ActivityType::Other(other.to_string()),
        }
    }

    /// Get the human-readable name for this activity type
    pub fn display_name(&self) -> &str {
        match self {
            ActivityType::Mood => "mood entry",
            ActivityType::Game => "game",
            ActivityType::Therapy => "therapy session",
            ActivityType::Meditation => "meditation",
            ActivityType::Breathing => "breathing exercise",
            ActivityType::Other(_) => "activity",
        }
    }

    /// Mindfulness practices considered by the cadence insight rule
    pub fn is_mindfulness(&self) -> bool {
        matches!(
            self,
            ActivityType::Game | ActivityType::Meditation | ActivityType::Breathing
        )
    }
}
