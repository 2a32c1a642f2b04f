// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Same-day summary statistics for the dashboard overview

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::window;
use crate::constants::stats::COMPLETION_RATE;
use crate::models::Activity;

/// Summary statistics for the reference day
///
/// Recomputed on demand from the full activity collection; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    /// Rounded average of today's mood scores; `None` when no mood entry
    /// carries a score
    pub mood_score: Option<i32>,
    /// Completion percentage; pinned at 100 with no per-activity weighting
    pub completion_rate: u8,
    /// Therapy sessions across the entire history, not just today
    pub mindfulness_count: u64,
    /// Number of activities logged today
    pub total_activities: u64,
    /// The reference instant the stats were computed for
    pub last_updated: DateTime<Utc>,
}

/// Compute the daily summary for the calendar day `now` falls on
///
/// Pure over its inputs: the same `(activities, now)` always produces the
/// same value, so callers may recompute freely on load, append, or a timer
/// tick.
pub fn compute_daily_stats(activities: &[Activity], now: DateTime<Utc>) -> DailyStats {
    let today = window::local_date(now);
    let todays: Vec<&Activity> = activities
        .iter()
        .filter(|a| window::is_on_local_day(a, today))
        .collect();

    let mood_scores: Vec<i32> = todays
        .iter()
        .filter(|a| a.is_scored_mood())
        .filter_map(|a| a.mood_score)
        .collect();
    let mood_score = if mood_scores.is_empty() {
        None
    } else {
        let sum: i64 = mood_scores.iter().map(|&s| i64::from(s)).sum();
        Some((sum as f64 / mood_scores.len() as f64).round() as i32)
    };

    // Counts therapy sessions over the full history, diverging from the
    // "today" scope of the sibling fields.
    let mindfulness_count = activities
        .iter()
        .filter(|a| matches!(a.activity_type, crate::models::ActivityType::Therapy))
        .count() as u64;

    DailyStats {
        mood_score,
        completion_rate: COMPLETION_RATE,
        mindfulness_count,
        total_activities: todays.len() as u64,
        last_updated: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityType;
    use chrono::Duration;

    fn activity(
        activity_type: ActivityType,
        timestamp: DateTime<Utc>,
        mood_score: Option<i32>,
    ) -> Activity {
        Activity {
            id: format!("t-{}", timestamp.timestamp_millis()),
            user_id: None,
            activity_type,
            name: "Test".to_string(),
            description: None,
            timestamp,
            duration: None,
            completed: true,
            mood_score,
            mood_note: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    #[test]
    fn test_empty_collection_yields_defaults() {
        let now = Utc::now();
        let stats = compute_daily_stats(&[], now);

        assert_eq!(stats.mood_score, None);
        assert_eq!(stats.completion_rate, 100);
        assert_eq!(stats.mindfulness_count, 0);
        assert_eq!(stats.total_activities, 0);
        assert_eq!(stats.last_updated, now);
    }

    #[test]
    fn test_mood_average_rounds_to_nearest() {
        let now = Utc::now();
        let activities = vec![
            activity(ActivityType::Mood, now, Some(70)),
            activity(ActivityType::Mood, now, Some(75)),
        ];

        let stats = compute_daily_stats(&activities, now);
        // (70 + 75) / 2 = 72.5, rounds to 73
        assert_eq!(stats.mood_score, Some(73));
        assert_eq!(stats.total_activities, 2);
    }

    #[test]
    fn test_unscored_mood_entries_are_ignored() {
        let now = Utc::now();
        let activities = vec![
            activity(ActivityType::Mood, now, None),
            activity(ActivityType::Game, now, Some(90)),
        ];

        // A scoreless mood entry and a scored non-mood entry: no mood average
        let stats = compute_daily_stats(&activities, now);
        assert_eq!(stats.mood_score, None);
        assert_eq!(stats.total_activities, 2);
    }

    #[test]
    fn test_mindfulness_count_spans_full_history() {
        let now = Utc::now();
        let activities = vec![
            activity(ActivityType::Therapy, now - Duration::days(40), None),
            activity(ActivityType::Therapy, now - Duration::days(2), None),
            activity(ActivityType::Mood, now, Some(60)),
        ];

        let stats = compute_daily_stats(&activities, now);
        assert_eq!(stats.mindfulness_count, 2);
        // Only the mood entry falls on today's calendar day
        assert_eq!(stats.total_activities, 1);
    }

    #[test]
    fn test_yesterdays_activities_are_excluded_from_today() {
        let now = Utc::now();
        let activities = vec![
            activity(ActivityType::Mood, now - Duration::days(1), Some(20)),
            activity(ActivityType::Mood, now, Some(80)),
        ];

        let stats = compute_daily_stats(&activities, now);
        assert_eq!(stats.mood_score, Some(80));
        assert_eq!(stats.total_activities, 1);
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let now = Utc::now();
        let activities = vec![
            activity(ActivityType::Mood, now, Some(64)),
            activity(ActivityType::Therapy, now, None),
        ];

        let first = compute_daily_stats(&activities, now);
        let second = compute_daily_stats(&activities, now);
        assert_eq!(first, second);
    }
}
