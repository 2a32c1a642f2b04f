// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Trailing-window activity heatmap
//!
//! Buckets the activity collection into a fixed-length run of calendar days
//! ending at `now`'s day, each day tagged with a discrete intensity level.

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::window;
use crate::constants::heatmap::{LEVEL_LOW_MAX, LEVEL_MEDIUM_MAX};
use crate::models::{Activity, ActivityType};

/// Discrete intensity bucket summarizing a day's activity count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    None,
    Low,
    Medium,
    High,
}

impl ActivityLevel {
    /// Rate a daily activity count against the fixed thresholds
    pub fn for_count(count: usize) -> Self {
        match count {
            0 => ActivityLevel::None,
            n if n <= LEVEL_LOW_MAX => ActivityLevel::Low,
            n if n <= LEVEL_MEDIUM_MAX => ActivityLevel::Medium,
            _ => ActivityLevel::High,
        }
    }
}

/// Lightweight view of one bucketed activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityProjection {
    /// Kind of activity
    pub activity_type: ActivityType,
    /// Human-readable name
    pub name: String,
    /// Whether the activity was completed
    pub completed: bool,
    /// Local wall-clock time, "h:mm a"
    pub formatted_time: String,
}

/// One calendar day of the heatmap series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayActivity {
    /// The calendar day this bucket covers
    pub date: NaiveDate,
    /// Intensity level for the day
    pub level: ActivityLevel,
    /// The day's activities, in source (chronological) order
    pub activities: Vec<ActivityProjection>,
}

/// Build the trailing day-activity series ending at `now`'s calendar day
///
/// Returns exactly `window_days` entries, oldest first. Deterministic:
/// identical `(activities, now, window_days)` always yield an identical
/// sequence. The conventional window length is
/// [`crate::constants::heatmap::DEFAULT_WINDOW_DAYS`].
pub fn build_day_activity_series(
    activities: &[Activity],
    now: DateTime<Utc>,
    window_days: usize,
) -> Vec<DayActivity> {
    let today = window::local_date(now);
    let mut days = Vec::with_capacity(window_days);

    for offset in (0..window_days).rev() {
        let date = today - Duration::days(offset as i64);
        let projections: Vec<ActivityProjection> = activities
            .iter()
            .filter(|a| window::is_on_local_day(a, date))
            .map(project)
            .collect();

        days.push(DayActivity {
            date,
            level: ActivityLevel::for_count(projections.len()),
            activities: projections,
        });
    }

    days
}

fn project(activity: &Activity) -> ActivityProjection {
    ActivityProjection {
        activity_type: activity.activity_type.clone(),
        name: activity.name.clone(),
        completed: activity.completed,
        formatted_time: activity
            .timestamp
            .with_timezone(&Local)
            .format("%-I:%M %p")
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(name: &str, timestamp: DateTime<Utc>) -> Activity {
        Activity {
            id: format!("t-{}", name),
            user_id: None,
            activity_type: ActivityType::Game,
            name: name.to_string(),
            description: None,
            timestamp,
            duration: Some(300),
            completed: true,
            mood_score: None,
            mood_note: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(ActivityLevel::for_count(0), ActivityLevel::None);
        assert_eq!(ActivityLevel::for_count(1), ActivityLevel::Low);
        assert_eq!(ActivityLevel::for_count(2), ActivityLevel::Low);
        assert_eq!(ActivityLevel::for_count(3), ActivityLevel::Medium);
        assert_eq!(ActivityLevel::for_count(4), ActivityLevel::Medium);
        assert_eq!(ActivityLevel::for_count(5), ActivityLevel::High);
        assert_eq!(ActivityLevel::for_count(12), ActivityLevel::High);
    }

    #[test]
    fn test_series_has_exact_window_length() {
        let now = Utc::now();
        let series = build_day_activity_series(&[], now, 28);
        assert_eq!(series.len(), 28);
        assert!(series.iter().all(|d| d.level == ActivityLevel::None));
        assert!(series.iter().all(|d| d.activities.is_empty()));
    }

    #[test]
    fn test_series_days_are_consecutive_oldest_first() {
        let now = Utc::now();
        let series = build_day_activity_series(&[], now, 14);

        for pair in series.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        assert_eq!(series[13].date, window::local_date(now));
    }

    #[test]
    fn test_activities_land_in_their_day_bucket() {
        let now = Utc::now();
        let activities = vec![
            activity("today-1", now),
            activity("two-days-ago", now - Duration::days(2)),
        ];

        let series = build_day_activity_series(&activities, now, 7);
        assert_eq!(series[6].activities.len(), 1);
        assert_eq!(series[6].activities[0].name, "today-1");
        assert_eq!(series[4].activities.len(), 1);
        assert_eq!(series[4].activities[0].name, "two-days-ago");
    }

    #[test]
    fn test_bucket_preserves_source_order() {
        let now = Utc::now();
        let activities = vec![
            activity("first", now - Duration::hours(3)),
            activity("second", now - Duration::hours(1)),
        ];

        let series = build_day_activity_series(&activities, now, 7);
        let today = &series[6];
        // Both may fall on today; when they do, order must match the source
        if today.activities.len() == 2 {
            assert_eq!(today.activities[0].name, "first");
            assert_eq!(today.activities[1].name, "second");
        }
    }

    #[test]
    fn test_out_of_window_activities_are_excluded() {
        let now = Utc::now();
        let activities = vec![activity("ancient", now - Duration::days(60))];

        let series = build_day_activity_series(&activities, now, 28);
        let bucketed: usize = series.iter().map(|d| d.activities.len()).sum();
        assert_eq!(bucketed, 0);
    }

    #[test]
    fn test_three_activities_rate_medium() {
        let now = Utc::now();
        let activities = vec![
            activity("a", now),
            activity("b", now),
            activity("c", now),
        ];

        let series = build_day_activity_series(&activities, now, 7);
        assert_eq!(series[6].level, ActivityLevel::Medium);
    }

    #[test]
    fn test_formatted_time_is_twelve_hour() {
        let now = Utc::now();
        let activities = vec![activity("timed", now)];

        let series = build_day_activity_series(&activities, now, 7);
        let time = &series[6].activities[0].formatted_time;
        assert!(time.ends_with("AM") || time.ends_with("PM"));
        assert!(time.contains(':'));
    }

    #[test]
    fn test_series_is_deterministic() {
        let now = Utc::now();
        let activities = vec![
            activity("a", now),
            activity("b", now - Duration::days(5)),
        ];

        let first = build_day_activity_series(&activities, now, 28);
        let second = build_day_activity_series(&activities, now, 28);
        assert_eq!(first, second);
    }
}
