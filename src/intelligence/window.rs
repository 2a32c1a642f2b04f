// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Trailing-window helpers shared by the derived views
//!
//! Calendar-day membership is decided by local-date equality; the trailing
//! insight window is plain instant arithmetic. Both are total over any
//! well-formed timestamp.

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};

use crate::models::Activity;

/// The local calendar day an instant falls on
pub(crate) fn local_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&Local).date_naive()
}

/// True when the activity occurred on the given local calendar day
pub(crate) fn is_on_local_day(activity: &Activity, day: NaiveDate) -> bool {
    local_date(activity.timestamp) == day
}

/// Activities whose timestamp is at or after `now - days`, in source order
pub(crate) fn trailing_window(
    activities: &[Activity],
    now: DateTime<Utc>,
    days: i64,
) -> Vec<&Activity> {
    let cutoff = now - Duration::days(days);
    activities.iter().filter(|a| a.timestamp >= cutoff).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityType;

    fn activity_at(timestamp: DateTime<Utc>) -> Activity {
        Activity {
            id: "t1".to_string(),
            user_id: None,
            activity_type: ActivityType::Game,
            name: "Test".to_string(),
            description: None,
            timestamp,
            duration: None,
            completed: true,
            mood_score: None,
            mood_note: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    #[test]
    fn test_same_instant_is_on_its_own_day() {
        let now = Utc::now();
        let activity = activity_at(now);
        assert!(is_on_local_day(&activity, local_date(now)));
    }

    #[test]
    fn test_trailing_window_includes_boundary() {
        let now = Utc::now();
        let on_boundary = activity_at(now - Duration::days(7));
        let inside = activity_at(now - Duration::days(3));
        let outside = activity_at(now - Duration::days(7) - Duration::seconds(1));
        let activities = vec![outside, on_boundary.clone(), inside.clone()];

        let recent = trailing_window(&activities, now, 7);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].timestamp, on_boundary.timestamp);
        assert_eq!(recent[1].timestamp, inside.timestamp);
    }

    #[test]
    fn test_trailing_window_preserves_source_order() {
        let now = Utc::now();
        let a = activity_at(now - Duration::hours(5));
        let b = activity_at(now - Duration::hours(1));
        let activities = vec![a.clone(), b.clone()];

        let recent = trailing_window(&activities, now, 7);
        assert_eq!(recent[0].timestamp, a.timestamp);
        assert_eq!(recent[1].timestamp, b.timestamp);
    }
}
