// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Behavioral pattern insights over the trailing week
//!
//! Four independent rules each contribute at most one finding from a fixed
//! catalog of templated observations. A rule with insufficient data
//! contributes nothing; no rule can fail under a well-formed collection.

use chrono::{DateTime, Local, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::window;
use crate::constants::insights::{
    CONSISTENT_PRACTICE_DAILY_AVERAGE, EVENING_START_HOUR, HIGH_ACHIEVEMENT_RATE,
    LOW_COMPLETION_RATE, MAX_INSIGHTS, MIN_MOOD_ENTRIES, MOOD_DIP_DELTA, MORNING_END_HOUR,
    RECENT_WINDOW_DAYS,
};
use crate::models::Activity;

/// Priority of an insight
///
/// Declaration order defines the comparison: `High < Medium < Low`, so an
/// ascending stable sort ranks high-priority findings first while preserving
/// rule-evaluation order among equals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightPriority {
    High,
    Medium,
    Low,
}

impl InsightPriority {
    /// Numeric rank backing the ordering: high 0, medium 1, low 2
    pub fn rank(self) -> u8 {
        self as u8
    }
}

/// Icon the presentation layer should render for an insight
///
/// A closed tag enumeration; the core knows nothing about any rendering
/// library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconTag {
    Brain,
    Heart,
    Trophy,
    Sparkles,
    Calendar,
    Sun,
    Moon,
}

/// A templated, prioritized observation derived from activity patterns
///
/// Ephemeral: regenerated from scratch each time insights are requested,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub description: String,
    pub icon: IconTag,
    pub priority: InsightPriority,
}

/// Generate at most three prioritized insights over the trailing week
///
/// Rules run in a fixed order (mood trend, mindfulness cadence, completion
/// rate, time-of-day preference); the result is stable-sorted by priority
/// and truncated. Deterministic for fixed `(activities, now)`.
pub fn generate_insights(activities: &[Activity], now: DateTime<Utc>) -> Vec<Insight> {
    let recent = window::trailing_window(activities, now, RECENT_WINDOW_DAYS);

    let mut insights: Vec<Insight> = [
        mood_trend_insight(&recent),
        mindfulness_cadence_insight(&recent),
        completion_rate_insight(&recent),
        time_of_day_insight(&recent),
    ]
    .into_iter()
    .flatten()
    .collect();

    insights.sort_by_key(|i| i.priority);
    insights.truncate(MAX_INSIGHTS);
    insights
}

/// Rule 1: compare the latest mood score against the weekly average
fn mood_trend_insight(recent: &[&Activity]) -> Option<Insight> {
    let mood_entries: Vec<&&Activity> =
        recent.iter().filter(|a| a.is_scored_mood()).collect();
    if mood_entries.len() < MIN_MOOD_ENTRIES {
        return None;
    }

    let scores: Vec<f64> = mood_entries
        .iter()
        .filter_map(|a| a.mood_score)
        .map(f64::from)
        .collect();
    let average = scores.iter().sum::<f64>() / scores.len() as f64;
    let latest = mood_entries
        .iter()
        .max_by_key(|a| a.timestamp)
        .and_then(|a| a.mood_score)
        .map(f64::from)?;

    if latest > average {
        Some(Insight {
            title: "Mood Improvement".to_string(),
            description: "Your recent mood scores are above your weekly average. \
                          Keep up the good work!"
                .to_string(),
            icon: IconTag::Brain,
            priority: InsightPriority::High,
        })
    } else if latest < average - MOOD_DIP_DELTA {
        Some(Insight {
            title: "Mood Change Detected".to_string(),
            description: "I've noticed a dip in your mood. Would you like to try \
                          some mood-lifting activities?"
                .to_string(),
            icon: IconTag::Heart,
            priority: InsightPriority::High,
        })
    } else {
        None
    }
}

/// Rule 2: rate the week's mindfulness practice cadence
fn mindfulness_cadence_insight(recent: &[&Activity]) -> Option<Insight> {
    let count = recent
        .iter()
        .filter(|a| a.activity_type.is_mindfulness())
        .count();
    if count == 0 {
        return None;
    }

    let daily_average = count as f64 / RECENT_WINDOW_DAYS as f64;
    if daily_average >= CONSISTENT_PRACTICE_DAILY_AVERAGE {
        Some(Insight {
            title: "Consistent Practice".to_string(),
            description: "You've been regularly engaging in mindfulness activities. \
                          This can help reduce stress and improve focus."
                .to_string(),
            icon: IconTag::Trophy,
            priority: InsightPriority::Medium,
        })
    } else {
        Some(Insight {
            title: "Mindfulness Opportunity".to_string(),
            description: "Try incorporating more mindfulness activities into your \
                          daily routine."
                .to_string(),
            icon: IconTag::Sparkles,
            priority: InsightPriority::Low,
        })
    }
}

/// Rule 3: rate the week's completion percentage
///
/// Skipped outright on an empty week: the rate is undefined there, and an
/// empty week must not trigger the reminder.
fn completion_rate_insight(recent: &[&Activity]) -> Option<Insight> {
    if recent.is_empty() {
        return None;
    }

    let completed = recent.iter().filter(|a| a.completed).count();
    let rate = completed as f64 / recent.len() as f64 * 100.0;

    if rate >= HIGH_ACHIEVEMENT_RATE {
        Some(Insight {
            title: "High Achievement".to_string(),
            description: format!(
                "You've completed {}% of your activities this week. Excellent commitment!",
                rate.round() as i64
            ),
            icon: IconTag::Trophy,
            priority: InsightPriority::High,
        })
    } else if rate < LOW_COMPLETION_RATE {
        Some(Insight {
            title: "Activity Reminder".to_string(),
            description: "You might benefit from setting smaller, more achievable \
                          daily goals."
                .to_string(),
            icon: IconTag::Calendar,
            priority: InsightPriority::Medium,
        })
    } else {
        None
    }
}

/// Rule 4: compare morning and evening activity counts; a tie says nothing
fn time_of_day_insight(recent: &[&Activity]) -> Option<Insight> {
    let local_hour = |a: &Activity| a.timestamp.with_timezone(&Local).hour();
    let morning = recent
        .iter()
        .filter(|a| local_hour(a) < MORNING_END_HOUR)
        .count();
    let evening = recent
        .iter()
        .filter(|a| local_hour(a) >= EVENING_START_HOUR)
        .count();

    if morning > evening {
        Some(Insight {
            title: "Morning Person".to_string(),
            description: "You're most active in the mornings. Consider scheduling \
                          important tasks during your peak hours."
                .to_string(),
            icon: IconTag::Sun,
            priority: InsightPriority::Medium,
        })
    } else if evening > morning {
        Some(Insight {
            title: "Evening Routine".to_string(),
            description: "You tend to be more active in the evenings. Make sure to \
                          wind down before bedtime."
                .to_string(),
            icon: IconTag::Moon,
            priority: InsightPriority::Medium,
        })
    } else {
        None
    }
}
