// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Constants Module
//!
//! Fixed analytic constants and environment-based configuration values.
//! The analytic thresholds are deliberately constants rather than runtime
//! configuration: every derived view must be reproducible from
//! `(activities, now)` alone.

use std::env;

/// Daily statistics constants
pub mod stats {
    /// Completion rate reported by the daily overview. The dashboard pins
    /// this at 100 with no per-activity weighting.
    pub const COMPLETION_RATE: u8 = 100;
}

/// Activity heatmap constants
pub mod heatmap {
    /// Length of the trailing window rendered by the heatmap, in calendar days
    pub const DEFAULT_WINDOW_DAYS: usize = 28;

    /// Highest daily activity count still rated `Low`
    pub const LEVEL_LOW_MAX: usize = 2;

    /// Highest daily activity count still rated `Medium`; anything above
    /// rates `High`
    pub const LEVEL_MEDIUM_MAX: usize = 4;
}

/// Insight rule constants
pub mod insights {
    /// Length of the trailing window insight rules evaluate, in days
    pub const RECENT_WINDOW_DAYS: i64 = 7;

    /// Maximum number of insights returned per request
    pub const MAX_INSIGHTS: usize = 3;

    /// Minimum scored mood entries required before the mood-trend rule runs
    pub const MIN_MOOD_ENTRIES: usize = 2;

    /// How far below the weekly average the latest mood score must fall
    /// before a mood dip is reported
    pub const MOOD_DIP_DELTA: f64 = 20.0;

    /// Daily mindfulness average that counts as consistent practice
    pub const CONSISTENT_PRACTICE_DAILY_AVERAGE: f64 = 1.0;

    /// Weekly completion percentage that earns the achievement insight
    pub const HIGH_ACHIEVEMENT_RATE: f64 = 80.0;

    /// Weekly completion percentage below which the reminder insight fires
    pub const LOW_COMPLETION_RATE: f64 = 50.0;

    /// Local hour before which an activity counts as morning
    pub const MORNING_END_HOUR: u32 = 12;

    /// Local hour at or after which an activity counts as evening
    pub const EVENING_START_HOUR: u32 = 18;
}

/// Environment-based configuration
pub mod env_config {
    use super::env;

    /// Get service name from environment or default
    pub fn service_name() -> String {
        env::var("SERVICE_NAME").unwrap_or_else(|_| "serene-core".to_string())
    }

    /// Get log level from environment or default
    pub fn log_level() -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    }

    /// Get the periodic stats refresh interval (minutes) from environment
    /// or default. The collaborator's timer tick, not a core concern.
    pub fn stats_refresh_minutes() -> u64 {
        env::var("STATS_REFRESH_MINUTES")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .unwrap_or(5)
    }
}
