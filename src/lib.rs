// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Serene Core
//!
//! Wellness activity analytics for the Serene dashboard. The crate ingests a
//! user's timestamped activity log (mood entries, games, therapy sessions,
//! exercises) and derives three views: a same-day summary, a trailing
//! activity heatmap, and a short prioritized list of behavioral insights.
//!
//! ## Features
//!
//! - **Pure derivation**: every view is a stateless function of
//!   `(activities, now)` with no subscriptions or hidden re-execution
//! - **Open activity model**: unknown activity kinds flow through as
//!   generic activities instead of failing
//! - **Fixed insight catalog**: findings come from a templated catalog with
//!   explicit, testable priority ordering
//! - **Collaborator seams**: persistence and presentation stay outside the
//!   core behind the repository trait and plain data types
//!
//! ## Architecture
//!
//! - **Models**: the immutable [`models::Activity`] record and its open
//!   type enumeration
//! - **Intelligence**: the three derived views (stats, heatmap, insights)
//! - **Repository**: the async collaborator seam that supplies and appends
//!   activities
//! - **Config**: activity-label mapping and collaborator scheduling
//! - **Logging**: structured output for load/append/recompute events
//!
//! ## Example Usage
//!
//! ```rust
//! use serene_core::intelligence::{
//!     build_day_activity_series, compute_daily_stats, generate_insights,
//! };
//! use serene_core::constants::heatmap::DEFAULT_WINDOW_DAYS;
//! use serene_core::repository::sample_activities;
//! use chrono::Utc;
//!
//! let now = Utc::now();
//! let activities = sample_activities(now);
//!
//! let stats = compute_daily_stats(&activities, now);
//! assert_eq!(stats.completion_rate, 100);
//!
//! let series = build_day_activity_series(&activities, now, DEFAULT_WINDOW_DAYS);
//! assert_eq!(series.len(), DEFAULT_WINDOW_DAYS);
//!
//! let insights = generate_insights(&activities, now);
//! assert!(insights.len() <= 3);
//! ```

/// Common data models for wellness activities
pub mod models;

/// Derived analytics views: daily stats, heatmap, insights
pub mod intelligence;

/// Activity repository collaborator seam
pub mod repository;

/// Configuration management
pub mod config;

/// Application constants and environment-derived settings
pub mod constants;

/// Structured logging
pub mod logging;
