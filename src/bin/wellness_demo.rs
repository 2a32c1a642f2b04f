// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Drive the analytics core end to end against seeded in-memory data and
//! print every derived view.

use anyhow::Result;
use chrono::Utc;
use clap::Parser;

use serene_core::constants::heatmap::DEFAULT_WINDOW_DAYS;
use serene_core::intelligence::{
    build_day_activity_series, compute_daily_stats, generate_insights, ActivityLevel,
};
use serene_core::logging::AppLogger;
use serene_core::models::ActivityType;
use serene_core::repository::{
    sample_activities, ActivityRepository, InMemoryActivityRepository, NewActivity,
};

#[derive(Parser)]
#[command(name = "wellness-demo", about = "Exercise the Serene analytics core")]
struct Args {
    /// User whose activity log is analyzed
    #[arg(long, default_value = "default-user")]
    user: String,

    /// Heatmap window length in days
    #[arg(long, default_value_t = DEFAULT_WINDOW_DAYS)]
    window_days: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    serene_core::logging::init_from_env()?;
    let args = Args::parse();

    let now = Utc::now();
    let repo = InMemoryActivityRepository::with_seed(&args.user, sample_activities(now)).await;

    // Log one more activity the way the dashboard would
    repo.append_activity(
        &args.user,
        NewActivity {
            activity_type: ActivityType::Breathing,
            name: "Box Breathing".to_string(),
            description: Some("4-4-4-4 cycle".to_string()),
            duration: Some(240),
            completed: true,
            mood_score: None,
            mood_note: None,
        },
    )
    .await?;

    let activities = repo.load_activities(&args.user).await?;

    println!("Serene analytics for {} ({} activities)\n", args.user, activities.len());

    let stats = compute_daily_stats(&activities, now);
    AppLogger::log_stats_computed(stats.total_activities, stats.mood_score);
    println!("📊 Today's Overview");
    match stats.mood_score {
        Some(score) => println!("   Mood Score: {}%", score),
        None => println!("   Mood Score: no data"),
    }
    println!("   Completion Rate: {}%", stats.completion_rate);
    println!("   Therapy Sessions: {}", stats.mindfulness_count);
    println!("   Total Activities: {}", stats.total_activities);

    let series = build_day_activity_series(&activities, now, args.window_days);
    let bucketed: usize = series.iter().map(|d| d.activities.len()).sum();
    AppLogger::log_heatmap_built(args.window_days, bucketed);
    println!("\n🗓  Activity Heatmap (last {} days, oldest first)", args.window_days);
    let glyphs: String = series
        .iter()
        .map(|d| match d.level {
            ActivityLevel::None => '·',
            ActivityLevel::Low => '░',
            ActivityLevel::Medium => '▒',
            ActivityLevel::High => '█',
        })
        .collect();
    println!("   {}", glyphs);
    for day in series.iter().filter(|d| !d.activities.is_empty()) {
        println!("   {}:", day.date);
        for a in &day.activities {
            println!(
                "      {} {} at {}{}",
                a.activity_type.display_name(),
                a.name,
                a.formatted_time,
                if a.completed { "" } else { " (incomplete)" }
            );
        }
    }

    let insights = generate_insights(&activities, now);
    AppLogger::log_insights_generated(insights.len());
    println!("\n💡 Insights");
    if insights.is_empty() {
        println!("   Complete more activities to receive personalized insights");
    }
    for insight in &insights {
        println!("   [{:?}] {}: {}", insight.priority, insight.title, insight.description);
    }

    Ok(())
}
