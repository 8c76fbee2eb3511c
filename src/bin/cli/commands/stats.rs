use anyhow::{Context, Result};

use nova_lib::stats::{UserStats, UserTargets};

use crate::app::App;
use crate::{OutputFormat, StatsCommand, TargetsCommand};

pub fn run_stats(app: &App, command: StatsCommand, format: &OutputFormat) -> Result<()> {
    let stats = match command {
        StatsCommand::Show => app.store.stats(),
        StatsCommand::Set {
            streak,
            total_mastered,
            band,
            minutes,
            weekly_goal,
        } => {
            let mut stats = app.store.stats();
            if let Some(v) = streak {
                stats.streak = v;
            }
            if let Some(v) = total_mastered {
                stats.total_mastered = v;
            }
            if let Some(v) = band {
                stats.estimated_band = v;
            }
            if let Some(v) = minutes {
                stats.study_minutes = v;
            }
            if let Some(v) = weekly_goal {
                stats.weekly_goal = v;
            }
            app.store.save_stats(&stats).context("Failed to save stats")?;
            stats
        }
    };

    print_stats(&stats, format)
}

pub fn run_targets(app: &App, command: TargetsCommand, format: &OutputFormat) -> Result<()> {
    let targets = match command {
        TargetsCommand::Show => app.store.targets(),
        TargetsCommand::Set {
            streak,
            weekly_streak,
            words_mastered,
            band,
            minutes,
        } => {
            let mut targets = app.store.targets();
            if let Some(v) = streak {
                targets.streak_target = v;
            }
            if let Some(v) = weekly_streak {
                targets.weekly_streak_target = v;
            }
            if let Some(v) = words_mastered {
                targets.total_words_mastered_target = v;
            }
            if let Some(v) = band {
                targets.estimated_band_target = v;
            }
            if let Some(v) = minutes {
                targets.study_minutes_target = v;
            }
            app.store.save_targets(&targets).context("Failed to save targets")?;
            targets
        }
    };

    print_targets(&targets, format)
}

fn print_stats(stats: &UserStats, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(stats)?),
        OutputFormat::Plain => {
            println!("Streak:          {} day(s)", stats.streak);
            println!("Words mastered:  {}", stats.total_mastered);
            println!("Estimated band:  {:.1}", stats.estimated_band);
            println!("Study time:      {}m", stats.study_minutes);
            println!(
                "Weekly goal:     {} / {} ({}%)",
                stats.streak,
                stats.weekly_goal,
                stats.weekly_goal_percent()
            );
        }
    }
    Ok(())
}

fn print_targets(targets: &UserTargets, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(targets)?),
        OutputFormat::Plain => {
            println!("Streak:          {} day(s)", targets.streak_target);
            println!("Weekly streak:   {} day(s)", targets.weekly_streak_target);
            println!("Words mastered:  {}", targets.total_words_mastered_target);
            println!("Estimated band:  {:.1}", targets.estimated_band_target);
            println!("Study time:      {}m", targets.study_minutes_target);
        }
    }
    Ok(())
}
