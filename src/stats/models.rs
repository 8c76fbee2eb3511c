//! Learner statistics and targets

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest IELTS band
pub const MAX_BAND: f32 = 9.0;

#[derive(Error, Debug, PartialEq)]
pub enum StatsError {
    #[error("Band {0} is outside 0-9 or not a multiple of 0.5")]
    InvalidBand(f32),

    #[error("Weekly goal must be between 1 and 7 days, got {0}")]
    InvalidWeeklyGoal(u32),
}

/// Headline numbers on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Consecutive study days
    pub streak: u32,
    pub total_mastered: u32,
    pub estimated_band: f32,
    pub study_minutes: u32,
    /// Study days aimed for each week
    #[serde(default = "default_weekly_goal")]
    pub weekly_goal: u32,
}

fn default_weekly_goal() -> u32 {
    7
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            streak: 3,
            total_mastered: 120,
            estimated_band: 6.5,
            study_minutes: 245,
            weekly_goal: default_weekly_goal(),
        }
    }
}

impl UserStats {
    pub fn validate(&self) -> Result<(), StatsError> {
        validate_band(self.estimated_band)?;
        if !(1..=7).contains(&self.weekly_goal) {
            return Err(StatsError::InvalidWeeklyGoal(self.weekly_goal));
        }
        Ok(())
    }

    /// Streak progress toward the weekly goal, 0-100
    pub fn weekly_goal_percent(&self) -> u32 {
        ratio_percent(self.streak as f64, self.weekly_goal as f64)
    }
}

/// Goals each stat is displayed against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTargets {
    pub streak_target: u32,
    pub weekly_streak_target: u32,
    pub total_words_mastered_target: u32,
    pub estimated_band_target: f32,
    pub study_minutes_target: u32,
}

impl Default for UserTargets {
    fn default() -> Self {
        Self {
            streak_target: 200,
            weekly_streak_target: 7,
            total_words_mastered_target: 500,
            estimated_band_target: 7.5,
            study_minutes_target: 300,
        }
    }
}

impl UserTargets {
    pub fn validate(&self) -> Result<(), StatsError> {
        validate_band(self.estimated_band_target)
    }
}

/// Check a band score sits on the 0-9 half-point scale
pub fn validate_band(band: f32) -> Result<(), StatsError> {
    let on_scale = (0.0..=MAX_BAND).contains(&band);
    let half_step = (band * 2.0).fract() == 0.0;
    if on_scale && half_step {
        Ok(())
    } else {
        Err(StatsError::InvalidBand(band))
    }
}

/// `value / target` as a whole percentage clamped to 0-100.
///
/// A non-positive target yields 0.
pub fn ratio_percent(value: f64, target: f64) -> u32 {
    if target <= 0.0 || !value.is_finite() || !target.is_finite() {
        return 0;
    }
    ((value / target) * 100.0).clamp(0.0, 100.0).floor() as u32
}
