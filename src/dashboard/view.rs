//! Dashboard view-model
//!
//! `DashboardView::build` turns the stored records into everything the
//! dashboard shows. It is pure; rendering is up to the caller.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::Settings;
use crate::flashcards::{
    aggregate_by_category, recent_decks, weakest_category_with_limit, CategoryAggregate,
    DailyReview, Deck, Recommendation, RelativeTime,
};
use crate::stats::{ratio_percent, UserStats, UserTargets};

/// Knobs for building a view
#[derive(Debug, Clone)]
pub struct ViewOptions {
    pub date_format: String,
    pub recent_deck_limit: usize,
    pub recommended_deck_limit: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for ViewOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            date_format: settings.date_format.clone(),
            recent_deck_limit: settings.recent_deck_limit,
            recommended_deck_limit: settings.recommended_deck_limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<&'static str>,
    pub target: String,
    /// Progress toward the target, 0-100
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyGoal {
    pub streak: u32,
    pub goal: u32,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckCard {
    pub id: String,
    pub badge: String,
    pub title: String,
    pub description: String,
    pub last_studied: String,
    /// "mastered/total"
    pub progress_label: String,
    pub progress: u32,
}

impl DeckCard {
    pub fn from_deck(deck: &Deck, now: DateTime<Utc>, date_format: &str) -> Self {
        Self {
            id: deck.id.clone(),
            badge: deck.category.label(),
            title: deck.title.clone(),
            description: deck.description.clone(),
            last_studied: RelativeTime::between(deck.last_studied, now).format_with(date_format),
            progress_label: format!("{}/{}", deck.mastered_cards, deck.total_cards),
            progress: deck.mastery_percent(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAction {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction {
            id: "create-deck",
            title: "Create Deck",
            description: "Start a new flashcard deck",
        },
        QuickAction {
            id: "upload-pdf",
            title: "Upload PDF",
            description: "Import IELTS material",
        },
        QuickAction {
            id: "organize-decks",
            title: "Organize Decks",
            description: "Create folder",
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub stat_cards: Vec<StatCard>,
    pub weekly_goal: WeeklyGoal,
    pub daily_review: Option<DailyReview>,
    pub recent_decks: Vec<DeckCard>,
    pub quick_actions: Vec<QuickAction>,
    pub categories: Vec<CategoryAggregate>,
    pub recommendation: Option<Recommendation>,
}

impl DashboardView {
    pub fn build(
        decks: &[Deck],
        stats: &UserStats,
        targets: &UserTargets,
        daily_review: Option<DailyReview>,
        now: DateTime<Utc>,
        options: &ViewOptions,
    ) -> Self {
        let aggregates = aggregate_by_category(decks);
        let recommendation =
            weakest_category_with_limit(&aggregates, options.recommended_deck_limit);

        let recent = recent_decks(decks, options.recent_deck_limit)
            .iter()
            .map(|deck| DeckCard::from_deck(deck, now, &options.date_format))
            .collect();

        Self {
            stat_cards: stat_cards(stats, targets),
            weekly_goal: WeeklyGoal {
                streak: stats.streak,
                goal: stats.weekly_goal,
                percent: stats.weekly_goal_percent(),
            },
            daily_review,
            recent_decks: recent,
            quick_actions: quick_actions(),
            categories: aggregates.iter().cloned().collect(),
            recommendation,
        }
    }
}

fn stat_cards(stats: &UserStats, targets: &UserTargets) -> Vec<StatCard> {
    vec![
        StatCard {
            label: "Estimated Band",
            value: format!("{:.1}", stats.estimated_band),
            suffix: Some("↑"),
            target: format!("{:.1}", targets.estimated_band_target),
            percent: ratio_percent(
                stats.estimated_band as f64,
                targets.estimated_band_target as f64,
            ),
        },
        StatCard {
            label: "Study Time",
            value: format!("{}m", stats.study_minutes),
            suffix: None,
            target: format!("{}m", targets.study_minutes_target),
            percent: ratio_percent(stats.study_minutes as f64, targets.study_minutes_target as f64),
        },
        StatCard {
            label: "Day Streak",
            value: stats.streak.to_string(),
            suffix: None,
            target: targets.streak_target.to_string(),
            percent: ratio_percent(stats.streak as f64, targets.streak_target as f64),
        },
        StatCard {
            label: "Words Mastered",
            value: stats.total_mastered.to_string(),
            suffix: None,
            target: targets.total_words_mastered_target.to_string(),
            percent: ratio_percent(
                stats.total_mastered as f64,
                targets.total_words_mastered_target as f64,
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flashcards::seed::{sample_daily_review, sample_decks};
    use crate::flashcards::Category;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    fn sample_view() -> DashboardView {
        DashboardView::build(
            &sample_decks(now()),
            &UserStats::default(),
            &UserTargets::default(),
            Some(sample_daily_review()),
            now(),
            &ViewOptions::default(),
        )
    }

    #[test]
    fn test_recent_decks_order_and_labels() {
        let view = sample_view();
        let ids: Vec<&str> = view.recent_decks.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["deck-1", "deck-3", "deck-2", "deck-4"]);

        let labels: Vec<&str> = view.recent_decks.iter().map(|c| c.last_studied.as_str()).collect();
        assert_eq!(labels, vec!["2 hour(s) ago", "5 hour(s) ago", "Yesterday", "3 day(s) ago"]);
        assert_eq!(view.recent_decks[0].badge, "READING");
        assert_eq!(view.recent_decks[0].progress_label, "35/50");
    }

    #[test]
    fn test_sample_recommendation() {
        // writing: 97 of 235 (41%) is below speaking at 45%
        let view = sample_view();
        let rec = view.recommendation.unwrap();
        assert_eq!(rec.category, Category::Writing);
        let ids: Vec<&str> = rec.decks.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["deck-2", "deck-3"]);
    }

    #[test]
    fn test_stat_cards() {
        let view = sample_view();
        let band = &view.stat_cards[0];
        assert_eq!(band.value, "6.5");
        assert_eq!(band.suffix, Some("↑"));
        assert_eq!(band.percent, 86);
        assert_eq!(view.stat_cards[1].value, "245m");
        assert_eq!(view.weekly_goal.percent, 42);
        assert_eq!(view.quick_actions.len(), 3);
    }

    #[test]
    fn test_empty_decks() {
        let view = DashboardView::build(
            &[],
            &UserStats::default(),
            &UserTargets::default(),
            None,
            now(),
            &ViewOptions::default(),
        );
        assert!(view.recent_decks.is_empty());
        assert!(view.categories.is_empty());
        assert!(view.recommendation.is_none());
    }

    #[test]
    fn test_zero_targets_do_not_divide() {
        let targets = UserTargets {
            streak_target: 0,
            weekly_streak_target: 0,
            total_words_mastered_target: 0,
            estimated_band_target: 0.0,
            study_minutes_target: 0,
        };
        let view = DashboardView::build(
            &[],
            &UserStats::default(),
            &targets,
            None,
            now(),
            &ViewOptions::default(),
        );
        assert!(view.stat_cards.iter().all(|c| c.percent == 0));
    }

    #[test]
    fn test_invalid_date_format_renders_default() {
        let mut deck = sample_decks(now()).remove(0);
        deck.last_studied = now() - chrono::Duration::days(30);
        let options = ViewOptions {
            date_format: "%Q".to_string(),
            ..ViewOptions::default()
        };

        let card = DeckCard::from_deck(&deck, now(), &options.date_format);
        let expected = RelativeTime::between(deck.last_studied, now()).to_string();
        assert_eq!(card.last_studied, expected);
    }
}
