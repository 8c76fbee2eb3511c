//! Built-in sample decks used until the learner saves their own

use chrono::{DateTime, Duration, Utc};

use super::models::{Category, DailyReview, Deck};

struct SeedDeck {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    total_cards: u32,
    mastered_cards: u32,
    category: Category,
    studied_ago: Duration,
    created_ago: Duration,
}

fn seed_decks() -> [SeedDeck; 5] {
    [
        SeedDeck {
            id: "deck-1",
            title: "Cambridge IELTS 19 - Reading Test 1",
            description: "Academic vocabulary from Cambridge official practice test",
            total_cards: 50,
            mastered_cards: 35,
            category: Category::Reading,
            studied_ago: Duration::hours(2),
            created_ago: Duration::days(7),
        },
        SeedDeck {
            id: "deck-2",
            title: "Essential Band 7 Vocabulary",
            description: "High-frequency words for achieving Band 7+",
            total_cards: 100,
            mastered_cards: 45,
            category: Category::Writing,
            studied_ago: Duration::days(1),
            created_ago: Duration::days(14),
        },
        SeedDeck {
            id: "deck-3",
            title: "Academic Word List - Sublist 1",
            description: "AWL words commonly used in IELTS academic tasks",
            total_cards: 60,
            mastered_cards: 52,
            category: Category::Writing,
            studied_ago: Duration::hours(5),
            created_ago: Duration::days(21),
        },
        SeedDeck {
            id: "deck-4",
            title: "IELTS Speaking Part 2 - Topic Vocabulary",
            description: "Common topics and expressions for Speaking test",
            total_cards: 40,
            mastered_cards: 18,
            category: Category::Speaking,
            studied_ago: Duration::days(3),
            created_ago: Duration::days(10),
        },
        SeedDeck {
            id: "deck-5",
            title: "Collocations for Band 8",
            description: "Advanced collocations to boost your writing score",
            total_cards: 75,
            mastered_cards: 0,
            category: Category::Writing,
            studied_ago: Duration::days(30),
            created_ago: Duration::days(2),
        },
    ]
}

/// Sample decks with timestamps relative to `now`
pub fn sample_decks(now: DateTime<Utc>) -> Vec<Deck> {
    seed_decks()
        .into_iter()
        .map(|seed| {
            let mut deck = Deck {
                id: seed.id.to_string(),
                title: seed.title.to_string(),
                description: seed.description.to_string(),
                total_cards: seed.total_cards,
                mastered_cards: seed.mastered_cards,
                progress: 0,
                thumbnail: "/api/placeholder/400/200".to_string(),
                category: seed.category,
                last_studied: now - seed.studied_ago,
                created_at: now - seed.created_ago,
            };
            deck.recompute_progress();
            deck
        })
        .collect()
}

pub fn sample_daily_review() -> DailyReview {
    DailyReview {
        id: "review-1".to_string(),
        title: "Cambridge IELTS 19".to_string(),
        word_count: 20,
        deck_id: "deck-1".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_decks_are_consistent() {
        let decks = sample_decks(Utc::now());
        assert_eq!(decks.len(), 5);
        assert!(decks.iter().all(Deck::progress_is_consistent));
        // 52 of 60 rounds to 87
        assert_eq!(decks[2].progress, 87);
    }

    #[test]
    fn test_daily_review_points_at_a_sample_deck() {
        let review = sample_daily_review();
        let decks = sample_decks(Utc::now());
        assert!(decks.iter().any(|d| d.id == review.deck_id));
    }
}
