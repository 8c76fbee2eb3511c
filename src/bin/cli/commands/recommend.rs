use anyhow::Result;

use nova_lib::flashcards::{aggregate_by_category, weakest_category_with_limit};

use crate::app::App;
use crate::render::terminal::{heading, progress_bar};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let decks = app.store.decks(app.now);
    let aggregates = aggregate_by_category(&decks);
    let recommendation =
        weakest_category_with_limit(&aggregates, app.settings.recommended_deck_limit);

    match format {
        OutputFormat::Json => {
            let categories: Vec<serde_json::Value> = aggregates
                .iter()
                .map(|a| {
                    serde_json::json!({
                        "category": a.category,
                        "totalCards": a.total_cards,
                        "masteredCards": a.mastered_cards,
                        "ratio": a.ratio(),
                        "deckCount": a.decks.len(),
                    })
                })
                .collect();
            let output = serde_json::json!({
                "categories": categories,
                "recommendation": recommendation,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{:<10} {:>9}  Mastery", "Category", "Cards");
            println!("{} {}", "\u{2500}".repeat(10), "\u{2500}".repeat(24));
            for aggregate in aggregates.iter() {
                println!(
                    "{:<10} {:>9}  {} {}%",
                    aggregate.category.label(),
                    format!("{}/{}", aggregate.mastered_cards, aggregate.total_cards),
                    progress_bar(aggregate.percent(), 10),
                    aggregate.percent()
                );
            }
            println!();

            match recommendation {
                Some(rec) => {
                    println!(
                        "{} {} at {:.1}%",
                        heading("Weakest category:", use_color),
                        rec.category.label(),
                        rec.percent()
                    );
                    for deck in &rec.decks {
                        println!("  - {} [{}]", deck.title, deck.id);
                    }
                }
                None => println!("No recommendation: add cards to a deck first."),
            }
        }
    }

    Ok(())
}
