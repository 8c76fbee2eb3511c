use anyhow::{Context, Result};

use nova_lib::storage::CreateDeckRequest;

use crate::app::App;
use crate::{DeckCommand, OutputFormat};

pub fn run(app: &App, command: DeckCommand, format: &OutputFormat) -> Result<()> {
    match command {
        DeckCommand::Create {
            title,
            category,
            cards,
            description,
        } => {
            let request = CreateDeckRequest {
                title,
                description,
                category,
                total_cards: cards,
            };
            let deck = app
                .store
                .create_deck(request, app.now)
                .context("Failed to create deck")?;

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&deck)?),
                OutputFormat::Plain => println!("Created deck: {} ({})", deck.title, deck.id),
            }
        }
        DeckCommand::Study { id, mastered } => {
            let deck = app
                .store
                .study_deck(&id, mastered, app.now)
                .with_context(|| format!("Failed to record study session for '{}'", id))?;

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&deck)?),
                OutputFormat::Plain => println!(
                    "{}: {}/{} mastered ({}%)",
                    deck.title, deck.mastered_cards, deck.total_cards, deck.progress
                ),
            }
        }
        DeckCommand::Delete { id } => {
            app.store
                .delete_deck(&id, app.now)
                .with_context(|| format!("Failed to delete deck '{}'", id))?;

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::json!({ "deleted": id }));
                }
                OutputFormat::Plain => println!("Deleted deck {}", id),
            }
        }
    }

    Ok(())
}
