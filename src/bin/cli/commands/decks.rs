use anyhow::Result;

use nova_lib::dashboard::DeckCard;
use nova_lib::flashcards::Category;

use crate::app::App;
use crate::render::terminal::{category_color, paint, progress_bar, Color};
use crate::OutputFormat;

pub fn run(
    app: &App,
    category: Option<Category>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let mut decks = app.store.decks(app.now);
    if let Some(category) = category {
        decks.retain(|d| d.category == category);
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&decks)?);
        }
        OutputFormat::Plain => {
            if decks.is_empty() {
                println!("No decks found.");
                return Ok(());
            }

            let max_title_len = decks.iter().map(|d| d.title.len()).max().unwrap_or(5).max(5);

            for deck in &decks {
                let card = DeckCard::from_deck(deck, app.now, &app.settings.date_format);
                println!(
                    "{} {:<width$} {} {:>7}  {}",
                    paint(&format!("{:<9}", card.badge), category_color(&card.badge), use_color),
                    card.title,
                    progress_bar(card.progress, 10),
                    card.progress_label,
                    paint(&card.last_studied, Color::GRAY, use_color),
                    width = max_title_len
                );
                println!("          {}", paint(&card.id, Color::DIM, use_color));
            }

            println!("\n{} decks total", decks.len());
        }
    }

    Ok(())
}
