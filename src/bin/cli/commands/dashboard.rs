use anyhow::Result;

use nova_lib::dashboard::{sidebar_nav, DashboardView, SidebarState};

use crate::app::App;
use crate::render::terminal::{category_color, heading, paint, progress_bar, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let view = app.dashboard();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "sidebar": SidebarState::default(),
                "navigation": sidebar_nav("/flashcards"),
                "dashboard": view,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => print_plain(&view, use_color),
    }

    Ok(())
}

fn print_plain(view: &DashboardView, use_color: bool) {
    let nav: Vec<String> = sidebar_nav("/flashcards")
        .iter()
        .map(|link| {
            if link.active {
                paint(&format!("[{}]", link.label), Color::BLUE, use_color)
            } else {
                link.label.to_string()
            }
        })
        .collect();
    println!("{}  {}", heading("NOVA AI", use_color), nav.join("  "));
    println!();
    println!("{}", heading("Welcome back!", use_color));
    println!("Track your IELTS progress and continue your learning journey");
    println!();

    for card in &view.stat_cards {
        let value = match card.suffix {
            Some(suffix) => format!("{} {}", card.value, suffix),
            None => card.value.clone(),
        };
        println!(
            "  {:<16} {:>8}  {} of {}",
            card.label,
            value,
            progress_bar(card.percent, 10),
            card.target
        );
    }
    println!(
        "  {:<16} {:>8}  {}",
        "Weekly Goal",
        format!("{} / {}", view.weekly_goal.streak, view.weekly_goal.goal),
        progress_bar(view.weekly_goal.percent, 10)
    );
    println!();

    if let Some(review) = &view.daily_review {
        println!("{}", heading(&format!("Daily Review Ready - {}", review.title), use_color));
        println!("  Review {} words from your current studies", review.word_count);
        println!();
    }

    println!("{}", heading("Recent Decks", use_color));
    if view.recent_decks.is_empty() {
        println!("  (no decks yet)");
    }
    for card in &view.recent_decks {
        println!(
            "  {} {}  {}",
            paint(&format!("{:<9}", card.badge), category_color(&card.badge), use_color),
            card.title,
            paint(&card.last_studied, Color::GRAY, use_color)
        );
        println!(
            "            {} {:>7}  {}",
            progress_bar(card.progress, 20),
            card.progress_label,
            paint(&card.id, Color::DIM, use_color)
        );
    }
    println!();

    if let Some(rec) = &view.recommendation {
        println!(
            "{} {} ({:.1}% mastered)",
            heading("Focus next:", use_color),
            rec.category.label(),
            rec.percent()
        );
        for deck in &rec.decks {
            println!("  - {} ({}/{})", deck.title, deck.mastered_cards, deck.total_cards);
        }
        println!();
    }

    println!("{}", heading("Quick Actions", use_color));
    for action in &view.quick_actions {
        println!("  {:<16} {}", action.title, paint(action.description, Color::GRAY, use_color));
    }
}
