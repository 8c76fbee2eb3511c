mod app;
mod commands;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nova_lib::flashcards::Category;

#[derive(Parser)]
#[command(name = "nova-cli", about = "IELTS flashcard dashboard", version)]
struct Cli {
    /// Read settings from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the JSON records
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep everything in memory (starts from the sample decks)
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Show the full dashboard (default)
    Dashboard,

    /// List decks with their progress
    Decks {
        /// Only show one category
        #[arg(long)]
        category: Option<Category>,
    },

    /// Show per-category mastery and the weakest category
    Recommend,

    /// Show or update learner stats
    #[command(subcommand)]
    Stats(StatsCommand),

    /// Show or update targets
    #[command(subcommand)]
    Targets(TargetsCommand),

    /// Create, study or delete a deck
    #[command(subcommand)]
    Deck(DeckCommand),

    /// Replace all saved data with the sample decks
    Reset,

    /// List the landing page slides
    Slides {
        /// Start from this slide (1-based)
        #[arg(long, default_value = "1")]
        start: usize,
    },

    /// Ask the mock study companion a question
    Chat {
        /// Message text
        message: String,
    },
}

#[derive(Subcommand)]
pub enum StatsCommand {
    /// Print current stats
    Show,

    /// Update one or more fields
    Set {
        #[arg(long)]
        streak: Option<u32>,
        #[arg(long)]
        total_mastered: Option<u32>,
        /// Estimated band (0-9 in 0.5 steps)
        #[arg(long)]
        band: Option<f32>,
        #[arg(long)]
        minutes: Option<u32>,
        /// Study days per week (1-7)
        #[arg(long)]
        weekly_goal: Option<u32>,
    },
}

#[derive(Subcommand)]
pub enum TargetsCommand {
    /// Print current targets
    Show,

    /// Update one or more targets
    Set {
        #[arg(long)]
        streak: Option<u32>,
        #[arg(long)]
        weekly_streak: Option<u32>,
        #[arg(long)]
        words_mastered: Option<u32>,
        #[arg(long)]
        band: Option<f32>,
        #[arg(long)]
        minutes: Option<u32>,
    },
}

#[derive(Subcommand)]
pub enum DeckCommand {
    /// Create a new deck
    Create {
        /// Deck title
        title: String,
        #[arg(long)]
        category: Category,
        /// Number of cards in the deck
        #[arg(long, default_value = "0")]
        cards: u32,
        #[arg(long)]
        description: Option<String>,
    },

    /// Record a study session
    Study {
        /// Deck id
        id: String,
        /// Cards newly mastered in this session
        #[arg(long, default_value = "0")]
        mastered: u32,
    },

    /// Delete a deck
    Delete {
        /// Deck id
        id: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let app = app::App::new(cli.config.as_deref(), cli.data_dir.clone(), cli.ephemeral)?;

    match cli.command.unwrap_or(Command::Dashboard) {
        Command::Dashboard => commands::dashboard::run(&app, &cli.format, use_color)?,
        Command::Decks { category } => {
            commands::decks::run(&app, category, &cli.format, use_color)?;
        }
        Command::Recommend => commands::recommend::run(&app, &cli.format, use_color)?,
        Command::Stats(subcmd) => commands::stats::run_stats(&app, subcmd, &cli.format)?,
        Command::Targets(subcmd) => commands::stats::run_targets(&app, subcmd, &cli.format)?,
        Command::Deck(subcmd) => commands::deck::run(&app, subcmd, &cli.format)?,
        Command::Reset => {
            app.store.reset(app.now)?;
            println!("Study data reset to the sample decks.");
        }
        Command::Slides { start } => commands::slides::run(start, &cli.format, use_color)?,
        Command::Chat { message } => commands::chat::run(&app, &message, &cli.format)?,
    }

    Ok(())
}
