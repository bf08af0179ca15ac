//! tarot-deck CLI
//!
//! Command-line interface for browsing tarot decks, looking up cards, and
//! fetching the reference deck.

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use tarot_deck_core::{CANONICAL_DECK_SIZE, CardId, Rank, Suit};
use tarot_deck_fetch::{FetchProgress, download_reference_deck};
use tarot_deck_lib::registry::DeckRegistry;
use tarot_deck_lib::{Card, Deck, settings};

mod error;
use error::CliError;

#[derive(Parser)]
#[command(name = "tarot-deck")]
#[command(about = "Browse tarot decks and look up cards", long_about = None)]
struct Cli {
    /// Extra deck directories to scan, in addition to the data directory
    #[arg(short, long, global = true)]
    root: Vec<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all available decks
    List,

    /// Show a deck's metadata, suits, and exclusions
    Show {
        /// Deck name (defaults to the reference deck)
        deck: Option<String>,
    },

    /// Show one card from a deck
    Card {
        /// Card id, e.g. major_arcana.00 or minor_arcana.wands.ace
        card_id: String,

        /// Deck name (defaults to the reference deck)
        #[arg(short, long)]
        deck: Option<String>,
    },

    /// Draw random cards from a deck
    Draw {
        /// Deck name (defaults to the reference deck)
        #[arg(short, long)]
        deck: Option<String>,

        /// Number of cards to draw
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },

    /// Download the reference deck
    Fetch {
        /// Re-download even if the deck is already present
        #[arg(short, long)]
        force: bool,
    },

    /// Manage extra deck directories saved in settings
    Roots {
        #[command(subcommand)]
        action: RootsAction,
    },
}

#[derive(Subcommand)]
enum RootsAction {
    /// List saved deck roots
    List,

    /// Save a deck root
    Add { path: PathBuf },

    /// Remove all saved deck roots
    Clear,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List => run_list(&cli.root),
        Commands::Show { deck } => run_show(&cli.root, deck.as_deref()),
        Commands::Card { card_id, deck } => run_card(&cli.root, deck.as_deref(), &card_id),
        Commands::Draw { deck, count } => run_draw(&cli.root, deck.as_deref(), count),
        Commands::Fetch { force } => run_fetch(force),
        Commands::Roots { action } => match action {
            RootsAction::List => run_roots_list(),
            RootsAction::Add { path } => run_roots_add(path),
            RootsAction::Clear => run_roots_clear(),
        },
    };

    if let Err(e) = result {
        eprintln!(
            "{} {e}",
            "error:".if_supports_color(Stdout, |t| t.red()),
        );
        std::process::exit(1);
    }
}

/// Build the registry from the default locations plus CLI and saved roots.
fn build_registry(cli_roots: &[PathBuf]) -> DeckRegistry {
    let extra = settings::resolve_extra_roots(cli_roots);
    log::debug!("scanning {} extra deck root(s)", extra.len());
    DeckRegistry::with_default_locations(&extra)
}

/// Pick a deck by name, or the reference deck when no name is given.
fn select_deck<'a>(registry: &'a DeckRegistry, name: Option<&str>) -> Result<&'a Deck, CliError> {
    match name {
        Some(name) => {
            if let Some(reference) = registry.reference_deck() {
                if reference.name() == name {
                    return Ok(reference);
                }
            }
            registry
                .deck(name)
                .ok_or_else(|| CliError::unknown_deck(name))
        }
        None => registry.reference_deck().ok_or(CliError::NoReferenceDeck),
    }
}

fn run_list(cli_roots: &[PathBuf]) -> Result<(), CliError> {
    let registry = build_registry(cli_roots);
    let decks = registry.all_decks();

    if decks.is_empty() {
        println!("No decks found. Run 'tarot-deck fetch' to download the reference deck.");
        return Ok(());
    }

    println!("Available decks:");
    for deck in decks {
        let is_reference = registry
            .reference_deck()
            .is_some_and(|reference| reference.path() == deck.path());
        let marker = if is_reference { " [reference]" } else { "" };
        println!(
            "  {} v{} ({} cards){}",
            deck.name().if_supports_color(Stdout, |t| t.bold()),
            deck.version(),
            deck.cards().len(),
            marker,
        );
        if let Some(description) = deck.description() {
            println!("      {description}");
        }
    }
    Ok(())
}

fn run_show(cli_roots: &[PathBuf], name: Option<&str>) -> Result<(), CliError> {
    let registry = build_registry(cli_roots);
    let deck = select_deck(&registry, name)?;

    println!("{}", deck.name().if_supports_color(Stdout, |t| t.bold()));
    println!("  version:   {}", deck.version());
    if let Some(description) = deck.description() {
        println!("  about:     {description}");
    }
    println!("  card back: {}", deck.card_back());
    println!("  cards:     {}", deck.cards().len());
    println!("  path:      {}", deck.path().display());

    println!();
    println!("Suits:");
    for &suit in Suit::all() {
        let excluded = if deck.is_suit_excluded(suit) {
            " (excluded)"
        } else {
            ""
        };
        println!(
            "  {:<10} {}{excluded}",
            suit.canonical_name(),
            deck.display_suit_name(suit),
        );
    }

    println!();
    println!("Courts:");
    for &rank in Rank::all() {
        if rank.is_court() {
            println!(
                "  {:<10} {}",
                rank.canonical_name(),
                deck.display_court_name(rank),
            );
        }
    }

    let excluded_count = CANONICAL_DECK_SIZE - deck.cards().len();
    if excluded_count > 0 {
        println!();
        match deck.exclusion_reason() {
            Some(reason) => println!("Excluded cards: {excluded_count} ({reason})"),
            None => println!("Excluded cards: {excluded_count}"),
        }
    }
    Ok(())
}

fn run_card(cli_roots: &[PathBuf], name: Option<&str>, raw_id: &str) -> Result<(), CliError> {
    let id: CardId = raw_id.parse()?;
    let registry = build_registry(cli_roots);
    let deck = select_deck(&registry, name)?;
    let card = deck
        .card_by_id(&id)
        .ok_or_else(|| CliError::card_not_found(raw_id))?;
    print_card(deck, card);
    Ok(())
}

fn run_draw(cli_roots: &[PathBuf], name: Option<&str>, count: usize) -> Result<(), CliError> {
    let registry = build_registry(cli_roots);
    let deck = select_deck(&registry, name)?;
    if deck.cards().is_empty() {
        return Err(CliError::other("deck has no cards to draw"));
    }

    for card in deck.draw(count) {
        println!(
            "  {}  {}",
            card.name.if_supports_color(Stdout, |t| t.bold()),
            card.id.to_string().if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}

fn print_card(deck: &Deck, card: &Card) {
    println!(
        "{}  {}",
        card.name.if_supports_color(Stdout, |t| t.bold()),
        card.id.to_string().if_supports_color(Stdout, |t| t.dimmed()),
    );
    match &card.display {
        None => println!("  {}", card.arcana()),
        Some(display) => println!(
            "  {} of {} ({})",
            display.rank,
            display.suit,
            card.arcana(),
        ),
    }
    if let Some(alt_text) = &card.alt_text {
        println!("  {alt_text}");
    }
    match &card.image {
        Some(path) => println!("  image: {}", path.display()),
        None => println!("  image: none"),
    }
    println!("  deck:  {}", deck.name());
}

fn run_fetch(force: bool) -> Result<(), CliError> {
    let mut registry = DeckRegistry::with_default_locations(&[]);
    if registry.is_reference_deck_present() && !force {
        println!(
            "Reference deck already present at {}",
            registry.reference_deck_path().display(),
        );
        println!("Use --force to re-download.");
        return Ok(());
    }

    let dest = registry.reference_root().to_path_buf();
    let (tx, rx) = mpsc::channel();
    let handle = thread::spawn(move || download_reference_deck(&dest, &tx));

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("/-\\|"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Connecting...");

    for update in rx {
        match update {
            FetchProgress::Started { total_bytes } => {
                if let Some(total) = total_bytes {
                    pb.set_style(
                        ProgressStyle::with_template(
                            "  {bar:30.cyan} {bytes}/{total_bytes} {msg}",
                        )
                        .unwrap(),
                    );
                    pb.set_length(total);
                }
                pb.set_message("Downloading...");
            }
            FetchProgress::Downloading { bytes_read, .. } => pb.set_position(bytes_read),
            FetchProgress::Extracting => pb.set_message("Extracting..."),
            FetchProgress::Completed | FetchProgress::Failed { .. } => pb.finish_and_clear(),
        }
    }

    match handle.join() {
        Ok(Ok(())) => {
            registry.reload_reference_deck();
            match registry.reference_deck() {
                Some(deck) => println!(
                    "{} Downloaded '{}' ({} cards)",
                    "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                    deck.name(),
                    deck.cards().len(),
                ),
                None => println!("Download finished, but the deck failed to load."),
            }
            Ok(())
        }
        Ok(Err(e)) => Err(CliError::from(e)),
        Err(_) => Err(CliError::other("download thread panicked")),
    }
}

fn run_roots_list() -> Result<(), CliError> {
    let roots = settings::load_deck_roots();
    if roots.is_empty() {
        println!("No extra deck roots saved.");
    } else {
        for root in roots {
            println!("  {}", root.display());
        }
    }
    println!();
    println!("Settings file: {}", settings::settings_path().display());
    Ok(())
}

fn run_roots_add(path: PathBuf) -> Result<(), CliError> {
    let mut roots = settings::load_deck_roots();
    if roots.contains(&path) {
        println!("Already saved: {}", path.display());
        return Ok(());
    }
    roots.push(path.clone());
    settings::save_deck_roots(Some(&roots))?;
    println!("Added {}", path.display());
    Ok(())
}

fn run_roots_clear() -> Result<(), CliError> {
    settings::save_deck_roots(None)?;
    println!("Cleared saved deck roots.");
    Ok(())
}
