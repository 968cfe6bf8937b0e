use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use poke_catalog::tcg::sort_sets_by_release;
use poke_catalog::utils::files::{load_collection, save_collection};
use poke_catalog::{
    refresh_card_values, CatalogCard, CatalogClient, CatalogConfig, PortfolioSummary,
};
use std::path::PathBuf;
use std::time::Duration;

/// Look up Pokémon TCG cards and value a collection
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TCGDex language (overrides TCGDEX_LANG)
    #[arg(long, global = true)]
    lang: Option<String>,

    /// RapidAPI key for the alternate provider (overrides RAPIDAPI_KEY)
    #[arg(long, global = true)]
    alternate_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all sets, newest first
    Sets,
    /// List the cards of a set
    Cards {
        /// Set identifier, e.g. "swsh3"
        set_id: String,
    },
    /// Search cards by name
    Search {
        /// Card name to look for
        query: String,
    },
    /// Print the market price of a card
    Price {
        /// Card name
        name: String,
        /// Card number within its set
        number: String,
    },
    /// Summarize the value of a collection file
    Value {
        /// Path to the collection JSON file
        #[arg(short, long)]
        collection: PathBuf,

        /// Re-price every owned card from the catalog and save the file
        #[arg(long, default_value_t = false)]
        refresh: bool,

        /// Number of price lookups in flight during a refresh
        #[arg(long, default_value_t = 4)]
        concurrency: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = CatalogConfig::from_env();
    if let Some(lang) = args.lang {
        config.language = lang;
    }
    if let Some(key) = args.alternate_key {
        config.alternate_api_key = Some(key);
    }

    let client = CatalogClient::new(config).context("Failed to create catalog client")?;

    match args.command {
        Commands::Sets => {
            let mut sets = client.list_sets().await.context("Failed to list sets")?;
            sort_sets_by_release(&mut sets);
            for set in &sets {
                println!(
                    "{:<16} {:<40} {:<24} {}",
                    set.id,
                    set.name,
                    set.serie.as_ref().map_or("-", |s| s.name.as_str()),
                    set.release_date.as_deref().unwrap_or("-")
                );
            }
            println!("\n{} sets", sets.len());
        }
        Commands::Cards { set_id } => {
            let cards = client
                .list_cards(&set_id)
                .await
                .with_context(|| format!("Failed to list cards of set {}", set_id))?;
            print_cards(&cards);
        }
        Commands::Search { query } => {
            let cards = client
                .search_cards(&query)
                .await
                .with_context(|| format!("Search for {:?} failed", query))?;
            print_cards(&cards);
        }
        Commands::Price { name, number } => {
            let price = client
                .resolve_price(&name, &number)
                .await
                .with_context(|| format!("Failed to price {} #{}", name, number))?;
            println!("{:.2} €", price);
        }
        Commands::Value {
            collection: path,
            refresh,
            concurrency,
        } => {
            let mut collection = load_collection(&path)
                .with_context(|| format!("Failed to load {}", path.display()))?;

            if refresh && !collection.cards.is_empty() {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(
                    ProgressStyle::default_spinner()
                        .template("{spinner:.green} [{elapsed_precise}] {msg}")
                        .context("Invalid progress template")?,
                );
                spinner.set_message(format!("Pricing {} cards...", collection.cards.len()));
                spinner.enable_steady_tick(Duration::from_millis(100));

                let report =
                    refresh_card_values(&client, &mut collection.cards, concurrency).await;
                spinner.finish_with_message(format!(
                    "Updated {} cards ({} without price, {} failed)",
                    report.updated, report.unpriced, report.failed
                ));

                save_collection(&path, &collection)
                    .with_context(|| format!("Failed to save {}", path.display()))?;
            }

            print_summary(&PortfolioSummary::of(&collection));
        }
    }

    Ok(())
}

fn print_cards(cards: &[CatalogCard]) {
    for card in cards {
        let price = card
            .market_price()
            .map_or_else(|| "-".to_string(), |p| format!("{:.2} €", p));
        println!(
            "{:<20} {:<32} #{:<6} {:<20} {:>10}  {}",
            card.id,
            card.name,
            card.local_id.as_deref().unwrap_or("?"),
            card.rarity.as_deref().unwrap_or("-"),
            price,
            card.image_url().unwrap_or_default()
        );
    }
    println!("\n{} cards", cards.len());
}

fn print_summary(summary: &PortfolioSummary) {
    println!("Total value:    {:.2} €", summary.total_value);
    println!("Invested:       {:.2} €", summary.total_invested);
    println!(
        "Profit:         {:+.2} € ({:.1}%)",
        summary.profit, summary.profit_percent
    );
    println!(
        "Cards:          {:.2} € ({} cards)",
        summary.cards_value, summary.card_count
    );
    println!(
        "Sealed:         {:.2} € ({} items)",
        summary.sealed_value, summary.sealed_count
    );
    match &summary.best_card {
        Some((name, value)) => println!("Top card:       {} ({:.2} €)", name, value),
        None => println!("Top card:       ---"),
    }
    println!("Total items:    {}", summary.total_items);
}
