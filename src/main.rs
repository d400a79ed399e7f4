//! Market Watch - Albion Online market dashboard, terminal edition
//!
//! Looks up an item's current buy/sell snapshot and average-price history
//! across regions and cities, and maintains a persistent watchlist with
//! live mini-previews.

use clap::{Parser, Subcommand};
use market_watch::format::{fmt_datetime, fmt_price_nonzero, DASH};
use market_watch::refresh::{self, AutoRefresh};
use market_watch::search::SearchOutcome;
use market_watch::watchlist::AddOutcome;
use market_watch::{Region, Selection, Session};
use std::time::Duration;

/// Albion Online market watch - item search, price history and watchlist
#[derive(Parser, Debug)]
#[command(name = "market_watch")]
#[command(version, about, long_about = None)]
struct Args {
    /// Game-world region: west, east or europe
    #[arg(long, default_value = "west")]
    region: String,

    /// Trading location
    #[arg(long, default_value = "Caerleon")]
    city: String,

    /// Item quality tier (1-5)
    #[arg(long, default_value_t = 1)]
    quality: u8,

    /// History aggregation bucket size in hours
    #[arg(long, default_value_t = 24)]
    scale: u32,

    /// Item id, e.g. T4_BAG
    #[arg(long, default_value = "T4_BAG")]
    item: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the item catalog (cache-first unless --force)
    Items {
        /// Skip the cache and refetch from the mirrors
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Search the item catalog
    Search { query: String },
    /// Load the market snapshot and price history for the selection
    Load {
        /// Re-load every N seconds until interrupted
        #[arg(long)]
        every: Option<u64>,
    },
    /// Manage the watchlist
    Watch {
        #[command(subcommand)]
        action: WatchAction,
    },
}

#[derive(Subcommand, Debug)]
enum WatchAction {
    /// Add the current selection
    Add,
    /// List entries with their latest sparkline values
    List,
    /// Remove an entry by its composite key
    Remove { key: String },
    /// Remove all entries
    Clear,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> market_watch::Result<()> {
    let mut session = Session::new();
    session.selection = Selection {
        region: Region::parse(&args.region),
        city: args.city.clone(),
        quality: args.quality,
        scale: args.scale,
        item: args.item.clone(),
    };

    match args.command {
        Command::Items { force } => {
            let count = session.catalog.load(force).await?;
            println!("Items: {count}");
        }
        Command::Search { query } => {
            session.catalog.load(false).await?;
            print_search(&session, &query);
        }
        Command::Load { every } => {
            load_once(&session.selection).await?;
            if let Some(secs) = every.filter(|s| *s > 0) {
                run_recurring(session.selection.clone(), secs).await;
            }
        }
        Command::Watch { action } => run_watch(&mut session, action).await?,
    }

    Ok(())
}

fn print_search(session: &Session, query: &str) {
    match session.search(query) {
        SearchOutcome::NotLoaded => {
            println!("Item list not loaded. Run `market_watch items` first.");
        }
        SearchOutcome::Prompt => {
            println!("Type at least 2 characters. Try \"bag\", \"cape\", \"omelette\", \"t6\".");
        }
        SearchOutcome::NoMatches => println!("No matches. Try fewer words."),
        SearchOutcome::Matches(entries) => {
            for entry in entries {
                println!("{:<40} {:<30} {}", entry.name, entry.meta(), entry.id);
            }
        }
    }
}

async fn load_once(sel: &Selection) -> market_watch::Result<()> {
    println!("{}", sel.describe());

    let main = refresh::refresh_main(sel).await?;

    match main.kpis {
        Some(k) => {
            println!(
                "Sell min: {:>12}  ({})",
                fmt_price_nonzero(k.sell_min),
                fmt_datetime(k.sell_min_date.as_deref())
            );
            println!(
                "Buy max:  {:>12}  ({})",
                fmt_price_nonzero(k.buy_max),
                fmt_datetime(k.buy_max_date.as_deref())
            );
        }
        None => println!("No snapshot rows for this selection."),
    }

    match main.trend {
        Some(t) => {
            let arrow = if t.change >= 0.0 { "▲" } else { "▼" };
            println!(
                "Trend:    {arrow} {:.0} ({:.1}% from first point)",
                t.change.abs(),
                t.percent
            );
        }
        None => println!("Trend:    {DASH} (not enough history points)"),
    }

    for row in &main.rows {
        println!(
            "{:<20} {:<15} Q{} sell {:>10} buy {:>10}",
            row.item_id,
            row.city,
            row.quality,
            fmt_price_nonzero(row.sell_price_min),
            fmt_price_nonzero(row.buy_price_max)
        );
    }
    println!("Loaded: {} history points", main.points.len());

    Ok(())
}

async fn run_recurring(sel: Selection, secs: u64) {
    log::info!("Re-loading every {secs}s, press Ctrl-C to stop");

    let mut timer = AutoRefresh::new();
    timer.configure(Some(Duration::from_secs(secs)), move || {
        let sel = sel.clone();
        async move {
            if let Err(e) = load_once(&sel).await {
                eprintln!("Error: {e}");
            }
        }
    });

    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to wait for Ctrl-C: {e}");
    }
    timer.stop();
}

async fn run_watch(session: &mut Session, action: WatchAction) -> market_watch::Result<()> {
    match action {
        WatchAction::Add => match session.add_current_to_watchlist()? {
            AddOutcome::Added => println!("Added to watchlist."),
            AddOutcome::AlreadyPresent => println!("Already in watchlist."),
        },
        WatchAction::List => {
            if session.watchlist.is_empty() {
                println!("Watchlist: empty");
                return Ok(());
            }
            let sparks = refresh::refresh_sparklines(session.watchlist.list()).await;
            for entry in session.watchlist.list() {
                let key = entry.watch_key();
                let mini = match sparks.get(&key) {
                    Some(Some(spark)) => match spark.last {
                        Some(v) => fmt_price_nonzero(v.round() as u64),
                        None => DASH.to_string(),
                    },
                    _ => DASH.to_string(),
                };
                println!("{:<55} {:>12}  [{key}]", entry.describe(), mini);
            }
        }
        WatchAction::Remove { key } => {
            if session.watchlist.remove(&key) {
                println!("Removed.");
            } else {
                println!("No such entry: {key}");
            }
        }
        WatchAction::Clear => {
            session.watchlist.clear();
            println!("Watchlist cleared.");
        }
    }
    Ok(())
}
