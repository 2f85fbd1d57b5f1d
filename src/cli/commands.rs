use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

use crate::notifications::{Notification, Severity};
use crate::search::{suggestions, validate_query};
use crate::state::Session;
use crate::storage::FileStore;
use crate::tui::run_interactive;
use crate::utils::{format_path_with_tilde, get_data_dir, sanitize_for_display};

/// Log file written in TUI mode, inside the data directory
const TUI_LOG_FILENAME: &str = "storefront.log";

#[derive(Parser)]
#[command(name = "storefront")]
#[command(version = "0.1.0")]
#[command(about = "Terminal storefront with a persistent cart and search history", long_about = None)]
pub struct Cli {
    /// Directory holding persisted state [default: $STOREFRONT_DATA_DIR or the platform data dir]
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive storefront
    Browse,
    /// Add items to the cart
    AddToCart {
        /// Number of items to add
        #[arg(default_value_t = 1)]
        quantity: u64,
    },
    /// Show the number of items in the cart
    Cart,
    /// Search the store and remember the query
    Search {
        /// Search terms
        #[arg(num_args = 1..)]
        query: Vec<String>,
    },
    /// List search suggestions for a partial query
    Suggest {
        /// Partial query (at least 2 characters)
        query: String,
    },
    /// Show recent searches, most recent first
    History,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let level = log_level(cli.verbose);

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let data_dir = get_data_dir(cli.data_dir)?;

    if matches!(command, Commands::Browse) {
        init_file_logging(&data_dir, level);
    } else {
        init_stderr_logging(level);
    }

    tracing::debug!(data_dir = %data_dir.display(), "using data directory");
    let mut session = Session::load(FileStore::new(&data_dir));

    match command {
        Commands::Browse => {
            let session = run_interactive(session)?;
            println!("Cart has {} items", session.count());
        }
        Commands::AddToCart { quantity } => {
            let count = session.add_to_cart(quantity);
            print_toast("Item added to cart!", Severity::Success);
            println!("Cart count: {}", count);
        }
        Commands::Cart => {
            println!("Cart has {} items", session.count());
            println!("Data directory: {}", format_path_with_tilde(session.store().dir()));
        }
        Commands::Search { query } => search(&mut session, &query.join(" ")),
        Commands::Suggest { query } => {
            for suggestion in suggestions(&query) {
                println!("{}", suggestion);
            }
        }
        Commands::History => show_history(&session),
    }

    Ok(())
}

fn search(session: &mut Session<FileStore>, raw: &str) {
    let Some(query) = validate_query(raw) else {
        print_toast("Please enter a search term", Severity::Warning);
        return;
    };

    session.record_query(query);
    let shown = sanitize_for_display(query);
    print_toast(&format!("Searching for: {}", shown), Severity::Info);
    print_toast(&format!("Found results for: {}", shown), Severity::Success);
}

fn show_history(session: &Session<FileStore>) {
    let history = session.history();
    if history.is_empty() {
        println!("No recent searches");
        return;
    }

    println!("Recent searches");
    println!("===============");
    for (idx, query) in history.iter().enumerate() {
        println!("{:>2}. {}", idx + 1, sanitize_for_display(query));
    }
}

fn print_toast(message: &str, severity: Severity) {
    println!("{}", Notification::new(message, severity, Instant::now()).line());
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn init_stderr_logging(level: Level) {
    tracing_subscriber::fmt().with_max_level(level).with_writer(io::stderr).init();
}

/// The TUI owns the screen, so logs go to a file. If it can't be opened, logging is
/// simply off.
fn init_file_logging(data_dir: &Path, level: Level) {
    let file = fs::create_dir_all(data_dir).and_then(|()| {
        OpenOptions::new().create(true).append(true).open(data_dir.join(TUI_LOG_FILENAME))
    });

    if let Ok(file) = file {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }
}
