use clap::Parser;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pocket_rogue::config::ClientConfig;
use pocket_rogue::game::GameScreen;
use pocket_rogue::item::ItemCatalog;

/// Text front end for the client core: one command per line on stdin
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Arguments {
    #[arg(short = 'c', long = "config", help = "Path to configuration file")]
    config: Option<PathBuf>,

    #[arg(long = "catalog", help = "Path to item catalog, overrides the config")]
    catalog: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Arguments::parse();
    let mut config = ClientConfig::load_or_default(args.config.as_deref())?;
    init_tracing(&config.log_filter);

    if let Some(catalog) = args.catalog {
        config.catalog_path = catalog;
    }

    let catalog = ItemCatalog::load(&config.catalog_path)?;
    let mut screen = GameScreen::from_config(&config, catalog)?;
    info!("Type 'i' to open the inventory, 'q' to quit");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut last_frame = Instant::now();

    for line in stdin.lock().lines() {
        let line = line?;
        if !screen.handle_command(&line) {
            break;
        }

        let delta = last_frame.elapsed().as_secs_f32();
        last_frame = Instant::now();
        for text in screen.render_frame(delta) {
            writeln!(stdout, "{}", text)?;
        }
        stdout.flush()?;
    }

    info!("Goodbye");
    Ok(())
}

/// `RUST_LOG` wins over the configured filter
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}
