//! Contact Book - Main entry point
//!
//! Loads the persisted book, then runs the interactive command loop
//! until `close`/`exit`.

use anyhow::Result;
use contact_book::repl::Painter;
use contact_book::{persistence, repl, Config};
use tracing::{error, info};

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only, so the REPL output stays clean);
    // RUST_LOG overrides the configured LOG_LEVEL
    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter())
        .with_writer(std::io::stderr)
        .init();

    info!(path = %config.book_path.display(), "starting contact book");

    // A corrupt book file aborts startup; a missing one starts empty.
    let mut book = match persistence::load(&config.book_path) {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to load the address book: {}", e);
            return Err(e.into());
        }
    };

    let painter = Painter::new(config.color);
    repl::run(&mut book, &config.book_path, painter)?;

    info!("contact book shutdown complete");
    Ok(())
}
