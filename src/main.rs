//! # Recently Viewed
//!
//! Native host for the recently viewed products carousel.
//!
//! - `render` reads the stored handles, fetches the products from the
//!   storefront, and prints the component markup.
//! - `record` appends a handle to the stored list, as a product page would.
//!
//! ```bash
//! recently-viewed record --storage storage.json shoe-a
//! recently-viewed render --storage storage.json --store-url https://shop.example
//! ```

use clap::{Parser, Subcommand};
use recently_viewed::lifecycle::{setup_tracing, CarouselHost, HostSettings};
use recently_viewed::storage::{record_view, JsonFileStore};
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "recently-viewed", version, about = "Recently viewed products carousel")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the carousel for the stored handles.
    Render {
        /// JSON file used as local storage.
        #[arg(long)]
        storage: PathBuf,

        /// Storefront base URL, e.g. https://shop.example
        #[arg(long, default_value = "")]
        store_url: String,

        /// Maximum number of products; non-positive or invalid values mean 5.
        #[arg(long)]
        max_products: Option<String>,

        /// Render as if the slider library were not loaded.
        #[arg(long)]
        no_slider: bool,

        /// Show the pagination dots.
        #[arg(long)]
        show_pagination: bool,
    },
    /// Record a product view.
    Record {
        /// JSON file used as local storage.
        #[arg(long)]
        storage: PathBuf,

        /// Oldest entries beyond this many are dropped.
        #[arg(long, default_value_t = 20)]
        cap: usize,

        /// Product handle.
        handle: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    match Cli::parse().command {
        Command::Render {
            storage,
            store_url,
            max_products,
            no_slider,
            show_pagination,
        } => {
            let mut attributes = HashMap::from([("data-store-url".to_string(), store_url)]);
            if let Some(max) = max_products {
                attributes.insert("data-max-products".to_string(), max);
            }

            let host = CarouselHost::new(HostSettings {
                storage_path: storage,
                attributes,
                slider: !no_slider,
                show_pagination,
            });
            let activation = host.carousel().activate().await;
            info!(state = ?activation.state(), "Carousel activated");

            std::io::stdout()
                .write_all(host.document(&activation).as_bytes())
                .map_err(|e| e.to_string())?;
        }
        Command::Record {
            storage,
            cap,
            handle,
        } => {
            let store = JsonFileStore::new(storage);
            match record_view(&store, &handle, cap.max(1)) {
                Ok(handles) => info!(handle = %handle, stored = handles.len(), "View recorded"),
                Err(e) => {
                    error!(error = %e, path = %store.path().display(), "Failed to record view");
                    return Err(e.to_string());
                }
            }
        }
    }

    Ok(())
}
