// Copyright (c) 2025 Cardioscope. All rights reserved.

mod consts;
mod dataset;
mod environment;
mod logging;
mod pretty;
mod session;
mod stats;
mod ui;

use crate::dataset::DatasetClient;
use crate::environment::Environment;
use crate::pretty::{print_cmd_error, print_cmd_info, print_friendly_error_header};
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the dataset and start the explorer
    Start {
        /// Print the dataset overview to stdout instead of launching the TUI
        #[arg(long)]
        headless: bool,

        /// Disable the background fill color (for terminals without RGB support)
        #[arg(long)]
        no_background: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // An http(s) URL in CARDIOSCOPE_DATASET_URL swaps the UCI endpoint for
    // a mirror; anything else falls back to production.
    let dataset_url_str = std::env::var("CARDIOSCOPE_DATASET_URL").unwrap_or_default();
    let environment = dataset_url_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    let args = Args::parse();
    match args.command {
        Command::Start {
            headless,
            no_background,
        } => {
            if let Environment::Custom { .. } = &environment {
                print_cmd_info!("Custom dataset endpoint", "{}", environment.dataset_url());
            }

            let client = DatasetClient::new(environment);
            let session = match setup_session(&client).await {
                Ok(session) => session,
                Err(e) => {
                    print_friendly_error_header();
                    print_cmd_error!("Failed to load the clinical records dataset", "{}", e);
                    return Err(Box::new(e) as Box<dyn Error>);
                }
            };

            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, !no_background).await
            }
        }
    }
}
