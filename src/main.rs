mod config;
mod news;
mod open_url;
mod ui;

use clap::{Parser, Subcommand};
use std::env;
use std::process;

#[derive(Parser)]
#[command(name = "hnreader", version, about = "Open multiple Hacker News stories in your favorite browser from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start hnreader with the default options (10 stories, OS default browser)
    #[command(alias = "r")]
    Run {
        /// Number of stories to open
        #[arg(short, long, default_value_t = 10)]
        tabs: usize,

        /// Browser to open stories in (empty = system default)
        #[arg(short, long, default_value_t = config::default_browser())]
        browser: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Run { tabs, browser } => {
            ui::banner();
            if let Err(err) = config::validate_env(|key| env::var(key).ok()) {
                ui::error(&err.to_string());
                process::exit(1);
            }
            if let Err(err) = news::run(tabs, &browser).await {
                ui::error(&err.to_string());
                process::exit(1);
            }
        }
    }
}
