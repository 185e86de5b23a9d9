//! lifollow - LinkedIn organization follower statistics from the terminal

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod form;
mod models;
mod output;
mod view;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        log::debug!("Command failed: {:?}", err);
        eprintln!("Error: {}", err.user_message());
        std::process::exit(1);
    }
}

/// Initialize logging; `RUST_LOG` wins unless `--debug` is given
fn init_logging(debug: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if debug {
        builder.filter_module("lifollow", log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Fetch(args) => cli::fetch::run(&opts, &args).await,
        Commands::Init => cli::init::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("lifollow version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
