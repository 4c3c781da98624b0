use bsr_core::logging;
use clap::Parser;

mod cli;

use crate::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible.
    if cli.log_stderr || logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = cli.run().await {
        tracing::error!("{:#}", err);
        eprintln!("bsr error: {:#}", err);
        std::process::exit(1);
    }
}
