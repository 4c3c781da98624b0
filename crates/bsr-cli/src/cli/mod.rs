//! CLI for the BrightShinyRadio playlist page renderer.

mod commands;

use anyhow::Result;
use bsr_core::config;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use commands::{run_completions, run_config_path, run_fetch, run_render};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "bsr")]
#[command(about = "BrightShinyRadio: fill a page's playlist table from the live feed", long_about = None)]
pub struct Cli {
    /// Log to stderr instead of the state-dir log file.
    #[arg(long, global = true)]
    pub log_stderr: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Load a page, fetch the playlist once it has loaded, and write the page with rows added.
    Render {
        /// Path to the pre-rendered HTML page.
        page: PathBuf,
        /// Write the result here instead of stdout.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Feed URL (overrides the config file).
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,
    },

    /// Fetch the playlist and print it as columns.
    Fetch {
        /// Feed URL (overrides the config file).
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the config file location.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            CliCommand::Render {
                page,
                output,
                endpoint,
            } => {
                let endpoint = resolve_endpoint(endpoint)?;
                run_render(&page, output.as_deref(), &endpoint).await?;
            }
            CliCommand::Fetch { endpoint } => {
                let endpoint = resolve_endpoint(endpoint)?;
                run_fetch(&endpoint).await?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::ConfigPath => run_config_path()?,
        }

        Ok(())
    }
}

/// `--endpoint` wins over the config file.
fn resolve_endpoint(flag: Option<String>) -> Result<String> {
    let endpoint = match flag {
        Some(url) => url,
        None => {
            let cfg = config::load_or_init()?;
            tracing::debug!("loaded config: {:?}", cfg);
            cfg.endpoint
        }
    };
    config::validate_endpoint(&endpoint)?;
    Ok(endpoint)
}

#[cfg(test)]
mod tests;
