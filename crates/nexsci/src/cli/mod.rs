mod columns;
mod download;
mod query;
mod transit;
mod url;

use crate::config::{Overrides, Settings};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nexsci_core::{Archive, GroupSelection, GroupSelector};
use nexsci_fetch::ReqwestClient;
use std::path::PathBuf;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "nexsci", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    /// Show debug output
    #[arg(long, short, global = true, conflicts_with = "quiet")]
    pub verbose: bool,
    /// Only show warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,
    /// Cache file for the archive table
    #[arg(long, global = true, value_name = "PATH")]
    pub path: Option<PathBuf>,
    #[command(subcommand)]
    pub cmd: Commands,
}

impl App {
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::WARN
        } else {
            Level::INFO
        }
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            cache_path: self.path.clone(),
            precision: self.cmd.precision(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "cols", name = "columns", about = "List the documented columns of a group")]
    Columns(columns::ColumnsArg),
    #[command(name = "url", about = "Print the download URL for a group")]
    Url(url::UrlArg),
    #[command(alias = "dl", name = "download", about = "Download a group into the cache file")]
    Download(download::DownloadArg),
    #[command(alias = "q", name = "query", about = "Print the rows of one planet as CSV")]
    Query(query::QueryArg),
    #[command(alias = "t", name = "transit", about = "Print transit parameters of one planet")]
    Transit(transit::TransitArg),
}

impl Commands {
    fn precision(&self) -> Option<usize> {
        match self {
            Commands::Transit(arg) => arg.precision,
            _ => None,
        }
    }

    pub fn run(self, settings: &Settings) -> Result<()> {
        match self {
            Commands::Columns(arg) => arg.run(settings),
            Commands::Url(arg) => arg.run(settings),
            Commands::Download(arg) => arg.run(settings),
            Commands::Query(arg) => arg.run(settings),
            Commands::Transit(arg) => arg.run(settings),
        }
    }
}

fn archive(settings: &Settings) -> Result<Archive<ReqwestClient>> {
    let client = ReqwestClient::with_setting(settings.client_setting())
        .context("failed to build http client")?;
    Ok(Archive::with_urls(client, settings.urls()))
}

fn resolve(group: &GroupSelector) -> Result<GroupSelection> {
    Ok(group.resolve()?)
}
