use super::{archive, resolve};
use crate::config::Settings;
use anyhow::{Context, Result};
use nexsci_core::{GroupSelector, archive::DEFAULT_LETTER};
use std::io::Write;

#[derive(Debug, clap::Args)]
pub struct QueryArg {
    /// Host star name, matched exactly (e.g. "HD 209458")
    pub hostname: String,
    /// Group name or code, or `all`
    #[arg(long, short, default_value = "all")]
    pub group: GroupSelector,
    /// Planet letter
    #[arg(long, short, default_value = DEFAULT_LETTER)]
    pub letter: String,
    /// Re-download even when the cache file exists
    #[arg(long, short)]
    pub refresh: bool,
}

impl QueryArg {
    pub fn run(self, settings: &Settings) -> Result<()> {
        let selection = resolve(&self.group)?;
        let rows = archive(settings)?.query_row(
            &self.hostname,
            selection,
            &self.letter,
            &settings.cache_path,
            self.refresh,
        )?;

        let csv = rows.to_csv().context("failed to encode rows")?;
        std::io::stdout().lock().write_all(&csv)?;
        Ok(())
    }
}
