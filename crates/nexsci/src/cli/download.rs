use super::{archive, resolve};
use crate::config::Settings;
use anyhow::{Context, Result};
use nexsci_core::GroupSelector;

#[derive(Debug, clap::Args)]
pub struct DownloadArg {
    /// Group name or code, or `all`
    #[arg(default_value = "all")]
    pub group: GroupSelector,
    /// Re-download even when the cache file exists
    #[arg(long, short)]
    pub refresh: bool,
}

impl DownloadArg {
    pub fn run(self, settings: &Settings) -> Result<()> {
        let selection = resolve(&self.group)?;
        let path = &settings.cache_path;
        let table = archive(settings)?
            .download_or_cache(selection, path, self.refresh)
            .with_context(|| format!("failed to populate {}", path.display()))?;
        println!("{} rows in {}", table.len(), path.display());
        Ok(())
    }
}
