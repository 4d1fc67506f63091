use super::{archive, resolve};
use crate::config::Settings;
use anyhow::Result;
use nexsci_core::GroupSelector;

#[derive(Debug, clap::Args)]
pub struct UrlArg {
    /// Group name or code, or `all`
    pub group: GroupSelector,
}

impl UrlArg {
    pub fn run(self, settings: &Settings) -> Result<()> {
        let selection = resolve(&self.group)?;
        println!("{}", archive(settings)?.download_url(selection)?);
        Ok(())
    }
}
