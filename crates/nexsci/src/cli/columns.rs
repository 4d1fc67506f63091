use super::{archive, resolve};
use crate::config::Settings;
use anyhow::Result;
use nexsci_core::GroupSelector;

#[derive(Debug, clap::Args)]
pub struct ColumnsArg {
    /// Group name or code: default (1), planet (2), stellar (3), photometry (4), color (5), all
    pub group: GroupSelector,
    /// List the upper/lower error columns instead
    #[arg(long, short)]
    pub uncertainty: bool,
}

impl ColumnsArg {
    pub fn run(self, settings: &Settings) -> Result<()> {
        let selection = resolve(&self.group)?;
        let archive = archive(settings)?;
        let schema = archive.schema();

        let names = if self.uncertainty {
            schema.fetch_uncertainty_catalog()?.parameter_names(selection)
        } else {
            schema.fetch_column_catalog()?.parameter_names(selection)
        };
        for name in names {
            println!("{name}");
        }
        Ok(())
    }
}
