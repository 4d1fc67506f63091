use super::archive;
use crate::config::Settings;
use crate::ui::table::transit_table;
use anyhow::Result;
use nexsci_core::archive::DEFAULT_LETTER;

#[derive(Debug, clap::Args)]
pub struct TransitArg {
    /// Host star name, matched exactly (e.g. "HD 209458")
    pub hostname: String,
    /// Planet letter
    #[arg(long, short, default_value = DEFAULT_LETTER)]
    pub letter: String,
    /// Decimal places shown for values and errors
    #[arg(long, short)]
    pub precision: Option<usize>,
    /// Re-download even when the cache file exists
    #[arg(long, short)]
    pub refresh: bool,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl TransitArg {
    pub fn run(self, settings: &Settings) -> Result<()> {
        let set = archive(settings)?.transit_parameters(
            &self.hostname,
            &self.letter,
            &settings.cache_path,
            self.refresh,
        )?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&set)?);
        } else {
            let title = format!("{} {}", self.hostname, self.letter);
            println!("{}", transit_table(&set, settings.precision, Some(title)));
        }
        Ok(())
    }
}
