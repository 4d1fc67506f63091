use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use nexsci_core::{ArchiveUrls, dir, query::ARCHIVE_URL, schema::SCHEMA_URL};
use nexsci_fetch::ClientSetting;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// <config-dir>
// - /nexsci
//   config.toml
const CONFIG_DIR: &str = "nexsci";
const CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "NEXSCI_";

pub const DEFAULT_PRECISION: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub schema_url: String,
    pub archive_url: String,
    pub cache_path: PathBuf,
    pub precision: usize,
    #[serde(default)]
    pub proxies: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_url: SCHEMA_URL.to_string(),
            archive_url: ARCHIVE_URL.to_string(),
            cache_path: dir::default_cache_path(),
            precision: DEFAULT_PRECISION,
            proxies: Vec::new(),
        }
    }
}

/// Values given on the command line; unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
}

impl Settings {
    pub fn config_file() -> Option<PathBuf> {
        dir::user_config().map(|p| p.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Defaults < config file < `NEXSCI_*` environment < command line.
    pub fn figment(config_file: Option<&Path>, overrides: &Overrides) -> Figment {
        let mut fig = Figment::from(Serialized::defaults(Settings::default()));
        if let Some(path) = config_file {
            fig = fig.merge(Toml::file(path));
        }
        fig.merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides))
    }

    pub fn load(overrides: &Overrides) -> Result<Self, figment::Error> {
        let config_file = Self::config_file();
        let settings: Settings = Self::figment(config_file.as_deref(), overrides).extract()?;
        tracing::debug!(?config_file, ?settings, "loaded settings");
        Ok(settings)
    }

    pub fn urls(&self) -> ArchiveUrls {
        ArchiveUrls {
            schema: self.schema_url.clone(),
            archive: self.archive_url.clone(),
        }
    }

    pub fn client_setting(&self) -> ClientSetting {
        ClientSetting::default().with_proxies(self.proxies.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_| {
            let settings: Settings = Settings::figment(None, &Overrides::default()).extract()?;
            assert_eq!(settings.precision, DEFAULT_PRECISION);
            assert_eq!(settings.archive_url, ARCHIVE_URL);
            assert!(settings.cache_path.ends_with("data/confirmed_planets.csv"));
            assert!(settings.client_setting().proxies.is_none());
            Ok(())
        });
    }

    #[test]
    fn test_layers_in_priority_order() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                precision = 2
                cache_path = "from-file.csv"
                schema_url = "http://mirror/columns.html"
                proxies = ["http://proxy:3128"]
                "#,
            )?;
            jail.set_env("NEXSCI_PRECISION", "6");

            let file = jail.directory().join(CONFIG_FILE);
            let settings: Settings =
                Settings::figment(Some(&file), &Overrides::default()).extract()?;
            assert_eq!(settings.precision, 6);
            assert_eq!(settings.cache_path, PathBuf::from("from-file.csv"));
            assert_eq!(settings.urls().schema, "http://mirror/columns.html");
            assert_eq!(settings.urls().archive, ARCHIVE_URL);
            assert_eq!(settings.client_setting().proxies.unwrap().len(), 1);

            let overrides = Overrides {
                cache_path: Some("cli.csv".into()),
                precision: Some(1),
            };
            let settings: Settings = Settings::figment(Some(&file), &overrides).extract()?;
            assert_eq!(settings.precision, 1);
            assert_eq!(settings.cache_path, PathBuf::from("cli.csv"));
            Ok(())
        });
    }

    #[test]
    fn test_missing_config_file_is_ignored() {
        Jail::expect_with(|jail| {
            let file = jail.directory().join("absent.toml");
            let settings: Settings =
                Settings::figment(Some(&file), &Overrides::default()).extract()?;
            assert_eq!(settings.precision, DEFAULT_PRECISION);
            Ok(())
        });
    }
}
