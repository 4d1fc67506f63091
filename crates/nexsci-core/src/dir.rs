use std::env;
use std::path::PathBuf;

pub const CACHE_FILE_NAME: &str = "confirmed_planets.csv";
pub const CACHE_DIR_NAME: &str = "data";

pub fn user_home() -> Option<PathBuf> {
    home::home_dir()
}

pub fn user_config() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("APPDATA").map(PathBuf::from)
    }
    #[cfg(target_os = "macos")]
    {
        user_home().map(|p| p.join("Library/Application Support"))
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| user_home().map(|p| p.join(".config")))
    }
}

/// `<home>/data/confirmed_planets.csv`, falling back to the working directory
/// when no home directory is known.
pub fn default_cache_path() -> PathBuf {
    user_home()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CACHE_DIR_NAME)
        .join(CACHE_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cache_path_layout() {
        let path = default_cache_path();
        assert!(path.ends_with("data/confirmed_planets.csv"));
    }

    #[test]
    fn test_user_home_returns_optional() {
        let home = user_home();
        assert!(home.is_none() || !home.unwrap().as_os_str().is_empty());
    }

    #[test]
    fn test_user_config_platform_specific() {
        let config = user_config();
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            if env::var_os("XDG_CONFIG_HOME").is_none() {
                assert!(config.is_none() || config.unwrap().ends_with(".config"));
            }
        }
        #[cfg(any(target_os = "windows", target_os = "macos"))]
        {
            let _ = config;
        }
    }
}
