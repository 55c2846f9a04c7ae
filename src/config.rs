use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    /// Guestbook URL
    #[serde(default)]
    pub(crate) url: Option<String>,
    /// Local guestbook file, used instead of `url`
    #[serde(default)]
    pub(crate) file: Option<PathBuf>,
    /// "table", "html" or "json"
    #[serde(default)]
    pub(crate) format: Option<String>,
    /// "auto", "always" or "never"
    #[serde(default)]
    pub(crate) color: Option<String>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) escape_html: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// "await" or "delay"
    #[serde(default)]
    pub(crate) reload: Option<String>,
    #[serde(default)]
    pub(crate) reload_delay_ms: Option<u64>,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_internal(false)
    }

    pub(crate) fn load_quiet() -> Self {
        Self::load_internal(true)
    }

    fn load_internal(quiet: bool) -> Self {
        // Try config locations in order of priority
        let config_paths = Self::get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        if !quiet {
                            eprintln!("Loaded config from {}", path.display());
                        }
                        return config;
                    }
                    Err(e) => {
                        if !quiet {
                            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/guestbook/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("guestbook").join("config.toml"));
        }

        // 2. Platform config dir (macOS Application Support, etc.)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("guestbook").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.guestbook.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".guestbook.toml"));
        }

        paths
    }
}
