use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Optional config file. CLI args always win; the config only fills in
/// values the user did not pass.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) outdir: Option<String>,
    #[serde(default)]
    pub(crate) receipt_delay_ms: Option<u64>,
    #[serde(default)]
    pub(crate) page_delay_ms: Option<u64>,
    #[serde(default)]
    pub(crate) separator: Option<String>,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/ride-receipts/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("ride-receipts").join("config.toml"));
        }

        // 2. Platform config dir (macOS Application Support, Windows AppData)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("ride-receipts").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.ride-receipts.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".ride-receipts.toml"));
        }

        paths
    }
}
