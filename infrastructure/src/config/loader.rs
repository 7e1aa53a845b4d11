//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "forensic-launcher";
const PROJECT_FILES: [&str; 2] = ["launcher.toml", ".launcher.toml"];
const ENV_PREFIX: &str = "FORENSIC_LAUNCHER_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `FORENSIC_LAUNCHER_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./launcher.toml` or `./.launcher.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/forensic-launcher/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let global = Self::global_config_path().filter(|p| p.exists());
        let project = Self::project_config_path();

        Self::figment(global.as_deref(), project.as_deref(), config_path.map(|p| p.as_path()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// File layers only, lowest priority first.
    fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project].into_iter().flatten() {
            figment = figment.merge(Toml::file(path));
        }

        // An explicit file must exist; the discovered ones are optional.
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/forensic-launcher/config.toml if set,
    /// otherwise falls back to ~/.config/forensic-launcher/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] {}*", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./{} or ./{}", PROJECT_FILES[0], PROJECT_FILES[1]);
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
