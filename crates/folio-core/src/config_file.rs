use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::CoreError;
use crate::selection::Selection;

/// Default reveal delay between consecutive rendered items.
pub const DEFAULT_STAGGER_MS: u32 = 100;
pub const DEFAULT_BIND: &str = "0.0.0.0:5001";
pub const DEFAULT_OWNER: &str = "MD. Golam Rabbani Abir";
pub const DEFAULT_TAGLINE: &str = "Researcher | Data Scientist | Developer";

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub site: Option<SiteConfig>,
    pub catalog: Option<CatalogConfig>,
    pub display: Option<DisplayConfig>,
    pub server: Option<ServerConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    pub owner: Option<String>,
    pub tagline: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub default_filter: Option<String>,
    pub default_sort: Option<String>,
    pub reveal_stagger_ms: Option<u32>,
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: Option<String>,
}

impl ConfigFile {
    pub fn owner(&self) -> String {
        self.site
            .as_ref()
            .and_then(|s| s.owner.clone())
            .unwrap_or_else(|| DEFAULT_OWNER.to_string())
    }

    pub fn tagline(&self) -> String {
        self.site
            .as_ref()
            .and_then(|s| s.tagline.clone())
            .unwrap_or_else(|| DEFAULT_TAGLINE.to_string())
    }

    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog
            .as_ref()
            .and_then(|c| c.path.as_ref())
            .map(PathBuf::from)
    }

    /// Selection to start from, as configured. Falls back to (all, newest).
    pub fn initial_selection(&self) -> Result<Selection, CoreError> {
        let display = self.display.as_ref();
        Selection::from_params(
            display.and_then(|d| d.default_filter.as_deref()),
            display.and_then(|d| d.default_sort.as_deref()),
        )
    }

    pub fn reveal_stagger_ms(&self) -> u32 {
        self.display
            .as_ref()
            .and_then(|d| d.reveal_stagger_ms)
            .unwrap_or(DEFAULT_STAGGER_MS)
    }

    pub fn theme(&self) -> Option<String> {
        self.display.as_ref().and_then(|d| d.theme.clone())
    }

    pub fn bind(&self) -> String {
        self.server
            .as_ref()
            .and_then(|s| s.bind.clone())
            .unwrap_or_else(|| DEFAULT_BIND.to_string())
    }
}

/// Platform config directory path: `<config_dir>/folio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("folio").join("config.toml"))
}

/// Load config by cascading CWD `.folio.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".folio.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "loaded config");
            Some(config)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unparsable config");
            None
        }
    }
}

/// Pick a field from `overlay`, falling back to `base`.
fn pick<S, T>(overlay: &Option<S>, base: &Option<S>, field: impl Fn(&S) -> Option<T>) -> Option<T> {
    overlay
        .as_ref()
        .and_then(&field)
        .or_else(|| base.as_ref().and_then(&field))
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        site: Some(SiteConfig {
            owner: pick(&overlay.site, &base.site, |s| s.owner.clone()),
            tagline: pick(&overlay.site, &base.site, |s| s.tagline.clone()),
        }),
        catalog: Some(CatalogConfig {
            path: pick(&overlay.catalog, &base.catalog, |c| c.path.clone()),
        }),
        display: Some(DisplayConfig {
            default_filter: pick(&overlay.display, &base.display, |d| d.default_filter.clone()),
            default_sort: pick(&overlay.display, &base.display, |d| d.default_sort.clone()),
            reveal_stagger_ms: pick(&overlay.display, &base.display, |d| d.reveal_stagger_ms),
            theme: pick(&overlay.display, &base.display, |d| d.theme.clone()),
        }),
        server: Some(ServerConfig {
            bind: pick(&overlay.server, &base.server, |s| s.bind.clone()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{CategoryFilter, SortOrder};

    #[test]
    fn display_round_trip_toml() {
        let config = ConfigFile {
            display: Some(DisplayConfig {
                default_sort: Some("oldest".to_string()),
                reveal_stagger_ms: Some(50),
                ..Default::default()
            }),
            ..Default::default()
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: ConfigFile = toml::from_str(&toml_str).unwrap();
        let display = parsed.display.unwrap();
        assert_eq!(display.default_sort.unwrap(), "oldest");
        assert_eq!(display.reveal_stagger_ms, Some(50));
    }

    #[test]
    fn absent_sections_fall_back_to_defaults() {
        let parsed: ConfigFile = toml::from_str("[site]\nowner = \"Someone\"\n").unwrap();
        assert_eq!(parsed.owner(), "Someone");
        assert_eq!(parsed.tagline(), DEFAULT_TAGLINE);
        assert_eq!(parsed.reveal_stagger_ms(), DEFAULT_STAGGER_MS);
        assert_eq!(parsed.bind(), DEFAULT_BIND);
        assert!(parsed.catalog_path().is_none());
        assert_eq!(parsed.initial_selection().unwrap(), Selection::default());
    }

    #[test]
    fn initial_selection_uses_display_defaults() {
        let config = ConfigFile {
            display: Some(DisplayConfig {
                default_filter: Some("nlp".to_string()),
                default_sort: Some("oldest".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let sel = config.initial_selection().unwrap();
        assert_eq!(sel.filter, CategoryFilter::Category("nlp".into()));
        assert_eq!(sel.sort, SortOrder::Oldest);
    }

    #[test]
    fn initial_selection_rejects_bad_sort() {
        let config = ConfigFile {
            display: Some(DisplayConfig {
                default_sort: Some("random".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(matches!(
            config.initial_selection(),
            Err(CoreError::UnknownSortOrder(_))
        ));
    }

    #[test]
    fn merge_overlay_wins() {
        let base = ConfigFile {
            server: Some(ServerConfig {
                bind: Some("127.0.0.1:1".to_string()),
            }),
            display: Some(DisplayConfig {
                theme: Some("hacker".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let overlay = ConfigFile {
            server: Some(ServerConfig {
                bind: Some("127.0.0.1:2".to_string()),
            }),
            ..Default::default()
        };
        let merged = merge(base, overlay);
        assert_eq!(merged.bind(), "127.0.0.1:2");
        assert_eq!(merged.theme().as_deref(), Some("hacker"));
    }

    #[test]
    fn merge_base_preserved_when_overlay_absent() {
        let base = ConfigFile {
            catalog: Some(CatalogConfig {
                path: Some("/base/catalog.toml".to_string()),
            }),
            ..Default::default()
        };
        let merged = merge(base, ConfigFile::default());
        assert_eq!(
            merged.catalog_path(),
            Some(PathBuf::from("/base/catalog.toml"))
        );
    }

    #[test]
    fn load_from_path_reads_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[site]\ntagline = \"Tagline\"\n").unwrap();
        let loaded = load_from_path(&path).unwrap();
        assert_eq!(loaded.tagline(), "Tagline");
        assert_eq!(loaded.owner(), DEFAULT_OWNER);
    }

    #[test]
    fn unparsable_config_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();
        assert!(load_from_path(&path).is_none());
    }
}
