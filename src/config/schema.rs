use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/milkcrate/config.toml` or `~/.config/milkcrate/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MILKCRATE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub source: SourceSettings,
    pub ui: UiSettings,
    pub catalog: CatalogSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: SourceSettings::default(),
            ui: UiSettings::default(),
            catalog: CatalogSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// Path of the JSON album file merged into the catalog.
    pub path: String,
    /// Whether to merge the source file automatically on startup.
    /// The file can always be re-read later with the reload key.
    pub load_on_start: bool,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            path: "albums.json".to_string(),
            load_on_start: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top "milkcrate" header box.
    pub header_text: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ milkcrate ~ dig through your albums ~ ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Ordering applied to the catalog right after the startup merge.
    pub default_sort: DefaultSort,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            default_sort: DefaultSort::Unsorted,
        }
    }
}

/// Startup ordering of the album list, by total duration.
#[derive(Debug, Copy, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DefaultSort {
    /// Keep albums in the order they were loaded.
    #[serde(alias = "none", alias = "file-order")]
    Unsorted,
    #[serde(alias = "asc", alias = "shortest-first")]
    Ascending,
    #[serde(alias = "desc", alias = "longest-first")]
    Descending,
}

impl Default for DefaultSort {
    fn default() -> Self {
        Self::Unsorted
    }
}
