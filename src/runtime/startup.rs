use std::env;
use std::path::{Path, PathBuf};

use crate::app::App;
use crate::catalog::SortOrder;
use crate::config;
use crate::source;

/// Resolve the album source path: first CLI argument, else config.
pub fn resolve_source_path(settings: &config::Settings) -> PathBuf {
    env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&settings.source.path))
}

/// Merge the baseline album file into the catalog (unless disabled) and
/// apply the configured startup sort.
pub fn load_baseline(app: &mut App, settings: &config::Settings, path: &Path) {
    if settings.source.load_on_start {
        merge_source(app, path);
    }

    if let Some(order) = default_sort_order(settings) {
        app.apply_sort(order);
    }
}

/// Read the album file and merge it into the catalog. Albums whose code
/// is already present are skipped; the catalog is never wiped, so a
/// failed read leaves it untouched.
pub fn merge_source(app: &mut App, path: &Path) {
    match source::load_albums(path) {
        Ok(albums) => {
            let outcome = app.catalog.merge_from_source(albums);
            tracing::info!(
                path = %path.display(),
                added = outcome.added,
                skipped = outcome.skipped,
                "album source merged"
            );
            if outcome.skipped > 0 {
                app.set_status(format!(
                    "Loaded {} albums from {} ({} duplicate codes skipped).",
                    outcome.added,
                    path.display(),
                    outcome.skipped
                ));
            } else {
                app.set_status(format!(
                    "Loaded {} albums from {}.",
                    outcome.added,
                    path.display()
                ));
            }
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "album source not loaded");
            app.set_status(format!("Could not load {}: {e}", path.display()));
        }
    }
}

fn default_sort_order(settings: &config::Settings) -> Option<SortOrder> {
    match settings.catalog.default_sort {
        config::DefaultSort::Unsorted => None,
        config::DefaultSort::Ascending => Some(SortOrder::Ascending),
        config::DefaultSort::Descending => Some(SortOrder::Descending),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    const SAMPLE: &str = r#"[
        {"name": "A", "artist": "X", "code": 1, "cover": "a.png",
         "tracks": [{"name": "T1", "duration": 100}]},
        {"name": "B", "artist": "Y", "code": 2, "cover": "b.png",
         "tracks": [{"name": "T1", "duration": 50}]}
    ]"#;

    fn settings_with(
        path: &str,
        load_on_start: bool,
        default_sort: config::DefaultSort,
    ) -> config::Settings {
        config::Settings {
            source: config::SourceSettings {
                path: path.to_string(),
                load_on_start,
            },
            ui: config::UiSettings::default(),
            catalog: config::CatalogSettings { default_sort },
        }
    }

    #[test]
    fn load_baseline_merges_and_applies_default_sort() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("albums.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let settings =
            settings_with(path.to_str().unwrap(), true, config::DefaultSort::Ascending);
        let mut app = App::new(Catalog::new());
        load_baseline(&mut app, &settings, &path);

        assert_eq!(app.catalog.len(), 2);
        // B is shorter, so with the ascending default it comes first.
        let codes: Vec<u16> = app.catalog.all().iter().map(|a| a.code).collect();
        assert_eq!(codes, vec![2, 1]);
        assert_eq!(app.sort_order(), Some(SortOrder::Ascending));
        assert!(app.status().unwrap().starts_with("Loaded 2 albums"));
    }

    #[test]
    fn load_baseline_respects_load_on_start_off() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("albums.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let settings =
            settings_with(path.to_str().unwrap(), false, config::DefaultSort::Unsorted);
        let mut app = App::new(Catalog::new());
        load_baseline(&mut app, &settings, &path);

        assert!(app.catalog.is_empty());
        assert!(app.status().is_none());
    }

    #[test]
    fn reloading_the_same_file_skips_every_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("albums.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let mut app = App::new(Catalog::new());
        merge_source(&mut app, &path);
        assert_eq!(app.catalog.len(), 2);

        merge_source(&mut app, &path);
        assert_eq!(app.catalog.len(), 2);
        assert!(app.status().unwrap().contains("2 duplicate codes skipped"));
    }

    #[test]
    fn missing_file_reports_without_touching_the_catalog() {
        let mut app = App::new(Catalog::new());
        merge_source(&mut app, Path::new("/no/such/albums.json"));

        assert!(app.catalog.is_empty());
        assert!(app.status().unwrap().starts_with("Could not load"));
    }
}
