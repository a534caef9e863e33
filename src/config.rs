// Configuration loading and parsing (qbboard.toml).
//
// The config file is optional: a missing file yields the built-in defaults,
// which match the original page behavior (prospects by rank ascending,
// grades by grade descending). Lookup order is the current directory, then
// the platform config directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::sort::{Direction, SortField, SortSpec};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

// ---------------------------------------------------------------------------
// Assembled Config
// ---------------------------------------------------------------------------

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the prospects JSON file.
    pub prospects_path: PathBuf,
    /// Path to the grade-predictions JSON file.
    pub predictions_path: PathBuf,
    /// Initial sort for the prospects view.
    pub prospects_sort: Option<SortSpec>,
    /// Initial sort for the grades view.
    pub grades_sort: Option<SortSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prospects_path: PathBuf::from("data/qb_prospects_2025.json"),
            predictions_path: PathBuf::from("data/qb_predictions_2025.json"),
            prospects_sort: Some(SortSpec::ascending(SortField::Rank)),
            grades_sort: Some(SortSpec::descending(SortField::Grade)),
        }
    }
}

// ---------------------------------------------------------------------------
// qbboard.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the whole file. All sections optional so
/// a partial file overrides only what it names.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    data: DataSection,
    #[serde(default)]
    display: DisplaySection,
}

#[derive(Debug, Default, Deserialize)]
struct DataSection {
    prospects: Option<PathBuf>,
    predictions: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct DisplaySection {
    /// Dotted field path, e.g. "stats.rank".
    prospects_sort: Option<String>,
    /// "asc" or "desc".
    prospects_direction: Option<String>,
    grades_sort: Option<String>,
    grades_direction: Option<String>,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

const CONFIG_FILE_NAME: &str = "qbboard.toml";

/// Load configuration, falling back to defaults when no file exists.
pub fn load_config() -> Result<Config, ConfigError> {
    match find_config_file() {
        Some(path) => load_from(&path),
        None => Ok(Config::default()),
    }
}

/// Load and resolve a specific config file.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: ConfigFile = toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(resolve(file))
}

/// Current directory first, then the platform config directory.
fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }
    if let Some(dirs) = directories::ProjectDirs::from("", "", "qbboard") {
        let candidate = dirs.config_dir().join(CONFIG_FILE_NAME);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

fn resolve(file: ConfigFile) -> Config {
    let defaults = Config::default();
    Config {
        prospects_path: file.data.prospects.unwrap_or(defaults.prospects_path),
        predictions_path: file.data.predictions.unwrap_or(defaults.predictions_path),
        prospects_sort: resolve_sort(
            file.display.prospects_sort.as_deref(),
            file.display.prospects_direction.as_deref(),
            defaults.prospects_sort,
        ),
        grades_sort: resolve_sort(
            file.display.grades_sort.as_deref(),
            file.display.grades_direction.as_deref(),
            defaults.grades_sort,
        ),
    }
}

/// Resolve a configured (path, direction) pair into a sort spec.
///
/// No configured path keeps the view default. A configured path that does
/// not parse degrades to no active sort (identity order) with a warning
/// rather than refusing to start. An unrecognized direction string falls
/// back to ascending.
fn resolve_sort(
    path: Option<&str>,
    direction: Option<&str>,
    default: Option<SortSpec>,
) -> Option<SortSpec> {
    let path = match path {
        Some(p) => p,
        None => return default,
    };
    let field = match SortField::parse(path) {
        Some(f) => f,
        None => {
            warn!(
                "unknown sort field {:?} in {}; view will start unsorted",
                path, CONFIG_FILE_NAME
            );
            return None;
        }
    };
    let direction = match direction {
        Some("desc") => Direction::Descending,
        Some("asc") | None => Direction::Ascending,
        Some(other) => {
            warn!(
                "unknown sort direction {:?} in {}; using asc",
                other, CONFIG_FILE_NAME
            );
            Direction::Ascending
        }
    };
    Some(SortSpec { field, direction })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Config {
        resolve(toml::from_str(text).unwrap())
    }

    #[test]
    fn defaults_match_original_pages() {
        let config = Config::default();
        assert_eq!(
            config.prospects_sort,
            Some(SortSpec::ascending(SortField::Rank))
        );
        assert_eq!(
            config.grades_sort,
            Some(SortSpec::descending(SortField::Grade))
        );
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse("");
        let defaults = Config::default();
        assert_eq!(config.prospects_path, defaults.prospects_path);
        assert_eq!(config.grades_sort, defaults.grades_sort);
    }

    #[test]
    fn data_paths_override() {
        let config = parse(
            r#"
            [data]
            prospects = "/tmp/p.json"
            predictions = "/tmp/q.json"
            "#,
        );
        assert_eq!(config.prospects_path, PathBuf::from("/tmp/p.json"));
        assert_eq!(config.predictions_path, PathBuf::from("/tmp/q.json"));
    }

    #[test]
    fn display_sort_override() {
        let config = parse(
            r#"
            [display]
            prospects_sort = "stats.yards"
            prospects_direction = "desc"
            "#,
        );
        assert_eq!(
            config.prospects_sort,
            Some(SortSpec::descending(SortField::Yards))
        );
        // Untouched view keeps its default.
        assert_eq!(
            config.grades_sort,
            Some(SortSpec::descending(SortField::Grade))
        );
    }

    #[test]
    fn unknown_sort_field_degrades_to_unsorted() {
        let config = parse(
            r#"
            [display]
            grades_sort = "stats.bogus"
            "#,
        );
        assert_eq!(config.grades_sort, None);
    }

    #[test]
    fn unknown_direction_falls_back_to_ascending() {
        let config = parse(
            r#"
            [display]
            grades_sort = "stats.grade"
            grades_direction = "sideways"
            "#,
        );
        assert_eq!(
            config.grades_sort,
            Some(SortSpec::ascending(SortField::Grade))
        );
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join("qbboard-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[data\nprospects=").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
