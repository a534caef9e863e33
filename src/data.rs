// Prospect data model and JSON loading.
//
// Reads the precomputed prospect/prediction JSON files produced by the
// upstream analysis pipeline. Grades, similarity scores, and success
// probabilities arrive already computed; this module only decodes them.
//
// Every metric that any view treats as optional is an `Option` here.
// Absence is a real domain value ("the pipeline could not compute this")
// and must never collapse into zero: serde's `Option` handling keeps the
// distinction, and the display/sort layers preserve it.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// One draft-eligible quarterback, as decoded from either data file.
///
/// The prospects file and the predictions file share this shape; they just
/// populate different subsets of the optional `StatBlock` fields. `name` is
/// the identity key for sorting ties and row expansion.
#[derive(Debug, Clone, Deserialize)]
pub struct ProspectRecord {
    pub name: String,
    pub school: String,
    pub stats: StatBlock,
    /// Historical players judged similar. Insertion order is display order;
    /// significance lives in the `similarity` field, not the position.
    #[serde(default)]
    pub comparisons: Vec<ComparisonRecord>,
}

/// Flat block of named metrics for one player season.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatBlock {
    pub rank: Option<u32>,
    pub completions: Option<u32>,
    pub attempts: Option<u32>,
    pub yards: Option<u32>,
    pub touchdowns: Option<u32>,
    pub interceptions: Option<u32>,
    pub big_time_throws: Option<u32>,
    pub turnover_worthy_plays: Option<u32>,
    pub grades_offense: Option<f64>,
    pub grades_pass: Option<f64>,
    pub first_downs: Option<u32>,
    /// Aggregate draft grade, conventionally 0-100.
    pub grade: Option<f64>,
    /// NFL success probability as a fraction in [0, 1].
    pub success_probability: Option<f64>,
    pub games_played: Option<u32>,
    pub per_game: Option<PerGameStats>,
}

/// Per-game rate stats, computed upstream as stat / games_played.
/// Opaque display values here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PerGameStats {
    pub yards: Option<f64>,
    pub touchdowns: Option<f64>,
    pub attempts: Option<f64>,
    pub completions: Option<f64>,
    pub big_time_throws: Option<f64>,
}

/// A historical player judged statistically similar to a prospect.
#[derive(Debug, Clone, Deserialize)]
pub struct ComparisonRecord {
    pub name: String,
    pub year: i32,
    /// Similarity to the prospect as a fraction in [0, 1].
    pub similarity: f64,
    /// Absent when the upstream model could not score the player's NFL
    /// career. Renders as "N/A", never as zero.
    pub nfl_success_score: Option<f64>,
    pub stats: StatBlock,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load a prospect list from a JSON file.
///
/// Both data files (prospects and predictions) decode through this one
/// function; they differ only in which optional stats are populated.
/// Duplicate names are tolerated but logged: the upstream contract does not
/// guarantee uniqueness, and downstream behavior (stable sort, identity-keyed
/// expansion) stays deterministic either way.
pub fn load_records(path: &Path) -> Result<Vec<ProspectRecord>, DataError> {
    let text = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let records: Vec<ProspectRecord> =
        serde_json::from_str(&text).map_err(|source| DataError::Json {
            path: path.display().to_string(),
            source,
        })?;

    let mut seen: HashSet<&str> = HashSet::new();
    for record in &records {
        if !seen.insert(record.name.as_str()) {
            warn!(
                "duplicate prospect name {:?} in {} (expansion will toggle both rows)",
                record.name,
                path.display()
            );
        }
    }

    info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_prospect_with_comparisons() {
        let json = r#"{
            "name": "Shedeur Sanders",
            "school": "Colorado",
            "stats": {
                "rank": 3,
                "completions": 195,
                "attempts": 272,
                "yards": 2268,
                "touchdowns": 19,
                "interceptions": 6,
                "big_time_throws": 18,
                "turnover_worthy_plays": 4,
                "grades_offense": 91.0,
                "grades_pass": 90.4,
                "first_downs": 109
            },
            "comparisons": [
                {
                    "name": "Justin Fields",
                    "year": 2020,
                    "similarity": 0.949,
                    "nfl_success_score": 42.1,
                    "stats": {
                        "rank": 5,
                        "completions": 158,
                        "attempts": 226,
                        "yards": 2098,
                        "touchdowns": 22,
                        "interceptions": 6,
                        "grades_offense": 93.5
                    }
                }
            ]
        }"#;

        let record: ProspectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Shedeur Sanders");
        assert_eq!(record.school, "Colorado");
        assert_eq!(record.stats.rank, Some(3));
        assert_eq!(record.stats.grades_offense, Some(91.0));
        assert_eq!(record.stats.grade, None);
        assert_eq!(record.comparisons.len(), 1);
        assert_eq!(record.comparisons[0].year, 2020);
        assert_eq!(record.comparisons[0].nfl_success_score, Some(42.1));
    }

    #[test]
    fn decode_prediction_shape_without_comparisons() {
        let json = r#"{
            "name": "Cam Ward",
            "school": "Miami",
            "stats": {
                "rank": 1,
                "games_played": 13,
                "grade": 88.2,
                "success_probability": 0.61,
                "completions": 305,
                "attempts": 454,
                "yards": 4313,
                "touchdowns": 39,
                "interceptions": 7,
                "grades_offense": 92.5,
                "grades_pass": 91.7,
                "per_game": {
                    "yards": 331.8,
                    "touchdowns": 3.0,
                    "attempts": 34.9,
                    "completions": 23.5,
                    "big_time_throws": 2.4
                }
            }
        }"#;

        let record: ProspectRecord = serde_json::from_str(json).unwrap();
        assert!(record.comparisons.is_empty());
        assert_eq!(record.stats.grade, Some(88.2));
        assert_eq!(record.stats.success_probability, Some(0.61));
        let per_game = record.stats.per_game.as_ref().unwrap();
        assert_eq!(per_game.yards, Some(331.8));
    }

    #[test]
    fn absent_nfl_score_decodes_as_none_not_zero() {
        let json = r#"{
            "name": "Tim Tebow",
            "year": 2009,
            "similarity": 0.81,
            "nfl_success_score": null,
            "stats": { "rank": 9 }
        }"#;
        let comparison: ComparisonRecord = serde_json::from_str(json).unwrap();
        assert_eq!(comparison.nfl_success_score, None);
    }

    #[test]
    fn load_records_missing_file_is_io_error() {
        let err = load_records(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }

    #[test]
    fn load_records_malformed_json_is_decode_error() {
        let dir = std::env::temp_dir().join("qbboard-data-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_records(&path).unwrap_err();
        assert!(matches!(err, DataError::Json { .. }));
    }
}
