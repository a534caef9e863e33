// Sort engine: stable, non-mutating ordering over prospect records.
//
// A closed set of sortable fields maps to pure accessors returning a
// `SortValue`. Strings order by a linguistic collation key so accented and
// mixed-case names land where a reader expects; numbers order numerically;
// absent values always sort last, in both directions, so missing data never
// masquerades as a best or worst performance.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::data::ProspectRecord;

// ---------------------------------------------------------------------------
// Sort specification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn toggled(self) -> Direction {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Arrow glyph for column headers.
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Ascending => "\u{2191}",
            Direction::Descending => "\u{2193}",
        }
    }
}

/// The active sort: which column, which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: Direction,
}

impl SortSpec {
    pub fn ascending(field: SortField) -> SortSpec {
        SortSpec {
            field,
            direction: Direction::Ascending,
        }
    }

    pub fn descending(field: SortField) -> SortSpec {
        SortSpec {
            field,
            direction: Direction::Descending,
        }
    }
}

// ---------------------------------------------------------------------------
// Sortable fields
// ---------------------------------------------------------------------------

/// The closed set of sortable column paths.
///
/// New sortable columns are added here and in `accessor`, never as inline
/// branching in the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    School,
    Rank,
    Completions,
    Attempts,
    Yards,
    Touchdowns,
    Interceptions,
    GradesOffense,
    GradesPass,
    FirstDowns,
    Grade,
    SuccessProbability,
    GamesPlayed,
}

impl SortField {
    /// Parse a dotted field path as used in qbboard.toml.
    ///
    /// Unknown paths return `None`; callers treat that as "no active sort"
    /// rather than an error, so a typo in the config degrades to the
    /// identity order instead of refusing to start.
    pub fn parse(path: &str) -> Option<SortField> {
        match path {
            "name" => Some(SortField::Name),
            "school" => Some(SortField::School),
            "stats.rank" => Some(SortField::Rank),
            "stats.completions" => Some(SortField::Completions),
            "stats.attempts" => Some(SortField::Attempts),
            "stats.yards" => Some(SortField::Yards),
            "stats.touchdowns" => Some(SortField::Touchdowns),
            "stats.interceptions" => Some(SortField::Interceptions),
            "stats.grades_offense" => Some(SortField::GradesOffense),
            "stats.grades_pass" => Some(SortField::GradesPass),
            "stats.first_downs" => Some(SortField::FirstDowns),
            "stats.grade" => Some(SortField::Grade),
            "stats.success_probability" => Some(SortField::SuccessProbability),
            "stats.games_played" => Some(SortField::GamesPlayed),
            _ => None,
        }
    }

    /// The dotted path for this field, the inverse of `parse`.
    pub fn path(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::School => "school",
            SortField::Rank => "stats.rank",
            SortField::Completions => "stats.completions",
            SortField::Attempts => "stats.attempts",
            SortField::Yards => "stats.yards",
            SortField::Touchdowns => "stats.touchdowns",
            SortField::Interceptions => "stats.interceptions",
            SortField::GradesOffense => "stats.grades_offense",
            SortField::GradesPass => "stats.grades_pass",
            SortField::FirstDowns => "stats.first_downs",
            SortField::Grade => "stats.grade",
            SortField::SuccessProbability => "stats.success_probability",
            SortField::GamesPlayed => "stats.games_played",
        }
    }
}

/// The value a field accessor extracts from a record for comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue<'a> {
    Text(&'a str),
    Number(f64),
    Absent,
}

impl<'a> SortValue<'a> {
    fn is_absent(&self) -> bool {
        matches!(self, SortValue::Absent)
    }
}

fn number(value: Option<impl Into<f64>>) -> SortValue<'static> {
    match value {
        Some(v) => SortValue::Number(v.into()),
        None => SortValue::Absent,
    }
}

/// Extract the sortable value for `field` from a record. Pure; never fails.
pub fn accessor(record: &ProspectRecord, field: SortField) -> SortValue<'_> {
    let stats = &record.stats;
    match field {
        SortField::Name => SortValue::Text(&record.name),
        SortField::School => SortValue::Text(&record.school),
        SortField::Rank => number(stats.rank),
        SortField::Completions => number(stats.completions),
        SortField::Attempts => number(stats.attempts),
        SortField::Yards => number(stats.yards),
        SortField::Touchdowns => number(stats.touchdowns),
        SortField::Interceptions => number(stats.interceptions),
        SortField::GradesOffense => number(stats.grades_offense),
        SortField::GradesPass => number(stats.grades_pass),
        SortField::FirstDowns => number(stats.first_downs),
        SortField::Grade => number(stats.grade),
        SortField::SuccessProbability => number(stats.success_probability),
        SortField::GamesPlayed => number(stats.games_played),
    }
}

// ---------------------------------------------------------------------------
// Collation
// ---------------------------------------------------------------------------

/// Build a collation key: NFD-decompose, drop combining marks, lowercase.
///
/// "Álvarez" keys the same as "alvarez", so accented names interleave with
/// their unaccented neighbors instead of sorting after 'Z'. The raw string
/// is kept as a deterministic tie-break between key-equal names.
pub fn collation_key(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn compare_text(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Compare two present values under the given direction.
fn compare_present(a: &SortValue<'_>, b: &SortValue<'_>, direction: Direction) -> Ordering {
    let ordering = match (a, b) {
        (SortValue::Text(a), SortValue::Text(b)) => compare_text(a, b),
        (SortValue::Number(a), SortValue::Number(b)) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        // Mixed text/number on one field cannot happen with a closed
        // accessor set; treat as a tie rather than invent an order.
        _ => Ordering::Equal,
    };
    match direction {
        Direction::Ascending => ordering,
        Direction::Descending => ordering.reverse(),
    }
}

/// Compare two records under a sort spec.
///
/// Absent values compare after present ones regardless of direction; two
/// absent values tie (the stable sort then keeps their input order).
pub fn compare_records(
    a: &ProspectRecord,
    b: &ProspectRecord,
    spec: SortSpec,
) -> Ordering {
    let a_value = accessor(a, spec.field);
    let b_value = accessor(b, spec.field);
    match (a_value.is_absent(), b_value.is_absent()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => compare_present(&a_value, &b_value, spec.direction),
    }
}

/// Derive a display ordering for `records` under `spec`.
///
/// Non-mutating and total: the input slice is untouched, `None` (no active
/// sort) returns the input order, and ties keep their input order (stable),
/// so re-applying the same spec is idempotent.
pub fn sorted<'a>(
    records: &'a [ProspectRecord],
    spec: Option<SortSpec>,
) -> Vec<&'a ProspectRecord> {
    let mut ordered: Vec<&ProspectRecord> = records.iter().collect();
    if let Some(spec) = spec {
        ordered.sort_by(|a, b| compare_records(a, b, spec));
    }
    ordered
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
