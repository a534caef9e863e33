// Grade classification and display formatting.
//
// Maps continuous grade/probability values onto the fixed ordinal tier
// scale used for display coloring, and owns the formatting rules for every
// numeric cell. Absent is a first-class value throughout: it classifies as
// Unrated and renders as the literal "N/A", while a present 0.0 classifies
// as Poor and renders as "0.0" (or "0.0%"). The two must never be confused.

/// Ordinal display tier for a grade or success probability.
///
/// Ordering follows quality so tiers themselves compare sensibly;
/// `Unrated` sits below `Poor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Unrated,
    Poor,
    BelowAverage,
    Average,
    Good,
    Elite,
}

impl Tier {
    /// Classify a 0-100 grade. Boundaries are closed on the left: exactly
    /// 90.0 is Elite, 89.9999 is Good.
    pub fn for_grade(grade: Option<f64>) -> Tier {
        match grade {
            None => Tier::Unrated,
            Some(g) if g >= 90.0 => Tier::Elite,
            Some(g) if g >= 80.0 => Tier::Good,
            Some(g) if g >= 70.0 => Tier::Average,
            Some(g) if g >= 60.0 => Tier::BelowAverage,
            Some(_) => Tier::Poor,
        }
    }

    /// Classify a [0, 1] probability by scaling to the grade thresholds.
    pub fn for_probability(probability: Option<f64>) -> Tier {
        Tier::for_grade(probability.map(|p| p * 100.0))
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Unrated => "Unrated",
            Tier::Poor => "Poor",
            Tier::BelowAverage => "Below Avg",
            Tier::Average => "Average",
            Tier::Good => "Good",
            Tier::Elite => "Elite",
        }
    }
}

// ---------------------------------------------------------------------------
// Cell formatting
// ---------------------------------------------------------------------------

/// "N/A" stand-in for any absent metric. Never an empty cell, never "0".
pub const NOT_AVAILABLE: &str = "N/A";

/// Grade with one fractional digit, e.g. "91.0".
pub fn format_grade(grade: Option<f64>) -> String {
    match grade {
        Some(g) => format!("{:.1}", g),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Fractional probability as a percentage, e.g. 0.615 -> "61.5%".
pub fn format_probability(probability: Option<f64>) -> String {
    match probability {
        Some(p) => format!("{:.1}%", p * 100.0),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Plain counting stat, e.g. games played or yards.
pub fn format_count(value: Option<u32>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Per-game rate with one fractional digit.
pub fn format_rate(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Big-board rank, e.g. "#3".
pub fn format_rank(rank: Option<u32>) -> String {
    match rank {
        Some(r) => format!("#{}", r),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Paired counting stats, e.g. "195/272" for Comp/Att or "19/6" for TD/INT.
/// Either side may independently be absent.
pub fn format_pair(left: Option<u32>, right: Option<u32>) -> String {
    format!("{}/{}", format_count(left), format_count(right))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
