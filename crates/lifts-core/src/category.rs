//! Weight category parsing and competition ordering
//!
//! Category strings look like "Female 49kg", "Male +109kg", or bare "+87kg".
//! The competition order is: Female before Male, then ascending weight, then
//! the unbounded "+" division after its bounded counterpart.

use std::cmp::Ordering;

/// Gender division; Female sorts before Male
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Gender {
    Female,
    Male,
}

/// A weight category parsed into its sortable parts
#[derive(Debug, Clone, Copy)]
pub struct WeightCategory {
    pub gender: Gender,
    /// Weight threshold in kg
    pub weight: f64,
    /// True for the unbounded superheavy division ("+109kg")
    pub plus: bool,
}

impl WeightCategory {
    /// Parse a category string
    ///
    /// A missing gender prefix means Male. Returns `None` when the weight is
    /// not numeric; callers validate categories up front so ordering can
    /// assume well-formed input.
    pub fn parse(s: &str) -> Option<Self> {
        let gender = if s.starts_with("Female") {
            Gender::Female
        } else {
            Gender::Male
        };

        let rest = s
            .strip_prefix("Female ")
            .or_else(|| s.strip_prefix("Male "))
            .unwrap_or(s)
            .trim();

        let plus = rest.starts_with('+');
        let weight: f64 = rest
            .trim_start_matches('+')
            .trim_end_matches("kg")
            .parse()
            .ok()?;

        Some(Self { gender, weight, plus })
    }
}

impl PartialEq for WeightCategory {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for WeightCategory {}

impl PartialOrd for WeightCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WeightCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        self.gender
            .cmp(&other.gender)
            .then(self.weight.total_cmp(&other.weight))
            // bool orders false < true, so non-plus comes first
            .then(self.plus.cmp(&other.plus))
    }
}

/// Compare two category strings in competition order
///
/// Unparseable weights compare as 0kg; the indexer rejects malformed
/// categories before any comparison happens.
pub fn compare_categories(a: &str, b: &str) -> Ordering {
    let fallback = |s: &str| WeightCategory {
        gender: if s.starts_with("Female") {
            Gender::Female
        } else {
            Gender::Male
        },
        weight: 0.0,
        plus: false,
    };

    let ca = WeightCategory::parse(a).unwrap_or_else(|| fallback(a));
    let cb = WeightCategory::parse(b).unwrap_or_else(|| fallback(b));
    ca.cmp(&cb)
}
