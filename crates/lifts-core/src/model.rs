//! Core record types for competition results and entry registrations

use serde::{Deserialize, Serialize};

/// A single recorded lift attempt from the raw results dataset
///
/// One record per attempt; the same lifter name appears once per attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiftAttempt {
    /// Competitor name (non-unique across records)
    pub lifter: String,
    /// Body weight at weigh-in, kg
    pub body_weight: f64,
    /// Snatch result for this attempt, kg
    pub snatch: f64,
    /// Clean-and-jerk result for this attempt, kg
    pub cj: f64,
    /// Competition total for this attempt, kg
    pub total: f64,
}

/// An entry registration from the entries dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// Competitor name (unique key; last record wins on duplicates)
    pub name: String,
    /// Declared weight category, e.g. "Female 59kg" or "Male +109kg"
    pub weight_category: String,
    /// Declared entry total as a numeric string
    pub entry_total: String,
}

/// Best observed lifts for one competitor, combined with registration data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestResult {
    pub lifter: String,
    pub weight_category: String,
    pub entry_total: i64,
    pub best_snatch: f64,
    // camelCase would give "bestCj"; the datasets spell it "bestCJ"
    #[serde(rename = "bestCJ")]
    pub best_cj: f64,
    pub best_total: f64,
}

impl BestResult {
    /// Seed a result from the first attempt seen for a registered competitor
    pub fn from_attempt(attempt: &LiftAttempt, weight_category: &str, entry_total: i64) -> Self {
        Self {
            lifter: attempt.lifter.clone(),
            weight_category: weight_category.to_string(),
            entry_total,
            best_snatch: attempt.snatch,
            best_cj: attempt.cj,
            best_total: attempt.total,
        }
    }

    /// Fold a further attempt into the running maxima
    ///
    /// The three best fields are raised independently; a single attempt need
    /// not be the source of all three maxima, so `best_total` may differ from
    /// `best_snatch + best_cj`.
    pub fn fold(&mut self, attempt: &LiftAttempt) {
        self.best_snatch = self.best_snatch.max(attempt.snatch);
        self.best_cj = self.best_cj.max(attempt.cj);
        self.best_total = self.best_total.max(attempt.total);
    }
}
