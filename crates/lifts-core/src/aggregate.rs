//! Fold raw attempts into one best-result record per registered competitor

use crate::index::RegistrationIndex;
use crate::model::{BestResult, LiftAttempt};
use std::collections::HashMap;

/// Aggregation output plus diagnostics
#[derive(Debug, Clone)]
pub struct Aggregation {
    /// One record per registered competitor with at least one attempt;
    /// order is arbitrary until sorted
    pub results: Vec<BestResult>,
    /// Attempts dropped because the lifter has no registration
    pub skipped_attempts: usize,
}

/// Fold attempts into per-competitor maxima
///
/// Attempts from unregistered lifters are skipped and counted. The first
/// attempt seen for a competitor seeds the record; later attempts raise each
/// best field independently.
pub fn best_results(attempts: &[LiftAttempt], index: &RegistrationIndex) -> Aggregation {
    let mut acc: HashMap<&str, BestResult> = HashMap::new();
    let mut skipped_attempts = 0;

    for attempt in attempts {
        let Some(entry) = index.get(&attempt.lifter) else {
            skipped_attempts += 1;
            continue;
        };

        match acc.get_mut(attempt.lifter.as_str()) {
            Some(best) => best.fold(attempt),
            None => {
                acc.insert(
                    attempt.lifter.as_str(),
                    BestResult::from_attempt(attempt, &entry.weight_category, entry.entry_total),
                );
            }
        }
    }

    Aggregation {
        results: acc.into_values().collect(),
        skipped_attempts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Registration;

    fn attempt(lifter: &str, snatch: f64, cj: f64, total: f64) -> LiftAttempt {
        LiftAttempt {
            lifter: lifter.to_string(),
            body_weight: 70.0,
            snatch,
            cj,
            total,
        }
    }

    fn index(entries: &[(&str, &str, &str)]) -> RegistrationIndex {
        let regs: Vec<Registration> = entries
            .iter()
            .map(|(name, cat, total)| Registration {
                name: name.to_string(),
                weight_category: cat.to_string(),
                entry_total: total.to_string(),
            })
            .collect();
        RegistrationIndex::build(&regs).unwrap()
    }

    #[test]
    fn test_maxima_across_attempts() {
        let attempts = vec![
            attempt("A", 80.0, 100.0, 180.0),
            attempt("A", 82.0, 98.0, 180.0),
            attempt("A", 78.0, 102.0, 178.0),
        ];
        let index = index(&[("A", "Female 59kg", "185")]);

        let agg = best_results(&attempts, &index);
        assert_eq!(agg.results.len(), 1);

        let best = &agg.results[0];
        assert_eq!(best.best_snatch, 82.0);
        assert_eq!(best.best_cj, 102.0);
        assert_eq!(best.best_total, 180.0);
        assert_eq!(best.weight_category, "Female 59kg");
        assert_eq!(best.entry_total, 185);
    }

    #[test]
    fn test_maxima_independent_of_attempt_order() {
        let index = index(&[("A", "Female 59kg", "185")]);
        let forward = vec![attempt("A", 80.0, 100.0, 180.0), attempt("A", 82.0, 98.0, 179.0)];
        let reversed: Vec<_> = forward.iter().rev().cloned().collect();

        let a = best_results(&forward, &index);
        let b = best_results(&reversed, &index);

        assert_eq!(a.results[0], b.results[0]);
    }

    #[test]
    fn test_unregistered_lifter_skipped_and_counted() {
        let attempts = vec![
            attempt("A", 80.0, 100.0, 180.0),
            attempt("Ghost", 120.0, 150.0, 270.0),
            attempt("Ghost", 121.0, 151.0, 272.0),
        ];
        let index = index(&[("A", "Female 59kg", "185")]);

        let agg = best_results(&attempts, &index);
        assert_eq!(agg.results.len(), 1);
        assert_eq!(agg.results[0].lifter, "A");
        assert_eq!(agg.skipped_attempts, 2);
    }

    #[test]
    fn test_registered_without_attempts_absent() {
        let attempts = vec![attempt("A", 80.0, 100.0, 180.0)];
        let index = index(&[("A", "Female 59kg", "185"), ("B", "Male 73kg", "165")]);

        let agg = best_results(&attempts, &index);
        assert_eq!(agg.results.len(), 1);
        assert_eq!(agg.results[0].lifter, "A");
    }

    #[test]
    fn test_empty_attempts() {
        let index = index(&[("A", "Female 59kg", "185")]);
        let agg = best_results(&[], &index);
        assert!(agg.results.is_empty());
        assert_eq!(agg.skipped_attempts, 0);
    }
}
