//! Registration index keyed by competitor name

use crate::category::WeightCategory;
use crate::error::{Error, Result};
use crate::model::Registration;
use std::collections::HashMap;

/// Registration data kept per competitor
#[derive(Debug, Clone, PartialEq)]
pub struct RegEntry {
    pub weight_category: String,
    pub entry_total: i64,
}

/// Lookup from competitor name to registration data
///
/// Built once from the registrations dataset. Duplicate names keep the last
/// record seen; the overwrite count is surfaced so callers can report it
/// instead of losing records silently.
#[derive(Debug, Clone, Default)]
pub struct RegistrationIndex {
    entries: HashMap<String, RegEntry>,
    overwritten: usize,
}

impl RegistrationIndex {
    /// Build the index, validating each registration
    ///
    /// Entry totals must parse as integers and weight categories must be
    /// well formed; either failure aborts the build.
    pub fn build(registrations: &[Registration]) -> Result<Self> {
        let mut index = Self::default();

        for reg in registrations {
            let entry_total: i64 = reg.entry_total.trim().parse().map_err(|_| Error::EntryTotal {
                name: reg.name.clone(),
                value: reg.entry_total.clone(),
            })?;

            if WeightCategory::parse(&reg.weight_category).is_none() {
                return Err(Error::Category {
                    name: reg.name.clone(),
                    value: reg.weight_category.clone(),
                });
            }

            let entry = RegEntry {
                weight_category: reg.weight_category.clone(),
                entry_total,
            };

            if index.entries.insert(reg.name.clone(), entry).is_some() {
                index.overwritten += 1;
            }
        }

        Ok(index)
    }

    /// Look up a competitor's registration
    pub fn get(&self, name: &str) -> Option<&RegEntry> {
        self.entries.get(name)
    }

    /// Whether a competitor is registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of distinct registered competitors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no registrations were indexed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of registrations discarded by duplicate names
    pub fn overwritten(&self) -> usize {
        self.overwritten
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reg(name: &str, category: &str, total: &str) -> Registration {
        Registration {
            name: name.to_string(),
            weight_category: category.to_string(),
            entry_total: total.to_string(),
        }
    }

    #[test]
    fn test_build_basic() {
        let index = RegistrationIndex::build(&[
            reg("A", "Female 59kg", "185"),
            reg("B", "Male 73kg", "165"),
        ])
        .unwrap();

        assert_eq!(index.len(), 2);
        let a = index.get("A").unwrap();
        assert_eq!(a.weight_category, "Female 59kg");
        assert_eq!(a.entry_total, 185);
        assert_eq!(index.overwritten(), 0);
    }

    #[test]
    fn test_duplicate_name_last_wins() {
        let index = RegistrationIndex::build(&[
            reg("A", "Female 59kg", "185"),
            reg("A", "Female 64kg", "190"),
        ])
        .unwrap();

        assert_eq!(index.len(), 1);
        assert_eq!(index.get("A").unwrap().weight_category, "Female 64kg");
        assert_eq!(index.get("A").unwrap().entry_total, 190);
        assert_eq!(index.overwritten(), 1);
    }

    #[test]
    fn test_non_numeric_entry_total_is_error() {
        let result = RegistrationIndex::build(&[reg("A", "Female 59kg", "none")]);
        assert!(matches!(result, Err(Error::EntryTotal { .. })));
    }

    #[test]
    fn test_malformed_category_is_error() {
        let result = RegistrationIndex::build(&[reg("A", "Female heavykg", "185")]);
        assert!(matches!(result, Err(Error::Category { .. })));
    }

    #[test]
    fn test_missing_name_lookup() {
        let index = RegistrationIndex::build(&[reg("A", "Female 59kg", "185")]).unwrap();
        assert!(index.get("B").is_none());
        assert!(!index.contains("B"));
    }
}
