//! lifts-core: Core library for merging weightlifting competition results
//!
//! This library provides functionality to:
//! - Load lift attempts and entry registrations from CSV, JSON, or legacy
//!   sources with embedded array literals
//! - Index registrations by competitor name
//! - Fold attempts into per-competitor best snatch/clean-and-jerk/total
//! - Sort results by weight category, entry total, and name
//! - Serialize the merged results as a TypeScript module, JSON, or CSV

pub mod aggregate;
pub mod category;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
pub mod report;

pub use aggregate::{best_results, Aggregation};
pub use category::{compare_categories, Gender, WeightCategory};
pub use error::{Error, Result};
pub use index::{RegEntry, RegistrationIndex};
pub use loader::{load_attempts, load_registrations, parse_csv_records};
pub use model::{BestResult, LiftAttempt, Registration};
pub use report::{export_results, render_module, sort_results, write_results, OutputFormat};
