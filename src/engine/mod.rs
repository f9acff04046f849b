//! The scoring and matching core: a pure function from a student profile
//! and a validated catalog snapshot to scores, risk categories, award
//! matches, and cost projections.

pub mod catalog;
pub mod domain;
pub mod insight;
pub mod matching;
pub mod normalizer;

pub use catalog::{Catalog, CatalogError};
pub use insight::{evaluate_profile, ProfileInsight};
pub use matching::{MatchEngine, MatchReport};

#[cfg(test)]
mod tests;
