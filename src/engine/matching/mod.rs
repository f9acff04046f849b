mod awards;
mod cost;
mod fit;
mod probability;
mod report;

pub use awards::AwardMatch;
pub use cost::CostProjection;
pub use fit::{CredentialStanding, ProgramMatch};
pub use report::{
    AwardLead, AwardsSummary, MatchReport, MatchSummary, Recommendation, ValueEntry,
};

use serde::{Deserialize, Serialize};

use super::catalog::{Catalog, Institution, InstitutionTier};
use super::domain::StudentProfile;
use super::normalizer::NormalizedProfile;

/// Probability-based risk category relative to a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchCategory {
    Reach,
    Target,
    Safety,
}

impl MatchCategory {
    pub fn from_probability(probability: u8) -> Self {
        if probability < 40 {
            MatchCategory::Reach
        } else if probability < 70 {
            MatchCategory::Target
        } else {
            MatchCategory::Safety
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MatchCategory::Reach => "reach",
            MatchCategory::Target => "target",
            MatchCategory::Safety => "safety",
        }
    }
}

/// Per-institution evaluation result, owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "'de: 'static"))]
pub struct InstitutionMatch {
    pub institution_id: String,
    pub name: String,
    pub location: String,
    pub tier: InstitutionTier,
    /// 0-100 fitness, independent of acceptance likelihood.
    pub match_score: u8,
    /// 5-95 acceptance estimate.
    pub admission_probability: u8,
    pub category: MatchCategory,
    pub awards: Vec<AwardMatch>,
    pub cost: CostProjection,
    pub fit_reasons: Vec<String>,
    pub program_matches: Vec<ProgramMatch>,
}

/// Stateless matcher over a validated catalog snapshot. A pure function
/// of its inputs; evaluating the same profile twice yields identical
/// output.
pub struct MatchEngine {
    catalog: Catalog,
}

impl MatchEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Evaluates the profile against every institution in the catalog and
    /// aggregates the bucketed report. Institutions are independent of
    /// one another; only the final aggregation needs the full set.
    pub fn match_institutions(&self, profile: &StudentProfile) -> MatchReport {
        let normalized = NormalizedProfile::from_profile(profile);
        let matches = self
            .catalog
            .institutions()
            .iter()
            .map(|institution| evaluate_institution(&normalized, institution))
            .collect();
        report::build_report(matches)
    }
}

fn evaluate_institution(
    normalized: &NormalizedProfile,
    institution: &Institution,
) -> InstitutionMatch {
    let standing = fit::credential_standing(normalized, institution);
    let match_score = fit::match_score(normalized, institution, standing);
    let admission_probability = probability::admission_probability(normalized, institution, standing);
    let award_outcome = awards::match_awards(normalized, institution);
    let cost = cost::project_cost(institution, award_outcome.estimated_aid);

    InstitutionMatch {
        institution_id: institution.id.clone(),
        name: institution.name.clone(),
        location: institution.location.clone(),
        tier: institution.tier,
        match_score,
        admission_probability,
        category: MatchCategory::from_probability(admission_probability),
        awards: award_outcome.awards,
        cost,
        fit_reasons: fit::fit_reasons(normalized, institution, standing),
        program_matches: fit::matching_programs(normalized, institution),
    }
}
