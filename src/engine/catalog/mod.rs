mod raw;
mod seed;

pub use raw::{RawAward, RawInstitution, RawRequirements};
pub use seed::seed_catalog;

use serde::{Deserialize, Serialize};
use std::io::Read;

/// Closed institution categories. The tier decides which entrance
/// credential rule and threshold pair apply during matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstitutionTier {
    Iit,
    Nit,
    PrivateElite,
    MedicalPremier,
    MedicalElite,
    CentralUniversity,
    StatePremier,
    PrivateReputed,
}

impl InstitutionTier {
    pub const fn label(self) -> &'static str {
        match self {
            InstitutionTier::Iit => "IIT",
            InstitutionTier::Nit => "NIT",
            InstitutionTier::PrivateElite => "Private Elite",
            InstitutionTier::MedicalPremier => "Medical Premier",
            InstitutionTier::MedicalElite => "Medical Elite",
            InstitutionTier::CentralUniversity => "Central University",
            InstitutionTier::StatePremier => "State Premier",
            InstitutionTier::PrivateReputed => "Private Reputed",
        }
    }

    /// Entrance credential this tier admits on, if any. Tiers without one
    /// fall back to board-standing bands during matching.
    pub const fn credential(self) -> Option<CredentialKind> {
        match self {
            InstitutionTier::Iit => Some(CredentialKind::JeeAdvancedRank),
            InstitutionTier::Nit => Some(CredentialKind::JeeMainPercentile),
            InstitutionTier::PrivateElite => Some(CredentialKind::BitsatScore),
            InstitutionTier::MedicalPremier | InstitutionTier::MedicalElite => {
                Some(CredentialKind::NeetPercentile)
            }
            InstitutionTier::CentralUniversity => Some(CredentialKind::CuetPercentile),
            InstitutionTier::StatePremier | InstitutionTier::PrivateReputed => None,
        }
    }
}

/// The admission signal a tier evaluates. Rank-based credentials compare
/// downward (lower is better); the rest compare upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CredentialKind {
    JeeAdvancedRank,
    JeeMainPercentile,
    BitsatScore,
    NeetPercentile,
    CuetPercentile,
}

impl CredentialKind {
    pub const fn label(self) -> &'static str {
        match self {
            CredentialKind::JeeAdvancedRank => "JEE Advanced rank",
            CredentialKind::JeeMainPercentile => "JEE Main percentile",
            CredentialKind::BitsatScore => "BITSAT score",
            CredentialKind::NeetPercentile => "NEET percentile",
            CredentialKind::CuetPercentile => "CUET percentile",
        }
    }

    pub const fn rank_based(self) -> bool {
        matches!(self, CredentialKind::JeeAdvancedRank)
    }
}

/// Threshold pair for the tier-relevant credential. For rank-based
/// credentials `cutoff` is the worst admitted rank and `average` the
/// typical one; for score/percentile credentials `cutoff` is the minimum
/// and `average` the typical value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CredentialThresholds {
    pub average: f64,
    pub cutoff: f64,
}

/// Requirement thresholds validated at catalog load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdmissionThresholds {
    pub board_percentage_min: f64,
    pub board_percentage_avg: f64,
    pub credential: Option<CredentialThresholds>,
}

/// Funding program attached to an institution, with its eligibility rule
/// and amount expression already parsed into the typed table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub name: String,
    pub category: AwardCategory,
    pub rule: AwardRule,
    pub amount: AwardAmount,
    /// Granted without a separate application when the rule is met.
    pub automatic: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AwardCategory {
    Merit,
    MeritCumMeans,
    NeedBased,
    CategoryBased,
    StateBased,
}

impl AwardCategory {
    pub const fn label(self) -> &'static str {
        match self {
            AwardCategory::Merit => "merit",
            AwardCategory::MeritCumMeans => "merit-cum-means",
            AwardCategory::NeedBased => "need-based",
            AwardCategory::CategoryBased => "category-based",
            AwardCategory::StateBased => "state-based",
        }
    }
}

/// Eligibility condition evaluated against the normalized profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AwardRule {
    /// Board standing in the top N percent; N is restricted to the bands
    /// published by the funding bodies.
    TopPercent(u8),
    /// At least two achievement milestones and standing of 90 or better.
    NamedScholar,
    /// Board topper condition, standing 98 or better; grants automatically.
    BoardTopper,
    /// Non-merit categories: potentially eligible, pending verification
    /// the engine has no data for.
    OpenEligibility,
}

impl AwardRule {
    /// Standing threshold implied by a top-percent band.
    pub fn top_percent_threshold(percent: u8) -> Option<f64> {
        match percent {
            1 => Some(97.0),
            5 => Some(95.0),
            7 => Some(93.0),
            10 => Some(90.0),
            20 => Some(85.0),
            _ => None,
        }
    }
}

/// Amount expression resolved from the award's textual form at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AwardAmount {
    /// Absolute annual figure in rupees.
    Fixed(u64),
    /// Percentage of tuition waived.
    TuitionPercent(u8),
    /// Complete tuition waiver.
    FullWaiver,
}

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    pub id: String,
    pub name: String,
    pub location: String,
    pub ownership: String,
    pub tier: InstitutionTier,
    /// Acceptance rate as a percentage.
    pub admission_rate: f64,
    pub thresholds: AdmissionThresholds,
    /// Annual tuition in rupees.
    pub tuition: u64,
    /// Annual hostel fee in rupees.
    pub hostel_fees: u64,
    pub awards: Vec<Award>,
    /// Program names used for interest matching.
    pub strengths: Vec<String>,
}

/// Validated, read-only snapshot of the institution catalog. Built once at
/// process start and passed into the engine by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    institutions: Vec<Institution>,
}

impl Catalog {
    /// Validates every entry up front so a malformed threshold cannot
    /// silently corrupt probability calculations later.
    pub fn new(institutions: Vec<Institution>) -> Result<Self, CatalogError> {
        for institution in &institutions {
            validate_institution(institution)?;
        }
        Ok(Self { institutions })
    }

    pub fn from_raw(raw: Vec<RawInstitution>) -> Result<Self, CatalogError> {
        let institutions = raw
            .into_iter()
            .map(raw::parse_institution)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(institutions)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let raw: Vec<RawInstitution> = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    pub fn institutions(&self) -> &[Institution] {
        &self.institutions
    }

    pub fn len(&self) -> usize {
        self.institutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.institutions.is_empty()
    }
}

fn validate_institution(institution: &Institution) -> Result<(), CatalogError> {
    let thresholds = &institution.thresholds;
    if thresholds.board_percentage_min > thresholds.board_percentage_avg {
        return Err(CatalogError::InvertedBoardThresholds {
            institution: institution.name.clone(),
        });
    }

    if let Some(kind) = institution.tier.credential() {
        let Some(credential) = thresholds.credential else {
            return Err(CatalogError::MissingCredentialThresholds {
                institution: institution.name.clone(),
                tier: institution.tier.label(),
            });
        };
        let inverted = if kind.rank_based() {
            credential.average > credential.cutoff
        } else {
            credential.average < credential.cutoff
        };
        if inverted {
            return Err(CatalogError::InvertedCredentialThresholds {
                institution: institution.name.clone(),
                credential: kind.label(),
            });
        }
    }

    for award in &institution.awards {
        // Only pure merit awards carry a checkable rule; means-tested and
        // category awards depend on data the engine does not hold.
        let rule_matches_category = match award.category {
            AwardCategory::Merit => !matches!(award.rule, AwardRule::OpenEligibility),
            _ => matches!(award.rule, AwardRule::OpenEligibility),
        };
        if !rule_matches_category {
            return Err(CatalogError::RuleCategoryMismatch {
                institution: institution.name.clone(),
                award: award.name.clone(),
            });
        }
        if let AwardRule::TopPercent(percent) = award.rule {
            if AwardRule::top_percent_threshold(percent).is_none() {
                return Err(CatalogError::UnknownTopPercentBand {
                    award: award.name.clone(),
                    percent,
                });
            }
        }
        if let AwardAmount::TuitionPercent(percent) = award.amount {
            if percent == 0 || percent > 100 {
                return Err(CatalogError::InvalidTuitionPercent {
                    award: award.name.clone(),
                    percent,
                });
            }
        }
    }

    Ok(())
}

/// Catalog-load failures. These abort before any profile evaluation runs.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("could not deserialize catalog data: {0}")]
    Deserialize(#[from] serde_json::Error),
    #[error("{institution}: board percentage thresholds are missing")]
    MissingBoardThresholds { institution: String },
    #[error("{institution}: board percentage minimum exceeds average")]
    InvertedBoardThresholds { institution: String },
    #[error("{institution}: tier {tier} requires credential thresholds")]
    MissingCredentialThresholds {
        institution: String,
        tier: &'static str,
    },
    #[error("{institution}: {credential} thresholds are inverted")]
    InvertedCredentialThresholds {
        institution: String,
        credential: &'static str,
    },
    #[error("{institution}: award '{award}' rule does not fit its category")]
    RuleCategoryMismatch { institution: String, award: String },
    #[error("award '{award}': unsupported top-percent band {percent}")]
    UnknownTopPercentBand { award: String, percent: u8 },
    #[error("award '{award}': tuition percentage {percent} out of range")]
    InvalidTuitionPercent { award: String, percent: u8 },
    #[error("institution '{institution}': unknown tier '{tier}'")]
    UnknownTier { institution: String, tier: String },
    #[error("award '{award}': could not parse amount expression '{amount}'")]
    UnparsableAmount { award: String, amount: String },
    #[error("award '{award}': could not parse eligibility rule '{rule}'")]
    UnparsableRule { award: String, rule: String },
}
