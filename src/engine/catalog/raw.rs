//! Raw catalog records as they arrive from the published institution data,
//! with textual award rules and amount expressions. Parsing into the typed
//! table happens here so malformed text fails at load time instead of
//! silently contributing zero aid.

use serde::Deserialize;

use super::{
    AdmissionThresholds, Award, AwardAmount, AwardCategory, AwardRule, CatalogError,
    CredentialKind, CredentialThresholds, Institution, InstitutionTier,
};

#[derive(Debug, Clone, Deserialize)]
pub struct RawInstitution {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub ownership: String,
    pub tier: String,
    pub admission_rate: f64,
    pub requirements: RawRequirements,
    pub tuition: u64,
    #[serde(default)]
    pub hostel_fees: u64,
    #[serde(default)]
    pub scholarships: Vec<RawAward>,
    #[serde(default)]
    pub strengths: Vec<String>,
}

/// Threshold fields as published per exam. Only the pair relevant to the
/// declared tier is required; the loader rejects entries where it is absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRequirements {
    pub board_percentage_min: Option<f64>,
    pub board_percentage_avg: Option<f64>,
    pub jee_advanced_rank_avg: Option<f64>,
    pub jee_advanced_rank_max: Option<f64>,
    pub jee_main_percentile_min: Option<f64>,
    pub jee_main_percentile_avg: Option<f64>,
    pub bitsat_score_min: Option<f64>,
    pub bitsat_score_avg: Option<f64>,
    pub neet_percentile_min: Option<f64>,
    pub neet_percentile_avg: Option<f64>,
    pub cuet_percentile_min: Option<f64>,
    pub cuet_percentile_avg: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAward {
    pub name: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub award_type: String,
    pub requirements: String,
}

pub(super) fn parse_institution(raw: RawInstitution) -> Result<Institution, CatalogError> {
    let tier = parse_tier(&raw.tier).ok_or_else(|| CatalogError::UnknownTier {
        institution: raw.name.clone(),
        tier: raw.tier.clone(),
    })?;

    let credential = match tier.credential() {
        Some(kind) => Some(credential_thresholds(&raw, kind).ok_or_else(|| {
            CatalogError::MissingCredentialThresholds {
                institution: raw.name.clone(),
                tier: tier.label(),
            }
        })?),
        None => None,
    };

    let thresholds = AdmissionThresholds {
        board_percentage_min: raw.requirements.board_percentage_min.ok_or_else(|| {
            CatalogError::MissingBoardThresholds {
                institution: raw.name.clone(),
            }
        })?,
        board_percentage_avg: raw
            .requirements
            .board_percentage_avg
            .ok_or_else(|| CatalogError::MissingBoardThresholds {
                institution: raw.name.clone(),
            })?,
        credential,
    };

    let awards = raw
        .scholarships
        .into_iter()
        .map(parse_award)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Institution {
        id: raw.id,
        name: raw.name,
        location: raw.location,
        ownership: raw.ownership,
        tier,
        admission_rate: raw.admission_rate,
        thresholds,
        tuition: raw.tuition,
        hostel_fees: raw.hostel_fees,
        awards,
        strengths: raw.strengths,
    })
}

fn parse_tier(value: &str) -> Option<InstitutionTier> {
    match value.trim() {
        "IIT" => Some(InstitutionTier::Iit),
        "NIT" => Some(InstitutionTier::Nit),
        "Private Elite" => Some(InstitutionTier::PrivateElite),
        "Medical Premier" => Some(InstitutionTier::MedicalPremier),
        "Medical Elite" => Some(InstitutionTier::MedicalElite),
        "Central University" => Some(InstitutionTier::CentralUniversity),
        "State Premier" => Some(InstitutionTier::StatePremier),
        "Private Reputed" => Some(InstitutionTier::PrivateReputed),
        _ => None,
    }
}

fn credential_thresholds(
    raw: &RawInstitution,
    kind: CredentialKind,
) -> Option<CredentialThresholds> {
    let requirements = &raw.requirements;
    let (average, cutoff) = match kind {
        CredentialKind::JeeAdvancedRank => (
            requirements.jee_advanced_rank_avg?,
            requirements.jee_advanced_rank_max?,
        ),
        CredentialKind::JeeMainPercentile => (
            requirements.jee_main_percentile_avg?,
            requirements.jee_main_percentile_min?,
        ),
        CredentialKind::BitsatScore => {
            (requirements.bitsat_score_avg?, requirements.bitsat_score_min?)
        }
        CredentialKind::NeetPercentile => (
            requirements.neet_percentile_avg?,
            requirements.neet_percentile_min?,
        ),
        CredentialKind::CuetPercentile => (
            requirements.cuet_percentile_avg?,
            requirements.cuet_percentile_min?,
        ),
    };
    Some(CredentialThresholds { average, cutoff })
}

pub(super) fn parse_award(raw: RawAward) -> Result<Award, CatalogError> {
    let category = parse_category(&raw.award_type, &raw.name);
    let rule = parse_rule(category, &raw.requirements, &raw.name)?;
    let amount = parse_amount(&raw.amount).ok_or_else(|| CatalogError::UnparsableAmount {
        award: raw.name.clone(),
        amount: raw.amount.clone(),
    })?;

    Ok(Award {
        name: raw.name,
        category,
        rule,
        // The topper condition grants without a separate application once met.
        automatic: matches!(rule, AwardRule::BoardTopper),
        amount,
    })
}

fn parse_category(award_type: &str, name: &str) -> AwardCategory {
    let award_type = award_type.to_lowercase();
    if award_type.contains("merit-cum-means") || award_type.contains("means") {
        AwardCategory::MeritCumMeans
    } else if award_type.contains("merit") {
        AwardCategory::Merit
    } else if award_type.contains("need") {
        AwardCategory::NeedBased
    } else if award_type.contains("category") || name.contains("SC/ST") || name.contains("OBC") {
        AwardCategory::CategoryBased
    } else if award_type.contains("state") {
        AwardCategory::StateBased
    } else {
        AwardCategory::NeedBased
    }
}

fn parse_rule(
    category: AwardCategory,
    requirements: &str,
    name: &str,
) -> Result<AwardRule, CatalogError> {
    if !matches!(category, AwardCategory::Merit) {
        return Ok(AwardRule::OpenEligibility);
    }

    let lowered = requirements.to_lowercase();
    if lowered.contains("topper") {
        return Ok(AwardRule::BoardTopper);
    }
    if name.contains("KVPY") || name.contains("INSPIRE") || lowered.contains("scholar") {
        return Ok(AwardRule::NamedScholar);
    }
    if let Some(percent) = top_percent(&lowered) {
        if AwardRule::top_percent_threshold(percent).is_some() {
            return Ok(AwardRule::TopPercent(percent));
        }
    }

    Err(CatalogError::UnparsableRule {
        award: name.to_string(),
        rule: requirements.to_string(),
    })
}

fn top_percent(rule: &str) -> Option<u8> {
    let rest = rule.split("top").nth(1)?;
    let digits: String = rest
        .chars()
        .skip_while(|c| c.is_whitespace())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

fn parse_amount(amount: &str) -> Option<AwardAmount> {
    let lowered = amount.to_lowercase();
    if lowered.contains("full") || lowered.contains("100%") {
        return Some(AwardAmount::FullWaiver);
    }
    if let Some(percent) = percent_figure(&lowered) {
        return Some(AwardAmount::TuitionPercent(percent));
    }
    rupee_figure(amount).map(AwardAmount::Fixed)
}

fn percent_figure(amount: &str) -> Option<u8> {
    let prefix = &amount[..amount.find('%')?];
    let digits: String = prefix
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<String>()
        .chars()
        .rev()
        .collect();
    digits.parse().ok()
}

/// Extracts the first rupee figure, tolerating Indian digit grouping.
/// Ranges like "₹50,000-1,00,000/year" resolve to the lower bound.
fn rupee_figure(amount: &str) -> Option<u64> {
    let start = amount.find(|c: char| c.is_ascii_digit())?;
    let digits: String = amount[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_award(amount: &str, award_type: &str, requirements: &str) -> RawAward {
        RawAward {
            name: "Institute Scholarship".to_string(),
            amount: amount.to_string(),
            award_type: award_type.to_string(),
            requirements: requirements.to_string(),
        }
    }

    #[test]
    fn parses_fixed_rupee_amount() {
        let award = parse_award(raw_award("₹80,000/year", "Merit-based", "Top 1% in Class 12"))
            .expect("parses");
        assert_eq!(award.amount, AwardAmount::Fixed(80_000));
        assert_eq!(award.rule, AwardRule::TopPercent(1));
        assert!(!award.automatic);
    }

    #[test]
    fn parses_full_waiver_and_marks_topper_automatic() {
        let award = parse_award(raw_award(
            "Full tuition fee waiver",
            "Merit-based",
            "State board topper",
        ))
        .expect("parses");
        assert_eq!(award.amount, AwardAmount::FullWaiver);
        assert_eq!(award.rule, AwardRule::BoardTopper);
        assert!(award.automatic);
    }

    #[test]
    fn parses_percentage_waiver() {
        let award = parse_award(raw_award("50% tuition waiver", "Merit-based", "Top 10%"))
            .expect("parses");
        assert_eq!(award.amount, AwardAmount::TuitionPercent(50));
    }

    #[test]
    fn range_amounts_resolve_to_lower_bound() {
        let award = parse_award(raw_award(
            "₹50,000-1,00,000/year",
            "Merit-based",
            "Top 5% in boards",
        ))
        .expect("parses");
        assert_eq!(award.amount, AwardAmount::Fixed(50_000));
    }

    #[test]
    fn need_based_awards_get_open_eligibility() {
        let award = parse_award(raw_award(
            "Up to ₹2,25,000/year",
            "Need-based",
            "Family income < ₹1 LPA",
        ))
        .expect("parses");
        assert_eq!(award.category, AwardCategory::NeedBased);
        assert_eq!(award.rule, AwardRule::OpenEligibility);
    }

    #[test]
    fn rejects_merit_award_with_unreadable_rule() {
        let err = parse_award(raw_award("₹10,000", "Merit-based", "committee discretion"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnparsableRule { .. }));
    }

    #[test]
    fn rejects_unknown_top_percent_band() {
        let err =
            parse_award(raw_award("₹10,000", "Merit-based", "Top 3% in boards")).unwrap_err();
        assert!(matches!(err, CatalogError::UnparsableRule { .. }));
    }

    #[test]
    fn unknown_tier_fails_fast() {
        let raw = RawInstitution {
            id: "x".to_string(),
            name: "Mystery College".to_string(),
            location: "Unknown".to_string(),
            ownership: "Private".to_string(),
            tier: "Ivy League".to_string(),
            admission_rate: 10.0,
            requirements: RawRequirements {
                board_percentage_min: Some(60.0),
                board_percentage_avg: Some(80.0),
                ..RawRequirements::default()
            },
            tuition: 100_000,
            hostel_fees: 20_000,
            scholarships: Vec::new(),
            strengths: Vec::new(),
        };
        let err = parse_institution(raw).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownTier { .. }));
    }
}
