//! Academic and entrance-credential fit fractions plus the composite
//! match score for one profile/institution pair.

use serde::{Deserialize, Serialize};

use crate::engine::catalog::Institution;
use crate::engine::normalizer::NormalizedProfile;

// One convention for every tier: a below-cutoff result is a stronger
// signal than no result at all.
const FIT_MEETS_AVERAGE: f64 = 1.0;
const FIT_MEETS_CUTOFF: f64 = 0.7;
const FIT_BELOW_CUTOFF: f64 = 0.4;
const FIT_MISSING: f64 = 0.2;

/// Where the profile's tier-relevant credential stands against the
/// institution's thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialStanding {
    MeetsAverage,
    MeetsCutoff,
    BelowCutoff,
    Missing,
    /// Tier admits on board standing; no standardized credential applies.
    NotRequired,
}

pub(crate) fn credential_standing(
    normalized: &NormalizedProfile,
    institution: &Institution,
) -> CredentialStanding {
    let Some(kind) = institution.tier.credential() else {
        return CredentialStanding::NotRequired;
    };
    let Some(value) = normalized.credential_value(kind) else {
        return CredentialStanding::Missing;
    };
    // Catalog validation guarantees the thresholds exist for this tier.
    let Some(thresholds) = institution.thresholds.credential else {
        return CredentialStanding::Missing;
    };

    if meets(value, thresholds.average, kind.rank_based()) {
        CredentialStanding::MeetsAverage
    } else if meets(value, thresholds.cutoff, kind.rank_based()) {
        CredentialStanding::MeetsCutoff
    } else {
        CredentialStanding::BelowCutoff
    }
}

fn meets(value: f64, threshold: f64, rank_based: bool) -> bool {
    if rank_based {
        value <= threshold
    } else {
        value >= threshold
    }
}

/// Fraction in [0, 1] for the tier-dependent entrance-credential rule.
pub(crate) fn credential_fit(
    standing: CredentialStanding,
    normalized: &NormalizedProfile,
) -> f64 {
    match standing {
        CredentialStanding::MeetsAverage => FIT_MEETS_AVERAGE,
        CredentialStanding::MeetsCutoff => FIT_MEETS_CUTOFF,
        CredentialStanding::BelowCutoff => FIT_BELOW_CUTOFF,
        CredentialStanding::Missing => FIT_MISSING,
        CredentialStanding::NotRequired => standing_band(normalized.board_percentage),
    }
}

fn standing_band(board_percentage: f64) -> f64 {
    if board_percentage >= 90.0 {
        1.0
    } else if board_percentage >= 80.0 {
        0.8
    } else if board_percentage >= 70.0 {
        0.6
    } else {
        0.4
    }
}

/// Fraction in [0, 1] for board standing against the institution's
/// minimum/average pair. Linear between the two, proportional below.
pub(crate) fn academic_fit(normalized: &NormalizedProfile, institution: &Institution) -> f64 {
    let value = normalized.board_percentage;
    let min = institution.thresholds.board_percentage_min;
    let avg = institution.thresholds.board_percentage_avg;

    if value >= avg {
        1.0
    } else if value >= min && avg > min {
        0.5 + ((value - min) / (avg - min)) * 0.5
    } else if min > 0.0 {
        ((value / min) * 0.5).max(0.0)
    } else {
        0.0
    }
}

/// Composite 0-100 fitness value, independent of acceptance likelihood.
pub(crate) fn match_score(
    normalized: &NormalizedProfile,
    institution: &Institution,
    standing: CredentialStanding,
) -> u8 {
    let mut score = academic_fit(normalized, institution) * 50.0;
    score += credential_fit(standing, normalized) * 25.0;
    score += (normalized.leadership_roles as f64 * 5.0).min(8.0);
    score += (normalized.total_activities as f64 * 1.5).min(7.0);
    score += (normalized.olympiad_count as f64 * 3.0).min(6.0);
    score += (normalized.award_count as f64 * 2.0).min(4.0);
    score.clamp(0.0, 100.0).round() as u8
}

/// Human-readable fit reasons in fixed priority order, capped at three.
pub(crate) fn fit_reasons(
    normalized: &NormalizedProfile,
    institution: &Institution,
    standing: CredentialStanding,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if normalized.board_percentage >= institution.thresholds.board_percentage_avg {
        reasons.push("Board standing exceeds the institution average".to_string());
    } else if normalized.board_percentage >= institution.thresholds.board_percentage_min {
        reasons.push("Board standing falls within the admitted range".to_string());
    }

    if let Some(kind) = institution.tier.credential() {
        if matches!(
            standing,
            CredentialStanding::MeetsAverage | CredentialStanding::MeetsCutoff
        ) {
            reasons.push(format!("{} is competitive for this tier", kind.label()));
        }
    }

    if normalized.olympiad_count >= 1 {
        reasons.push("Olympiad participation strengthens the application".to_string());
    }

    if normalized.leadership_roles >= 2 {
        reasons.push("Multiple leadership roles demonstrate initiative".to_string());
    }

    let programs = matching_programs(normalized, institution);
    if !programs.is_empty() {
        let interests: Vec<&str> = programs.iter().map(|m| m.interest).collect();
        reasons.push(format!("Strong programs in {}", interests.join(", ")));
    }

    reasons.truncate(3);
    reasons
}

/// Institution programs matching the profile's inferred interests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramMatch {
    pub interest: &'static str,
    pub programs: Vec<String>,
}

pub(crate) fn matching_programs(
    normalized: &NormalizedProfile,
    institution: &Institution,
) -> Vec<ProgramMatch> {
    normalized
        .interests
        .iter()
        .filter_map(|interest| {
            let label = interest.label();
            let programs: Vec<String> = institution
                .strengths
                .iter()
                .filter(|strength| strength.to_lowercase().contains(&label.to_lowercase()))
                .cloned()
                .collect();
            if programs.is_empty() {
                None
            } else {
                Some(ProgramMatch {
                    interest: label,
                    programs,
                })
            }
        })
        .collect()
}
