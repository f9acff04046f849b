//! Evaluates each institution award against the normalized profile,
//! producing a qualifies decision, a likelihood, and an estimated value.
//! Non-merit categories are treated as potentially eligible pending
//! verification, since the engine holds no income or category data.

use serde::{Deserialize, Serialize};

use crate::engine::catalog::{Award, AwardAmount, AwardCategory, AwardRule, Institution};
use crate::engine::normalizer::NormalizedProfile;

const LIKELIHOOD_CAP: u8 = 95;

/// A qualifying award with the profile-specific likelihood and value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardMatch {
    pub name: String,
    pub category: AwardCategory,
    /// Granted without separate application for this profile.
    pub automatic: bool,
    /// Chance of actually receiving the award, 0-100.
    pub likelihood: u8,
    /// Conservative estimate of the annual value in rupees.
    pub estimated_value: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct AwardOutcome {
    pub awards: Vec<AwardMatch>,
    /// Plain sum over qualifying awards; stacking is deliberately uncapped.
    pub estimated_aid: u64,
}

pub(crate) fn match_awards(
    normalized: &NormalizedProfile,
    institution: &Institution,
) -> AwardOutcome {
    let mut outcome = AwardOutcome::default();

    for award in &institution.awards {
        if !qualifies(award, normalized) {
            continue;
        }
        let automatic = award.automatic || topper_condition(award, normalized);
        let estimated_value = estimate_value(award, institution.tuition);
        outcome.estimated_aid += estimated_value;
        outcome.awards.push(AwardMatch {
            name: award.name.clone(),
            category: award.category,
            automatic,
            likelihood: likelihood(award, normalized, automatic),
            estimated_value,
        });
    }

    outcome
}

fn qualifies(award: &Award, normalized: &NormalizedProfile) -> bool {
    let standing = normalized.board_percentage;
    match award.rule {
        AwardRule::TopPercent(percent) => AwardRule::top_percent_threshold(percent)
            .map(|threshold| standing >= threshold)
            .unwrap_or(false),
        AwardRule::NamedScholar => normalized.achievement_count >= 2 && standing >= 90.0,
        AwardRule::BoardTopper => standing >= 98.0,
        AwardRule::OpenEligibility => true,
    }
}

fn topper_condition(award: &Award, normalized: &NormalizedProfile) -> bool {
    matches!(award.rule, AwardRule::BoardTopper) && normalized.board_percentage >= 98.0
}

fn likelihood(award: &Award, normalized: &NormalizedProfile, automatic: bool) -> u8 {
    if automatic {
        return LIKELIHOOD_CAP;
    }

    match award.category {
        AwardCategory::Merit => {
            let mut likelihood: f64 = 40.0;
            let standing = normalized.board_percentage;
            if standing >= 95.0 {
                likelihood += 35.0;
            } else if standing >= 90.0 {
                likelihood += 25.0;
            } else if standing >= 85.0 {
                likelihood += 15.0;
            }
            if normalized.olympiad_count >= 2 {
                likelihood += 15.0;
            } else if normalized.olympiad_count == 1 {
                likelihood += 8.0;
            }
            if normalized.leadership_roles >= 2 {
                likelihood += 5.0;
            }
            likelihood.min(f64::from(LIKELIHOOD_CAP)) as u8
        }
        AwardCategory::MeritCumMeans | AwardCategory::NeedBased => 60,
        AwardCategory::CategoryBased => 80,
        AwardCategory::StateBased => 40,
    }
}

/// Conservative value estimate: half of merit figures, two fifths of
/// need-dependent ones, and two fifths of tuition for full waivers.
fn estimate_value(award: &Award, tuition: u64) -> u64 {
    let merit_like = matches!(
        award.category,
        AwardCategory::Merit | AwardCategory::MeritCumMeans
    );
    match award.amount {
        AwardAmount::Fixed(amount) => {
            let fraction = if merit_like { 0.5 } else { 0.4 };
            (amount as f64 * fraction).round() as u64
        }
        AwardAmount::TuitionPercent(percent) => {
            (tuition as f64 * f64::from(percent) / 100.0 * 0.5).round() as u64
        }
        AwardAmount::FullWaiver => (tuition as f64 * 0.4).round() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::catalog::{AdmissionThresholds, InstitutionTier};
    use crate::engine::domain::{Milestone, MilestoneType, ProfileId, StudentProfile};
    use crate::engine::normalizer::NormalizedProfile;

    fn institution_with_awards(tuition: u64, awards: Vec<Award>) -> Institution {
        Institution {
            id: "t".to_string(),
            name: "Test Institute".to_string(),
            location: "Pune".to_string(),
            ownership: "Private".to_string(),
            tier: InstitutionTier::PrivateReputed,
            admission_rate: 30.0,
            thresholds: AdmissionThresholds {
                board_percentage_min: 60.0,
                board_percentage_avg: 85.0,
                credential: None,
            },
            tuition,
            hostel_fees: 50_000,
            awards,
            strengths: Vec::new(),
        }
    }

    fn normalized(board: f64, achievements: usize) -> NormalizedProfile {
        let mut profile = StudentProfile {
            profile_id: ProfileId("p".to_string()),
            name: "Test".to_string(),
            grade: 12,
            academic: Default::default(),
            activities: Vec::new(),
            character: Default::default(),
            milestones: Vec::new(),
        };
        profile.academic.board_percentage = Some(board);
        profile.milestones = (0..achievements)
            .map(|i| Milestone {
                title: format!("m-{i}"),
                milestone_type: MilestoneType::Achievement,
                achieved_on: None,
                description: String::new(),
            })
            .collect();
        NormalizedProfile::from_profile(&profile)
    }

    fn merit_award(rule: AwardRule, amount: AwardAmount) -> Award {
        Award {
            name: "Merit Scholarship".to_string(),
            category: AwardCategory::Merit,
            rule,
            amount,
            automatic: matches!(rule, AwardRule::BoardTopper),
        }
    }

    #[test]
    fn full_waiver_values_at_two_fifths_of_tuition() {
        let institution = institution_with_awards(
            500_000,
            vec![merit_award(AwardRule::BoardTopper, AwardAmount::FullWaiver)],
        );
        let outcome = match_awards(&normalized(99.0, 0), &institution);
        assert_eq!(outcome.awards.len(), 1);
        assert_eq!(outcome.awards[0].estimated_value, 200_000);
        assert_eq!(outcome.awards[0].likelihood, 95);
        assert!(outcome.awards[0].automatic);
    }

    #[test]
    fn top_percent_rule_uses_fixed_threshold_table() {
        let institution = institution_with_awards(
            100_000,
            vec![merit_award(
                AwardRule::TopPercent(5),
                AwardAmount::Fixed(60_000),
            )],
        );
        assert!(match_awards(&normalized(95.0, 0), &institution)
            .awards
            .first()
            .is_some());
        assert!(match_awards(&normalized(94.9, 0), &institution)
            .awards
            .is_empty());
    }

    #[test]
    fn named_scholar_needs_achievements_and_standing() {
        let institution = institution_with_awards(
            100_000,
            vec![merit_award(
                AwardRule::NamedScholar,
                AwardAmount::Fixed(80_000),
            )],
        );
        assert!(match_awards(&normalized(92.0, 2), &institution)
            .awards
            .first()
            .is_some());
        assert!(match_awards(&normalized(92.0, 1), &institution)
            .awards
            .is_empty());
        assert!(match_awards(&normalized(88.0, 3), &institution)
            .awards
            .is_empty());
    }

    #[test]
    fn estimated_aid_is_the_sum_over_qualifying_awards() {
        let institution = institution_with_awards(
            200_000,
            vec![
                merit_award(AwardRule::TopPercent(10), AwardAmount::Fixed(50_000)),
                Award {
                    name: "Freeship".to_string(),
                    category: AwardCategory::NeedBased,
                    rule: AwardRule::OpenEligibility,
                    amount: AwardAmount::Fixed(100_000),
                    automatic: false,
                },
            ],
        );
        let outcome = match_awards(&normalized(91.0, 0), &institution);
        assert_eq!(outcome.awards.len(), 2);
        let summed: u64 = outcome.awards.iter().map(|a| a.estimated_value).sum();
        assert_eq!(outcome.estimated_aid, summed);
        assert_eq!(outcome.estimated_aid, 25_000 + 40_000);
    }

    #[test]
    fn merit_likelihood_grows_with_standing_band() {
        let institution = institution_with_awards(
            100_000,
            vec![merit_award(
                AwardRule::TopPercent(20),
                AwardAmount::Fixed(10_000),
            )],
        );
        let modest = match_awards(&normalized(86.0, 0), &institution).awards[0].likelihood;
        let strong = match_awards(&normalized(96.0, 0), &institution).awards[0].likelihood;
        assert_eq!(modest, 55);
        assert_eq!(strong, 75);
    }
}
