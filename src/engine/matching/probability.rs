//! Admission-probability estimate, separate from the match score. Starts
//! from the institution's base acceptance rate and layers tier-specific
//! credential adjustments on top, clamped so the output is never a
//! certainty in either direction.

use crate::engine::catalog::{Institution, InstitutionTier};
use crate::engine::matching::fit::CredentialStanding;
use crate::engine::normalizer::NormalizedProfile;

pub(crate) const PROBABILITY_FLOOR: u8 = 5;
pub(crate) const PROBABILITY_CEILING: u8 = 95;

pub(crate) fn admission_probability(
    normalized: &NormalizedProfile,
    institution: &Institution,
    standing: CredentialStanding,
) -> u8 {
    let mut probability = 100.0 - institution.admission_rate * 2.0;

    // Selective tiers are structurally gated on their entrance exam: no
    // credential forces the running value to a fixed floor before the
    // remaining adjustments apply.
    match institution.tier {
        InstitutionTier::Iit => {
            probability = match standing {
                CredentialStanding::Missing => 5.0,
                CredentialStanding::MeetsAverage => probability + 25.0,
                CredentialStanding::MeetsCutoff => probability + 10.0,
                CredentialStanding::BelowCutoff => probability - 30.0,
                CredentialStanding::NotRequired => probability,
            };
        }
        InstitutionTier::Nit => {
            probability = match standing {
                CredentialStanding::Missing => 10.0,
                CredentialStanding::MeetsAverage => probability + 20.0,
                CredentialStanding::MeetsCutoff => probability + 10.0,
                CredentialStanding::BelowCutoff => probability - 25.0,
                CredentialStanding::NotRequired => probability,
            };
        }
        InstitutionTier::MedicalPremier | InstitutionTier::MedicalElite => {
            probability = match standing {
                CredentialStanding::Missing => 5.0,
                CredentialStanding::MeetsAverage => probability + 25.0,
                CredentialStanding::MeetsCutoff => probability + 10.0,
                CredentialStanding::BelowCutoff => probability - 35.0,
                CredentialStanding::NotRequired => probability,
            };
        }
        // BITSAT and CUET tiers admit via board-standing proxies, so an
        // absent credential is not structurally disqualifying.
        InstitutionTier::PrivateElite
        | InstitutionTier::CentralUniversity
        | InstitutionTier::StatePremier
        | InstitutionTier::PrivateReputed => {}
    }

    let board = normalized.board_percentage;
    if board >= institution.thresholds.board_percentage_avg {
        probability += 10.0;
    } else if board >= institution.thresholds.board_percentage_min {
        probability += 5.0;
    } else {
        probability -= 15.0;
    }

    if normalized.olympiad_count >= 2 {
        probability += 8.0;
    } else if normalized.olympiad_count == 1 {
        probability += 4.0;
    }

    if normalized.leadership_roles >= 2 {
        probability += 5.0;
    }

    probability
        .clamp(f64::from(PROBABILITY_FLOOR), f64::from(PROBABILITY_CEILING))
        .round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::catalog::{
        AdmissionThresholds, CredentialThresholds, Institution, InstitutionTier,
    };
    use crate::engine::domain::{ProfileId, StudentProfile};

    fn iit() -> Institution {
        Institution {
            id: "iit".to_string(),
            name: "IIT Test".to_string(),
            location: "Mumbai".to_string(),
            ownership: "Government".to_string(),
            tier: InstitutionTier::Iit,
            admission_rate: 1.5,
            thresholds: AdmissionThresholds {
                board_percentage_min: 75.0,
                board_percentage_avg: 95.0,
                credential: Some(CredentialThresholds {
                    average: 150.0,
                    cutoff: 500.0,
                }),
            },
            tuition: 225_000,
            hostel_fees: 35_000,
            awards: Vec::new(),
            strengths: Vec::new(),
        }
    }

    fn normalized_with_board(board: f64) -> NormalizedProfile {
        let profile = StudentProfile {
            profile_id: ProfileId("p".to_string()),
            name: "Test".to_string(),
            grade: 12,
            academic: crate::engine::domain::AcademicRecord {
                board_percentage: Some(board),
                ..Default::default()
            },
            activities: Vec::new(),
            character: Default::default(),
            milestones: Vec::new(),
        };
        NormalizedProfile::from_profile(&profile)
    }

    #[test]
    fn missing_credential_forces_floor_before_flat_adjustments() {
        let normalized = normalized_with_board(96.0);
        let probability =
            admission_probability(&normalized, &iit(), CredentialStanding::Missing);
        // Forced to 5, then +10 for standing above the average threshold.
        assert_eq!(probability, 15);
    }

    #[test]
    fn output_is_never_certain_in_either_direction() {
        let weak = normalized_with_board(0.0);
        let strong = normalized_with_board(100.0);
        let low = admission_probability(&weak, &iit(), CredentialStanding::BelowCutoff);
        let mut open = iit();
        open.tier = InstitutionTier::PrivateReputed;
        open.admission_rate = 1.0;
        open.thresholds.credential = None;
        let high = admission_probability(&strong, &open, CredentialStanding::NotRequired);
        assert!(low >= PROBABILITY_FLOOR);
        assert_eq!(high, PROBABILITY_CEILING);
    }

    #[test]
    fn meeting_the_average_beats_meeting_the_cutoff() {
        // A base rate low enough that the ceiling clamp stays out of play.
        let mut institution = iit();
        institution.admission_rate = 40.0;
        let normalized = normalized_with_board(96.0);
        let at_average =
            admission_probability(&normalized, &institution, CredentialStanding::MeetsAverage);
        let at_cutoff =
            admission_probability(&normalized, &institution, CredentialStanding::MeetsCutoff);
        assert!(at_average > at_cutoff);
    }
}
