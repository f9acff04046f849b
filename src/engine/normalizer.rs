//! Flattens a partially-populated [`StudentProfile`] into the numeric fields
//! the scoring formulas consume. Missing data degrades to zero or `None`;
//! this module never fails.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::catalog::CredentialKind;
use super::domain::{MilestoneType, StudentProfile};

/// Fixed multiplier converting the 0-10 CGPA scale to an approximate
/// board percentage.
pub const CGPA_TO_PERCENTAGE: f64 = 9.5;

const LEADERSHIP_KEYWORDS: &[&str] = &["captain", "president", "founder", "lead", "secretary"];

const SERVICE_KEYWORDS: &[&str] = &["volunteer", "nss", "ngo", "community", "service"];

const STEM_KEYWORDS: &[&str] = &["robot", "coding", "tech", "science", "olympiad"];
const ARTS_KEYWORDS: &[&str] = &["art", "music", "theater", "dance", "drama"];
const BUSINESS_KEYWORDS: &[&str] = &["business", "entrepreneur", "commerce"];
const MEDICINE_KEYWORDS: &[&str] = &["hospital", "medical", "health"];

const ENGINEERING_COURSES: &[&str] = &["physics", "mathematics", "computer"];
const MEDICINE_COURSES: &[&str] = &["biology", "chemistry"];
const COMMERCE_COURSES: &[&str] = &["economics", "accountancy", "business"];

/// Interest domains inferred from activity and course names. Multiple
/// keyword hits collapse to one tag per domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InterestDomain {
    Stem,
    Engineering,
    Medicine,
    Commerce,
    Business,
    Arts,
}

impl InterestDomain {
    pub const fn label(self) -> &'static str {
        match self {
            InterestDomain::Stem => "STEM",
            InterestDomain::Engineering => "Engineering",
            InterestDomain::Medicine => "Medicine",
            InterestDomain::Commerce => "Commerce",
            InterestDomain::Business => "Business",
            InterestDomain::Arts => "Arts",
        }
    }
}

/// Flat metric set extracted once per profile and shared by every
/// downstream calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedProfile {
    /// Primary standing on the 0-100 scale.
    pub board_percentage: f64,
    pub jee_main_percentile: Option<f64>,
    pub jee_advanced_rank: Option<f64>,
    pub neet_percentile: Option<f64>,
    pub bitsat_score: Option<f64>,
    pub cuet_percentile: Option<f64>,
    pub olympiad_count: usize,
    pub leadership_roles: usize,
    pub total_activities: usize,
    pub community_service: usize,
    pub award_count: usize,
    pub achievement_count: usize,
    pub project_count: usize,
    pub certification_count: usize,
    pub interests: Vec<InterestDomain>,
    pub grade: u8,
}

impl NormalizedProfile {
    pub fn from_profile(profile: &StudentProfile) -> Self {
        let academic = &profile.academic;
        let tests = &academic.test_scores;

        let board_percentage = academic
            .board_percentage
            .or_else(|| academic.cgpa.map(|cgpa| cgpa * CGPA_TO_PERCENTAGE))
            .unwrap_or(0.0);

        let leadership_roles = profile
            .activities
            .iter()
            .filter(|activity| contains_any(&activity.role, LEADERSHIP_KEYWORDS))
            .count();

        let community_service = profile
            .activities
            .iter()
            .filter(|activity| {
                contains_any(&activity.activity, SERVICE_KEYWORDS)
                    || contains_any(&activity.impact, SERVICE_KEYWORDS)
            })
            .count();

        Self {
            board_percentage,
            jee_main_percentile: tests.jee_main.as_ref().and_then(|t| t.percentile),
            jee_advanced_rank: tests
                .jee_advanced
                .as_ref()
                .and_then(|t| t.rank)
                .map(f64::from),
            neet_percentile: tests.neet.as_ref().and_then(|t| t.percentile),
            bitsat_score: tests.bitsat.as_ref().and_then(|t| t.score).map(f64::from),
            cuet_percentile: tests.cuet.as_ref().and_then(|t| t.percentile),
            olympiad_count: tests.olympiads.len(),
            leadership_roles,
            total_activities: profile.activities.len(),
            community_service,
            award_count: count_milestones(profile, MilestoneType::Award),
            achievement_count: count_milestones(profile, MilestoneType::Achievement),
            project_count: count_milestones(profile, MilestoneType::Project),
            certification_count: count_milestones(profile, MilestoneType::Certification),
            interests: extract_interests(profile),
            grade: profile.grade,
        }
    }

    /// Value of the credential a tier admits on, where present.
    pub fn credential_value(&self, kind: CredentialKind) -> Option<f64> {
        match kind {
            CredentialKind::JeeAdvancedRank => self.jee_advanced_rank,
            CredentialKind::JeeMainPercentile => self.jee_main_percentile,
            CredentialKind::BitsatScore => self.bitsat_score,
            CredentialKind::NeetPercentile => self.neet_percentile,
            CredentialKind::CuetPercentile => self.cuet_percentile,
        }
    }
}

fn count_milestones(profile: &StudentProfile, milestone_type: MilestoneType) -> usize {
    profile
        .milestones
        .iter()
        .filter(|milestone| milestone.milestone_type == milestone_type)
        .count()
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    let lowered = haystack.to_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

fn extract_interests(profile: &StudentProfile) -> Vec<InterestDomain> {
    let mut interests = BTreeSet::new();

    for activity in &profile.activities {
        if contains_any(&activity.activity, STEM_KEYWORDS) {
            interests.insert(InterestDomain::Stem);
        }
        if contains_any(&activity.activity, ARTS_KEYWORDS) {
            interests.insert(InterestDomain::Arts);
        }
        if contains_any(&activity.activity, BUSINESS_KEYWORDS) {
            interests.insert(InterestDomain::Business);
        }
        if contains_any(&activity.activity, MEDICINE_KEYWORDS) {
            interests.insert(InterestDomain::Medicine);
        }
    }

    for course in &profile.academic.courses {
        if contains_any(&course.name, ENGINEERING_COURSES) {
            interests.insert(InterestDomain::Engineering);
        }
        if contains_any(&course.name, MEDICINE_COURSES) {
            interests.insert(InterestDomain::Medicine);
        }
        if contains_any(&course.name, COMMERCE_COURSES) {
            interests.insert(InterestDomain::Commerce);
        }
    }

    interests.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::domain::{
        ActivityRecord, CourseRecord, CourseRigor, PercentileResult, ProfileId,
    };

    fn empty_profile() -> StudentProfile {
        StudentProfile {
            profile_id: ProfileId("p-1".to_string()),
            name: "Asha Rao".to_string(),
            grade: 12,
            academic: Default::default(),
            activities: Vec::new(),
            character: Default::default(),
            milestones: Vec::new(),
        }
    }

    #[test]
    fn empty_profile_normalizes_to_zeroes() {
        let normalized = NormalizedProfile::from_profile(&empty_profile());
        assert_eq!(normalized.board_percentage, 0.0);
        assert_eq!(normalized.jee_main_percentile, None);
        assert_eq!(normalized.total_activities, 0);
        assert!(normalized.interests.is_empty());
    }

    #[test]
    fn cgpa_converts_when_board_percentage_absent() {
        let mut profile = empty_profile();
        profile.academic.cgpa = Some(9.2);
        let normalized = NormalizedProfile::from_profile(&profile);
        assert!((normalized.board_percentage - 87.4).abs() < 1e-9);
    }

    #[test]
    fn board_percentage_preferred_over_cgpa() {
        let mut profile = empty_profile();
        profile.academic.cgpa = Some(6.0);
        profile.academic.board_percentage = Some(91.0);
        let normalized = NormalizedProfile::from_profile(&profile);
        assert_eq!(normalized.board_percentage, 91.0);
    }

    #[test]
    fn counts_leadership_and_service_roles() {
        let mut profile = empty_profile();
        profile.activities = vec![
            ActivityRecord {
                activity: "Robotics Club".to_string(),
                role: "Team Captain".to_string(),
                hours: 200,
                years_involved: 2.0,
                impact: "won state round".to_string(),
            },
            ActivityRecord {
                activity: "NSS Unit".to_string(),
                role: "Member".to_string(),
                hours: 120,
                years_involved: 1.0,
                impact: "taught 40 children".to_string(),
            },
        ];
        let normalized = NormalizedProfile::from_profile(&profile);
        assert_eq!(normalized.leadership_roles, 1);
        assert_eq!(normalized.community_service, 1);
        assert_eq!(normalized.total_activities, 2);
    }

    #[test]
    fn interest_hits_collapse_to_one_tag_per_domain() {
        let mut profile = empty_profile();
        profile.activities = vec![
            ActivityRecord {
                activity: "Robotics Club".to_string(),
                role: "Member".to_string(),
                hours: 0,
                years_involved: 1.0,
                impact: String::new(),
            },
            ActivityRecord {
                activity: "Science Fair".to_string(),
                role: "Member".to_string(),
                hours: 0,
                years_involved: 1.0,
                impact: String::new(),
            },
        ];
        profile.academic.courses = vec![CourseRecord {
            name: "Physics".to_string(),
            grade: "A".to_string(),
            rigor: CourseRigor::ScienceStream,
        }];
        let normalized = NormalizedProfile::from_profile(&profile);
        assert_eq!(
            normalized.interests,
            vec![InterestDomain::Stem, InterestDomain::Engineering]
        );
    }

    #[test]
    fn partial_test_records_keep_independent_fields() {
        let mut profile = empty_profile();
        profile.academic.test_scores.jee_main = Some(PercentileResult {
            percentile: Some(98.6),
            score: None,
        });
        let normalized = NormalizedProfile::from_profile(&profile);
        assert_eq!(normalized.jee_main_percentile, Some(98.6));
        assert_eq!(normalized.jee_advanced_rank, None);
    }
}
