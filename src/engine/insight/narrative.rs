//! Qualitative strengths and growth opportunities derived from the same
//! normalized metrics the numeric scores use.

use serde::{Deserialize, Serialize};

use super::subscores::has_quantified_impact;
use crate::engine::domain::{CourseRigor, OlympiadLevel, StudentProfile};
use crate::engine::normalizer::NormalizedProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthHighlight {
    pub category: &'static str,
    pub detail: String,
    pub impact: ImpactLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthOpportunity {
    pub category: &'static str,
    pub suggestion: String,
    pub priority: Priority,
}

pub(crate) fn identify_strengths(
    profile: &StudentProfile,
    normalized: &NormalizedProfile,
) -> Vec<StrengthHighlight> {
    let mut strengths = Vec::new();

    if normalized.board_percentage >= 90.0 {
        strengths.push(StrengthHighlight {
            category: "Academic Excellence",
            detail: format!(
                "Standing of {:.1}% places the profile well above typical admission averages",
                normalized.board_percentage
            ),
            impact: ImpactLevel::High,
        });
    }

    let strong_exams = normalized.jee_main_percentile.is_some_and(|p| p >= 98.0)
        || normalized.jee_advanced_rank.is_some_and(|r| r <= 2000.0)
        || normalized.neet_percentile.is_some_and(|p| p >= 99.0);
    if strong_exams {
        strengths.push(StrengthHighlight {
            category: "Competitive Exam Performance",
            detail: "Entrance exam results rank among top performers nationally".to_string(),
            impact: ImpactLevel::High,
        });
    }

    let national_olympiads = profile
        .academic
        .test_scores
        .olympiads
        .iter()
        .filter(|olympiad| olympiad.level >= OlympiadLevel::National)
        .count();
    if national_olympiads >= 1 {
        strengths.push(StrengthHighlight {
            category: "Olympiad Excellence",
            detail: "National-level olympiad qualification demonstrates deep subject expertise"
                .to_string(),
            impact: ImpactLevel::High,
        });
    }

    if normalized.leadership_roles >= 2 {
        strengths.push(StrengthHighlight {
            category: "Leadership",
            detail: format!(
                "{} leadership positions show sustained initiative",
                normalized.leadership_roles
            ),
            impact: ImpactLevel::High,
        });
    }

    let long_term = profile
        .activities
        .iter()
        .filter(|activity| activity.years_involved >= 3.0)
        .count();
    if long_term >= 2 {
        strengths.push(StrengthHighlight {
            category: "Commitment",
            detail: format!("{long_term} activities with 3+ years of involvement"),
            impact: ImpactLevel::Medium,
        });
    }

    let quantified = profile
        .activities
        .iter()
        .filter(|activity| has_quantified_impact(&activity.impact))
        .count();
    if quantified >= 2 {
        strengths.push(StrengthHighlight {
            category: "Measurable Impact",
            detail: "Multiple activities report quantified, real-world outcomes".to_string(),
            impact: ImpactLevel::High,
        });
    }

    let science_courses = profile
        .academic
        .courses
        .iter()
        .filter(|course| course.rigor == CourseRigor::ScienceStream)
        .count();
    if science_courses >= 3 {
        strengths.push(StrengthHighlight {
            category: "Academic Rigor",
            detail: format!("{science_courses} science-stream subjects carried concurrently"),
            impact: ImpactLevel::Medium,
        });
    }

    strengths
}

pub(crate) fn identify_growth_opportunities(
    profile: &StudentProfile,
    normalized: &NormalizedProfile,
) -> Vec<GrowthOpportunity> {
    let mut opportunities = Vec::new();

    if normalized.board_percentage < 85.0 {
        opportunities.push(GrowthOpportunity {
            category: "Academic Performance",
            suggestion: "Raise board standing toward 90%+ to stay competitive for selective tiers"
                .to_string(),
            priority: Priority::High,
        });
    }

    if normalized.jee_main_percentile.is_none() && normalized.neet_percentile.is_none() {
        opportunities.push(GrowthOpportunity {
            category: "Entrance Exam Preparation",
            suggestion: "Begin structured JEE/NEET preparation; scores gate the selective tiers"
                .to_string(),
            priority: Priority::High,
        });
    }

    if normalized.olympiad_count == 0 {
        opportunities.push(GrowthOpportunity {
            category: "Olympiad Participation",
            suggestion: "Attempt subject olympiads; qualification adds weight across tiers"
                .to_string(),
            priority: Priority::Medium,
        });
    }

    if normalized.leadership_roles == 0 {
        opportunities.push(GrowthOpportunity {
            category: "Leadership Development",
            suggestion: "Take a named leadership role in an existing club or start an initiative"
                .to_string(),
            priority: Priority::High,
        });
    }

    if normalized.community_service == 0 {
        opportunities.push(GrowthOpportunity {
            category: "Community Service",
            suggestion: "Join NSS/NCC or a local NGO; service is weighed in interviews and awards"
                .to_string(),
            priority: Priority::Medium,
        });
    }

    if profile.activities.len() > 5 {
        let shallow = profile
            .activities
            .iter()
            .filter(|activity| activity.years_involved < 2.0)
            .count();
        if shallow >= 3 {
            opportunities.push(GrowthOpportunity {
                category: "Activity Focus",
                suggestion: "Narrow to 3-4 core activities; depth reads better than breadth"
                    .to_string(),
                priority: Priority::Medium,
            });
        }
    }

    if normalized.award_count < 2 {
        opportunities.push(GrowthOpportunity {
            category: "Recognition",
            suggestion: "Enter district or state competitions to convert effort into awards"
                .to_string(),
            priority: Priority::Medium,
        });
    }

    if profile.character.teacher_observations.len() < 2 {
        opportunities.push(GrowthOpportunity {
            category: "Recommendation Letters",
            suggestion: "Build relationships with subject teachers for detailed recommendations"
                .to_string(),
            priority: Priority::Medium,
        });
    }

    opportunities
}
