//! Independent sub-score formulas, each clamped to [0, 100]. Hard caps on
//! every term keep a single repeated entry from dominating the composite.

use serde::{Deserialize, Serialize};

use crate::engine::domain::{CourseRigor, OlympiadLevel, StudentProfile};
use crate::engine::normalizer::NormalizedProfile;

/// The four sub-scores feeding the composite profile strength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub academic: u8,
    pub activity: u8,
    pub character: u8,
    pub achievement: u8,
}

impl SubScores {
    pub fn compute(profile: &StudentProfile, normalized: &NormalizedProfile) -> Self {
        Self {
            academic: academic_score(profile, normalized),
            activity: activity_score(profile),
            character: character_score(profile),
            achievement: achievement_score(normalized),
        }
    }
}

pub(crate) fn academic_score(profile: &StudentProfile, normalized: &NormalizedProfile) -> u8 {
    let mut score = (normalized.board_percentage / 100.0) * 35.0;

    if let Some(percentile) = normalized.jee_main_percentile {
        score += (percentile / 100.0) * 20.0;
    }
    if let Some(rank) = normalized.jee_advanced_rank {
        score += (15.0 - rank / 500.0).clamp(0.0, 15.0);
    }
    if let Some(percentile) = normalized.neet_percentile {
        score += (percentile / 100.0) * 20.0;
    }

    let science_courses = profile
        .academic
        .courses
        .iter()
        .filter(|course| course.rigor == CourseRigor::ScienceStream)
        .count();
    score += (science_courses as f64 * 2.0).min(10.0);

    let olympiad_points: f64 = profile
        .academic
        .test_scores
        .olympiads
        .iter()
        .map(|olympiad| level_points(olympiad.level))
        .sum();
    score += olympiad_points.min(15.0);

    clamp_score(score)
}

fn level_points(level: OlympiadLevel) -> f64 {
    match level {
        OlympiadLevel::International => 6.0,
        OlympiadLevel::National => 5.0,
        OlympiadLevel::State => 3.0,
        OlympiadLevel::District | OlympiadLevel::School => 1.0,
    }
}

pub(crate) fn activity_score(profile: &StudentProfile) -> u8 {
    if profile.activities.is_empty() {
        return 0;
    }

    let total_years: f64 = profile
        .activities
        .iter()
        .map(|activity| activity.years_involved)
        .sum();
    let avg_years = total_years / profile.activities.len() as f64;
    let mut score = (avg_years * 7.5).min(30.0);

    let leadership = profile
        .activities
        .iter()
        .filter(|activity| is_leadership_role(&activity.role))
        .count();
    score += (leadership as f64 * 12.0).min(35.0);

    let quantified = profile
        .activities
        .iter()
        .filter(|activity| has_quantified_impact(&activity.impact))
        .count();
    score += (quantified as f64 * 11.0).min(35.0);

    clamp_score(score)
}

fn is_leadership_role(role: &str) -> bool {
    let lowered = role.to_lowercase();
    ["captain", "president", "founder", "lead", "secretary"]
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

/// A currency marker or any numeral counts as a quantified outcome; the
/// "N+" form is a numeral and needs no separate pattern.
pub(crate) fn has_quantified_impact(impact: &str) -> bool {
    impact.contains('₹') || impact.chars().any(|c| c.is_ascii_digit())
}

pub(crate) fn character_score(profile: &StudentProfile) -> u8 {
    let character = &profile.character;
    let score = (character.teacher_observations.len() as f64 * 20.0).min(40.0)
        + (character.peer_feedback.len() as f64 * 15.0).min(30.0)
        + (character.traits.len() as f64 * 6.0).min(30.0);
    clamp_score(score)
}

pub(crate) fn achievement_score(normalized: &NormalizedProfile) -> u8 {
    let score = (normalized.award_count as f64 * 25.0).min(50.0)
        + (normalized.project_count as f64 * 20.0).min(30.0)
        + (normalized.certification_count as f64 * 15.0).min(20.0);
    clamp_score(score)
}

fn clamp_score(score: f64) -> u8 {
    score.clamp(0.0, 100.0).round() as u8
}
