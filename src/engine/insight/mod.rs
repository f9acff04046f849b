mod narrative;
mod subscores;

pub use narrative::{GrowthOpportunity, ImpactLevel, Priority, StrengthHighlight};
pub use subscores::SubScores;

use serde::{Deserialize, Serialize};

use super::domain::{ProfileId, StudentProfile};
use super::normalizer::NormalizedProfile;

/// Composite weights for the institution-independent strength score.
const ACADEMIC_WEIGHT: f64 = 0.40;
const ACTIVITY_WEIGHT: f64 = 0.25;
const CHARACTER_WEIGHT: f64 = 0.20;
const ACHIEVEMENT_WEIGHT: f64 = 0.15;

/// Institution-independent evaluation of a single profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "'de: 'static"))]
pub struct ProfileInsight {
    pub profile_id: ProfileId,
    /// Composite strength, 0-100.
    pub strength_score: u8,
    pub sub_scores: SubScores,
    pub strengths: Vec<StrengthHighlight>,
    pub growth_opportunities: Vec<GrowthOpportunity>,
}

/// Derives the composite strength score and the qualitative highlights
/// from one profile. Pure; absent collections contribute zero.
pub fn evaluate_profile(profile: &StudentProfile) -> ProfileInsight {
    let normalized = NormalizedProfile::from_profile(profile);
    let sub_scores = SubScores::compute(profile, &normalized);

    let strength_score = (f64::from(sub_scores.academic) * ACADEMIC_WEIGHT
        + f64::from(sub_scores.activity) * ACTIVITY_WEIGHT
        + f64::from(sub_scores.character) * CHARACTER_WEIGHT
        + f64::from(sub_scores.achievement) * ACHIEVEMENT_WEIGHT)
        .round()
        .clamp(0.0, 100.0) as u8;

    ProfileInsight {
        profile_id: profile.profile_id.clone(),
        strength_score,
        sub_scores,
        strengths: narrative::identify_strengths(profile, &normalized),
        growth_opportunities: narrative::identify_growth_opportunities(profile, &normalized),
    }
}
