use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for submitted student profiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub String);

/// Full student record as collected by the intake layer. Every nested
/// collection may be absent; the engine treats absence as a zero
/// contribution, never as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub profile_id: ProfileId,
    pub name: String,
    /// Class level, 9 through 12.
    pub grade: u8,
    #[serde(default)]
    pub academic: AcademicRecord,
    #[serde(default)]
    pub activities: Vec<ActivityRecord>,
    #[serde(default)]
    pub character: CharacterProfile,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

/// Academic standing captured on either of two interchangeable scales.
/// Board percentage is the canonical one; CGPA converts via a fixed
/// multiplier during normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AcademicRecord {
    /// 0-10 scale.
    pub cgpa: Option<f64>,
    /// 0-100 scale.
    pub board_percentage: Option<f64>,
    pub board_type: Option<String>,
    #[serde(default)]
    pub historical_standing: Vec<StandingSnapshot>,
    #[serde(default)]
    pub courses: Vec<CourseRecord>,
    #[serde(default)]
    pub test_scores: TestScores,
}

/// Point-in-time academic standing for trend displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingSnapshot {
    pub recorded_on: NaiveDate,
    pub board_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub name: String,
    pub grade: String,
    pub rigor: CourseRigor,
}

/// Closed rigor tiers for course records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseRigor {
    ScienceStream,
    CommerceStream,
    ArtsStream,
    Elective,
}

/// Standardized test outcomes. Each sub-record is independently optional
/// and each field inside a sub-record is independently optional too.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestScores {
    pub jee_main: Option<PercentileResult>,
    pub jee_advanced: Option<RankResult>,
    pub neet: Option<PercentileResult>,
    pub bitsat: Option<ScoreResult>,
    pub cuet: Option<PercentileResult>,
    #[serde(default)]
    pub olympiads: Vec<OlympiadRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PercentileResult {
    pub percentile: Option<f64>,
    pub score: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankResult {
    pub rank: Option<u32>,
    pub score: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: Option<u32>,
}

/// Subject competition entry (olympiads and equivalents).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OlympiadRecord {
    pub subject: String,
    pub level: OlympiadLevel,
    pub rank: Option<u32>,
    #[serde(default)]
    pub qualified: bool,
}

/// Competition levels ordered from local to international.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OlympiadLevel {
    School,
    District,
    State,
    National,
    International,
}

impl OlympiadLevel {
    pub const fn label(self) -> &'static str {
        match self {
            OlympiadLevel::School => "school",
            OlympiadLevel::District => "district",
            OlympiadLevel::State => "state",
            OlympiadLevel::National => "national",
            OlympiadLevel::International => "international",
        }
    }
}

/// Extracurricular involvement entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub activity: String,
    pub role: String,
    /// Cumulative hours across the involvement.
    #[serde(default)]
    pub hours: u32,
    #[serde(default)]
    pub years_involved: f64,
    /// Free-text description of measurable outcomes.
    #[serde(default)]
    pub impact: String,
}

/// Third-party testimony about the student.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterProfile {
    #[serde(default)]
    pub teacher_observations: Vec<String>,
    #[serde(default)]
    pub peer_feedback: Vec<String>,
    #[serde(default)]
    pub traits: Vec<String>,
}

/// Dated accomplishment tagged with a closed type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub milestone_type: MilestoneType,
    pub achieved_on: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MilestoneType {
    Award,
    Certification,
    Project,
    Achievement,
    Competition,
    Other,
}

impl MilestoneType {
    pub const fn label(self) -> &'static str {
        match self {
            MilestoneType::Award => "award",
            MilestoneType::Certification => "certification",
            MilestoneType::Project => "project",
            MilestoneType::Achievement => "achievement",
            MilestoneType::Competition => "competition",
            MilestoneType::Other => "other",
        }
    }
}
