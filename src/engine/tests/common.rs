use crate::engine::catalog::{seed_catalog, Catalog};
use crate::engine::domain::{
    ActivityRecord, Milestone, MilestoneType, OlympiadLevel, OlympiadRecord, PercentileResult,
    ProfileId, RankResult, StudentProfile,
};

pub(super) fn catalog() -> Catalog {
    seed_catalog().expect("seed catalog is valid")
}

pub(super) fn empty_profile() -> StudentProfile {
    StudentProfile {
        profile_id: ProfileId("empty".to_string()),
        name: "Blank Profile".to_string(),
        grade: 11,
        academic: Default::default(),
        activities: Vec::new(),
        character: Default::default(),
        milestones: Vec::new(),
    }
}

/// Strong engineering-track applicant: high board standing, competitive
/// JEE results, leadership, and a few milestones.
pub(super) fn strong_profile() -> StudentProfile {
    let mut profile = empty_profile();
    profile.profile_id = ProfileId("strong".to_string());
    profile.name = "Asha Rao".to_string();
    profile.grade = 12;
    profile.academic.board_percentage = Some(96.0);
    profile.academic.test_scores.jee_main = Some(PercentileResult {
        percentile: Some(99.3),
        score: None,
    });
    profile.academic.test_scores.jee_advanced = Some(RankResult {
        rank: Some(400),
        score: None,
    });
    profile.academic.test_scores.olympiads = vec![OlympiadRecord {
        subject: "Physics".to_string(),
        level: OlympiadLevel::National,
        rank: Some(14),
        qualified: true,
    }];
    profile.activities = vec![
        ActivityRecord {
            activity: "Robotics Club".to_string(),
            role: "President".to_string(),
            hours: 300,
            years_involved: 3.0,
            impact: "led a team of 12 to the national finals".to_string(),
        },
        ActivityRecord {
            activity: "NSS Volunteering".to_string(),
            role: "Member".to_string(),
            hours: 120,
            years_involved: 2.0,
            impact: "taught 40 children weekly".to_string(),
        },
    ];
    profile.milestones = vec![
        Milestone {
            title: "State Science Fair Winner".to_string(),
            milestone_type: MilestoneType::Award,
            achieved_on: None,
            description: String::new(),
        },
        Milestone {
            title: "NSEP Qualification".to_string(),
            milestone_type: MilestoneType::Achievement,
            achieved_on: None,
            description: String::new(),
        },
        Milestone {
            title: "INSPIRE Camp Selection".to_string(),
            milestone_type: MilestoneType::Achievement,
            achieved_on: None,
            description: String::new(),
        },
    ];
    profile
}

/// Applicant with solid board results but no entrance exams taken yet.
pub(super) fn board_only_profile() -> StudentProfile {
    let mut profile = empty_profile();
    profile.profile_id = ProfileId("board-only".to_string());
    profile.name = "Kiran Patel".to_string();
    profile.grade = 12;
    profile.academic.board_percentage = Some(88.0);
    profile.activities = vec![ActivityRecord {
        activity: "Drama Society".to_string(),
        role: "Member".to_string(),
        hours: 80,
        years_involved: 1.5,
        impact: String::new(),
    }];
    profile
}
