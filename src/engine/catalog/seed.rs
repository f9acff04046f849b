//! Built-in demonstration catalog covering every tier. Mirrors the published
//! admission data for a representative slice of institutions so the CLI and
//! the test suite can run without an external catalog file.

use super::{
    AdmissionThresholds, Award, AwardAmount, AwardCategory, AwardRule, Catalog, CatalogError,
    CredentialThresholds, Institution, InstitutionTier,
};

pub fn seed_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(vec![
        Institution {
            id: "iit-bombay".to_string(),
            name: "IIT Bombay".to_string(),
            location: "Mumbai, Maharashtra".to_string(),
            ownership: "Government (Autonomous)".to_string(),
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
            awards: vec![
                Award {
                    name: "Merit-cum-Means Scholarship".to_string(),
                    category: AwardCategory::MeritCumMeans,
                    rule: AwardRule::OpenEligibility,
                    amount: AwardAmount::FullWaiver,
                    automatic: false,
                },
                Award {
                    name: "Institute Free Studentship".to_string(),
                    category: AwardCategory::NeedBased,
                    rule: AwardRule::OpenEligibility,
                    amount: AwardAmount::Fixed(225_000),
                    automatic: false,
                },
                Award {
                    name: "INSPIRE Scholarship".to_string(),
                    category: AwardCategory::Merit,
                    rule: AwardRule::NamedScholar,
                    amount: AwardAmount::Fixed(80_000),
                    automatic: false,
                },
            ],
            strengths: vec![
                "Computer Science".to_string(),
                "Electrical Engineering".to_string(),
                "Research".to_string(),
            ],
        },
        Institution {
            id: "nit-trichy".to_string(),
            name: "NIT Tiruchirappalli".to_string(),
            location: "Tiruchirappalli, Tamil Nadu".to_string(),
            ownership: "Government".to_string(),
            tier: InstitutionTier::Nit,
            admission_rate: 3.0,
            thresholds: AdmissionThresholds {
                board_percentage_min: 75.0,
                board_percentage_avg: 92.0,
                credential: Some(CredentialThresholds {
                    average: 99.2,
                    cutoff: 97.5,
                }),
            },
            tuition: 160_000,
            hostel_fees: 30_000,
            awards: vec![
                Award {
                    name: "Merit Scholarship".to_string(),
                    category: AwardCategory::Merit,
                    rule: AwardRule::TopPercent(5),
                    amount: AwardAmount::Fixed(60_000),
                    automatic: false,
                },
                Award {
                    name: "SC/ST Fee Waiver".to_string(),
                    category: AwardCategory::CategoryBased,
                    rule: AwardRule::OpenEligibility,
                    amount: AwardAmount::FullWaiver,
                    automatic: false,
                },
            ],
            strengths: vec![
                "Mechanical Engineering".to_string(),
                "Computer Science".to_string(),
            ],
        },
        Institution {
            id: "bits-pilani".to_string(),
            name: "BITS Pilani".to_string(),
            location: "Pilani, Rajasthan".to_string(),
            ownership: "Private (Deemed)".to_string(),
            tier: InstitutionTier::PrivateElite,
            admission_rate: 8.0,
            thresholds: AdmissionThresholds {
                board_percentage_min: 75.0,
                board_percentage_avg: 90.0,
                credential: Some(CredentialThresholds {
                    average: 370.0,
                    cutoff: 300.0,
                }),
            },
            tuition: 520_000,
            hostel_fees: 60_000,
            awards: vec![
                Award {
                    name: "Board Topper Waiver".to_string(),
                    category: AwardCategory::Merit,
                    rule: AwardRule::BoardTopper,
                    amount: AwardAmount::FullWaiver,
                    automatic: true,
                },
                Award {
                    name: "Merit Scholarship".to_string(),
                    category: AwardCategory::Merit,
                    rule: AwardRule::TopPercent(1),
                    amount: AwardAmount::TuitionPercent(40),
                    automatic: false,
                },
            ],
            strengths: vec![
                "Computer Science".to_string(),
                "Electronics".to_string(),
                "Business".to_string(),
            ],
        },
        Institution {
            id: "aiims-delhi".to_string(),
            name: "AIIMS Delhi".to_string(),
            location: "New Delhi, Delhi".to_string(),
            ownership: "Government (Autonomous)".to_string(),
            tier: InstitutionTier::MedicalPremier,
            admission_rate: 0.5,
            thresholds: AdmissionThresholds {
                board_percentage_min: 60.0,
                board_percentage_avg: 90.0,
                credential: Some(CredentialThresholds {
                    average: 99.9,
                    cutoff: 99.5,
                }),
            },
            tuition: 6_000,
            hostel_fees: 10_000,
            awards: vec![Award {
                name: "Central Sector Scholarship".to_string(),
                category: AwardCategory::Merit,
                rule: AwardRule::TopPercent(20),
                amount: AwardAmount::Fixed(20_000),
                automatic: false,
            }],
            strengths: vec!["Medicine".to_string(), "Research".to_string()],
        },
        Institution {
            id: "cmc-vellore".to_string(),
            name: "CMC Vellore".to_string(),
            location: "Vellore, Tamil Nadu".to_string(),
            ownership: "Private (Minority)".to_string(),
            tier: InstitutionTier::MedicalElite,
            admission_rate: 1.0,
            thresholds: AdmissionThresholds {
                board_percentage_min: 60.0,
                board_percentage_avg: 88.0,
                credential: Some(CredentialThresholds {
                    average: 99.5,
                    cutoff: 98.0,
                }),
            },
            tuition: 48_000,
            hostel_fees: 25_000,
            awards: vec![Award {
                name: "Means Scholarship".to_string(),
                category: AwardCategory::NeedBased,
                rule: AwardRule::OpenEligibility,
                amount: AwardAmount::TuitionPercent(75),
                automatic: false,
            }],
            strengths: vec!["Medicine".to_string(), "Nursing".to_string()],
        },
        Institution {
            id: "du-delhi".to_string(),
            name: "University of Delhi".to_string(),
            location: "New Delhi, Delhi".to_string(),
            ownership: "Government (Central)".to_string(),
            tier: InstitutionTier::CentralUniversity,
            admission_rate: 12.0,
            thresholds: AdmissionThresholds {
                board_percentage_min: 85.0,
                board_percentage_avg: 95.0,
                credential: Some(CredentialThresholds {
                    average: 98.0,
                    cutoff: 92.0,
                }),
            },
            tuition: 25_000,
            hostel_fees: 18_000,
            awards: vec![Award {
                name: "State Merit Scholarship".to_string(),
                category: AwardCategory::StateBased,
                rule: AwardRule::OpenEligibility,
                amount: AwardAmount::Fixed(15_000),
                automatic: false,
            }],
            strengths: vec![
                "Commerce".to_string(),
                "Economics".to_string(),
                "Arts".to_string(),
            ],
        },
        Institution {
            id: "anna-univ".to_string(),
            name: "Anna University".to_string(),
            location: "Chennai, Tamil Nadu".to_string(),
            ownership: "Government (State)".to_string(),
            tier: InstitutionTier::StatePremier,
            admission_rate: 20.0,
            thresholds: AdmissionThresholds {
                board_percentage_min: 70.0,
                board_percentage_avg: 88.0,
                credential: None,
            },
            tuition: 55_000,
            hostel_fees: 22_000,
            awards: vec![Award {
                name: "First Graduate Scholarship".to_string(),
                category: AwardCategory::StateBased,
                rule: AwardRule::OpenEligibility,
                amount: AwardAmount::Fixed(25_000),
                automatic: false,
            }],
            strengths: vec![
                "Engineering".to_string(),
                "Computer Science".to_string(),
            ],
        },
        Institution {
            id: "manipal".to_string(),
            name: "Manipal Institute of Technology".to_string(),
            location: "Manipal, Karnataka".to_string(),
            ownership: "Private".to_string(),
            tier: InstitutionTier::PrivateReputed,
            admission_rate: 35.0,
            thresholds: AdmissionThresholds {
                board_percentage_min: 60.0,
                board_percentage_avg: 82.0,
                credential: None,
            },
            tuition: 440_000,
            hostel_fees: 90_000,
            awards: vec![
                Award {
                    name: "Merit Scholarship".to_string(),
                    category: AwardCategory::Merit,
                    rule: AwardRule::TopPercent(7),
                    amount: AwardAmount::TuitionPercent(50),
                    automatic: false,
                },
                Award {
                    name: "Freeship Scheme".to_string(),
                    category: AwardCategory::NeedBased,
                    rule: AwardRule::OpenEligibility,
                    amount: AwardAmount::Fixed(100_000),
                    automatic: false,
                },
            ],
            strengths: vec![
                "Engineering".to_string(),
                "Medicine".to_string(),
                "Business".to_string(),
            ],
        },
    ])
}
