use serde::{Deserialize, Serialize};

use crate::engine::catalog::Institution;

/// Annual cost projection after estimated aid. All figures in rupees;
/// never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostProjection {
    pub tuition: u64,
    pub estimated_aid: u64,
    pub net_cost: u64,
    pub hostel_fees: u64,
    pub total_cost: u64,
}

pub(crate) fn project_cost(institution: &Institution, estimated_aid: u64) -> CostProjection {
    let net_cost = institution.tuition.saturating_sub(estimated_aid);
    CostProjection {
        tuition: institution.tuition,
        estimated_aid,
        net_cost,
        hostel_fees: institution.hostel_fees,
        total_cost: net_cost + institution.hostel_fees,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::catalog::{AdmissionThresholds, InstitutionTier};

    fn institution(tuition: u64, hostel_fees: u64) -> Institution {
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
            hostel_fees,
            awards: Vec::new(),
            strengths: Vec::new(),
        }
    }

    #[test]
    fn aid_reduces_net_cost() {
        let projection = project_cost(&institution(400_000, 80_000), 150_000);
        assert_eq!(projection.net_cost, 250_000);
        assert_eq!(projection.total_cost, 330_000);
    }

    #[test]
    fn aid_beyond_tuition_floors_net_cost_at_zero() {
        let projection = project_cost(&institution(100_000, 20_000), 250_000);
        assert_eq!(projection.net_cost, 0);
        assert_eq!(projection.total_cost, 20_000);
    }
}
