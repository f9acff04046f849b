//! Buckets evaluated institutions into risk categories and derives the
//! catalog-wide summary statistics.

use serde::{Deserialize, Serialize};

use super::{InstitutionMatch, MatchCategory};
use crate::engine::catalog::AwardCategory;

const BEST_VALUE_LIMIT: usize = 5;
const RECOMMENDATION_LIMIT: usize = 5;
/// Minimum probability for a reach entry to be worth recommending.
const REACH_PLAUSIBILITY_FLOOR: u8 = 15;

/// Complete bucketed result for one profile against one catalog snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "'de: 'static"))]
pub struct MatchReport {
    pub reach: Vec<InstitutionMatch>,
    pub target: Vec<InstitutionMatch>,
    pub safety: Vec<InstitutionMatch>,
    pub awards_summary: AwardsSummary,
    pub summary: MatchSummary,
}

/// Cross-institution view of the qualifying funding programs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AwardsSummary {
    pub total: usize,
    pub merit: Vec<AwardLead>,
    pub need: Vec<AwardLead>,
    pub automatic: Vec<AwardLead>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardLead {
    pub institution: String,
    pub award: String,
    pub likelihood: u8,
    pub estimated_value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "'de: 'static"))]
pub struct MatchSummary {
    pub total_matches: usize,
    pub reach_count: usize,
    pub target_count: usize,
    pub safety_count: usize,
    pub total_awards: usize,
    /// Mean net cost across every evaluated institution, in rupees.
    pub average_net_cost: u64,
    pub best_value: Vec<ValueEntry>,
    pub top_recommendations: Vec<Recommendation>,
}

/// Match score per lakh of net cost, highest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueEntry {
    pub name: String,
    pub match_score: u8,
    pub net_cost: u64,
    pub value_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub category: MatchCategory,
    pub match_score: u8,
    pub admission_probability: u8,
    pub reason: &'static str,
}

pub(crate) fn build_report(mut matches: Vec<InstitutionMatch>) -> MatchReport {
    // Stable tie-break on name keeps repeated runs byte-identical.
    matches.sort_by(|a, b| {
        b.match_score
            .cmp(&a.match_score)
            .then_with(|| a.name.cmp(&b.name))
    });

    let awards_summary = summarize_awards(&matches);
    let average_net_cost = average_net_cost(&matches);
    let best_value = best_value(&matches);

    let mut reach = Vec::new();
    let mut target = Vec::new();
    let mut safety = Vec::new();
    for entry in matches {
        match entry.category {
            MatchCategory::Reach => reach.push(entry),
            MatchCategory::Target => target.push(entry),
            MatchCategory::Safety => safety.push(entry),
        }
    }

    let top_recommendations = top_recommendations(&reach, &target, &safety);

    let summary = MatchSummary {
        total_matches: reach.len() + target.len() + safety.len(),
        reach_count: reach.len(),
        target_count: target.len(),
        safety_count: safety.len(),
        total_awards: awards_summary.total,
        average_net_cost,
        best_value,
        top_recommendations,
    };

    MatchReport {
        reach,
        target,
        safety,
        awards_summary,
        summary,
    }
}

fn summarize_awards(matches: &[InstitutionMatch]) -> AwardsSummary {
    let mut summary = AwardsSummary::default();

    for entry in matches {
        for award in &entry.awards {
            summary.total += 1;
            let lead = AwardLead {
                institution: entry.name.clone(),
                award: award.name.clone(),
                likelihood: award.likelihood,
                estimated_value: award.estimated_value,
            };
            match award.category {
                AwardCategory::Merit | AwardCategory::MeritCumMeans => {
                    summary.merit.push(lead.clone());
                }
                AwardCategory::NeedBased => summary.need.push(lead.clone()),
                AwardCategory::CategoryBased | AwardCategory::StateBased => {}
            }
            if award.automatic {
                summary.automatic.push(lead);
            }
        }
    }

    summary
}

fn average_net_cost(matches: &[InstitutionMatch]) -> u64 {
    if matches.is_empty() {
        return 0;
    }
    let total: u64 = matches.iter().map(|entry| entry.cost.net_cost).sum();
    (total as f64 / matches.len() as f64).round() as u64
}

fn best_value(matches: &[InstitutionMatch]) -> Vec<ValueEntry> {
    let mut ranked: Vec<(f64, &InstitutionMatch)> = matches
        .iter()
        .map(|entry| {
            let lakhs = entry.cost.net_cost as f64 / 100_000.0;
            let value = f64::from(entry.match_score) / (lakhs + 0.1);
            (value, entry)
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.1.name.cmp(&b.1.name))
    });

    ranked
        .into_iter()
        .take(BEST_VALUE_LIMIT)
        .map(|(value, entry)| ValueEntry {
            name: entry.name.clone(),
            match_score: entry.match_score,
            net_cost: entry.cost.net_cost,
            value_score: value.round() as u32,
        })
        .collect()
}

fn top_recommendations(
    reach: &[InstitutionMatch],
    target: &[InstitutionMatch],
    safety: &[InstitutionMatch],
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if let Some(best_reach) = reach.first() {
        if best_reach.admission_probability > REACH_PLAUSIBILITY_FLOOR {
            recommendations.push(recommend(
                best_reach,
                "Top reach option with a realistic chance",
            ));
        }
    }

    for entry in target.iter().take(2) {
        recommendations.push(recommend(entry, "Strong match with good admission odds"));
    }

    for entry in safety.iter().take(2) {
        recommendations.push(recommend(entry, "Dependable option with high probability"));
    }

    recommendations.truncate(RECOMMENDATION_LIMIT);
    recommendations
}

fn recommend(entry: &InstitutionMatch, reason: &'static str) -> Recommendation {
    Recommendation {
        name: entry.name.clone(),
        category: entry.category,
        match_score: entry.match_score,
        admission_probability: entry.admission_probability,
        reason,
    }
}
