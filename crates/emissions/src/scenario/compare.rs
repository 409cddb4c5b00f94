//! Baseline-vs-intervention comparison and rule-based insights.

use serde::{Deserialize, Serialize};

use super::types::{Category, Scenario, ScenarioEmissions};

/// Number of categories reported as key reductions.
pub const KEY_REDUCTION_COUNT: usize = 3;

pub const RECOMMEND_LANDFILL: &str =
    "Landfill diversion is effective. Consider increasing organic waste composting.";
pub const RECOMMEND_RECYCLING: &str =
    "Enhanced recycling shows strong emission reduction. Expand material recovery program.";
pub const RECOMMEND_FLEET: &str =
    "Fleet optimization is working. Consider further electrification of vehicles.";
pub const RECOMMEND_OPEN_BURNING: &str = "Open burning still present. Eliminating this practice \
     would significantly reduce emissions and air pollution.";

// =============================================================================
// Comparison
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparison {
    /// `baseline.total - intervention.total`, kg CO2e. Positive is better.
    pub absolute_reduction: f64,
    /// Percent of the baseline total; zero when the baseline total is zero.
    pub percentage_reduction: f64,
    /// Baseline minus intervention per category. Its `total` equals
    /// `absolute_reduction`.
    pub by_category: ScenarioEmissions,
}

pub fn compare_scenarios(
    baseline: &ScenarioEmissions,
    intervention: &ScenarioEmissions,
) -> ScenarioComparison {
    let absolute_reduction = baseline.total - intervention.total;
    let percentage_reduction =
        if absolute_reduction == 0.0 || baseline.total == 0.0 || !baseline.total.is_finite() {
            0.0
        } else {
            absolute_reduction / baseline.total * 100.0
        };
    ScenarioComparison {
        absolute_reduction,
        percentage_reduction,
        by_category: baseline.difference(intervention),
    }
}

// =============================================================================
// Insights
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyReduction {
    pub category: Category,
    /// Human-readable category name.
    pub label: String,
    /// kg CO2e saved in this category.
    pub reduction: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInsights {
    pub summary: String,
    /// Largest positive category reductions, biggest first.
    pub key_reductions: Vec<KeyReduction>,
    pub recommendations: Vec<String>,
}

/// Deterministic insight text for a baseline/intervention pair.
pub fn generate_insights(
    baseline: &ScenarioEmissions,
    intervention: &ScenarioEmissions,
) -> ScenarioInsights {
    let comparison = compare_scenarios(baseline, intervention);

    let mut reductions: Vec<(Category, f64)> = Category::ALL
        .iter()
        .map(|c| (*c, comparison.by_category.get(*c)))
        .filter(|(_, delta)| *delta > 0.0)
        .collect();
    // Stable sort keeps category order among ties.
    reductions.sort_by(|a, b| b.1.total_cmp(&a.1));
    reductions.truncate(KEY_REDUCTION_COUNT);

    let summary = format!(
        "Scenario achieves {:.1} tonnes CO₂-eq reduction ({:.1}% decrease)",
        comparison.absolute_reduction / crate::units::KG_PER_TONNE,
        comparison.percentage_reduction
    );

    let rules: [(bool, &str); 4] = [
        (baseline.landfill > intervention.landfill, RECOMMEND_LANDFILL),
        (baseline.recycling > intervention.recycling, RECOMMEND_RECYCLING),
        (baseline.transportation > intervention.transportation, RECOMMEND_FLEET),
        (intervention.open_burning > 0.0, RECOMMEND_OPEN_BURNING),
    ];

    ScenarioInsights {
        summary,
        key_reductions: reductions
            .into_iter()
            .map(|(category, reduction)| KeyReduction {
                category,
                label: category.label().to_string(),
                reduction,
            })
            .collect(),
        recommendations: rules
            .iter()
            .filter(|(fires, _)| *fires)
            .map(|(_, text)| (*text).to_string())
            .collect(),
    }
}

// =============================================================================
// Pair selection
// =============================================================================

/// Pick the (baseline, intervention) pair to compare.
///
/// The baseline is the first flagged scenario, else the first one. The
/// intervention is the first unflagged scenario; when every scenario is
/// flagged it is the second one. `None` with fewer than two scenarios.
pub fn select_comparison_pair(scenarios: &[Scenario]) -> Option<(&Scenario, &Scenario)> {
    if scenarios.len() < 2 {
        return None;
    }
    let baseline_idx = scenarios.iter().position(|s| s.is_baseline).unwrap_or(0);
    let intervention_idx = scenarios
        .iter()
        .enumerate()
        .position(|(i, s)| i != baseline_idx && !s.is_baseline)
        .unwrap_or(1);
    Some((&scenarios[baseline_idx], &scenarios[intervention_idx]))
}
