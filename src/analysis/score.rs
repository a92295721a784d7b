use serde::{Deserialize, Serialize};

use crate::models::{NegotiationStage, StageEvaluations};

use super::ConversationBalance;

/// One rung of the balance scoring ladder
#[derive(Debug, Clone, Copy)]
pub struct DeviationBand {
    /// Inclusive upper bound on |ratio - ideal|
    pub max_deviation: f64,
    pub points: u32,
}

/// Scoring parameters
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    /// Target share of speech for our negotiator, in percent
    pub ideal_ratio_percent: f64,
    /// Evaluated in ascending order; the first band containing the
    /// deviation wins, anything beyond the last band scores zero
    pub deviation_bands: Vec<DeviationBand>,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            ideal_ratio_percent: 25.0,
            deviation_bands: vec![
                DeviationBand { max_deviation: 5.0, points: 20 },
                DeviationBand { max_deviation: 10.0, points: 15 },
                DeviationBand { max_deviation: 15.0, points: 10 },
                DeviationBand { max_deviation: 20.0, points: 5 },
            ],
        }
    }
}

impl ScoreConfig {
    /// Points for a balance ratio under the band ladder
    pub fn balance_points(&self, ratio_percent: f64) -> u32 {
        let deviation = (ratio_percent - self.ideal_ratio_percent).abs();
        self.deviation_bands
            .iter()
            .find(|band| deviation <= band.max_deviation)
            .map(|band| band.points)
            .unwrap_or(0)
    }
}

/// Total score with its per-component breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total_score: u32,
    /// Human-readable "label: points" entries in fixed order
    pub components: Vec<String>,
}

impl ScoreBreakdown {
    pub fn breakdown_text(&self) -> String {
        self.components.join("\n")
    }
}

/// Combine stage grades and the speech balance into one score.
///
/// Each recognized grade maps to points through the fixed table (A=20,
/// B=15, C=10, D=5); an absent or unrecognized grade scores zero. The
/// balance contributes through the deviation band ladder. No clamping is
/// applied to the total.
pub fn aggregate_score(
    evaluations: &StageEvaluations,
    balance: &ConversationBalance,
    config: &ScoreConfig,
) -> ScoreBreakdown {
    let mut total_score = 0u32;
    let mut components = Vec::with_capacity(NegotiationStage::ALL.len() + 1);

    for stage in NegotiationStage::ALL {
        let grade = evaluations.get(stage).and_then(|e| e.grade());
        let points = grade.map(|g| g.points()).unwrap_or(0);
        let label = match grade {
            Some(g) => format!("{}評価", g.letter()),
            None => "評価なし".to_string(),
        };
        total_score += points;
        components.push(format!("{}({}): {}点", stage.display_name(), label, points));
    }

    let balance_points = config.balance_points(balance.our_ratio_percent);
    let deviation = balance.our_ratio_percent - config.ideal_ratio_percent;
    total_score += balance_points;
    components.push(format!(
        "会話バランス(理想比{:+.1}%): {}点",
        deviation, balance_points
    ));

    ScoreBreakdown {
        total_score,
        components,
    }
}
