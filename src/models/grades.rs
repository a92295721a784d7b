use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The four phases of the structured negotiation flow, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegotiationStage {
    RapportBuilding,
    ProblemDiscovery,
    ValueAddition,
    Closing,
}

impl NegotiationStage {
    pub const ALL: [NegotiationStage; 4] = [
        NegotiationStage::RapportBuilding,
        NegotiationStage::ProblemDiscovery,
        NegotiationStage::ValueAddition,
        NegotiationStage::Closing,
    ];

    /// Wire key used by the external evaluator
    pub fn key(self) -> &'static str {
        match self {
            NegotiationStage::RapportBuilding => "rapport_building",
            NegotiationStage::ProblemDiscovery => "problem_discovery",
            NegotiationStage::ValueAddition => "value_addition",
            NegotiationStage::Closing => "closing",
        }
    }

    /// Display name used in the score breakdown
    pub fn display_name(self) -> &'static str {
        match self {
            NegotiationStage::RapportBuilding => "関係構築",
            NegotiationStage::ProblemDiscovery => "課題ヒアリング",
            NegotiationStage::ValueAddition => "価値提案",
            NegotiationStage::Closing => "クロージング",
        }
    }
}

/// Letter grade assigned by the external evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl Grade {
    /// Parse a grade letter; anything unrecognized is None
    pub fn parse(value: &str) -> Option<Grade> {
        match value.trim() {
            "A" => Some(Grade::A),
            "B" => Some(Grade::B),
            "C" => Some(Grade::C),
            "D" => Some(Grade::D),
            _ => None,
        }
    }

    /// Points contributed to the total score
    pub fn points(self) -> u32 {
        match self {
            Grade::A => 20,
            Grade::B => 15,
            Grade::C => 10,
            Grade::D => 5,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

/// One stage's qualitative evaluation from the external grader
///
/// Only `score` feeds the scoring engine; `comment` and `evidence` pass
/// through untouched to presentation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StageEvaluation {
    /// Letter grade string; unrecognized values score zero
    #[serde(default)]
    pub score: Option<String>,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub evidence: String,
}

impl StageEvaluation {
    /// The recognized grade, if any
    pub fn grade(&self) -> Option<Grade> {
        self.score.as_deref().and_then(Grade::parse)
    }
}

/// Evaluations keyed by the four fixed stages, each may be missing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StageEvaluations {
    #[serde(default)]
    pub rapport_building: Option<StageEvaluation>,
    #[serde(default)]
    pub problem_discovery: Option<StageEvaluation>,
    #[serde(default)]
    pub value_addition: Option<StageEvaluation>,
    #[serde(default)]
    pub closing: Option<StageEvaluation>,
}

impl StageEvaluations {
    pub fn get(&self, stage: NegotiationStage) -> Option<&StageEvaluation> {
        match stage {
            NegotiationStage::RapportBuilding => self.rapport_building.as_ref(),
            NegotiationStage::ProblemDiscovery => self.problem_discovery.as_ref(),
            NegotiationStage::ValueAddition => self.value_addition.as_ref(),
            NegotiationStage::Closing => self.closing.as_ref(),
        }
    }
}

/// Pre-meeting metadata entered for a negotiation
///
/// Only `sales_rep` is consumed by the pipeline (for role resolution); the
/// rest passes through to the report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NegotiationInfo {
    /// Sales representative's display name
    pub sales_rep: String,
    #[serde(default)]
    pub client_company: String,
    #[serde(default)]
    pub client_rep: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}
