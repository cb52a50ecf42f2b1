//! Result snapshot with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::profiles::{PersonalityCode, PersonalityProfile};
use crate::scoring::{self, AxisReading, DimensionScores};

/// Read-only outcome of a completed session.
///
/// The stored code is informational; loading re-derives it from the scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Session identifier.
    pub id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub code: PersonalityCode,
    pub scores: DimensionScores,
    /// Number of answered questions.
    pub answered: usize,
}

impl AssessmentResult {
    pub fn new(
        id: Uuid,
        completed_at: DateTime<Utc>,
        scores: DimensionScores,
        answered: usize,
    ) -> Self {
        Self {
            id,
            completed_at,
            code: scoring::classify(&scores),
            scores,
            answered,
        }
    }

    pub fn profile(&self) -> &'static PersonalityProfile {
        self.code.profile()
    }

    pub fn axes(&self) -> [AxisReading; 4] {
        self.scores.axes()
    }

    /// Pretty-printed JSON, the format [`AssessmentResult::load_json`] reads.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load a result from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read result from {}", path.display()))?;
        let mut result: AssessmentResult =
            serde_json::from_str(&content).context("failed to parse result JSON")?;

        let derived = scoring::classify(&result.scores);
        if derived != result.code {
            tracing::warn!(
                stored = %result.code,
                %derived,
                "stored code disagrees with scores, using derived code"
            );
            result.code = derived;
        }
        Ok(result)
    }
}
