//! Dimension scoring and classification.
//!
//! Scores are plain sums of answer values per dimension. The classifier
//! turns the four signs into a [`PersonalityCode`]; a zero sum resolves to
//! the positive pole.

use serde::{Deserialize, Serialize};

use crate::model::{Answer, Dimension, Pole};
use crate::profiles::PersonalityCode;

/// Score magnitude at which the chart marker reaches the end of its axis.
pub const AXIS_SCORE_LIMIT: i32 = 30;

/// Per-dimension answer sums.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub horizon: i32,
    pub paradigm: i32,
    pub lever: i32,
    pub strategy: i32,
}

impl DimensionScores {
    pub fn get(&self, dimension: Dimension) -> i32 {
        match dimension {
            Dimension::Horizon => self.horizon,
            Dimension::Paradigm => self.paradigm,
            Dimension::Lever => self.lever,
            Dimension::Strategy => self.strategy,
        }
    }

    fn slot(&mut self, dimension: Dimension) -> &mut i32 {
        match dimension {
            Dimension::Horizon => &mut self.horizon,
            Dimension::Paradigm => &mut self.paradigm,
            Dimension::Lever => &mut self.lever,
            Dimension::Strategy => &mut self.strategy,
        }
    }

    /// One reading per dimension, in code order.
    pub fn axes(&self) -> [AxisReading; 4] {
        Dimension::ALL.map(|d| AxisReading::new(d, self.get(d)))
    }
}

/// Sum answer values per dimension.
pub fn score<'a>(answers: impl IntoIterator<Item = &'a Answer>) -> DimensionScores {
    let mut scores = DimensionScores::default();
    for answer in answers {
        *scores.slot(answer.dimension) += i32::from(answer.value.value());
    }
    scores
}

/// Map dimension scores to a personality code.
pub fn classify(scores: &DimensionScores) -> PersonalityCode {
    PersonalityCode::new(Dimension::ALL.map(|d| Pole::from_score(scores.get(d))))
}

/// Chart geometry for one dimension's score.
///
/// Percentages run left (negative pole) to right (positive pole) with the
/// neutral point at 50.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisReading {
    pub dimension: Dimension,
    pub score: i32,
    pub pole: Pole,
    /// Signed fill width from centre, in percent of the full axis.
    pub offset_percent: f64,
    pub marker_percent: f64,
    /// How far toward either pole, 50..=100.
    pub deviation_percent: u32,
}

impl AxisReading {
    pub fn new(dimension: Dimension, score: i32) -> Self {
        let clamped = score.clamp(-AXIS_SCORE_LIMIT, AXIS_SCORE_LIMIT);
        let offset_percent = f64::from(clamped) * 50.0 / f64::from(AXIS_SCORE_LIMIT);
        Self {
            dimension,
            score,
            pole: Pole::from_score(score),
            offset_percent,
            marker_percent: 50.0 + offset_percent,
            deviation_percent: (50.0 + offset_percent.abs()).round() as u32,
        }
    }

    /// Letter of the pole this axis leans toward.
    pub fn letter(&self) -> char {
        self.dimension.letter(self.pole)
    }

    pub fn fill_width_percent(&self) -> f64 {
        self.offset_percent.abs()
    }
}
