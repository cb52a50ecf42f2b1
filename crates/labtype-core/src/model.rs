//! Core data model types for labtype.
//!
//! Dimensions, poles, the seven-point answer scale, questions, and recorded
//! answers. Everything here is plain data; state lives in [`crate::session`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AssessmentError;

/// One of the four independent bipolar axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Horizon,
    Paradigm,
    Lever,
    Strategy,
}

/// Which end of a dimension a score leans toward.
///
/// `Positive` is agreement with option A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pole {
    Positive,
    Negative,
}

impl Pole {
    /// Pole for a dimension sum. Zero belongs to the positive pole.
    pub fn from_score(score: i32) -> Self {
        if score >= 0 {
            Pole::Positive
        } else {
            Pole::Negative
        }
    }
}

/// Display metadata for a dimension's chart axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionInfo {
    pub name: &'static str,
    pub english_name: &'static str,
    pub positive_label: &'static str,
    pub positive_english: &'static str,
    pub negative_label: &'static str,
    pub negative_english: &'static str,
    /// Chart colour as a CSS hex string.
    pub color: &'static str,
}

const HORIZON_INFO: DimensionInfo = DimensionInfo {
    name: "科研坐标",
    english_name: "The Horizon",
    positive_label: "仰望星空",
    positive_english: "Frontier-Focused",
    negative_label: "脚踏实地",
    negative_english: "Applied-Focused",
    color: "#3498db",
};

const PARADIGM_INFO: DimensionInfo = DimensionInfo {
    name: "认知范式",
    english_name: "The Paradigm",
    positive_label: "理论为王",
    positive_english: "Principle-First",
    negative_label: "实践出真知",
    negative_english: "Empiricism",
    color: "#e74c3c",
};

const LEVER_INFO: DimensionInfo = DimensionInfo {
    name: "增长杠杆",
    english_name: "The Lever",
    positive_label: "模型至上",
    positive_english: "Model-Centric",
    negative_label: "数据为王",
    negative_english: "Data-Centric",
    color: "#f39c12",
};

const STRATEGY_INFO: DimensionInfo = DimensionInfo {
    name: "创新策略",
    english_name: "The Strategy",
    positive_label: "暴力颠覆",
    positive_english: "Revolutionary",
    negative_label: "精益求精",
    negative_english: "Iterative",
    color: "#9b59b6",
};

impl Dimension {
    /// All dimensions in code order.
    pub const ALL: [Dimension; 4] = [
        Dimension::Horizon,
        Dimension::Paradigm,
        Dimension::Lever,
        Dimension::Strategy,
    ];

    /// Position of this dimension within a personality code.
    pub fn index(self) -> usize {
        match self {
            Dimension::Horizon => 0,
            Dimension::Paradigm => 1,
            Dimension::Lever => 2,
            Dimension::Strategy => 3,
        }
    }

    /// Stable lowercase identifier.
    pub fn id(self) -> &'static str {
        match self {
            Dimension::Horizon => "horizon",
            Dimension::Paradigm => "paradigm",
            Dimension::Lever => "lever",
            Dimension::Strategy => "strategy",
        }
    }

    /// `(positive, negative)` trait letters.
    pub fn letters(self) -> (char, char) {
        match self {
            Dimension::Horizon => ('F', 'A'),
            Dimension::Paradigm => ('P', 'E'),
            Dimension::Lever => ('M', 'D'),
            Dimension::Strategy => ('R', 'I'),
        }
    }

    pub fn letter(self, pole: Pole) -> char {
        let (positive, negative) = self.letters();
        match pole {
            Pole::Positive => positive,
            Pole::Negative => negative,
        }
    }

    /// Inverse of [`Dimension::letter`]; case-insensitive.
    pub fn pole_for_letter(self, letter: char) -> Option<Pole> {
        let (positive, negative) = self.letters();
        match letter.to_ascii_uppercase() {
            c if c == positive => Some(Pole::Positive),
            c if c == negative => Some(Pole::Negative),
            _ => None,
        }
    }

    pub fn info(self) -> &'static DimensionInfo {
        match self {
            Dimension::Horizon => &HORIZON_INFO,
            Dimension::Paradigm => &PARADIGM_INFO,
            Dimension::Lever => &LEVER_INFO,
            Dimension::Strategy => &STRATEGY_INFO,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Dimension {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "horizon" => Ok(Dimension::Horizon),
            "paradigm" => Ok(Dimension::Paradigm),
            "lever" => Ok(Dimension::Lever),
            "strategy" => Ok(Dimension::Strategy),
            other => Err(AssessmentError::UnknownDimension(other.to_string())),
        }
    }
}

/// A signed preference on the seven-point scale, `-3..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub struct Likert(i8);

impl Likert {
    pub const MIN: i8 = -3;
    pub const MAX: i8 = 3;
    pub const NEUTRAL: Likert = Likert(0);

    /// Scale points in presentation order, strongest A first.
    pub const SCALE: [Likert; 7] = [
        Likert(3),
        Likert(2),
        Likert(1),
        Likert(0),
        Likert(-1),
        Likert(-2),
        Likert(-3),
    ];

    pub fn new(value: i8) -> Result<Self, AssessmentError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Likert(value))
        } else {
            Err(AssessmentError::ValueOutOfRange(value.into()))
        }
    }

    pub fn value(self) -> i8 {
        self.0
    }

    /// Label shown next to the scale point.
    pub fn label(self) -> &'static str {
        match self.0 {
            3 => "非常倾向A",
            2 => "比较倾向A",
            1 => "稍微倾向A",
            0 => "中立",
            -1 => "稍微倾向B",
            -2 => "比较倾向B",
            _ => "非常倾向B",
        }
    }
}

impl TryFrom<i8> for Likert {
    type Error = AssessmentError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Likert::new(value)
    }
}

impl From<Likert> for i8 {
    fn from(value: Likert) -> Self {
        value.0
    }
}

impl fmt::Display for Likert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

impl FromStr for Likert {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| AssessmentError::InvalidValue(trimmed.to_string()))?;
        let narrowed = i8::try_from(value).map_err(|_| AssessmentError::ValueOutOfRange(value))?;
        Likert::new(narrowed)
    }
}

/// A forced-choice question bound to one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub dimension: Dimension,
    pub prompt: &'static str,
    pub option_a: &'static str,
    pub option_b: &'static str,
}

/// A recorded answer for one position in the session sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Index into the session's shuffled sequence.
    pub question_index: usize,
    pub dimension: Dimension,
    pub value: Likert,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_display_and_parse() {
        assert_eq!(Dimension::Horizon.to_string(), "horizon");
        assert_eq!("LEVER".parse::<Dimension>().unwrap(), Dimension::Lever);
        assert!("mood".parse::<Dimension>().is_err());
        for (i, d) in Dimension::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
        }
    }

    #[test]
    fn letter_pairs() {
        assert_eq!(Dimension::Horizon.letter(Pole::Positive), 'F');
        assert_eq!(Dimension::Horizon.letter(Pole::Negative), 'A');
        assert_eq!(Dimension::Paradigm.letters(), ('P', 'E'));
        assert_eq!(Dimension::Lever.letters(), ('M', 'D'));
        assert_eq!(Dimension::Strategy.letters(), ('R', 'I'));
        assert_eq!(Dimension::Strategy.pole_for_letter('i'), Some(Pole::Negative));
        assert_eq!(Dimension::Strategy.pole_for_letter('F'), None);
    }

    #[test]
    fn zero_score_is_positive_pole() {
        assert_eq!(Pole::from_score(0), Pole::Positive);
        assert_eq!(Pole::from_score(1), Pole::Positive);
        assert_eq!(Pole::from_score(-1), Pole::Negative);
    }

    #[test]
    fn likert_bounds() {
        assert!(Likert::new(3).is_ok());
        assert!(Likert::new(-3).is_ok());
        assert_eq!(Likert::new(4), Err(AssessmentError::ValueOutOfRange(4)));
        assert_eq!(Likert::new(-4), Err(AssessmentError::ValueOutOfRange(-4)));
    }

    #[test]
    fn likert_parse() {
        assert_eq!("+2".parse::<Likert>().unwrap().value(), 2);
        assert_eq!(" -3 ".parse::<Likert>().unwrap().value(), -3);
        assert_eq!(
            "300".parse::<Likert>(),
            Err(AssessmentError::ValueOutOfRange(300))
        );
        assert!(matches!(
            "yes".parse::<Likert>(),
            Err(AssessmentError::InvalidValue(_))
        ));
    }

    #[test]
    fn likert_labels_cover_scale() {
        assert_eq!(Likert::SCALE[0].label(), "非常倾向A");
        assert_eq!(Likert::NEUTRAL.label(), "中立");
        assert_eq!(Likert::SCALE[6].label(), "非常倾向B");
        assert_eq!(Likert::SCALE[6].to_string(), "-3");
    }

    #[test]
    fn likert_rejects_out_of_range_json() {
        assert_eq!(serde_json::from_str::<Likert>("2").unwrap().value(), 2);
        assert!(serde_json::from_str::<Likert>("5").is_err());
    }

    #[test]
    fn answer_serde_roundtrip() {
        let answer = Answer {
            question_index: 7,
            dimension: Dimension::Paradigm,
            value: Likert::new(-2).unwrap(),
        };
        let json = serde_json::to_string(&answer).unwrap();
        assert!(json.contains("\"paradigm\""));
        let back: Answer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, answer);
    }
}
