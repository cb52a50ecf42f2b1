//! labtype-core — Assessment engine for the AI researcher personality quiz.
//!
//! This crate holds the static question corpus and profile table, the
//! session state machine, and the scoring and classification logic that
//! every front end builds on.

pub mod config;
pub mod corpus;
pub mod error;
pub mod model;
pub mod profiles;
pub mod report;
pub mod scoring;
pub mod sequencer;
pub mod session;

pub use error::AssessmentError;
pub use model::{Answer, Dimension, Likert, Pole, Question};
pub use profiles::{PersonalityCode, PersonalityProfile};
pub use report::AssessmentResult;
pub use scoring::{classify, score, AxisReading, DimensionScores};
pub use session::{Intent, Phase, Progress, Session, SessionOptions};
