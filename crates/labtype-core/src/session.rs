//! The assessment session state machine.
//!
//! A [`Session`] owns the shuffled question sequence and the answers given so
//! far. Presentation layers drive it by calling the transition methods
//! directly or by dispatching [`Intent`]s. Forward moves require an answer on
//! the current question; backward moves never do.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::corpus::CORPUS;
use crate::error::AssessmentError;
use crate::model::{Answer, Likert, Question};
use crate::report::AssessmentResult;
use crate::scoring::{self, DimensionScores};
use crate::sequencer;

/// Options fixed at session construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Seed for shuffling and random fill. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Allow [`Intent::FillRandom`].
    pub debug_fill: bool,
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Phase {
    NotStarted,
    InProgress { current: usize },
    Completed,
}

/// A request from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Start,
    Answer(Likert),
    Advance,
    Retreat,
    Finish,
    Restart,
    /// Debug only: answer everything at random and finish.
    FillRandom,
}

/// Position within the sequence, for progress display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// 1-based number of the current question; 0 before start.
    pub current: usize,
    pub total: usize,
}

impl Progress {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.current as f64 / self.total as f64 * 100.0
    }
}

/// One run of the assessment.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    corpus: &'static [Question],
    sequence: Vec<Question>,
    answers: BTreeMap<usize, Answer>,
    phase: Phase,
    completed_at: Option<DateTime<Utc>>,
    rng: StdRng,
    debug_fill: bool,
}

impl Session {
    /// A session over the built-in corpus.
    pub fn new(options: SessionOptions) -> Self {
        Self::with_corpus(&CORPUS, options)
    }

    pub fn with_corpus(corpus: &'static [Question], options: SessionOptions) -> Self {
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let sequence = sequencer::shuffle(corpus, &mut rng);
        Self {
            id: Uuid::new_v4(),
            corpus,
            sequence,
            answers: BTreeMap::new(),
            phase: Phase::NotStarted,
            completed_at: None,
            rng,
            debug_fill: options.debug_fill,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The shuffled question order for this run.
    pub fn sequence(&self) -> &[Question] {
        &self.sequence
    }

    pub fn answers(&self) -> impl Iterator<Item = &Answer> {
        self.answers.values()
    }

    pub fn answer_at(&self, index: usize) -> Option<&Answer> {
        self.answers.get(&index)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_fill
    }

    fn last_index(&self) -> usize {
        self.sequence.len().saturating_sub(1)
    }

    fn in_progress(&self) -> Result<usize, AssessmentError> {
        match self.phase {
            Phase::InProgress { current } => Ok(current),
            Phase::NotStarted => Err(AssessmentError::NotStarted),
            Phase::Completed => Err(AssessmentError::AlreadyCompleted),
        }
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// Begin a fresh run: reshuffle, clear answers, go to the first question.
    pub fn start(&mut self) -> Result<(), AssessmentError> {
        match self.phase {
            Phase::NotStarted => {}
            Phase::InProgress { .. } => return Err(AssessmentError::AlreadyStarted),
            Phase::Completed => return Err(AssessmentError::AlreadyCompleted),
        }
        if self.corpus.is_empty() {
            return Err(AssessmentError::EmptyCorpus);
        }

        self.sequence = sequencer::shuffle(self.corpus, &mut self.rng);
        self.answers.clear();
        self.completed_at = None;
        self.phase = Phase::InProgress { current: 0 };
        tracing::debug!(session = %self.id, total = self.sequence.len(), "assessment started");
        Ok(())
    }

    /// Record or overwrite the answer for the current question.
    pub fn answer(&mut self, value: Likert) -> Result<(), AssessmentError> {
        let current = self.in_progress()?;
        let dimension = self.sequence[current].dimension;
        let previous = self.answers.insert(
            current,
            Answer {
                question_index: current,
                dimension,
                value,
            },
        );
        tracing::debug!(
            index = current,
            %dimension,
            %value,
            overwrote = previous.is_some(),
            "answer recorded"
        );
        Ok(())
    }

    /// Move to the next question. The current one must be answered.
    pub fn advance(&mut self) -> Result<(), AssessmentError> {
        let current = self.in_progress()?;
        if current >= self.last_index() {
            return Err(AssessmentError::AtLastQuestion);
        }
        if !self.answers.contains_key(&current) {
            return Err(AssessmentError::Unanswered { index: current });
        }
        self.phase = Phase::InProgress {
            current: current + 1,
        };
        Ok(())
    }

    /// Move to the previous question. No answer is required.
    pub fn retreat(&mut self) -> Result<(), AssessmentError> {
        let current = self.in_progress()?;
        if current == 0 {
            return Err(AssessmentError::AtFirstQuestion);
        }
        self.phase = Phase::InProgress {
            current: current - 1,
        };
        Ok(())
    }

    /// Complete the run from the last question, which must be answered.
    pub fn finish(&mut self) -> Result<(), AssessmentError> {
        let current = self.in_progress()?;
        if current != self.last_index() {
            return Err(AssessmentError::NotLastQuestion { index: current });
        }
        if !self.answers.contains_key(&current) {
            return Err(AssessmentError::Unanswered { index: current });
        }
        debug_assert_eq!(self.answers.len(), self.sequence.len());

        self.phase = Phase::Completed;
        self.completed_at = Some(Utc::now());
        let scores = self.scores();
        tracing::info!(
            session = %self.id,
            code = %scoring::classify(&scores),
            ?scores,
            "assessment completed"
        );
        Ok(())
    }

    /// Drop all progress and return to the start screen with a new order.
    pub fn restart(&mut self) {
        self.id = Uuid::new_v4();
        self.answers.clear();
        self.completed_at = None;
        self.sequence = sequencer::shuffle(self.corpus, &mut self.rng);
        self.phase = Phase::NotStarted;
        tracing::debug!(session = %self.id, "assessment reset");
    }

    /// Debug only: give every question a uniformly random answer.
    pub fn fill_random_answers(&mut self) -> Result<(), AssessmentError> {
        if !self.debug_fill {
            return Err(AssessmentError::DebugDisabled);
        }
        self.in_progress()?;

        for (index, question) in self.sequence.iter().enumerate() {
            let value = Likert::SCALE[self.rng.gen_range(0..Likert::SCALE.len())];
            self.answers.insert(
                index,
                Answer {
                    question_index: index,
                    dimension: question.dimension,
                    value,
                },
            );
        }
        tracing::debug!(count = self.answers.len(), "filled random answers");
        Ok(())
    }

    /// Debug only: start if needed, fill at random, jump to the end, finish.
    pub fn complete_with_random_answers(&mut self) -> Result<(), AssessmentError> {
        if !self.debug_fill {
            return Err(AssessmentError::DebugDisabled);
        }
        if self.phase == Phase::NotStarted {
            self.start()?;
        }
        self.fill_random_answers()?;
        self.phase = Phase::InProgress {
            current: self.last_index(),
        };
        self.finish()
    }

    /// Apply an intent and return the resulting phase.
    ///
    /// On error the session is unchanged.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Phase, AssessmentError> {
        match intent {
            Intent::Start => self.start()?,
            Intent::Answer(value) => self.answer(value)?,
            Intent::Advance => self.advance()?,
            Intent::Retreat => self.retreat()?,
            Intent::Finish => self.finish()?,
            Intent::Restart => self.restart(),
            Intent::FillRandom => self.complete_with_random_answers()?,
        }
        Ok(self.phase)
    }

    // -----------------------------------------------------------------------
    // Queries for the presentation layer
    // -----------------------------------------------------------------------

    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            Phase::InProgress { current } => Some(current),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().map(|i| &self.sequence[i])
    }

    /// Previously recorded value for the current question, if any.
    pub fn current_answer(&self) -> Option<Likert> {
        self.current_index()
            .and_then(|i| self.answers.get(&i))
            .map(|a| a.value)
    }

    pub fn progress(&self) -> Progress {
        let total = self.sequence.len();
        let current = match self.phase {
            Phase::NotStarted => 0,
            Phase::InProgress { current } => current + 1,
            Phase::Completed => total,
        };
        Progress { current, total }
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index() == Some(self.last_index())
    }

    pub fn can_advance(&self) -> bool {
        matches!(self.current_index(), Some(i) if i < self.last_index() && self.answers.contains_key(&i))
    }

    pub fn can_retreat(&self) -> bool {
        matches!(self.current_index(), Some(i) if i > 0)
    }

    pub fn can_finish(&self) -> bool {
        self.is_last_question() && self.current_answer().is_some()
    }

    /// Running dimension sums over the answers recorded so far.
    pub fn scores(&self) -> DimensionScores {
        scoring::score(self.answers.values())
    }

    /// Result snapshot, available once the session is completed.
    pub fn results(&self) -> Option<AssessmentResult> {
        if self.phase != Phase::Completed {
            return None;
        }
        let completed_at = self.completed_at.unwrap_or_else(Utc::now);
        Some(AssessmentResult::new(
            self.id,
            completed_at,
            self.scores(),
            self.answers.len(),
        ))
    }
}
