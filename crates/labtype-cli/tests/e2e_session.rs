//! End-to-end scenarios through the engine and exporter, without the binary.

use std::time::Duration;

use labtype_core::corpus::CORPUS;
use labtype_core::model::{Dimension, Likert};
use labtype_core::report::AssessmentResult;
use labtype_core::session::{Intent, Phase, Session, SessionOptions};
use labtype_report::export::{export_or_fallback, ExportFormat, ExportOutcome, FileExporter};

fn seeded(seed: u64) -> Session {
    Session::new(SessionOptions {
        seed: Some(seed),
        debug_fill: false,
    })
}

/// Answer every question with `pick(dimension)` and finish.
fn complete_with(session: &mut Session, pick: impl Fn(Dimension, usize) -> i8) -> AssessmentResult {
    session.dispatch(Intent::Start).unwrap();
    let total = session.sequence().len();
    let mut seen = std::collections::HashMap::new();
    for i in 0..total {
        let dimension = session.current_question().unwrap().dimension;
        let nth = seen.entry(dimension).or_insert(0usize);
        let value = Likert::new(pick(dimension, *nth)).unwrap();
        *nth += 1;
        session.dispatch(Intent::Answer(value)).unwrap();
        if i + 1 < total {
            session.dispatch(Intent::Advance).unwrap();
        }
    }
    assert_eq!(session.dispatch(Intent::Finish).unwrap(), Phase::Completed);
    session.results().unwrap()
}

#[test]
fn mixed_answers_classify_as_femi() {
    let mut session = seeded(1);
    // one non-zero answer per dimension gives horizon +3, paradigm -1, strategy -2
    let result = complete_with(&mut session, |dimension, nth| match (dimension, nth) {
        (Dimension::Horizon, 0) => 3,
        (Dimension::Paradigm, 0) => -1,
        (Dimension::Strategy, 0) => -2,
        _ => 0,
    });

    assert_eq!(result.scores.horizon, 3);
    assert_eq!(result.scores.paradigm, -1);
    assert_eq!(result.scores.lever, 0);
    assert_eq!(result.scores.strategy, -2);
    assert_eq!(result.code.to_string(), "FEMI");
    assert_eq!(result.profile().title, "炼丹宗师");
}

#[test]
fn question_order_does_not_change_the_result() {
    let pick = |dimension: Dimension, _| match dimension {
        Dimension::Horizon => 2,
        Dimension::Paradigm => -1,
        Dimension::Lever => 1,
        Dimension::Strategy => -3,
    };
    let a = complete_with(&mut seeded(3), pick);
    let b = complete_with(&mut seeded(99), pick);
    assert_eq!(a.scores, b.scores);
    assert_eq!(a.code, b.code);
}

#[test]
fn every_question_is_asked_exactly_once() {
    let session = seeded(5);
    let mut prompts: Vec<_> = session.sequence().iter().map(|q| q.prompt).collect();
    let mut expected: Vec<_> = CORPUS.iter().map(|q| q.prompt).collect();
    prompts.sort_unstable();
    expected.sort_unstable();
    assert_eq!(prompts, expected);
}

#[test]
fn restart_discards_a_partial_run() {
    let mut session = seeded(8);
    session.dispatch(Intent::Start).unwrap();
    for _ in 0..5 {
        session
            .dispatch(Intent::Answer(Likert::new(3).unwrap()))
            .unwrap();
        session.dispatch(Intent::Advance).unwrap();
    }
    let first_id = session.id();

    assert_eq!(session.dispatch(Intent::Restart).unwrap(), Phase::NotStarted);
    assert_eq!(session.answered_count(), 0);
    assert_ne!(session.id(), first_id);

    let result = complete_with(&mut session, |_, _| 0);
    assert_eq!(result.code.to_string(), "FPMR");
    assert_eq!(result.id, session.id());
}

#[tokio::test]
async fn completed_run_exports_and_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let result = complete_with(&mut seeded(2), |_, _| -1);
    assert_eq!(result.code.to_string(), "AEDI");

    let exporter = FileExporter::new(dir.path(), ExportFormat::ALL.to_vec());
    let outcome = export_or_fallback(&exporter, &result, Duration::from_secs(5)).await;
    let ExportOutcome::Saved(paths) = outcome else {
        panic!("expected export to succeed");
    };
    assert_eq!(paths.len(), 4);

    let json = paths
        .iter()
        .find(|p| p.extension().is_some_and(|e| e == "json"))
        .unwrap();
    let loaded = AssessmentResult::load_json(json).unwrap();
    assert_eq!(loaded, result);
}
