//! The `labtype take` command.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};

use labtype_core::report::AssessmentResult;
use labtype_core::session::{Intent, Session};
use labtype_report::text::ASSESSMENT_NAME;

use crate::console::{parse_command, Command, HELP};
use crate::render::{export_result, print_result, Settings};
use crate::ExportArgs;

pub async fn execute(seed: Option<u64>, debug: bool, export: ExportArgs) -> Result<()> {
    let settings = Settings::resolve(&export)?;

    let mut options = settings.config.session_options();
    if seed.is_some() {
        options.seed = seed;
    }
    options.debug_fill |= debug;

    let mut session = Session::new(options);
    let result = run_interactive(&mut session, io::stdin().lock(), &mut io::stdout())?;

    print_result(&result);
    export_result(&result, &settings).await;
    Ok(())
}

/// Drive a session from line input until it completes.
pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
) -> Result<AssessmentResult> {
    session.start()?;
    writeln!(
        out,
        "{ASSESSMENT_NAME}: {} questions. Type ? for help.",
        session.sequence().len()
    )?;
    if session.debug_enabled() {
        writeln!(out, "Debug mode: type `debug` to fill every answer at random.")?;
    }

    let mut shown = None;
    loop {
        if let Some(result) = session.results() {
            return Ok(result);
        }
        let Some(index) = session.current_index() else {
            // back to NotStarted after a restart
            session.start()?;
            continue;
        };
        if shown != Some(index) {
            show_question(session, out)?;
            shown = Some(index);
        }

        write!(out, "> ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!(
                "input ended before the assessment was completed ({}/{} answered)",
                session.answered_count(),
                session.sequence().len()
            );
        }

        match parse_command(&line, session.is_last_question()) {
            Command::Intent(intent) => match session.dispatch(intent) {
                Ok(_) => match intent {
                    Intent::Answer(value) => {
                        writeln!(out, "  {value} {}", value.label())?;
                    }
                    Intent::Restart => {
                        writeln!(out, "  Restarted.")?;
                        shown = None;
                    }
                    _ => {}
                },
                Err(e) => writeln!(out, "  ! {e}")?,
            },
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => bail!("assessment abandoned"),
            Command::Invalid(message) => writeln!(out, "  ! {message}")?,
        }
    }
}

fn show_question<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    let Some(question) = session.current_question() else {
        return Ok(());
    };
    let progress = session.progress();

    writeln!(out)?;
    writeln!(
        out,
        "[{}/{}] {:.0}%",
        progress.current,
        progress.total,
        progress.percent()
    )?;
    writeln!(out, "{}", question.prompt)?;
    writeln!(out, "  A: {}", question.option_a)?;
    writeln!(out, "  B: {}", question.option_b)?;
    if let Some(value) = session.current_answer() {
        writeln!(out, "  (answered {value} {})", value.label())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use labtype_core::session::{Phase, SessionOptions};
    use std::io::Cursor;

    fn session(debug_fill: bool) -> Session {
        Session::new(SessionOptions {
            seed: Some(11),
            debug_fill,
        })
    }

    fn run(session: &mut Session, input: &str) -> (Result<AssessmentResult>, String) {
        let mut out = Vec::new();
        let result = run_interactive(session, Cursor::new(input.to_string()), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn all_neutral_answers_give_fpmr() {
        let mut s = session(false);
        let (result, output) = run(&mut s, &"0\n\n".repeat(40));
        let result = result.unwrap();
        assert_eq!(result.code.to_string(), "FPMR");
        assert_eq!(result.answered, 40);
        assert!(output.contains("[40/40]"));
        assert_eq!(s.phase(), Phase::Completed);
    }

    #[test]
    fn unanswered_advance_is_a_hint_not_a_failure() {
        let mut s = session(false);
        let input = format!("\n{}", "-3\n\n".repeat(40));
        let (result, output) = run(&mut s, &input);
        assert!(output.contains("  ! "));
        assert_eq!(result.unwrap().code.to_string(), "AEDI");
    }

    #[test]
    fn eof_before_completion_is_an_error() {
        let mut s = session(false);
        let (result, _) = run(&mut s, "1\n\n2\n");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("2/40 answered"));
    }

    #[test]
    fn debug_word_requires_opt_in() {
        let mut s = session(false);
        let (result, output) = run(&mut s, "debug\n");
        assert!(result.is_err());
        assert!(output.contains("! "));

        let mut s = session(true);
        let (result, _) = run(&mut s, "debug\n");
        assert_eq!(result.unwrap().answered, 40);
    }

    #[test]
    fn debug_hint_only_when_enabled() {
        let (_, output) = run(&mut session(false), "q\n");
        assert!(!output.contains("Debug mode"));

        let (_, output) = run(&mut session(true), "q\n");
        assert!(output.contains("Debug mode: type `debug`"));
    }

    #[test]
    fn quit_abandons() {
        let mut s = session(false);
        let (result, _) = run(&mut s, "q\n");
        assert!(result.unwrap_err().to_string().contains("abandoned"));
    }

    #[test]
    fn restart_clears_answers() {
        let mut s = session(false);
        let input = format!("3\n\nr\n{}", "0\n\n".repeat(40));
        let (result, output) = run(&mut s, &input);
        assert!(output.contains("Restarted."));
        let result = result.unwrap();
        assert_eq!(result.scores, Default::default());
    }
}
