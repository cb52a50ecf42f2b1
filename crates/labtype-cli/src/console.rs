//! Line-oriented input for the interactive session.

use labtype_core::model::Likert;
use labtype_core::session::Intent;

/// What one line of input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    Help,
    Quit,
    Invalid(String),
}

/// Interpret a line typed at the question prompt.
///
/// An empty line moves on: next question, or finish on the last one.
pub fn parse_command(line: &str, on_last_question: bool) -> Command {
    let input = line.trim();
    let lowered = input.to_lowercase();

    match lowered.as_str() {
        "" if on_last_question => Command::Intent(Intent::Finish),
        "" | "n" | "next" => Command::Intent(Intent::Advance),
        "p" | "prev" | "back" => Command::Intent(Intent::Retreat),
        "f" | "finish" => Command::Intent(Intent::Finish),
        "r" | "restart" => Command::Intent(Intent::Restart),
        "debug" => Command::Intent(Intent::FillRandom),
        "?" | "h" | "help" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ => match input.parse::<Likert>() {
            Ok(value) => Command::Intent(Intent::Answer(value)),
            Err(e) => Command::Invalid(e.to_string()),
        },
    }
}

pub const HELP: &str = "\
  3 .. -3     answer (3 = strongly A, 0 = neutral, -3 = strongly B)
  <enter>, n  next question (finish on the last one)
  p           previous question
  f           finish
  r           restart with a new question order
  q           quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_answers() {
        assert_eq!(
            parse_command("3", false),
            Command::Intent(Intent::Answer(Likert::new(3).unwrap()))
        );
        assert_eq!(
            parse_command(" -2 ", false),
            Command::Intent(Intent::Answer(Likert::new(-2).unwrap()))
        );
        assert_eq!(
            parse_command("+1", false),
            Command::Intent(Intent::Answer(Likert::new(1).unwrap()))
        );
    }

    #[test]
    fn out_of_range_and_garbage_are_invalid() {
        assert!(matches!(parse_command("4", false), Command::Invalid(_)));
        assert!(matches!(parse_command("-300", false), Command::Invalid(_)));
        assert!(matches!(parse_command("maybe", false), Command::Invalid(_)));
    }

    #[test]
    fn empty_line_depends_on_position() {
        assert_eq!(parse_command("", false), Command::Intent(Intent::Advance));
        assert_eq!(parse_command("\n", true), Command::Intent(Intent::Finish));
    }

    #[test]
    fn navigation_words() {
        assert_eq!(parse_command("BACK", false), Command::Intent(Intent::Retreat));
        assert_eq!(parse_command("next", true), Command::Intent(Intent::Advance));
        assert_eq!(parse_command("debug", false), Command::Intent(Intent::FillRandom));
        assert_eq!(parse_command("q", false), Command::Quit);
        assert_eq!(parse_command("?", false), Command::Help);
    }
}
