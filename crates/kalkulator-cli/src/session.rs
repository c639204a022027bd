//! Interactive session over a line-oriented stream.
//!
//! Mirrors the calculator screen: two fields, four operation buttons and a
//! result line. Each input line is one user action.

use std::io::{BufRead, Write};

use anyhow::Result;
use kalkulator_core::{Calculator, Locale, Operation};
use tracing::trace;

const HELP: &str = "\
Commands:
  a <number>     set the first number
  b <number>     set the second number
  + - × ÷        apply an operation (also: add, sub, mul, div, *, x, /, :)
  show           show both numbers and the result
  clear          reset everything
  help           show this help
  quit           leave the session";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
enum Action {
    SetFirst(String),
    SetSecond(String),
    Apply(Operation),
    Show,
    Clear,
    Help,
    Quit,
    Unknown(String),
}

fn parse_action(line: &str) -> Option<Action> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let action = match head.to_lowercase().as_str() {
        "a" => Action::SetFirst(rest.to_string()),
        "b" => Action::SetSecond(rest.to_string()),
        "show" => Action::Show,
        "clear" => Action::Clear,
        "help" | "?" => Action::Help,
        "quit" | "exit" | "q" => Action::Quit,
        _ => match line.parse::<Operation>() {
            Ok(op) => Action::Apply(op),
            Err(_) => Action::Unknown(line.to_string()),
        },
    };

    Some(action)
}

/// Run a session until `quit` or end of input.
///
/// When `prompt` is set a `> ` prompt is written before each line.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    mut out: W,
    locale: Locale,
    prompt: bool,
) -> Result<Calculator> {
    let mut calc = Calculator::new();
    let mut lines = input.lines();

    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let Some(action) = parse_action(&line) else {
            continue;
        };
        trace!(?action, "session action");

        match action {
            Action::SetFirst(text) => calc.set_first(text),
            Action::SetSecond(text) => calc.set_second(text),
            Action::Apply(op) => match calc.apply(op) {
                Ok(display) => writeln!(out, "= {}", display)?,
                Err(err) => writeln!(out, "! {}", err.message(locale))?,
            },
            Action::Show => {
                writeln!(out, "a: {}", calc.first())?;
                writeln!(out, "b: {}", calc.second())?;
                match calc.last_operation() {
                    Some(op) => writeln!(out, "= {} ({})", calc.display(), op.label(locale))?,
                    None => writeln!(out, "= {}", calc.display())?,
                }
            }
            Action::Clear => {
                calc.clear();
                writeln!(out, "= {}", calc.display())?;
            }
            Action::Help => writeln!(out, "{}", HELP)?,
            Action::Quit => break,
            Action::Unknown(text) => writeln!(out, "? {}", text)?,
        }
    }

    Ok(calc)
}
