//! Shell command parsing

use thiserror::Error;

pub const HELP: &str = "\
Commands:
  country <name|number>   choose a country
  city <name|number>      choose a city of the selected country
  submit                  fetch today's prayer times (alias: get)
  countries               list countries
  cities                  list cities of the selected country
  show                    redraw the form
  help                    show this help
  quit                    leave (alias: exit)";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Country(String),
    City(String),
    Submit,
    Countries,
    Cities,
    Show,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("Unknown command: {0} (type `help`)")]
    UnknownCommand(String),

    #[error("Usage: {0} <name|number>")]
    MissingArgument(&'static str),
}

/// Parse a line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, ShellError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "country" => Command::Country(argument(rest, "country")?),
        "city" => Command::City(argument(rest, "city")?),
        "submit" | "get" => Command::Submit,
        "countries" => Command::Countries,
        "cities" => Command::Cities,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(ShellError::UnknownCommand(word.to_string())),
    };
    Ok(Some(command))
}

fn argument(rest: &str, name: &'static str) -> Result<String, ShellError> {
    if rest.is_empty() {
        Err(ShellError::MissingArgument(name))
    } else {
        Ok(rest.to_string())
    }
}

/// Resolve a 1-based listing number to its entry; anything else passes through
pub fn resolve_choice<'a>(arg: &'a str, options: &[&'a str]) -> &'a str {
    match arg.trim().parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => options[n - 1],
        _ => arg,
    }
}
