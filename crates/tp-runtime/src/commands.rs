//! Line commands of the interactive form session.
//!
//! ```text
//! region <text>        city <text>        street <text>        house <text>
//! pick <field> <n>     building <text>    apartment <text>
//! show | finalize | fields | reset | help | quit
//! ```

use std::str::FromStr;
use thiserror::Error;
use tp_02_address_resolver::AddressField;

/// Usage text printed by `help`.
pub const HELP: &str = "\
commands:
  region|city|street|house <text>   type into a field
  pick <field> <n>                  accept candidate n (1-based) on a field
  building <text>                   manual building / block
  apartment <text>                  manual apartment
  show                              print the full-address label
  finalize                          print the full address and validation result
  fields                            print the hand-off mapping as JSON
  reset                             clear the form
  quit                              leave";

/// Errors from parsing a session line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The first word is not a command.
    #[error("unknown command '{0}', type 'help'")]
    Unknown(String),

    /// `pick` without a usable field or index.
    #[error("usage: pick <field> <n>")]
    BadPick,
}

/// One parsed session line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    /// Replace a field's text.
    Edit {
        /// Field typed into
        field: AddressField,
        /// New text, possibly empty
        text: String,
    },
    /// Accept a displayed candidate; `index` is zero-based.
    Pick {
        /// Field the candidate belongs to
        field: AddressField,
        /// Zero-based position in the displayed list
        index: usize,
    },
    /// Manual building.
    Building(String),
    /// Manual apartment.
    Apartment(String),
    /// Print the full-address label.
    Show,
    /// Print the full address and validate it.
    Finalize,
    /// Print the hand-off mapping.
    Fields,
    /// Clear the form.
    Reset,
    /// Print usage.
    Help,
    /// Leave the session.
    Quit,
    /// Blank line.
    Nothing,
}

impl FromStr for FormCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "" => FormCommand::Nothing,
            "pick" => parse_pick(rest)?,
            "building" => FormCommand::Building(rest.to_string()),
            "apartment" => FormCommand::Apartment(rest.to_string()),
            "show" => FormCommand::Show,
            "finalize" => FormCommand::Finalize,
            "fields" => FormCommand::Fields,
            "reset" => FormCommand::Reset,
            "help" | "?" => FormCommand::Help,
            "quit" | "exit" => FormCommand::Quit,
            other => match other.parse::<AddressField>() {
                Ok(field) => FormCommand::Edit {
                    field,
                    text: rest.to_string(),
                },
                Err(_) => return Err(CommandError::Unknown(other.to_string())),
            },
        };
        Ok(command)
    }
}

fn parse_pick(rest: &str) -> Result<FormCommand, CommandError> {
    let mut words = rest.split_whitespace();
    let field = words
        .next()
        .and_then(|w| w.parse::<AddressField>().ok())
        .ok_or(CommandError::BadPick)?;
    let number = words
        .next()
        .and_then(|w| w.parse::<usize>().ok())
        .filter(|n| *n > 0)
        .ok_or(CommandError::BadPick)?;

    Ok(FormCommand::Pick {
        field,
        index: number - 1,
    })
}
