//! Commands typed by the user on stdin.
//!
//! One command per line, keywords are case-insensitive:
//!
//! ```text
//! search <text>          filter by substring (empty text clears the filter)
//! sort <name|price> <asc|desc>
//! fav <SYMBOL>           toggle a favourite
//! show                   print the board again
//! quit                   close the connection and exit
//! ```
use crate::projector::{SortCommand, SortDirection, SortField};
use price_common::{BoardError, Symbol};
use std::str::FromStr;

/// A parsed user action.
#[derive(Debug, Clone, PartialEq)]
pub enum UserCommand {
    /// New search term.
    Search(String),
    /// Sort arrow click.
    Sort(SortCommand),
    /// Star click.
    ToggleFavourite(Symbol),
    /// Re-render.
    Show,
    /// Teardown.
    Quit,
}

impl FromStr for UserCommand {
    type Err = BoardError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        match keyword.to_ascii_lowercase().as_str() {
            "search" => Ok(UserCommand::Search(rest.to_string())),
            "sort" => {
                let mut args = rest.split_whitespace();
                let (Some(field), Some(direction), None) = (args.next(), args.next(), args.next())
                else {
                    return Err(BoardError::InvalidCommand(format!(
                        "usage: sort <name|price> <asc|desc>, got {:?}",
                        line
                    )));
                };
                let field = SortField::from_str(field)
                    .map_err(|e| BoardError::InvalidCommand(format!("{}: {}", field, e)))?;
                let direction = SortDirection::from_str(direction)
                    .map_err(|e| BoardError::InvalidCommand(format!("{}: {}", direction, e)))?;
                Ok(UserCommand::Sort(SortCommand::new(field, direction)))
            }
            "fav" => {
                if rest.is_empty() || rest.contains(char::is_whitespace) {
                    return Err(BoardError::InvalidCommand("usage: fav <SYMBOL>".to_string()));
                }
                Ok(UserCommand::ToggleFavourite(Symbol::from(rest)))
            }
            "show" if rest.is_empty() => Ok(UserCommand::Show),
            "quit" | "exit" if rest.is_empty() => Ok(UserCommand::Quit),
            _ => Err(BoardError::InvalidCommand(line.to_string())),
        }
    }
}
