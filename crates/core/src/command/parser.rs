//! Command grammar
//!
//! ```text
//! active|inactive <num> [<num> ...]
//! add|plus|adds|at <name words>
//! remove|minus|removes <name words>
//! ```
//!
//! Only the keyword is case-folded. Operands keep their case; name words are
//! re-joined with single spaces. Unknown keywords parse to
//! [`Command::Ignored`], and non-numeric status operands are skipped one by
//! one so a mis-heard word never drops the numbers around it.

use boardcount_domain::{SlotNumber, SlotStatus};
use serde::Serialize;

/// Keywords that append a named slot. "at" and "adds" are common
/// transcriptions of "add".
pub const ADD_KEYWORDS: [&str; 4] = ["add", "plus", "adds", "at"];

/// Keywords that remove named slots
pub const REMOVE_KEYWORDS: [&str; 3] = ["remove", "minus", "removes"];

/// A recognized command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Command {
    /// `active`/`inactive` followed by slot numbers
    Status { keyword: SlotStatus, numbers: Vec<SlotNumber> },
    Add { name: String },
    Remove { name: String },
    /// Unrecognized keyword, or blank input (empty keyword)
    Ignored { keyword: String },
}

/// Parse result with the operand tokens that could not be used
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCommand {
    pub command: Command,
    pub skipped: Vec<String>,
}

/// Parse one command line. Never fails.
pub fn parse(input: &str) -> ParsedCommand {
    let mut tokens = input.split_whitespace();
    let keyword = tokens.next().unwrap_or_default().to_lowercase();
    let operands: Vec<&str> = tokens.collect();

    let mut skipped = Vec::new();
    let command = match keyword.as_str() {
        "active" | "inactive" => {
            let numbers = operands
                .iter()
                .filter_map(|token| match token.parse::<SlotNumber>() {
                    Ok(number) => Some(number),
                    Err(_) => {
                        skipped.push((*token).to_string());
                        None
                    }
                })
                .collect();
            let keyword =
                if keyword == "active" { SlotStatus::Active } else { SlotStatus::Inactive };
            Command::Status { keyword, numbers }
        }
        k if ADD_KEYWORDS.contains(&k) => Command::Add { name: operands.join(" ") },
        k if REMOVE_KEYWORDS.contains(&k) => Command::Remove { name: operands.join(" ") },
        _ => Command::Ignored { keyword: keyword.clone() },
    };

    ParsedCommand { command, skipped }
}
