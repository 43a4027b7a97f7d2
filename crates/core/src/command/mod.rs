//! Free-text command interpretation
//!
//! Commands arrive as short phrases, usually from speech transcription
//! ("active 3 7 12", "add john smith"). Parsing is a pure step; the
//! interpreter then applies the parsed command to a [`RosterStore`].
//!
//! [`RosterStore`]: crate::RosterStore

pub mod interpreter;
pub mod parser;
pub mod ports;

pub use interpreter::{CommandInterpreter, CommandReport};
pub use parser::{parse, Command, ParsedCommand, ADD_KEYWORDS, REMOVE_KEYWORDS};
