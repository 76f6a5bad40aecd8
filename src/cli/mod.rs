pub mod commands;
pub mod completion;
pub mod script;

pub use commands::{Cli, Command, CompleteCommand, ListCommand, ScriptCommand, ValidateCommand};
pub use completion::{CandidateKind, CompletionRequest, Matched, Resolution, resolve, resolve_detailed};
pub use script::{Shell, generate_script};
