//! Fixed startup constants: crate version, REPL prompt, history file.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PROMPT: &str = "lispy> ";
pub const HISTORY_FILE: &str = ".lispy_history";
