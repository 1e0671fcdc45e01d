//! Rust-level errors for host boundary failures.
//!
//! `InterpError` covers faults that happen *before* a value ever enters the
//! evaluator: a script file that can't be read, a malformed source file. It is
//! deliberately not used to represent language-level errors — those are
//! `V::Err` values, constructed directly by the reader, evaluator, and
//! builtins (see `src/value.rs`, `src/eval.rs`, `src/builtins/`).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InterpError {
    #[error("could not read '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Parse(String),
}
