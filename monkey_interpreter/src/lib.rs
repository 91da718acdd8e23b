pub mod environment;
pub mod error;
pub mod interpreter;
pub mod object;
pub mod repl;

use interpreter::Interpreter;
use monkey_parser::ParseErrors;
use object::Object;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub use monkey_ast as ast;

/// Why a source file could not be run. Runtime faults are not listed here:
/// they are a normal evaluation result (`Object::Error`).
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Error reading file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseErrors),
}

impl Interpreter {
    pub fn eval_source(&self, source: &str) -> Result<Object, ParseErrors> {
        let program = monkey_parser::parse(source).inspect_err(|errors| {
            debug!(count = errors.len(), "source failed to parse");
        })?;
        Ok(self.eval(&program))
    }

    pub fn eval_file(&self, path: &Path) -> Result<Object, RunError> {
        let source = read_source(path)?;
        Ok(self.eval_source(&source)?)
    }
}

/// Reads a program from disk, naming the file in the error.
pub fn read_source(path: &Path) -> Result<String, RunError> {
    fs::read_to_string(path).map_err(|source| RunError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses and evaluates `source` in a fresh top-level environment.
pub fn eval_source(source: &str) -> Result<Object, ParseErrors> {
    Interpreter::new().eval_source(source)
}
