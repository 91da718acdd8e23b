//! Line-oriented shell plumbing shared by the `monkey` binary and tests.

use crate::interpreter::Interpreter;
use crate::object::Object;
use monkey_parser::{Lexer, ParseErrors, Token};
use std::io::{self, BufRead, Write};
use tracing::info;

pub const PROMPT: &str = ">> ";

/// What the shell does with each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Parse and evaluate the line, printing the resulting object.
    #[default]
    Evaluate,
    /// Print the tokens of the line.
    Tokens,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One interactive session. Every line is evaluated in the same top-level
/// environment, so `let` bindings carry over between lines.
pub struct Session {
    interpreter: Interpreter,
    mode: Mode,
}

impl Session {
    pub fn new(mode: Mode) -> Self {
        info!(?mode, "starting session");
        Session {
            interpreter: Interpreter::new(),
            mode,
        }
    }

    pub fn eval_line(&self, line: &str) -> Result<Object, ParseErrors> {
        self.interpreter.eval_source(line)
    }

    /// Handles one input line, writing the response to `out`.
    pub fn respond<W: Write>(&self, line: &str, out: &mut W) -> io::Result<Flow> {
        if line.trim() == "exit" {
            writeln!(out, "Goodbye!")?;
            return Ok(Flow::Exit);
        }

        match self.mode {
            Mode::Tokens => write_tokens(line, out)?,
            Mode::Evaluate => match self.eval_line(line) {
                Ok(object) => writeln!(out, "{}", object)?,
                Err(errors) => write_parse_errors(&errors, out)?,
            },
        }
        Ok(Flow::Continue)
    }
}

pub fn write_tokens<W: Write>(source: &str, out: &mut W) -> io::Result<()> {
    for token in Lexer::new(source).take_while(|t| *t != Token::Eof) {
        writeln!(out, "{:?}", token)?;
    }
    Ok(())
}

pub fn write_parse_errors<W: Write>(errors: &ParseErrors, out: &mut W) -> io::Result<()> {
    writeln!(out, "parser errors:")?;
    for err in errors.iter() {
        writeln!(out, "\t{}", err)?;
    }
    Ok(())
}

/// Runs a shell over plain reader/writer streams until end of input or
/// `exit`.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W, mode: Mode) -> io::Result<()> {
    let session = Session::new(mode);
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        if session.respond(&line, &mut output)? == Flow::Exit {
            return Ok(());
        }
    }
}
