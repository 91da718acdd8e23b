mod line_reader;

use clap::Parser;
use line_reader::{LineReadStatus, LineReader};
use monkey_interpreter::interpreter::Interpreter;
use monkey_interpreter::object::Object;
use monkey_interpreter::repl::{self, Flow, Mode, Session};
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "monkey")]
#[command(about = "Interpreter for the Monkey programming language")]
struct Cli {
    /// Program to run; starts the interactive shell when omitted
    file: Option<PathBuf>,
    /// Print tokens instead of evaluating
    #[arg(long)]
    tokens: bool,
    /// Print the parsed program as JSON instead of evaluating it
    #[arg(long, conflicts_with = "tokens")]
    ast: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mode = if cli.tokens { Mode::Tokens } else { Mode::Evaluate };

    match &cli.file {
        Some(path) if cli.ast => dump_ast(path),
        Some(path) if mode == Mode::Tokens => dump_tokens(path),
        Some(path) => run_file(path),
        None => run_shell(mode),
    }
}

fn run_file(path: &Path) -> ExitCode {
    match Interpreter::new().eval_file(path) {
        Ok(Object::Error(message)) => {
            eprintln!("Runtime error: {}", message);
            ExitCode::FAILURE
        }
        Ok(value) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn read_source(path: &Path) -> Option<String> {
    monkey_interpreter::read_source(path)
        .inspect_err(|e| eprintln!("{}", e))
        .ok()
}

fn dump_ast(path: &Path) -> ExitCode {
    let Some(source) = read_source(path) else {
        return ExitCode::FAILURE;
    };
    let program = match monkey_parser::parse(&source) {
        Ok(program) => program,
        Err(errors) => {
            eprintln!("Parsing error: {}", errors);
            return ExitCode::FAILURE;
        }
    };
    match serde_json::to_string_pretty(&program) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing AST: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn dump_tokens(path: &Path) -> ExitCode {
    let Some(source) = read_source(path) else {
        return ExitCode::FAILURE;
    };
    match repl::write_tokens(&source, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn history_path() -> PathBuf {
    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(".monkey_history")
}

fn run_shell(mode: Mode) -> ExitCode {
    let mut reader = match LineReader::new(history_path(), repl::PROMPT) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("Could not start line editor ({}), reading plain stdin", e);
            return match repl::start(io::stdin().lock(), io::stdout(), mode) {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            };
        }
    };

    let session = Session::new(mode);
    let mut stdout = io::stdout();
    while let LineReadStatus::Line(line) = reader.readline() {
        match session.respond(&line, &mut stdout) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
