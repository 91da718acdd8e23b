use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::Editor;
use std::path::PathBuf;

/// Line-edited input for the interactive shell, with history persisted
/// between runs.
pub struct LineReader {
    rl: Editor<(), FileHistory>,
    history_file: PathBuf,
    prompt: String,
}

impl Drop for LineReader {
    fn drop(&mut self) {
        self.rl.save_history(&self.history_file).ok();
    }
}

pub enum LineReadStatus {
    Line(String),
    Done,
}

impl LineReader {
    pub fn new(history_file: PathBuf, prompt: &str) -> rustyline::Result<LineReader> {
        let mut rl = Editor::<(), FileHistory>::new()?;
        rl.load_history(&history_file).ok();
        Ok(LineReader {
            rl,
            history_file,
            prompt: prompt.into(),
        })
    }

    pub fn readline(&mut self) -> LineReadStatus {
        match self.rl.readline(&self.prompt) {
            Ok(line) => {
                self.rl.add_history_entry(line.as_str()).ok();
                LineReadStatus::Line(line)
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => LineReadStatus::Done,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read line");
                LineReadStatus::Done
            }
        }
    }
}
