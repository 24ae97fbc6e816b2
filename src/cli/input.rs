//! Line sources feeding the shell: a line editor for people, plain stdin for scripts.

use std::io::{self, BufRead, Write};

use rustyline::{error::ReadlineError, DefaultEditor};

use super::shell_context::CommandError;

/// Supplies one line of user input per prompt.
pub trait LineSource {
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CommandError>;
}

/// Interactive input backed by `rustyline`, with in-session history.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self, ReadlineError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CommandError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str()).ok();
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Interrupted) => Err(CommandError::Interrupted),
            Err(err) => Err(err.into()),
        }
    }
}

/// Reads newline-separated answers from any buffered reader, echoing prompts to stdout.
pub struct ScriptSource<R> {
    reader: R,
}

impl<R: BufRead> ScriptSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ScriptSource<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CommandError> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            println!();
            return Ok(None);
        }
        let line = buffer.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string();
        println!();
        Ok(Some(line))
    }
}
