//! Line-oriented console I/O
//!
//! The command loop talks to a [`Console`]; the binary picks a line editor
//! when stdin is a terminal and plain buffered reads otherwise.

use std::io::{BufRead, Write};

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::error::{CliError, CliResult};

/// Source of input lines and sink for output
pub trait Console {
    /// Show `prompt` and read one line without its terminator
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> CliResult<Option<String>>;

    /// Write `text` followed by a newline
    fn print(&mut self, text: &str) -> CliResult<()>;
}

/// Console over any buffered reader and writer
///
/// Prompts are written to the same writer as output, which keeps scripted
/// sessions readable.
pub struct BufferedConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> BufferedConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the console and return the writer
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for BufferedConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> CliResult<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn print(&mut self, text: &str) -> CliResult<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }
}

/// Interactive console backed by a line editor with history
pub struct EditorConsole {
    editor: DefaultEditor,
}

impl EditorConsole {
    pub fn new() -> CliResult<Self> {
        let editor = DefaultEditor::new().map_err(|e| CliError::Readline(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl Console for EditorConsole {
    fn read_line(&mut self, prompt: &str) -> CliResult<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(CliError::Readline(e.to_string())),
        }
    }

    fn print(&mut self, text: &str) -> CliResult<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", text)?;
        Ok(())
    }
}
