use std::io::{self, BufRead, Write};

/// Console wrapper around a reader/writer pair.
///
/// The session loop only ever talks to the terminal through this type, so
/// tests can script a whole run with a `Cursor` reader and a `Vec<u8>` writer.
/// Every `read_*` helper returns `Ok(None)` once the reader hits end of
/// input, which the caller treats as a quit.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Console { reader, writer }
    }

    /// Consume the console and hand back the writer. Used by tests to
    /// inspect everything a scripted session printed.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Print a line of output (results, error messages).
    pub fn writeln(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)
    }

    /// Print `prompt` without a trailing newline, flush, and read one line.
    /// The returned line is trimmed.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt for a whole number, printing `error` and re-prompting until
    /// one parses.
    pub fn read_i32(&mut self, prompt: &str, error: &str) -> io::Result<Option<i32>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<i32>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.writeln(error)?,
            }
        }
    }

    /// Prompt for a yes/no answer. Accepts `y`/`yes`/`n`/`no` in any case
    /// and re-prompts on anything else.
    pub fn read_yes_no(&mut self, prompt: &str) -> io::Result<Option<bool>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                other => self.writeln(&format!("\nError: \"{}\" is not a valid selection.", other))?,
            }
        }
    }
}
