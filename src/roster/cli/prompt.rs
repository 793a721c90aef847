use colored::Colorize;
use roster::error::Result;
use roster::validation::parse_confirmation;
use std::io::{BufRead, Write};

/// Line-oriented question/answer over any reader and writer.
///
/// Every `ask*` method returns `Ok(None)` once the input is exhausted; callers
/// treat that as the user leaving.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn write(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Reads one answer. A line that is not valid UTF-8 is refused and asked again.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            self.write(prompt)?;
            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            match String::from_utf8(buf) {
                Ok(line) => return Ok(Some(line.trim_end_matches(['\r', '\n']).to_string())),
                Err(_) => {
                    let msg = "Input is not valid text. Please try again.";
                    self.say(&msg.yellow().to_string())?;
                }
            }
        }
    }

    /// Re-asks `prompt` until `parse` accepts the answer, echoing each rejection.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Result<T>,
    ) -> Result<Option<T>> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    let msg = format!("{}. Please try again.", e);
                    self.say(&msg.yellow().to_string())?;
                }
            }
        }
    }

    /// `(y/n)` question. End of input counts as no.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self
            .ask(&format!("{} (y/n)  ", prompt))?
            .map(|answer| parse_confirmation(&answer))
            .unwrap_or(false))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster::validation::parse_employee_id;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn ask_strips_line_endings() {
        let mut p = prompter("hello\r\n");
        assert_eq!(p.ask("> ").unwrap(), Some("hello".to_string()));
        assert_eq!(p.ask("> ").unwrap(), None);
    }

    #[test]
    fn ask_until_retries() {
        let mut p = prompter("abc\n\n12\n");
        let id = p.ask_until("ID: ", parse_employee_id).unwrap();
        assert_eq!(id, Some(12));

        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out.matches("ID: ").count(), 3);
        assert!(out.contains("Please try again."));
    }

    #[test]
    fn ask_until_stops_at_end_of_input() {
        let mut p = prompter("abc\n");
        assert_eq!(p.ask_until("ID: ", parse_employee_id).unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_asked_again() {
        let mut p = Prompter::new(Cursor::new(b"\xff\xfe\n7\n".to_vec()), Vec::new());
        assert_eq!(p.ask("> ").unwrap(), Some("7".to_string()));

        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out.matches("> ").count(), 2);
        assert!(out.contains("not valid text"));
    }

    #[test]
    fn confirm_answers() {
        let mut p = prompter("y\nn\n");
        assert!(p.confirm("Again?").unwrap());
        assert!(!p.confirm("Again?").unwrap());
        assert!(!p.confirm("Again?").unwrap());
    }
}
