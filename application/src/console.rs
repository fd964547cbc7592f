//! [`Console`] definitions.

use std::io::{self, BufRead, Write};

use service::form::{self, Input};

/// Line-oriented [`Input`] asking prompts on a writer and reading answers
/// from a reader.
#[derive(Debug)]
pub struct Console<R, W> {
    /// Reader of the answers.
    input: R,

    /// Writer of the prompts and any other output.
    output: W,
}

impl<R, W> Console<R, W> {
    /// Creates a new [`Console`] over the provided reader and writer.
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the writer of this [`Console`].
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes this [`Console`] returning its reader and writer.
    #[must_use]
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Input for Console<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String, form::Error> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(form::Error::Closed);
        }
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_owned())
    }
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Creates a new [`Console`] over the standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

#[cfg(test)]
mod spec {
    use std::io::Cursor;

    use service::form::{self, Input as _};

    use super::Console;

    #[test]
    fn writes_prompt_and_reads_line() {
        let mut console = Console::new(Cursor::new("1200\r\n3\n2"), Vec::new());

        assert_eq!(console.ask("Enter the square feet: ").unwrap(), "1200");
        assert_eq!(console.ask("Enter number of bedrooms: ").unwrap(), "3");
        assert_eq!(console.ask("Enter number of baths: ").unwrap(), "2");

        let (_, output) = console.into_parts();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Enter the square feet: \
             Enter number of bedrooms: \
             Enter number of baths: ",
        );
    }

    #[test]
    fn keeps_inner_whitespace() {
        let mut console = Console::new(Cursor::new("  12 00 \n"), Vec::new());

        assert_eq!(console.ask("? ").unwrap(), "  12 00 ");
    }

    #[test]
    fn closes_on_end_of_input() {
        let mut console = Console::new(Cursor::new("yes\n"), Vec::new());

        assert_eq!(console.ask("? ").unwrap(), "yes");
        assert!(matches!(console.ask("? "), Err(form::Error::Closed)));
    }

    #[test]
    fn empty_line_is_an_answer() {
        let mut console = Console::new(Cursor::new("\n"), Vec::new());

        assert_eq!(console.ask("? ").unwrap(), "");
    }
}
