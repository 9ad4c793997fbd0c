use std::io::{self, BufRead, Write};

/// Blocking yes/no confirmation before the archive is modified.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Ask on `output`, read a single character from `input`. `y` or `Y`
/// confirms; anything else, including end of input, declines.
pub struct StreamConfirm<R, W> {
    input:  R,
    output: W,
}

impl<R: BufRead, W: Write> StreamConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl StreamConfirm<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for StreamConfirm<R, W> {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{question} [y/N] ")?;
        self.output.flush()?;

        // Only the first byte is consumed; the rest of the line stays
        // buffered. A run asks exactly one question.
        let first = self.input.fill_buf()?.first().copied();
        let Some(answer) = first else {
            return Ok(false);
        };
        self.input.consume(1);
        Ok(matches!(answer, b'y' | b'Y'))
    }
}

/// Answers every question the same way.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&mut self, _question: &str) -> io::Result<bool> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(input: &[u8]) -> (bool, String) {
        let mut out = Vec::new();
        let answer = StreamConfirm::new(input, &mut out).confirm("Append?").unwrap();
        (answer, String::from_utf8(out).unwrap())
    }

    #[test]
    fn only_y_confirms() {
        assert_eq!(ask(b"y\n"), (true, "Append? [y/N] ".to_string()));
        assert!(ask(b"Yes").0);
        assert!(!ask(b"n\n").0);
        assert!(!ask(b"\n").0);
        assert!(!ask(b" y").0);
        assert!(!ask(b"").0);
    }
}
