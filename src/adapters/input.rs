use crate::domain::ports::MarksSource;
use crate::utils::error::{EvalError, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

pub const DEFAULT_PROMPT: &str = "Enter marks: ";

/// Prompts on `writer`, then scans whitespace-delimited tokens from `reader`.
///
/// Blank lines are skipped. Tokens left over on a line are kept for the
/// next read. Bytes are split as-is, so a token that is not UTF-8 is a
/// format error rather than an I/O failure.
pub struct PromptedReader<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    pending: VecDeque<Vec<u8>>,
}

impl<R: BufRead, W: Write> PromptedReader<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn next_token(&mut self) -> Result<Vec<u8>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Err(EvalError::InputExhausted);
            }
            self.pending.extend(
                line.split(|b| b.is_ascii_whitespace())
                    .filter(|token| !token.is_empty())
                    .map(<[u8]>::to_vec),
            );
        }
    }
}

fn parse_marks(token: &[u8]) -> Result<i32> {
    std::str::from_utf8(token)
        .ok()
        .and_then(|text| text.parse::<i32>().ok())
        .ok_or_else(|| {
            let token = String::from_utf8_lossy(token).into_owned();
            tracing::debug!("Rejected token '{}'", token);
            EvalError::InputFormat { token }
        })
}

impl<R: BufRead, W: Write> MarksSource for PromptedReader<R, W> {
    fn read_marks(&mut self) -> Result<i32> {
        self.writer.write_all(DEFAULT_PROMPT.as_bytes())?;
        self.writer.flush()?;

        let token = self.next_token()?;
        parse_marks(&token)
    }
}
