// src/input/tokens.rs

use std::collections::VecDeque;
use std::io::{BufRead, ErrorKind};

use tracing::trace;

use crate::errors::{GraphError, Result};

/// Lazy integer tokenizer over any buffered reader.
///
/// A new line is only pulled from the underlying reader once every token of
/// the previous line has been consumed.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
    line: String,
    exhausted: bool,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: String::new(),
            exhausted: false,
        }
    }

    /// Next raw token, or `None` at end of input.
    fn next_raw(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            if self.exhausted {
                return Ok(None);
            }
            self.line.clear();
            let read = self.reader.read_line(&mut self.line).map_err(|err| {
                match err.kind() {
                    ErrorKind::InvalidData => {
                        GraphError::InvalidInput(format!("input is not valid UTF-8: {err}"))
                    }
                    _ => GraphError::IoError(err),
                }
            })?;
            if read == 0 {
                self.exhausted = true;
                return Ok(None);
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Next integer, or `None` if the input ended cleanly.
    pub fn next_int_opt(&mut self, what: &str) -> Result<Option<i64>> {
        match self.next_raw()? {
            None => Ok(None),
            Some(tok) => {
                trace!(token = %tok, what, "read token");
                tok.parse::<i64>().map(Some).map_err(|_| {
                    GraphError::InvalidInput(format!("expected integer for {what}, got {tok:?}"))
                })
            }
        }
    }

    /// Next integer; end of input is an error naming what was expected.
    pub fn next_int(&mut self, what: &str) -> Result<i64> {
        self.next_int_opt(what)?.ok_or_else(|| GraphError::UnexpectedEof {
            expected: what.to_string(),
        })
    }
}
