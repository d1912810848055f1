use crate::hlt::error::ProtocolError;
use std::io::BufRead;

/// Line-at-a-time tokenizer over the environment's stdin.
pub struct Input<R: BufRead> {
    reader: R,
    tokens: Vec<String>,
    current_token: usize,
}

impl<R: BufRead> Input<R> {
    pub fn new(reader: R) -> Input<R> {
        Input {
            reader,
            tokens: Vec::new(),
            current_token: 0,
        }
    }

    /// Loads the next line. `Ok(false)` means the pipe was closed.
    pub fn try_read_line(&mut self) -> Result<bool, ProtocolError> {
        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            return Ok(false);
        }
        self.tokens = buffer.split_whitespace().map(String::from).collect();
        self.current_token = 0;
        Ok(true)
    }

    pub fn read_line(&mut self, what: &'static str) -> Result<(), ProtocolError> {
        if self.try_read_line()? {
            Ok(())
        } else {
            Err(ProtocolError::UnexpectedEof(what))
        }
    }

    pub fn next_usize(&mut self, what: &'static str) -> Result<usize, ProtocolError> {
        let token = match self.tokens.get(self.current_token) {
            Some(token) => token,
            None => return Err(ProtocolError::UnexpectedEof(what)),
        };
        self.current_token += 1;
        parse_usize(token, what)
    }

    /// Every token left on the current line.
    pub fn rest_of_line(&mut self, what: &'static str) -> Result<Vec<usize>, ProtocolError> {
        let rest = self.tokens[self.current_token..]
            .iter()
            .map(|token| parse_usize(token, what))
            .collect();
        self.current_token = self.tokens.len();
        rest
    }

    pub fn line(&self) -> String {
        self.tokens.join(" ")
    }
}

pub fn parse_usize(token: &str, what: &'static str) -> Result<usize, ProtocolError> {
    token.parse().map_err(|_| ProtocolError::InvalidNumber {
        what,
        token: token.to_string(),
    })
}
