use std::io::BufRead;

/// The syntactic class of a token, determined purely by its spelling (the
/// parser never needs to have seen prior tokens to classify one).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenClass {
    Eof,
    /// A token ending in `:` --- the trailing colon is part of the token text.
    Category,
    If,
    Prop,
    Except,
    Error,
    Single,
    Value,
}

pub fn classify(token: &str) -> TokenClass {
    match token {
        "if" => TokenClass::If,
        "prop" => TokenClass::Prop,
        "except" => TokenClass::Except,
        "error" => TokenClass::Error,
        "single" => TokenClass::Single,
        _ if token.ends_with(':') => TokenClass::Category,
        _ => TokenClass::Value,
    }
}

/// Lazily yields whitespace-separated tokens from `text`, one line at a
/// time, with `//`-to-end-of-line comments stripped.
///
/// A real deployment reads from stdin line by line rather than buffering
/// the whole stream; this tokenizer is generic over any [BufRead] for that
/// reason, but is equally happy handed an in-memory string wrapped in
/// [std::io::Cursor] (as the tests do).
pub struct Tokenizer<R: BufRead> {
    reader: R,
    pending: std::vec::IntoIter<String>,
    eof: bool,
}

impl<R: BufRead> Tokenizer<R> {
    pub fn new(reader: R) -> Self {
        Tokenizer {
            reader,
            pending: Vec::new().into_iter(),
            eof: false,
        }
    }

    fn refill(&mut self) -> std::io::Result<()> {
        loop {
            let mut line = String::new();
            let bytes_read = self.reader.read_line(&mut line)?;
            if bytes_read == 0 {
                self.eof = true;
                return Ok(());
            }
            let line = match line.find("//") {
                Some(pos) => &line[..pos],
                None => &line[..],
            };
            let words: Vec<String> = line.split_whitespace().map(str::to_owned).collect();
            if !words.is_empty() {
                self.pending = words.into_iter();
                return Ok(());
            }
            // Blank (or comment-only) line: keep reading.
        }
    }
}

impl<R: BufRead> Iterator for Tokenizer<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(tok) = self.pending.next() {
                return Some(tok);
            }
            if self.eof {
                return None;
            }
            // An I/O error reading a later line is treated as end of input;
            // read_spec has already validated the reader is usable.
            if self.refill().is_err() {
                self.eof = true;
                return None;
            }
        }
    }
}

pub fn tokenize(text: &str) -> Tokenizer<std::io::Cursor<&str>> {
    Tokenizer::new(std::io::Cursor::new(text))
}
