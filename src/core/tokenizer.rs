// File: src/core/tokenizer.rs
use crate::core::charmap::{is_diacritic, is_digit, is_latin_letter, is_script_letter, normalize};
use crate::error::Result;
use std::io::BufRead;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    InLatin,
    InScript,
    InNumber,
}

/// A forward-only, script-aware word splitter.
///
/// Feed it one code point at a time; completed words come back from
/// [`Tokenizer::feed`] and the trailing word from [`Tokenizer::finish`].
pub struct Tokenizer {
    state: State,
    buffer: String,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self { state: State::Start, buffer: String::new() }
    }

    /// Consumes `ch`, returning a word if `ch` terminated one.
    pub fn feed(&mut self, ch: char) -> Option<String> {
        let keeps_word = match self.state {
            State::Start => {
                self.start(ch);
                return None;
            }
            State::InLatin => is_latin_letter(ch),
            State::InScript => {
                if is_diacritic(ch) {
                    return None;
                }
                is_script_letter(ch)
            }
            State::InNumber => is_digit(ch),
        };

        if keeps_word {
            self.buffer.push(normalize(ch));
            return None;
        }

        // The terminating code point is re-evaluated from Start.
        let word = std::mem::take(&mut self.buffer);
        self.state = State::Start;
        self.start(ch);
        Some(word)
    }

    /// Flushes the word in progress, if any.
    pub fn finish(&mut self) -> Option<String> {
        self.state = State::Start;
        if self.buffer.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.buffer))
        }
    }

    fn start(&mut self, ch: char) {
        let next = if is_latin_letter(ch) {
            State::InLatin
        } else if is_script_letter(ch) {
            State::InScript
        } else if is_digit(ch) {
            State::InNumber
        } else {
            // Unknown runes and stray diacritics are dropped.
            return;
        };
        self.buffer.push(normalize(ch));
        self.state = next;
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits an in-memory string into normalized words.
pub fn tokenize_str(text: &str) -> Vec<String> {
    let mut tokenizer = Tokenizer::new();
    let mut words: Vec<String> = text.chars().filter_map(|ch| tokenizer.feed(ch)).collect();
    words.extend(tokenizer.finish());
    words
}

/// Reads `reader` to the end and splits it into normalized words.
///
/// Input is consumed line by line; tokenizer state carries across line
/// breaks. Malformed UTF-8 decodes to U+FFFD and is dropped like any other
/// unknown code point. Only read failures abort with an error.
pub fn tokenize<R: BufRead>(mut reader: R) -> Result<Vec<String>> {
    let mut tokenizer = Tokenizer::new();
    let mut words = Vec::new();
    let mut line = Vec::new();

    // A newline byte never occurs inside a multi-byte sequence, so decoding
    // line by line cannot split a valid code point.
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        words.extend(String::from_utf8_lossy(&line).chars().filter_map(|ch| tokenizer.feed(ch)));
    }

    words.extend(tokenizer.finish());
    Ok(words)
}
