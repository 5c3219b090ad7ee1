//! Menu choices and line-oriented prompts.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Play,
    Delete,
    Add,
    Search,
    Rescan,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" | "l" | "list" => Some(Self::List),
            "2" | "p" | "play" => Some(Self::Play),
            "3" | "d" | "delete" => Some(Self::Delete),
            "4" | "a" | "add" => Some(Self::Add),
            "5" | "/" | "search" => Some(Self::Search),
            "6" | "r" | "rescan" => Some(Self::Rescan),
            "0" | "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Outcome of a prompt that expects a parsed value.
#[derive(Debug, PartialEq, Eq)]
pub enum Answer<T> {
    Value(T),
    /// The line did not parse; holds the trimmed input.
    Invalid(String),
    /// Input is exhausted.
    Eof,
}

/// Print `label` and read one line. `None` at end of input.
///
/// Bytes that are not valid UTF-8 are replaced rather than treated as an error.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

pub fn prompt_parsed<T: FromStr, R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Answer<T>> {
    Ok(match prompt_line(input, out, label)? {
        None => Answer::Eof,
        Some(line) => match line.trim().parse::<T>() {
            Ok(v) => Answer::Value(v),
            Err(_) => Answer::Invalid(line.trim().to_string()),
        },
    })
}
