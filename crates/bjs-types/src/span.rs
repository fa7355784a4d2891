//! Source positions and line lookup.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// A region of source text.
///
/// Lines and columns are 1-based; columns count `char`s, so each Bangla
/// code point (vowel signs and virama included) is one column. The end
/// position is the last character covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    #[serde(rename = "line")]
    pub start_line: u32,
    #[serde(rename = "column")]
    pub start_col: u32,
    pub end_line: u32,
    #[serde(rename = "end_column")]
    pub end_col: u32,
}

impl Span {
    pub const fn new(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Span {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// A one-character span.
    pub const fn point(line: u32, col: u32) -> Self {
        Span::new(line, col, line, col)
    }

    /// Every line the span touches.
    pub fn lines(&self) -> RangeInclusive<u32> {
        self.start_line..=self.end_line.max(self.start_line)
    }

    pub fn is_multiline(&self) -> bool {
        self.end_line > self.start_line
    }
}

/// `3:7`, `3:7-15` or `3:7-4:2`.
impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_line, self.start_col)?;
        if self.is_multiline() {
            write!(f, "-{}:{}", self.end_line, self.end_col)
        } else if self.end_col > self.start_col {
            write!(f, "-{}", self.end_col)
        } else {
            Ok(())
        }
    }
}

/// A named source text with a line index.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    text: String,
    /// Byte offset where each line begins; always starts with 0.
    line_starts: Vec<usize>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        SourceFile {
            name: name.into(),
            text,
            line_starts,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text of a 1-based line, without its terminator (`\n` or `\r\n`).
    pub fn line(&self, number: u32) -> Option<&str> {
        let index = (number as usize).checked_sub(1)?;
        let start = *self.line_starts.get(index)?;
        let end = match self.line_starts.get(index + 1) {
            Some(next) => next - 1,
            None => self.text.len(),
        };
        let line = &self.text[start..end];
        Some(line.strip_suffix('\r').unwrap_or(line))
    }

    /// Number of lines; a trailing newline opens one more, empty, line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// 1-based line holding byte `offset`. Offsets past the end land on the
    /// last line.
    pub fn line_of_offset(&self, offset: usize) -> u32 {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        u32::try_from(line).unwrap_or(u32::MAX)
    }
}
