use crate::error::{LexicatError, Result};
use std::fmt;
use std::io::{self, BufRead, Write};
use unicode_width::UnicodeWidthStr;

/// Maximum number of characters kept from a single line read.
pub const READ_LIMIT: usize = 64;

/// An owned word or category name.
///
/// Comparison and equality are byte-wise lexicographic, which is the order
/// sorted lists and searches rely on. The empty term is a fully valid value:
/// there is no null state, and moving the content out with [`take`](Self::take)
/// leaves the source empty and reusable.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term {
    text: String,
}

impl Term {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Byte length of the term.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Character at position `index`, counting characters rather than bytes.
    pub fn char_at(&self, index: usize) -> Result<char> {
        self.text.chars().nth(index).ok_or(LexicatError::OutOfRange {
            index,
            len: self.text.chars().count(),
        })
    }

    pub fn first_char(&self) -> Option<char> {
        self.text.chars().next()
    }

    /// Builds `self + delimiter + other` without touching either operand.
    pub fn concat(&self, other: &Term, delimiter: &str) -> Term {
        let mut text =
            String::with_capacity(self.text.len() + delimiter.len() + other.text.len());
        text.push_str(&self.text);
        text.push_str(delimiter);
        text.push_str(&other.text);
        Term { text }
    }

    /// Byte-wise lexicographic comparison; agrees with the `Ord` impl.
    pub fn is_less(&self, other: &Term) -> bool {
        self.text < other.text
    }

    /// Replaces the content with one line from `reader`: the trailing
    /// newline is stripped and the result is truncated to [`READ_LIMIT`]
    /// characters. At end of input the term becomes empty. Safe to call
    /// repeatedly on the same instance.
    pub fn read_line<R: BufRead>(&mut self, reader: &mut R) -> Result<()> {
        let mut line = String::new();
        reader.read_line(&mut line)?;
        let stripped = line.trim_end_matches(['\n', '\r']);
        self.text = stripped.chars().take(READ_LIMIT).collect();
        Ok(())
    }

    /// Writes the raw content with no trailing newline.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.text.as_bytes())
    }

    /// Terminal column width of the content.
    pub fn display_width(&self) -> usize {
        self.text.width()
    }

    /// Moves the content out, leaving this term empty and reusable.
    pub fn take(&mut self) -> Term {
        Term {
            text: std::mem::take(&mut self.text),
        }
    }
}

impl From<&str> for Term {
    fn from(text: &str) -> Self {
        Term {
            text: text.to_string(),
        }
    }
}

impl From<String> for Term {
    fn from(text: String) -> Self {
        Term { text }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
