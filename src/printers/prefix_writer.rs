//! # Prefix Writer
//!
//! Line writer for describe output. Text is written as `\t` separated cells
//! with an indentation prefix per nesting level into a [`TabWriter`], which
//! aligns the cells into elastic tabstops when [`PrefixWriter::flush`] is
//! called. Every cell in a column block is padded to the widest cell plus two
//! spaces; the last cell of a line is never padded.

use std::fmt;
use std::io::{self, Write};
use tabwriter::TabWriter;

/// Spaces added after the widest cell of a column block
const CELL_PADDING: usize = 2;

/// Indentation emitted per nesting level
const LEVEL_SPACE: &str = "  ";

/// Indentation-aware writer with column alignment
///
/// Write errors are kept and reported by the next [`PrefixWriter::flush`].
pub struct PrefixWriter<W: Write> {
    out: TabWriter<W>,
    error: Option<io::Error>,
}

impl<W: Write> fmt::Debug for PrefixWriter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixWriter")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

/// Indented view on a [`PrefixWriter`], returned by `write_attribute`
#[derive(Debug)]
pub struct Section<'a, W: Write> {
    writer: &'a mut PrefixWriter<W>,
}

/// Render `label` as an attribute label (`Label:`)
pub fn label(label: &str) -> String {
    format!("{label}:")
}

impl<W: Write> PrefixWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: TabWriter::new(out).minwidth(0).padding(CELL_PADDING),
            error: None,
        }
    }

    /// Write the given columns separated by tabs, terminated by a newline
    pub fn write_cols_ln(&mut self, cols: &[&str]) {
        self.push_cols(0, cols);
    }

    /// Write `Attr:\tvalue` and return a section indented one level deeper
    pub fn write_attribute(&mut self, attr: &str, value: &str) -> Section<'_, W> {
        self.push_cols(0, &[&label(attr), value]);
        Section { writer: self }
    }

    /// Write an empty line
    pub fn write_line(&mut self) {
        self.push(0, format_args!("\n"));
    }

    /// Align everything written so far and write it out
    pub fn flush(&mut self) -> io::Result<()> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()
    }

    fn push(&mut self, level: usize, args: fmt::Arguments<'_>) {
        let result = (0..level)
            .try_for_each(|_| self.out.write_all(LEVEL_SPACE.as_bytes()))
            .and_then(|()| self.out.write_fmt(args));
        if let Err(err) = result {
            if self.error.is_none() {
                self.error = Some(err);
            }
        }
    }

    fn push_cols(&mut self, level: usize, cols: &[&str]) {
        self.push(level, format_args!("{}\n", cols.join("\t")));
    }
}

impl<W: Write> Section<'_, W> {
    /// Write formatted text one level below the attribute
    pub fn writef(&mut self, args: fmt::Arguments<'_>) {
        self.writer.push(1, args);
    }
}
