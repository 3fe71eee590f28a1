//! Source text positions and ranges.

use std::fmt;

// Re-export from text-size for compatibility
pub use text_size::TextRange;
pub use text_size::TextSize;

/// A line and column position in source text, as sent by an editor.
///
/// Both line and column are 0-indexed internally, but displayed as 1-indexed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct LineCol {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column (in characters, not bytes)
    pub col: u32,
}

impl LineCol {
    /// Create a new LineCol position.
    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

impl fmt::Debug for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

/// Index for converting between byte offsets and line/column positions.
///
/// Columns count characters, so every conversion takes the text the index
/// was built from.
#[derive(Clone, Debug)]
pub struct LineIndex {
    /// Byte offset of the start of each line
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    /// Build a line index from source text.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];

        for (offset, c) in text.char_indices() {
            if c == '\n' {
                line_starts.push(TextSize::from((offset + 1) as u32));
            }
        }

        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    /// Byte range of a line, without its terminator (`\n` or `\r\n`).
    pub fn line_range(&self, text: &str, line: u32) -> Option<TextRange> {
        let start = *self.line_starts.get(line as usize)?;
        let mut end = self
            .line_starts
            .get(line as usize + 1)
            .map(|next| *next - TextSize::from(1))
            .unwrap_or(self.len);
        if end > start && text.as_bytes().get(usize::from(end) - 1) == Some(&b'\r') {
            end -= TextSize::from(1);
        }
        Some(TextRange::new(start, end))
    }

    /// Convert a byte offset to a line/column position.
    pub fn line_col(&self, text: &str, offset: TextSize) -> LineCol {
        let offset = offset.min(self.len);
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);

        let line_start = self.line_starts[line];
        let col = text
            .get(usize::from(line_start)..usize::from(offset))
            .map(|prefix| prefix.chars().count())
            .unwrap_or(0);

        LineCol {
            line: line as u32,
            col: col as u32,
        }
    }

    /// Convert a line/column position to a byte offset.
    ///
    /// Columns past the end of the line clamp to the line end.
    pub fn offset(&self, text: &str, line_col: LineCol) -> Option<TextSize> {
        let range = self.line_range(text, line_col.line)?;
        let line = &text[range];
        let within = line
            .char_indices()
            .nth(line_col.col as usize)
            .map(|(idx, _)| idx)
            .unwrap_or(line.len());
        Some(range.start() + TextSize::from(within as u32))
    }

    /// Get the number of lines.
    pub fn len(&self) -> usize {
        self.line_starts.len()
    }

    /// Check if there are no lines (never true, an empty text has one line).
    pub fn is_empty(&self) -> bool {
        self.line_starts.is_empty()
    }
}
