//! Source files loaded for one request.

use std::path::{Path, PathBuf};

use crate::base::{FileId, LineCol, LineIndex, TextRange, TextSize};

/// The text of one loaded file together with its line index.
#[derive(Clone, Debug)]
pub struct SourceFile {
    id: FileId,
    path: PathBuf,
    text: String,
    line_index: LineIndex,
}

impl SourceFile {
    pub fn new(id: FileId, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let text = text.into();
        let line_index = LineIndex::new(&text);
        Self {
            id,
            path: path.into(),
            text,
            line_index,
        }
    }

    pub fn id(&self) -> FileId {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of an editor position, `None` past the last line.
    pub fn offset(&self, position: LineCol) -> Option<TextSize> {
        self.line_index.offset(&self.text, position)
    }

    pub fn line_col(&self, offset: TextSize) -> LineCol {
        self.line_index.line_col(&self.text, offset)
    }

    /// Text of a line without its terminator.
    pub fn line(&self, line: u32) -> Option<&str> {
        self.line_index
            .line_range(&self.text, line)
            .map(|range| &self.text[range])
    }

    /// Start and end positions of a range.
    pub fn range_line_cols(&self, range: TextRange) -> (LineCol, LineCol) {
        (self.line_col(range.start()), self.line_col(range.end()))
    }
}
