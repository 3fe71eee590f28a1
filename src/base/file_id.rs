//! File identifiers for tracking source files.

use std::fmt;

/// Identifier of a source file within one symbol table.
///
/// Ids are assigned in visit order: the entry document is always
/// `FileId(0)`, its imports follow breadth-first.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct FileId(pub u32);

impl FileId {
    /// The document a request was made for.
    pub const ENTRY: FileId = FileId(0);

    /// Create a new FileId from a raw index.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileId({})", self.0)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file#{}", self.0)
    }
}

impl From<u32> for FileId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_id_entry_is_zero() {
        assert_eq!(FileId::ENTRY, FileId::new(0));
        assert_eq!(FileId::new(3).index(), 3);
    }

    #[test]
    fn test_file_id_display() {
        assert_eq!(format!("{}", FileId::new(2)), "file#2");
        assert_eq!(format!("{:?}", FileId::new(2)), "FileId(2)");
    }
}
