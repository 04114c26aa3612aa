//! Source files loaded once before scanning begins.
//!
//! The lexer never performs I/O itself. A [`SourceFile`] buffers the whole
//! unit up front, either from a path or from any [`Read`] implementation, and
//! the lexer then walks the buffered bytes.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use crate::error::{SourceError, SourceResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use tlc_util::SourceFile;
///
/// let file = SourceFile::new("main.tl", "int x = 1\nwrite(x)");
/// assert_eq!(file.name(), "main.tl");
/// assert_eq!(file.len(), 18);
/// ```
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// Raw file content; the language is 7-bit so no decoding happens here
    content: Arc<[u8]>,
}

impl SourceFile {
    /// Create a new source file from in-memory content
    pub fn new(name: impl Into<String>, content: impl AsRef<[u8]>) -> Self {
        Self {
            name: name.into(),
            content: Arc::from(content.as_ref()),
        }
    }

    /// Read a source file from disk
    pub fn from_path(path: impl AsRef<Path>) -> SourceResult<Self> {
        let path = path.as_ref();
        let content = fs::read(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(path.display().to_string(), content))
    }

    /// Drain a reader into a new source file
    pub fn from_reader(name: impl Into<String>, mut reader: impl Read) -> SourceResult<Self> {
        let name = name.into();
        let mut content = Vec::new();
        if let Err(source) = reader.read_to_end(&mut content) {
            return Err(SourceError::Stream { name, source });
        }
        Ok(Self::new(name, content))
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the raw file content
    #[inline]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Length of the content in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns true if the file has no content
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
