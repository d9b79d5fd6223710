//! Source buffer that either borrows caller text or owns loaded bytes.
//!
//! Borrowed buffers are scanned in place with no copy. Owned buffers come
//! from [`SourceBuffer::from_file`] or [`SourceBuffer::owned`] and are
//! released together with the scanner that holds them.
//!
//! Reads past the end return the `0x00` sentinel instead of panicking, so
//! lookahead near the end of input needs no bounds checks at call sites.
//! Interior null bytes are told apart from the sentinel by position.

use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::Cursor;

/// Failure to produce a buffer from outside the process.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file could not be read.
    #[error("failed to read `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file does not fit in 32-bit offsets.
    #[error("`{}` is {len} bytes, larger than the {} byte limit", .path.display(), u32::MAX)]
    TooLarge { path: PathBuf, len: usize },
}

/// Byte buffer scanned by a [`Cursor`].
///
/// # Layout
///
/// ```text
/// [source_bytes...] 0x00 0x00 ...
///  ^                ^
///  0                len (virtual sentinel, never stored)
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceBuffer<'a> {
    bytes: Cow<'a, [u8]>,
    /// Length of the scannable content.
    len: u32,
}

impl<'a> SourceBuffer<'a> {
    /// Borrow source text. The caller keeps ownership.
    pub fn new(source: &'a str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Borrow raw bytes. Non-ASCII bytes are scanned like any other byte.
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self::with_bytes(Cow::Borrowed(bytes))
    }

    /// Buffers larger than `u32::MAX` bytes are truncated to that length;
    /// [`from_file`](Self::from_file) rejects them before getting here.
    fn with_bytes(bytes: Cow<'a, [u8]>) -> Self {
        let len = u32::try_from(bytes.len()).unwrap_or(u32::MAX);
        Self { bytes, len }
    }

    /// Returns `true` if the buffer was allocated by this crate.
    pub fn is_owned(&self) -> bool {
        matches!(self.bytes, Cow::Owned(_))
    }

    /// Detach from the borrowed source, copying only if currently borrowed.
    pub fn into_owned(self) -> SourceBuffer<'static> {
        SourceBuffer {
            bytes: Cow::Owned(self.bytes.into_owned()),
            len: self.len,
        }
    }

    /// Source content (without the virtual sentinel).
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Byte at `pos`, or the `0x00` sentinel at or past the end.
    #[inline]
    pub fn byte(&self, pos: u32) -> u8 {
        if pos < self.len {
            self.bytes[pos as usize]
        } else {
            0
        }
    }

    /// Bytes in `start..end`, clamped to the source content.
    pub fn slice(&self, start: u32, end: u32) -> &[u8] {
        let end = end.min(self.len);
        let start = start.min(end);
        &self.bytes[start as usize..end as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0, line 1, column 1.
    pub fn cursor(self) -> Cursor<'a> {
        Cursor::new(self)
    }
}

impl SourceBuffer<'static> {
    /// Take ownership of already-loaded bytes.
    pub fn owned(bytes: Vec<u8>) -> Self {
        Self::with_bytes(Cow::Owned(bytes))
    }

    /// Read a whole file into an owned buffer.
    ///
    /// The byte count may be smaller than the size reported by the file
    /// system; only the bytes actually read are scanned.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if u32::try_from(bytes.len()).is_err() {
            return Err(SourceError::TooLarge {
                path: path.to_path_buf(),
                len: bytes.len(),
            });
        }
        Ok(Self::owned(bytes))
    }
}
