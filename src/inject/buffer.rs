use ::tracing::trace;

use super::{edits, Edit, InjectionTarget};
use crate::errors::{ErrorKind, Result};

/// An in-memory UTF-8 text control with a caret.
///
/// ```
/// use ::vkbd::inject::{InjectionTarget, TextBuffer};
///
/// let mut buffer = TextBuffer::with_text("hello");
/// buffer.set_caret(0);
/// buffer.insert_text("¡").unwrap();
///
/// assert_eq!(buffer.text(), "¡hello");
/// assert_eq!(buffer.caret(), "¡".len());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    /// Byte offset, always on a char boundary.
    caret: usize,
    read_only: bool,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer holding `text` with the caret at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            caret: text.len(),
            text,
            read_only: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The caret position as a byte offset into [`text`](Self::text).
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Moves the caret. Offsets past the end or inside a character are moved
    /// back to the nearest character boundary.
    pub fn set_caret(&mut self, caret: usize) {
        let mut caret = caret.min(self.text.len());
        while !self.text.is_char_boundary(caret) {
            caret -= 1;
        }
        self.caret = caret;
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.caret = 0;
    }

    fn delete_before_caret(&mut self) {
        if let Some(c) = self.text[..self.caret].chars().next_back() {
            self.caret -= c.len_utf8();
            self.text.remove(self.caret);
        }
    }
}

impl InjectionTarget for TextBuffer {
    fn insert_text(&mut self, text: &str) -> Result<()> {
        if self.read_only {
            return Err(ErrorKind::ReadOnlyTarget.into());
        }

        for edit in edits(text) {
            match edit {
                Edit::Insert(c) => {
                    self.text.insert(self.caret, c);
                    self.caret += c.len_utf8();
                }
                Edit::Delete => self.delete_before_caret(),
            }
        }
        trace!(caret = self.caret, "Inserted text into buffer");
        Ok(())
    }

    fn backspace(&mut self) -> Result<()> {
        if self.read_only {
            return Err(ErrorKind::ReadOnlyTarget.into());
        }

        self.delete_before_caret();
        Ok(())
    }
}
