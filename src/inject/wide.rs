use ::widestring::{U16Str, U16String};

use super::{edits, Edit, InjectionTarget};
use crate::errors::{ErrorKind, Result};

/// An in-memory UTF-16 text control, as found on platforms whose native
/// strings are wide. The caret counts UTF-16 code units.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WideTextBuffer {
    text: U16String,
    caret: usize,
    read_only: bool,
}

impl WideTextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer holding `text` with the caret at the end.
    pub fn with_text(text: &str) -> Self {
        let text = U16String::from_str(text);
        Self {
            caret: text.len(),
            text,
            read_only: false,
        }
    }

    pub fn as_ustr(&self) -> &U16Str {
        &self.text
    }

    /// The contents, with unpaired surrogates replaced.
    pub fn to_string_lossy(&self) -> String {
        self.text.to_string_lossy()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Moves the caret, clamped to the text. A caret between the halves of a
    /// surrogate pair is moved before the pair.
    pub fn set_caret(&mut self, caret: usize) {
        let caret = caret.min(self.text.len());
        self.caret = match self.text.as_slice().get(caret) {
            Some(&unit) if caret > 0 && is_low_surrogate(unit) => caret - 1,
            _ => caret,
        };
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    fn insert_char(&mut self, c: char) {
        let mut units = [0; 2];
        let encoded = c.encode_utf16(&mut units);

        let mut text = ::std::mem::take(&mut self.text).into_vec();
        text.splice(self.caret..self.caret, encoded.iter().copied());
        self.text = U16String::from_vec(text);
        self.caret += encoded.len();
    }

    fn delete_before_caret(&mut self) {
        let units = self.text.as_slice();
        let width = match self.caret {
            0 => return,
            1 => 1,
            caret if is_low_surrogate(units[caret - 1]) && is_high_surrogate(units[caret - 2]) => 2,
            _ => 1,
        };

        let mut text = ::std::mem::take(&mut self.text).into_vec();
        text.drain(self.caret - width..self.caret);
        self.text = U16String::from_vec(text);
        self.caret -= width;
    }
}

fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..0xDC00).contains(&unit)
}

fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..0xE000).contains(&unit)
}

impl InjectionTarget for WideTextBuffer {
    fn insert_text(&mut self, text: &str) -> Result<()> {
        if self.read_only {
            return Err(ErrorKind::ReadOnlyTarget.into());
        }

        for edit in edits(text) {
            match edit {
                Edit::Insert(c) => self.insert_char(c),
                Edit::Delete => self.delete_before_caret(),
            }
        }
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
