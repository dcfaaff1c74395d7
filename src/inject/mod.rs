//! Text sinks which receive what the keyboard types.

mod buffer;
mod wide;

use ::std::{cell::RefCell, rc::Rc};

use crate::errors::Result;

pub use buffer::*;
pub use wide::*;

/// Marks the following text as left-to-right.
pub const LEFT_TO_RIGHT_MARK: char = '\u{200E}';

const BACKSPACE: char = '\x08';

/// A text control which the keyboard types into.
///
/// Implementations insert at their own caret and move the caret past the
/// inserted text.
pub trait InjectionTarget {
    /// Inserts `text` at the caret.
    fn insert_text(&mut self, text: &str) -> Result<()>;

    /// Deletes the code point before the caret, if any.
    fn backspace(&mut self) -> Result<()>;

    /// Inserts `text` so that it displays left-to-right even if it is made of
    /// right-to-left characters. The default implementation prefixes a
    /// [`LEFT_TO_RIGHT_MARK`].
    fn insert_text_forced_ltr(&mut self, text: &str) -> Result<()> {
        let mut marked = String::with_capacity(text.len() + LEFT_TO_RIGHT_MARK.len_utf8());
        marked.push(LEFT_TO_RIGHT_MARK);
        marked.push_str(text);
        self.insert_text(&marked)
    }
}

impl<T: InjectionTarget + ?Sized> InjectionTarget for &mut T {
    fn insert_text(&mut self, text: &str) -> Result<()> {
        (**self).insert_text(text)
    }

    fn backspace(&mut self) -> Result<()> {
        (**self).backspace()
    }

    fn insert_text_forced_ltr(&mut self, text: &str) -> Result<()> {
        (**self).insert_text_forced_ltr(text)
    }
}

impl<T: InjectionTarget + ?Sized> InjectionTarget for Box<T> {
    fn insert_text(&mut self, text: &str) -> Result<()> {
        (**self).insert_text(text)
    }

    fn backspace(&mut self) -> Result<()> {
        (**self).backspace()
    }

    fn insert_text_forced_ltr(&mut self, text: &str) -> Result<()> {
        (**self).insert_text_forced_ltr(text)
    }
}

/// Lets the embedder keep a handle to the target it binds.
impl<T: InjectionTarget + ?Sized> InjectionTarget for Rc<RefCell<T>> {
    fn insert_text(&mut self, text: &str) -> Result<()> {
        self.borrow_mut().insert_text(text)
    }

    fn backspace(&mut self) -> Result<()> {
        self.borrow_mut().backspace()
    }

    fn insert_text_forced_ltr(&mut self, text: &str) -> Result<()> {
        self.borrow_mut().insert_text_forced_ltr(text)
    }
}

/// An edit the keyboard made to its target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InjectionEvent {
    Inserted(String),
    Deleted,
}

/// Splits `text` into the edits it describes: runs of text to insert and
/// embedded backspaces. Control characters other than whitespace are
/// dropped.
fn edits(text: &str) -> impl Iterator<Item = Edit> + '_ {
    text.chars().filter_map(|c| match c {
        BACKSPACE => Some(Edit::Delete),
        _ if c.is_control() && !c.is_whitespace() => None,
        _ => Some(Edit::Insert(c)),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Edit {
    Insert(char),
    Delete,
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;

    #[test]
    fn test_edits() {
        let edits: Vec<_> = edits("a\x08\x07b\t").collect();
        assert_eq!(
            edits,
            vec![
                Edit::Insert('a'),
                Edit::Delete,
                Edit::Insert('b'),
                Edit::Insert('\t'),
            ]
        );
    }

    fn type_and_delete(mut target: impl InjectionTarget) {
        target.insert_text("ab").unwrap();
        target.backspace().unwrap();
    }

    #[test]
    fn test_forwarding_impls() {
        let mut buffer = TextBuffer::new();
        type_and_delete(&mut buffer);
        assert_eq!(buffer.text(), "a");

        let mut boxed: Box<dyn InjectionTarget> = Box::new(WideTextBuffer::new());
        boxed.insert_text_forced_ltr("\u{0636}").unwrap();
        boxed.backspace().unwrap();

        let shared = Rc::new(RefCell::new(TextBuffer::new()));
        let mut handle = shared.clone();
        handle.insert_text_forced_ltr("x").unwrap();
        assert_eq!(shared.borrow().text(), "\u{200E}x");
    }
}
