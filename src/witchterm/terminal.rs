//! Output side of the virtual terminal.
//!
//! The session writes ANSI text and newline-terminated lines through
//! [`Terminal`]; how that reaches a screen is up to the implementation.

pub trait Terminal {
    fn write(&mut self, text: &str);

    /// Wipes the visible screen. Nothing else in the session is affected.
    fn clear(&mut self);
}

/// An in-memory screen. Everything written since the last `clear` is kept.
#[derive(Debug, Default)]
pub struct ScreenBuffer {
    contents: String,
    clears: usize,
}

impl ScreenBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Returns and forgets everything written so far.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.contents)
    }

    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Terminal for ScreenBuffer {
    fn write(&mut self, text: &str) {
        self.contents.push_str(text);
    }

    fn clear(&mut self) {
        self.contents.clear();
        self.clears += 1;
    }
}

impl<T: Terminal + ?Sized> Terminal for Box<T> {
    fn write(&mut self, text: &str) {
        (**self).write(text)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}
