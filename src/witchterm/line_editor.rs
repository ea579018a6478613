//! # Line Editor
//!
//! The prompt is a small state machine driven one key at a time:
//!
//! ```text
//!   IdlePrompt --char--> Reading --enter--> Executing --finish--> IdlePrompt
//!       ^                   |
//!       +-----ctrl+c--------+
//! ```
//!
//! [`reduce`] is pure: it takes the current [`EditorState`] and a [`KeyInput`]
//! and returns the next state plus the [`EditorEffect`]s the caller must
//! perform (echo, erase, submit). Nothing here knows about terminals or
//! commands, which keeps every transition testable on its own.
//!
//! While a line is executing, keys are dropped. [`LineEditor::finish`] hands
//! control back once the dispatched command is done.

/// A decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Backspace,
    Interrupt,
    Enter,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    IdlePrompt,
    Reading,
    Executing,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorState {
    pub mode: EditorMode,
    pub buffer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEffect {
    /// Print the typed character.
    Echo(char),
    /// Move back one cell, blank it, move back again.
    EraseLast,
    /// Move to the next line after Enter.
    Newline,
    /// Print the interrupt marker.
    Interrupted,
    /// Run this (trimmed) line.
    Submit(String),
    /// Draw a fresh prompt.
    Prompt,
}

/// Cursor-left, space, cursor-left.
pub const ERASE_SEQUENCE: &str = "\x08 \x08";
pub const INTERRUPT_MARKER: &str = "^C";

pub fn reduce(state: &EditorState, key: KeyInput) -> (EditorState, Vec<EditorEffect>) {
    if state.mode == EditorMode::Executing {
        return (state.clone(), Vec::new());
    }

    let key = match key {
        KeyInput::Char('\t') => KeyInput::Char(' '),
        other => other,
    };

    match key {
        KeyInput::Char(c) if !c.is_control() => {
            let mut buffer = state.buffer.clone();
            buffer.push(c);
            (
                EditorState {
                    mode: EditorMode::Reading,
                    buffer,
                },
                vec![EditorEffect::Echo(c)],
            )
        }
        KeyInput::Backspace if !state.buffer.is_empty() => {
            let mut buffer = state.buffer.clone();
            buffer.pop();
            let mode = if buffer.is_empty() {
                EditorMode::IdlePrompt
            } else {
                EditorMode::Reading
            };
            (EditorState { mode, buffer }, vec![EditorEffect::EraseLast])
        }
        KeyInput::Interrupt => (
            EditorState::default(),
            vec![
                EditorEffect::Interrupted,
                EditorEffect::Newline,
                EditorEffect::Prompt,
            ],
        ),
        KeyInput::Enter => (
            EditorState {
                mode: EditorMode::Executing,
                buffer: String::new(),
            },
            vec![
                EditorEffect::Newline,
                EditorEffect::Submit(state.buffer.trim().to_string()),
            ],
        ),
        _ => (state.clone(), Vec::new()),
    }
}

/// Owns an [`EditorState`] and steps it through [`reduce`].
#[derive(Debug, Default)]
pub struct LineEditor {
    state: EditorState,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, key: KeyInput) -> Vec<EditorEffect> {
        let (next, effects) = reduce(&self.state, key);
        self.state = next;
        effects
    }

    /// Ends an execution and asks for a new prompt.
    pub fn finish(&mut self) -> Vec<EditorEffect> {
        self.state = EditorState::default();
        vec![EditorEffect::Prompt]
    }

    pub fn mode(&self) -> EditorMode {
        self.state.mode
    }

    pub fn buffer(&self) -> &str {
        &self.state.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> LineEditor {
        let mut editor = LineEditor::new();
        for c in text.chars() {
            editor.handle(KeyInput::Char(c));
        }
        editor
    }

    #[test]
    fn test_starts_idle_and_empty() {
        let editor = LineEditor::new();
        assert_eq!(editor.mode(), EditorMode::IdlePrompt);
        assert_eq!(editor.buffer(), "");
    }

    #[test]
    fn test_chars_append_and_echo() {
        let mut editor = LineEditor::new();
        assert_eq!(editor.handle(KeyInput::Char('d')), vec![EditorEffect::Echo('d')]);
        assert_eq!(editor.mode(), EditorMode::Reading);
        editor.handle(KeyInput::Char('ä'));
        assert_eq!(editor.buffer(), "dä");
    }

    #[test]
    fn test_control_chars_are_dropped() {
        let mut editor = typed("ab");
        assert!(editor.handle(KeyInput::Char('\u{7}')).is_empty());
        assert_eq!(editor.buffer(), "ab");
    }

    #[test]
    fn test_tab_becomes_space() {
        let mut editor = typed("show");
        assert_eq!(editor.handle(KeyInput::Char('\t')), vec![EditorEffect::Echo(' ')]);
        editor.handle(KeyInput::Char('2'));
        assert_eq!(editor.buffer(), "show 2");
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let mut editor = typed("drax");
        assert_eq!(editor.handle(KeyInput::Backspace), vec![EditorEffect::EraseLast]);
        assert_eq!(editor.buffer(), "dra");
    }

    #[test]
    fn test_backspace_on_empty_buffer_is_noop() {
        let mut editor = LineEditor::new();
        assert!(editor.handle(KeyInput::Backspace).is_empty());
        assert_eq!(editor.mode(), EditorMode::IdlePrompt);
    }

    #[test]
    fn test_backspace_to_empty_returns_to_idle() {
        let mut editor = typed("x");
        editor.handle(KeyInput::Backspace);
        assert_eq!(editor.mode(), EditorMode::IdlePrompt);
    }

    #[test]
    fn test_interrupt_discards_buffer() {
        let mut editor = typed("show 3");
        let effects = editor.handle(KeyInput::Interrupt);
        assert_eq!(
            effects,
            vec![
                EditorEffect::Interrupted,
                EditorEffect::Newline,
                EditorEffect::Prompt
            ]
        );
        assert_eq!(editor.buffer(), "");
        assert_eq!(editor.mode(), EditorMode::IdlePrompt);
    }

    #[test]
    fn test_enter_submits_trimmed_line() {
        let mut editor = typed("  draw  ");
        let effects = editor.handle(KeyInput::Enter);
        assert_eq!(
            effects,
            vec![EditorEffect::Newline, EditorEffect::Submit("draw".into())]
        );
        assert_eq!(editor.mode(), EditorMode::Executing);
        assert_eq!(editor.buffer(), "");
    }

    #[test]
    fn test_enter_on_empty_buffer_submits_empty_line() {
        let mut editor = LineEditor::new();
        let effects = editor.handle(KeyInput::Enter);
        assert_eq!(effects[1], EditorEffect::Submit(String::new()));
    }

    #[test]
    fn test_keys_ignored_while_executing() {
        let mut editor = typed("list");
        editor.handle(KeyInput::Enter);
        assert!(editor.handle(KeyInput::Char('x')).is_empty());
        assert!(editor.handle(KeyInput::Interrupt).is_empty());
        assert_eq!(editor.buffer(), "");

        assert_eq!(editor.finish(), vec![EditorEffect::Prompt]);
        assert_eq!(editor.mode(), EditorMode::IdlePrompt);
        editor.handle(KeyInput::Char('x'));
        assert_eq!(editor.buffer(), "x");
    }

    #[test]
    fn test_ignored_key_changes_nothing() {
        let state = EditorState {
            mode: EditorMode::Reading,
            buffer: "dr".into(),
        };
        let (next, effects) = reduce(&state, KeyInput::Ignored);
        assert_eq!(next, state);
        assert!(effects.is_empty());
    }
}
