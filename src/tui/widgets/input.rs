//! Single-line text field used by the form screens

use crossterm::event::KeyCode;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Labelled text input
#[derive(Debug, Clone)]
pub struct TextField {
    label: &'static str,
    value: String,
    masked: bool,
    read_only: bool,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            masked: false,
            read_only: false,
        }
    }

    /// Hide the value behind bullets (passwords)
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Value with surrounding whitespace removed
    pub fn trimmed(&self) -> String {
        self.value.trim().to_string()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    pub fn set_masked(&mut self, masked: bool) {
        self.masked = masked;
    }

    /// Apply an editing key. Returns true when the key was consumed.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        if self.read_only {
            return false;
        }

        match key {
            KeyCode::Char(c) => {
                self.value.push(c);
                true
            }
            KeyCode::Backspace => {
                self.value.pop();
                true
            }
            _ => false,
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, focused: bool, enabled: bool) {
        let shown = if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        };

        let text = if focused && enabled && !self.read_only {
            format!("{}█", shown)
        } else {
            shown
        };

        let (text_style, border_style) = if !enabled || self.read_only {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray),
            )
        } else if focused {
            (
                Style::default().fg(Color::White),
                Style::default().fg(Color::Yellow),
            )
        } else {
            (
                Style::default().fg(Color::Gray),
                Style::default().fg(Color::Blue),
            )
        };

        let field = Paragraph::new(text).style(text_style).block(
            Block::default()
                .title(format!(" {} ", self.label))
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(field, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_unless_read_only() {
        let mut field = TextField::new("Email");
        assert!(field.handle_key(KeyCode::Char('a')));
        assert!(field.handle_key(KeyCode::Char('b')));
        assert!(field.handle_key(KeyCode::Backspace));
        assert_eq!(field.value(), "a");
        assert!(!field.handle_key(KeyCode::Enter));

        let mut locked = TextField::new("Email").read_only();
        assert!(!locked.handle_key(KeyCode::Char('x')));
        assert_eq!(locked.value(), "");
    }
}
