//! TUI widgets

mod help;
mod input;
mod toast;

pub use help::HelpPopup;
pub use input::TextField;
pub use toast::{Toast, ToastKind};

use ratatui::{prelude::*, widgets::Paragraph};

/// Bottom bar of highlighted key hints
pub fn hint_bar<'a>(hints: &[(&'a str, &'a str)]) -> Paragraph<'a> {
    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(
                    format!(" {} ", key),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                ),
                Span::raw(format!(" {}  ", action)),
            ]
        })
        .collect();

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}
