//! Toast notifications drawn over the bottom of the current screen

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn color(self) -> Color {
        match self {
            ToastKind::Success => Color::Green,
            ToastKind::Error => Color::Red,
            ToastKind::Info => Color::Cyan,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
            ToastKind::Info => "i",
        }
    }
}

/// A short-lived, non-blocking message
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub detail: Option<String>,
    shown_at: Instant,
}

impl Toast {
    pub fn new(kind: ToastKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            detail: None,
            shown_at: Instant::now(),
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, title)
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.shown_at.elapsed() >= ttl
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let height = if self.detail.is_some() { 4 } else { 3 };
        let width = area.width.saturating_sub(4).min(60);
        if area.height < height + 1 || width < 10 {
            return;
        }

        let toast_area = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + area.height - height - 1,
            width,
            height,
        };

        let color = self.kind.color();
        let mut lines = vec![Line::from(vec![
            Span::styled(self.kind.icon(), Style::default().fg(color).bold()),
            Span::raw(" "),
            Span::styled(self.title.as_str(), Style::default().fg(Color::White).bold()),
        ])];
        if let Some(detail) = &self.detail {
            lines.push(Line::from(Span::styled(
                detail.as_str(),
                Style::default().fg(Color::Gray),
            )));
        }

        frame.render_widget(Clear, toast_area);
        let toast = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Color::Black)),
        );
        frame.render_widget(toast, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_ttl() {
        let toast = Toast::success("ok");
        assert!(!toast.is_expired(Duration::from_secs(60)));
        assert!(toast.is_expired(Duration::ZERO));
    }
}
