//! Faculdades screen - paged list of partner institutions

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::pontos::page_indicator;
use super::{Paginator, ScreenAction};
use crate::api::Faculdade;
use crate::tui::widgets::hint_bar;

/// Faculdades screen state
pub struct FaculdadesScreen {
    faculdades: Vec<Faculdade>,
    pager: Paginator,
    loading: bool,
    failed: bool,
}

impl FaculdadesScreen {
    pub fn new(per_page: usize) -> Self {
        Self {
            faculdades: Vec::new(),
            pager: Paginator::new(per_page),
            loading: false,
            failed: false,
        }
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
        self.failed = false;
    }

    pub fn set_faculdades(&mut self, faculdades: Vec<Faculdade>) {
        self.pager.reset(faculdades.len());
        self.faculdades = faculdades;
        self.loading = false;
    }

    /// The load failed; drop whatever was shown before
    pub fn set_failed(&mut self) {
        self.set_faculdades(Vec::new());
        self.failed = true;
    }

    pub fn pager(&self) -> &Paginator {
        &self.pager
    }

    pub fn visible(&self) -> &[Faculdade] {
        self.pager.slice(&self.faculdades)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => self.pager.previous(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => self.pager.next(),
            KeyCode::Char('r') => return ScreenAction::Reload,
            KeyCode::Esc | KeyCode::Char('v') => return ScreenAction::Back,
            _ => {}
        }
        ScreenAction::None
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(area);

        let block = Block::default()
            .title(format!(" Faculdades ({}) ", self.faculdades.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));

        if self.loading || self.faculdades.is_empty() {
            let text = if self.loading {
                "Carregando faculdades..."
            } else if self.failed {
                "Não foi possível carregar as faculdades"
            } else {
                "Nenhuma faculdade encontrada"
            };
            let empty = Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, chunks[0]);
        } else {
            let items: Vec<ListItem> = self
                .visible()
                .iter()
                .map(|f| ListItem::new(Line::from(vec![
                    Span::styled("• ", Style::default().fg(Color::Red)),
                    Span::raw(f.nome_faculdade.as_str()),
                ])))
                .collect();
            frame.render_widget(List::new(items).block(block), chunks[0]);
        }

        frame.render_widget(page_indicator(&self.pager), chunks[1]);
        frame.render_widget(
            hint_bar(&[("←/→", "Página"), ("r", "Recarregar"), ("Esc", "Voltar")]),
            chunks[2],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RecordId;
    use crossterm::event::KeyModifiers;

    #[test]
    fn pages_and_goes_back() {
        let mut screen = FaculdadesScreen::new(1);
        screen.set_faculdades(vec![
            Faculdade {
                id: RecordId::new("1"),
                nome_faculdade: "UFPE".into(),
            },
            Faculdade {
                id: RecordId::new("2"),
                nome_faculdade: "UPE".into(),
            },
        ]);

        screen.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE));
        assert_eq!(screen.visible()[0].nome_faculdade, "UPE");
        assert!(matches!(
            screen.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            ScreenAction::Back
        ));
    }
}
