//! Pontos screen - paged list of public check-in points

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use super::{Paginator, ScreenAction};
use crate::api::Ponto;
use crate::tui::widgets::hint_bar;

/// Pontos screen state
pub struct PontosScreen {
    pontos: Vec<Ponto>,
    pager: Paginator,
    loading: bool,
    failed: bool,
}

impl PontosScreen {
    pub fn new(per_page: usize) -> Self {
        Self {
            pontos: Vec::new(),
            pager: Paginator::new(per_page),
            loading: false,
            failed: false,
        }
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
        self.failed = false;
    }

    pub fn set_pontos(&mut self, pontos: Vec<Ponto>) {
        self.pager.reset(pontos.len());
        self.pontos = pontos;
        self.loading = false;
    }

    pub fn set_failed(&mut self) {
        self.set_pontos(Vec::new());
        self.failed = true;
    }

    pub fn pager(&self) -> &Paginator {
        &self.pager
    }

    /// Rows shown on the current page
    pub fn visible(&self) -> &[Ponto] {
        self.pager.slice(&self.pontos)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => {
                self.pager.previous();
                ScreenAction::None
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => {
                self.pager.next();
                ScreenAction::None
            }
            KeyCode::Char('r') => ScreenAction::Reload,
            KeyCode::Esc | KeyCode::Char('v') => ScreenAction::Back,
            _ => ScreenAction::None,
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // Table
                Constraint::Length(1), // Page indicator
                Constraint::Length(3), // Help
            ])
            .split(area);

        let block = Block::default()
            .title(format!(" Pontos Cadastrados ({}) ", self.pontos.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));

        if self.loading || self.pontos.is_empty() {
            let text = if self.loading {
                "Carregando pontos..."
            } else if self.failed {
                "Não foi possível carregar os pontos"
            } else {
                "Nenhum ponto cadastrado"
            };
            let empty = Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, chunks[0]);
        } else {
            let rows: Vec<Row> = self
                .visible()
                .iter()
                .map(|ponto| {
                    Row::new(vec![
                        Span::styled(ponto.nome_ponto.as_str(), Style::default().fg(Color::White)),
                        Span::styled(ponto.rua_ponto.as_str(), Style::default().fg(Color::Gray)),
                        Span::styled(ponto.cidade_ponto.as_str(), Style::default().fg(Color::Cyan)),
                    ])
                })
                .collect();

            let table = Table::new(
                rows,
                [
                    Constraint::Percentage(35),
                    Constraint::Percentage(40),
                    Constraint::Percentage(25),
                ],
            )
            .header(
                Row::new(vec!["Ponto", "Rua", "Cidade"])
                    .style(Style::default().fg(Color::Yellow).bold()),
            )
            .block(block);
            frame.render_widget(table, chunks[0]);
        }

        frame.render_widget(page_indicator(&self.pager), chunks[1]);

        let help = hint_bar(&[("←/→", "Página"), ("r", "Recarregar"), ("Esc", "Voltar")]);
        frame.render_widget(help, chunks[2]);
    }
}

/// "‹ Página 2 de 3 ›" with the arrows dimmed at the ends
pub(super) fn page_indicator(pager: &Paginator) -> Paragraph<'static> {
    let arrow = |enabled: bool, glyph: &'static str| {
        let color = if enabled { Color::Cyan } else { Color::DarkGray };
        Span::styled(glyph, Style::default().fg(color))
    };

    Paragraph::new(Line::from(vec![
        arrow(pager.has_previous(), "‹ "),
        Span::raw(format!("Página {} de {}", pager.page(), pager.total_pages())),
        arrow(pager.has_next(), " ›"),
    ]))
    .alignment(Alignment::Center)
}
