//! Home screen - landing page with login and registration entry points

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::ScreenAction;
use crate::router::Route;
use crate::tui::widgets::hint_bar;

const OPTIONS: [&str; 3] = ["Fazer Login", "Solicitar Cadastro", "Mais Informações"];

/// Home screen state
pub struct HomeScreen {
    state: ListState,
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeScreen {
    pub fn new() -> Self {
        let mut state = ListState::default();
        state.select(Some(0));
        Self { state }
    }

    pub fn selected(&self) -> usize {
        self.state.selected().unwrap_or(0)
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Title
                Constraint::Min(5),    // Options
                Constraint::Length(3), // Help
            ])
            .split(area);

        let title = Paragraph::new(vec![
            Line::from(Span::styled("Olá! 👋", Style::default().fg(Color::Red).bold())),
            Line::from(Span::styled(
                "Controle de Ponto",
                Style::default().fg(Color::Gray).bold(),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = OPTIONS
            .iter()
            .map(|option| ListItem::new(Line::from(Span::raw(*option))))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Início ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, chunks[1], &mut self.state);

        let help = hint_bar(&[
            ("Enter", "Abrir"),
            ("l", "Login"),
            ("c", "Cadastro"),
            ("?", "Ajuda"),
            ("q", "Sair"),
        ]);
        frame.render_widget(help, chunks[2]);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                let i = self.selected();
                self.state
                    .select(Some(if i == 0 { OPTIONS.len() - 1 } else { i - 1 }));
                ScreenAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.select(Some((self.selected() + 1) % OPTIONS.len()));
                ScreenAction::None
            }
            KeyCode::Enter => match self.selected() {
                0 => ScreenAction::Go(Route::Login),
                1 => ScreenAction::Go(Route::Cadastro),
                _ => ScreenAction::ShowInfo,
            },
            KeyCode::Char('l') => ScreenAction::Go(Route::Login),
            KeyCode::Char('c') => ScreenAction::Go(Route::Cadastro),
            KeyCode::Char('i') => ScreenAction::ShowInfo,
            KeyCode::Char('q') | KeyCode::Esc => ScreenAction::Quit,
            _ => ScreenAction::None,
        }
    }
}
