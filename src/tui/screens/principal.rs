//! Principal screen - greeting, today's date and the signed-in menu

use chrono::{Datelike, Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::ScreenAction;
use crate::router::{Route, UserIdentity};
use crate::tui::widgets::{hint_bar, Toast};

const MESES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    MarcarPonto,
    AcompanharPonto,
    VerPontos,
    VerFaculdades,
    Configuracoes,
    Sair,
}

const MENU: [MenuItem; 6] = [
    MenuItem::MarcarPonto,
    MenuItem::AcompanharPonto,
    MenuItem::VerPontos,
    MenuItem::VerFaculdades,
    MenuItem::Configuracoes,
    MenuItem::Sair,
];

impl MenuItem {
    fn label(self) -> &'static str {
        match self {
            MenuItem::MarcarPonto => "Marcar Ponto",
            MenuItem::AcompanharPonto => "Acompanhar Ponto",
            MenuItem::VerPontos => "Ver Pontos",
            MenuItem::VerFaculdades => "Ver Faculdades",
            MenuItem::Configuracoes => "Configurações",
            MenuItem::Sair => "Sair",
        }
    }
}

const PONTO_STATUS: &str = "Não Marcado";

/// "15, Março" style date used in the header
pub fn format_day_month(date: NaiveDate) -> String {
    format!("{}, {}", date.day(), MESES[date.month0() as usize])
}

/// Principal screen state
pub struct PrincipalScreen {
    user: UserIdentity,
    nome: String,
    state: ListState,
}

impl PrincipalScreen {
    pub fn new(user: UserIdentity) -> Self {
        let nome = user.display_name().to_string();
        let mut state = ListState::default();
        state.select(Some(0));

        Self {
            user,
            nome,
            state,
        }
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }

    /// Replace the greeting name with the one the backend has on file
    pub fn set_nome(&mut self, nome: impl Into<String>) {
        let nome = nome.into();
        if !nome.trim().is_empty() {
            self.nome = nome;
        }
    }

    fn selected(&self) -> MenuItem {
        MENU[self.state.selected().unwrap_or(0).min(MENU.len() - 1)]
    }

    fn activate(&self, item: MenuItem) -> ScreenAction {
        match item {
            MenuItem::MarcarPonto | MenuItem::AcompanharPonto => {
                tracing::info!(item = item.label(), "Check-in tracking is not available yet");
                ScreenAction::Toast(
                    Toast::info(item.label()).with_detail("Funcionalidade ainda não disponível"),
                )
            }
            MenuItem::VerPontos => ScreenAction::Go(Route::Pontos),
            MenuItem::VerFaculdades => ScreenAction::Go(Route::Faculdades),
            MenuItem::Configuracoes => ScreenAction::Go(Route::Configuracao(self.user.clone())),
            MenuItem::Sair => ScreenAction::SignOut,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                let i = self.state.selected().unwrap_or(0);
                self.state
                    .select(Some(if i == 0 { MENU.len() - 1 } else { i - 1 }));
                ScreenAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let i = self.state.selected().unwrap_or(0);
                self.state.select(Some((i + 1) % MENU.len()));
                ScreenAction::None
            }
            KeyCode::Enter => self.activate(self.selected()),
            KeyCode::Char('p') => self.activate(MenuItem::VerPontos),
            KeyCode::Char('f') => self.activate(MenuItem::VerFaculdades),
            KeyCode::Char('s') => self.activate(MenuItem::Configuracoes),
            KeyCode::Char('x') => self.activate(MenuItem::Sair),
            _ => ScreenAction::None,
        }
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Greeting
                Constraint::Length(3), // Ponto status
                Constraint::Min(5),    // Menu
                Constraint::Length(3), // Help
            ])
            .split(area);

        let greeting = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("Olá, {}! 👋", self.nome),
                Style::default().fg(Color::Red).bold(),
            )),
            Line::from(Span::styled(
                format_day_month(Local::now().date_naive()),
                Style::default().fg(Color::Gray),
            )),
        ])
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(greeting, chunks[0]);

        // Check-in marking has no backend yet
        let ponto = Paragraph::new(Line::from(vec![
            Span::raw("Ponto: "),
            Span::styled(PONTO_STATUS, Style::default().fg(Color::Red).bold()),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(ponto, chunks[1]);

        let items: Vec<ListItem> = MENU
            .iter()
            .map(|item| ListItem::new(Line::from(Span::raw(item.label()))))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Menu ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, chunks[2], &mut self.state);

        let help = hint_bar(&[
            ("Enter", "Abrir"),
            ("p", "Pontos"),
            ("f", "Faculdades"),
            ("s", "Config"),
            ("x", "Sair"),
        ]);
        frame.render_widget(help, chunks[3]);
    }
}
