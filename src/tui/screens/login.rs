//! Login screen - email and password form

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::Paragraph};

use super::ScreenAction;
use crate::api::Credentials;
use crate::router::Route;
use crate::tui::widgets::{hint_bar, TextField};

const EMAIL: usize = 0;
const SENHA: usize = 1;

/// Login screen state
pub struct LoginScreen {
    fields: [TextField; 2],
    focus: usize,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            fields: [
                TextField::new("Seu Email"),
                TextField::new("Sua Senha").masked(),
            ],
            focus: EMAIL,
        }
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Email
                Constraint::Length(3), // Senha
                Constraint::Min(0),
                Constraint::Length(3), // Help
            ])
            .split(area);

        let title = Paragraph::new("Faça Login na sua Conta!")
            .style(Style::default().fg(Color::Red).bold())
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        for (i, field) in self.fields.iter().enumerate() {
            field.draw(frame, chunks[1 + i], self.focus == i, true);
        }

        let help = hint_bar(&[
            ("Tab", "Próximo campo"),
            ("Enter", "Fazer Login"),
            ("Esc", "Voltar"),
        ]);
        frame.render_widget(help, chunks[4]);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Esc => ScreenAction::Go(Route::Home),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % self.fields.len();
                ScreenAction::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
                ScreenAction::None
            }
            KeyCode::Enter if self.focus == EMAIL => {
                self.focus = SENHA;
                ScreenAction::None
            }
            KeyCode::Enter => ScreenAction::Login(Credentials {
                email: self.fields[EMAIL].trimmed(),
                senha: self.fields[SENHA].value().to_string(),
            }),
            code => {
                self.fields[self.focus].handle_key(code);
                ScreenAction::None
            }
        }
    }
}
