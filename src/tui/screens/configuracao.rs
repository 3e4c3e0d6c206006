//! Configuracao screen - view and edit the signed-in account

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{prelude::*, widgets::Paragraph};
use regex::Regex;
use std::sync::OnceLock;

use super::ScreenAction;
use crate::api::{Usuario, UsuarioUpdate};
use crate::router::{Route, UserIdentity};
use crate::tui::widgets::{hint_bar, TextField, Toast};

const NOME: usize = 0;
const SOBRENOME: usize = 1;
const EMAIL: usize = 2;
const TELEFONE: usize = 3;
const SENHA: usize = 4;
const EDITABLE: [usize; 4] = [NOME, SOBRENOME, TELEFONE, SENHA];

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"))
}

/// Check a profile form and build the update to send.
///
/// Rules run in order and the first failure is returned as the message to
/// show the user.
pub fn validate_profile(
    nome: &str,
    sobrenome: &str,
    email: &str,
    telefone: &str,
    senha: &str,
) -> Result<UsuarioUpdate, &'static str> {
    if nome.trim().is_empty() {
        return Err("Nome é Obrigatório");
    }
    if sobrenome.trim().is_empty() {
        return Err("Sobrenome é Obrigatório");
    }
    if email.trim().is_empty() {
        return Err("Email é Obrigatório");
    }
    if !email_pattern().is_match(email) {
        return Err("Insira um Email Válido");
    }
    if telefone.trim().is_empty() {
        return Err("Telefone é Obrigatório");
    }

    Ok(UsuarioUpdate {
        nome: Some(nome.trim().to_string()),
        sobrenome: Some(sobrenome.trim().to_string()),
        email: Some(email.trim().to_string()),
        telefone: Some(telefone.trim().to_string()),
        senha: Some(senha.to_string()),
    })
}

/// Configuracao screen state
pub struct ConfiguracaoScreen {
    user: UserIdentity,
    fields: [TextField; 5],
    /// Field values from before the current edit
    snapshot: Option<[String; 5]>,
    editing: bool,
    focus: usize,
}

impl ConfiguracaoScreen {
    pub fn new(user: UserIdentity) -> Self {
        let mut fields = [
            TextField::new("Seu Nome"),
            TextField::new("Seu Sobrenome"),
            TextField::new("Seu Email").read_only(),
            TextField::new("Seu Telefone"),
            TextField::new("Sua Senha").masked(),
        ];
        if let Some(name) = &user.name {
            fields[NOME].set_value(name.clone());
        }

        Self {
            user,
            fields,
            snapshot: None,
            editing: false,
            focus: NOME,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn value(&self, index: usize) -> &str {
        self.fields[index].value()
    }

    pub fn password_visible(&self) -> bool {
        !self.fields[SENHA].is_masked()
    }

    /// Fill the form from the backend's copy of the account
    pub fn set_usuario(&mut self, usuario: Usuario) {
        self.fields[NOME].set_value(usuario.nome);
        self.fields[SOBRENOME].set_value(usuario.sobrenome);
        self.fields[EMAIL].set_value(usuario.email);
        self.fields[TELEFONE].set_value(usuario.telefone);
        self.fields[SENHA].set_value(usuario.senha);
    }

    fn toggle_password(&mut self) {
        let masked = self.fields[SENHA].is_masked();
        self.fields[SENHA].set_masked(!masked);
    }

    fn start_edit(&mut self) {
        self.snapshot = Some(std::array::from_fn(|i| self.fields[i].value().to_string()));
        self.editing = true;
        self.focus = NOME;
    }

    fn cancel_edit(&mut self) {
        self.editing = false;
        if let Some(values) = self.snapshot.take() {
            for (field, value) in self.fields.iter_mut().zip(values) {
                field.set_value(value);
            }
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let pos = EDITABLE.iter().position(|&i| i == self.focus).unwrap_or(0);
        let next = if forward {
            (pos + 1) % EDITABLE.len()
        } else {
            (pos + EDITABLE.len() - 1) % EDITABLE.len()
        };
        self.focus = EDITABLE[next];
    }

    fn save(&self) -> ScreenAction {
        match validate_profile(
            self.fields[NOME].value(),
            self.fields[SOBRENOME].value(),
            self.fields[EMAIL].value(),
            self.fields[TELEFONE].value(),
            self.fields[SENHA].value(),
        ) {
            Ok(update) => ScreenAction::SaveProfile {
                user: self.user.clone(),
                update,
            },
            Err(message) => ScreenAction::Toast(Toast::error(message)),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        if key.code == KeyCode::Char('t') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.toggle_password();
            return ScreenAction::None;
        }

        if !self.editing {
            return match key.code {
                KeyCode::Char('e') => {
                    self.start_edit();
                    ScreenAction::None
                }
                KeyCode::Char('v') => {
                    self.toggle_password();
                    ScreenAction::None
                }
                KeyCode::Esc => ScreenAction::Go(Route::Principal(self.user.clone())),
                _ => ScreenAction::None,
            };
        }

        match key.code {
            KeyCode::Esc => {
                self.cancel_edit();
                ScreenAction::None
            }
            KeyCode::Tab | KeyCode::Down => {
                self.move_focus(true);
                ScreenAction::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.move_focus(false);
                ScreenAction::None
            }
            KeyCode::Enter => self.save(),
            code => {
                self.fields[self.focus].handle_key(code);
                ScreenAction::None
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let mut constraints = vec![Constraint::Length(3)];
        constraints.extend(std::iter::repeat(Constraint::Length(3)).take(self.fields.len()));
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(3));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mode = if self.editing { " (editando)" } else { "" };
        let title = Paragraph::new(format!("Configurações da Conta{}", mode))
            .style(Style::default().fg(Color::Red).bold())
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        for (i, field) in self.fields.iter().enumerate() {
            field.draw(frame, chunks[1 + i], self.editing && self.focus == i, self.editing);
        }

        let help = if self.editing {
            hint_bar(&[
                ("Tab", "Próximo campo"),
                ("Ctrl-T", "Senha"),
                ("Enter", "Salvar"),
                ("Esc", "Cancelar"),
            ])
        } else {
            hint_bar(&[("e", "Editar"), ("v", "Senha"), ("Esc", "Voltar")])
        };
        frame.render_widget(help, chunks[self.fields.len() + 2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RecordId;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn usuario() -> Usuario {
        Usuario {
            id: RecordId::new("1"),
            nome: "Ana".into(),
            sobrenome: "Silva".into(),
            email: "ana@ponto.com".into(),
            telefone: "81999999999".into(),
            senha: "segredo".into(),
        }
    }

    #[test]
    fn validation_reports_first_problem() {
        assert_eq!(validate_profile("", "", "", "", ""), Err("Nome é Obrigatório"));
        assert_eq!(
            validate_profile("Ana", " ", "a@b.c", "1", ""),
            Err("Sobrenome é Obrigatório")
        );
        assert_eq!(
            validate_profile("Ana", "Silva", "", "1", ""),
            Err("Email é Obrigatório")
        );
        assert_eq!(
            validate_profile("Ana", "Silva", "ana.ponto.com", "", ""),
            Err("Insira um Email Válido")
        );
        assert_eq!(
            validate_profile("Ana", "Silva", "ana@ponto.com", "", ""),
            Err("Telefone é Obrigatório")
        );

        let update = validate_profile(" Ana ", "Silva", "ana@ponto.com", "1", "x").unwrap();
        assert_eq!(update.nome.as_deref(), Some("Ana"));
        assert_eq!(update.senha.as_deref(), Some("x"));
    }

    #[test]
    fn fields_locked_until_edit() {
        let mut screen = ConfiguracaoScreen::new(UserIdentity::new("1"));
        screen.set_usuario(usuario());

        screen.handle_key(press(KeyCode::Char('x')));
        assert_eq!(screen.value(NOME), "Ana");

        screen.handle_key(press(KeyCode::Char('e')));
        assert!(screen.is_editing());
        screen.handle_key(press(KeyCode::Char('x')));
        assert_eq!(screen.value(NOME), "Anax");
    }

    #[test]
    fn cancel_restores_loaded_values() {
        let mut screen = ConfiguracaoScreen::new(UserIdentity::new("1"));
        screen.set_usuario(usuario());
        screen.handle_key(press(KeyCode::Char('e')));
        screen.handle_key(press(KeyCode::Backspace));
        screen.handle_key(press(KeyCode::Esc));

        assert!(!screen.is_editing());
        assert_eq!(screen.value(NOME), "Ana");
    }

    #[test]
    fn cancel_reverts_edits_without_a_loaded_profile() {
        let mut screen = ConfiguracaoScreen::new(UserIdentity::new("1"));
        screen.handle_key(press(KeyCode::Char('e')));
        screen.handle_key(press(KeyCode::Char('Z')));
        screen.handle_key(press(KeyCode::Tab));
        screen.handle_key(press(KeyCode::Char('Q')));
        assert_eq!(screen.value(NOME), "Z");
        screen.handle_key(press(KeyCode::Esc));

        assert!(!screen.is_editing());
        assert_eq!(screen.value(NOME), "");
        assert_eq!(screen.value(SOBRENOME), "");
    }

    #[test]
    fn email_is_skipped_by_focus() {
        let mut screen = ConfiguracaoScreen::new(UserIdentity::new("1"));
        screen.set_usuario(usuario());
        screen.handle_key(press(KeyCode::Char('e')));
        screen.handle_key(press(KeyCode::Tab));
        screen.handle_key(press(KeyCode::Tab));
        screen.handle_key(press(KeyCode::Char('0')));

        assert_eq!(screen.value(EMAIL), "ana@ponto.com");
        assert_eq!(screen.value(TELEFONE), "819999999990");
    }

    #[test]
    fn save_emits_update_or_toast() {
        let mut screen = ConfiguracaoScreen::new(UserIdentity::new("1"));
        screen.set_usuario(usuario());
        screen.handle_key(press(KeyCode::Char('e')));

        match screen.handle_key(press(KeyCode::Enter)) {
            ScreenAction::SaveProfile { user, update } => {
                assert_eq!(user.id, "1");
                assert_eq!(update.sobrenome.as_deref(), Some("Silva"));
            }
            other => panic!("expected save, got {:?}", other),
        }

        for _ in 0..3 {
            screen.handle_key(press(KeyCode::Backspace));
        }
        assert!(matches!(screen.handle_key(press(KeyCode::Enter)), ScreenAction::Toast(_)));
    }

    #[test]
    fn password_visibility_toggles() {
        let mut screen = ConfiguracaoScreen::new(UserIdentity::new("1"));
        assert!(!screen.password_visible());
        screen.handle_key(press(KeyCode::Char('v')));
        assert!(screen.password_visible());
        screen.handle_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));
        assert!(!screen.password_visible());
    }
}
