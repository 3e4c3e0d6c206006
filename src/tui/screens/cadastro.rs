//! Cadastro screen - registration request form
//!
//! Personal details are typed in; institution and check-in point are picked
//! from the public lists the app loads when the screen opens.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use super::ScreenAction;
use crate::api::{Faculdade, PedidoCadastro, Ponto};
use crate::router::Route;
use crate::tui::widgets::{hint_bar, TextField};

const TEXT_FIELDS: usize = 4;
const FACULDADE_SLOT: usize = 4;
const PONTO_SLOT: usize = 5;
const SUBMIT_SLOT: usize = 6;
const SLOTS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Picker {
    Faculdade,
    Ponto,
}

/// Cadastro screen state
pub struct CadastroScreen {
    fields: [TextField; TEXT_FIELDS],
    focus: usize,
    faculdades: Vec<Faculdade>,
    pontos: Vec<Ponto>,
    faculdade: Option<usize>,
    ponto: Option<usize>,
    picker: Option<Picker>,
    picker_state: ListState,
}

impl Default for CadastroScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl CadastroScreen {
    pub fn new() -> Self {
        Self {
            fields: [
                TextField::new("Seu Nome"),
                TextField::new("Seu Sobrenome"),
                TextField::new("Seu E-mail"),
                TextField::new("Seu Telefone"),
            ],
            focus: 0,
            faculdades: Vec::new(),
            pontos: Vec::new(),
            faculdade: None,
            ponto: None,
            picker: None,
            picker_state: ListState::default(),
        }
    }

    pub fn set_faculdades(&mut self, faculdades: Vec<Faculdade>) {
        self.faculdades = faculdades;
        self.faculdade = None;
    }

    pub fn set_pontos(&mut self, pontos: Vec<Ponto>) {
        self.pontos = pontos;
        self.ponto = None;
    }

    pub fn selected_faculdade(&self) -> Option<&Faculdade> {
        self.faculdade.and_then(|i| self.faculdades.get(i))
    }

    pub fn selected_ponto(&self) -> Option<&Ponto> {
        self.ponto.and_then(|i| self.pontos.get(i))
    }

    pub fn is_picking(&self) -> bool {
        self.picker.is_some()
    }

    fn pedido(&self) -> PedidoCadastro {
        PedidoCadastro {
            nome_pedido: self.fields[0].trimmed(),
            sobrenome_pedido: self.fields[1].trimmed(),
            email_pedido: self.fields[2].trimmed(),
            telefone_pedido: self.fields[3].trimmed(),
            faculdade_pedido: self.selected_faculdade().map(|f| f.id.clone()),
            ponto_pedido: self.selected_ponto().map(|p| p.id.clone()),
        }
    }

    fn picker_len(&self, picker: Picker) -> usize {
        match picker {
            Picker::Faculdade => self.faculdades.len(),
            Picker::Ponto => self.pontos.len(),
        }
    }

    fn open_picker(&mut self, picker: Picker) {
        let current = match picker {
            Picker::Faculdade => self.faculdade,
            Picker::Ponto => self.ponto,
        };
        let len = self.picker_len(picker);
        self.picker_state
            .select(if len == 0 { None } else { Some(current.unwrap_or(0)) });
        self.picker = Some(picker);
    }

    fn handle_picker_key(&mut self, picker: Picker, key: KeyCode) {
        let len = self.picker_len(picker);
        match key {
            KeyCode::Up | KeyCode::Char('k') if len > 0 => {
                let i = self.picker_state.selected().unwrap_or(0);
                self.picker_state.select(Some(if i == 0 { len - 1 } else { i - 1 }));
            }
            KeyCode::Down | KeyCode::Char('j') if len > 0 => {
                let i = self.picker_state.selected().unwrap_or(0);
                self.picker_state.select(Some((i + 1) % len));
            }
            KeyCode::Enter => {
                if let Some(i) = self.picker_state.selected() {
                    match picker {
                        Picker::Faculdade => self.faculdade = Some(i),
                        Picker::Ponto => self.ponto = Some(i),
                    }
                }
                self.picker = None;
            }
            KeyCode::Esc => self.picker = None,
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        if let Some(picker) = self.picker {
            self.handle_picker_key(picker, key.code);
            return ScreenAction::None;
        }

        match key.code {
            KeyCode::Esc => ScreenAction::Go(Route::Home),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % SLOTS;
                ScreenAction::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + SLOTS - 1) % SLOTS;
                ScreenAction::None
            }
            KeyCode::Enter => match self.focus {
                FACULDADE_SLOT => {
                    self.open_picker(Picker::Faculdade);
                    ScreenAction::None
                }
                PONTO_SLOT => {
                    self.open_picker(Picker::Ponto);
                    ScreenAction::None
                }
                SUBMIT_SLOT => ScreenAction::SubmitPedido(self.pedido()),
                _ => {
                    self.focus += 1;
                    ScreenAction::None
                }
            },
            code if self.focus < TEXT_FIELDS => {
                self.fields[self.focus].handle_key(code);
                ScreenAction::None
            }
            _ => ScreenAction::None,
        }
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect) {
        let mut constraints = vec![Constraint::Length(3)]; // Title
        constraints.extend(std::iter::repeat(Constraint::Length(3)).take(SLOTS - 1));
        constraints.push(Constraint::Length(1)); // Submit
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(3)); // Help

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let title = Paragraph::new("Insira seus dados para solicitar Cadastro")
            .style(Style::default().fg(Color::Red).bold())
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        for (i, field) in self.fields.iter().enumerate() {
            field.draw(frame, chunks[1 + i], self.focus == i, true);
        }

        let faculdade = self
            .selected_faculdade()
            .map(|f| f.nome_faculdade.clone())
            .unwrap_or_else(|| "Selecione sua Faculdade".to_string());
        self.draw_selector(frame, chunks[1 + FACULDADE_SLOT], "Faculdade", faculdade, FACULDADE_SLOT);

        let ponto = self
            .selected_ponto()
            .map(|p| p.nome_ponto.clone())
            .unwrap_or_else(|| "Selecione seu Ponto".to_string());
        self.draw_selector(frame, chunks[1 + PONTO_SLOT], "Ponto", ponto, PONTO_SLOT);

        let submit_style = if self.focus == SUBMIT_SLOT {
            Style::default().fg(Color::Black).bg(Color::Red).bold()
        } else {
            Style::default().fg(Color::Red)
        };
        let submit = Paragraph::new(" Solicitar Cadastro ")
            .style(submit_style)
            .alignment(Alignment::Center);
        frame.render_widget(submit, chunks[1 + SUBMIT_SLOT]);

        let help = hint_bar(&[
            ("Tab", "Próximo campo"),
            ("Enter", "Escolher / Enviar"),
            ("Esc", "Voltar"),
        ]);
        frame.render_widget(help, chunks[SLOTS + 2]);

        if let Some(picker) = self.picker {
            self.draw_picker(frame, area, picker);
        }
    }

    fn draw_selector(&self, frame: &mut Frame, area: Rect, label: &str, text: String, slot: usize) {
        let border = if self.focus == slot {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Blue)
        };
        let selector = Paragraph::new(format!("{} ▾", text)).block(
            Block::default()
                .title(format!(" {} ", label))
                .borders(Borders::ALL)
                .border_style(border),
        );
        frame.render_widget(selector, area);
    }

    fn draw_picker(&mut self, frame: &mut Frame, area: Rect, picker: Picker) {
        let popup = Rect {
            x: area.x + area.width / 6,
            y: area.y + area.height / 6,
            width: area.width * 2 / 3,
            height: area.height * 2 / 3,
        };

        let (title, names): (&str, Vec<String>) = match picker {
            Picker::Faculdade => (
                " Selecione sua Faculdade ",
                self.faculdades.iter().map(|f| f.nome_faculdade.clone()).collect(),
            ),
            Picker::Ponto => (
                " Selecione seu Ponto ",
                self.pontos.iter().map(|p| p.nome_ponto.clone()).collect(),
            ),
        };

        frame.render_widget(Clear, popup);

        if names.is_empty() {
            let empty = Paragraph::new("Nenhuma opção disponível")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().title(title).borders(Borders::ALL));
            frame.render_widget(empty, popup);
            return;
        }

        let items: Vec<ListItem> = names.into_iter().map(ListItem::new).collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .style(Style::default().bg(Color::Black)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, popup, &mut self.picker_state);
    }
}
