//! Help popup widget

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::router::ScreenId;

/// Help popup that shows keyboard shortcuts
pub struct HelpPopup;

impl HelpPopup {
    /// Shortcuts listed for each screen
    pub fn shortcuts(screen: ScreenId) -> (&'static str, &'static [(&'static str, &'static str)]) {
        match screen {
            ScreenId::Home => (
                "Atalhos do Início",
                &[
                    ("↑/↓", "Mover seleção"),
                    ("Enter", "Abrir opção selecionada"),
                    ("l", "Fazer login"),
                    ("c", "Solicitar cadastro"),
                    ("i", "Mais informações"),
                    ("q", "Sair do aplicativo"),
                ],
            ),
            ScreenId::Login => (
                "Atalhos do Login",
                &[
                    ("Tab/↓", "Próximo campo"),
                    ("↑", "Campo anterior"),
                    ("Enter", "Próximo campo / entrar"),
                    ("Esc", "Voltar ao início"),
                ],
            ),
            ScreenId::Cadastro => (
                "Atalhos do Cadastro",
                &[
                    ("Tab/↓", "Próximo campo"),
                    ("↑", "Campo anterior"),
                    ("Enter", "Próximo campo / escolher opção / enviar"),
                    ("Esc", "Voltar ao início"),
                ],
            ),
            ScreenId::TelaPrincipal => (
                "Atalhos da Tela Principal",
                &[
                    ("↑/↓", "Mover seleção"),
                    ("Enter", "Abrir opção selecionada"),
                    ("p", "Ver pontos"),
                    ("f", "Ver faculdades"),
                    ("s", "Configurações da conta"),
                    ("x", "Sair"),
                ],
            ),
            ScreenId::ViewPontos | ScreenId::ViewFaculdades => (
                "Atalhos das Listas",
                &[
                    ("←/h", "Página anterior"),
                    ("→/l", "Próxima página"),
                    ("r", "Recarregar"),
                    ("Esc", "Voltar"),
                ],
            ),
            ScreenId::TelaConfiguracao => (
                "Atalhos das Configurações",
                &[
                    ("e", "Editar campos"),
                    ("v", "Mostrar/ocultar senha"),
                    ("Ctrl-T", "Mostrar/ocultar senha (editando)"),
                    ("Tab/↓", "Próximo campo (editando)"),
                    ("Enter", "Salvar (editando)"),
                    ("Esc", "Cancelar edição / voltar"),
                ],
            ),
        }
    }

    pub fn draw(frame: &mut Frame, area: Rect, screen: ScreenId) {
        // Calculate popup area (centered, 60% width, 70% height)
        let popup_width = (area.width as f32 * 0.6) as u16;
        let popup_height = (area.height as f32 * 0.7) as u16;
        let popup_x = (area.width - popup_width) / 2;
        let popup_y = (area.height - popup_height) / 2;

        let popup_area = Rect {
            x: popup_x,
            y: popup_y,
            width: popup_width,
            height: popup_height,
        };

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let (title, keys) = Self::shortcuts(screen);

        let mut full_text = vec![
            Line::from(Span::styled(title, Style::default().fg(Color::Cyan).bold())),
            Line::from(""),
        ];
        full_text.extend(keys.iter().map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{:<8}", key), Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ])
        }));
        full_text.push(Line::from(vec![
            Span::styled(format!("{:<8}", "Ctrl-C"), Style::default().fg(Color::Yellow)),
            Span::raw("Sair de qualquer tela"),
        ]));
        full_text.push(Line::from(""));
        full_text.push(Line::from(Span::styled(
            "Pressione qualquer tecla para fechar",
            Style::default().fg(Color::DarkGray),
        )));

        let help = Paragraph::new(full_text).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Ajuda ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        );

        frame.render_widget(help, popup_area);
    }
}
