//! Main TUI application state and logic

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use std::sync::Arc;
use std::time::Duration;

use crate::api::{Credentials, PedidoCadastro, PontoApi, UsuarioUpdate};
use crate::config::Settings;
use crate::router::{NavParams, Route, Router, ScreenId, UserIdentity};
use crate::storage::TokenStore;
use crate::tui::screens::{
    CadastroScreen, ConfiguracaoScreen, FaculdadesScreen, HomeScreen, LoginScreen, PontosScreen,
    PrincipalScreen, ScreenAction,
};
use crate::tui::widgets::{HelpPopup, Toast};

/// Main application state
pub struct App {
    settings: Settings,
    api: Arc<dyn PontoApi>,
    tokens: TokenStore,
    router: Router,
    shown: Route,
    show_help: bool,
    should_quit: bool,
    toast: Option<Toast>,

    // Screen states
    home: HomeScreen,
    login: LoginScreen,
    cadastro: CadastroScreen,
    principal: Option<PrincipalScreen>,
    pontos: PontosScreen,
    faculdades: FaculdadesScreen,
    configuracao: Option<ConfiguracaoScreen>,
}

impl App {
    /// Create a new app instance, sitting on the home screen
    pub fn new(settings: Settings, api: Arc<dyn PontoApi>) -> Self {
        let per_page = settings.tui.items_per_page;
        let tokens = TokenStore::open(&settings);

        Self {
            settings,
            api,
            tokens,
            router: Router::new(),
            shown: Route::Home,
            show_help: false,
            should_quit: false,
            toast: None,
            home: HomeScreen::new(),
            login: LoginScreen::new(),
            cadastro: CadastroScreen::new(),
            principal: None,
            pontos: PontosScreen::new(per_page),
            faculdades: FaculdadesScreen::new(per_page),
            configuracao: None,
        }
    }

    /// Open the first screen through the loose `navigate` entry point
    pub async fn start(&mut self, screen: ScreenId, params: Option<NavParams>) {
        self.router.navigate(screen, params);
        self.enter().await;
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// The route currently drawn
    pub fn route(&self) -> &Route {
        &self.shown
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn principal(&self) -> Option<&PrincipalScreen> {
        self.principal.as_ref()
    }

    pub fn configuracao(&self) -> Option<&ConfiguracaoScreen> {
        self.configuracao.as_ref()
    }

    pub fn pontos(&self) -> &PontosScreen {
        &self.pontos
    }

    pub fn faculdades(&self) -> &FaculdadesScreen {
        &self.faculdades
    }

    pub fn cadastro(&self) -> &CadastroScreen {
        &self.cadastro
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Toggle help popup
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Draw the current screen, then the overlays
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.size();

        match &self.shown {
            Route::Home => self.home.draw(frame, area),
            Route::Login => self.login.draw(frame, area),
            Route::Cadastro => self.cadastro.draw(frame, area),
            Route::Pontos => self.pontos.draw(frame, area),
            Route::Faculdades => self.faculdades.draw(frame, area),
            Route::Principal(_) => {
                if let Some(screen) = self.principal.as_mut() {
                    screen.draw(frame, area);
                }
            }
            Route::Configuracao(_) => {
                if let Some(screen) = self.configuracao.as_ref() {
                    screen.draw(frame, area);
                }
            }
        }

        if let Some(toast) = &self.toast {
            toast.draw(frame, area);
        }

        if self.show_help {
            HelpPopup::draw(frame, area, self.shown.screen_id());
        }
    }

    /// Whether plain character keys belong to a text field right now
    fn captures_text(&self) -> bool {
        match &self.shown {
            Route::Login | Route::Cadastro => true,
            Route::Configuracao(_) => self
                .configuracao
                .as_ref()
                .is_some_and(ConfiguracaoScreen::is_editing),
            _ => false,
        }
    }

    /// Handle key input
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        if self.show_help {
            self.show_help = false;
            return Ok(());
        }

        if key.code == KeyCode::Char('?') && !self.captures_text() {
            self.toggle_help();
            return Ok(());
        }

        let action = match &self.shown {
            Route::Home => self.home.handle_key(key),
            Route::Login => self.login.handle_key(key),
            Route::Cadastro => self.cadastro.handle_key(key),
            Route::Pontos => self.pontos.handle_key(key),
            Route::Faculdades => self.faculdades.handle_key(key),
            Route::Principal(_) => self
                .principal
                .as_mut()
                .map_or(ScreenAction::None, |s| s.handle_key(key)),
            Route::Configuracao(_) => self
                .configuracao
                .as_mut()
                .map_or(ScreenAction::None, |s| s.handle_key(key)),
        };

        self.apply(action).await;
        Ok(())
    }

    /// Carry out what a screen asked for
    async fn apply(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::Go(route) => self.go(route).await,
            ScreenAction::Back => {
                let landing = self.router.landing();
                self.go(landing).await;
            }
            ScreenAction::Login(credentials) => self.login(credentials).await,
            ScreenAction::SubmitPedido(pedido) => self.submit_pedido(pedido).await,
            ScreenAction::SaveProfile { user, update } => self.save_profile(user, update).await,
            ScreenAction::Reload => self.enter().await,
            ScreenAction::ShowInfo => {
                self.notify(
                    Toast::info("Mais Informações").with_detail(self.settings.tui.info_url.clone()),
                );
            }
            ScreenAction::Toast(toast) => self.notify(toast),
            ScreenAction::SignOut => {
                self.go(Route::Home).await;
                self.notify(Toast::success("Você foi deslogado com sucesso!"));
            }
            ScreenAction::Quit => self.should_quit = true,
        }
    }

    /// Switch screens and run the new screen's entry work
    async fn go(&mut self, route: Route) {
        self.router.go(route);
        self.enter().await;
    }

    /// Reset and load the screen the router now points at
    async fn enter(&mut self) {
        let route = self.router.route();
        self.shown = route.clone();
        self.show_help = false;

        match route {
            Route::Home => self.home = HomeScreen::new(),
            Route::Login => self.login = LoginScreen::new(),
            Route::Cadastro => {
                self.cadastro = CadastroScreen::new();
                match self.api.list_faculdades().await {
                    Ok(faculdades) => self.cadastro.set_faculdades(faculdades),
                    Err(e) => tracing::error!(error = %e, "Failed to load faculdades"),
                }
                match self.api.list_pontos().await {
                    Ok(pontos) => self.cadastro.set_pontos(pontos),
                    Err(e) => tracing::error!(error = %e, "Failed to load pontos"),
                }
            }
            Route::Principal(user) => {
                let mut screen = PrincipalScreen::new(user.clone());
                match self.api.get_usuario(&user.id).await {
                    Ok(usuario) => screen.set_nome(usuario.nome),
                    Err(e) => tracing::error!(error = %e, user = %user.id, "Failed to load user name"),
                }
                self.principal = Some(screen);
            }
            Route::Pontos => {
                self.pontos.start_loading();
                match self.api.list_pontos().await {
                    Ok(pontos) => self.pontos.set_pontos(pontos),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to load pontos");
                        self.pontos.set_failed();
                        self.notify(
                            Toast::error("Erro ao carregar pontos")
                                .with_detail("Tente novamente mais tarde"),
                        );
                    }
                }
            }
            Route::Faculdades => {
                self.faculdades.start_loading();
                match self.api.list_faculdades().await {
                    Ok(faculdades) => self.faculdades.set_faculdades(faculdades),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to load faculdades");
                        self.faculdades.set_failed();
                        self.notify(
                            Toast::error("Erro ao carregar faculdades")
                                .with_detail("Tente novamente mais tarde"),
                        );
                    }
                }
            }
            Route::Configuracao(user) => {
                let mut screen = ConfiguracaoScreen::new(user.clone());
                match self.api.get_usuario(&user.id).await {
                    Ok(usuario) => screen.set_usuario(usuario),
                    Err(e) => {
                        tracing::error!(error = %e, user = %user.id, "Failed to load user");
                        self.notify(Toast::error("Erro ao pegar dados do usuário"));
                    }
                }
                self.configuracao = Some(screen);
            }
        }
    }

    async fn login(&mut self, credentials: Credentials) {
        match self.api.login(&credentials).await {
            Ok(response) => {
                if let Some(token) = response.token.as_deref() {
                    if let Err(e) = self.tokens.save(token) {
                        tracing::warn!(error = %e, "Failed to store auth token");
                    }
                }

                let mut user = UserIdentity::new(response.id.to_string());
                if let Some(nome) = response.nome.filter(|n| !n.is_empty()) {
                    user = user.with_name(nome);
                }

                tracing::info!(user = %user.id, "Logged in");
                self.go(Route::Principal(user)).await;
                self.notify(
                    Toast::success("Login bem-sucedido")
                        .with_detail("Você foi autenticado com sucesso."),
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "Login failed");
                self.notify(Toast::error("Falha ao realizar login.").with_detail("Login não realizado"));
            }
        }
    }

    async fn submit_pedido(&mut self, pedido: PedidoCadastro) {
        match self.api.submit_pedido(&pedido).await {
            Ok(()) => {
                self.go(Route::Home).await;
                self.notify(
                    Toast::success("Envio bem-sucedido!").with_detail("Seu pedido foi computado."),
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "Registration request failed");
                self.notify(
                    Toast::error("Erro ao fazer Pedido de Cadastro")
                        .with_detail("Pedido não enviado."),
                );
            }
        }
    }

    async fn save_profile(&mut self, user: UserIdentity, update: UsuarioUpdate) {
        match self.api.update_usuario(&user.id, &update).await {
            Ok(()) => {
                let user = match update.nome {
                    Some(nome) => user.with_name(nome),
                    None => user,
                };
                self.go(Route::Principal(user)).await;
                self.notify(Toast::success("Cadastro Atualizado com Sucesso!"));
            }
            Err(e) => {
                tracing::error!(error = %e, user = %user.id, "Profile update failed");
                self.notify(Toast::error("Erro ao atualizar Usuário."));
            }
        }
    }

    fn notify(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    /// Update app state
    pub fn update(&mut self) {
        let ttl = Duration::from_secs(self.settings.tui.toast_secs);
        if self.toast.as_ref().is_some_and(|t| t.is_expired(ttl)) {
            self.toast = None;
        }
    }
}
