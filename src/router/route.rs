//! Typed routes: each screen together with the data it cannot be drawn without

use super::session::{NavParams, ScreenId};

/// A signed-in user as far as the screens care
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: String,
    pub name: Option<String>,
}

impl UserIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name for greetings; empty until the backend has told us one
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Where the app is, or wants to go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Cadastro,
    Login,
    Principal(UserIdentity),
    Pontos,
    Faculdades,
    Configuracao(UserIdentity),
}

impl Route {
    pub fn screen_id(&self) -> ScreenId {
        match self {
            Route::Home => ScreenId::Home,
            Route::Cadastro => ScreenId::Cadastro,
            Route::Login => ScreenId::Login,
            Route::Principal(_) => ScreenId::TelaPrincipal,
            Route::Pontos => ScreenId::ViewPontos,
            Route::Faculdades => ScreenId::ViewFaculdades,
            Route::Configuracao(_) => ScreenId::TelaConfiguracao,
        }
    }

    pub fn identity(&self) -> Option<&UserIdentity> {
        match self {
            Route::Principal(user) | Route::Configuracao(user) => Some(user),
            _ => None,
        }
    }

    /// Lower a typed route to the screen id plus session params
    pub fn into_transition(self) -> (ScreenId, NavParams) {
        let screen = self.screen_id();
        let params = self.identity().map(NavParams::from).unwrap_or_default();
        (screen, params)
    }
}
