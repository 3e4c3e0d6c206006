//! Session state: which screen is showing and who is signed in

use serde::Deserialize;
use serde_json::Value;
use std::fmt;

use super::route::UserIdentity;

/// Every screen the router knows how to show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScreenId {
    #[default]
    Home,
    Cadastro,
    Login,
    TelaPrincipal,
    ViewPontos,
    ViewFaculdades,
    TelaConfiguracao,
}

impl ScreenId {
    pub const ALL: [ScreenId; 7] = [
        ScreenId::Home,
        ScreenId::Cadastro,
        ScreenId::Login,
        ScreenId::TelaPrincipal,
        ScreenId::ViewPontos,
        ScreenId::ViewFaculdades,
        ScreenId::TelaConfiguracao,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScreenId::Home => "Home",
            ScreenId::Cadastro => "Cadastro",
            ScreenId::Login => "Login",
            ScreenId::TelaPrincipal => "TelaPrincipal",
            ScreenId::ViewPontos => "ViewPontos",
            ScreenId::ViewFaculdades => "ViewFaculdades",
            ScreenId::TelaConfiguracao => "TelaConfiguracao",
        }
    }

    /// Resolve a screen by name. Unknown names fall back to `Home`.
    ///
    /// `TelaInicial` is an older name for the home screen and is accepted
    /// as an alias.
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case("TelaInicial") {
            return ScreenId::Home;
        }

        Self::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(name))
            .unwrap_or_else(|| {
                tracing::debug!(screen = name, "Unknown screen, falling back to Home");
                ScreenId::Home
            })
    }

    /// Screens that can only be drawn for a signed-in user
    pub fn requires_identity(self) -> bool {
        matches!(self, ScreenId::TelaPrincipal | ScreenId::TelaConfiguracao)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for ScreenId {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

/// Session fields a transition may carry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NavParams {
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,

    #[serde(default)]
    pub nome: Option<String>,
}

impl NavParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_id(mut self, id: impl Into<String>) -> Self {
        self.user_id = Some(id.into());
        self
    }

    pub fn nome(mut self, nome: impl Into<String>) -> Self {
        self.nome = Some(nome.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.nome.is_none()
    }

    /// Pick the recognized keys out of an arbitrary JSON value.
    ///
    /// Unknown keys, non-object values and values of the wrong shape are
    /// ignored. Numeric ids are kept in their decimal form.
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };

        let field = |key: &str| match map.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };

        Self {
            user_id: field("userId"),
            nome: field("nome"),
        }
    }
}

impl From<&UserIdentity> for NavParams {
    fn from(identity: &UserIdentity) -> Self {
        Self {
            user_id: Some(identity.id.clone()),
            nome: identity.name.clone(),
        }
    }
}

/// In-memory navigation and identity state, alive for the whole run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current_screen: ScreenId,
    user_id: Option<String>,
    user_name: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_screen(&self) -> ScreenId {
        self.current_screen
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// The signed-in user, if a user id has ever been set
    pub fn identity(&self) -> Option<UserIdentity> {
        self.user_id.as_ref().map(|id| UserIdentity {
            id: id.clone(),
            name: self.user_name.clone(),
        })
    }

    pub(super) fn set_screen(&mut self, screen: ScreenId) {
        self.current_screen = screen;
    }

    /// Overwrite each field present in `params`; leave the rest untouched.
    ///
    /// Empty strings count as absent.
    pub(super) fn merge(&mut self, params: NavParams) {
        if let Some(id) = params.user_id.filter(|s| !s.is_empty()) {
            self.user_id = Some(id);
        }
        if let Some(nome) = params.nome.filter(|s| !s.is_empty()) {
            self.user_name = Some(nome);
        }
    }
}
