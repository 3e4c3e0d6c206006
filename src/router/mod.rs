//! Screen router
//!
//! Holds the [`Session`] and decides which screen is drawn. Screens ask for
//! transitions with typed [`Route`]s; [`Router::navigate`] is the loose
//! primitive underneath, taking a [`ScreenId`] and optional [`NavParams`].
//! Any screen may go to any other; there is no terminal state.

mod route;
mod session;

pub use route::{Route, UserIdentity};
pub use session::{NavParams, ScreenId, Session};

/// Owner of the session and the only thing allowed to mutate it
#[derive(Debug, Clone, Default)]
pub struct Router {
    session: Session,
}

impl Router {
    /// Start on `Home` with nobody signed in
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `params` into the session, then make `screen` current.
    ///
    /// Never fails. Params with nothing recognized leave the session as is.
    pub fn navigate(&mut self, screen: ScreenId, params: Option<NavParams>) {
        if let Some(params) = params {
            self.session.merge(params);
        }
        tracing::debug!(
            from = %self.session.current_screen(),
            to = %screen,
            "navigate"
        );
        self.session.set_screen(screen);
    }

    /// [`navigate`](Self::navigate) by screen name; unknown names go `Home`
    pub fn navigate_named(&mut self, name: &str, params: Option<NavParams>) {
        self.navigate(ScreenId::parse(name), params);
    }

    /// Typed transition
    pub fn go(&mut self, route: Route) {
        let (screen, params) = route.into_transition();
        let params = (!params.is_empty()).then_some(params);
        self.navigate(screen, params);
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn current(&self) -> ScreenId {
        self.session.current_screen()
    }

    /// The route to draw right now.
    ///
    /// A screen that needs a signed-in user resolves to `Login` while the
    /// session has no user id.
    pub fn route(&self) -> Route {
        let screen = self.session.current_screen();
        let identity = self.session.identity();
        if screen.requires_identity() && identity.is_none() {
            tracing::debug!(%screen, "No signed-in user, showing Login");
            return Route::Login;
        }

        match (screen, identity) {
            (ScreenId::Home, _) => Route::Home,
            (ScreenId::Cadastro, _) => Route::Cadastro,
            (ScreenId::Login, _) => Route::Login,
            (ScreenId::ViewPontos, _) => Route::Pontos,
            (ScreenId::ViewFaculdades, _) => Route::Faculdades,
            (ScreenId::TelaPrincipal, Some(user)) => Route::Principal(user),
            (ScreenId::TelaConfiguracao, Some(user)) => Route::Configuracao(user),
            (ScreenId::TelaPrincipal | ScreenId::TelaConfiguracao, None) => Route::Login,
        }
    }

    /// Where "back" from a list screen leads: the main screen when signed in
    pub fn landing(&self) -> Route {
        match self.session.identity() {
            Some(user) => Route::Principal(user),
            None => Route::Home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_home_and_anonymous() {
        let router = Router::new();
        assert_eq!(router.current(), ScreenId::Home);
        assert_eq!(router.route(), Route::Home);
        assert!(router.session().user_id().is_none());
        assert!(router.session().user_name().is_none());
    }

    #[test]
    fn gated_screens_resolve_to_login_without_identity() {
        let mut router = Router::new();
        router.navigate(ScreenId::TelaConfiguracao, None);

        assert_eq!(router.current(), ScreenId::TelaConfiguracao);
        assert_eq!(router.route(), Route::Login);
    }

    #[test]
    fn go_keeps_name_when_route_has_none() {
        let mut router = Router::new();
        router.go(Route::Principal(UserIdentity::new("u1").with_name("Ana")));
        router.go(Route::Configuracao(UserIdentity::new("u1")));

        assert_eq!(
            router.route(),
            Route::Configuracao(UserIdentity::new("u1").with_name("Ana"))
        );
    }

    #[test]
    fn landing_depends_on_identity() {
        let mut router = Router::new();
        assert_eq!(router.landing(), Route::Home);

        router.navigate(ScreenId::ViewPontos, Some(NavParams::new().user_id("9")));
        assert_eq!(router.landing(), Route::Principal(UserIdentity::new("9")));
    }
}
