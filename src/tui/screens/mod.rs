//! TUI screens
//!
//! Screens hold form/list state and turn keys into [`ScreenAction`]s. They
//! never talk to the backend; the app performs the requested work and feeds
//! results back in.

mod cadastro;
mod configuracao;
mod faculdades;
mod home;
mod login;
pub mod pagination;
mod pontos;
mod principal;

pub use cadastro::CadastroScreen;
pub use configuracao::{validate_profile, ConfiguracaoScreen};
pub use faculdades::FaculdadesScreen;
pub use home::HomeScreen;
pub use login::LoginScreen;
pub use pagination::Paginator;
pub use pontos::PontosScreen;
pub use principal::PrincipalScreen;

use crate::api::{Credentials, PedidoCadastro, UsuarioUpdate};
use crate::router::{Route, UserIdentity};
use crate::tui::widgets::Toast;

/// What a screen asks the app to do after a key press
#[derive(Debug, Clone)]
pub enum ScreenAction {
    None,
    /// Switch screens
    Go(Route),
    /// Leave a list screen for the main screen (or home when signed out)
    Back,
    Login(Credentials),
    SubmitPedido(PedidoCadastro),
    SaveProfile {
        user: UserIdentity,
        update: UsuarioUpdate,
    },
    /// Fetch the current list again
    Reload,
    ShowInfo,
    Toast(Toast),
    SignOut,
    Quit,
}
