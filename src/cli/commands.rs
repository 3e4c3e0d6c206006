//! CLI command implementations

use anyhow::{Context, Result};
use serde::Serialize;

use crate::api::{build_client, Credentials};
use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::router::{NavParams, ScreenId};
use crate::storage::TokenStore;
use crate::tui::screens::Paginator;

/// Launch the TUI on the requested screen
pub async fn launch_tui(
    settings: &Settings,
    screen: &str,
    user_id: Option<String>,
    user_name: Option<String>,
) -> Result<()> {
    let params = NavParams {
        user_id,
        nome: user_name,
    };
    let params = (!params.is_empty()).then_some(params);

    crate::tui::run(settings, ScreenId::parse(screen), params).await
}

/// Log in without the TUI and keep the returned token
pub async fn login(settings: &Settings, email: &str, password: &str) -> Result<()> {
    let api = build_client(settings)?;

    let response = api
        .login(&Credentials {
            email: email.trim().to_string(),
            senha: password.to_string(),
        })
        .await
        .context("Login failed")?;

    if let Some(token) = response.token.as_deref() {
        let store = TokenStore::open(settings);
        store.save(token)?;
        tracing::debug!(path = %store.path().display(), "Stored auth token");
    }

    match response.nome.as_deref() {
        Some(nome) if !nome.is_empty() => println!("Logged in as {} (id {})", nome, response.id),
        _ => println!("Logged in (id {})", response.id),
    }

    Ok(())
}

/// Forget the stored token
pub fn logout(settings: &Settings) -> Result<()> {
    if TokenStore::open(settings).clear()? {
        println!("Signed out");
    } else {
        println!("No stored session");
    }
    Ok(())
}

/// List public check-in points, one page at a time
pub async fn list_pontos(settings: &Settings, page: usize, json: bool) -> Result<()> {
    let api = build_client(settings)?;
    let pontos = api.list_pontos().await.context("Failed to load pontos")?;

    let pager = pager_at(settings, pontos.len(), page);
    let visible = pager.slice(&pontos);

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    if pontos.is_empty() {
        println!("No pontos found");
        return Ok(());
    }

    println!("{:<8} {:<28} {:<32} {:<16}", "ID", "Ponto", "Rua", "Cidade");
    println!("{}", "-".repeat(86));
    for ponto in visible {
        println!(
            "{:<8} {:<28} {:<32} {:<16}",
            truncate(ponto.id.as_str(), 8),
            truncate(&ponto.nome_ponto, 28),
            truncate(&ponto.rua_ponto, 32),
            truncate(&ponto.cidade_ponto, 16),
        );
    }
    println!();
    println!("Página {} de {}", pager.page(), pager.total_pages());

    Ok(())
}

/// List partner institutions, one page at a time
pub async fn list_faculdades(settings: &Settings, page: usize, json: bool) -> Result<()> {
    let api = build_client(settings)?;
    let faculdades = api
        .list_faculdades()
        .await
        .context("Failed to load faculdades")?;

    let pager = pager_at(settings, faculdades.len(), page);
    let visible = pager.slice(&faculdades);

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    if faculdades.is_empty() {
        println!("No faculdades found");
        return Ok(());
    }

    println!("{:<8} {:<40}", "ID", "Faculdade");
    println!("{}", "-".repeat(49));
    for faculdade in visible {
        println!(
            "{:<8} {:<40}",
            truncate(faculdade.id.as_str(), 8),
            truncate(&faculdade.nome_faculdade, 40)
        );
    }
    println!();
    println!("Página {} de {}", pager.page(), pager.total_pages());

    Ok(())
}

#[derive(Serialize)]
struct ProfileView<'a> {
    id: &'a str,
    nome: &'a str,
    sobrenome: &'a str,
    email: &'a str,
    telefone: &'a str,
}

/// Show a user's profile
pub async fn show_profile(settings: &Settings, id: &str, json: bool) -> Result<()> {
    let api = build_client(settings)?;
    let usuario = api
        .get_usuario(id)
        .await
        .with_context(|| format!("Failed to load user {}", id))?;

    let view = ProfileView {
        id: usuario.id.as_str(),
        nome: &usuario.nome,
        sobrenome: &usuario.sobrenome,
        email: &usuario.email,
        telefone: &usuario.telefone,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("ID: {}", view.id);
    println!("Nome: {} {}", view.nome, view.sobrenome);
    println!("Email: {}", view.email);
    println!("Telefone: {}", view.telefone);

    Ok(())
}

pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
        ConfigCommand::Set { key, value } => {
            let path = Settings::config_path()?;
            // Edit the file's own values so env overrides are not persisted
            let mut file_settings = if path.exists() {
                Settings::load_from(&path)?
            } else {
                Settings::default()
            };
            file_settings.set_value(&key, &value)?;
            file_settings.write_to(&path)?;
            println!("Set {} = {}", key, value);
        }
    }

    Ok(())
}

fn pager_at(settings: &Settings, len: usize, page: usize) -> Paginator {
    let mut pager = Paginator::new(settings.tui.items_per_page);
    pager.reset(len);
    pager.go_to(page);
    pager
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
