use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::api::models::{
    Credentials, Faculdade, LoginResponse, PedidoCadastro, Ponto, Usuario, UsuarioUpdate,
};
use crate::config::Settings;
use crate::{PontoError, Result};

/// Operations the screens need from the backend.
#[async_trait]
pub trait PontoApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse>;

    async fn get_usuario(&self, id: &str) -> Result<Usuario>;

    async fn update_usuario(&self, id: &str, update: &UsuarioUpdate) -> Result<()>;

    async fn list_faculdades(&self) -> Result<Vec<Faculdade>>;

    async fn list_pontos(&self) -> Result<Vec<Ponto>>;

    async fn submit_pedido(&self, pedido: &PedidoCadastro) -> Result<()>;
}

/// Build the backend client from runtime settings.
pub fn build_client(settings: &Settings) -> Result<Arc<dyn PontoApi>> {
    Ok(Arc::new(HttpPontoClient::from_settings(settings)?))
}

/// JSON-over-HTTP client for the ponto backend
pub struct HttpPontoClient {
    http: Client,
    base_url: String,
}

impl HttpPontoClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let base_url = settings.api.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(PontoError::Config(
                "api.base_url is empty. Set it in config or PONTO_API_URL.".to_string(),
            ));
        }

        Ok(Self {
            http: Client::builder()
                .timeout(settings.request_timeout())
                .build()?,
            base_url,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send and fail on any non-2xx status
    async fn send(&self, request: RequestBuilder, endpoint: &str) -> Result<reqwest::Response> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!(%status, endpoint, "Backend rejected request");
            return Err(PontoError::Status {
                status,
                endpoint: endpoint.to_string(),
            });
        }

        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &str,
    ) -> Result<T> {
        let response = self.send(request, endpoint).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl PontoApi for HttpPontoClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let endpoint = "/usuarios/login";
        tracing::debug!(email = %credentials.email, "Logging in");

        self.send_json(self.http.post(self.url(endpoint)).json(credentials), endpoint)
            .await
    }

    async fn get_usuario(&self, id: &str) -> Result<Usuario> {
        let endpoint = format!("/usuarios/{}", id);
        match self
            .send_json(self.http.get(self.url(&endpoint)), &endpoint)
            .await
        {
            Err(PontoError::Status { status, .. }) if status == reqwest::StatusCode::NOT_FOUND => {
                Err(PontoError::NotFound(format!("usuario {}", id)))
            }
            result => result,
        }
    }

    async fn update_usuario(&self, id: &str, update: &UsuarioUpdate) -> Result<()> {
        let endpoint = format!("/usuarios/{}", id);
        self.send(self.http.put(self.url(&endpoint)).json(update), &endpoint)
            .await?;
        Ok(())
    }

    async fn list_faculdades(&self) -> Result<Vec<Faculdade>> {
        let endpoint = "/faculdades-public";
        self.send_json(self.http.get(self.url(endpoint)), endpoint)
            .await
    }

    async fn list_pontos(&self) -> Result<Vec<Ponto>> {
        let endpoint = "/pontos-public";
        self.send_json(self.http.get(self.url(endpoint)), endpoint)
            .await
    }

    async fn submit_pedido(&self, pedido: &PedidoCadastro) -> Result<()> {
        let endpoint = "/pedidosCadastro/pedidosCadastro";
        self.send(self.http.post(self.url(endpoint)).json(pedido), endpoint)
            .await?;
        Ok(())
    }
}
