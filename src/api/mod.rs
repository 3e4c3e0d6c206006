//! Backend API module for ponto
//!
//! Typed REST client for the attendance backend. The backend owns every
//! canonical record; this side only reads lists, logs in, and submits forms.

mod client;
mod models;

pub use client::{build_client, HttpPontoClient, PontoApi};
pub use models::{
    Credentials, Faculdade, LoginResponse, PedidoCadastro, Ponto, RecordId, Usuario,
    UsuarioUpdate,
};
