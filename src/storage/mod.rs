//! Storage module for ponto
//!
//! Local persistence is limited to the auth token.

mod token;

pub use token::TokenStore;
