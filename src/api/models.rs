//! Wire types for the ponto backend
//!
//! Field names follow the backend's upper-case JSON keys.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Backend record id.
///
/// The backend is not consistent about sending ids as numbers or strings, so
/// both are accepted. An id goes back out in the same JSON kind it came in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RecordId {
    value: String,
    numeric: bool,
}

impl RecordId {
    /// A textual id, sent as a JSON string
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            value: id.into(),
            numeric: false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(value) => RecordId {
                value,
                numeric: false,
            },
            Raw::Number(n) => RecordId {
                value: n.to_string(),
                numeric: true,
            },
        })
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.numeric {
            if let Ok(n) = self.value.parse::<serde_json::Number>() {
                return n.serialize(serializer);
            }
        }
        serializer.serialize_str(&self.value)
    }
}

/// Unpicked ids go out as `""`, which is what the backend expects
fn id_or_empty<S: Serializer>(id: &Option<RecordId>, serializer: S) -> Result<S::Ok, S::Error> {
    match id {
        Some(id) => id.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

/// `POST /usuarios/login` body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Credentials {
    pub email: String,
    pub senha: String,
}

/// `POST /usuarios/login` success payload
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "ID")]
    pub id: RecordId,

    #[serde(default, alias = "NOME")]
    pub nome: Option<String>,

    /// Opaque session token, when the backend issues one
    #[serde(default)]
    pub token: Option<String>,
}

/// A user account as returned by `GET /usuarios/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Usuario {
    pub id: RecordId,
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub sobrenome: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telefone: String,
    #[serde(default)]
    pub senha: String,
}

/// `PUT /usuarios/:id` body; only the present fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct UsuarioUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sobrenome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub senha: Option<String>,
}

/// Partner institution from `GET /faculdades-public`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Faculdade {
    pub id: RecordId,
    #[serde(default)]
    pub nome_faculdade: String,
}

/// Check-in point from `GET /pontos-public`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Ponto {
    pub id: RecordId,
    #[serde(default)]
    pub nome_ponto: String,
    #[serde(default)]
    pub rua_ponto: String,
    #[serde(default)]
    pub cidade_ponto: String,
}

/// Registration request, `POST /pedidosCadastro/pedidosCadastro`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PedidoCadastro {
    pub nome_pedido: String,
    pub sobrenome_pedido: String,
    pub email_pedido: String,
    pub telefone_pedido: String,
    #[serde(serialize_with = "id_or_empty")]
    pub faculdade_pedido: Option<RecordId>,
    #[serde(serialize_with = "id_or_empty")]
    pub ponto_pedido: Option<RecordId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_id_accepts_numbers_and_strings() {
        let ponto: Ponto = serde_json::from_value(json!({
            "ID": 3,
            "NOME_PONTO": "Centro",
            "RUA_PONTO": "Rua A",
            "CIDADE_PONTO": "Recife",
            "LATITUDE": -8.05,
        }))
        .unwrap();
        assert_eq!(ponto.id.as_str(), "3");

        let faculdade: Faculdade =
            serde_json::from_value(json!({ "ID": "f-1", "NOME_FACULDADE": "UFPE" })).unwrap();
        assert_eq!(faculdade.id.as_str(), "f-1");
    }

    #[test]
    fn ids_go_back_out_in_the_kind_they_came_in() {
        let numeric: Faculdade =
            serde_json::from_value(json!({ "ID": 12, "NOME_FACULDADE": "UFPE" })).unwrap();
        let padded: Faculdade =
            serde_json::from_value(json!({ "ID": "007", "NOME_FACULDADE": "UPE" })).unwrap();
        let signed: Ponto = serde_json::from_value(json!({ "ID": "+5" })).unwrap();
        assert_eq!(padded.id.as_str(), "007");

        let pedido = PedidoCadastro {
            nome_pedido: "Ana".into(),
            faculdade_pedido: Some(numeric.id),
            ponto_pedido: Some(signed.id),
            ..Default::default()
        };
        let value = serde_json::to_value(&pedido).unwrap();
        assert_eq!(value["NOME_PEDIDO"], json!("Ana"));
        assert_eq!(value["FACULDADE_PEDIDO"], json!(12));
        assert_eq!(value["PONTO_PEDIDO"], json!("+5"));

        let pedido = PedidoCadastro {
            faculdade_pedido: Some(padded.id),
            ..Default::default()
        };
        let value = serde_json::to_value(&pedido).unwrap();
        assert_eq!(value["FACULDADE_PEDIDO"], json!("007"));
    }

    #[test]
    fn unpicked_ids_are_sent_as_empty_strings() {
        let value = serde_json::to_value(PedidoCadastro::default()).unwrap();
        assert_eq!(value["FACULDADE_PEDIDO"], json!(""));
        assert_eq!(value["PONTO_PEDIDO"], json!(""));
    }

    #[test]
    fn update_skips_absent_fields() {
        let update = UsuarioUpdate {
            nome: Some("Ana".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "NOME": "Ana" }));
    }

    #[test]
    fn login_response_accepts_upper_case_keys() {
        let response: LoginResponse =
            serde_json::from_value(json!({ "ID": 5, "NOME": "Ana" })).unwrap();
        assert_eq!(response.id.as_str(), "5");
        assert_eq!(response.nome.as_deref(), Some("Ana"));
        assert!(response.token.is_none());
    }
}
