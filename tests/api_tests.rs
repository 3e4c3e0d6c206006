use ponto::api::{
    Credentials, HttpPontoClient, PedidoCadastro, PontoApi, RecordId, UsuarioUpdate,
};
use ponto::config::Settings;
use ponto::PontoError;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpPontoClient {
    let mut settings = Settings::default();
    settings.api.base_url = format!("{}/", server.uri());
    HttpPontoClient::from_settings(&settings).expect("client should build")
}

#[tokio::test]
async fn login_posts_uppercase_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/usuarios/login"))
        .and(body_json(json!({ "EMAIL": "ana@ponto.com", "SENHA": "segredo" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ID": 12,
            "NOME": "Ana",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .login(&Credentials {
            email: "ana@ponto.com".into(),
            senha: "segredo".into(),
        })
        .await
        .expect("login should succeed");

    assert_eq!(response.id.as_str(), "12");
    assert_eq!(response.nome.as_deref(), Some("Ana"));
    assert_eq!(response.token, None);
}

#[tokio::test]
async fn rejected_login_is_a_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/usuarios/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "nope" })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .login(&Credentials {
            email: "ana@ponto.com".into(),
            senha: "errada".into(),
        })
        .await
        .expect_err("401 should fail");

    match err {
        PontoError::Status { status, endpoint } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(endpoint, "/usuarios/login");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn get_usuario_reads_profile_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/usuarios/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ID": 7,
            "NOME": "Ana",
            "SOBRENOME": "Souza",
            "EMAIL": "ana@ponto.com",
            "TELEFONE": "81999990000",
            "SENHA": "segredo",
            "ADMIN": false,
        })))
        .mount(&server)
        .await;

    let usuario = client_for(&server)
        .get_usuario("7")
        .await
        .expect("profile should load");

    assert_eq!(usuario.id.as_str(), "7");
    assert_eq!(usuario.sobrenome, "Souza");
    assert_eq!(usuario.telefone, "81999990000");
}

#[tokio::test]
async fn update_usuario_puts_only_present_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/usuarios/7"))
        .and(body_json(json!({ "NOME": "Ana", "TELEFONE": "81988887777" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let update = UsuarioUpdate {
        nome: Some("Ana".into()),
        telefone: Some("81988887777".into()),
        ..UsuarioUpdate::default()
    };
    client_for(&server)
        .update_usuario("7", &update)
        .await
        .expect("update should succeed");
}

#[tokio::test]
async fn public_lists_accept_mixed_id_types() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/faculdades-public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "ID": 1, "NOME_FACULDADE": "UFPE" },
            { "ID": "uni-2", "NOME_FACULDADE": "UNICAP" },
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pontos-public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "ID": 3, "NOME_PONTO": "Centro", "RUA_PONTO": "Rua A", "CIDADE_PONTO": "Recife" },
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let faculdades = client.list_faculdades().await.expect("faculdades");
    let pontos = client.list_pontos().await.expect("pontos");

    assert_eq!(faculdades.len(), 2);
    assert_eq!(faculdades[0].id.as_str(), "1");
    assert_eq!(faculdades[1].id.as_str(), "uni-2");
    assert_eq!(pontos[0].cidade_ponto, "Recife");
}

#[tokio::test]
async fn malformed_list_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pontos-public"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list_pontos()
        .await
        .expect_err("html is not a list");
    assert!(matches!(err, PontoError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn submit_pedido_posts_registration() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/pedidosCadastro/pedidosCadastro"))
        .and(body_json(json!({
            "NOME_PEDIDO": "Ana",
            "SOBRENOME_PEDIDO": "Souza",
            "EMAIL_PEDIDO": "ana@ponto.com",
            "TELEFONE_PEDIDO": "81999990000",
            "FACULDADE_PEDIDO": 1,
            "PONTO_PEDIDO": "007",
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let pedido = PedidoCadastro {
        nome_pedido: "Ana".into(),
        sobrenome_pedido: "Souza".into(),
        email_pedido: "ana@ponto.com".into(),
        telefone_pedido: "81999990000".into(),
        faculdade_pedido: Some(serde_json::from_value::<RecordId>(json!(1)).unwrap()),
        ponto_pedido: Some(serde_json::from_value::<RecordId>(json!("007")).unwrap()),
    };
    client_for(&server)
        .submit_pedido(&pedido)
        .await
        .expect("pedido should be accepted");
}

#[tokio::test]
async fn missing_usuario_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/usuarios/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_usuario("404")
        .await
        .expect_err("missing user");
    assert!(matches!(err, PontoError::NotFound(_)), "got {err:?}");
}
