use ponto::router::{NavParams, Route, Router, ScreenId, UserIdentity};
use serde_json::json;

#[test]
fn fresh_router_is_home_with_no_identity() {
    let router = Router::new();
    let session = router.session();

    assert_eq!(session.current_screen(), ScreenId::Home);
    assert_eq!(session.user_id(), None);
    assert_eq!(session.user_name(), None);
}

#[test]
fn current_screen_tracks_most_recent_request() {
    let mut router = Router::new();
    let sequence = [
        ScreenId::Login,
        ScreenId::Cadastro,
        ScreenId::ViewPontos,
        ScreenId::TelaConfiguracao,
        ScreenId::Home,
        ScreenId::ViewFaculdades,
        ScreenId::TelaPrincipal,
        ScreenId::ViewFaculdades,
    ];

    for screen in sequence {
        router.navigate(screen, None);
        assert_eq!(router.current(), screen);
    }
}

#[test]
fn every_screen_is_reachable_from_every_screen() {
    let mut router = Router::new();

    for from in ScreenId::ALL {
        for to in ScreenId::ALL {
            router.navigate(from, None);
            router.navigate(to, None);
            assert_eq!(router.current(), to, "{} -> {}", from, to);
        }
    }
}

#[test]
fn unknown_screen_name_falls_back_to_home() {
    let mut router = Router::new();
    router.navigate(ScreenId::ViewPontos, None);

    router.navigate_named("TelaQueNaoExiste", None);
    assert_eq!(router.current(), ScreenId::Home);
    assert_eq!(router.route(), Route::Home);

    router.navigate_named("", None);
    assert_eq!(router.current(), ScreenId::Home);
}

#[test]
fn known_names_resolve_including_legacy_home_alias() {
    for screen in ScreenId::ALL {
        assert_eq!(ScreenId::parse(screen.name()), screen);
    }
    assert_eq!(ScreenId::parse("TelaInicial"), ScreenId::Home);
}

#[test]
fn user_id_persists_across_param_less_navigation() {
    let mut router = Router::new();
    router.navigate(ScreenId::Login, Some(NavParams::new().user_id("42")));
    router.navigate(ScreenId::ViewPontos, None);
    router.navigate(ScreenId::Home, None);

    assert_eq!(router.session().user_id(), Some("42"));
}

#[test]
fn principal_receives_id_and_name() {
    let mut router = Router::new();
    router.navigate(
        ScreenId::TelaPrincipal,
        Some(NavParams::new().user_id("u1").nome("Ana")),
    );

    assert_eq!(
        router.route(),
        Route::Principal(UserIdentity::new("u1").with_name("Ana"))
    );
    assert_eq!(router.session().user_id(), Some("u1"));
    assert_eq!(router.session().user_name(), Some("Ana"));
}

#[test]
fn empty_params_leave_session_unchanged() {
    let mut router = Router::new();
    router.navigate(
        ScreenId::TelaPrincipal,
        Some(NavParams::new().user_id("u1").nome("Ana")),
    );
    let before = router.session().clone();

    router.navigate(ScreenId::TelaPrincipal, Some(NavParams::new()));
    assert_eq!(router.session(), &before);

    router.navigate(
        ScreenId::TelaPrincipal,
        Some(NavParams::new().user_id("").nome("")),
    );
    assert_eq!(router.session(), &before);
}

#[test]
fn merge_is_last_write_wins_per_field() {
    let mut router = Router::new();
    router.navigate(
        ScreenId::TelaPrincipal,
        Some(NavParams::new().user_id("u1").nome("Ana")),
    );
    router.navigate(
        ScreenId::TelaPrincipal,
        Some(NavParams::new().nome("Ana Maria")),
    );

    assert_eq!(router.session().user_id(), Some("u1"));
    assert_eq!(router.session().user_name(), Some("Ana Maria"));

    router.navigate(ScreenId::TelaPrincipal, Some(NavParams::new().user_id("u2")));
    assert_eq!(router.session().user_id(), Some("u2"));
    assert_eq!(router.session().user_name(), Some("Ana Maria"));
}

#[test]
fn loose_params_only_merge_recognized_keys() {
    let params = NavParams::from_value(&json!({
        "userId": 42,
        "nome": "Ana",
        "token": "abc",
        "extra": { "nested": true },
    }));
    assert_eq!(params, NavParams::new().user_id("42").nome("Ana"));

    let mut router = Router::new();
    router.navigate(ScreenId::TelaPrincipal, Some(params));
    router.navigate(
        ScreenId::ViewPontos,
        Some(NavParams::from_value(&json!({ "nome": ["not", "a", "string"] }))),
    );
    router.navigate(ScreenId::Home, Some(NavParams::from_value(&json!("junk"))));

    assert_eq!(router.session().user_id(), Some("42"));
    assert_eq!(router.session().user_name(), Some("Ana"));
}

#[test]
fn gated_screens_need_an_identity_to_draw() {
    let mut router = Router::new();

    router.navigate(ScreenId::TelaPrincipal, None);
    assert_eq!(router.current(), ScreenId::TelaPrincipal);
    assert_eq!(router.route(), Route::Login);

    router.navigate(ScreenId::TelaConfiguracao, Some(NavParams::new().nome("Ana")));
    assert_eq!(router.route(), Route::Login);

    router.navigate(ScreenId::TelaConfiguracao, Some(NavParams::new().user_id("7")));
    assert_eq!(
        router.route(),
        Route::Configuracao(UserIdentity::new("7").with_name("Ana"))
    );
}

#[test]
fn typed_routes_round_trip_through_the_session() {
    let mut router = Router::new();
    let routes = [
        Route::Home,
        Route::Cadastro,
        Route::Login,
        Route::Principal(UserIdentity::new("u9").with_name("Bia")),
        Route::Pontos,
        Route::Faculdades,
        Route::Configuracao(UserIdentity::new("u9").with_name("Bia")),
    ];

    for route in routes {
        router.go(route.clone());
        assert_eq!(router.route(), route);
        assert_eq!(router.current(), route.screen_id());
    }
}
