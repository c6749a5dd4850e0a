//! Loading route tables from JSON.

use lepre_routing::{ConfigError, Route, RouteConfig, RouteError, RouteName};

#[test]
fn test_load_route_table() {
    let json = r#"[
        {"path": "/", "name": "home"},
        {"path": "/users", "methods": ["GET", "POST"]},
        {"path": "/users/{id}", "methods": ["GET", "PUT", "DELETE"], "name": "user"}
    ]"#;

    let routes: Vec<Route<usize>> = RouteConfig::list_from_json(json)
        .unwrap()
        .into_iter()
        .enumerate()
        .map(|(idx, config)| config.into_route(idx).unwrap())
        .collect();

    assert_eq!(routes.len(), 3);
    assert_eq!(routes[0].resolved_name(), "home");
    assert!(!routes[0].allowed_methods().is_restricted());
    assert_eq!(routes[1].allowed_methods().to_vec(), vec!["GET", "POST"]);
    assert_eq!(routes[1].name_state(), &RouteName::Unbound);
    assert_eq!(*routes[2].handler(), 2);
    assert_eq!(routes[2].allowed_methods().header_value(), "GET, PUT, DELETE");
}

#[test]
fn test_unsupported_method_in_config_fails() {
    let config = RouteConfig::from_json(r#"{"path": "/", "methods": ["GET", "get"]}"#).unwrap();
    match config.into_route(()) {
        Err(ConfigError::Route(RouteError::UnsupportedMethod(method))) => {
            assert_eq!(method, "get");
        }
        other => panic!("expected unsupported method error, got {other:?}"),
    }
}

#[test]
fn test_unknown_field_rejected() {
    let err = RouteConfig::from_json(r#"{"path": "/", "handler": "x"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)), "{err}");
}

#[test]
fn test_missing_path_rejected() {
    let err = RouteConfig::from_json(r#"{"methods": ["GET"]}"#).unwrap_err();
    assert!(err.to_string().starts_with("invalid route config:"), "{err}");
}

#[test]
fn test_route_round_trips_through_config() {
    let mut route = Route::new("/items/{id}", ());
    route
        .allow_methods(["GET", "PATCH"])
        .unwrap()
        .bind_name("item");

    let json = serde_json::to_string(&route.to_config()).unwrap();
    assert_eq!(
        json,
        r#"{"path":"/items/{id}","methods":["GET","PATCH"],"name":"item"}"#
    );

    let mut rebuilt = RouteConfig::from_json(&json).unwrap().into_route(()).unwrap();
    assert_eq!(rebuilt.methods(), route.methods());
    assert_eq!(rebuilt.name(), "item");
}
