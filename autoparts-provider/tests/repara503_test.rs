#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! repara503 client tests against a local mock server.

mod common;

use autoparts_provider::{
    ApiConfig, InventoryKey, PartQuery, ProviderError, create_api,
};
use common::{Canned, MockServer};

fn corolla_query(part: &str) -> PartQuery {
    PartQuery {
        marca: "TOYOTA".to_string(),
        modelo: "COROLLA".to_string(),
        parte: part.to_string(),
    }
}

// ============ 品牌/车型 ============

#[tokio::test]
async fn list_brand_models_keeps_duplicates_and_order() {
    let server = MockServer::start(vec![Canned::ok(
        r#"[{"marca":"TOYOTA","modelo":"COROLLA"},
            {"marca":"HONDA","modelo":"CIVIC"},
            {"marca":"TOYOTA","modelo":"COROLLA"}]"#,
    )]);

    let pairs = require_ok!(server.api().list_brand_models().await);
    let requests = server.finish();

    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[0], pairs[2]);
    assert_eq!(pairs[1].marca, "HONDA");
    assert_eq!(requests[0].url, "/api/usados/marcasymodelos");
}

// ============ 搜索 ============

#[tokio::test]
async fn search_encodes_query_and_preserves_row_order() {
    let server = MockServer::start(vec![Canned::ok(
        r#"[{"id": 7, "descripcion": "Filtro de aire", "nombreEmpresa": "Rivas Autoparts"},
            {"id": 3, "descripcion": "Filtro de aceite", "nombreEmpresa": "Pana Autoparts"}]"#,
    )]);

    let rows = require_ok!(server.api().search_parts(&corolla_query("filtro de aire")).await);
    let requests = server.finish();

    assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![7, 3]);
    assert_eq!(
        requests[0].url,
        "/api/usados/parte?marca=TOYOTA&modelo=COROLLA&parte=filtro%20de%20aire"
    );
    assert_eq!(requests[0].accept.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn search_null_body_is_empty_list() {
    let server = MockServer::start(vec![Canned::ok("null")]);

    let rows = require_ok!(server.api().search_parts(&corolla_query("x")).await);
    server.finish();

    assert!(rows.is_empty());
}

#[tokio::test]
async fn search_skips_undecodable_rows() {
    let server = MockServer::start(vec![Canned::ok(
        r#"[{"id": 7, "descripcion": "Faro", "foto": "https://img/7.jpg", "cantidad": 2},
            {"id": "abc", "descripcion": "Roto"},
            {"id": 8, "datosEmpresa": "Pana Autoparts"},
            {"id": 0, "descripcion": "Espejo", "empresa": "7"}]"#,
    )]);

    let rows = require_ok!(server.api().search_parts(&corolla_query("faro")).await);
    server.finish();

    assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![7, 0]);
    assert_eq!(rows[0].foto.as_deref(), Some("https://img/7.jpg"));
    assert_eq!(rows[0].cantidad, Some(2));
}

#[tokio::test]
async fn search_server_error_maps_to_http_status() {
    let server = MockServer::start(vec![Canned::status(500, "internal")]);

    let result = server.api().search_parts(&corolla_query("filtro")).await;
    server.finish();

    assert!(
        matches!(
            &result,
            Err(ProviderError::HttpStatus { status: 500, raw_message: Some(m), .. }) if m == "internal"
        ),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
async fn search_malformed_body_is_parse_error() {
    let server = MockServer::start(vec![Canned::ok("<html>oops</html>")]);

    let result = server.api().search_parts(&corolla_query("filtro")).await;
    server.finish();

    assert!(matches!(result, Err(ProviderError::ParseError { .. })));
}

// ============ 详情 ============

#[tokio::test]
async fn get_part_hits_id_endpoint() {
    let server = MockServer::start(vec![Canned::ok(
        r#"{"id": 42, "cantidad": 1, "venta": "25.00", "foto": "https://img/42.jpg",
            "datosEmpresa": {"nombreEmpresa": "Pana Autoparts", "direccion": "Soyapango",
                             "telefono": "22577777", "wa1": "70000000"}}"#,
    )]);

    let detail = require_ok!(server.api().get_part(42).await);
    let requests = server.finish();

    assert_eq!(requests[0].url, "/api/usados/usados/42");
    assert_eq!(detail.venta, Some(25.0));
    assert_eq!(
        detail.datos_empresa.and_then(|c| c.wa1).as_deref(),
        Some("70000000")
    );
}

#[tokio::test]
async fn get_part_empty_object_is_empty_record() {
    let server = MockServer::start(vec![Canned::ok("{}")]);

    let detail = require_ok!(server.api().get_part(5).await);
    server.finish();

    assert!(detail.is_empty());
}

#[tokio::test]
async fn find_inventory_sends_composite_key() {
    let server = MockServer::start(vec![Canned::ok(
        r#"[{"observaciones": "Buen estado", "equivalencias": "COROLLA 2009-2013"}]"#,
    )]);

    let key = InventoryKey {
        empresa: "Rivas Autoparts".to_string(),
        vehiculo: "TOYOTA COROLLA".to_string(),
        categoria: "MOTOR".to_string(),
        parte: "FILTRO".to_string(),
        cod_inventario: "A-19".to_string(),
    };
    let detail = require_ok!(server.api().find_inventory(&key).await);
    let requests = server.finish();

    assert_eq!(
        requests[0].url,
        "/api/usados/inventarios?empresa=Rivas%20Autoparts&vehiculo=TOYOTA%20COROLLA\
         &categoria=MOTOR&parte=FILTRO&cod_inventario=A-19"
    );
    assert_eq!(detail.observaciones.as_deref(), Some("Buen estado"));
}

#[tokio::test]
async fn detail_not_found_is_expected_error() {
    let server = MockServer::start(vec![Canned::status(404, "")]);

    let result = server.api().get_part(999).await;
    server.finish();

    let err = result.expect_err("404 should fail");
    assert!(err.is_expected());
}

// ============ 传输层 ============

#[tokio::test]
async fn unreachable_service_is_network_error() {
    let config = ApiConfig {
        base_url: "http://127.0.0.1:1/api".to_string(),
        connect_timeout_secs: 1,
        request_timeout_secs: 1,
    };
    let api = create_api(&config).expect("create api");

    let result = api.list_brand_models().await;
    assert!(
        matches!(
            result,
            Err(ProviderError::NetworkError { .. } | ProviderError::Timeout { .. })
        ),
        "unexpected result: {result:?}"
    );
}

#[test]
fn invalid_config_is_rejected_before_any_request() {
    let result = create_api(&ApiConfig::with_base_url("not-a-url"));
    assert!(matches!(
        result,
        Err(ProviderError::InvalidParameter { .. })
    ));
}
