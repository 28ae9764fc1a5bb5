//! End-to-end tests for the FIPE proxy against a mock upstream.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use serde_json::Value;

mod common;

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[tokio::test]
async fn months_listing_is_served_and_cached() {
    let call_count = Arc::new(AtomicU32::new(0));
    let cc = call_count.clone();
    let upstream = common::start_mock_fipe(move |request| {
        assert!(request.starts_with("POST /api/veiculos/ConsultarTabelaDeReferencia"));
        cc.fetch_add(1, Ordering::SeqCst);
        (200, r#"[{"Codigo":319,"Mes":"março/2025 "}]"#.to_string())
    })
    .await;

    let proxy = common::start_proxy(&format!("http://{}/api/veiculos", upstream)).await;
    let client = client();

    for _ in 0..2 {
        let res = client
            .get(format!("http://{}/api/mes", proxy))
            .send()
            .await
            .expect("proxy unreachable");
        assert_eq!(res.status(), 200);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body[0]["Codigo"], 319);
        assert_eq!(body[0]["Mes"], "março/2025 ");
    }

    assert_eq!(
        call_count.load(Ordering::SeqCst),
        1,
        "second listing must be served from cache"
    );
}

#[tokio::test]
async fn month_lookup_filters_and_is_never_cached() {
    let call_count = Arc::new(AtomicU32::new(0));
    let cc = call_count.clone();
    let upstream = common::start_mock_fipe(move |_| {
        cc.fetch_add(1, Ordering::SeqCst);
        (
            200,
            r#"[{"Codigo":318,"Mes":"fevereiro/2025 "},{"Codigo":319,"Mes":"março/2025 "}]"#
                .to_string(),
        )
    })
    .await;

    let proxy = common::start_proxy(&format!("http://{}/api/veiculos", upstream)).await;
    let client = client();

    let res = client
        .get(format!("http://{}/api/mes=319", proxy))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["Codigo"], 319);

    let res = client
        .get(format!("http://{}/api/mes=999", proxy))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Dados não encontrados");
    assert!(body.get("exemplos").is_some(), "404 must carry the manual");

    assert_eq!(
        call_count.load(Ordering::SeqCst),
        2,
        "by-code lookups always refetch"
    );
}

#[tokio::test]
async fn vehicle_types_never_touch_the_network() {
    // Upstream deliberately unreachable.
    let proxy = common::start_proxy("http://127.0.0.1:1/api/veiculos").await;

    let res = client()
        .get(format!("http://{}/api/mes=319&tipo", proxy))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!([
            {"codigo": 1, "nome": "Carro"},
            {"codigo": 2, "nome": "Moto"},
            {"codigo": 3, "nome": "Caminhão"}
        ])
    );
}

#[tokio::test]
async fn brand_lookup_filters_client_side() {
    let upstream = common::start_mock_fipe(|request| {
        assert!(request.starts_with("POST /api/veiculos/ConsultarMarcas"));
        assert!(request.contains("codigoTabelaReferencia=319"));
        assert!(request.contains("codigoTipoVeiculo=2"));
        (200, r#"[{"Label":"Fiat","Value":"80"}]"#.to_string())
    })
    .await;

    let proxy = common::start_proxy(&format!("http://{}/api/veiculos", upstream)).await;
    let client = client();

    let res = client
        .get(format!("http://{}/api/mes=319&tipo=2/marca=80", proxy))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"Label": "Fiat", "Value": "80"}));

    let res = client
        .get(format!("http://{}/api/mes=319&tipo=2/marca=99", proxy))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Dados não encontrados");
}

#[tokio::test]
async fn model_years_are_fetched_fresh_every_time() {
    let call_count = Arc::new(AtomicU32::new(0));
    let cc = call_count.clone();
    let upstream = common::start_mock_fipe(move |request| {
        assert!(request.starts_with("POST /api/veiculos/ConsultarAnoModelo"));
        cc.fetch_add(1, Ordering::SeqCst);
        (200, r#"[{"Label":"2020 Gasolina","Value":"2020-1"}]"#.to_string())
    })
    .await;

    let proxy = common::start_proxy(&format!("http://{}/api/veiculos", upstream)).await;
    let client = client();

    for _ in 0..2 {
        let res = client
            .get(format!(
                "http://{}/api/mes=319&tipo=2/marca=80/modelo=8071/ano",
                proxy
            ))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200);
    }

    assert_eq!(call_count.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn price_quote_forwards_parameters_verbatim() {
    let upstream = common::start_mock_fipe(|request| {
        assert!(request.starts_with("POST /api/veiculos/ConsultarValorComTodosParametros"));
        // Composite year string must arrive undecomposed, with the fixed
        // traditional query mode.
        assert!(request.contains("ano=2020-1"));
        assert!(request.contains("anoModelo=2020"));
        assert!(request.contains("codigoTipoCombustivel=1"));
        assert!(request.contains("tipoConsulta=tradicional"));
        (
            200,
            r#"{"Valor":"R$ 10.000,00","Marca":"Fiat","Modelo":"Uno"}"#.to_string(),
        )
    })
    .await;

    let proxy = common::start_proxy(&format!("http://{}/api/veiculos", upstream)).await;

    let res = client()
        .get(format!(
            "http://{}/api/mes=319&tipo=2/marca=80/modelo=8071/ano=2020-1/anomodelo=2020/combustivel=1",
            proxy
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["Valor"], "R$ 10.000,00");
}

#[tokio::test]
async fn unmatched_route_answers_the_catch_all_guide() {
    let proxy = common::start_proxy("http://127.0.0.1:1/api/veiculos").await;

    let res = client()
        .get(format!("http://{}/api/bogus", proxy))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Rota não encontrada");
    // The catch-all carries its code tables at the top level, unlike the
    // per-resource manual.
    assert!(body.get("codigosUteis").is_some());
}

#[tokio::test]
async fn welcome_routes_answer_the_manual() {
    let proxy = common::start_proxy("http://127.0.0.1:1/api/veiculos").await;
    let client = client();

    for path in ["/", "/api", "/api/"] {
        let res = client
            .get(format!("http://{}{}", proxy, path))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200, "welcome for {}", path);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["message"], "Bem-vindo à API de Consulta FIPE");
        assert!(body.get("exemplos").is_some());
    }
}

#[tokio::test]
async fn upstream_failure_surfaces_cause_in_detalhes() {
    // Nothing listens on port 1: connection refused at fetch time.
    let proxy = common::start_proxy("http://127.0.0.1:1/api/veiculos").await;

    let res = client()
        .get(format!("http://{}/api/mes", proxy))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 500);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Erro ao consultar a FIPE");
    assert!(
        body["detalhes"].as_str().is_some_and(|d| !d.is_empty()),
        "500 must carry the underlying cause"
    );
    assert!(body.get("guiaDeUso").is_some());
}

#[tokio::test]
async fn upstream_error_status_maps_to_500() {
    let upstream =
        common::start_mock_fipe(|_| (503, r#"{"error":"maintenance"}"#.to_string())).await;
    let proxy = common::start_proxy(&format!("http://{}/api/veiculos", upstream)).await;

    let res = client()
        .get(format!("http://{}/api/mes=319&tipo=2/marca", proxy))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 500);
    let body: Value = res.json().await.unwrap();
    assert!(body["detalhes"].as_str().unwrap().contains("503"));
}
