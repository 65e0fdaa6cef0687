//! Tests de la API HTTP con `tower::ServiceExt::oneshot` sobre el
//! router completo y el store en memoria.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use fleet_control::config::environment::EnvironmentConfig;
use fleet_control::schema::tables;
use fleet_control::state::AppState;
use fleet_control::store::{InMemoryTableStore, RawTable, TableStore};
use fleet_control::utils::errors::AppError;

/// Store que responde todo con error de transporte
struct FailingStore;

#[async_trait]
impl TableStore for FailingStore {
    async fn fetch_table(&self, table: &str) -> Result<RawTable, AppError> {
        Err(AppError::StoreIo(format!("fetch '{}': connection reset", table)))
    }

    async fn replace_table(
        &self,
        table: &str,
        _header: Vec<String>,
        _rows: Vec<Vec<String>>,
    ) -> Result<(), AppError> {
        Err(AppError::StoreIo(format!("replace '{}': connection reset", table)))
    }
}

fn test_app() -> Router {
    app_with_store(Arc::new(InMemoryTableStore::with_schemas(&[
        &tables::VEHICLES,
        &tables::PROVIDERS,
        &tables::SERVICES,
    ])))
}

fn app_with_store(store: Arc<dyn TableStore>) -> Router {
    let config = EnvironmentConfig {
        environment: "test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        cors_origins: Vec::new(),
        storage_mode: "memory".to_string(),
        sheet_api_base_url: None,
        sheet_id: None,
        sheet_api_token: None,
        cache_ttl_seconds: 60,
    };
    fleet_control::create_app(AppState::new(store, config))
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send_empty(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn vehicle_body(name: &str, plate: &str) -> Value {
    json!({
        "name": name,
        "plate": plate,
        "renavam": null,
        "year": 2020,
        "purchase_price": "30000.00",
        "purchase_date": "2024-01-10"
    })
}

fn provider_body(company: &str) -> Value {
    json!({
        "company": company,
        "phone": "11 99999-0000",
        "contact_name": null,
        "tax_id": null,
        "email": null,
        "address": null,
        "address_number": null,
        "city": "Curitiba",
        "district": null,
        "postal_code": null
    })
}

fn service_body(vehicle_id: i64, provider_id: i64) -> Value {
    json!({
        "vehicle_id": vehicle_id,
        "provider_id": provider_id,
        "service_name": "Oil change",
        "service_date": "2024-06-01",
        "warranty_days": 90,
        "amount": "150.00",
        "mileage_at_service": 50000,
        "mileage_next_service": 55000,
        "note": null
    })
}

#[tokio::test]
async fn health_responde_healthy() {
    let app = test_app();
    let (status, body) = send_empty(&app, "GET", "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "fleet-control");
}

#[tokio::test]
async fn crear_vehiculo_devuelve_envelope_con_id_y_placa_normalizada() {
    let app = test_app();

    let (status, body) =
        send_json(&app, "POST", "/api/vehicles", vehicle_body("Gol", " abc1234 ")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["plate"], "ABC1234");

    let (status, body) = send_empty(&app, "GET", "/api/vehicles").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn placa_duplicada_devuelve_409_duplicate_value() {
    let app = test_app();
    send_json(&app, "POST", "/api/vehicles", vehicle_body("Gol", "ABC1234")).await;

    let (status, body) =
        send_json(&app, "POST", "/api/vehicles", vehicle_body("Otro", "abc1234")).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "DUPLICATE_VALUE");
}

#[tokio::test]
async fn fallo_del_store_devuelve_502_store_io_error() {
    let app = app_with_store(Arc::new(FailingStore));

    let (status, body) = send_empty(&app, "GET", "/api/vehicles").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "STORE_IO_ERROR");
    assert_eq!(body["error"], "Store I/O Error");
}

#[tokio::test]
async fn vehiculo_inexistente_devuelve_404() {
    let app = test_app();

    let (status, body) = send_empty(&app, "GET", "/api/vehicles/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn payload_invalido_devuelve_400_validation_error() {
    let app = test_app();

    let (status, body) =
        send_json(&app, "POST", "/api/vehicles", vehicle_body("", "ABC1234")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn precio_negativo_devuelve_400_bad_request() {
    let app = test_app();

    let mut body = vehicle_body("Gol", "ABC1234");
    body["purchase_price"] = json!("-1.00");
    let (status, response) = send_json(&app, "POST", "/api/vehicles", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn borrar_vehiculo_referenciado_devuelve_409_has_dependents() {
    let app = test_app();
    send_json(&app, "POST", "/api/vehicles", vehicle_body("Gol", "ABC1234")).await;
    send_json(&app, "POST", "/api/providers", provider_body("Auto Center")).await;
    let (status, _) = send_json(&app, "POST", "/api/services", service_body(1, 1)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_empty(&app, "DELETE", "/api/vehicles/1").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "HAS_DEPENDENTS");

    // Borrado en orden: servicio primero, vehículo después
    let (status, _) = send_empty(&app, "DELETE", "/api/services/1").await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send_empty(&app, "DELETE", "/api/vehicles/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn upsert_de_prestador_distingue_alta_de_actualizacion() {
    let app = test_app();

    let (status, body) =
        send_json(&app, "POST", "/api/providers/upsert", provider_body("Auto Center")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["created"], true);
    assert_eq!(body["data"]["id"], 1);

    let mut again = provider_body("Auto Center");
    again["contact_name"] = json!("João");
    let (status, body) = send_json(&app, "POST", "/api/providers/upsert", again).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["created"], false);
    assert_eq!(body["data"]["id"], 1);
}

#[tokio::test]
async fn crear_servicio_deriva_due_date() {
    let app = test_app();
    send_json(&app, "POST", "/api/vehicles", vehicle_body("Gol", "ABC1234")).await;
    send_json(&app, "POST", "/api/providers", provider_body("Auto Center")).await;

    let (status, body) = send_json(&app, "POST", "/api/services", service_body(1, 1)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["due_date"], "2024-08-30");
}

#[tokio::test]
async fn historial_con_join_completo_y_filtro_por_fechas() {
    let app = test_app();
    send_json(&app, "POST", "/api/vehicles", vehicle_body("Gol", "ABC1234")).await;
    send_json(&app, "POST", "/api/providers", provider_body("Auto Center")).await;
    send_json(&app, "POST", "/api/services", service_body(1, 1)).await;

    let (status, body) = send_empty(
        &app,
        "GET",
        "/api/reports/service-history?date_start=2024-01-01&date_end=2024-12-31",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["vehicle_name"], "Gol");
    assert_eq!(rows[0]["company"], "Auto Center");
    assert_eq!(rows[0]["due_date"], "2024-08-30");

    // Fuera del rango: vacío
    let (status, body) = send_empty(
        &app,
        "GET",
        "/api/reports/service-history?date_start=2023-01-01&date_end=2023-12-31",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn filtro_de_fechas_incompleto_devuelve_400() {
    let app = test_app();

    let (status, body) = send_empty(
        &app,
        "GET",
        "/api/reports/service-history?date_start=2024-01-01",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn resumen_de_gastos_por_vehiculo() {
    let app = test_app();
    send_json(&app, "POST", "/api/vehicles", vehicle_body("Gol", "ABC1234")).await;
    send_json(&app, "POST", "/api/providers", provider_body("Auto Center")).await;
    send_json(&app, "POST", "/api/services", service_body(1, 1)).await;
    let mut second = service_body(1, 1);
    second["service_name"] = json!("Frenos");
    second["amount"] = json!("250.00");
    send_json(&app, "POST", "/api/services", second).await;

    let (status, body) = send_empty(&app, "GET", "/api/reports/spend-summary").await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["vehicle_name"], "Gol");
    assert_eq!(rows[0]["total_amount"], "400.00");
}
