//! Tests del motor de reportes: join de tres tablas, filtro por rango
//! de fechas, orden y agregados.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use fleet_control::cache::{CacheConfig, TableCache};
use fleet_control::models::{ProviderData, ServiceData, VehicleData};
use fleet_control::repositories::{ProviderRepository, ServiceRepository, VehicleRepository};
use fleet_control::schema::tables;
use fleet_control::services::report_service::ReportService;
use fleet_control::store::InMemoryTableStore;

struct TestDb {
    vehicles: Arc<VehicleRepository>,
    providers: Arc<ProviderRepository>,
    services: Arc<ServiceRepository>,
    reports: ReportService,
}

fn setup() -> TestDb {
    let store = Arc::new(InMemoryTableStore::with_schemas(&[
        &tables::VEHICLES,
        &tables::PROVIDERS,
        &tables::SERVICES,
    ]));
    let cache = Arc::new(TableCache::new(store, CacheConfig { ttl_seconds: 60 }));
    let vehicles = Arc::new(VehicleRepository::new(cache.clone()));
    let providers = Arc::new(ProviderRepository::new(cache.clone()));
    let services = Arc::new(ServiceRepository::new(cache));
    let reports = ReportService::new(services.clone(), vehicles.clone(), providers.clone());
    TestDb {
        vehicles,
        providers,
        services,
        reports,
    }
}

fn vehicle(name: &str, plate: &str) -> VehicleData {
    VehicleData {
        name: name.to_string(),
        plate: plate.to_string(),
        renavam: None,
        year: 2018,
        purchase_price: Decimal::new(4_500_000, 2),
        purchase_date: NaiveDate::from_ymd_opt(2023, 3, 15),
    }
}

fn provider(company: &str, city: &str) -> ProviderData {
    ProviderData {
        company: company.to_string(),
        phone: None,
        contact_name: None,
        tax_id: None,
        email: None,
        address: None,
        address_number: None,
        city: Some(city.to_string()),
        district: None,
        postal_code: None,
    }
}

fn service_on(
    vehicle_id: i64,
    provider_id: i64,
    name: &str,
    date: Option<NaiveDate>,
    amount: Decimal,
) -> ServiceData {
    ServiceData {
        vehicle_id,
        provider_id,
        service_name: name.to_string(),
        service_date: date,
        warranty_days: 90,
        amount,
        mileage_at_service: 50_000,
        mileage_next_service: 55_000,
        note: None,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn escenario_completo_de_alta_historial_y_borrado() {
    let db = setup();

    let v = db.vehicles.insert(vehicle("Gol", "ABC1234")).await.unwrap();
    assert_eq!(v, 1);
    let p = db
        .providers
        .insert(provider("Auto Center", "Curitiba"))
        .await
        .unwrap();
    assert_eq!(p, 1);
    let s = db
        .services
        .insert(service_on(
            v,
            p,
            "Oil change",
            Some(date(2024, 6, 1)),
            Decimal::new(15_000, 2),
        ))
        .await
        .unwrap();

    let rows = db
        .reports
        .service_history(Some((date(2024, 1, 1), date(2024, 12, 31))))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.service_id, s);
    assert_eq!(row.vehicle_name.as_deref(), Some("Gol"));
    assert_eq!(row.plate.as_deref(), Some("ABC1234"));
    assert_eq!(row.company.as_deref(), Some("Auto Center"));
    assert_eq!(row.city.as_deref(), Some("Curitiba"));
    assert_eq!(row.due_date, Some(date(2024, 8, 30)));
    assert_eq!(row.amount, Decimal::new(15_000, 2));

    // El vehículo no se puede borrar mientras tenga servicios
    assert!(db.vehicles.delete(v).await.is_err());
    db.services.delete(s).await.unwrap();
    db.vehicles.delete(v).await.unwrap();

    let rows = db.reports.service_history(None).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn referencia_colgante_deja_campos_en_none_sin_descartar_la_fila() {
    let db = setup();
    let v = db.vehicles.insert(vehicle("Gol", "ABC1234")).await.unwrap();
    let p = db
        .providers
        .insert(provider("Auto Center", "Curitiba"))
        .await
        .unwrap();

    // Servicio apuntando a un vehículo que no existe
    db.services
        .insert(service_on(
            99,
            p,
            "Frenos",
            Some(date(2024, 5, 1)),
            Decimal::new(20_000, 2),
        ))
        .await
        .unwrap();
    db.services
        .insert(service_on(
            v,
            77,
            "Neumáticos",
            Some(date(2024, 4, 1)),
            Decimal::new(80_000, 2),
        ))
        .await
        .unwrap();

    let rows = db.reports.service_history(None).await.unwrap();
    assert_eq!(rows.len(), 2);

    let dangling_vehicle = rows.iter().find(|r| r.vehicle_id == 99).unwrap();
    assert_eq!(dangling_vehicle.vehicle_name, None);
    assert_eq!(dangling_vehicle.plate, None);
    assert_eq!(dangling_vehicle.company.as_deref(), Some("Auto Center"));

    let dangling_provider = rows.iter().find(|r| r.provider_id == 77).unwrap();
    assert_eq!(dangling_provider.company, None);
    assert_eq!(dangling_provider.city, None);
    assert_eq!(dangling_provider.vehicle_name.as_deref(), Some("Gol"));
}

#[tokio::test]
async fn tabla_vacia_corta_el_join() {
    let db = setup();
    let v = db.vehicles.insert(vehicle("Gol", "ABC1234")).await.unwrap();
    // Sin prestadores cargados
    db.services
        .insert(service_on(
            v,
            1,
            "Oil change",
            Some(date(2024, 6, 1)),
            Decimal::new(15_000, 2),
        ))
        .await
        .unwrap();

    let rows = db.reports.service_history(None).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn historial_ordenado_descendente_con_fechas_desconocidas_al_final() {
    let db = setup();
    let v = db.vehicles.insert(vehicle("Gol", "ABC1234")).await.unwrap();
    let p = db
        .providers
        .insert(provider("Auto Center", "Curitiba"))
        .await
        .unwrap();

    db.services
        .insert(service_on(v, p, "Viejo", Some(date(2024, 1, 15)), Decimal::ONE))
        .await
        .unwrap();
    db.services
        .insert(service_on(v, p, "Sin fecha", None, Decimal::ONE))
        .await
        .unwrap();
    db.services
        .insert(service_on(v, p, "Reciente", Some(date(2024, 7, 1)), Decimal::ONE))
        .await
        .unwrap();

    let names: Vec<String> = db
        .reports
        .service_history(None)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.service_name)
        .collect();
    assert_eq!(
        names,
        vec![
            "Reciente".to_string(),
            "Viejo".to_string(),
            "Sin fecha".to_string()
        ]
    );
}

#[tokio::test]
async fn filtro_por_rango_es_inclusivo_y_excluye_fechas_desconocidas() {
    let db = setup();
    let v = db.vehicles.insert(vehicle("Gol", "ABC1234")).await.unwrap();
    let p = db
        .providers
        .insert(provider("Auto Center", "Curitiba"))
        .await
        .unwrap();

    db.services
        .insert(service_on(v, p, "Borde inicio", Some(date(2024, 3, 1)), Decimal::ONE))
        .await
        .unwrap();
    db.services
        .insert(service_on(v, p, "Borde fin", Some(date(2024, 3, 31)), Decimal::ONE))
        .await
        .unwrap();
    db.services
        .insert(service_on(v, p, "Fuera", Some(date(2024, 4, 1)), Decimal::ONE))
        .await
        .unwrap();
    db.services
        .insert(service_on(v, p, "Sin fecha", None, Decimal::ONE))
        .await
        .unwrap();

    let mut names: Vec<String> = db
        .reports
        .service_history(Some((date(2024, 3, 1), date(2024, 3, 31))))
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.service_name)
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec!["Borde fin".to_string(), "Borde inicio".to_string()]
    );
}

#[tokio::test]
async fn resumen_de_gastos_agrupa_y_ordena_por_total() {
    let db = setup();
    let gol = db.vehicles.insert(vehicle("Gol", "AAA1111")).await.unwrap();
    let uno = db.vehicles.insert(vehicle("Uno", "BBB2222")).await.unwrap();
    let p = db
        .providers
        .insert(provider("Auto Center", "Curitiba"))
        .await
        .unwrap();

    db.services
        .insert(service_on(
            gol,
            p,
            "Oil change",
            Some(date(2024, 1, 1)),
            Decimal::new(10_000, 2),
        ))
        .await
        .unwrap();
    db.services
        .insert(service_on(
            gol,
            p,
            "Frenos",
            Some(date(2024, 2, 1)),
            Decimal::new(25_000, 2),
        ))
        .await
        .unwrap();
    db.services
        .insert(service_on(
            uno,
            p,
            "Neumáticos",
            Some(date(2024, 3, 1)),
            Decimal::new(30_000, 2),
        ))
        .await
        .unwrap();

    let summary = db.reports.spend_summary().await.unwrap();
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].vehicle_name, "Gol");
    assert_eq!(summary[0].total_amount, Decimal::new(35_000, 2));
    assert_eq!(summary[1].vehicle_name, "Uno");
    assert_eq!(summary[1].total_amount, Decimal::new(30_000, 2));
}

#[tokio::test]
async fn historial_detallado_calcula_dias_hasta_el_vencimiento() {
    let db = setup();
    let v = db.vehicles.insert(vehicle("Gol", "ABC1234")).await.unwrap();
    let p = db
        .providers
        .insert(provider("Auto Center", "Curitiba"))
        .await
        .unwrap();

    // due_date = 2024-06-01 + 90 = 2024-08-30
    db.services
        .insert(service_on(
            v,
            p,
            "Oil change",
            Some(date(2024, 6, 1)),
            Decimal::new(15_000, 2),
        ))
        .await
        .unwrap();
    db.services
        .insert(service_on(v, p, "Sin fecha", None, Decimal::ONE))
        .await
        .unwrap();

    let rows = db
        .reports
        .detailed_history_at(date(2024, 8, 20))
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);

    let with_due = rows
        .iter()
        .find(|r| r.row.service_name == "Oil change")
        .unwrap();
    assert_eq!(with_due.days_until_due, Some(10));

    let without_due = rows
        .iter()
        .find(|r| r.row.service_name == "Sin fecha")
        .unwrap();
    assert_eq!(without_due.days_until_due, None);
}
