//! Cliente HTTP del servicio de planillas
//!
//! Habla con la API de valores del servicio remoto: GET de la pestaña
//! completa y clear+update para sobrescribirla. Autenticación por
//! bearer token; reintentos y rate limiting son responsabilidad del
//! servicio, no de este cliente.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error, info};

use super::{RawTable, TableStore};
use crate::utils::errors::AppError;

/// Cliente del servicio de planillas
#[derive(Clone)]
pub struct SheetApiClient {
    client: reqwest::Client,
    base_url: String,
    sheet_id: String,
    api_token: String,
}

/// Respuesta de la API de valores: lista de filas de celdas
#[derive(Debug, Deserialize)]
struct ValuesResponse {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl SheetApiClient {
    pub fn new(base_url: String, sheet_id: String, api_token: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .expect("Failed to create HTTP client");

        info!("📊 Cliente de planillas configurado (sheet: {})", sheet_id);

        Self {
            client,
            base_url,
            sheet_id,
            api_token,
        }
    }

    fn values_url(&self, table: &str) -> String {
        format!(
            "{}/spreadsheets/{}/values/{}",
            self.base_url,
            self.sheet_id,
            urlencoding::encode(table)
        )
    }
}

#[async_trait]
impl TableStore for SheetApiClient {
    async fn fetch_table(&self, table: &str) -> Result<RawTable, AppError> {
        let url = self.values_url(table);
        debug!("📥 Leyendo pestaña '{}'", table);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|e| AppError::StoreIo(format!("fetch '{}': {}", table, e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::TableNotFound(table.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("❌ Lectura de '{}' falló con {}: {}", table, status, body);
            return Err(AppError::StoreIo(format!(
                "fetch '{}' returned {}",
                table, status
            )));
        }

        let parsed: ValuesResponse = response
            .json()
            .await
            .map_err(|e| AppError::StoreIo(format!("parse '{}': {}", table, e)))?;

        let mut values = parsed.values.into_iter();
        let header = values.next().unwrap_or_default();
        Ok(RawTable {
            header,
            rows: values.collect(),
        })
    }

    async fn replace_table(
        &self,
        table: &str,
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> Result<(), AppError> {
        let url = self.values_url(table);
        debug!("💾 Sobrescribiendo pestaña '{}' ({} filas)", table, rows.len());

        // Clear primero: la sobreescritura debe dejar exactamente el
        // contenido nuevo, sin restos de filas viejas más largas
        let clear = self
            .client
            .post(format!("{}:clear", url))
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|e| AppError::StoreIo(format!("clear '{}': {}", table, e)))?;

        if clear.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::TableNotFound(table.to_string()));
        }
        if !clear.status().is_success() {
            return Err(AppError::StoreIo(format!(
                "clear '{}' returned {}",
                table,
                clear.status()
            )));
        }

        let mut values: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 1);
        values.push(header);
        values.extend(rows);

        let update = self
            .client
            .put(&url)
            .bearer_auth(&self.api_token)
            .query(&[("valueInputOption", "RAW")])
            .json(&json!({ "values": values }))
            .send()
            .await
            .map_err(|e| AppError::StoreIo(format!("update '{}': {}", table, e)))?;

        if !update.status().is_success() {
            let status = update.status();
            let body = update.text().await.unwrap_or_default();
            error!("❌ Escritura de '{}' falló con {}: {}", table, status, body);
            return Err(AppError::StoreIo(format!(
                "update '{}' returned {}",
                table, status
            )));
        }

        Ok(())
    }
}
