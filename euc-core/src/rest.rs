//! Client for the hosted relational store's REST query surface.

use crate::error::{EucError, Result};
use crate::records::{FacilityRecord, LocationRecord, RouteRecord};
use crate::store::{looks_like_port, SupplyChainStore};
use log::info;
use reqwest::Client;
use serde::de::DeserializeOwned;

const SOURCES_QUERY: &str = "locations?select=*&is_eu_facility=eq.false&order=lat.desc";
const FACILITIES_QUERY: &str = "manufacturing_facilities?select=*&order=output_capacity.desc";
const EU_LOCATIONS_QUERY: &str = "locations?select=*&is_eu_facility=eq.true&order=capacity.desc";
const ROUTES_QUERY: &str = "supply_routes?select=*,\
origin:origin_id(name,lat,lng,country),\
destination:destination_id(name,lat,lng,country),\
material:material_id(name,type,criticality_level)\
&order=risk_level.desc";

/// Read-only access to the hosted supply-chain tables.
#[derive(Debug, Clone)]
pub struct RestStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestStore {
    pub fn new(client: Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn url(&self, query: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, query)
    }

    async fn fetch<T: DeserializeOwned>(&self, collection: &str, query: &str) -> Result<Vec<T>> {
        let response = self
            .client
            .get(self.url(query))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(EucError::BadStatus {
                resource: collection.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        let rows: Option<Vec<T>> = serde_json::from_str(&body)?;
        let rows = rows.unwrap_or_default();
        info!("Fetched {} rows from {}", rows.len(), collection);
        Ok(rows)
    }
}

impl SupplyChainStore for RestStore {
    async fn material_sources(&self) -> Result<Vec<LocationRecord>> {
        self.fetch("locations (sources)", SOURCES_QUERY).await
    }

    async fn manufacturing_facilities(&self) -> Result<Vec<FacilityRecord>> {
        self.fetch("manufacturing_facilities", FACILITIES_QUERY).await
    }

    async fn ports(&self) -> Result<Vec<LocationRecord>> {
        let eu_locations: Vec<LocationRecord> =
            self.fetch("locations (EU)", EU_LOCATIONS_QUERY).await?;
        Ok(eu_locations
            .into_iter()
            .filter(|l| looks_like_port(l.name.as_deref()))
            .collect())
    }

    async fn supply_routes(&self) -> Result<Vec<RouteRecord>> {
        self.fetch("supply_routes", ROUTES_QUERY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_base_and_query() {
        let store = RestStore::new(Client::new(), "https://example.supabase.co/", "key");
        assert_eq!(
            store.url(SOURCES_QUERY),
            "https://example.supabase.co/rest/v1/locations?select=*&is_eu_facility=eq.false&order=lat.desc"
        );
    }

    #[test]
    fn routes_query_embeds_joins() {
        assert!(ROUTES_QUERY.starts_with("supply_routes?select=*,origin:origin_id("));
        assert!(ROUTES_QUERY.contains("material:material_id(name,type,criticality_level)"));
        assert!(!ROUTES_QUERY.contains(' '));
    }

    /// Answers every connection with one canned HTTP response.
    async fn canned_server(status: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn non_success_status_is_bad_status() {
        let base = canned_server("503 Service Unavailable", "").await;
        let store = RestStore::new(Client::new(), &base, "key");
        match store.supply_routes().await {
            Err(EucError::BadStatus { resource, status }) => {
                assert_eq!(resource, "supply_routes");
                assert_eq!(status, 503);
            }
            other => panic!("expected BadStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn null_body_is_an_empty_collection() {
        let base = canned_server("200 OK", "null").await;
        let store = RestStore::new(Client::new(), &base, "key");
        assert!(store.manufacturing_facilities().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ports_keep_only_port_names() {
        let base = canned_server(
            "200 OK",
            r#"[{"name":"Port of Rotterdam","lat":"51.9244","lng":4.4777},{"name":"Northvolt Ett","lat":65.5,"lng":22.1}]"#,
        )
        .await;
        let store = RestStore::new(Client::new(), &base, "key");
        let ports = store.ports().await.unwrap();
        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].name.as_deref(), Some("Port of Rotterdam"));
        assert_eq!(ports[0].lat, Some(51.9244));
    }

    #[tokio::test]
    async fn unreachable_store_is_an_error() {
        let store = RestStore::new(Client::new(), "http://127.0.0.1:9", "key");
        assert!(store.material_sources().await.is_err());
    }
}
