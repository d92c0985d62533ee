use tokio::sync::RwLock;

use crate::core::config::MapConfig;
use crate::core::error::{AppError, Result};

/// Serves the village boundary GeoJSON overlay.
///
/// The asset lives at an external URL; it is fetched on first request and
/// kept in memory for the lifetime of the process (the boundary polygon does
/// not change at runtime).
pub struct BoundaryService {
    client: reqwest::Client,
    url: Option<String>,
    cache: RwLock<Option<serde_json::Value>>,
}

impl BoundaryService {
    pub fn new(config: &MapConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("SigdesaCore/1.0 (village-gis-dashboard)")
                .build()
                .expect("Failed to build HTTP client"),
            url: config.boundary_geojson_url.clone(),
            cache: RwLock::new(None),
        }
    }

    /// Get the boundary GeoJSON, fetching and memoizing on first use
    pub async fn get(&self) -> Result<serde_json::Value> {
        {
            let cache_read = self.cache.read().await;
            if let Some(ref cached) = *cache_read {
                return Ok(cached.clone());
            }
        }

        let url = self
            .url
            .as_deref()
            .ok_or_else(|| AppError::NotFound("Boundary data is not configured".to_string()))?;

        tracing::debug!("Fetching boundary GeoJSON from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch boundary GeoJSON: {:?}", e);
                AppError::ExternalServiceError("Failed to fetch boundary data".to_string())
            })?
            .error_for_status()
            .map_err(|e| {
                tracing::error!("Boundary GeoJSON request rejected: {:?}", e);
                AppError::ExternalServiceError("Failed to fetch boundary data".to_string())
            })?;

        let geojson: serde_json::Value = response.json().await.map_err(|e| {
            tracing::error!("Boundary GeoJSON is not valid JSON: {:?}", e);
            AppError::ExternalServiceError("Boundary data is not valid GeoJSON".to_string())
        })?;

        let mut cache_write = self.cache.write().await;
        *cache_write = Some(geojson.clone());

        Ok(geojson)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service_with(url: Option<&str>) -> BoundaryService {
        BoundaryService {
            client: reqwest::Client::new(),
            url: url.map(str::to_string),
            cache: RwLock::new(None),
        }
    }

    #[test]
    fn test_unconfigured_boundary_is_not_found() {
        let service = service_with(None);
        let err = tokio_test::block_on(service.get()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_cached_boundary_is_served_without_fetching() {
        // No URL configured, so a cache hit is the only way this returns Ok
        let service = service_with(None);
        let boundary = json!({"type": "FeatureCollection", "features": []});
        tokio_test::block_on(async {
            *service.cache.write().await = Some(boundary.clone());
        });

        let got = tokio_test::block_on(service.get()).unwrap();
        assert_eq!(got, boundary);
    }
}
