//! Native HTTP Client
//!
//! reqwest implementation of [`PlantApi`]. Requests are sent once; there is
//! no retry or backoff.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use super::dto::{AddPlantResponse, GardenResponse, WateringRequest, WateringResponse};
use super::endpoints;
use super::error::{ApiError, ApiResult};
use super::{decode_catalog, PlantApi, DEFAULT_BACKEND_URL};
use crate::model::{NewPlant, Plant, PlantId, WateringTime};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:5000")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

/// reqwest-backed plant backend client
#[derive(Debug, Clone)]
pub struct HttpPlantApi {
    client: Client,
    config: ClientConfig,
}

impl HttpPlantApi {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        endpoints::url(&self.config.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        let mut request = self.client.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: text,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait(?Send)]
impl PlantApi for HttpPlantApi {
    async fn get_plants(&self) -> ApiResult<Vec<Plant>> {
        let records = self.get_json(endpoints::GET_PLANTS).await?;
        Ok(decode_catalog(records))
    }

    async fn save_to_garden(&self, id: PlantId) -> ApiResult<GardenResponse> {
        self.post_json::<(), _>(&endpoints::save_to_garden(id), None).await
    }

    async fn remove_from_garden(&self, id: PlantId) -> ApiResult<GardenResponse> {
        self.post_json::<(), _>(&endpoints::remove_from_garden(id), None).await
    }

    async fn update_watering(&self, id: PlantId, time: WateringTime) -> ApiResult<WateringResponse> {
        let body = WateringRequest::new(time);
        self.post_json(&endpoints::update_watering(id), Some(&body)).await
    }

    async fn add_plant(&self, plant: &NewPlant) -> ApiResult<AddPlantResponse> {
        self.post_json(endpoints::ADD_PLANT, Some(plant)).await
    }

    async fn reset_watering(&self) -> ApiResult<GardenResponse> {
        self.post_json::<(), _>(endpoints::RESET_WATERING, None).await
    }
}
