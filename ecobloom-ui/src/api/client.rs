//! HTTP API Client
//!
//! [`PlantApi`] over browser fetch, plus the persisted backend base URL.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use ecobloom::api::{
    decode_catalog, endpoints, AddPlantResponse, ApiError, ApiResult, GardenResponse, PlantApi,
    WateringRequest, WateringResponse, DEFAULT_BACKEND_URL,
};
use ecobloom::model::{NewPlant, Plant, PlantId, WateringTime};

const API_URL_KEY: &str = "ecobloom_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());
    normalize_base(stored.as_deref())
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, url);
        }
    }
}

/// Fall back to the default and drop trailing slashes
fn normalize_base(stored: Option<&str>) -> String {
    let url = match stored.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_BACKEND_URL,
    };
    url.trim_end_matches('/').to_string()
}

fn network_error(err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::SerdeError(e) => ApiError::Request(e.to_string()),
        other => ApiError::Network(other.to_string()),
    }
}

/// Browser fetch client. The base URL is read from local storage on every
/// request so a changed setting applies immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooPlantApi;

impl GlooPlantApi {
    fn url(path: &str) -> String {
        endpoints::url(&get_api_base(), path)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();
        let text = response.text().await.map_err(network_error)?;
        if !response.ok() {
            return Err(ApiError::Status { status, message: text });
        }
        Ok(serde_json::from_str(&text)?)
    }

    async fn get_json<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
        let response = Request::get(&Self::url(path))
            .send()
            .await
            .map_err(network_error)?;
        Self::decode(response).await
    }

    async fn post_empty<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
        let response = Request::post(&Self::url(path))
            .send()
            .await
            .map_err(network_error)?;
        Self::decode(response).await
    }

    async fn post_json<B: serde::Serialize, T: DeserializeOwned>(path: &str, body: &B) -> ApiResult<T> {
        let response = Request::post(&Self::url(path))
            .json(body)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        Self::decode(response).await
    }
}

#[async_trait(?Send)]
impl PlantApi for GlooPlantApi {
    async fn get_plants(&self) -> ApiResult<Vec<Plant>> {
        let records = Self::get_json(endpoints::GET_PLANTS).await?;
        Ok(decode_catalog(records))
    }

    async fn save_to_garden(&self, id: PlantId) -> ApiResult<GardenResponse> {
        Self::post_empty(&endpoints::save_to_garden(id)).await
    }

    async fn remove_from_garden(&self, id: PlantId) -> ApiResult<GardenResponse> {
        Self::post_empty(&endpoints::remove_from_garden(id)).await
    }

    async fn update_watering(&self, id: PlantId, time: WateringTime) -> ApiResult<WateringResponse> {
        Self::post_json(&endpoints::update_watering(id), &WateringRequest::new(time)).await
    }

    async fn add_plant(&self, plant: &NewPlant) -> ApiResult<AddPlantResponse> {
        Self::post_json(endpoints::ADD_PLANT, plant).await
    }

    async fn reset_watering(&self) -> ApiResult<GardenResponse> {
        Self::post_empty(endpoints::RESET_WATERING).await
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_api_base_persists() {
        set_api_base("http://plants.example/");
        assert_eq!(get_api_base(), "http://plants.example");
    }
}
