//! Plant Backend API
//!
//! The contract with the EcoBloom backend: endpoint paths, wire DTOs and
//! the [`PlantApi`] trait that both the native (reqwest) and browser
//! (gloo-net) clients implement.
//!
//! ## Endpoints
//!
//! | Method | Path                          | Response                    |
//! |--------|-------------------------------|-----------------------------|
//! | GET    | `/get_plants`                 | `[Plant]`                   |
//! | POST   | `/save_to_garden/{id}`        | `{success, message}`        |
//! | POST   | `/remove_from_garden/{id}`    | `{success, message}`        |
//! | POST   | `/update_watering/{id}`       | `{success}`                 |
//! | POST   | `/add_plant`                  | `{success, plant}`          |
//! | POST   | `/reset_watering_status`      | `{success, message}`        |

pub mod dto;
pub mod error;
#[cfg(feature = "native")]
pub mod http;

pub use dto::{AddPlantResponse, GardenResponse, WateringRequest, WateringResponse};
pub use error::{ApiError, ApiResult};
#[cfg(feature = "native")]
pub use http::{ClientConfig, HttpPlantApi};

use async_trait::async_trait;

use crate::model::{NewPlant, Plant, PlantId, WateringTime};

/// Default backend base URL
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Endpoint paths, relative to the backend base URL
pub mod endpoints {
    use crate::model::PlantId;

    pub const GET_PLANTS: &str = "/get_plants";
    pub const ADD_PLANT: &str = "/add_plant";
    pub const RESET_WATERING: &str = "/reset_watering_status";

    pub fn save_to_garden(id: PlantId) -> String {
        format!("/save_to_garden/{}", id)
    }

    pub fn remove_from_garden(id: PlantId) -> String {
        format!("/remove_from_garden/{}", id)
    }

    /// Save or remove, depending on the plant's current state
    pub fn garden_toggle(id: PlantId, currently_saved: bool) -> String {
        if currently_saved {
            remove_from_garden(id)
        } else {
            save_to_garden(id)
        }
    }

    pub fn update_watering(id: PlantId) -> String {
        format!("/update_watering/{}", id)
    }

    /// Join a base URL and an endpoint path
    pub fn url(base: &str, path: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), path)
    }
}

/// Decode a `GET /get_plants` body record by record. Records that do not
/// fit the plant shape are logged and skipped so one bad entry cannot empty
/// the catalog.
pub fn decode_catalog(records: Vec<serde_json::Value>) -> Vec<Plant> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Plant>(record) {
            Ok(plant) => Some(plant),
            Err(e) => {
                tracing::warn!(index, "Skipping malformed plant record: {}", e);
                None
            }
        })
        .collect()
}

/// Operations the client needs from the plant backend.
///
/// Implementations return the raw response bodies; deciding what a
/// `success: false` means is left to the action dispatcher. Futures are not
/// required to be `Send` so the trait can be implemented on top of browser
/// fetch.
#[async_trait(?Send)]
pub trait PlantApi {
    /// `GET /get_plants`
    async fn get_plants(&self) -> ApiResult<Vec<Plant>>;

    /// `POST /save_to_garden/{id}`
    async fn save_to_garden(&self, id: PlantId) -> ApiResult<GardenResponse>;

    /// `POST /remove_from_garden/{id}`
    async fn remove_from_garden(&self, id: PlantId) -> ApiResult<GardenResponse>;

    /// `POST /update_watering/{id}`
    async fn update_watering(&self, id: PlantId, time: WateringTime) -> ApiResult<WateringResponse>;

    /// `POST /add_plant`
    async fn add_plant(&self, plant: &NewPlant) -> ApiResult<AddPlantResponse>;

    /// `POST /reset_watering_status`
    async fn reset_watering(&self) -> ApiResult<GardenResponse>;
}
