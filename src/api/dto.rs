//! Data Transfer Objects
//!
//! Request and response bodies for the plant backend endpoints.

use serde::{Deserialize, Serialize};

use crate::model::{Plant, WateringTime};

// ============================================
// GARDEN DTOs
// ============================================

/// Response to `save_to_garden`, `remove_from_garden` and
/// `reset_watering_status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GardenResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

// ============================================
// WATERING DTOs
// ============================================

/// Body of `POST /update_watering/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WateringRequest {
    /// "morning" or "evening"
    pub time_of_day: String,
}

impl WateringRequest {
    pub fn new(time: WateringTime) -> Self {
        Self {
            time_of_day: time.slot_key().to_string(),
        }
    }
}

/// Response to `POST /update_watering/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WateringResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================
// ADD PLANT DTOs
// ============================================

/// Response to `POST /add_plant`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddPlantResponse {
    pub success: bool,
    /// Persisted record with the server-assigned id
    #[serde(default)]
    pub plant: Option<Plant>,
}
