//! Action Dispatcher
//!
//! Handlers that change backend state and translate the acknowledgement
//! into a store [`Mutation`]. Nothing is applied here: the caller owns the
//! store and applies the mutation once the call has succeeded, so a failed
//! call leaves local state untouched.
//!
//! Every failure is logged with its detail and collapsed into one generic
//! user-facing message per action. There are no retries.

use std::fmt;
use thiserror::Error;

use crate::api::{ApiError, PlantApi};
use crate::model::{NewPlant, Plant, PlantId, WateringTime};
use crate::notice::Notice;
use crate::store::Mutation;

/// The user-triggerable backend actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    LoadCatalog,
    ToggleSave,
    MarkWatering,
    AddPlant,
    ResetWatering,
}

impl Action {
    /// Generic message shown when the action fails for any reason
    pub fn failure_message(self) -> &'static str {
        match self {
            Action::LoadCatalog => "Error loading plants. Please refresh the page.",
            Action::ToggleSave => "Error saving plant. Please try again.",
            Action::MarkWatering => "Error updating watering status. Please try again.",
            Action::AddPlant => "Error adding plant. Please try again.",
            Action::ResetWatering => "Error resetting watering status. Please try again.",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::LoadCatalog => "load catalog",
            Action::ToggleSave => "toggle garden",
            Action::MarkWatering => "mark watering",
            Action::AddPlant => "add plant",
            Action::ResetWatering => "reset watering",
        };
        f.write_str(name)
    }
}

/// Why an action failed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    #[error("{action} failed: {source}")]
    Backend {
        action: Action,
        #[source]
        source: ApiError,
    },

    #[error("{action} failed: plant {id} is not in the catalog")]
    UnknownPlant { action: Action, id: PlantId },
}

impl ActionError {
    pub fn action(&self) -> Action {
        match self {
            ActionError::Backend { action, .. } | ActionError::UnknownPlant { action, .. } => *action,
        }
    }

    /// The generic notification for this failure
    pub fn notice(&self) -> Notice {
        Notice::error(self.action().failure_message())
    }
}

/// Result of a successful action
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Change to apply to the store
    pub mutation: Mutation,
    /// Confirmation to show, if any
    pub notice: Option<Notice>,
}

/// Issues backend calls for user actions
#[derive(Debug, Clone)]
pub struct Dispatcher<A> {
    api: A,
}

impl<A: PlantApi> Dispatcher<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the whole catalog
    pub async fn load_catalog(&self) -> Result<Outcome, ActionError> {
        let plants = self
            .api
            .get_plants()
            .await
            .map_err(|e| failed(Action::LoadCatalog, e))?;

        tracing::info!(count = plants.len(), "Catalog loaded");

        Ok(Outcome {
            mutation: Mutation::Loaded(plants),
            notice: None,
        })
    }

    /// Save the plant to the garden, or remove it if it is already saved.
    /// The endpoint is chosen from the snapshot's `saved` flag.
    pub async fn toggle_save(&self, plant: &Plant) -> Result<Outcome, ActionError> {
        let action = Action::ToggleSave;
        let response = if plant.saved {
            self.api.remove_from_garden(plant.id).await
        } else {
            self.api.save_to_garden(plant.id).await
        }
        .map_err(|e| failed(action, e))?;

        if !response.success {
            return Err(failed(action, ApiError::Rejected(response.message)));
        }

        let saved = !plant.saved;
        let message = if !response.message.is_empty() {
            response.message
        } else if saved {
            "Plant saved to garden".to_string()
        } else {
            "Plant removed from garden".to_string()
        };

        tracing::info!(id = %plant.id, saved, "Garden membership changed");

        Ok(Outcome {
            mutation: Mutation::GardenChanged { id: plant.id, saved },
            notice: Some(Notice::success(message)),
        })
    }

    /// Record a watering for one time of day
    pub async fn mark_watering(&self, plant: &Plant, time: WateringTime) -> Result<Outcome, ActionError> {
        let action = Action::MarkWatering;
        let response = self
            .api
            .update_watering(plant.id, time)
            .await
            .map_err(|e| failed(action, e))?;

        if !response.success {
            let reason = response.message.unwrap_or_else(|| "success=false".to_string());
            return Err(failed(action, ApiError::Rejected(reason)));
        }

        tracing::info!(id = %plant.id, time = time.slot_key(), "Watering recorded");

        Ok(Outcome {
            mutation: Mutation::Watered { id: plant.id, time },
            notice: Some(Notice::success(format!(
                "✅ {} watering completed for {}!",
                time.label(),
                plant.name
            ))),
        })
    }

    /// Persist a new plant; the store gets the backend's canonical record
    pub async fn add_plant(&self, plant: &NewPlant) -> Result<Outcome, ActionError> {
        let action = Action::AddPlant;
        let response = self.api.add_plant(plant).await.map_err(|e| failed(action, e))?;

        if !response.success {
            return Err(failed(action, ApiError::Rejected("success=false".to_string())));
        }

        let created = response
            .plant
            .ok_or_else(|| failed(action, ApiError::Decode("response has no plant record".to_string())))?;

        tracing::info!(id = %created.id, name = %created.name, "Plant added");

        Ok(Outcome {
            mutation: Mutation::Added(created),
            notice: Some(Notice::success("✅ Plant added successfully!")),
        })
    }

    /// Reset every plant's watering status on the backend
    pub async fn reset_watering(&self) -> Result<Outcome, ActionError> {
        let action = Action::ResetWatering;
        let response = self.api.reset_watering().await.map_err(|e| failed(action, e))?;

        if !response.success {
            return Err(failed(action, ApiError::Rejected(response.message)));
        }

        let message = if response.message.is_empty() {
            "Watering statuses reset".to_string()
        } else {
            response.message
        };

        Ok(Outcome {
            mutation: Mutation::WateringReset,
            notice: Some(Notice::success(message)),
        })
    }
}

fn failed(action: Action, source: ApiError) -> ActionError {
    tracing::error!(action = %action, error = %source, "Backend call failed");
    ActionError::Backend { action, source }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory backend used by the unit tests

    use super::*;
    use crate::api::{AddPlantResponse, ApiResult, GardenResponse, WateringResponse};
    use async_trait::async_trait;
    use std::cell::RefCell;

    /// Fake backend holding its own copy of the catalog
    #[derive(Debug, Default)]
    pub struct FakeApi {
        pub plants: RefCell<Vec<Plant>>,
        /// When set, every call fails with this error
        pub fail_with: RefCell<Option<ApiError>>,
        /// When set, mutating calls answer `success: false`
        pub reject: RefCell<bool>,
        pub calls: RefCell<Vec<String>>,
    }

    impl FakeApi {
        pub fn with_plants(plants: Vec<Plant>) -> Self {
            Self {
                plants: RefCell::new(plants),
                ..Self::default()
            }
        }

        pub fn failing(err: ApiError) -> Self {
            let api = Self::default();
            *api.fail_with.borrow_mut() = Some(err);
            api
        }

        fn check(&self, call: String) -> ApiResult<()> {
            self.calls.borrow_mut().push(call);
            match self.fail_with.borrow().clone() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }

        fn set_saved(&self, id: PlantId, saved: bool) -> GardenResponse {
            if *self.reject.borrow() {
                return GardenResponse { success: false, message: "Plant not found".to_string() };
            }
            let mut plants = self.plants.borrow_mut();
            match plants.iter_mut().find(|p| p.id == id) {
                Some(plant) => {
                    plant.saved = saved;
                    if !saved {
                        plant.watering_status.reset();
                    }
                    let message = if saved { "Plant saved to garden" } else { "Plant removed from garden" };
                    GardenResponse { success: true, message: message.to_string() }
                }
                None => GardenResponse { success: false, message: "Plant not found".to_string() },
            }
        }
    }

    #[async_trait(?Send)]
    impl PlantApi for FakeApi {
        async fn get_plants(&self) -> ApiResult<Vec<Plant>> {
            self.check("get_plants".to_string())?;
            Ok(self.plants.borrow().clone())
        }

        async fn save_to_garden(&self, id: PlantId) -> ApiResult<GardenResponse> {
            self.check(format!("save_to_garden/{}", id))?;
            Ok(self.set_saved(id, true))
        }

        async fn remove_from_garden(&self, id: PlantId) -> ApiResult<GardenResponse> {
            self.check(format!("remove_from_garden/{}", id))?;
            Ok(self.set_saved(id, false))
        }

        async fn update_watering(&self, id: PlantId, time: WateringTime) -> ApiResult<WateringResponse> {
            self.check(format!("update_watering/{}/{}", id, time.slot_key()))?;
            if *self.reject.borrow() {
                return Ok(WateringResponse { success: false, message: None });
            }
            let mut plants = self.plants.borrow_mut();
            let success = match plants.iter_mut().find(|p| p.id == id) {
                Some(plant) => {
                    plant.watering_status.mark(time);
                    true
                }
                None => false,
            };
            Ok(WateringResponse { success, message: None })
        }

        async fn add_plant(&self, plant: &NewPlant) -> ApiResult<AddPlantResponse> {
            self.check("add_plant".to_string())?;
            if *self.reject.borrow() {
                return Ok(AddPlantResponse { success: false, plant: None });
            }
            let mut plants = self.plants.borrow_mut();
            let next_id = plants.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
            let mut created = Plant::new(next_id, plant.name.clone())
                .scientific_name(plant.scientific_name.clone())
                .watering_times(&plant.watering_times);
            created.image = Some(plant.image.clone());
            created.sunlight = plant.sunlight.clone();
            created.watering_frequency = plant.watering_frequency.clone();
            created.soil = plant.soil.clone();
            created.fertilizer = plant.fertilizer.clone();
            created.growth_type = plant.growth_type.clone();
            created.care_tips = plant.care_tips.clone();
            plants.push(created.clone());
            Ok(AddPlantResponse { success: true, plant: Some(created) })
        }

        async fn reset_watering(&self) -> ApiResult<GardenResponse> {
            self.check("reset_watering_status".to_string())?;
            for plant in self.plants.borrow_mut().iter_mut() {
                plant.watering_status.reset();
            }
            Ok(GardenResponse { success: true, message: "Watering statuses reset".to_string() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeApi;
    use super::*;
    use crate::form::AddPlantForm;
    use crate::model::WateringStatus;
    use crate::store::PlantStore;

    fn fern() -> Plant {
        Plant::new(5, "Fern")
            .watering_times(&[WateringTime::Morning, WateringTime::Evening])
            .saved(true)
    }

    #[tokio::test]
    async fn test_load_catalog() {
        let dispatcher = Dispatcher::new(FakeApi::with_plants(vec![fern(), Plant::new(6, "Rose")]));
        let outcome = dispatcher.load_catalog().await.unwrap();

        let mut store = PlantStore::new();
        store.apply(outcome.mutation);
        assert_eq!(store.len(), 2);
        assert!(outcome.notice.is_none());
    }

    #[tokio::test]
    async fn test_load_failure_notice() {
        let dispatcher = Dispatcher::new(FakeApi::failing(ApiError::Network("connection refused".into())));
        let err = dispatcher.load_catalog().await.unwrap_err();

        assert_eq!(err.action(), Action::LoadCatalog);
        assert_eq!(err.notice(), Notice::error("Error loading plants. Please refresh the page."));
    }

    #[tokio::test]
    async fn test_evening_watering_scenario() {
        let api = FakeApi::with_plants(vec![fern()]);
        let dispatcher = Dispatcher::new(api);
        let mut store = PlantStore::from_plants(vec![fern()]);

        let plant = store.get(PlantId(5)).cloned().unwrap();
        let outcome = dispatcher.mark_watering(&plant, WateringTime::Evening).await.unwrap();
        assert_eq!(
            outcome.notice,
            Some(Notice::success("✅ Evening watering completed for Fern!"))
        );
        store.apply(outcome.mutation);

        assert_eq!(
            store.get(PlantId(5)).unwrap().watering_status,
            WateringStatus { morning: false, evening: true }
        );
        assert_eq!(dispatcher.api().calls.borrow().as_slice(), ["update_watering/5/evening"]);
    }

    #[tokio::test]
    async fn test_watering_rejected_leaves_state() {
        let api = FakeApi::with_plants(vec![fern()]);
        *api.reject.borrow_mut() = true;
        let dispatcher = Dispatcher::new(api);
        let store = PlantStore::from_plants(vec![fern()]);

        let plant = store.get(PlantId(5)).cloned().unwrap();
        let err = dispatcher.mark_watering(&plant, WateringTime::Morning).await.unwrap_err();
        assert!(matches!(err, ActionError::Backend { source: ApiError::Rejected(_), .. }));
        assert_eq!(err.notice().message, "Error updating watering status. Please try again.");
        assert_eq!(store.get(PlantId(5)).unwrap().watering_status, WateringStatus::default());
    }

    #[tokio::test]
    async fn test_toggle_save_picks_endpoint() {
        let rose = Plant::new(6, "Rose");
        let dispatcher = Dispatcher::new(FakeApi::with_plants(vec![rose.clone()]));
        let mut store = PlantStore::from_plants(vec![rose]);

        let snapshot = store.get(PlantId(6)).cloned().unwrap();
        let outcome = dispatcher.toggle_save(&snapshot).await.unwrap();
        assert_eq!(outcome.notice, Some(Notice::success("Plant saved to garden")));
        store.apply(outcome.mutation);
        assert!(store.get(PlantId(6)).unwrap().saved);

        let snapshot = store.get(PlantId(6)).cloned().unwrap();
        let outcome = dispatcher.toggle_save(&snapshot).await.unwrap();
        store.apply(outcome.mutation);
        assert!(!store.get(PlantId(6)).unwrap().saved);

        assert_eq!(
            dispatcher.api().calls.borrow().as_slice(),
            ["save_to_garden/6", "remove_from_garden/6"]
        );
    }

    #[tokio::test]
    async fn test_toggle_failure_is_generic() {
        let dispatcher = Dispatcher::new(FakeApi::failing(ApiError::Status {
            status: 500,
            message: "boom".into(),
        }));
        let err = dispatcher.toggle_save(&fern()).await.unwrap_err();
        assert_eq!(err.notice().message, "Error saving plant. Please try again.");
    }

    #[tokio::test]
    async fn test_add_plant_round_trip() {
        let existing = vec![fern(), Plant::new(6, "Rose")];
        let dispatcher = Dispatcher::new(FakeApi::with_plants(existing.clone()));
        let mut store = PlantStore::from_plants(existing);

        let mut form = AddPlantForm::new();
        form.name = "Snake Plant".to_string();
        form.set_watering_time(WateringTime::Morning, true);
        let bundle = form.validate().unwrap();

        let outcome = dispatcher.add_plant(&bundle).await.unwrap();
        store.apply(outcome.mutation);

        assert_eq!(store.len(), 3);
        let added = store.get(PlantId(7)).unwrap();
        assert_eq!(added.name, "Snake Plant");
        assert!(!added.saved);
    }

    #[tokio::test]
    async fn test_add_plant_rejected() {
        let api = FakeApi::default();
        *api.reject.borrow_mut() = true;
        let dispatcher = Dispatcher::new(api);

        let mut form = AddPlantForm::new();
        form.name = "Snake Plant".to_string();
        form.set_watering_time(WateringTime::Evening, true);

        let err = dispatcher.add_plant(&form.validate().unwrap()).await.unwrap_err();
        assert_eq!(err.notice().message, "Error adding plant. Please try again.");
    }

    #[tokio::test]
    async fn test_reset_watering() {
        let mut watered = fern();
        watered.watering_status.mark(WateringTime::Morning);
        let dispatcher = Dispatcher::new(FakeApi::with_plants(vec![watered.clone()]));
        let mut store = PlantStore::from_plants(vec![watered]);

        let outcome = dispatcher.reset_watering().await.unwrap();
        store.apply(outcome.mutation);
        assert_eq!(store.get(PlantId(5)).unwrap().watering_status, WateringStatus::default());
    }
}
