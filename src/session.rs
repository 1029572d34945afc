//! Session
//!
//! The application root for non-browser front ends: owns the plant store and
//! the dispatcher, and applies each confirmed mutation. Lookups take a
//! snapshot of the plant before the request so no store borrow is held while
//! a request is in flight; the response is applied to whatever the store
//! holds when it arrives.

use std::cell::{Ref, RefCell};

use crate::actions::{Action, ActionError, Dispatcher, Outcome};
use crate::api::PlantApi;
use crate::model::{NewPlant, Plant, PlantId, WateringTime};
use crate::notice::Notice;
use crate::store::PlantStore;

pub struct Session<A> {
    dispatcher: Dispatcher<A>,
    store: RefCell<PlantStore>,
}

impl<A: PlantApi> Session<A> {
    pub fn new(api: A) -> Self {
        Self::with_store(api, PlantStore::new())
    }

    pub fn with_store(api: A, store: PlantStore) -> Self {
        Self {
            dispatcher: Dispatcher::new(api),
            store: RefCell::new(store),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<A> {
        &self.dispatcher
    }

    /// Read access to the store. Do not hold across an `.await`.
    pub fn store(&self) -> Ref<'_, PlantStore> {
        self.store.borrow()
    }

    /// Owned copy of a plant record
    pub fn snapshot(&self, id: PlantId) -> Option<Plant> {
        self.store.borrow().get(id).cloned()
    }

    fn require(&self, action: Action, id: PlantId) -> Result<Plant, ActionError> {
        self.snapshot(id).ok_or_else(|| {
            tracing::error!(action = %action, id = %id, "Action on unknown plant");
            ActionError::UnknownPlant { action, id }
        })
    }

    fn finish(&self, outcome: Outcome) -> Option<Notice> {
        self.store.borrow_mut().apply(outcome.mutation);
        outcome.notice
    }

    /// Fetch the catalog. On failure the store is left as it was.
    pub async fn load_catalog(&self) -> Result<Option<Notice>, ActionError> {
        let outcome = self.dispatcher.load_catalog().await?;
        Ok(self.finish(outcome))
    }

    pub async fn toggle_save(&self, id: PlantId) -> Result<Option<Notice>, ActionError> {
        let plant = self.require(Action::ToggleSave, id)?;
        let outcome = self.dispatcher.toggle_save(&plant).await?;
        Ok(self.finish(outcome))
    }

    pub async fn mark_watering(&self, id: PlantId, time: WateringTime) -> Result<Option<Notice>, ActionError> {
        let plant = self.require(Action::MarkWatering, id)?;
        let outcome = self.dispatcher.mark_watering(&plant, time).await?;
        Ok(self.finish(outcome))
    }

    pub async fn add_plant(&self, plant: &NewPlant) -> Result<Option<Notice>, ActionError> {
        let outcome = self.dispatcher.add_plant(plant).await?;
        Ok(self.finish(outcome))
    }

    pub async fn reset_watering(&self) -> Result<Option<Notice>, ActionError> {
        let outcome = self.dispatcher.reset_watering().await?;
        Ok(self.finish(outcome))
    }
}
