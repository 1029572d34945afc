//! Global Application State
//!
//! Reactive state management using Leptos signals. The plant store lives in
//! a single signal; actions snapshot what they need, await the backend and
//! then apply the confirmed mutation.

use leptos::*;

use ecobloom::actions::{ActionError, Dispatcher, Outcome};
use ecobloom::model::{NewPlant, Plant, PlantId, WateringTime};
use ecobloom::notice::{Notice, NOTICE_TIMEOUT_MS};
use ecobloom::store::PlantStore;
use ecobloom::view::ModalState;

use crate::api::GlooPlantApi;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Every catalog plant
    pub store: RwSignal<PlantStore>,
    /// Catalog search text
    pub search: RwSignal<String>,
    /// Open modal, if any
    pub modal: RwSignal<ModalState>,
    /// Catalog fetch in flight
    pub loading: RwSignal<bool>,
    /// Notification banner
    pub notice: RwSignal<Option<Notice>>,
    dispatcher: Dispatcher<GlooPlantApi>,
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState {
        store: create_rw_signal(PlantStore::new()),
        search: create_rw_signal(String::new()),
        modal: create_rw_signal(ModalState::Closed),
        loading: create_rw_signal(false),
        notice: create_rw_signal(None),
        dispatcher: Dispatcher::new(GlooPlantApi),
    };

    provide_context(state.clone());
    state
}

impl GlobalState {
    /// Show a notification (auto-clears after timeout)
    pub fn show_notice(&self, notice: Notice) {
        self.notice.set(Some(notice.clone()));

        let notice_signal = self.notice;
        gloo_timers::callback::Timeout::new(NOTICE_TIMEOUT_MS, move || {
            // A newer notice keeps its own timer
            if notice_signal.get_untracked().as_ref() == Some(&notice) {
                notice_signal.set(None);
            }
        })
        .forget();
    }

    fn snapshot(&self, id: PlantId) -> Option<Plant> {
        self.store.with_untracked(|store| store.get(id).cloned())
    }

    fn finish(&self, result: Result<Outcome, ActionError>) -> bool {
        match result {
            Ok(outcome) => {
                self.store.update(|store| store.apply(outcome.mutation));
                if let Some(notice) = outcome.notice {
                    self.show_notice(notice);
                }
                true
            }
            Err(e) => {
                web_sys::console::error_1(&format!("{}: {}", e.action(), e).into());
                self.show_notice(e.notice());
                false
            }
        }
    }

    /// Fetch the catalog once at startup
    pub async fn load_catalog(&self) {
        self.loading.set(true);
        let result = self.dispatcher.load_catalog().await;
        self.finish(result);
        self.loading.set(false);
    }

    pub async fn toggle_save(&self, id: PlantId) {
        let Some(plant) = self.snapshot(id) else {
            return;
        };
        let result = self.dispatcher.toggle_save(&plant).await;
        self.finish(result);
    }

    pub async fn mark_watering(&self, id: PlantId, time: WateringTime) {
        let Some(plant) = self.snapshot(id) else {
            return;
        };
        let result = self.dispatcher.mark_watering(&plant, time).await;
        self.finish(result);
    }

    /// Returns true once the backend has stored the plant
    pub async fn add_plant(&self, plant: NewPlant) -> bool {
        let result = self.dispatcher.add_plant(&plant).await;
        self.finish(result)
    }

    pub async fn reset_watering(&self) {
        let result = self.dispatcher.reset_watering().await;
        self.finish(result);
    }
}
