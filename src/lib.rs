//! # EcoBloom
//!
//! Client side of the EcoBloom plant-care application: a plant catalog, a
//! personal garden with twice-daily watering checklists, and watering
//! reminders.
//!
//! ## Features
//!
//! - **Single store**: the catalog is fetched once and every change goes
//!   through [`store::PlantStore::apply`]
//! - **Confirmed updates only**: local state changes only after the backend
//!   acknowledges a call
//! - **Framework-free views**: [`view`] turns store snapshots into plain
//!   view models shared by the Leptos UI and the CLI
//! - **Reminders**: a polling check over two daily watering windows
//!
//! ## Modules
//!
//! - [`model`]: plant records and watering slots
//! - [`store`]: the client-side plant store and its mutations
//! - [`api`]: backend contract, DTOs and the reqwest client
//! - [`actions`]: backend calls that produce store mutations and notices
//! - [`session`]: store owner for native front ends
//! - [`view`]: view models for catalog, garden, detail and modals
//! - [`form`]: add-plant form validation
//! - [`reminder`]: watering reminder checks and the native runner
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ecobloom::api::{ClientConfig, HttpPlantApi};
//! use ecobloom::model::{PlantId, WateringTime};
//! use ecobloom::session::Session;
//! use ecobloom::view::render_garden;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpPlantApi::new(ClientConfig::default())?;
//!     let session = Session::new(api);
//!
//!     session.load_catalog().await?;
//!     session.toggle_save(PlantId(5)).await?;
//!     if let Some(notice) = session.mark_watering(PlantId(5), WateringTime::Evening).await? {
//!         println!("{}", notice);
//!     }
//!
//!     let garden = render_garden(&session.store());
//!     println!("{} plants in the garden", garden.cards().len());
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod api;
pub mod form;
pub mod model;
pub mod notice;
pub mod reminder;
pub mod session;
pub mod store;
pub mod view;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;

// Re-export top-level types for convenience
pub use model::{NewPlant, Plant, PlantId, WateringStatus, WateringTime};

pub use store::{Mutation, PlantStore};

pub use api::{ApiError, ApiResult, PlantApi};

pub use actions::{Action, ActionError, Dispatcher, Outcome};

pub use notice::{Notice, NoticeLevel, NOTICE_TIMEOUT_MS};

pub use form::{AddPlantForm, FormError};

pub use session::Session;

pub use reminder::{Jitter, Reminder, ReminderChecker, ReminderWindow, RepeatPolicy};

#[cfg(feature = "native")]
pub use api::{ClientConfig, HttpPlantApi};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};

#[cfg(feature = "native")]
pub use reminder::runner::{ReminderRunner, RunnerSettings};
