//! UI Components
//!
//! Reusable Leptos components for the catalog and garden pages.

pub mod add_plant_modal;
pub mod backdrop;
pub mod garden_card;
pub mod loading;
pub mod nav;
pub mod plant_card;
pub mod plant_modal;
pub mod toast;

pub use add_plant_modal::AddPlantModal;
pub use backdrop::Backdrop;
pub use garden_card::GardenCardView;
pub use loading::Loading;
pub use nav::Nav;
pub use plant_card::PlantCard;
pub use plant_modal::PlantModal;
pub use toast::Toast;
