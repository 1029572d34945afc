//! View Models
//!
//! Pure functions from an immutable store snapshot to structured view
//! descriptions. Nothing here knows about the DOM: the Leptos UI and the
//! terminal front end both render these values.
//!
//! - [`catalog`]: plant cards for the home grid, with search filtering
//! - [`garden`]: saved plants with per-slot watering buttons
//! - [`detail`]: the plant detail modal
//! - [`modal`]: page and modal visibility state

pub mod catalog;
pub mod detail;
pub mod garden;
pub mod modal;

pub use catalog::{render_catalog, CatalogCard};
pub use detail::{render_detail, DetailSection, DetailView, InfoItem, SaveToggle};
pub use garden::{render_garden, GardenCard, GardenView, WateringButton, EMPTY_GARDEN_MESSAGE};
pub use modal::{identify, ClickTarget, Identification, ModalState, Page};

use serde::Serialize;

const PLACEHOLDER_BASE: &str = "https://via.placeholder.com";

/// Placeholder image sizes used by each view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    Card,
    Detail,
    Thumbnail,
}

impl ImageSize {
    fn dimensions(self) -> &'static str {
        match self {
            ImageSize::Card => "400x300",
            ImageSize::Detail => "600x300",
            ImageSize::Thumbnail => "80",
        }
    }
}

/// An image with the placeholder to swap in if it fails to load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageView {
    pub src: String,
    pub fallback: String,
    pub alt: String,
}

/// Placeholder URL showing the plant name
pub fn placeholder_url(size: ImageSize, name: &str) -> String {
    format!(
        "{}/{}?text={}",
        PLACEHOLDER_BASE,
        size.dimensions(),
        urlencoding::encode(name)
    )
}

pub(crate) fn image_view(image: Option<&str>, name: &str, size: ImageSize) -> ImageView {
    let fallback = placeholder_url(size, name);
    ImageView {
        src: image.map(str::to_string).unwrap_or_else(|| fallback.clone()),
        fallback,
        alt: name.to_string(),
    }
}
