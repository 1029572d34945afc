//! Catalog grid cards

use serde::Serialize;

use super::{image_view, ImageSize, ImageView};
use crate::model::{Plant, PlantId};
use crate::store::PlantStore;

/// One card in the catalog grid. Clicking it opens the detail modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogCard {
    pub id: PlantId,
    pub image: ImageView,
    pub name: String,
    pub scientific_name: String,
    /// "<sunlight> Sunlight"
    pub sunlight_badge: String,
    /// Show the saved indicator
    pub saved: bool,
}

impl CatalogCard {
    pub fn from_plant(plant: &Plant) -> Self {
        Self {
            id: plant.id,
            image: image_view(plant.image_url(), &plant.name, ImageSize::Card),
            name: plant.name.clone(),
            scientific_name: plant.scientific_name.clone(),
            sunlight_badge: format!("{} Sunlight", plant.sunlight),
            saved: plant.saved,
        }
    }
}

/// Cards for every plant matching `filter` (case-insensitive substring of
/// name or scientific name), in catalog order
pub fn render_catalog(store: &PlantStore, filter: &str) -> Vec<CatalogCard> {
    store.filter(filter).map(CatalogCard::from_plant).collect()
}
