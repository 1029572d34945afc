//! "My Garden" view with watering checklists

use serde::Serialize;

use super::{image_view, ImageSize, ImageView};
use crate::model::{Plant, PlantId, WateringTime};
use crate::store::PlantStore;

pub const REMOVE_LABEL: &str = "Remove from Garden";

pub const EMPTY_GARDEN_MESSAGE: &str =
    "Your garden is empty. Save plants from the catalog to track their watering.";

/// Watering button for one time of day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WateringButton {
    pub time: WateringTime,
    pub icon: &'static str,
    pub label: &'static str,
    pub completed: bool,
    /// Completed buttons cannot be pressed again
    pub disabled: bool,
}

impl WateringButton {
    fn new(time: WateringTime, completed: bool) -> Self {
        Self {
            time,
            icon: if completed { "✅" } else { time.icon() },
            label: time.label(),
            completed,
            disabled: completed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GardenCard {
    pub id: PlantId,
    pub image: ImageView,
    pub name: String,
    pub watering_frequency: String,
    /// One button per watering time the plant needs, morning first
    pub buttons: Vec<WateringButton>,
    pub remove_label: &'static str,
}

impl GardenCard {
    pub fn from_plant(plant: &Plant) -> Self {
        let buttons = WateringTime::ALL
            .into_iter()
            .filter(|time| plant.waters_at(*time))
            .map(|time| WateringButton::new(time, plant.watering_status.is_done(time)))
            .collect();

        Self {
            id: plant.id,
            image: image_view(plant.image_url(), &plant.name, ImageSize::Thumbnail),
            name: plant.name.clone(),
            watering_frequency: plant.watering_frequency.clone(),
            buttons,
            remove_label: REMOVE_LABEL,
        }
    }

    pub fn button(&self, time: WateringTime) -> Option<&WateringButton> {
        self.buttons.iter().find(|b| b.time == time)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GardenView {
    /// No saved plants: show the message instead of the grid
    Empty { message: &'static str },
    Grid { cards: Vec<GardenCard> },
}

impl GardenView {
    pub fn cards(&self) -> &[GardenCard] {
        match self {
            GardenView::Empty { .. } => &[],
            GardenView::Grid { cards } => cards,
        }
    }
}

pub fn render_garden(store: &PlantStore) -> GardenView {
    let cards: Vec<GardenCard> = store.saved().map(GardenCard::from_plant).collect();
    if cards.is_empty() {
        GardenView::Empty {
            message: EMPTY_GARDEN_MESSAGE,
        }
    } else {
        GardenView::Grid { cards }
    }
}
