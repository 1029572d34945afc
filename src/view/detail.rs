//! Plant detail modal

use serde::Serialize;

use super::{image_view, ImageSize, ImageView};
use crate::model::{Plant, PlantId};

/// Small labelled fact in the info grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoItem {
    pub label: &'static str,
    pub value: String,
}

/// Titled paragraph below the info grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailSection {
    pub title: &'static str,
    pub body: String,
}

/// Save/remove button. Its action follows `saved`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveToggle {
    pub label: &'static str,
    pub saved: bool,
}

impl SaveToggle {
    pub fn for_state(saved: bool) -> Self {
        let label = if saved {
            "✓ Saved to Garden"
        } else {
            "+ Save to My Garden"
        };
        Self { label, saved }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub id: PlantId,
    pub image: ImageView,
    pub name: String,
    pub scientific_name: String,
    pub info: Vec<InfoItem>,
    pub sections: Vec<DetailSection>,
    pub toggle: SaveToggle,
}

pub fn render_detail(plant: &Plant) -> DetailView {
    DetailView {
        id: plant.id,
        image: image_view(plant.image_url(), &plant.name, ImageSize::Detail),
        name: plant.name.clone(),
        scientific_name: plant.scientific_name.clone(),
        info: vec![
            InfoItem {
                label: "💧 Watering",
                value: plant.watering_frequency.clone(),
            },
            InfoItem {
                label: "⏰ Best Times",
                value: plant.watering_times_label(),
            },
            InfoItem {
                label: "☀️ Sunlight",
                value: plant.sunlight.clone(),
            },
            InfoItem {
                label: "🌱 Growth Type",
                value: plant.growth_type.clone(),
            },
        ],
        sections: vec![
            DetailSection {
                title: "🌿 Soil Requirements",
                body: plant.soil.clone(),
            },
            DetailSection {
                title: "🧪 Fertilizer",
                body: plant.fertilizer.clone(),
            },
            DetailSection {
                title: "💚 Care & Maintenance Tips",
                body: plant.care_tips.clone(),
            },
        ],
        toggle: SaveToggle::for_state(plant.saved),
    }
}
