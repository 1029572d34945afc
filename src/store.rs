//! Catalog Store
//!
//! In-memory list of plant records, owned by the application root and the
//! single source of truth for rendering. The store is only changed by
//! applying a [`Mutation`] produced from a backend acknowledgement.

use crate::model::{Plant, PlantId, WateringTime};

/// A confirmed change to apply to the store
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Full catalog replaced after `GET /get_plants`
    Loaded(Vec<Plant>),
    /// Plant saved to or removed from the garden
    GardenChanged { id: PlantId, saved: bool },
    /// A watering slot was recorded
    Watered { id: PlantId, time: WateringTime },
    /// Backend persisted a new plant
    Added(Plant),
    /// Every plant's watering status was reset
    WateringReset,
}

/// Local plant catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlantStore {
    plants: Vec<Plant>,
}

impl PlantStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_plants(plants: Vec<Plant>) -> Self {
        let mut store = Self::new();
        store.apply(Mutation::Loaded(plants));
        store
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn get(&self, id: PlantId) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == id)
    }

    fn get_mut(&mut self, id: PlantId) -> Option<&mut Plant> {
        self.plants.iter_mut().find(|p| p.id == id)
    }

    /// Plants whose name or scientific name contains `text`, ignoring case.
    /// The text is matched as typed, whitespace included. An empty filter
    /// returns everything.
    pub fn filter<'a>(&'a self, text: &str) -> impl Iterator<Item = &'a Plant> + 'a {
        let needle = text.to_lowercase();
        self.plants.iter().filter(move |p| p.matches(&needle))
    }

    /// Plants in the user's garden
    pub fn saved(&self) -> impl Iterator<Item = &Plant> {
        self.plants.iter().filter(|p| p.saved)
    }

    /// Exact, case-insensitive name lookup (photo identification)
    pub fn find_by_name(&self, name: &str) -> Option<&Plant> {
        let name = name.to_lowercase();
        self.plants.iter().find(|p| p.name.to_lowercase() == name)
    }

    /// Apply a confirmed change. Changes for unknown ids are ignored.
    pub fn apply(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::Loaded(plants) => {
                let mut unique: Vec<Plant> = Vec::with_capacity(plants.len());
                for plant in plants {
                    if let Some(existing) = unique.iter_mut().find(|p| p.id == plant.id) {
                        tracing::warn!(id = %plant.id, "Duplicate plant id in catalog, keeping last record");
                        *existing = plant;
                    } else {
                        unique.push(plant);
                    }
                }
                self.plants = unique;
            }
            Mutation::GardenChanged { id, saved } => match self.get_mut(id) {
                Some(plant) => {
                    plant.saved = saved;
                    if !saved {
                        plant.watering_status.reset();
                    }
                }
                None => tracing::warn!(id = %id, "Garden change for unknown plant ignored"),
            },
            Mutation::Watered { id, time } => match self.get_mut(id) {
                Some(plant) => plant.watering_status.mark(time),
                None => tracing::warn!(id = %id, "Watering for unknown plant ignored"),
            },
            Mutation::Added(plant) => {
                if let Some(existing) = self.get_mut(plant.id) {
                    tracing::warn!(id = %plant.id, "Added plant reuses an existing id, replacing record");
                    *existing = plant;
                } else {
                    self.plants.push(plant);
                }
            }
            Mutation::WateringReset => {
                for plant in &mut self.plants {
                    plant.watering_status.reset();
                }
            }
        }
    }
}
