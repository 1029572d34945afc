//! Plant Data Model
//!
//! Plant records as served by `GET /get_plants`, plus the attribute bundle
//! sent to `POST /add_plant`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Backend-assigned plant identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlantId(pub u64);

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PlantId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(PlantId)
    }
}

/// Time-of-day slot in which a plant should be watered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WateringTime {
    Morning,
    Evening,
}

impl WateringTime {
    pub const ALL: [WateringTime; 2] = [WateringTime::Morning, WateringTime::Evening];

    /// Lowercase key used in `watering_status` and the `time_of_day` body
    pub fn slot_key(self) -> &'static str {
        match self {
            WateringTime::Morning => "morning",
            WateringTime::Evening => "evening",
        }
    }

    /// Display label ("Morning" / "Evening")
    pub fn label(self) -> &'static str {
        match self {
            WateringTime::Morning => "Morning",
            WateringTime::Evening => "Evening",
        }
    }

    /// Icon shown on a pending watering button
    pub fn icon(self) -> &'static str {
        match self {
            WateringTime::Morning => "🌅",
            WateringTime::Evening => "🌙",
        }
    }
}

impl fmt::Display for WateringTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for WateringTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(WateringTime::Morning),
            "evening" => Ok(WateringTime::Evening),
            other => Err(format!("unknown watering time '{}', expected morning or evening", other)),
        }
    }
}

/// Per-day watering completion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WateringStatus {
    #[serde(default)]
    pub morning: bool,
    #[serde(default)]
    pub evening: bool,
}

impl WateringStatus {
    pub fn is_done(&self, time: WateringTime) -> bool {
        match time {
            WateringTime::Morning => self.morning,
            WateringTime::Evening => self.evening,
        }
    }

    /// Mark a slot complete. Never clears a slot.
    pub fn mark(&mut self, time: WateringTime) {
        match time {
            WateringTime::Morning => self.morning = true,
            WateringTime::Evening => self.evening = true,
        }
    }

    pub fn reset(&mut self) {
        *self = WateringStatus::default();
    }
}

/// A catalog plant record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    /// The backend stores whatever name it was sent, `null` included
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub scientific_name: String,
    /// Image URL; empty means "use a placeholder"
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub sunlight: String,
    #[serde(default)]
    pub watering_frequency: String,
    #[serde(default)]
    pub watering_times: Vec<WateringTime>,
    #[serde(default)]
    pub soil: String,
    #[serde(default)]
    pub fertilizer: String,
    #[serde(default)]
    pub growth_type: String,
    #[serde(default)]
    pub care_tips: String,
    #[serde(default)]
    pub saved: bool,
    #[serde(default)]
    pub watering_status: WateringStatus,
    /// Set by the backend whenever a watering is recorded
    #[serde(default)]
    pub last_watered: Option<NaiveDateTime>,
}

impl Plant {
    /// Minimal record, mostly useful for tests and fixtures
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: PlantId(id),
            name: name.into(),
            scientific_name: String::new(),
            image: None,
            sunlight: String::new(),
            watering_frequency: String::new(),
            watering_times: Vec::new(),
            soil: String::new(),
            fertilizer: String::new(),
            growth_type: String::new(),
            care_tips: String::new(),
            saved: false,
            watering_status: WateringStatus::default(),
            last_watered: None,
        }
    }

    pub fn scientific_name(mut self, name: impl Into<String>) -> Self {
        self.scientific_name = name.into();
        self
    }

    pub fn watering_times(mut self, times: &[WateringTime]) -> Self {
        self.watering_times = times.to_vec();
        self
    }

    pub fn saved(mut self, saved: bool) -> Self {
        self.saved = saved;
        self
    }

    /// The image URL if one is set and non-empty
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.trim().is_empty())
    }

    pub fn waters_at(&self, time: WateringTime) -> bool {
        self.watering_times.contains(&time)
    }

    /// Case-insensitive substring match on name or scientific name
    pub fn matches(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty()
            || self.name.to_lowercase().contains(needle_lower)
            || self.scientific_name.to_lowercase().contains(needle_lower)
    }

    /// Watering times joined for display ("Morning & Evening")
    pub fn watering_times_label(&self) -> String {
        self.watering_times
            .iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(" & ")
    }
}

/// Attribute bundle for `POST /add_plant`. Carries no id and no garden state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPlant {
    pub name: String,
    pub scientific_name: String,
    pub image: String,
    pub watering_frequency: String,
    pub watering_times: Vec<WateringTime>,
    pub sunlight: String,
    pub soil: String,
    pub fertilizer: String,
    pub growth_type: String,
    pub care_tips: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
