//! Add-Plant Form
//!
//! Draft state of the "add a plant" form and its client-side validation.
//! Validation failures block the request entirely.

use std::collections::BTreeSet;
use thiserror::Error;

use crate::model::{NewPlant, WateringTime};

/// Form validation errors, shown as a blocking alert
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please select at least one watering time.")]
    NoWateringTime,

    #[error("Please enter the plant name.")]
    MissingName,
}

/// Field values as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddPlantForm {
    pub name: String,
    pub scientific_name: String,
    pub image_url: String,
    pub watering_frequency: String,
    pub watering_times: BTreeSet<WateringTime>,
    pub sunlight: String,
    pub soil: String,
    pub fertilizer: String,
    pub growth_type: String,
    pub care_tips: String,
}

impl AddPlantForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check or uncheck a watering-time checkbox
    pub fn set_watering_time(&mut self, time: WateringTime, checked: bool) {
        if checked {
            self.watering_times.insert(time);
        } else {
            self.watering_times.remove(&time);
        }
    }

    /// Clear every field (form closed or submitted)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validate and build the request bundle
    pub fn validate(&self) -> Result<NewPlant, FormError> {
        if self.watering_times.is_empty() {
            return Err(FormError::NoWateringTime);
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }

        Ok(NewPlant {
            name: name.to_string(),
            scientific_name: self.scientific_name.trim().to_string(),
            image: self.image_url.trim().to_string(),
            watering_frequency: self.watering_frequency.trim().to_string(),
            watering_times: self.watering_times.iter().copied().collect(),
            sunlight: self.sunlight.trim().to_string(),
            soil: self.soil.trim().to_string(),
            fertilizer: self.fertilizer.trim().to_string(),
            growth_type: self.growth_type.trim().to_string(),
            care_tips: self.care_tips.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> AddPlantForm {
        AddPlantForm {
            name: " Snake Plant ".to_string(),
            scientific_name: "Dracaena trifasciata".to_string(),
            sunlight: "Partial".to_string(),
            ..AddPlantForm::default()
        }
    }

    #[test]
    fn test_requires_watering_time() {
        let form = filled_form();
        assert_eq!(form.validate(), Err(FormError::NoWateringTime));
        assert_eq!(
            FormError::NoWateringTime.to_string(),
            "Please select at least one watering time."
        );
    }

    #[test]
    fn test_requires_name() {
        let mut form = AddPlantForm::new();
        form.set_watering_time(WateringTime::Morning, true);
        assert_eq!(form.validate(), Err(FormError::MissingName));
    }

    #[test]
    fn test_valid_form_builds_bundle() {
        let mut form = filled_form();
        form.set_watering_time(WateringTime::Evening, true);
        form.set_watering_time(WateringTime::Morning, true);

        let plant = form.validate().unwrap();
        assert_eq!(plant.name, "Snake Plant");
        assert_eq!(plant.watering_times, vec![WateringTime::Morning, WateringTime::Evening]);
        assert_eq!(plant.image, "");
    }

    #[test]
    fn test_unchecking_and_reset() {
        let mut form = filled_form();
        form.set_watering_time(WateringTime::Morning, true);
        form.set_watering_time(WateringTime::Morning, false);
        assert!(form.watering_times.is_empty());

        form.reset();
        assert_eq!(form, AddPlantForm::default());
    }

    #[test]
    fn test_bundle_has_no_garden_state() {
        let mut form = filled_form();
        form.set_watering_time(WateringTime::Morning, true);
        let body = serde_json::to_value(form.validate().unwrap()).unwrap();
        assert!(body.get("id").is_none());
        assert!(body.get("saved").is_none());
        assert!(body.get("watering_status").is_none());
    }
}
