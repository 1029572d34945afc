//! Page and modal visibility

use serde::Serialize;

use crate::model::PlantId;
use crate::store::PlantStore;

/// Top-level pages; exactly one is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Page {
    #[default]
    Home,
    Garden,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::Garden];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Garden => "My Garden",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Home => "🏡",
            Page::Garden => "🌿",
        }
    }
}

/// Where a click landed, relative to an open modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the modal surface
    Backdrop,
    /// Anything inside the modal surface
    Surface,
}

/// Which modal, if any, is visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Detail(PlantId),
    AddPlant,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        *self != ModalState::Closed
    }

    pub fn open_detail(&mut self, id: PlantId) {
        *self = ModalState::Detail(id);
    }

    pub fn open_add_plant(&mut self) {
        *self = ModalState::AddPlant;
    }

    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    /// Close on any click outside the modal surface.
    /// Returns true if the modal was closed.
    pub fn on_click(&mut self, target: ClickTarget) -> bool {
        if self.is_open() && target == ClickTarget::Backdrop {
            self.close();
            true
        } else {
            false
        }
    }

    /// Plant whose detail is showing
    pub fn detail_id(&self) -> Option<PlantId> {
        match self {
            ModalState::Detail(id) => Some(*id),
            _ => None,
        }
    }
}

pub const NOT_IDENTIFIED_MESSAGE: &str = "Plant not found in database. Please add it manually.";
pub const IDENTIFY_PROMPT: &str =
    "Could not automatically identify plant. Please enter the plant name:";

/// Result of looking up a photographed plant by the name the user typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identification {
    Found(PlantId),
    NotFound,
}

impl Identification {
    /// Modal to show next: the detail on a match, otherwise the add form
    pub fn next_modal(self) -> ModalState {
        match self {
            Identification::Found(id) => ModalState::Detail(id),
            Identification::NotFound => ModalState::AddPlant,
        }
    }
}

/// Exact, case-insensitive name lookup. Returns `None` when no name was
/// entered (prompt cancelled). Whitespace is part of the name.
pub fn identify(store: &PlantStore, entered_name: &str) -> Option<Identification> {
    if entered_name.is_empty() {
        return None;
    }
    Some(match store.find_by_name(entered_name) {
        Some(plant) => Identification::Found(plant.id),
        None => Identification::NotFound,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Plant;

    #[test]
    fn test_backdrop_click_closes() {
        let mut modal = ModalState::Closed;
        modal.open_detail(PlantId(3));
        assert!(!modal.on_click(ClickTarget::Surface));
        assert_eq!(modal.detail_id(), Some(PlantId(3)));

        assert!(modal.on_click(ClickTarget::Backdrop));
        assert_eq!(modal, ModalState::Closed);
        assert!(!modal.on_click(ClickTarget::Backdrop));
    }

    #[test]
    fn test_identify() {
        let store = PlantStore::from_plants(vec![Plant::new(4, "Money Plant")]);

        let found = identify(&store, "money plant").unwrap();
        assert_eq!(found.next_modal(), ModalState::Detail(PlantId(4)));

        let missing = identify(&store, "Orchid").unwrap();
        assert_eq!(missing.next_modal(), ModalState::AddPlant);

        assert_eq!(identify(&store, ""), None);
        assert_eq!(identify(&store, "   "), Some(Identification::NotFound));
        assert_eq!(identify(&store, " money plant"), Some(Identification::NotFound));
    }

    #[test]
    fn test_default_page() {
        assert_eq!(Page::default(), Page::Home);
        assert_eq!(Page::Garden.label(), "My Garden");
    }
}
