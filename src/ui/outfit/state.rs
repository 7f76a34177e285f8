use crate::catalog::{self, Slot};
use crate::ui::mvi::UiState;

/// Current outfit: exactly one selected item id per slot.
///
/// Ids are only ever written from the slot's catalog (validated at the app
/// boundary), so every stored id resolves to a real item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutfitState {
    pub top: String,
    pub bottom: String,
    pub shoes: String,
}

impl Default for OutfitState {
    /// First catalog entry per slot, applied before the first render.
    fn default() -> Self {
        Self {
            top: catalog::first_id(Slot::Top).to_string(),
            bottom: catalog::first_id(Slot::Bottom).to_string(),
            shoes: catalog::first_id(Slot::Shoes).to_string(),
        }
    }
}

impl UiState for OutfitState {}

impl OutfitState {
    pub fn selected(&self, slot: Slot) -> &str {
        match slot {
            Slot::Top => &self.top,
            Slot::Bottom => &self.bottom,
            Slot::Shoes => &self.shoes,
        }
    }
}
