use crate::catalog::Slot;
use crate::ui::mvi::Intent;

/// Mutations of the outfit selection.
///
/// `SetAll` exists so preset and randomize land as a single state
/// transition instead of three observable ones.
#[derive(Clone, Debug)]
pub enum OutfitIntent {
    /// Replace one slot's selection; the other slots are untouched.
    SetSlot { slot: Slot, id: String },
    /// Replace all three slots atomically.
    SetAll {
        top: String,
        bottom: String,
        shoes: String,
    },
}

impl Intent for OutfitIntent {}
