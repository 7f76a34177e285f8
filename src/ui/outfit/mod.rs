//! The outfit store: single source of truth for the current selection.

mod intent;
mod reducer;
mod state;

pub use intent::OutfitIntent;
pub use reducer::OutfitReducer;
pub use state::OutfitState;
