//! Save (export) lifecycle store. Tracks whether an export is in flight so
//! the save control can reflect busy state and refuse re-entry.

mod intent;
mod reducer;
mod state;

pub use intent::SaveIntent;
pub use reducer::SaveReducer;
pub use state::SaveState;
