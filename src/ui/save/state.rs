use crate::ui::mvi::UiState;

/// Lifecycle of the PNG export action.
///
/// `Saving` is the busy flag: the save control shows it and the app refuses
/// a second export while in it. `Failed` keeps the message for the footer;
/// it is not fatal and the next save attempt clears it.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SaveState {
    #[default]
    Idle,
    Saving,
    Failed {
        message: String,
    },
}

impl UiState for SaveState {}

impl SaveState {
    pub fn is_saving(&self) -> bool {
        matches!(self, Self::Saving)
    }
}
