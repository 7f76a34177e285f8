use crate::ui::mvi::Reducer;
use crate::ui::save::intent::SaveIntent;
use crate::ui::save::state::SaveState;

pub struct SaveReducer;

impl Reducer for SaveReducer {
    type State = SaveState;
    type Intent = SaveIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Entering Saving from Saving is a no-op by construction; the
            // exporter never starts a second worker while busy.
            SaveIntent::Begin => SaveState::Saving,
            SaveIntent::Finished => match state {
                SaveState::Saving => SaveState::Idle,
                other => other,
            },
            SaveIntent::Failed { message } => match state {
                SaveState::Saving => SaveState::Failed { message },
                other => other,
            },
        }
    }
}
