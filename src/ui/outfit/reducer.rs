use crate::catalog::Slot;
use crate::ui::mvi::Reducer;
use crate::ui::outfit::intent::OutfitIntent;
use crate::ui::outfit::state::OutfitState;

pub struct OutfitReducer;

impl Reducer for OutfitReducer {
    type State = OutfitState;
    type Intent = OutfitIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            OutfitIntent::SetSlot { slot, id } => {
                let mut next = state;
                match slot {
                    Slot::Top => next.top = id,
                    Slot::Bottom => next.bottom = id,
                    Slot::Shoes => next.shoes = id,
                }
                next
            }
            OutfitIntent::SetAll { top, bottom, shoes } => OutfitState { top, bottom, shoes },
        }
    }
}
