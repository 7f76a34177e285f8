use std::sync::mpsc::Sender;

use rand::Rng;
use tracing::{info, warn};

use crate::catalog::{self, InvalidSelection, Slot};
use crate::export::Exporter;
use crate::ui::events::AppEvent;
use crate::ui::mvi::Reducer;
use crate::ui::outfit::{OutfitIntent, OutfitReducer, OutfitState};
use crate::ui::save::{SaveIntent, SaveReducer, SaveState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Outfit selection (MVI pattern).
    outfit: OutfitState,
    /// Export lifecycle (MVI pattern).
    save: SaveState,
    /// Which slot panel has keyboard focus.
    focus: Slot,
    exporter: Exporter,
    events_tx: Sender<AppEvent>,
}

impl App {
    pub fn new(exporter: Exporter, events_tx: Sender<AppEvent>) -> Self {
        Self {
            should_quit: false,
            outfit: OutfitState::default(),
            save: SaveState::default(),
            focus: Slot::Top,
            exporter,
            events_tx,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn outfit(&self) -> &OutfitState {
        &self.outfit
    }

    pub fn save(&self) -> &SaveState {
        &self.save
    }

    pub fn focus(&self) -> Slot {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = Self::neighbor(self.focus, 1);
    }

    pub fn focus_prev(&mut self) {
        self.focus = Self::neighbor(self.focus, -1);
    }

    fn neighbor(slot: Slot, direction: i32) -> Slot {
        let len = Slot::ALL.len();
        let current = Slot::ALL.iter().position(|s| *s == slot).unwrap_or(0);
        let next = if direction.is_negative() {
            (current + len - 1) % len
        } else {
            (current + 1) % len
        };
        Slot::ALL[next]
    }

    /// Select `id` for `slot`. An id outside the slot's catalog is the
    /// `InvalidSelection` boundary: logged and ignored, prior state intact.
    pub fn select_item(&mut self, slot: Slot, id: &str) -> Result<(), InvalidSelection> {
        catalog::validate(slot, id).map_err(|err| {
            warn!(%err, "selection rejected");
            err
        })?;
        self.dispatch_outfit(OutfitIntent::SetSlot {
            slot,
            id: id.to_string(),
        });
        Ok(())
    }

    /// Select by position in the focused slot's catalog (keys 1-3).
    /// Out-of-range positions do nothing.
    pub fn select_index(&mut self, index: usize) {
        if let Some(item) = catalog::catalog(self.focus).get(index) {
            let _ = self.select_item(self.focus, item.id);
        }
    }

    /// Step the focused slot's selection through its catalog, wrapping at
    /// either end.
    pub fn cycle_focused(&mut self, direction: i32) {
        let items = catalog::catalog(self.focus);
        let current = items
            .iter()
            .position(|item| item.id == self.outfit.selected(self.focus))
            .unwrap_or(0);
        let len = items.len();
        let next = if direction.is_negative() {
            (current + len - 1) % len
        } else {
            (current + 1) % len
        };
        let _ = self.select_item(self.focus, items[next].id);
    }

    /// The fixed preset outfit: index 1 of every catalog, applied as one
    /// state transition.
    pub fn apply_preset(&mut self) {
        self.dispatch_outfit(OutfitIntent::SetAll {
            top: catalog::preset_id(Slot::Top).to_string(),
            bottom: catalog::preset_id(Slot::Bottom).to_string(),
            shoes: catalog::preset_id(Slot::Shoes).to_string(),
        });
    }

    /// One independent uniform draw per slot, applied as one transition.
    /// May reproduce the current outfit; no "must change" guarantee.
    pub fn randomize(&mut self) {
        let mut rng = rand::rng();
        let mut pick = |slot: Slot| {
            let items = catalog::catalog(slot);
            items[rng.random_range(0..items.len())].id.to_string()
        };
        let top = pick(Slot::Top);
        let bottom = pick(Slot::Bottom);
        let shoes = pick(Slot::Shoes);
        self.dispatch_outfit(OutfitIntent::SetAll { top, bottom, shoes });
    }

    /// Start a PNG export of the current outfit. No-op while one is in
    /// flight. The snapshot is taken here, so later selection changes do
    /// not affect the capture.
    pub fn begin_export(&mut self) {
        if !self.exporter.begin(self.outfit.clone(), self.events_tx.clone()) {
            return;
        }
        info!("export started");
        self.dispatch_save(SaveIntent::Begin);
    }

    pub fn on_export_finished(&mut self) {
        self.dispatch_save(SaveIntent::Finished);
    }

    pub fn on_export_failed(&mut self, message: String) {
        self.dispatch_save(SaveIntent::Failed { message });
    }

    fn dispatch_outfit(&mut self, intent: OutfitIntent) {
        dispatch_mvi!(self, outfit, OutfitReducer, intent);
    }

    fn dispatch_save(&mut self, intent: SaveIntent) {
        dispatch_mvi!(self, save, SaveReducer, intent);
    }
}
