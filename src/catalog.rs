//! Static clothing catalogs: three fixed slots, three items each, plus the
//! base figure and head overlay art. Built once, never mutated.

use std::fmt;

use thiserror::Error;

/// Clothing slots. Fixed cardinality, never extended at runtime.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Slot {
    Top,
    Bottom,
    Shoes,
}

impl Slot {
    /// All slots in display order.
    pub const ALL: [Slot; 3] = [Slot::Top, Slot::Bottom, Slot::Shoes];

    pub fn title(self) -> &'static str {
        match self {
            Slot::Top => "Top",
            Slot::Bottom => "Bottom",
            Slot::Shoes => "Shoes",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() keeps width specifiers working in the layer listing
        f.pad(match self {
            Slot::Top => "top",
            Slot::Bottom => "bottom",
            Slot::Shoes => "shoes",
        })
    }
}

/// One selectable catalog entry. `asset` is a file name resolved against
/// the assets directory.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Item {
    pub id: &'static str,
    pub name: &'static str,
    pub asset: &'static str,
}

pub const TOPS: [Item; 3] = [
    Item { id: "top-1", name: "Red Tee", asset: "top-1.png" },
    Item { id: "top-2", name: "Nike Tech Jacket", asset: "top-2.png" },
    Item { id: "top-3", name: "Green Hoodie", asset: "top-3.png" },
];

pub const BOTTOMS: [Item; 3] = [
    Item { id: "bottom-1", name: "Charcoal Pants", asset: "bottom-1.png" },
    Item { id: "bottom-2", name: "Nike Tech Pants", asset: "bottom-2.png" },
    Item { id: "bottom-3", name: "Brown Cargo", asset: "bottom-3.png" },
];

pub const SHOES: [Item; 3] = [
    Item { id: "shoes-1", name: "White Kicks", asset: "shoes-1.png" },
    Item { id: "shoes-2", name: "Black Airs", asset: "shoes-2.png" },
    Item { id: "shoes-3", name: "Gold Runners", asset: "shoes-3.png" },
];

/// Fixed base figure, always the back-most layer.
pub const BASE_ASSET: &str = "body-base.png";

/// Head overlay drawn above the base figure, below all clothing.
pub const HEAD_ASSET: &str = "body.png";

/// Catalog position the preset outfit uses in every slot.
const PRESET_INDEX: usize = 1;

pub fn catalog(slot: Slot) -> &'static [Item] {
    match slot {
        Slot::Top => &TOPS,
        Slot::Bottom => &BOTTOMS,
        Slot::Shoes => &SHOES,
    }
}

/// Default selection: the first entry of the slot's catalog.
pub fn first_id(slot: Slot) -> &'static str {
    catalog(slot)[0].id
}

pub fn preset_id(slot: Slot) -> &'static str {
    catalog(slot)[PRESET_INDEX].id
}

pub fn find_item(slot: Slot, id: &str) -> Option<&'static Item> {
    catalog(slot).iter().find(|item| item.id == id)
}

/// An id outside the target slot's catalog. Rejected at the boundary so it
/// never reaches the outfit state.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("item '{id}' is not in the {slot} catalog")]
pub struct InvalidSelection {
    pub slot: Slot,
    pub id: String,
}

pub fn validate(slot: Slot, id: &str) -> Result<(), InvalidSelection> {
    if find_item(slot, id).is_some() {
        Ok(())
    } else {
        Err(InvalidSelection {
            slot,
            id: id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_slot_has_three_items() {
        for slot in Slot::ALL {
            assert_eq!(catalog(slot).len(), 3);
        }
    }

    #[test]
    fn ids_are_unique_within_a_slot() {
        for slot in Slot::ALL {
            let items = catalog(slot);
            for (i, a) in items.iter().enumerate() {
                for b in &items[i + 1..] {
                    assert_ne!(a.id, b.id);
                }
            }
        }
    }

    #[test]
    fn preset_is_second_entry_everywhere() {
        assert_eq!(preset_id(Slot::Top), "top-2");
        assert_eq!(preset_id(Slot::Bottom), "bottom-2");
        assert_eq!(preset_id(Slot::Shoes), "shoes-2");
    }

    #[test]
    fn validate_accepts_catalog_ids() {
        for slot in Slot::ALL {
            for item in catalog(slot) {
                assert!(validate(slot, item.id).is_ok());
            }
        }
    }

    #[test]
    fn validate_rejects_foreign_and_unknown_ids() {
        assert!(validate(Slot::Top, "bottom-1").is_err());
        assert!(validate(Slot::Shoes, "shoes-9").is_err());
        let err = validate(Slot::Top, "nope").unwrap_err();
        assert_eq!(err.slot, Slot::Top);
        assert_eq!(err.id, "nope");
    }
}
