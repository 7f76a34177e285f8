//! Loads the catalog art once at startup and hands out cached images.

use std::collections::HashMap;
use std::path::Path;

use image::RgbaImage;
use tracing::{debug, warn};

use crate::catalog::{self, Slot, BASE_ASSET, HEAD_ASSET};

/// In-memory image cache keyed by asset file name. Read-only after
/// construction, so it can be shared with the export worker without locks.
pub struct AssetStore {
    images: HashMap<String, RgbaImage>,
}

impl AssetStore {
    /// Eagerly load every catalog asset plus the base figure and head
    /// overlay from `assets_dir`. A missing or undecodable file is logged
    /// and skipped; the corresponding layer simply will not render.
    pub fn load(assets_dir: &Path) -> Self {
        let mut names: Vec<&'static str> = vec![BASE_ASSET, HEAD_ASSET];
        for slot in Slot::ALL {
            for item in catalog::catalog(slot) {
                names.push(item.asset);
            }
        }

        let mut images = HashMap::new();
        for name in names {
            let path = assets_dir.join(name);
            match image::open(&path) {
                Ok(img) => {
                    debug!(asset = name, "asset loaded");
                    images.insert(name.to_string(), img.to_rgba8());
                }
                Err(err) => warn!(asset = name, %err, "failed to load asset"),
            }
        }
        Self { images }
    }

    /// Build a store from already-decoded images; no disk access. Used by
    /// tests and embedders.
    pub fn from_images(images: HashMap<String, RgbaImage>) -> Self {
        Self { images }
    }

    pub fn get(&self, name: &str) -> Option<&RgbaImage> {
        self.images.get(name)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
