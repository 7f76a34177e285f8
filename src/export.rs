//! PNG export: capture the stage for an outfit snapshot and write it to
//! disk off the UI thread.
//!
//! At most one export runs at a time. The busy flag is checked-and-set on
//! `begin` and cleared on every worker exit path, so a failed capture never
//! wedges the save action.

use std::io::Cursor;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

use image::RgbaImage;
use scopeguard::defer;
use thiserror::Error;
use tracing::{info, warn};

use crate::assets::AssetStore;
use crate::catalog::{self, Slot, BASE_ASSET, HEAD_ASSET};
use crate::compose::compose_layers;
use crate::ui::events::AppEvent;
use crate::ui::outfit::OutfitState;

/// Why a capture could not produce an image artifact.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("base figure asset '{0}' is not loaded")]
    MissingBase(&'static str),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("writing the export file failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Turns an outfit snapshot into raster bytes.
///
/// This is the seam between the export worker and the compositor: tests
/// substitute a capturer returning canned bytes or an error.
pub trait Capturer: Send + Sync + 'static {
    fn capture(&self, outfit: &OutfitState) -> Result<Vec<u8>, CaptureError>;
}

/// Production capturer: composes the stage from loaded assets and encodes
/// it as PNG.
pub struct StageCapturer {
    assets: Arc<AssetStore>,
}

impl StageCapturer {
    pub fn new(assets: Arc<AssetStore>) -> Self {
        Self { assets }
    }

    /// Resolve a slot's selection to its loaded image, if both the catalog
    /// entry and the asset exist. Anything unresolved is simply no layer.
    fn layer(&self, slot: Slot, outfit: &OutfitState) -> Option<&RgbaImage> {
        let item = catalog::find_item(slot, outfit.selected(slot))?;
        self.assets.get(item.asset)
    }
}

impl Capturer for StageCapturer {
    fn capture(&self, outfit: &OutfitState) -> Result<Vec<u8>, CaptureError> {
        let base = self
            .assets
            .get(BASE_ASSET)
            .ok_or(CaptureError::MissingBase(BASE_ASSET))?;
        let stage = compose_layers(
            Some(base),
            self.assets.get(HEAD_ASSET),
            self.layer(Slot::Bottom, outfit),
            self.layer(Slot::Top, outfit),
            self.layer(Slot::Shoes, outfit),
        );
        let mut bytes = Vec::new();
        stage.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }
}

pub struct Exporter {
    capturer: Arc<dyn Capturer>,
    out_path: PathBuf,
    busy: Arc<AtomicBool>,
}

impl Exporter {
    pub fn new(capturer: Arc<dyn Capturer>, out_path: PathBuf) -> Self {
        Self {
            capturer,
            out_path,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Start an export of `outfit` as it is right now. Returns `false`
    /// without spawning anything when an export is already in flight.
    ///
    /// The worker reports completion as an [`AppEvent`] on `events`; a
    /// dropped receiver only means the report goes nowhere.
    pub fn begin(&self, outfit: OutfitState, events: Sender<AppEvent>) -> bool {
        if self.busy.swap(true, Ordering::SeqCst) {
            return false;
        }

        let capturer = Arc::clone(&self.capturer);
        let out_path = self.out_path.clone();
        let busy = Arc::clone(&self.busy);
        let worker = thread::Builder::new().name("export-worker".to_string());
        let spawned = worker.spawn(move || {
            // Covers the panic path; the normal paths clear the flag below
            // before reporting so observers never see a stale busy state.
            defer! {
                busy.store(false, Ordering::SeqCst);
            }

            let result = capturer.capture(&outfit).and_then(|bytes| {
                std::fs::write(&out_path, bytes).map_err(CaptureError::from)
            });
            busy.store(false, Ordering::SeqCst);

            match result {
                Ok(()) => {
                    info!(path = %out_path.display(), "export finished");
                    let _ = events.send(AppEvent::ExportFinished);
                }
                Err(err) => {
                    warn!(%err, "export failed");
                    let _ = events.send(AppEvent::ExportFailed(err.to_string()));
                }
            }
        });

        match spawned {
            Ok(_handle) => true,
            Err(err) => {
                // Spawn failure: undo the flag or no export could ever run
                self.busy.store(false, Ordering::SeqCst);
                warn!(%err, "failed to spawn export worker");
                false
            }
        }
    }
}
