//! End-to-end flow against real assets on disk: defaults → preset →
//! manual pick → export, then decode the PNG and check the composited
//! layers.

use std::path::Path;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use dressup::assets::AssetStore;
use dressup::catalog::{self, Slot, BASE_ASSET, HEAD_ASSET};
use dressup::compose::{STAGE_HEIGHT, STAGE_WIDTH};
use dressup::export::{Exporter, StageCapturer};
use dressup::ui::app::App;
use dressup::ui::events::AppEvent;
use image::{Rgba, RgbaImage};

const BASE_COLOR: Rgba<u8> = Rgba([200, 0, 0, 255]);
const HEAD_COLOR: Rgba<u8> = Rgba([0, 200, 200, 255]);

/// Distinct color per catalog item so the decoded export identifies which
/// item landed on each layer.
fn item_color(id: &str) -> Rgba<u8> {
    let index = id.as_bytes()[id.len() - 1] - b'0';
    match id.split('-').next().unwrap() {
        "top" => Rgba([0, 50 * index, 0, 255]),
        "bottom" => Rgba([0, 0, 50 * index, 255]),
        _ => Rgba([50 * index, 50 * index, 0, 255]),
    }
}

/// Clothing art: stage-sized, transparent except one opaque band so layers
/// overlap the way real garments do (top overlaps the waist of the bottom).
fn banded(color: Rgba<u8>, rows: std::ops::Range<u32>) -> RgbaImage {
    let mut img = RgbaImage::new(STAGE_WIDTH, STAGE_HEIGHT);
    for y in rows {
        for x in 0..STAGE_WIDTH {
            img.put_pixel(x, y, color);
        }
    }
    img
}

fn band_for(slot: Slot) -> std::ops::Range<u32> {
    match slot {
        Slot::Top => 100..300,
        Slot::Bottom => 280..420,
        Slot::Shoes => 480..560,
    }
}

fn write_assets(dir: &Path) {
    RgbaImage::from_pixel(STAGE_WIDTH, STAGE_HEIGHT, BASE_COLOR)
        .save(dir.join(BASE_ASSET))
        .unwrap();
    RgbaImage::from_pixel(112, 112, HEAD_COLOR)
        .save(dir.join(HEAD_ASSET))
        .unwrap();
    for slot in Slot::ALL {
        for item in catalog::catalog(slot) {
            banded(item_color(item.id), band_for(slot))
                .save(dir.join(item.asset))
                .unwrap();
        }
    }
}

#[test]
fn full_session_export_reflects_the_final_selection() {
    let dir = tempfile::tempdir().unwrap();
    write_assets(dir.path());
    let out = dir.path().join("maduro-fit.png");

    let assets = Arc::new(AssetStore::load(dir.path()));
    assert_eq!(assets.len(), 11, "base + head + 9 items");

    let exporter = Exporter::new(Arc::new(StageCapturer::new(Arc::clone(&assets))), out.clone());
    let (tx, rx) = mpsc::channel();
    let mut app = App::new(exporter, tx);

    // Initial load: first entry per slot.
    assert_eq!(app.outfit().top, "top-1");
    assert_eq!(app.outfit().bottom, "bottom-1");
    assert_eq!(app.outfit().shoes, "shoes-1");

    // Preset, then a manual bottom pick.
    app.apply_preset();
    app.select_item(Slot::Bottom, "bottom-3").unwrap();
    assert_eq!(app.outfit().top, "top-2");
    assert_eq!(app.outfit().bottom, "bottom-3");
    assert_eq!(app.outfit().shoes, "shoes-2");

    // Save PNG.
    app.begin_export();
    match rx.recv_timeout(Duration::from_secs(10)) {
        Ok(AppEvent::ExportFinished) => app.on_export_finished(),
        Ok(AppEvent::ExportFailed(message)) => panic!("export failed: {message}"),
        _ => panic!("expected an export report"),
    }

    let exported = image::open(&out).unwrap().to_rgba8();
    assert_eq!(exported.dimensions(), (STAGE_WIDTH, STAGE_HEIGHT));

    // Base figure where nothing covers it (left of the head box).
    assert_eq!(*exported.get_pixel(30, 50), BASE_COLOR);
    // Head overlay in its top-centered box.
    assert_eq!(*exported.get_pixel(STAGE_WIDTH / 2, 60), HEAD_COLOR);
    // Top occludes the bottom in their overlap (rows 280..300).
    assert_eq!(*exported.get_pixel(STAGE_WIDTH / 2, 290), item_color("top-2"));
    // Bottom shows below the top's hem.
    assert_eq!(*exported.get_pixel(STAGE_WIDTH / 2, 400), item_color("bottom-3"));
    // Shoes at the bottom edge.
    assert_eq!(*exported.get_pixel(STAGE_WIDTH / 2, 500), item_color("shoes-2"));
}

#[test]
fn export_skips_layers_whose_assets_are_missing() {
    let dir = tempfile::tempdir().unwrap();
    // Only base art exists; every clothing asset is absent.
    RgbaImage::from_pixel(STAGE_WIDTH, STAGE_HEIGHT, BASE_COLOR)
        .save(dir.path().join(BASE_ASSET))
        .unwrap();
    let out = dir.path().join("bare.png");

    let assets = Arc::new(AssetStore::load(dir.path()));
    let exporter = Exporter::new(Arc::new(StageCapturer::new(assets)), out.clone());
    let (tx, rx) = mpsc::channel();
    let mut app = App::new(exporter, tx);

    app.begin_export();
    match rx.recv_timeout(Duration::from_secs(10)) {
        Ok(AppEvent::ExportFinished) => {}
        Ok(AppEvent::ExportFailed(message)) => panic!("export failed: {message}"),
        _ => panic!("expected an export report"),
    }

    let exported = image::open(&out).unwrap().to_rgba8();
    // Nothing but the base figure was composited.
    assert_eq!(*exported.get_pixel(STAGE_WIDTH / 2, 400), BASE_COLOR);
    assert_eq!(*exported.get_pixel(STAGE_WIDTH / 2, 60), BASE_COLOR);
}

#[test]
fn export_without_base_figure_fails_with_capture_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("no-base.png");

    let assets = Arc::new(AssetStore::load(dir.path()));
    let exporter = Exporter::new(Arc::new(StageCapturer::new(assets)), out.clone());
    let (tx, rx) = mpsc::channel();
    let mut app = App::new(exporter, tx);

    app.begin_export();
    match rx.recv_timeout(Duration::from_secs(10)) {
        Ok(AppEvent::ExportFailed(message)) => {
            app.on_export_failed(message.clone());
            assert!(message.contains(BASE_ASSET), "message: {message}");
        }
        Ok(AppEvent::ExportFinished) => panic!("export unexpectedly succeeded"),
        _ => panic!("expected an export report"),
    }
    assert!(!out.exists());
}
