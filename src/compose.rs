//! Offscreen stage: a fixed-size RGBA canvas the outfit layers are
//! composited onto, back to front.
//!
//! Layer order is a domain invariant and independent of selection history:
//! base figure, head overlay, then bottom → top → shoes. A top always
//! occludes a bottom in the overlapping region, and shoes occlude both.

use image::{imageops, Rgba, RgbaImage};

/// Logical stage size, matching the original 420x560 art board.
pub const STAGE_WIDTH: u32 = 420;
pub const STAGE_HEIGHT: u32 = 560;

/// Background fill wherever no layer covers the stage.
pub const BACKGROUND: Rgba<u8> = Rgba([0xf6, 0xf5, 0xf0, 0xff]);

/// Head overlay box, top-centered like the original circular avatar.
const HEAD_SIZE: u32 = 112;
const HEAD_TOP: i64 = 24;

/// Composite the stage. `None` slots contribute no layer at all: no
/// placeholder, no error.
pub fn compose_layers(
    base: Option<&RgbaImage>,
    head: Option<&RgbaImage>,
    bottom: Option<&RgbaImage>,
    top: Option<&RgbaImage>,
    shoes: Option<&RgbaImage>,
) -> RgbaImage {
    let mut stage = RgbaImage::from_pixel(STAGE_WIDTH, STAGE_HEIGHT, BACKGROUND);
    if let Some(img) = base {
        overlay_contained(&mut stage, img);
    }
    if let Some(img) = head {
        overlay_head(&mut stage, img);
    }
    for layer in [bottom, top, shoes].into_iter().flatten() {
        overlay_contained(&mut stage, layer);
    }
    stage
}

/// Scale `src` to fit the full stage without changing its aspect ratio and
/// draw it centered.
fn overlay_contained(stage: &mut RgbaImage, src: &RgbaImage) {
    let (w, h) = contain_fit(src.width(), src.height(), STAGE_WIDTH, STAGE_HEIGHT);
    if w == 0 || h == 0 {
        return;
    }
    let scaled;
    let layer = if (w, h) == (src.width(), src.height()) {
        src
    } else {
        scaled = imageops::resize(src, w, h, imageops::FilterType::Triangle);
        &scaled
    };
    let x = i64::from((STAGE_WIDTH - w) / 2);
    let y = i64::from((STAGE_HEIGHT - h) / 2);
    imageops::overlay(stage, layer, x, y);
}

/// The head keeps the original placement: a small box centered near the top
/// edge, above the base figure and below all clothing.
fn overlay_head(stage: &mut RgbaImage, src: &RgbaImage) {
    let (w, h) = contain_fit(src.width(), src.height(), HEAD_SIZE, HEAD_SIZE);
    if w == 0 || h == 0 {
        return;
    }
    let scaled = imageops::resize(src, w, h, imageops::FilterType::Triangle);
    let x = i64::from((STAGE_WIDTH - w) / 2);
    imageops::overlay(stage, &scaled, x, HEAD_TOP);
}

/// Largest `(w, h)` with the aspect ratio of `(src_w, src_h)` that fits
/// inside `(max_w, max_h)`. Contain fit: scaled, never stretched.
pub fn contain_fit(src_w: u32, src_h: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    if src_w == 0 || src_h == 0 || max_w == 0 || max_h == 0 {
        return (0, 0);
    }
    // u64 keeps the cross products from overflowing
    let scaled_h = u64::from(src_h) * u64::from(max_w) / u64::from(src_w);
    if scaled_h <= u64::from(max_h) {
        (max_w, scaled_h.max(1) as u32)
    } else {
        let scaled_w = u64::from(src_w) * u64::from(max_h) / u64::from(src_h);
        (scaled_w.max(1) as u32, max_h)
    }
}
