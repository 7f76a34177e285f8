//! Terminal dress-up toy: layer clothing over a fixed base figure, pick
//! items per slot, apply a preset, randomize, and export the composed
//! stage as a PNG.

pub mod assets;
pub mod catalog;
pub mod compose;
pub mod export;
pub mod logging;
pub mod ui;
