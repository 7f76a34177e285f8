pub mod app;
pub mod events;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod outfit;
pub mod render;
pub mod runtime;
pub mod save;
pub mod terminal_guard;
pub mod theme;
