use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::assets::AssetStore;
use crate::export::{Exporter, StageCapturer};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub struct RunOptions {
    pub assets_dir: PathBuf,
    pub out_path: PathBuf,
}

pub fn run(options: RunOptions) -> io::Result<()> {
    let assets = Arc::new(AssetStore::load(&options.assets_dir));
    info!(loaded = assets.len(), "assets loaded");
    let exporter = Exporter::new(
        Arc::new(StageCapturer::new(assets)),
        options.out_path,
    );

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(exporter, events.sender());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            // ratatui re-measures on the next draw
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::ExportFinished) => app.on_export_finished(),
            Ok(AppEvent::ExportFailed(message)) => app.on_export_failed(message),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
