use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::catalog::{self, Item, Slot};
use crate::ui::app::App;
use crate::ui::layout::{body_columns, layout_regions, slot_rows};
use crate::ui::save::SaveState;
use crate::ui::theme::{
    ACTIVE_BG, ACTIVE_FG, FOCUS_BORDER, HINT, PANEL_BORDER, STATUS_ERROR, STATUS_OK, TEXT, TITLE,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(header_widget(), header);
    frame.render_widget(Clear, body);

    let (stage_area, controls_area) = body_columns(body);
    frame.render_widget(stage_widget(app), stage_area);

    let rows = slot_rows(controls_area);
    for (slot, row) in Slot::ALL.into_iter().zip(rows) {
        frame.render_widget(slot_widget(app, slot), row);
    }

    frame.render_widget(footer_widget(app), footer);
}

fn header_widget() -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled(
            " Maduro Dress-Up ",
            Style::default().fg(TITLE).add_modifier(Modifier::BOLD),
        ),
        Span::styled("· meme fit lab", Style::default().fg(HINT)),
    ]);
    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(PANEL_BORDER)),
    )
}

/// The layer stack, listed back to front in composite order. Unresolved
/// slots show up as empty layers, mirroring what the export will contain.
fn stage_widget(app: &App) -> Paragraph<'static> {
    let outfit = app.outfit();
    let mut lines = vec![
        fixed_layer_line(1, "base", "figure"),
        fixed_layer_line(2, "head", "overlay"),
    ];
    // Same order the compositor uses: bottom, then top, then shoes.
    for (z, slot) in [(3u8, Slot::Bottom), (4, Slot::Top), (5, Slot::Shoes)] {
        lines.push(slot_layer_line(
            z,
            slot,
            catalog::find_item(slot, outfit.selected(slot)),
        ));
    }

    Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled("Stage", Style::default().fg(TITLE)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(PANEL_BORDER)),
    )
}

fn fixed_layer_line(z: u8, label: &str, name: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" z{z} "), Style::default().fg(HINT)),
        Span::styled(format!("{label:<8}"), Style::default().fg(HINT)),
        Span::styled(name.to_string(), Style::default().fg(TEXT)),
    ])
}

fn slot_layer_line(z: u8, slot: Slot, item: Option<&'static Item>) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!(" z{z} "), Style::default().fg(HINT)),
        Span::styled(format!("{slot:<8}"), Style::default().fg(HINT)),
    ];
    match item {
        Some(item) => spans.push(Span::styled(item.name, Style::default().fg(TEXT))),
        None => spans.push(Span::styled("(none)", Style::default().fg(HINT))),
    }
    Line::from(spans)
}

fn slot_widget(app: &App, slot: Slot) -> Paragraph<'static> {
    let selected = app.outfit().selected(slot);
    let lines: Vec<Line<'static>> = catalog::catalog(slot)
        .iter()
        .enumerate()
        .map(|(idx, item)| item_line(idx, item, item.id == selected))
        .collect();

    let border = if app.focus() == slot {
        Style::default().fg(FOCUS_BORDER)
    } else {
        Style::default().fg(PANEL_BORDER)
    };
    Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(slot.title(), Style::default().fg(TITLE)))
            .borders(Borders::ALL)
            .border_style(border),
    )
}

fn item_line(idx: usize, item: &'static Item, active: bool) -> Line<'static> {
    let style = if active {
        Style::default().fg(ACTIVE_FG).bg(ACTIVE_BG)
    } else {
        Style::default().fg(TEXT)
    };
    Line::from(vec![
        Span::styled(format!(" [{}] ", idx + 1), Style::default().fg(HINT)),
        Span::styled(format!("{:<9}", item.id), Style::default().fg(HINT)),
        Span::styled(format!(" {} ", item.name), style),
    ])
}

fn footer_widget(app: &App) -> Paragraph<'static> {
    let mut spans = vec![Span::styled(
        " tab/↑↓ slot  ←→ cycle  1-3 pick  p preset  r random  q quit  ",
        Style::default().fg(HINT),
    )];
    spans.push(match app.save() {
        SaveState::Idle => Span::styled("[s] Save PNG", Style::default().fg(STATUS_OK)),
        SaveState::Saving => Span::styled(
            "Saving...",
            Style::default().fg(TITLE).add_modifier(Modifier::BOLD),
        ),
        SaveState::Failed { message } => Span::styled(
            format!("Save failed: {message}"),
            Style::default().fg(STATUS_ERROR),
        ),
    });
    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(PANEL_BORDER)),
    )
}
