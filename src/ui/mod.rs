pub mod icons;
pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};

use crate::app::state::AppState;
use icons::IconAtlas;

pub fn render(frame: &mut Frame, state: &AppState, atlas: &IconAtlas) {
    let area = frame.area();
    let base = theme::background_style(state.background);
    frame.render_widget(Block::default().style(base), area);

    if area.width < 24 || area.height < 10 {
        let warning = Paragraph::new("Display too small. Resize to at least 24x10.")
            .style(base)
            .alignment(Alignment::Center);
        frame.render_widget(warning, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(4),
        ])
        .split(area);

    render_clock_bar(frame, chunks[0], state, base);
    widgets::hero::render(frame, chunks[1], state, atlas, base);
    widgets::strip::render(frame, chunks[2], state, atlas, base);
}

fn render_clock_bar(frame: &mut Frame, area: Rect, state: &AppState, base: Style) {
    let lines = vec![
        Line::from(""),
        Line::from(state.time_slot.clone()).style(base.add_modifier(Modifier::BOLD)),
        Line::from(state.date_slot.clone()),
        Line::from(state.city_slot.clone()),
    ];
    let bar = Paragraph::new(lines).style(base).alignment(Alignment::Center);
    frame.render_widget(bar, area);
}
