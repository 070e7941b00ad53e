use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::{app::state::AppState, ui::icons::IconAtlas};

/// Forecast strip: one centered cell per upcoming sample.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, atlas: &IconAtlas, base: Style) {
    if state.strip.is_empty() {
        return;
    }

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, state.strip.len() as u32);
            state.strip.len()
        ])
        .split(area);

    for (slot, cell) in state.strip.iter().zip(cells.iter()) {
        let glyph = slot.icon.and_then(|icon| atlas.glyph(icon)).unwrap_or(" ");
        let lines = vec![
            Line::from(slot.label.clone()),
            Line::from(glyph),
            Line::from(format!("{}°", slot.temperature)),
        ];
        let widget = Paragraph::new(lines).style(base).alignment(Alignment::Center);
        frame.render_widget(widget, *cell);
    }
}
