use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::{app::state::AppState, ui::icons::IconAtlas};

/// Current-conditions panel: icon glyph, temperature and condition text.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, atlas: &IconAtlas, base: Style) {
    let Some(current) = &state.current else {
        let placeholder = Paragraph::new(state.loading_message.clone())
            .style(base)
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, area);
        return;
    };

    let glyph = current
        .icon
        .and_then(|icon| atlas.glyph(icon))
        .unwrap_or(" ");
    let description = current.description.as_deref().unwrap_or("").to_string();

    let lines = vec![
        Line::from(""),
        Line::from(glyph).style(base.add_modifier(Modifier::BOLD)),
        Line::from(format!("{}{}", current.temperature, current.scale))
            .style(base.add_modifier(Modifier::BOLD)),
        Line::from(description),
    ];

    let panel = Paragraph::new(lines).style(base).alignment(Alignment::Center);
    frame.render_widget(panel, area);
}
