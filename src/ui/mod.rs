mod clock_panel;
mod digits;
mod header;
mod lap_list;
pub mod layout;
mod status_bar;
mod stopwatch_panel;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Block;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let theme = theme::Theme::new(state.prefs.dark_mode);
    frame.render_widget(Block::default().style(theme.background()), area);

    let app_layout = layout::compute_layout(area, !state.stopwatch.laps().is_empty());

    header::render(frame, &app_layout, state, &theme);
    clock_panel::render(frame, app_layout.clock_panel, state, &theme);
    stopwatch_panel::render(frame, &app_layout, state, &theme);
    if let Some(laps) = app_layout.laps {
        lap_list::render(frame, laps, state, &theme);
    }
    status_bar::render(frame, app_layout.status_bar, state, &theme);
}
