use crate::app::state::AppState;
use crate::ui::layout::AppLayout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const TITLE: &str = "⏱ lapwatch";

pub fn render(frame: &mut Frame, layout: &AppLayout, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.muted())
        .style(theme.background());
    let inner = block.inner(layout.header);
    frame.render_widget(block, layout.header);

    let title_area = Rect {
        width: layout.sound_button.x.saturating_sub(inner.x),
        ..inner
    };
    frame.render_widget(Paragraph::new(Span::styled(TITLE, theme.title())), title_area);

    let sound = if state.prefs.sound_enabled {
        "[♪ sound]"
    } else {
        "[♪ muted]"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(sound, theme.toggle(state.prefs.sound_enabled)))
            .alignment(Alignment::Right),
        layout.sound_button,
    );

    // Shows the mode a click switches to.
    let mode = if theme.is_dark() {
        "[☀ light]"
    } else {
        "[☾ dark]"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(mode, theme.clock_accent())).alignment(Alignment::Right),
        layout.theme_button,
    );
}
