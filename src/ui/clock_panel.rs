use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(" Live Clock ")
        .title_alignment(Alignment::Center)
        .title_style(theme.clock_accent().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(theme.clock_accent())
        .style(theme.panel());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let display = state.clock.display();
    let lines = vec![
        Line::from(Span::styled(display.time, theme.clock_digits())),
        Line::from(""),
        Line::from(Span::styled(display.date, theme.muted())),
    ];

    // Vertically centre the three lines.
    let top = inner.height.saturating_sub(lines.len() as u16) / 2;
    let text_area = Rect {
        y: inner.y + top,
        height: inner.height.saturating_sub(top),
        ..inner
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), text_area);
}
