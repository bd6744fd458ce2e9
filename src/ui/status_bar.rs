use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const KEYS: [(&str, &str); 6] = [
    ("space", "start/stop"),
    ("l", "lap"),
    ("r", "reset"),
    ("s", "sound"),
    ("t", "theme"),
    ("q", "quit"),
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        theme.status_bar().add_modifier(Modifier::BOLD),
    ));

    for (key, what) in KEYS {
        parts.push(Span::styled(format!(" {}", key), theme.status_key()));
        parts.push(Span::styled(format!(" {} ", what), theme.status_bar()));
    }

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used);
    parts.push(Span::styled(" ".repeat(remaining), theme.status_bar()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
