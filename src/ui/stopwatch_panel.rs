use crate::app::state::AppState;
use crate::stopwatch::format_elapsed;
use crate::ui::digits;
use crate::ui::layout::AppLayout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render(frame: &mut Frame, layout: &AppLayout, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(" Stopwatch ")
        .title_alignment(Alignment::Center)
        .title_style(theme.stopwatch_accent().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(theme.stopwatch_accent())
        .style(theme.panel());
    frame.render_widget(block, layout.stopwatch_panel);

    let running = state.stopwatch.is_running();
    let reading = format_elapsed(state.stopwatch.elapsed_ms());
    render_reading(
        frame,
        layout.stopwatch_display,
        &reading,
        state,
        theme.stopwatch_digits(running),
    );

    let start_label = if running { "■ Stop" } else { "▶ Start" };
    render_button(
        frame,
        layout.start_button,
        start_label,
        theme.start_button(running),
        BorderType::Thick,
    );
    render_button(
        frame,
        layout.lap_button,
        "Lap",
        theme.lap_button(running),
        BorderType::Rounded,
    );
    render_button(
        frame,
        layout.reset_button,
        "↺ Reset",
        theme.reset_button(),
        BorderType::Rounded,
    );
}

fn render_reading(frame: &mut Frame, area: Rect, reading: &str, state: &AppState, style: Style) {
    let fits = area.width >= digits::width(reading) && area.height as usize >= digits::HEIGHT;
    let rows = if state.config.ui.big_digits && fits {
        digits::render(reading)
    } else {
        None
    };

    let lines: Vec<Line> = match rows {
        Some(rows) => rows
            .into_iter()
            .map(|row| Line::from(Span::styled(row, style)))
            .collect(),
        None => vec![Line::from(Span::styled(reading.to_string(), style))],
    };

    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let text_area = Rect {
        y: area.y + top,
        height: area.height.saturating_sub(top),
        ..area
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), text_area);
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, style: Style, border: BorderType) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border)
        .border_style(style)
        .style(style);
    frame.render_widget(
        Paragraph::new(label).alignment(Alignment::Center).block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::time::ManualTimeSource;
    use crate::ui::layout::compute_layout;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;

    fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let layout = compute_layout(Rect::new(0, 0, width, height), false);
        let theme = Theme::new(true);
        terminal.draw(|f| render(f, &layout, state, &theme)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_start_label_follows_state() {
        let mut state = AppState::new(AppConfig::default(), Arc::new(ManualTimeSource::new()));
        assert!(draw(&state, 100, 20).contains("Start"));
        state.stopwatch.toggle_run(0);
        let text = draw(&state, 100, 20);
        assert!(text.contains("■ Stop"));
        assert!(!text.contains("Start"));
    }

    #[test]
    fn test_plain_reading_when_narrow() {
        let mut state = AppState::new(AppConfig::default(), Arc::new(ManualTimeSource::new()));
        state.stopwatch.toggle_run(0);
        state.stopwatch.tick(61_234);
        // 50 columns leaves each panel too narrow for block digits.
        assert!(draw(&state, 50, 20).contains("01:01.23"));
        assert!(!draw(&state, 100, 20).contains("01:01.23"));
    }
}
