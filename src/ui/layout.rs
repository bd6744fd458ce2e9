use ratatui::layout::{Constraint, Direction, Flex, Layout, Position, Rect};
use ratatui::widgets::{Block, Borders};

/// Height of the clock/stopwatch row: borders, block digits, a gap, buttons.
pub const BODY_HEIGHT: u16 = 11;

pub const START_BUTTON_WIDTH: u16 = 10;
pub const LAP_BUTTON_WIDTH: u16 = 9;
pub const RESET_BUTTON_WIDTH: u16 = 11;
pub const SOUND_BUTTON_WIDTH: u16 = 11;
pub const THEME_BUTTON_WIDTH: u16 = 10;

/// Clickable controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    StartStop,
    Lap,
    Reset,
    Sound,
    Theme,
}

pub struct AppLayout {
    pub header: Rect,
    pub sound_button: Rect,
    pub theme_button: Rect,
    pub clock_panel: Rect,
    pub stopwatch_panel: Rect,
    pub stopwatch_display: Rect,
    pub start_button: Rect,
    pub lap_button: Rect,
    pub reset_button: Rect,
    /// Only present while there are laps to show.
    pub laps: Option<Rect>,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, show_laps: bool) -> AppLayout {
    // Main vertical split: header | panels | laps | status bar
    let body = if show_laps {
        Constraint::Length(BODY_HEIGHT)
    } else {
        Constraint::Min(BODY_HEIGHT)
    };
    let mut constraints = vec![Constraint::Length(3), body];
    if show_laps {
        constraints.push(Constraint::Min(3));
    }
    constraints.push(Constraint::Length(1));

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let header = main_chunks[0];
    let body = main_chunks[1];
    let laps = show_laps.then(|| main_chunks[2]);
    let status_bar = main_chunks[main_chunks.len() - 1];

    // Header: title | sound | gap | theme
    let header_inner = Block::default().borders(Borders::ALL).inner(header);
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(SOUND_BUTTON_WIDTH),
            Constraint::Length(1),
            Constraint::Length(THEME_BUTTON_WIDTH),
        ])
        .split(header_inner);

    // Horizontal: clock | gap | stopwatch
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body);

    let clock_panel = panels[0];
    let stopwatch_panel = panels[1];

    // Stopwatch panel: reading | buttons
    let stopwatch_inner = Block::default().borders(Borders::ALL).inner(stopwatch_panel);
    let stopwatch_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(stopwatch_inner);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .spacing(2)
        .constraints([
            Constraint::Length(START_BUTTON_WIDTH),
            Constraint::Length(LAP_BUTTON_WIDTH),
            Constraint::Length(RESET_BUTTON_WIDTH),
        ])
        .split(stopwatch_chunks[1]);

    AppLayout {
        header,
        sound_button: header_chunks[1],
        theme_button: header_chunks[3],
        clock_panel,
        stopwatch_panel,
        stopwatch_display: stopwatch_chunks[0],
        start_button: buttons[0],
        lap_button: buttons[1],
        reset_button: buttons[2],
        laps,
        status_bar,
    }
}

/// Which control, if any, sits under the terminal cell `(column, row)`.
pub fn hit_test(layout: &AppLayout, column: u16, row: u16) -> Option<Control> {
    let pos = Position::new(column, row);
    [
        (layout.start_button, Control::StartStop),
        (layout.lap_button, Control::Lap),
        (layout.reset_button, Control::Reset),
        (layout.sound_button, Control::Sound),
        (layout.theme_button, Control::Theme),
    ]
    .into_iter()
    .find(|(rect, _)| rect.contains(pos))
    .map(|(_, control)| control)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center(r: Rect) -> (u16, u16) {
        (r.x + r.width / 2, r.y + r.height / 2)
    }

    #[test]
    fn test_laps_panel_only_with_laps() {
        let area = Rect::new(0, 0, 100, 30);
        assert!(compute_layout(area, false).laps.is_none());
        let l = compute_layout(area, true);
        let laps = l.laps.unwrap();
        assert_eq!(l.header.height, 3);
        assert_eq!(l.stopwatch_panel.height, BODY_HEIGHT);
        assert_eq!(l.status_bar.y, 29);
        assert_eq!(laps.y + laps.height, l.status_bar.y);
    }

    #[test]
    fn test_buttons_inside_stopwatch_panel() {
        let l = compute_layout(Rect::new(0, 0, 100, 30), false);
        for b in [l.start_button, l.lap_button, l.reset_button] {
            assert_eq!(b.height, 3);
            assert!(l.stopwatch_panel.contains(Position::new(b.x, b.y)));
            assert!(l.stopwatch_panel.contains(Position::new(b.right() - 1, b.bottom() - 1)));
        }
        assert!(l.start_button.right() < l.lap_button.x);
        assert!(l.lap_button.right() < l.reset_button.x);
    }

    #[test]
    fn test_hit_test() {
        let l = compute_layout(Rect::new(0, 0, 100, 30), true);
        let (x, y) = center(l.start_button);
        assert_eq!(hit_test(&l, x, y), Some(Control::StartStop));
        let (x, y) = center(l.lap_button);
        assert_eq!(hit_test(&l, x, y), Some(Control::Lap));
        let (x, y) = center(l.reset_button);
        assert_eq!(hit_test(&l, x, y), Some(Control::Reset));
        let (x, y) = center(l.sound_button);
        assert_eq!(hit_test(&l, x, y), Some(Control::Sound));
        let (x, y) = center(l.theme_button);
        assert_eq!(hit_test(&l, x, y), Some(Control::Theme));
        let (x, y) = center(l.clock_panel);
        assert_eq!(hit_test(&l, x, y), None);
    }
}
