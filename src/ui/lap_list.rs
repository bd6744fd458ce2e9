use crate::app::state::AppState;
use crate::stopwatch::format_elapsed;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, List, ListItem, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

/// Index range of the laps to show, oldest first.
pub fn visible_range(total: usize, rows: usize, scroll_offset: usize) -> std::ops::Range<usize> {
    let end = total.saturating_sub(scroll_offset);
    let start = end.saturating_sub(rows);
    start..end
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let laps = state.stopwatch.laps();
    let splits: Vec<u64> = state.stopwatch.splits().collect();

    let block = Block::default()
        .title(format!(" Lap Times ({}) ", laps.len()))
        .title_style(theme.laps_accent().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(theme.laps_accent())
        .style(theme.panel());

    let rows = area.height.saturating_sub(2) as usize;
    let range = visible_range(laps.len(), rows, state.lap_scroll_offset);

    let items: Vec<ListItem> = range
        .clone()
        .map(|i| {
            ListItem::new(Line::from(vec![
                Span::styled(format!(" Lap {:<4}", i + 1), theme.muted()),
                Span::styled(format!("{:>12}", format_elapsed(laps[i])), theme.clock_digits()),
                Span::styled(format!("   +{}", format_elapsed(splits[i])), theme.muted()),
            ]))
            .style(theme.lap_row(i))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);

    if laps.len() > rows {
        let mut scrollbar_state = ScrollbarState::new(laps.len().saturating_sub(rows))
            .position(range.start);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_range_follows_tail() {
        assert_eq!(visible_range(3, 10, 0), 0..3);
        assert_eq!(visible_range(30, 10, 0), 20..30);
        assert_eq!(visible_range(30, 10, 5), 15..25);
        assert_eq!(visible_range(30, 10, 20), 0..10);
        assert_eq!(visible_range(0, 10, 0), 0..0);
    }
}
