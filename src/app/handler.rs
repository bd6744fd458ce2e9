use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::audio::Cue;
use crate::ui::layout::{self, Control};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::debug;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::ClockTick => {
            let now = state.time.wall_now();
            state.clock.tick(now);
            state.dirty = true;
            vec![]
        }
        AppEvent::StopwatchTick { generation } => {
            // Ticks queued before a stop carry an old generation.
            if generation == state.tick_generation && state.stopwatch.is_running() {
                let now = state.time.now_ms();
                state.stopwatch.tick(now);
                state.dirty = true;
            }
            vec![]
        }
    }
}

/// Apply a control press, whether it came from a key or a click.
pub fn press(state: &mut AppState, control: Control) -> Vec<Action> {
    let was_running = state.stopwatch.is_running();
    let mut actions = Vec::new();
    state.dirty = true;

    match control {
        Control::StartStop => {
            let now = state.time.now_ms();
            let cue = state.stopwatch.toggle_run(now);
            push_cue(state, &mut actions, cue);
        }
        Control::Lap => {
            if let Some(cue) = state.stopwatch.lap() {
                state.lap_scroll_offset = 0;
                push_cue(state, &mut actions, cue);
            }
        }
        Control::Reset => {
            let cue = state.stopwatch.reset();
            state.lap_scroll_offset = 0;
            push_cue(state, &mut actions, cue);
        }
        Control::Sound => {
            state.prefs.sound_enabled = !state.prefs.sound_enabled;
        }
        Control::Theme => {
            state.prefs.dark_mode = !state.prefs.dark_mode;
        }
    }

    if let Some(action) = timer_transition(state, was_running) {
        actions.push(action);
    }
    debug!(?control, elapsed_ms = state.stopwatch.elapsed_ms(), "control pressed");
    actions
}

fn push_cue(state: &AppState, actions: &mut Vec<Action>, cue: Cue) {
    if state.prefs.sound_enabled {
        actions.push(Action::PlayCue(cue));
    }
}

/// The tick timer lives exactly as long as the stopwatch runs.
fn timer_transition(state: &mut AppState, was_running: bool) -> Option<Action> {
    match (was_running, state.stopwatch.is_running()) {
        (false, true) => {
            state.tick_generation += 1;
            Some(Action::StartStopwatchTimer {
                generation: state.tick_generation,
            })
        }
        (true, false) => {
            state.tick_generation += 1;
            Some(Action::CancelStopwatchTimer)
        }
        _ => None,
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            state.lap_scroll_offset = state.lap_scroll_offset.min(state.max_lap_scroll());
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => press(state, Control::StartStop),
        KeyCode::Char('l') | KeyCode::Char('L') => press(state, Control::Lap),
        KeyCode::Char('r') | KeyCode::Char('R') => press(state, Control::Reset),
        KeyCode::Char('s') | KeyCode::Char('S') => press(state, Control::Sound),
        KeyCode::Char('t') | KeyCode::Char('T') => press(state, Control::Theme),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Up => {
            state.scroll_laps_up(1);
            vec![]
        }
        KeyCode::Down => {
            state.scroll_laps_down(1);
            vec![]
        }
        KeyCode::PageUp => {
            state.scroll_laps_up(state.visible_lap_rows().max(1));
            vec![]
        }
        KeyCode::PageDown => {
            state.scroll_laps_down(state.visible_lap_rows().max(1));
            vec![]
        }
        KeyCode::Home => {
            state.scroll_laps_up(usize::MAX);
            vec![]
        }
        KeyCode::End => {
            state.lap_scroll_offset = 0;
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let layout = state.layout();
            match layout::hit_test(&layout, mouse.column, mouse.row) {
                // A stopped stopwatch renders Lap disabled.
                Some(Control::Lap) if !state.stopwatch.is_running() => vec![],
                Some(control) => press(state, control),
                None => vec![],
            }
        }
        MouseEventKind::ScrollUp => {
            state.scroll_laps_up(1);
            vec![]
        }
        MouseEventKind::ScrollDown => {
            state.scroll_laps_down(1);
            vec![]
        }
        _ => vec![],
    }
}
