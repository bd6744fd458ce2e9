mod app;
mod audio;
mod clock;
mod config;
mod error;
mod logging;
mod stopwatch;
mod time;
mod timer;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::audio::AudioOutput;
use crate::time::SystemTimeSource;
use crate::timer::PeriodicTimer;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let (cfg, config_warnings) = config::load_config()?;
    if let Some(path) = logging::init(&cfg.logging)? {
        info!(log = %path.display(), "lapwatch starting");
    }
    for warning in &config_warnings {
        warn!("config: {}", warning);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, cfg).await;

    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!("fatal: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    info!("lapwatch exited");
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut audio = AudioOutput::from_config(&cfg.sound);
    info!(sink = audio.sink_name(), "audio configured");

    let clock_period = Duration::from_millis(cfg.timing.clock_period_ms);
    let stopwatch_period = Duration::from_millis(cfg.timing.stopwatch_period_ms);

    let mut state = AppState::new(cfg, Arc::new(SystemTimeSource::new()));
    if !audio.is_available() {
        state.audio_lost();
    }
    let size = terminal.size()?;
    state.viewport = Rect::new(0, 0, size.width, size.height);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(e)) => {
                    warn!("terminal input failed: {}", e);
                    break;
                }
                None => break,
            }
        }
    });

    let clock_timer =
        PeriodicTimer::spawn("clock", clock_period, event_tx.clone(), || AppEvent::ClockTick);
    let mut stopwatch_timer: Option<PeriodicTimer> = None;

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;
    state.dirty = false;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::PlayCue(cue) => {
                    audio.play(cue);
                    if !audio.is_available() {
                        state.audio_lost();
                    }
                }
                Action::StartStopwatchTimer { generation } => {
                    stopwatch_timer = Some(PeriodicTimer::spawn(
                        "stopwatch",
                        stopwatch_period,
                        event_tx.clone(),
                        move || AppEvent::StopwatchTick { generation },
                    ));
                }
                Action::CancelStopwatchTimer => {
                    stopwatch_timer = None;
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    if let Some(timer) = stopwatch_timer.take() {
        timer.cancel();
    }
    clock_timer.cancel();
    info!(
        elapsed_ms = state.stopwatch.elapsed_ms(),
        laps = state.stopwatch.laps().len(),
        "shutting down"
    );

    Ok(())
}
