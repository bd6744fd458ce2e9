use ratatui::style::{Color, Modifier, Style};

// Dark palette
const DARK_BG: Color = Color::Rgb(17, 24, 39);
const DARK_PANEL: Color = Color::Rgb(30, 41, 59);
const DARK_TEXT: Color = Color::Rgb(255, 255, 255);
const DARK_MUTED: Color = Color::Rgb(156, 163, 175);
const DARK_CYAN: Color = Color::Rgb(34, 211, 238);
const DARK_PURPLE: Color = Color::Rgb(192, 132, 252);
const DARK_GREEN: Color = Color::Rgb(74, 222, 128);
const DARK_ORANGE: Color = Color::Rgb(251, 146, 60);

// Light palette
const LIGHT_BG: Color = Color::Rgb(239, 246, 255);
const LIGHT_PANEL: Color = Color::Rgb(250, 245, 255);
const LIGHT_TEXT: Color = Color::Rgb(31, 41, 55);
const LIGHT_MUTED: Color = Color::Rgb(75, 85, 99);
const LIGHT_BLUE: Color = Color::Rgb(37, 99, 235);
const LIGHT_PURPLE: Color = Color::Rgb(147, 51, 234);
const LIGHT_GREEN: Color = Color::Rgb(22, 163, 74);
const LIGHT_ORANGE: Color = Color::Rgb(234, 88, 12);

const START_BG: Color = Color::Rgb(22, 163, 74);
const STOP_BG: Color = Color::Rgb(220, 38, 38);
const DISABLED: Color = Color::Rgb(107, 114, 128);
const RUNNING_GLOW: Color = Color::Rgb(216, 180, 254);

/// Styles for the current light/dark mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    dark: bool,
}

impl Theme {
    pub fn new(dark_mode: bool) -> Self {
        Self { dark: dark_mode }
    }

    fn pick(&self, dark: Color, light: Color) -> Color {
        if self.dark {
            dark
        } else {
            light
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn background(&self) -> Style {
        Style::default()
            .bg(self.pick(DARK_BG, LIGHT_BG))
            .fg(self.text_color())
    }

    pub fn panel(&self) -> Style {
        Style::default()
            .bg(self.pick(DARK_PANEL, LIGHT_PANEL))
            .fg(self.text_color())
    }

    pub fn text_color(&self) -> Color {
        self.pick(DARK_TEXT, LIGHT_TEXT)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.pick(DARK_MUTED, LIGHT_MUTED))
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.pick(DARK_CYAN, LIGHT_BLUE))
            .add_modifier(Modifier::BOLD)
    }

    pub fn clock_accent(&self) -> Style {
        Style::default().fg(self.pick(DARK_CYAN, LIGHT_BLUE))
    }

    pub fn stopwatch_accent(&self) -> Style {
        Style::default().fg(self.pick(DARK_PURPLE, LIGHT_PURPLE))
    }

    pub fn laps_accent(&self) -> Style {
        Style::default().fg(self.pick(DARK_GREEN, LIGHT_GREEN))
    }

    pub fn clock_digits(&self) -> Style {
        Style::default()
            .fg(self.text_color())
            .add_modifier(Modifier::BOLD)
    }

    /// The stopwatch reading brightens while running.
    pub fn stopwatch_digits(&self, running: bool) -> Style {
        let fg = if running {
            self.pick(RUNNING_GLOW, LIGHT_PURPLE)
        } else {
            self.text_color()
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    pub fn start_button(&self, running: bool) -> Style {
        let bg = if running { STOP_BG } else { START_BG };
        Style::default()
            .fg(Color::White)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn lap_button(&self, enabled: bool) -> Style {
        if enabled {
            Style::default().fg(self.pick(DARK_CYAN, LIGHT_BLUE))
        } else {
            Style::default().fg(DISABLED).add_modifier(Modifier::DIM)
        }
    }

    pub fn reset_button(&self) -> Style {
        Style::default().fg(self.pick(DARK_ORANGE, LIGHT_ORANGE))
    }

    /// Header toggle, green when on.
    pub fn toggle(&self, on: bool) -> Style {
        let fg = if on {
            self.pick(DARK_GREEN, LIGHT_GREEN)
        } else {
            DISABLED
        };
        Style::default().fg(fg)
    }

    pub fn lap_row(&self, index: usize) -> Style {
        let s = self.panel();
        if index % 2 == 1 {
            s.bg(self.pick(DARK_BG, LIGHT_BG))
        } else {
            s
        }
    }

    pub fn status_bar(&self) -> Style {
        Style::default()
            .fg(self.pick(DARK_TEXT, LIGHT_TEXT))
            .bg(self.pick(Color::DarkGray, Color::Gray))
    }

    pub fn status_key(&self) -> Style {
        self.status_bar()
            .fg(self.pick(DARK_CYAN, LIGHT_BLUE))
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_differ() {
        let dark = Theme::new(true);
        let light = Theme::new(false);
        assert_ne!(dark.background(), light.background());
        assert_ne!(dark.title(), light.title());
        assert!(dark.is_dark());
    }

    #[test]
    fn test_start_button_turns_red_when_running() {
        let t = Theme::new(true);
        assert_eq!(t.start_button(true).bg, Some(STOP_BG));
        assert_eq!(t.start_button(false).bg, Some(START_BG));
    }
}
