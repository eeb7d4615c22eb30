//! Theme configuration for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the application
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    pub border: Color,
    pub title: Color,
    pub accent: Color,
    pub error: Color,
    pub ok: Color,
    /// Background of calendar days that have entries
    pub marked_day_bg: Color,
    pub chart_line: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            bg: Color::Reset,
            fg: Color::White,
            highlight_bg: Color::Rgb(60, 60, 80),
            highlight_fg: Color::White,
            border: Color::Rgb(100, 100, 120),
            title: Color::Cyan,
            accent: Color::LightBlue,
            error: Color::Red,
            ok: Color::Green,
            marked_day_bg: Color::Rgb(2, 136, 209),
            chart_line: Color::Rgb(75, 192, 192),
        }
    }
}

impl Theme {
    /// Base surface style used to paint widget backgrounds
    pub fn surface_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Convenience helper returning (border_style, title_style) for focus state
    pub fn panel_styles(&self, focused: bool) -> (Style, Style) {
        if focused {
            (self.focused_border_style(), self.focused_border_style())
        } else {
            (self.border_style(), self.title_style())
        }
    }

    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.highlight_fg)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get style for focused panel borders (distinct from normal borders)
    pub fn focused_border_style(&self) -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.title)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dimmed_style(&self) -> Style {
        Style::default()
            .fg(self.border)
            .add_modifier(Modifier::DIM)
    }

    pub fn accent_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn ok_style(&self) -> Style {
        Style::default().fg(self.ok)
    }

    /// Style for one calendar day cell.
    ///
    /// The cursor wins over every other state, then selection, then days
    /// that have entries.
    pub fn day_style(&self, has_entries: bool, is_cursor: bool, is_selected: bool, is_today: bool) -> Style {
        let mut style = if is_cursor {
            self.highlight_style().fg(Color::Yellow)
        } else if is_selected {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else if has_entries {
            Style::default().fg(Color::White).bg(self.marked_day_bg)
        } else {
            self.normal_style()
        };
        if is_today {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }
}
