//! Help overlay widget showing keyboard shortcuts.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::centered_rect;
use super::theme::Theme;

const DESCRIPTION: &str = "Log lifts and meals, browse them on a calendar, and chart your progress per exercise.";

const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Screens",
        &[
            ("Tab / Shift+Tab", "Next / previous screen"),
            ("1 / 2 / 3", "Home / Progress / Nutrition"),
        ],
    ),
    (
        "Forms",
        &[
            ("i", "Start typing in the form"),
            ("Tab / ↓", "Next field"),
            ("Shift+Tab / ↑", "Previous field"),
            ("Enter", "Save entry"),
            ("Esc", "Leave the form"),
        ],
    ),
    (
        "Home",
        &[
            ("← → ↑ ↓ / hjkl", "Move calendar cursor"),
            ("PgUp / PgDn", "Previous / next month"),
            ("Enter", "Show lifts for the day"),
            ("a", "Add lift on the cursor day"),
            ("t", "Jump to today"),
        ],
    ),
    (
        "Progress",
        &[("← / →", "Previous / next exercise")],
    ),
    (
        "Nutrition",
        &[("[ / ]", "Previous / next day"), ("t", "Jump to today")],
    ),
    (
        "General",
        &[("r", "Reload entries"), ("?", "Toggle this help"), ("q", "Quit")],
    ),
];

/// Help overlay showing all keyboard shortcuts
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        HelpOverlay { theme }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(65, 85, area);
        frame.render_widget(Clear, popup_area);

        let mut lines: Vec<Line> = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {DESCRIPTION}"),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
        ];

        for (section, items) in SHORTCUTS {
            lines.push(Line::from(Span::styled(
                format!("  {section} "),
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::UNDERLINED),
            )));
            for (key, desc) in *items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("{key:<18}"), Style::default().fg(self.theme.title)),
                    Span::raw(*desc),
                ]));
            }
            lines.push(Line::from(""));
        }

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" fittrack-tui Help ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(self.theme.border_style())
                    .title_style(self.theme.title_style())
                    .style(self.theme.surface_style()),
            )
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false })
            .style(self.theme.surface_style());

        frame.render_widget(paragraph, popup_area);
    }
}
