//! Exercise selector bar for the progress screen.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Theme;

/// Horizontal list of exercise names with the charted one highlighted
pub struct ExerciseSelector<'a> {
    exercises: &'a [String],
    current: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> ExerciseSelector<'a> {
    pub fn new(exercises: &'a [String], current: Option<&'a str>, theme: &'a Theme) -> Self {
        ExerciseSelector {
            exercises,
            current,
            theme,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled("Exercise: ", self.theme.title_style())];
        if self.exercises.is_empty() {
            spans.push(Span::styled("none logged yet", self.theme.dimmed_style()));
        } else {
            spans.push(Span::styled("< ", Style::default().add_modifier(Modifier::DIM)));
            for name in self.exercises {
                let style = if Some(name.as_str()) == self.current {
                    self.theme.highlight_style()
                } else {
                    self.theme.normal_style()
                };
                spans.push(Span::styled(format!(" {name} "), style));
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(">", Style::default().add_modifier(Modifier::DIM)));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
