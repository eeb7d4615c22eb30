//! Entry form rendering, inline and as a modal popup.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;
use super::theme::Theme;
use crate::view::form::FormState;

const LABEL_WIDTH: usize = 20;

pub struct FormWidget<'a> {
    form: &'a FormState,
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> FormWidget<'a> {
    pub fn new(form: &'a FormState, title: &'a str, theme: &'a Theme) -> Self {
        FormWidget { form, title, theme }
    }

    fn lines(&self, focused: bool) -> Vec<Line<'static>> {
        let mut lines: Vec<Line> = self
            .form
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let editing = focused && i == self.form.focus;
                let marker = if editing { "> " } else { "  " };
                let mut value = field.value.clone();
                if editing {
                    value.push('_');
                }
                let value_style = if field.read_only {
                    self.theme.dimmed_style()
                } else if editing {
                    self.theme.highlight_style()
                } else {
                    self.theme.normal_style()
                };
                Line::from(vec![
                    Span::raw(marker),
                    Span::styled(
                        format!("{:<width$}", field.label, width = LABEL_WIDTH),
                        Style::default().fg(self.theme.title),
                    ),
                    Span::styled(value, value_style),
                ])
            })
            .collect();

        let hint = if focused {
            "Enter: save  Tab: next field  Esc: done"
        } else {
            "i: start typing"
        };
        lines.push(Line::from(Span::styled(
            hint,
            Style::default().add_modifier(Modifier::DIM),
        )));
        lines
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let (border_style, title_style) = self.theme.panel_styles(focused);
        let paragraph = Paragraph::new(self.lines(focused)).block(
            Block::default()
                .title(format!(" {} ", self.title))
                .borders(Borders::ALL)
                .border_style(border_style)
                .title_style(title_style),
        );
        frame.render_widget(paragraph, area);
    }

    /// Draw the form in a centered popup over `area`
    pub fn render_modal(&self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(60, 40, area);
        frame.render_widget(Clear, popup);
        let paragraph = Paragraph::new(self.lines(true)).block(
            Block::default()
                .title(format!(" {} ", self.title))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(self.theme.focused_border_style())
                .title_style(self.theme.title_style())
                .style(self.theme.surface_style()),
        );
        frame.render_widget(paragraph, popup);
    }
}
