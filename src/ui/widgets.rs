//! UI widgets for the tracker screens.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
    Frame,
};

use super::theme::Theme;
use crate::app::{Screen, StatusMessage};
use crate::data::{FoodEntry, LiftEntry};
use crate::view::LoadState;

/// Weight without a trailing `.0` for whole kilograms
pub fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 {
        format!("{weight:.0}")
    } else {
        format!("{weight}")
    }
}

/// Placeholder shown instead of entries while loading or after a failure
fn load_placeholder(load: &LoadState) -> Option<String> {
    match load {
        LoadState::Loading => Some("Loading...".to_string()),
        LoadState::Failed(reason) => Some(format!("Could not load entries: {reason}")),
        LoadState::Ready => None,
    }
}

fn centered_message<'a>(text: String, style: Style, block: Block<'a>) -> Paragraph<'a> {
    Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(block)
}

/// Screen switcher across the top
pub struct ScreenTabs<'a> {
    current: Screen,
    theme: &'a Theme,
}

impl<'a> ScreenTabs<'a> {
    pub fn new(current: Screen, theme: &'a Theme) -> Self {
        ScreenTabs { current, theme }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let spans: Vec<Span> = Screen::ALL
            .iter()
            .enumerate()
            .flat_map(|(i, screen)| {
                let style = if *screen == self.current {
                    self.theme.highlight_style()
                } else {
                    self.theme.normal_style()
                };
                vec![
                    Span::styled(format!(" [{}] ", i + 1), Style::default().add_modifier(Modifier::DIM)),
                    Span::styled(format!(" {} ", screen.title()), style),
                ]
            })
            .collect();

        let paragraph = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM).border_style(self.theme.border_style()));
        frame.render_widget(paragraph, area);
    }
}

/// Table of every lift in the session
pub struct LiftTable<'a> {
    lifts: &'a [LiftEntry],
    load: &'a LoadState,
    theme: &'a Theme,
}

impl<'a> LiftTable<'a> {
    pub fn new(lifts: &'a [LiftEntry], load: &'a LoadState, theme: &'a Theme) -> Self {
        LiftTable { lifts, load, theme }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" All Lifts ({}) ", self.lifts.len()))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title_style(self.theme.title_style());

        if let Some(message) = load_placeholder(self.load) {
            frame.render_widget(centered_message(message, self.theme.dimmed_style(), block), area);
            return;
        }
        if self.lifts.is_empty() {
            frame.render_widget(
                centered_message("No lifts recorded.".to_string(), self.theme.dimmed_style(), block),
                area,
            );
            return;
        }

        let rows = self.lifts.iter().map(|lift| {
            Row::new(vec![
                Cell::from(lift.exercise.clone()),
                Cell::from(format_weight(lift.weight)),
                Cell::from(lift.date.clone()),
            ])
        });
        let table = Table::new(
            rows,
            [
                Constraint::Percentage(45),
                Constraint::Percentage(25),
                Constraint::Percentage(30),
            ],
        )
        .header(
            Row::new(vec!["Exercise", "Weight (kg)", "Date"]).style(self.theme.title_style()),
        )
        .block(block);
        frame.render_widget(table, area);
    }
}

/// Lifts recorded on the selected calendar day
pub struct DayLifts<'a> {
    date: &'a str,
    lifts: &'a [&'a LiftEntry],
    theme: &'a Theme,
}

impl<'a> DayLifts<'a> {
    pub fn new(date: &'a str, lifts: &'a [&'a LiftEntry], theme: &'a Theme) -> Self {
        DayLifts { date, lifts, theme }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" Lifts on {} ", self.date))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title_style(self.theme.title_style());

        if self.lifts.is_empty() {
            frame.render_widget(
                centered_message("No lifts recorded.".to_string(), self.theme.dimmed_style(), block),
                area,
            );
            return;
        }

        let items: Vec<ListItem> = self
            .lifts
            .iter()
            .map(|lift| ListItem::new(format!("{} - {} kg", lift.exercise, format_weight(lift.weight))))
            .collect();
        frame.render_widget(List::new(items).block(block), area);
    }
}

/// Foods for one day with their calorie total
pub struct FoodTable<'a> {
    date: &'a str,
    foods: &'a [&'a FoodEntry],
    total_calories: i64,
    load: &'a LoadState,
    theme: &'a Theme,
}

impl<'a> FoodTable<'a> {
    pub fn new(
        date: &'a str,
        foods: &'a [&'a FoodEntry],
        total_calories: i64,
        load: &'a LoadState,
        theme: &'a Theme,
    ) -> Self {
        FoodTable {
            date,
            foods,
            total_calories,
            load,
            theme,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" Foods for {} ", self.date))
            .title_bottom(
                Line::from(Span::styled(
                    format!(" Total Calories: {} ", self.total_calories),
                    self.theme.accent_style(),
                ))
                .right_aligned(),
            )
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title_style(self.theme.title_style());

        if let Some(message) = load_placeholder(self.load) {
            frame.render_widget(centered_message(message, self.theme.dimmed_style(), block), area);
            return;
        }

        if self.foods.is_empty() {
            frame.render_widget(
                centered_message("No foods logged.".to_string(), self.theme.dimmed_style(), block),
                area,
            );
            return;
        }

        let rows = self.foods.iter().map(|food| {
            Row::new(vec![
                Cell::from(food.name.clone()),
                Cell::from(format_weight(food.amount)),
                Cell::from(format_weight(food.calories_per_100g)),
                Cell::from(food.calories.to_string()),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(40),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
            ],
        )
        .header(
            Row::new(vec!["Food", "Amount (g)", "Calories/100g", "Calories"])
                .style(self.theme.title_style()),
        )
        .block(block);
        frame.render_widget(table, area);
    }
}

/// Status bar widget
pub struct StatusBar<'a> {
    backend: &'a str,
    message: Option<&'a StatusMessage>,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(backend: &'a str, message: Option<&'a StatusMessage>, theme: &'a Theme) -> Self {
        StatusBar {
            backend,
            message,
            theme,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let line = match self.message {
            Some(StatusMessage::Error(e)) => {
                Line::from(Span::styled(format!("Error: {e}"), self.theme.error_style()))
            }
            Some(StatusMessage::Info(msg)) => Line::from(Span::styled(msg.clone(), self.theme.ok_style())),
            None => Line::from(format!(
                "fittrack-tui: {} | [i] Edit [?] Help [q] Quit",
                self.backend
            )),
        };

        let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, area);
    }
}
