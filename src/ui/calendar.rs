//! Month calendar with lift highlighting and a day tooltip.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::Theme;
use super::widgets::format_weight;
use crate::data::{date_key, LiftEntry};

const WEEKDAY_HEADER: &str = " Mo  Tu  We  Th  Fr  Sa  Su";

/// One calendar row, Monday first; `None` pads days outside the month
pub type Week = [Option<NaiveDate>; 7];

/// Weeks of the month containing `date`
pub fn month_weeks(date: NaiveDate) -> Vec<Week> {
    let Some(first) = date.with_day(1) else {
        return Vec::new();
    };
    let mut weeks: Vec<Week> = Vec::new();
    let mut week: Week = [None; 7];
    let mut col = first.weekday().num_days_from_monday() as usize;

    for day in first.iter_days().take_while(|d| d.month() == first.month()) {
        week[col] = Some(day);
        col += 1;
        if col == 7 {
            weeks.push(week);
            week = [None; 7];
            col = 0;
        }
    }
    if col > 0 {
        weeks.push(week);
    }
    weeks
}

pub struct LiftCalendar<'a> {
    cursor: NaiveDate,
    selected: Option<NaiveDate>,
    today: NaiveDate,
    /// Lifts grouped by date key
    days: &'a BTreeMap<&'a str, Vec<&'a LiftEntry>>,
    theme: &'a Theme,
}

impl<'a> LiftCalendar<'a> {
    pub fn new(
        cursor: NaiveDate,
        selected: Option<NaiveDate>,
        today: NaiveDate,
        days: &'a BTreeMap<&'a str, Vec<&'a LiftEntry>>,
        theme: &'a Theme,
    ) -> Self {
        LiftCalendar {
            cursor,
            selected,
            today,
            days,
            theme,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let (border_style, title_style) = self.theme.panel_styles(focused);
        let block = Block::default()
            .title(format!(" {} ", self.cursor.format("%B %Y")))
            .borders(Borders::ALL)
            .border_style(border_style)
            .title_style(title_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let weeks = month_weeks(self.cursor);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(weeks.len() as u16 + 1), // Grid
                Constraint::Min(0),                         // Tooltip
            ])
            .split(inner);

        let mut lines = vec![Line::from(Span::styled(
            WEEKDAY_HEADER,
            Style::default().add_modifier(Modifier::DIM),
        ))];
        for week in &weeks {
            lines.push(self.week_line(week));
        }
        frame.render_widget(Paragraph::new(lines), chunks[0]);
        frame.render_widget(Paragraph::new(self.tooltip_lines()), chunks[1]);
    }

    fn week_line(&self, week: &Week) -> Line<'static> {
        let mut spans = Vec::with_capacity(14);
        for day in week {
            spans.push(Span::raw(" "));
            match day {
                Some(date) => {
                    let has_entries = self.days.contains_key(date_key(*date).as_str());
                    let style = self.theme.day_style(
                        has_entries,
                        *date == self.cursor,
                        Some(*date) == self.selected,
                        *date == self.today,
                    );
                    spans.push(Span::styled(format!("{:>2}", date.day()), style));
                }
                None => spans.push(Span::raw("  ")),
            }
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    /// Lifts logged on the cursor day
    fn tooltip_lines(&self) -> Vec<Line<'static>> {
        let key = date_key(self.cursor);
        match self.days.get(key.as_str()) {
            Some(lifts) if !lifts.is_empty() => {
                let mut lines = vec![Line::from(Span::styled(
                    format!("Lifts on {key}:"),
                    self.theme.accent_style(),
                ))];
                lines.extend(lifts.iter().map(|lift| {
                    Line::from(format!("  {} - {}kg", lift.exercise, format_weight(lift.weight)))
                }));
                lines
            }
            _ => vec![Line::from(Span::styled(key, self.theme.dimmed_style()))],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::index::group_by_date;
    use crate::ui::test_support::render_to_string;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_starting_on_monday() {
        let weeks = month_weeks(day(2024, 1, 17));
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][0], Some(day(2024, 1, 1)));
        assert_eq!(weeks[4][2], Some(day(2024, 1, 31)));
        assert_eq!(weeks[4][3], None);
    }

    #[test]
    fn test_leap_february() {
        let weeks = month_weeks(day(2024, 2, 1));
        // 1 Feb 2024 is a Thursday
        assert_eq!(weeks[0][..3], [None, None, None]);
        assert_eq!(weeks[0][3], Some(day(2024, 2, 1)));
        let days: usize = weeks.iter().map(|w| w.iter().flatten().count()).sum();
        assert_eq!(days, 29);
    }

    #[test]
    fn test_every_day_once_in_order() {
        let weeks = month_weeks(day(2023, 9, 30));
        let days: Vec<NaiveDate> = weeks.iter().flat_map(|w| w.iter().flatten().copied()).collect();
        assert_eq!(days.len(), 30);
        assert!(days.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_tooltip_lists_cursor_day_lifts() {
        let lifts = vec![
            LiftEntry {
                id: "1".into(),
                exercise: "Squat".into(),
                weight: 100.0,
                date: "2024-01-08".into(),
            },
            LiftEntry {
                id: "2".into(),
                exercise: "Bench".into(),
                weight: 72.5,
                date: "2024-01-08".into(),
            },
        ];
        let days = group_by_date(&lifts);
        let theme = Theme::default();
        let calendar = LiftCalendar::new(day(2024, 1, 8), None, day(2024, 1, 8), &days, &theme);

        let screen = render_to_string(40, 14, |frame| {
            let area = frame.area();
            calendar.render(frame, area, true)
        });
        assert!(screen.contains("January 2024"));
        assert!(screen.contains("Lifts on 2024-01-08:"));
        assert!(screen.contains("Squat - 100kg"));
        assert!(screen.contains("Bench - 72.5kg"));
    }
}
